//! Deployment-aware link resolution for render hooks.
//!
//! When a site is deployed under a non-root base path, embedding link
//! destinations as written in the source documents produces broken links.
//! This crate resolves one link at a time: it classifies the raw
//! destination (external, internal page, internal resource, same-page
//! fragment), resolves it against the page and resource stores, validates
//! heading-anchor fragments, and produces the final anchor attribute set.
//!
//! Unresolved links are routed through a single configurable policy gate:
//! `ignore` (default) renders the raw destination untouched, `warning`
//! logs and continues, `error` aborts the whole rendering pass.
//!
//! # Example
//!
//! ```
//! use linkhook::{
//!     LinkContext, MemorySink, Page, RawDestination, RenderOptions, SiteIndex, resolve,
//! };
//!
//! let mut site = SiteIndex::new();
//! site.register_page(
//!     "/docs/foo",
//!     Page::new("docs/foo.md", "/docs/foo/").with_heading_ids(["intro", "install"]),
//! );
//!
//! let current = Page::new("docs/current.md", "/docs/current/");
//! let ctx = LinkContext::for_page(&current);
//! let sink = MemorySink::new();
//!
//! let attrs = resolve(
//!     &ctx,
//!     &RawDestination::new("/docs/foo#install", "Install"),
//!     &RenderOptions::default(),
//!     &site,
//!     &sink,
//! )
//! .unwrap();
//!
//! assert_eq!(attrs.href(), "/docs/foo/#install");
//! assert!(sink.is_empty());
//! ```

pub mod config;
pub mod core;
pub mod diag;
pub mod logger;
pub mod resolve;
pub mod store;
pub mod utils;

pub use crate::core::{ParsedDestination, UrlPath};
pub use config::{ConfigError, ErrorLevel, LinksConfig, RenderConfig};
pub use diag::{BrokenLink, DiagnosticSink, LINK_HOOK, LogSink, MemorySink, RenderAbort};
pub use resolve::{
    AnchorAttributes, LinkContext, RawDestination, RenderOptions, ResolvedTarget, resolve,
    validate_fragment,
};
pub use store::{BundleKind, Page, PageStore, ResourceRef, ResourceStore, SiteIndex};
