//! Destination resolution for the link render hook.
//!
//! [`resolve`] turns an as-written destination into the attributes of an
//! `<a>` element. Control flow:
//!
//! 1. Parse the destination ([`ParsedDestination`]).
//! 2. Classify it against the site ([`ResolvedTarget`]): absolute URLs
//!    short-circuit; relative paths try page, then page resource, then
//!    section resource (branch bundles only), then global resource;
//!    bare fragments point at the containing document.
//! 3. Validate the fragment against the target's heading IDs.
//! 4. Assemble attributes; anything unresolved goes through the policy
//!    gate and still gets the raw string as `href`.
//!
//! The page-before-resource order is deliberate: pages are what authors
//! link to most, and a page and a resource sharing a path is an
//! authoring conflict better surfaced by the page winning consistently.

mod attrs;
mod context;
mod dest;
mod fragment;
mod target;

pub use attrs::AnchorAttributes;
pub use context::{LinkContext, RawDestination, RenderOptions};
pub use dest::resolve;
pub use fragment::validate_fragment;
pub use target::ResolvedTarget;

pub(crate) use crate::core::ParsedDestination;
