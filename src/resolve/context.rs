//! Inputs of a single resolution: the rendering position, the link as
//! written, and the run-level options.

use crate::config::{ErrorLevel, LinksConfig};
use crate::store::Page;

/// The position a link is rendered from.
///
/// `page` is the document whose source contains the link and is named in
/// diagnostics. `owner` is the document whose permalink, section and
/// resources anchor relative lookups. They coincide except when content
/// is transcluded, where `owner` stays the outer document.
#[derive(Debug, Clone, Copy)]
pub struct LinkContext<'a> {
    pub page: &'a Page,
    pub owner: &'a Page,
}

impl<'a> LinkContext<'a> {
    /// Context for a link rendered directly inside its own document.
    pub fn for_page(page: &'a Page) -> Self {
        Self { page, owner: page }
    }

    /// Context for transcluded content: `page` holds the link's source,
    /// `owner` anchors its resolution.
    pub fn new(page: &'a Page, owner: &'a Page) -> Self {
        Self { page, owner }
    }
}

/// A hyperlink as written in the source document.
#[derive(Debug, Clone, Copy)]
pub struct RawDestination<'a> {
    /// Destination string, exactly as authored.
    pub destination: &'a str,
    /// Pre-rendered inner text of the anchor.
    pub text: &'a str,
    /// Optional title, raw (escaped during attribute assembly).
    pub title: &'a str,
}

impl<'a> RawDestination<'a> {
    pub fn new(destination: &'a str, text: &'a str) -> Self {
        Self {
            destination,
            text,
            title: "",
        }
    }

    pub fn with_title(mut self, title: &'a str) -> Self {
        self.title = title;
        self
    }
}

/// Run-level options threaded through every resolution of a pass.
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderOptions {
    /// Severity of broken-link diagnostics.
    pub error_level: ErrorLevel,
    /// Flag unresolved anchors with `class="broken"`.
    pub highlight_broken: bool,
    /// Whether this is a development-mode run. Broken-link highlighting
    /// never reaches production output.
    pub dev_server: bool,
}

impl RenderOptions {
    pub fn from_config(links: &LinksConfig, dev_server: bool) -> Self {
        Self {
            error_level: links.error_level,
            highlight_broken: links.highlight_broken,
            dev_server,
        }
    }
}
