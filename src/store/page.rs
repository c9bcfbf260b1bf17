//! Page model: permalink, bundle kind, heading IDs, owned resources.

use rustc_hash::FxHashMap;

use crate::core::UrlPath;

/// Bundle classification of a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BundleKind {
    /// Regular page or branch bundle; may reach into its section's
    /// resources when its own don't match.
    #[default]
    Branch,
    /// Terminal content unit; never falls back to section resources.
    Leaf,
}

impl BundleKind {
    #[inline]
    pub fn is_leaf(self) -> bool {
        matches!(self, Self::Leaf)
    }
}

/// A non-page asset addressable through a canonical relative link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceRef {
    rel_link: UrlPath,
}

impl ResourceRef {
    pub fn new(rel_link: &str) -> Self {
        Self {
            rel_link: UrlPath::from_asset(rel_link),
        }
    }

    /// Canonical relative link of the resource.
    #[inline]
    pub fn rel_link(&self) -> &UrlPath {
        &self.rel_link
    }
}

/// An addressable document in the content tree.
///
/// Carries everything link resolution needs to know about a document:
/// where it lives, what kind of bundle it is, which heading anchors it
/// exposes, and which resources it owns. Immutable during resolution.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Page {
    /// Content source path (e.g. `docs/foo.md`), used in diagnostics.
    content_path: String,
    /// Canonical relative permalink (e.g. `/docs/foo/`).
    rel_permalink: UrlPath,
    /// Bundle classification.
    kind: BundleKind,
    /// Path of the enclosing section.
    section: UrlPath,
    /// Heading identifier -> number of headings claiming it.
    heading_ids: FxHashMap<String, usize>,
    /// Page-owned resources keyed by as-written lookup path.
    resources: FxHashMap<String, ResourceRef>,
}

impl Page {
    /// Create a page.
    ///
    /// The enclosing section defaults to the permalink's parent; override
    /// with [`with_section`](Self::with_section) when they differ.
    pub fn new(content_path: impl Into<String>, rel_permalink: &str) -> Self {
        let rel_permalink = UrlPath::from_page(rel_permalink);
        let section = rel_permalink.parent().unwrap_or_default();
        Self {
            content_path: content_path.into(),
            rel_permalink,
            section,
            ..Default::default()
        }
    }

    pub fn with_kind(mut self, kind: BundleKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn with_section(mut self, section: &str) -> Self {
        self.section = UrlPath::from_page(section);
        self
    }

    /// Add heading identifiers; repeated identifiers raise their count.
    pub fn with_heading_ids<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for id in ids {
            *self.heading_ids.entry(id.into()).or_insert(0) += 1;
        }
        self
    }

    /// Add a page-owned resource under its lookup path.
    pub fn with_resource(mut self, path: &str, rel_link: &str) -> Self {
        self.resources
            .insert(path.to_string(), ResourceRef::new(rel_link));
        self
    }

    #[inline]
    pub fn content_path(&self) -> &str {
        &self.content_path
    }

    #[inline]
    pub fn rel_permalink(&self) -> &UrlPath {
        &self.rel_permalink
    }

    #[inline]
    pub fn kind(&self) -> BundleKind {
        self.kind
    }

    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.kind.is_leaf()
    }

    #[inline]
    pub fn section(&self) -> &UrlPath {
        &self.section
    }

    /// Check if a heading identifier exists on this page.
    pub fn contains_id(&self, id: &str) -> bool {
        self.heading_ids.contains_key(id)
    }

    /// Number of headings claiming an identifier (0 when absent).
    pub fn id_count(&self, id: &str) -> usize {
        self.heading_ids.get(id).copied().unwrap_or(0)
    }

    /// Look up a page-owned resource by its as-written path.
    pub fn resource_by_path(&self, path: &str) -> Option<&ResourceRef> {
        self.resources.get(path)
    }
}
