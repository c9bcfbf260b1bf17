//! Page and resource stores - the collaborator surface of the resolver.
//!
//! The resolver only ever reads: lookups take `&self` and resolution
//! holds no mutable state, so concurrent resolution over a shared store
//! is safe as long as the store tolerates concurrent reads.

mod index;
mod page;

pub use index::SiteIndex;
pub use page::{BundleKind, Page, ResourceRef};

use crate::core::UrlPath;

/// Lookup of pages by logical path.
///
/// Lookups are exact. The resolver itself retries with a single trailing
/// slash trimmed, so `/docs/foo` and `/docs/foo/` reach the same page.
pub trait PageStore {
    fn page_by_path(&self, path: &str) -> Option<&Page>;
}

/// Lookup of non-page resources, in section and site-global scope.
///
/// Page-scoped resources live on [`Page`] itself; these two scopes are
/// the fallbacks behind it.
pub trait ResourceStore {
    /// Resource of the given section, by as-written path.
    fn section_resource(&self, section: &UrlPath, path: &str) -> Option<&ResourceRef>;

    /// Site-global resource, by as-written path.
    fn global_resource(&self, path: &str) -> Option<&ResourceRef>;
}
