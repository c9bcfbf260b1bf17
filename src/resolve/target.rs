//! Classification outcome of a destination against the site.

use crate::core::UrlPath;
use crate::store::{Page, ResourceRef};

/// What a destination turned out to point at.
#[derive(Debug, Clone, PartialEq)]
pub enum ResolvedTarget<'a> {
    /// Absolute URL; the site is not consulted.
    External(String),
    /// A page of the site.
    Page(&'a Page),
    /// Resource owned by the rendering document.
    PageResource(&'a ResourceRef),
    /// Resource of the rendering document's section.
    SectionResource(&'a ResourceRef),
    /// Site-global resource.
    GlobalResource(&'a ResourceRef),
    /// Bare `#fragment`, pointing into the rendering document itself.
    SamePageFragment,
    /// Nothing matched.
    Unresolved,
}

impl<'a> ResolvedTarget<'a> {
    pub fn is_resolved(&self) -> bool {
        !matches!(self, Self::Unresolved)
    }

    /// Canonical link of a resource target, if this is one.
    pub fn rel_link(&self) -> Option<&'a UrlPath> {
        match self {
            Self::PageResource(r) | Self::SectionResource(r) | Self::GlobalResource(r) => {
                Some(r.rel_link())
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolve::dest::classify;
    use crate::resolve::{LinkContext, ParsedDestination};
    use crate::store::SiteIndex;

    #[test]
    fn test_is_resolved() {
        let page = Page::new("docs/foo.md", "/docs/foo/");
        assert!(ResolvedTarget::Page(&page).is_resolved());
        assert!(ResolvedTarget::SamePageFragment.is_resolved());
        assert!(!ResolvedTarget::Unresolved.is_resolved());
    }

    #[test]
    fn test_rel_link_only_for_resources() {
        let res = ResourceRef::new("/docs/diagram.svg");
        assert_eq!(
            ResolvedTarget::SectionResource(&res).rel_link().unwrap(),
            "/docs/diagram.svg"
        );

        let page = Page::new("docs/foo.md", "/docs/foo/");
        assert!(ResolvedTarget::Page(&page).rel_link().is_none());
        assert!(ResolvedTarget::Unresolved.rel_link().is_none());
    }

    #[test]
    fn test_classified_resource_exposes_rel_link() {
        let mut index = SiteIndex::new();
        index.register_global_resource("logo.svg", "/logo.svg");
        let page = Page::new("docs/current.md", "/docs/current/");
        let ctx = LinkContext::for_page(&page);

        let target = classify(&ParsedDestination::parse("logo.svg"), &ctx, &index);
        assert!(target.is_resolved());
        assert_eq!(target.rel_link().unwrap(), "/logo.svg");

        let target = classify(&ParsedDestination::parse("missing.svg"), &ctx, &index);
        assert!(!target.is_resolved());
        assert!(target.rel_link().is_none());
    }
}
