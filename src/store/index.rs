//! In-memory site index implementing the store traits.
//!
//! A flat map per scope: pages keyed by logical path, section resources
//! keyed by section then path, global resources keyed by path. Built
//! once before rendering, read-only afterwards.

use rustc_hash::FxHashMap;

use crate::core::UrlPath;

use super::{Page, PageStore, ResourceRef, ResourceStore};

/// Site-wide lookup index for pages and resources.
#[derive(Debug, Default)]
pub struct SiteIndex {
    /// Pages keyed by logical lookup path, exactly as registered.
    pages: FxHashMap<String, Page>,
    /// Section path -> resources of that section.
    section_resources: FxHashMap<UrlPath, FxHashMap<String, ResourceRef>>,
    /// Site-global resources.
    global_resources: FxHashMap<String, ResourceRef>,
}

impl SiteIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a page under its logical lookup path.
    pub fn register_page(&mut self, path: &str, page: Page) {
        self.pages.insert(path.to_string(), page);
    }

    /// Register a resource of a section.
    pub fn register_section_resource(&mut self, section: &str, path: &str, rel_link: &str) {
        self.section_resources
            .entry(UrlPath::from_page(section))
            .or_default()
            .insert(path.to_string(), ResourceRef::new(rel_link));
    }

    /// Register a site-global resource.
    pub fn register_global_resource(&mut self, path: &str, rel_link: &str) {
        self.global_resources
            .insert(path.to_string(), ResourceRef::new(rel_link));
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
            && self.section_resources.is_empty()
            && self.global_resources.is_empty()
    }

    pub fn clear(&mut self) {
        self.pages.clear();
        self.section_resources.clear();
        self.global_resources.clear();
    }
}

impl PageStore for SiteIndex {
    fn page_by_path(&self, path: &str) -> Option<&Page> {
        self.pages.get(path)
    }
}

impl ResourceStore for SiteIndex {
    fn section_resource(&self, section: &UrlPath, path: &str) -> Option<&ResourceRef> {
        self.section_resources.get(section)?.get(path)
    }

    fn global_resource(&self, path: &str) -> Option<&ResourceRef> {
        self.global_resources.get(path)
    }
}
