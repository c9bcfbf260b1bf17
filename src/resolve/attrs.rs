//! Attribute set of a rendered anchor element.

/// Attributes of an `<a>` element, as produced by resolution.
///
/// `href` is always present. The rest are emitted only when they carry a
/// value; [`pairs`](Self::pairs) yields exactly the attributes a template
/// should write out, in no guaranteed order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnchorAttributes {
    pub(crate) href: String,
    pub(crate) rel: Option<&'static str>,
    pub(crate) class: Option<&'static str>,
    pub(crate) title: Option<String>,
}

impl AnchorAttributes {
    #[inline]
    pub fn href(&self) -> &str {
        &self.href
    }

    #[inline]
    pub fn rel(&self) -> Option<&'static str> {
        self.rel
    }

    #[inline]
    pub fn class(&self) -> Option<&'static str> {
        self.class
    }

    #[inline]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Attribute name/value pairs, omitting absent and empty values.
    pub fn pairs(&self) -> Vec<(&'static str, &str)> {
        let mut pairs = Vec::with_capacity(4);
        if !self.href.is_empty() {
            pairs.push(("href", self.href.as_str()));
        }
        if let Some(rel) = self.rel {
            pairs.push(("rel", rel));
        }
        if let Some(class) = self.class {
            pairs.push(("class", class));
        }
        if let Some(title) = self.title.as_deref()
            && !title.is_empty()
        {
            pairs.push(("title", title));
        }
        pairs
    }

    /// Look up a single attribute by name.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.pairs()
            .into_iter()
            .find_map(|(k, v)| (k == name).then_some(v))
    }
}
