//! URL path type for type-safe link handling.
//!
//! Internal representation is always decoded (human-readable); encoding
//! happens at the browser boundary, which is outside this crate.

use std::borrow::Borrow;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// Decoded URL path.
///
/// Invariants:
/// - Always decoded (no percent-encoding)
/// - Always starts with `/`
/// - Page links end with `/`, resource links may not
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UrlPath(Arc<str>);

impl UrlPath {
    /// Create a page link (trailing slash enforced).
    ///
    /// Normalizes leading/trailing slashes and strips any query string
    /// and fragment.
    pub fn from_page(decoded: &str) -> Self {
        let trimmed = decoded.trim();

        if trimmed.is_empty() || trimmed == "/" {
            return Self(Arc::from("/"));
        }

        let path = Self::strip_query_fragment(trimmed);

        let with_leading = if path.starts_with('/') {
            path
        } else {
            format!("/{path}")
        };

        let normalized = if with_leading.ends_with('/') {
            with_leading
        } else {
            format!("{with_leading}/")
        };

        Self(Arc::from(normalized))
    }

    /// Create a resource link (no trailing-slash normalization).
    pub fn from_asset(decoded: &str) -> Self {
        let trimmed = decoded.trim();

        if trimmed.is_empty() {
            return Self(Arc::from("/"));
        }

        if trimmed.starts_with('/') {
            Self(Arc::from(trimmed))
        } else {
            Self(Arc::from(format!("/{trimmed}")))
        }
    }

    /// Strip query string and fragment using the url crate.
    fn strip_query_fragment(path: &str) -> String {
        use percent_encoding::percent_decode_str;

        // A dummy base lets the url crate parse site-relative paths
        static BASE: std::sync::OnceLock<url::Url> = std::sync::OnceLock::new();
        let base = BASE.get_or_init(|| url::Url::parse("http://x").unwrap());

        match base.join(path) {
            Ok(parsed) => {
                // The url crate percent-encodes the path, decode it back
                percent_decode_str(parsed.path())
                    .decode_utf8()
                    .map(|s| s.into_owned())
                    .unwrap_or_else(|_| parsed.path().to_string())
            }
            Err(_) => path.split(['?', '#']).next().unwrap_or(path).to_string(),
        }
    }

    /// Get the decoded path as a string slice.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Check if this is a page link (ends with `/`).
    #[inline]
    pub fn is_page_url(&self) -> bool {
        self.0.ends_with('/')
    }

    /// Get the parent path.
    ///
    /// `/docs/foo/` -> `/docs/`, `/docs/` -> `/`, `/` -> `None`
    pub fn parent(&self) -> Option<Self> {
        let trimmed = self.0.trim_end_matches('/');
        if trimmed.is_empty() {
            return None;
        }
        match trimmed.rfind('/') {
            Some(0) | None => Some(Self(Arc::from("/"))),
            Some(idx) => Some(Self(Arc::from(format!("{}/", &trimmed[..idx])))),
        }
    }
}

impl std::fmt::Display for UrlPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Default for UrlPath {
    fn default() -> Self {
        Self(Arc::from("/"))
    }
}

impl AsRef<str> for UrlPath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for UrlPath {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for UrlPath {
    fn from(s: &str) -> Self {
        Self::from_page(s)
    }
}

impl PartialEq<str> for UrlPath {
    fn eq(&self, other: &str) -> bool {
        self.0.as_ref() == other
    }
}

impl PartialEq<&str> for UrlPath {
    fn eq(&self, other: &&str) -> bool {
        self.0.as_ref() == *other
    }
}

impl Serialize for UrlPath {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for UrlPath {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(Self::from_page(&s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_page() {
        assert_eq!(UrlPath::from_page("/docs/foo/").as_str(), "/docs/foo/");
        assert_eq!(UrlPath::from_page("/docs/foo").as_str(), "/docs/foo/");
        assert_eq!(UrlPath::from_page("docs/foo/").as_str(), "/docs/foo/");
        assert_eq!(UrlPath::from_page("/").as_str(), "/");
        assert_eq!(UrlPath::from_page("").as_str(), "/");
    }

    #[test]
    fn test_from_page_strips_query_and_fragment() {
        assert_eq!(UrlPath::from_page("/docs/foo?v=1").as_str(), "/docs/foo/");
        assert_eq!(
            UrlPath::from_page("/docs/foo#install").as_str(),
            "/docs/foo/"
        );
        assert_eq!(
            UrlPath::from_page("/docs/foo?v=1#install").as_str(),
            "/docs/foo/"
        );
    }

    #[test]
    fn test_from_page_decoded_unicode() {
        // Non-ASCII segments stay decoded internally
        let url = UrlPath::from_page("/docs/中文?v=1");
        assert_eq!(url.as_str(), "/docs/中文/");
    }

    #[test]
    fn test_from_asset() {
        assert_eq!(
            UrlPath::from_asset("/docs/foo/figure.png").as_str(),
            "/docs/foo/figure.png"
        );
        assert_eq!(UrlPath::from_asset("logo.svg").as_str(), "/logo.svg");
        assert!(!UrlPath::from_asset("/docs/foo/figure.png").is_page_url());
    }

    #[test]
    fn test_parent() {
        assert_eq!(
            UrlPath::from_page("/docs/foo/").parent(),
            Some(UrlPath::from_page("/docs/"))
        );
        assert_eq!(
            UrlPath::from_page("/docs/").parent(),
            Some(UrlPath::from_page("/"))
        );
        assert_eq!(UrlPath::from_page("/").parent(), None);
    }

    #[test]
    fn test_equality_with_str() {
        let url = UrlPath::from_page("/docs/foo/");
        assert_eq!(url, "/docs/foo/");
        assert_ne!(url, "/docs/foo");
    }

    #[test]
    fn test_hash_set_membership() {
        use rustc_hash::FxHashSet;

        let mut set = FxHashSet::default();
        set.insert(UrlPath::from_page("/docs/foo/"));
        set.insert(UrlPath::from_page("/docs/foo/"));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_serialize_deserialize() {
        let url = UrlPath::from_page("/docs/中文/");
        let json = serde_json::to_string(&url).unwrap();
        assert_eq!(json, r#""/docs/中文/""#);

        let parsed: UrlPath = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, url);
    }

    #[test]
    fn test_display() {
        assert_eq!(UrlPath::from_page("/docs/foo/").to_string(), "/docs/foo/");
    }
}
