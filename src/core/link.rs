//! Syntactic decomposition of raw link destinations.

use std::borrow::Cow;

use url::Url;

use crate::utils::url::{is_external_link, split_path_fragment};

/// A raw link destination split into its syntactic parts.
///
/// Produced once per resolution call and read-only afterwards. This is
/// the syntactic half of resolution; the semantic half (what the path
/// actually names) needs the page and resource stores.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedDestination<'a> {
    /// Destination with a URL scheme (https:, mailto:, tel:, ...).
    ///
    /// Carries the parsed string form; internal stores are never
    /// consulted for these.
    Absolute(Cow<'a, str>),
    /// Scheme-less destination, interpreted relative to the site.
    Relative {
        /// Path part; empty for pure fragment references.
        path: &'a str,
        /// Query string without the leading `?`, kept verbatim.
        raw_query: &'a str,
        /// Fragment identifier without the leading `#`.
        fragment: &'a str,
    },
}

impl<'a> ParsedDestination<'a> {
    /// Parse a destination string into its syntactic parts.
    pub fn parse(raw: &'a str) -> Self {
        if is_external_link(raw) {
            // Normalize through the url crate where it parses; otherwise
            // keep the destination as written.
            let string_form = Url::parse(raw)
                .map(|u| Cow::Owned(u.to_string()))
                .unwrap_or(Cow::Borrowed(raw));
            return Self::Absolute(string_form);
        }

        let (rest, fragment) = split_path_fragment(raw);
        let (path, raw_query) = rest.split_once('?').unwrap_or((rest, ""));
        Self::Relative {
            path,
            raw_query,
            fragment,
        }
    }

    /// Check if the destination carries a URL scheme.
    #[inline]
    pub fn is_absolute(&self) -> bool {
        matches!(self, Self::Absolute(_))
    }

    /// Query string of a relative destination, `""` otherwise.
    #[inline]
    pub fn raw_query(&self) -> &str {
        match self {
            Self::Absolute(_) => "",
            Self::Relative { raw_query, .. } => raw_query,
        }
    }

    /// Fragment of a relative destination, `""` otherwise.
    #[inline]
    pub fn fragment(&self) -> &str {
        match self {
            Self::Absolute(_) => "",
            Self::Relative { fragment, .. } => fragment,
        }
    }
}
