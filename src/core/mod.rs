//! Core types - pure abstractions shared across the crate.

mod link;
mod url;

pub use link::ParsedDestination;
pub use url::UrlPath;
