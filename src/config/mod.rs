//! Render hook configuration.
//!
//! Read once at startup from deployment configuration, validated before
//! any document renders, then threaded through resolution as
//! [`RenderOptions`](crate::resolve::RenderOptions).
//!
//! # Example
//!
//! ```toml
//! [links]
//! error_level = "warning"     # ignore (default) | warning | error
//! highlight_broken = true     # default: false
//! ```

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

// ============================================================================
// ConfigError
// ============================================================================

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("Config file parsing error")]
    Toml(#[from] toml::de::Error),

    #[error("Config validation error: {0}")]
    Validation(String),
}

// ============================================================================
// ErrorLevel
// ============================================================================

/// Severity applied to unresolved destinations and fragments.
///
/// Read once per invocation and never mutated by resolution. An invalid
/// value is a startup error regardless of what it spells - a policy value
/// cannot silence its own invalidity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ErrorLevel {
    /// Drop the diagnostic and render the raw destination.
    #[default]
    Ignore,
    /// Log and continue; optionally flag the anchor in development runs.
    Warning,
    /// Abort the whole rendering pass on the first broken link.
    Error,
}

impl ErrorLevel {
    /// Normalized lower-case name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ignore => "ignore",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for ErrorLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ErrorLevel {
    type Err = ConfigError;

    /// Case-insensitive parse; anything unknown is a validation error.
    fn from_str(s: &str) -> Result<Self, ConfigError> {
        match s.to_ascii_lowercase().as_str() {
            "ignore" => Ok(Self::Ignore),
            "warning" => Ok(Self::Warning),
            "error" => Ok(Self::Error),
            other => Err(ConfigError::Validation(format!(
                "invalid error_level `{other}`: expected `ignore`, `warning` or `error`"
            ))),
        }
    }
}

impl Serialize for ErrorLevel {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ErrorLevel {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

// ============================================================================
// Sections
// ============================================================================

/// `[links]` section - link render hook behavior.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LinksConfig {
    /// How unresolved destinations and fragments are reported.
    pub error_level: ErrorLevel,

    /// Add `class="broken"` to unresolved anchors.
    ///
    /// Only observable when `error_level = "warning"` and the current run
    /// is a development-mode run.
    pub highlight_broken: bool,
}

/// Top-level render hook configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Link resolution settings.
    pub links: LinksConfig,
}

impl RenderConfig {
    /// Parse configuration from TOML content.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| ConfigError::Io(path.to_path_buf(), e))?;
        Self::parse(&content)
    }
}

// ============================================================================
// Tests
// ============================================================================
