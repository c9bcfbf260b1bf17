//! Diagnostics: broken-link taxonomy, policy gate, and sinks.
//!
//! Every broken-link condition is first classified as a [`BrokenLink`],
//! then routed through the single policy gate [`apply_policy`]:
//! `ignore` drops the diagnostic, `warning` sends it to the sink and
//! continues, `error` turns it into a [`RenderAbort`]. No kind is ever
//! promoted to a different severity.

use std::fmt;

use parking_lot::Mutex;
use thiserror::Error;

use crate::config::ErrorLevel;
use crate::log;

/// Name of the render hook, used to attribute diagnostics.
pub const LINK_HOOK: &str = "render-link";

// ============================================================================
// Taxonomy
// ============================================================================

/// A broken-link condition classified for the policy gate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrokenLink {
    /// No page or resource matched a relative destination, or the
    /// destination had neither path nor fragment.
    UnresolvedDestination {
        /// The as-written destination string.
        dest: String,
        /// Content path of the containing document.
        page: String,
    },
    /// Fragment identifier absent from the target's heading-ID set.
    UnresolvedFragment {
        /// The missing identifier, without `#`.
        fragment: String,
        /// Content path of the resolved target document.
        target: String,
        /// Content path of the referencing document, when it differs
        /// from the target.
        referrer: Option<String>,
    },
    /// Fragment identifier claimed by more than one heading in the
    /// target - an authoring defect of the target document, surfaced
    /// through the referencing link.
    DuplicateFragment {
        /// The ambiguous identifier, without `#`.
        fragment: String,
        /// Content path of the resolved target document.
        target: String,
    },
}

impl fmt::Display for BrokenLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnresolvedDestination { dest, page } => {
                write!(f, "{LINK_HOOK}: cannot resolve destination {dest:?} in {page:?}")
            }
            Self::UnresolvedFragment {
                fragment,
                target,
                referrer,
            } => {
                write!(f, "{LINK_HOOK}: fragment \"#{fragment}\" not found in {target:?}")?;
                if let Some(referrer) = referrer {
                    write!(f, " (linked from {referrer:?})")?;
                }
                Ok(())
            }
            Self::DuplicateFragment { fragment, target } => {
                write!(f, "{LINK_HOOK}: duplicate heading id \"#{fragment}\" in {target:?}")
            }
        }
    }
}

/// Fatal outcome of the `error` policy.
///
/// The surrounding pipeline is contractually required to propagate this
/// and halt the whole rendering pass; it is not a recoverable
/// per-document error.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{0}")]
pub struct RenderAbort(pub BrokenLink);

// ============================================================================
// Sinks
// ============================================================================

/// Destination for warning diagnostics.
///
/// Fatal diagnostics do not pass through the sink; they surface as the
/// [`RenderAbort`] return value of resolution.
pub trait DiagnosticSink {
    /// Emit a warning diagnostic.
    fn warn(&self, message: &str);
}

/// Sink that forwards warnings to the terminal logger.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl DiagnosticSink for LogSink {
    fn warn(&self, message: &str) {
        log!("warn"; "{message}");
    }
}

/// Sink that records warnings in memory.
///
/// Useful for tests and for pipelines that aggregate diagnostics into a
/// report instead of streaming them to the terminal.
#[derive(Debug, Default)]
pub struct MemorySink {
    messages: Mutex<Vec<String>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the recorded messages.
    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().clone()
    }

    /// Check if no warning was recorded.
    pub fn is_empty(&self) -> bool {
        self.messages.lock().is_empty()
    }
}

impl DiagnosticSink for MemorySink {
    fn warn(&self, message: &str) {
        self.messages.lock().push(message.to_string());
    }
}

// ============================================================================
// Policy gate
// ============================================================================

/// Route a classified diagnostic through the configured policy.
pub fn apply_policy(
    diag: BrokenLink,
    level: ErrorLevel,
    sink: &dyn DiagnosticSink,
) -> Result<(), RenderAbort> {
    match level {
        ErrorLevel::Ignore => Ok(()),
        ErrorLevel::Warning => {
            sink.warn(&diag.to_string());
            Ok(())
        }
        ErrorLevel::Error => Err(RenderAbort(diag)),
    }
}

// ============================================================================
// Tests
// ============================================================================
