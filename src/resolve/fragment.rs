//! Fragment validation against a target page's heading IDs.

use crate::diag::{BrokenLink, DiagnosticSink, RenderAbort, apply_policy};
use crate::store::Page;

use super::RenderOptions;

/// Validate a fragment identifier against a target page.
///
/// Three outcomes, all routed through the policy gate: present exactly
/// once is valid, absent is an unresolved fragment, claimed by several
/// headings is a duplicate. `content_path` names the referencing
/// document; it appears in the diagnostic only when it differs from the
/// target, so same-document anchors stay terse.
///
/// The emitted `href` is never affected; callers append the fragment as
/// written regardless of the outcome here.
pub fn validate_fragment(
    target: &Page,
    fragment: &str,
    opts: &RenderOptions,
    content_path: &str,
    sink: &dyn DiagnosticSink,
) -> Result<(), RenderAbort> {
    let diag = match target.id_count(fragment) {
        1 => return Ok(()),
        0 => BrokenLink::UnresolvedFragment {
            fragment: fragment.to_string(),
            target: target.content_path().to_string(),
            referrer: (target.content_path() != content_path).then(|| content_path.to_string()),
        },
        _ => BrokenLink::DuplicateFragment {
            fragment: fragment.to_string(),
            target: target.content_path().to_string(),
        },
    };
    apply_policy(diag, opts.error_level, sink)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ErrorLevel;
    use crate::diag::MemorySink;

    fn target() -> Page {
        Page::new("docs/foo.md", "/docs/foo/").with_heading_ids(["intro", "setup", "setup"])
    }

    fn warn_opts() -> RenderOptions {
        RenderOptions {
            error_level: ErrorLevel::Warning,
            ..Default::default()
        }
    }

    #[test]
    fn test_unique_fragment_is_silent() {
        let sink = MemorySink::new();
        validate_fragment(&target(), "intro", &warn_opts(), "docs/current.md", &sink).unwrap();
        assert!(sink.is_empty());
    }

    #[test]
    fn test_missing_fragment_warns_with_referrer() {
        let sink = MemorySink::new();
        validate_fragment(&target(), "missing", &warn_opts(), "docs/current.md", &sink).unwrap();
        let messages = sink.messages();
        assert_eq!(messages.len(), 1);
        assert!(messages[0].contains("#missing"));
        assert!(messages[0].contains("docs/foo.md"));
        assert!(messages[0].contains("linked from \"docs/current.md\""));
    }

    #[test]
    fn test_same_document_omits_referrer() {
        let sink = MemorySink::new();
        validate_fragment(&target(), "missing", &warn_opts(), "docs/foo.md", &sink).unwrap();
        assert!(!sink.messages()[0].contains("linked from"));
    }

    #[test]
    fn test_duplicate_fragment_warns() {
        let sink = MemorySink::new();
        validate_fragment(&target(), "setup", &warn_opts(), "docs/current.md", &sink).unwrap();
        assert!(sink.messages()[0].contains("duplicate heading id \"#setup\""));
    }

    #[test]
    fn test_duplicate_fragment_aborts_under_error_policy() {
        let sink = MemorySink::new();
        let opts = RenderOptions {
            error_level: ErrorLevel::Error,
            ..Default::default()
        };
        let err = validate_fragment(&target(), "setup", &opts, "docs/current.md", &sink)
            .unwrap_err();
        assert!(matches!(err.0, BrokenLink::DuplicateFragment { .. }));
    }

    #[test]
    fn test_ignore_policy_is_silent() {
        let sink = MemorySink::new();
        let opts = RenderOptions::default();
        validate_fragment(&target(), "missing", &opts, "docs/current.md", &sink).unwrap();
        validate_fragment(&target(), "setup", &opts, "docs/current.md", &sink).unwrap();
        assert!(sink.is_empty());
    }
}
