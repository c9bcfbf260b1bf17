//! The resolver: classify a destination, validate its fragment, and
//! assemble anchor attributes.

use crate::config::ErrorLevel;
use crate::diag::{BrokenLink, DiagnosticSink, RenderAbort, apply_policy};
use crate::store::{PageStore, ResourceStore};
use crate::utils::html::escape_attr;

use super::{
    AnchorAttributes, LinkContext, ParsedDestination, RawDestination, RenderOptions,
    ResolvedTarget, validate_fragment,
};

/// Resolve an as-written destination into anchor attributes.
///
/// Never fails to produce an `href`: when nothing matches, the raw
/// destination string is emitted as written and the broken-link policy
/// decides whether that is silent, a warning, or fatal. A fatal outcome
/// aborts the whole rendering pass, not just this document.
pub fn resolve<S>(
    ctx: &LinkContext<'_>,
    dest: &RawDestination<'_>,
    opts: &RenderOptions,
    store: &S,
    sink: &dyn DiagnosticSink,
) -> Result<AnchorAttributes, RenderAbort>
where
    S: PageStore + ResourceStore,
{
    let parsed = ParsedDestination::parse(dest.destination);
    let target = classify(&parsed, ctx, store);

    let mut attrs = AnchorAttributes::default();

    match target {
        ResolvedTarget::External(url) => {
            attrs.href = url;
            attrs.rel = Some("external");
        }
        ResolvedTarget::Page(page) => {
            let mut href = page.rel_permalink().as_str().to_string();
            let raw_query = parsed.raw_query();
            if !raw_query.is_empty() {
                href.push('?');
                href.push_str(raw_query);
            }
            let fragment = parsed.fragment();
            if !fragment.is_empty() {
                validate_fragment(page, fragment, opts, ctx.page.content_path(), sink)?;
                // The fragment lands in the href even when validation
                // only warned about it
                href.push('#');
                href.push_str(fragment);
            }
            attrs.href = href;
        }
        ResolvedTarget::PageResource(res)
        | ResolvedTarget::SectionResource(res)
        | ResolvedTarget::GlobalResource(res) => {
            // Resources address a file, not a document position: query
            // and fragment are dropped
            attrs.href = res.rel_link().as_str().to_string();
        }
        ResolvedTarget::SamePageFragment => {
            let fragment = parsed.fragment();
            validate_fragment(ctx.owner, fragment, opts, ctx.page.content_path(), sink)?;
            attrs.href = format!("{}#{fragment}", ctx.owner.rel_permalink());
        }
        ResolvedTarget::Unresolved => {
            attrs.href = dest.destination.to_string();
            if opts.error_level == ErrorLevel::Warning
                && opts.highlight_broken
                && opts.dev_server
            {
                attrs.class = Some("broken");
            }
            apply_policy(
                BrokenLink::UnresolvedDestination {
                    dest: dest.destination.to_string(),
                    page: ctx.page.content_path().to_string(),
                },
                opts.error_level,
                sink,
            )?;
        }
    }

    if !dest.title.is_empty() {
        attrs.title = Some(escape_attr(dest.title).into_owned());
    }

    Ok(attrs)
}

/// Classify a parsed destination against the site.
///
/// Relative paths are tried in order: page, resource of the rendering
/// document, resource of its section, global resource. The section step
/// is skipped for leaf bundles; the page step never is, so a leaf can
/// still link to any page by path.
pub(crate) fn classify<'a, S>(
    parsed: &ParsedDestination<'_>,
    ctx: &LinkContext<'a>,
    store: &'a S,
) -> ResolvedTarget<'a>
where
    S: PageStore + ResourceStore,
{
    let (path, fragment) = match parsed {
        ParsedDestination::Absolute(url) => {
            return ResolvedTarget::External(url.clone().into_owned());
        }
        ParsedDestination::Relative { path, fragment, .. } => (*path, *fragment),
    };

    if path.is_empty() {
        return if fragment.is_empty() {
            ResolvedTarget::Unresolved
        } else {
            ResolvedTarget::SamePageFragment
        };
    }

    if let Some(page) = store
        .page_by_path(path)
        .or_else(|| path.strip_suffix('/').and_then(|p| store.page_by_path(p)))
    {
        return ResolvedTarget::Page(page);
    }

    if let Some(res) = ctx.owner.resource_by_path(path) {
        return ResolvedTarget::PageResource(res);
    }

    if !ctx.owner.is_leaf()
        && let Some(res) = store.section_resource(ctx.owner.section(), path)
    {
        return ResolvedTarget::SectionResource(res);
    }

    if let Some(res) = store.global_resource(path) {
        return ResolvedTarget::GlobalResource(res);
    }

    ResolvedTarget::Unresolved
}

// ============================================================================
// Tests
// ============================================================================
