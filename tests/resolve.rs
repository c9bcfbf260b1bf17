//! End-to-end resolution: configuration in, anchor attributes out.

use std::io::Write;

use linkhook::{
    BrokenLink, ErrorLevel, LinkContext, MemorySink, Page, RawDestination, RenderConfig,
    RenderOptions, SiteIndex, resolve,
};

fn site() -> SiteIndex {
    let mut index = SiteIndex::new();
    index.register_page(
        "/docs/setup",
        Page::new("docs/setup.md", "/docs/setup/").with_heading_ids(["requirements", "install"]),
    );
    index.register_page("/blog/hello", Page::new("blog/hello.md", "/blog/hello/"));
    index.register_section_resource("/docs/", "arch.svg", "/docs/arch.svg");
    index.register_global_resource("favicon.ico", "/favicon.ico");
    index
}

#[test]
fn config_drives_resolution() {
    let config = RenderConfig::parse(
        r#"[links]
error_level = "warning"
highlight_broken = true"#,
    )
    .unwrap();
    let opts = RenderOptions::from_config(&config.links, true);

    let index = site();
    let page = Page::new("docs/guide.md", "/docs/guide/");
    let ctx = LinkContext::for_page(&page);
    let sink = MemorySink::new();

    let ok = resolve(
        &ctx,
        &RawDestination::new("/docs/setup#install", "Install"),
        &opts,
        &index,
        &sink,
    )
    .unwrap();
    assert_eq!(ok.href(), "/docs/setup/#install");
    assert!(sink.is_empty());

    let broken = resolve(
        &ctx,
        &RawDestination::new("/docs/nowhere", "Nowhere"),
        &opts,
        &index,
        &sink,
    )
    .unwrap();
    assert_eq!(broken.href(), "/docs/nowhere");
    assert_eq!(broken.class(), Some("broken"));
    assert_eq!(sink.messages().len(), 1);
}

#[test]
fn policy_matrix_for_one_broken_link() {
    let index = site();
    let page = Page::new("docs/guide.md", "/docs/guide/");
    let ctx = LinkContext::for_page(&page);
    let dest = RawDestination::new("/docs/setup#nope", "text");

    for (level, warnings, fatal) in [
        (ErrorLevel::Ignore, 0, false),
        (ErrorLevel::Warning, 1, false),
        (ErrorLevel::Error, 0, true),
    ] {
        let sink = MemorySink::new();
        let opts = RenderOptions {
            error_level: level,
            ..Default::default()
        };
        let result = resolve(&ctx, &dest, &opts, &index, &sink);
        assert_eq!(result.is_err(), fatal, "level {level}");
        assert_eq!(sink.messages().len(), warnings, "level {level}");
        if let Err(abort) = result {
            assert!(matches!(abort.0, BrokenLink::UnresolvedFragment { .. }));
        }
    }
}

#[test]
fn config_file_round_trip() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[links]\nerror_level = \"error\"").unwrap();

    let config = RenderConfig::load(file.path()).unwrap();
    assert_eq!(config.links.error_level, ErrorLevel::Error);
    assert!(!config.links.highlight_broken);
}

#[test]
fn invalid_error_level_fails_at_load_time() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[links]\nerror_level = \"loud\"").unwrap();

    let err = RenderConfig::load(file.path()).unwrap_err();
    assert!(err.to_string().contains("parsing error"));
}

#[test]
fn concurrent_resolution_over_shared_index() {
    use rayon::prelude::*;

    let index = site();
    let opts = RenderOptions {
        error_level: ErrorLevel::Warning,
        ..Default::default()
    };
    let sink = MemorySink::new();

    let destinations: Vec<String> = (0..200)
        .map(|i| match i % 4 {
            0 => "/docs/setup#install".to_string(),
            1 => "favicon.ico".to_string(),
            2 => "https://example.com/".to_string(),
            _ => format!("/missing/{i}"),
        })
        .collect();

    let pages: Vec<Page> = (0..200)
        .map(|i| Page::new(format!("docs/p{i}.md"), &format!("/docs/p{i}/")))
        .collect();

    let hrefs: Vec<String> = destinations
        .par_iter()
        .zip(pages.par_iter())
        .map(|(dest, page)| {
            let ctx = LinkContext::for_page(page);
            resolve(
                &ctx,
                &RawDestination::new(dest, "text"),
                &opts,
                &index,
                &sink,
            )
            .unwrap()
            .href()
            .to_string()
        })
        .collect();

    assert_eq!(hrefs.len(), 200);
    assert_eq!(hrefs[0], "/docs/setup/#install");
    assert_eq!(hrefs[1], "/favicon.ico");
    assert_eq!(hrefs[2], "https://example.com/");
    assert_eq!(hrefs[3], "/missing/3");
    // One warning per unresolved destination, none lost to races
    assert_eq!(sink.messages().len(), 50);
}
