use roadmap_backend::utils::{ResourceKind, ResourceLink};

#[test]
fn direct_urls_pass_through_with_a_hostname_label() {
    let link = ResourceLink::parse("https://www.rust-lang.org/learn", "Rust");
    assert_eq!(link.kind, ResourceKind::Direct);
    assert_eq!(link.url, "https://www.rust-lang.org/learn");
    assert_eq!(link.label, "rust-lang.org");
    assert_eq!(link.raw, "https://www.rust-lang.org/learn");

    let link = ResourceLink::parse("https://developer.mozilla.org/en-US/docs/Web", "HTML");
    assert_eq!(link.label, "developer.mozilla.org");
}

#[test]
fn youtube_hints_become_video_search_links() {
    let link = ResourceLink::parse("YouTube: Rust ownership explained", "Rust");
    assert_eq!(link.kind, ResourceKind::Video);
    assert_eq!(link.label, "Rust ownership explained");
    assert!(
        link.url
            .starts_with("https://www.youtube.com/results?search_query=")
    );
    assert!(link.url.contains("ownership"));
}

#[test]
fn youtube_prefix_match_is_case_insensitive() {
    let link = ResourceLink::parse("youtube: crash course", "CSS");
    assert_eq!(link.kind, ResourceKind::Video);
    assert_eq!(link.label, "crash course");

    let link = ResourceLink::parse("YOUTUBE: deep dive", "CSS");
    assert_eq!(link.kind, ResourceKind::Video);
    assert_eq!(link.label, "deep dive");
}

#[test]
fn bare_topics_become_searches_scoped_to_the_skill() {
    let link = ResourceLink::parse("Official documentation", "PostgreSQL");
    assert_eq!(link.kind, ResourceKind::Search);
    assert_eq!(link.label, "Official documentation");
    assert!(link.url.starts_with("https://www.google.com/search?q="));
    assert!(link.url.contains("PostgreSQL"));
}

#[test]
fn surrounding_whitespace_is_trimmed_for_display() {
    let link = ResourceLink::parse("  Interactive tutorial  ", "SQL");
    assert_eq!(link.label, "Interactive tutorial");
    assert_eq!(link.raw, "  Interactive tutorial  ");
}
