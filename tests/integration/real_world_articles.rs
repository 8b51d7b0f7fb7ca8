//! Integration tests for real-world feed bodies
//!
//! Full blog pages as found in `content:encoded`, and the chatty answers a
//! rewriting service gives back.

#![allow(clippy::expect_used)] // expect() is appropriate in tests for clear panic messages

use feed_sanitizer::pipeline::{ArticleCleaner, CleanerConfig, MemoryStore};
use feed_sanitizer::{clean, clean_with_report, feed::FeedItem, Options, Result};

/// Test fixture path helper
fn fixture_path(name: &str) -> String {
    format!(
        "{}/tests/integration/fixtures/{}",
        env!("CARGO_MANIFEST_DIR"),
        name
    )
}

fn fixture(name: &str) -> String {
    std::fs::read_to_string(fixture_path(name)).expect("Failed to read fixture")
}

#[test]
fn test_blog_post_keeps_article_text() {
    let content = clean(&fixture("blog_post.html")).expect("cleans");

    assert!(content.contains("Why Rust for Feed Readers"));
    assert!(content.contains("memory-safe language"));
    assert!(content.contains("Arena trees keep parent links cheap & safe."));
    assert!(content.contains("Thanks for reading."));
    assert!(content.contains("\u{a9} 2024 Example Blog"));
}

#[test]
fn test_blog_post_drops_boilerplate() {
    let content = clean(&fixture("blog_post.html")).expect("cleans");

    for needle in [
        "<script", "<style", "<title", "<meta", "<nav", "<img", "<figure", "<aside", "<form",
        "<input", "<button", "<head", "<body", "<!--", "Subscribe", "Related",
    ] {
        assert!(!content.contains(needle), "{needle} should be removed");
    }
}

#[test]
fn test_blog_post_strips_styling_hooks() {
    let content = clean(&fixture("blog_post.html")).expect("cleans");

    for needle in ["class=", "id=", "style=", "onclick", "ad-slot", "adsbygoogle"] {
        assert!(!content.contains(needle), "{needle} should be removed");
    }
}

#[test]
fn test_blog_post_links_open_in_new_tab() {
    let content = clean(&fixture("blog_post.html")).expect("cleans");

    assert!(content.contains(
        r#"<a href="https://www.rust-lang.org/" target="_blank" rel="noopener noreferrer">memory-safe language</a>"#
    ));
    assert!(!content.contains("_self"));
}

#[test]
fn test_blog_post_stats() {
    let result = clean_with_report(&fixture("blog_post.html"), &Options::default()).expect("cleans");

    assert!(result.stats.body_found);
    assert!(result.stats.elements_removed >= 5);
    // the ad slot: only whitespace and an empty ins inside
    assert_eq!(result.stats.empty_removed, 1);
    assert_eq!(result.stats.anchors_normalized, 1);
    assert_eq!(result.stats.comments_removed, 1);
}

#[test]
fn test_rewriter_response_prose_and_fence_dropped() {
    let content = clean(&fixture("rewriter_response.txt")).expect("cleans");

    assert_eq!(
        content,
        "<h2>Key points</h2>\n<p>First point.</p>\n<p>Second point with a \
         <a href=\"https://example.com\" target=\"_blank\" rel=\"noopener noreferrer\">source</a>.</p>"
    );
}

#[test]
fn test_workflow_on_fixture_article() {
    let response = fixture("rewriter_response.txt");
    let rewriter = move |prompt: &str| -> Result<String> {
        assert!(prompt.starts_with("Rewrite the article below. \n "));
        assert!(!prompt.contains("<script"));
        Ok(response.clone())
    };
    let mut store = MemoryStore::new(vec![FeedItem {
        id: 42,
        title: "Why Rust for Feed Readers".to_string(),
        content_raw: Some(fixture("blog_post.html")),
        ..FeedItem::default()
    }]);

    let cleaner = ArticleCleaner::new(rewriter, CleanerConfig::with_prompt("Rewrite the article below."));
    let report = cleaner.clean_pending(&mut store).expect("store works");

    assert_eq!(report.cleaned, [42]);
    let formatted = store
        .item(42)
        .and_then(|item| item.content_formatted.clone())
        .expect("formatted content saved");
    assert!(formatted.starts_with("<h2>Key points</h2>"));
}
