//! Integration tests for option combinations
//!
//! Tests that verify customised tables and toggles work together.

#![allow(clippy::expect_used)] // expect() is appropriate in tests for clear panic messages

use feed_sanitizer::{clean_bytes_with_options, clean_with_options, clean_with_report, Options};

#[test]
fn test_keep_images_still_strips_their_class() {
    let mut opts = Options::default();
    opts.element_denylist.remove("img");

    let out = clean_with_options(r#"<p>A <img src="a.png" class="x"> B</p>"#, &opts).expect("cleans");
    assert_eq!(out, r#"<p>A <img src="a.png"> B</p>"#);
}

#[test]
fn test_custom_attribute_denylist_keeps_class() {
    let opts = Options::default().with_attribute_denylist(&["style"]);
    let out = clean_with_options(r#"<p class="k" style="s">x</p>"#, &opts).expect("cleans");
    assert_eq!(out, r#"<p class="k">x</p>"#);
}

#[test]
fn test_keep_entities_with_anchor_rewrite() {
    let opts = Options::default().with_unescape_entities(false);
    let out = clean_with_options(r#"<p>a &amp; <a href="/">b</a></p>"#, &opts).expect("cleans");
    assert_eq!(
        out,
        r#"<p>a &amp; <a href="/" target="_blank" rel="noopener noreferrer">b</a></p>"#
    );
}

#[test]
fn test_custom_prunable_tags_replace_defaults() {
    let opts = Options::default().with_prunable_empty_tags(&["li"]);

    let out = clean_with_options("<ul><li> </li><li>x</li></ul><p> </p>", &opts).expect("cleans");
    // `p` is no longer prunable, so the blank paragraph stays
    assert_eq!(out, "<ul><li>x</li></ul><p> </p>");
}

#[test]
fn test_minimal_options_still_normalize_anchors_and_comments() {
    let result = clean_with_report(
        r#"<div class="x"><!--c--><a href="/">h</a></div>"#,
        &Options::minimal(),
    )
    .expect("cleans");

    assert_eq!(
        result.content,
        r#"<div class="x"><a href="/" target="_blank" rel="noopener noreferrer">h</a></div>"#
    );
    assert_eq!(result.stats.comments_removed, 1);
    assert_eq!(result.stats.elements_removed, 0);
}

#[test]
fn test_denylist_names_are_case_insensitive() {
    let opts = Options::minimal().with_element_denylist(&["SCRIPT"]);
    let out = clean_with_options("<p>a</p><script>x()</script>", &opts).expect("cleans");
    assert_eq!(out, "<p>a</p>");
}

#[test]
fn test_bytes_with_custom_options() {
    let opts = Options::default().with_attribute_denylist(&[]);
    let html = b"<meta charset=\"windows-1252\"><p class=\"q\">\x93quoted\x94</p>";
    let out = clean_bytes_with_options(html, &opts).expect("cleans");
    assert_eq!(out, "<p class=\"q\">\u{201c}quoted\u{201d}</p>");
}
