//! Edge case integration tests
//!
//! Tests for unusual inputs, boundary conditions, and the tree-level passes
//! used directly.

#![allow(clippy::expect_used)] // expect() is appropriate in tests for clear panic messages

use feed_sanitizer::html_processing::{extract_body, prune_empty_elements, strip_comments};
use feed_sanitizer::{clean, dom, Error, Options};

#[test]
fn test_tree_level_empty_pruning_keeps_wrapper() {
    let doc = dom::parse("<div><p>  </p><p>Hi</p></div>").expect("parses");
    let removed = prune_empty_elements(&doc, &Options::default().prunable_empty_tags);

    assert_eq!(removed, 1);
    assert_eq!(extract_body(&doc), "<div><p>Hi</p></div>");
}

#[test]
fn test_tree_level_passes_converge() {
    let doc = dom::parse("<section><div><span> </span></div><p>\n</p></section><p>x</p>").expect("parses");
    let prunable = Options::default().prunable_empty_tags;

    assert_eq!(prune_empty_elements(&doc, &prunable), 1);
    assert_eq!(prune_empty_elements(&doc, &prunable), 0);
    assert_eq!(strip_comments(&doc), 0);
    assert_eq!(extract_body(&doc), "<p>x</p>");
}

#[test]
fn test_unknown_elements_pass_through() {
    let html = r#"<p>x</p><my-widget data-x="1">w</my-widget>"#;
    assert_eq!(clean(html).expect("cleans"), html);
}

#[test]
fn test_table_gets_implied_tbody() {
    let html = r#"<table><tr><td class="c">1</td></tr></table>"#;
    assert_eq!(
        clean(html).expect("cleans"),
        "<table><tbody><tr><td>1</td></tr></tbody></table>"
    );
}

#[test]
fn test_entities_in_attributes_unescaped() {
    let html = r#"<p><a href="/q?a=1&amp;b=2">q</a></p>"#;
    assert_eq!(
        clean(html).expect("cleans"),
        r#"<p><a href="/q?a=1&b=2" target="_blank" rel="noopener noreferrer">q</a></p>"#
    );
}

#[test]
fn test_lowercase_doctype_not_emitted() {
    // only the exact `<!DOCTYPE html>` literal is stripped as text, but the
    // parsed doctype never lives inside body
    assert_eq!(clean("<!doctype html><p>a</p>").expect("cleans"), "<p>a</p>");
}

#[test]
fn test_leading_tab_and_prose_dropped() {
    assert_eq!(clean("\tNote: <p>a</p>").expect("cleans"), "<p>a</p>");
}

#[test]
fn test_wrapper_with_repeated_tag_kept() {
    let html = "<div><div>a</div><div>b</div></div>";
    assert_eq!(clean(html).expect("cleans"), html);
}

#[test]
fn test_only_denylisted_content_yields_empty_string() {
    assert_eq!(clean("<script>x</script><style>p{}</style>").expect("cleans"), "");
}

#[test]
fn test_only_comment_yields_empty_string() {
    assert_eq!(clean("<!-- nothing here -->").expect("cleans"), "");
}

#[test]
fn test_stray_closing_tag_is_markup() {
    assert!(clean("</p>").is_ok());
    assert!(matches!(clean("a < b"), Err(Error::ParseFailure(_))));
}
