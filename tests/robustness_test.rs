use feed_sanitizer::{clean, clean_bytes, Error};
use std::time::{Duration, Instant};

#[test]
fn clean_does_not_panic_on_malformed_html_unclosed_tags() {
    let html = "<p>text<div>more";
    match clean(html) {
        Ok(content) => assert!(content.contains("text")),
        Err(err) => panic!("expected Ok(_), got Err({err:?})"),
    }
}

#[test]
fn clean_does_not_panic_on_malformed_html_invalid_nesting() {
    let html = "<p><div></p></div>";
    assert!(matches!(clean(html), Ok(_)));
}

#[test]
fn clean_does_not_panic_on_malformed_html_missing_closing_tags() {
    let html = "<html><body><article><p>content</p>";
    match clean(html) {
        Ok(content) => assert!(content.contains("content")),
        Err(err) => panic!("expected Ok(_), got Err({err:?})"),
    }
}

#[test]
fn clean_does_not_panic_on_malformed_html_broken_attributes() {
    let html = "<div class=\"test id=broken>";
    assert!(matches!(clean(html), Ok(_) | Err(Error::ParseFailure(_))));
}

#[test]
fn clean_rejects_bare_entities() {
    let html = "&amp text &lt;";
    assert!(matches!(clean(html), Err(Error::ParseFailure(_))));
}

#[test]
fn clean_rejects_empty_string() {
    assert!(matches!(clean(""), Err(Error::ParseFailure(_))));
}

#[test]
fn clean_rejects_whitespace_only_input() {
    assert!(matches!(clean("   \n\t  "), Err(Error::ParseFailure(_))));
}

#[test]
fn clean_accepts_bare_document_wrappers() {
    // stripping the wrapper pair leaves nothing, which parses to an empty body
    assert_eq!(clean("<html></html>").expect("cleans"), "");
    assert_eq!(clean("<body></body>").expect("cleans"), "");
}

#[test]
fn clean_handles_empty_body_with_other_markup() {
    let content = clean("<html><head><title>T</title></head><body></body></html>").expect("cleans");
    assert!(content.is_empty());
}

#[test]
fn clean_handles_large_html_without_panic() {
    let target_size = 1024 * 1024;
    let chunk = "<p class=\"c\">Some repeated content for stress testing.</p>";
    let mut html = String::with_capacity(target_size + 128);
    html.push_str("<html><body><article>");
    while html.len() < target_size {
        html.push_str(chunk);
    }
    html.push_str("</article></body></html>");

    let start = Instant::now();
    let result = clean(&html);
    let elapsed = start.elapsed();

    let content = result.expect("cleans");
    assert!(!content.contains("class="));
    assert!(elapsed < Duration::from_secs(30), "large HTML cleaning took {elapsed:?}");
}

#[test]
fn clean_handles_deep_nesting_without_stack_overflow() {
    let depth = 5000;
    let html = format!("<p>x</p>{}{}", "<div>".repeat(depth), "</div>".repeat(depth));
    assert_eq!(clean(&html).expect("cleans"), "<p>x</p>");
}

#[test]
fn clean_skips_script_tags() {
    let html = r#"<html><body>
        <script>alert('xss')</script>
        <article><p>Safe content here</p></article>
    </body></html>"#;
    let content = clean(html).expect("cleans");
    assert!(!content.contains("alert"));
    assert!(!content.contains("xss"));
    assert!(content.contains("Safe content"));
}

#[test]
fn clean_handles_null_bytes_gracefully() {
    assert!(matches!(clean("text\x00more"), Err(Error::ParseFailure(_))));
    assert!(clean("<p>text\x00more</p>").is_ok());
}

#[test]
fn clean_bytes_handles_invalid_utf8() {
    let content = clean_bytes(b"<p>bad \xFF\xFE byte</p>").expect("cleans");
    assert!(content.starts_with("<p>bad "));
    assert!(content.contains('\u{fffd}'));
}
