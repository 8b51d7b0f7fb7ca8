//! String-level trimming applied before parsing and after serialization.
//!
//! Every step works on whatever the previous one left and none assumes the
//! boundary is already clean. The cutsets are literal: a leading tab is not a
//! space and survives steps 1 and 2.

/// Wrapper tags unwrapped when they occur exactly once, checked in this order.
const SINGLE_WRAPPER_TAGS: [&str; 3] = ["section", "article", "div"];

/// Document wrapper pairs stripped from the edges, checked in this order.
const DOCUMENT_WRAPPER_TAGS: [&str; 3] = ["html", "head", "body"];

const DOCTYPE: &str = "<!DOCTYPE html>";

/// Run every trimming step over `text`.
///
/// # Example
///
/// ```rust
/// use feed_sanitizer::text_normalize::normalize;
///
/// let out = normalize("  Intro text <div><p>Hello</p></div> trailing");
/// assert_eq!(out, "<p>Hello</p>");
/// ```
#[must_use]
pub fn normalize(text: &str) -> String {
    let text = trim_line_ends(text);
    let text = trim_to_markup(text);
    let text = text.strip_prefix(DOCTYPE).unwrap_or(text);
    let text = strip_document_wrappers(text);
    strip_single_wrappers(text).to_string()
}

/// Steps 1 and 2: spaces, then newlines, then carriage returns.
fn trim_line_ends(text: &str) -> &str {
    text.trim_matches(' ').trim_matches('\n').trim_matches('\r')
}

/// Step 3: drop prose before the first `<` and after the last `>`.
///
/// Text with no `<`, or no `>` after it, has no markup edge and comes back empty.
fn trim_to_markup(text: &str) -> &str {
    text.trim_start_matches(|c: char| c != '<')
        .trim_end_matches(|c: char| c != '>')
}

/// Step 5: `<html>`, `<head>` and `<body>` pairs, each stripped independently.
fn strip_document_wrappers(mut text: &str) -> &str {
    for tag in DOCUMENT_WRAPPER_TAGS {
        text = strip_pair(text, tag);
    }
    text
}

/// Strip `<tag>` from the start and `</tag>` from the end when both are there.
fn strip_pair<'a>(text: &'a str, tag: &str) -> &'a str {
    let open = format!("<{tag}>");
    let close = format!("</{tag}>");
    match text.strip_prefix(open.as_str()) {
        Some(rest) => rest.strip_suffix(close.as_str()).unwrap_or(text),
        None => text,
    }
}

/// Step 6: unwrap a leading `<section>`, `<article>` or `<div>` whose opening
/// tag appears exactly once in the whole string.
///
/// This counts occurrences globally; it does not check that the tag encloses
/// the rest of the string.
fn strip_single_wrappers(mut text: &str) -> &str {
    for tag in SINGLE_WRAPPER_TAGS {
        let open = format!("<{tag}>");
        let close = format!("</{tag}>");
        if text.starts_with(open.as_str()) && text.matches(open.as_str()).count() == 1 {
            text = &text[open.len()..];
            text = text.strip_suffix(close.as_str()).unwrap_or(text);
        }
    }
    text
}
