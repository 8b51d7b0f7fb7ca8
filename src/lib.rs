//! # feed-sanitizer
//!
//! Deterministic HTML tidying for RSS article bodies.
//!
//! Feed items arrive with arbitrary, often malformed markup, and the text a
//! generative rewriting service sends back is no better. This crate reduces
//! either to a small display-ready subset: scripts, media, forms and legacy
//! tags go, whitespace-only containers go, styling hooks and inline event
//! handlers go, links open in a new tab without an opener, and comments go.
//!
//! ## Quick Start
//!
//! ```rust
//! use feed_sanitizer::clean;
//!
//! let html = r#"<!DOCTYPE html><html><body>
//! <script>track()</script><p class="lead">Text</p>
//! </body></html>"#;
//!
//! assert_eq!(clean(html)?, "<p>Text</p>");
//! # Ok::<(), feed_sanitizer::Error>(())
//! ```
//!
//! ## Failure
//!
//! The only error the sanitizer raises is [`Error::ParseFailure`], for input
//! with no markup to build a tree from. Callers processing many items should
//! skip the item and carry on; see [`pipeline::ArticleCleaner`].
//!
//! Not an XSS sanitizer: attribute values such as `href` are never inspected.

mod error;
mod options;
mod result;
mod sanitize;

/// DOM operations adapter over the `dom_query` arena.
pub mod dom;

/// Default tag and attribute tables.
pub mod tags;

/// Tree passes: pruning, attribute and anchor rewriting, comment removal, body extraction.
pub mod html_processing;

/// String-level trimming run before parsing and after serialization.
pub mod text_normalize;

/// Character encoding detection and transcoding.
pub mod encoding;

/// Feed and feed item data model.
pub mod feed;

/// Article cleaning workflow around a rewriting service.
pub mod pipeline;

// Public API - re-exports
pub use error::{Error, Result};
pub use options::Options;
pub use result::{CleanResult, CleaningReport, PassStats, SkipReason};

/// Sanitizes an HTML document or fragment using default options.
///
/// # Example
///
/// ```rust
/// use feed_sanitizer::clean;
///
/// let out = clean(r#"<a href="https://example.com" target="_top">site</a>"#)?;
/// assert_eq!(
///     out,
///     r#"<a href="https://example.com" target="_blank" rel="noopener noreferrer">site</a>"#
/// );
/// # Ok::<(), feed_sanitizer::Error>(())
/// ```
pub fn clean(html: &str) -> Result<String> {
    clean_with_options(html, &Options::default())
}

/// Sanitizes an HTML document or fragment with custom options.
///
/// # Example
///
/// ```rust
/// use feed_sanitizer::{clean_with_options, Options};
///
/// let mut options = Options::default();
/// options.element_denylist.remove("img");
///
/// let out = clean_with_options(r#"<p>A <img src="a.png"> B</p>"#, &options)?;
/// assert_eq!(out, r#"<p>A <img src="a.png"> B</p>"#);
/// # Ok::<(), feed_sanitizer::Error>(())
/// ```
pub fn clean_with_options(html: &str, options: &Options) -> Result<String> {
    sanitize::sanitize(html, options).map(|result| result.content)
}

/// Sanitizes and also returns what each pass changed.
pub fn clean_with_report(html: &str, options: &Options) -> Result<CleanResult> {
    sanitize::sanitize(html, options)
}

/// Sanitizes raw bytes, detecting their character encoding first.
///
/// The encoding comes from a byte order mark, an XML declaration, or a
/// `<meta>` charset declaration, in that order, defaulting to UTF-8.
/// Invalid sequences become U+FFFD instead of failing.
///
/// # Example
///
/// ```rust
/// use feed_sanitizer::clean_bytes;
///
/// let html = b"<meta charset=\"ISO-8859-1\"><p>Caf\xE9</p>";
/// assert_eq!(clean_bytes(html)?, "<p>Caf\u{e9}</p>");
/// # Ok::<(), feed_sanitizer::Error>(())
/// ```
pub fn clean_bytes(html: &[u8]) -> Result<String> {
    clean_bytes_with_options(html, &Options::default())
}

/// Sanitizes raw bytes with custom options, detecting their character encoding first.
pub fn clean_bytes_with_options(html: &[u8], options: &Options) -> Result<String> {
    let html_str = encoding::transcode_to_utf8(html);
    clean_with_options(&html_str, options)
}
