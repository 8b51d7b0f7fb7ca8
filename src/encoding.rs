//! Character encoding detection and transcoding.
//!
//! Feed bodies reach us either as decoded text or as the raw bytes of an
//! enclosure or `content:encoded` payload. Raw bytes are sniffed for a byte
//! order mark, then for an XML declaration, then for a `<meta>` charset, and
//! converted to UTF-8.

use encoding_rs::{Encoding, UTF_8};
use regex::Regex;
use std::borrow::Cow;
use std::sync::LazyLock;

/// How many leading bytes are searched for a declaration.
const SNIFF_LEN: usize = 1024;

/// Match `<?xml ... encoding="..."?>`
#[allow(clippy::expect_used)]
static XML_DECL_ENCODING_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^\s*<\?xml[^>]*\sencoding\s*=\s*["']([A-Za-z0-9._:-]+)["']"#).expect("valid regex")
});

/// Match `<meta charset="...">`
#[allow(clippy::expect_used)]
static CHARSET_META_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+charset\s*=\s*["']?([^"'\s>;]+)"#).expect("valid regex")
});

/// Where an encoding decision came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncodingSource {
    /// A UTF-8 or UTF-16 byte order mark.
    ByteOrderMark,
    /// The `encoding` pseudo-attribute of an XML declaration.
    XmlDeclaration,
    /// A `<meta charset>` or `<meta http-equiv="Content-Type">` tag.
    MetaTag,
    /// Nothing declared; UTF-8 assumed.
    Default,
}

/// Detect the character encoding of raw HTML bytes.
///
/// Declarations naming an unknown label are ignored and the search goes on.
#[must_use]
pub fn detect_encoding(html: &[u8]) -> (&'static Encoding, EncodingSource) {
    if let Some((encoding, _bom_len)) = Encoding::for_bom(html) {
        return (encoding, EncodingSource::ByteOrderMark);
    }

    let head = String::from_utf8_lossy(&html[..html.len().min(SNIFF_LEN)]);

    if let Some(encoding) = declared(&XML_DECL_ENCODING_RE, &head) {
        return (encoding, EncodingSource::XmlDeclaration);
    }

    // Also covers `content="text/html; charset=..."`, which carries the
    // same `charset=` token inside a meta tag.
    if let Some(encoding) = declared(&CHARSET_META_RE, &head) {
        return (encoding, EncodingSource::MetaTag);
    }

    (UTF_8, EncodingSource::Default)
}

fn declared(re: &Regex, head: &str) -> Option<&'static Encoding> {
    re.captures(head)
        .and_then(|c| c.get(1))
        .and_then(|m| Encoding::for_label(m.as_str().trim().as_bytes()))
}

/// Transcode HTML bytes to a UTF-8 string.
///
/// A byte order mark is consumed. Invalid sequences are replaced with
/// U+FFFD rather than causing errors.
///
/// # Examples
///
/// ```
/// use feed_sanitizer::encoding::transcode_to_utf8;
///
/// let html = b"<p>Hello, World!</p>";
/// assert_eq!(transcode_to_utf8(html), "<p>Hello, World!</p>");
/// ```
#[must_use]
pub fn transcode_to_utf8(html: &[u8]) -> String {
    let (encoding, _source) = detect_encoding(html);

    // `decode` strips a BOM of any supported encoding and falls back to
    // lossy replacement.
    let (decoded, _encoding_used, _had_errors): (Cow<'_, str>, _, _) = encoding.decode(html);
    decoded.into_owned()
}
