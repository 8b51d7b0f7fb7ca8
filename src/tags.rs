//! Tag and attribute tables used by the default sanitizer configuration.
//!
//! Arrays keep the declaration order for iteration; the `HashSet` statics give
//! O(1) lookup.

use std::collections::HashSet;
use std::sync::LazyLock;

/// Elements removed together with their whole subtree.
///
/// Scripts, styles, media, embeds, interactive widgets, document metadata and
/// deprecated presentational tags. `figcaptions` is kept as written even though
/// no such element exists; `figcaption` goes away with its parent `figure`.
pub static ELEMENT_DENYLIST: [&str; 60] = [
    "hr", "figure", "figcaptions", "caption", "video", "audio", "img", "script",
    "style", "meta", "title", "head", "nav", "aside", "form", "input", "button",
    "select", "textarea", "label", "option", "optgroup", "progress", "meter",
    "fieldset", "legend", "details", "summary", "dialog", "menu", "menuitem",
    "command", "keygen", "source", "track", "map", "area", "embed", "object",
    "param", "canvas", "svg", "math", "iframe", "frame", "frameset", "noframes",
    "noscript", "applet", "basefont", "big", "blink", "center", "font",
    "marquee", "nobr", "spacer", "strike", "tt", "xmp",
];

/// Generic containers removed when they hold nothing but whitespace.
pub static PRUNABLE_EMPTY_TAGS: [&str; 6] = ["div", "p", "span", "article", "section", "template"];

/// Attributes stripped from every element: styling hooks and inline event handlers.
pub static ATTRIBUTE_DENYLIST: [&str; 13] = [
    "class", "id", "style", "onclick", "onload", "onmouseover", "onmouseout",
    "onmousedown", "onmouseup", "onmousemove", "onkeypress", "onkeydown", "onkeyup",
];

/// `ELEMENT_DENYLIST` as a `HashSet`
pub static ELEMENT_DENYLIST_SET: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    ELEMENT_DENYLIST.into_iter().collect()
});

/// `PRUNABLE_EMPTY_TAGS` as a `HashSet`
pub static PRUNABLE_EMPTY_TAG_SET: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    PRUNABLE_EMPTY_TAGS.into_iter().collect()
});

/// `ATTRIBUTE_DENYLIST` as a `HashSet`
pub static ATTRIBUTE_DENYLIST_SET: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    ATTRIBUTE_DENYLIST.into_iter().collect()
});

// === Anchor canonicalization ===

/// Tag name of hyperlinks.
pub const ANCHOR_TAG: &str = "a";

/// Attribute whose presence marks an anchor as a hyperlink.
pub const HREF_ATTR: &str = "href";

/// Canonical `target` attribute.
pub const TARGET_ATTR: (&str, &str) = ("target", "_blank");

/// Canonical `rel` attribute.
pub const REL_ATTR: (&str, &str) = ("rel", "noopener noreferrer");

/// Tag searched for by body extraction.
pub const BODY_TAG: &str = "body";
