//! Configuration options for sanitizing.
//!
//! The `Options` struct carries the three denylist tables the tree passes
//! consult. It is an immutable value handed to the entry point; nothing in
//! the crate reads configuration from global state.

use std::collections::HashSet;

use crate::tags::{ATTRIBUTE_DENYLIST_SET, ELEMENT_DENYLIST_SET, PRUNABLE_EMPTY_TAG_SET};

/// Configuration options for sanitizing.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for the standard tables.
///
/// # Example
///
/// ```rust
/// use feed_sanitizer::Options;
///
/// // Use defaults
/// let options = Options::default();
///
/// // Keep images but otherwise behave as usual
/// let mut options = Options::default();
/// options.element_denylist.remove("img");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Tags removed together with their whole subtree.
    ///
    /// Default: [`crate::tags::ELEMENT_DENYLIST`]
    pub element_denylist: HashSet<String>,

    /// Container tags removed when recursively whitespace-only.
    ///
    /// Default: [`crate::tags::PRUNABLE_EMPTY_TAGS`]
    pub prunable_empty_tags: HashSet<String>,

    /// Attribute keys stripped from every element.
    ///
    /// Default: [`crate::tags::ATTRIBUTE_DENYLIST`]
    pub attribute_denylist: HashSet<String>,

    /// Unescape HTML entities in the serialized output.
    ///
    /// Disable when the output is embedded verbatim into other markup.
    ///
    /// Default: `true`
    pub unescape_entities: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            element_denylist: owned(&ELEMENT_DENYLIST_SET),
            prunable_empty_tags: owned(&PRUNABLE_EMPTY_TAG_SET),
            attribute_denylist: owned(&ATTRIBUTE_DENYLIST_SET),
            unescape_entities: true,
        }
    }
}

impl Options {
    /// Options with every table empty.
    ///
    /// Useful for exercising one pass at a time:
    ///
    /// ```rust
    /// use feed_sanitizer::Options;
    ///
    /// let options = Options::minimal().with_element_denylist(&["script"]);
    /// assert!(options.prunable_empty_tags.is_empty());
    /// ```
    #[must_use]
    pub fn minimal() -> Self {
        Self {
            element_denylist: HashSet::new(),
            prunable_empty_tags: HashSet::new(),
            attribute_denylist: HashSet::new(),
            unescape_entities: true,
        }
    }

    /// Replace the element denylist.
    #[must_use]
    pub fn with_element_denylist(mut self, tags: &[&str]) -> Self {
        self.element_denylist = tag_set(tags);
        self
    }

    /// Replace the prunable container tags.
    #[must_use]
    pub fn with_prunable_empty_tags(mut self, tags: &[&str]) -> Self {
        self.prunable_empty_tags = tag_set(tags);
        self
    }

    /// Replace the attribute denylist.
    #[must_use]
    pub fn with_attribute_denylist(mut self, keys: &[&str]) -> Self {
        self.attribute_denylist = tag_set(keys);
        self
    }

    /// Toggle entity unescaping of the output.
    #[must_use]
    pub fn with_unescape_entities(mut self, unescape: bool) -> Self {
        self.unescape_entities = unescape;
        self
    }
}

/// Lowercased owned set from a list of names.
///
/// The parser lowercases tag and attribute names, so tables are matched
/// lowercased as well.
fn tag_set(names: &[&str]) -> HashSet<String> {
    names.iter().map(|name| name.to_ascii_lowercase()).collect()
}

fn owned(set: &HashSet<&'static str>) -> HashSet<String> {
    set.iter().map(|name| (*name).to_string()).collect()
}
