//! Result types for sanitizing and for the article cleaning workflow.

use serde::Serialize;

/// What each tree pass changed during one sanitizing call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PassStats {
    /// Denylisted subtrees detached.
    pub elements_removed: usize,

    /// Empty prunable containers detached.
    pub empty_removed: usize,

    /// Denylisted attributes stripped.
    pub attributes_removed: usize,

    /// Anchors given the canonical `target`/`rel` pair.
    pub anchors_normalized: usize,

    /// Comment nodes detached.
    pub comments_removed: usize,

    /// Whether output came from a `body` element rather than the whole document.
    pub body_found: bool,
}

/// Output of a sanitizing call together with its pass statistics.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CleanResult {
    /// The cleaned markup.
    pub content: String,

    /// Per-pass counters.
    pub stats: PassStats,
}

/// Why an item was left without formatted content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    /// Raw content missing or too short to be worth rewriting.
    EmptyContent,

    /// Raw content or rewritten text could not be parsed as HTML.
    Unparseable,
}

/// Summary of one pass over the pending items.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CleaningReport {
    /// Items whose formatted content was saved.
    pub cleaned: Vec<i64>,

    /// Items skipped, with the reason.
    pub skipped: Vec<(i64, SkipReason)>,

    /// Items whose rewriting failed, with the error message.
    pub failed: Vec<(i64, String)>,
}

impl CleaningReport {
    /// Number of items looked at.
    #[must_use]
    pub fn total(&self) -> usize {
        self.cleaned.len() + self.skipped.len() + self.failed.len()
    }

    /// Whether nothing was pending.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}
