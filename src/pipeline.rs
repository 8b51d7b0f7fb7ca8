//! Article cleaning workflow.
//!
//! Items whose formatted content is still missing are sanitized, sent to a
//! rewriting service together with a prompt template, and the service's
//! answer is sanitized again before being saved. The rewriting service and
//! the item store are traits so that any backend can be plugged in.

use std::path::Path;

use tracing::{debug, info, warn};

use crate::error::{Error, Result};
use crate::feed::FeedItem;
use crate::options::Options;
use crate::result::{CleaningReport, SkipReason};

/// Content at most this many bytes long counts as absent.
pub const MIN_CONTENT_LEN: usize = 10;

/// A service that rewrites article markup following a prompt.
pub trait Rewriter {
    /// Send `prompt` and return the service's answer.
    fn rewrite(&self, prompt: &str) -> Result<String>;
}

impl<F> Rewriter for F
where
    F: Fn(&str) -> Result<String>,
{
    fn rewrite(&self, prompt: &str) -> Result<String> {
        self(prompt)
    }
}

/// An item still waiting for formatted content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingItem {
    pub id: i64,
    pub content_raw: Option<String>,
}

/// Persistence for feed items.
pub trait ItemStore {
    /// Items whose formatted content is absent or no longer than [`MIN_CONTENT_LEN`].
    fn pending_items(&self) -> Result<Vec<PendingItem>>;

    /// Store the formatted content of item `id`.
    fn save_formatted(&mut self, id: i64, content: &str) -> Result<()>;
}

/// An [`ItemStore`] kept in memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    items: Vec<FeedItem>,
}

impl MemoryStore {
    #[must_use]
    pub fn new(items: Vec<FeedItem>) -> Self {
        Self { items }
    }

    #[must_use]
    pub fn items(&self) -> &[FeedItem] {
        &self.items
    }

    #[must_use]
    pub fn item(&self, id: i64) -> Option<&FeedItem> {
        self.items.iter().find(|item| item.id == id)
    }
}

impl ItemStore for MemoryStore {
    fn pending_items(&self) -> Result<Vec<PendingItem>> {
        Ok(self
            .items
            .iter()
            .filter(|item| {
                item.content_formatted
                    .as_ref()
                    .is_none_or(|formatted| formatted.len() <= MIN_CONTENT_LEN)
            })
            .map(|item| PendingItem {
                id: item.id,
                content_raw: item.content_raw.clone(),
            })
            .collect())
    }

    fn save_formatted(&mut self, id: i64, content: &str) -> Result<()> {
        let item = self
            .items
            .iter_mut()
            .find(|item| item.id == id)
            .ok_or_else(|| Error::StoreFailure(format!("no item with id {id}")))?;
        item.content_formatted = Some(content.to_string());
        Ok(())
    }
}

/// Settings for [`ArticleCleaner`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanerConfig {
    /// Instructions placed before the article in every prompt.
    pub prompt: String,

    /// Raw content at most this long is skipped.
    pub min_content_len: usize,

    /// Sanitizer options used on both sides of the rewrite.
    pub options: Options,
}

impl Default for CleanerConfig {
    fn default() -> Self {
        Self {
            prompt: String::new(),
            min_content_len: MIN_CONTENT_LEN,
            options: Options::default(),
        }
    }
}

impl CleanerConfig {
    /// Config with the given prompt template and default settings otherwise.
    #[must_use]
    pub fn with_prompt(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            ..Self::default()
        }
    }
}

/// Read a prompt template from a file.
///
/// # Errors
///
/// Returns [`Error::Io`] if the file cannot be read.
pub fn load_prompt(path: impl AsRef<Path>) -> Result<String> {
    Ok(std::fs::read_to_string(path)?)
}

/// Build the text sent to the rewriting service.
#[must_use]
pub fn build_prompt(template: &str, cleaned: &str) -> String {
    format!("{template} \n {cleaned}")
}

/// Drives pending items through sanitize, rewrite, sanitize, save.
#[derive(Debug)]
pub struct ArticleCleaner<R> {
    rewriter: R,
    config: CleanerConfig,
}

enum Outcome {
    Cleaned(String),
    Skipped(SkipReason),
    Failed(String),
}

impl<R: Rewriter> ArticleCleaner<R> {
    pub fn new(rewriter: R, config: CleanerConfig) -> Self {
        Self { rewriter, config }
    }

    #[must_use]
    pub fn config(&self) -> &CleanerConfig {
        &self.config
    }

    /// Process every pending item of `store`.
    ///
    /// Per-item problems end up in the report. A failing store aborts the run.
    ///
    /// # Errors
    ///
    /// Returns the store's error if listing or saving fails.
    pub fn clean_pending<S: ItemStore>(&self, store: &mut S) -> Result<CleaningReport> {
        let pending = store.pending_items()?;
        let mut report = CleaningReport::default();

        if pending.is_empty() {
            info!("no items to clean");
            return Ok(report);
        }
        info!(count = pending.len(), "cleaning pending items");

        for item in pending {
            match self.process(&item) {
                Outcome::Cleaned(formatted) => {
                    store.save_formatted(item.id, &formatted)?;
                    info!(item_id = item.id, len = formatted.len(), "saved formatted content");
                    report.cleaned.push(item.id);
                }
                Outcome::Skipped(reason) => {
                    info!(item_id = item.id, ?reason, "skipping item");
                    report.skipped.push((item.id, reason));
                }
                Outcome::Failed(message) => {
                    warn!(item_id = item.id, error = %message, "rewriting failed");
                    report.failed.push((item.id, message));
                }
            }
        }

        info!(
            cleaned = report.cleaned.len(),
            skipped = report.skipped.len(),
            failed = report.failed.len(),
            "cleaning finished"
        );
        Ok(report)
    }

    fn process(&self, item: &PendingItem) -> Outcome {
        let raw = match item.content_raw.as_deref() {
            Some(raw) if raw.len() > self.config.min_content_len => raw,
            _ => return Outcome::Skipped(SkipReason::EmptyContent),
        };

        let cleaned = match crate::clean_with_options(raw, &self.config.options) {
            Ok(cleaned) => cleaned,
            Err(err) => return Self::unparseable(item.id, &err),
        };

        let prompt = build_prompt(&self.config.prompt, &cleaned);
        let response = match self.rewriter.rewrite(&prompt) {
            Ok(response) => response,
            Err(err) => return Outcome::Failed(err.to_string()),
        };

        match crate::clean_with_options(&response, &self.config.options) {
            Ok(formatted) => Outcome::Cleaned(formatted),
            Err(err) => Self::unparseable(item.id, &err),
        }
    }

    fn unparseable(id: i64, err: &Error) -> Outcome {
        debug!(item_id = id, error = %err, "content has no markup");
        Outcome::Skipped(SkipReason::Unparseable)
    }
}
