//! Feeds, their stored items, and entries fresh off the wire.
//!
//! Timestamps are `Option<DateTime<Utc>>`; a missing timestamp sorts as the
//! oldest possible value and reads as "More than a year ago".

use std::cmp::Ordering;
use std::collections::HashSet;

use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};

/// Minutes after which a feed is due to be fetched again.
pub const REFRESH_INTERVAL_MINUTES: i64 = 15;

/// A stored feed item.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedItem {
    pub id: i64,
    pub feed_id: i64,
    pub title: String,
    pub link: String,
    pub author: String,

    /// Summary as published by the feed.
    pub summary_raw: Option<String>,
    pub summary_formatted: Option<String>,

    /// Full content as published by the feed.
    pub content_raw: Option<String>,

    /// Content after rewriting and sanitizing.
    pub content_formatted: Option<String>,

    pub published: Option<DateTime<Utc>>,
    pub updated: Option<DateTime<Utc>>,

    /// When the item was first stored.
    pub extracted: Option<DateTime<Utc>>,

    pub categories: Vec<String>,
    pub is_read: bool,
    pub is_hidden: bool,
    pub prev_item_id: Option<i64>,
    pub next_item_id: Option<i64>,
}

/// A subscribed feed and the items stored for it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feed {
    pub id: i64,
    pub name: String,
    pub description: String,

    /// `rss`, `atom` or `json`.
    pub feed_type: String,
    pub url: String,
    pub last_publication: Option<DateTime<Utc>>,
    pub last_update: Option<DateTime<Utc>>,
    pub categories: Vec<String>,

    /// Unread count cached by the store; zero means "not cached".
    pub entries_unread: usize,
    pub entries: Vec<FeedItem>,
}

impl Feed {
    /// Sort entries newest first.
    ///
    /// Ties on publication date fall back to extraction date (newest first),
    /// then to title (alphabetical).
    pub fn order_entries(&mut self) {
        self.entries.sort_by(compare_entries);
    }

    /// Human-readable age of the last fetch.
    #[must_use]
    pub fn when_was_last_update(&self, now: DateTime<Utc>) -> String {
        recency_label(self.last_update, now)
    }

    /// Human-readable age of the newest publication.
    #[must_use]
    pub fn when_was_last_publication(&self, now: DateTime<Utc>) -> String {
        recency_label(self.last_publication, now)
    }

    /// Cached unread count when there is one, otherwise the number of
    /// entries neither read nor hidden.
    #[must_use]
    pub fn number_of_unread_items(&self) -> usize {
        if self.entries_unread > 0 {
            return self.entries_unread;
        }
        self.entries
            .iter()
            .filter(|entry| !entry.is_read && !entry.is_hidden)
            .count()
    }

    /// Whether the feed has never been fetched or was last fetched more than
    /// [`REFRESH_INTERVAL_MINUTES`] ago.
    #[must_use]
    pub fn needs_refresh(&self, now: DateTime<Utc>) -> bool {
        self.last_update
            .is_none_or(|at| at < now - TimeDelta::minutes(REFRESH_INTERVAL_MINUTES))
    }
}

fn compare_entries(a: &FeedItem, b: &FeedItem) -> Ordering {
    // `None < Some(_)`, so reversing the comparison puts missing dates last.
    b.published
        .cmp(&a.published)
        .then_with(|| b.extracted.cmp(&a.extracted))
        .then_with(|| a.title.cmp(&b.title))
}

fn recency_label(at: Option<DateTime<Utc>>, now: DateTime<Utc>) -> String {
    const YEAR: &str = "More than a year ago";

    let Some(at) = at else {
        return YEAR.to_string();
    };
    let elapsed = now - at;
    let days = TimeDelta::days;

    if elapsed > days(365) {
        return YEAR.to_string();
    }
    for months in (2..=6).rev() {
        if elapsed > days(30 * months) {
            return format!("More than {months} months ago");
        }
    }
    if elapsed > days(30) {
        return "More than a month ago".to_string();
    }
    for weeks in (2..=3).rev() {
        if elapsed > days(7 * weeks) {
            return format!("More than {weeks} weeks ago");
        }
    }
    if elapsed > days(7) {
        return "More than a week ago".to_string();
    }
    if elapsed > TimeDelta::hours(48) {
        return format!("{} days ago", elapsed.num_hours() / 24);
    }
    if elapsed > TimeDelta::hours(24) {
        return "Yesterday".to_string();
    }
    if elapsed > TimeDelta::hours(2) {
        return format!("{} hours ago", elapsed.num_hours());
    }
    if elapsed > TimeDelta::hours(1) {
        return "Less than an hour ago".to_string();
    }
    "Just now".to_string()
}

/// An entry as parsed from a fetched feed document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedEntry {
    pub guid: String,
    pub title: String,
    pub link: String,
    pub authors: Vec<String>,
    pub description: String,
    pub content: String,
    pub published: Option<DateTime<Utc>>,
    pub updated: Option<DateTime<Utc>>,
    pub categories: Vec<String>,
}

/// A feed entry ready to be stored as a new [`FeedItem`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewItem {
    pub feed_id: i64,
    pub guid: String,
    pub title: String,
    pub link: String,
    pub author: String,
    pub summary_raw: String,
    pub content_raw: String,
    pub published: Option<DateTime<Utc>>,
    pub updated: Option<DateTime<Utc>>,
    pub categories: Vec<String>,
}

impl NewItem {
    /// Map a parsed entry onto the stored shape.
    ///
    /// Author names are joined with `", "`. An entry without content falls
    /// back to its description; the description is also kept as the summary.
    #[must_use]
    pub fn from_entry(feed_id: i64, entry: &FeedEntry) -> Self {
        let content_raw = if entry.content.is_empty() {
            entry.description.clone()
        } else {
            entry.content.clone()
        };

        Self {
            feed_id,
            guid: entry.guid.clone(),
            title: entry.title.clone(),
            link: entry.link.clone(),
            author: entry.authors.join(", "),
            summary_raw: entry.description.clone(),
            content_raw,
            published: entry.published,
            updated: entry.updated,
            categories: entry.categories.clone(),
        }
    }
}

/// Entries whose GUID is neither in `known_guids` nor seen earlier in `entries`.
#[must_use]
pub fn dedup_new_entries(entries: Vec<FeedEntry>, known_guids: &HashSet<String>) -> Vec<FeedEntry> {
    let mut seen: HashSet<String> = HashSet::new();
    entries
        .into_iter()
        .filter(|entry| !known_guids.contains(&entry.guid) && seen.insert(entry.guid.clone()))
        .collect()
}
