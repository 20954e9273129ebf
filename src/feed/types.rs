use chrono::{DateTime, Utc};
use url::Url;

/// One published item from the feed
///
/// Immutable once parsed from a feed response.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    /// Entry title as published
    pub title: String,

    /// Canonical link to the entry's page
    pub link: Url,

    /// Publication timestamp
    pub published_at: DateTime<Utc>,
}

/// One page of feed entries, in feed order
#[derive(Debug, Clone)]
pub struct FeedPage {
    /// The page number this page was fetched as
    pub number: u32,

    /// Entries in feed order; empty means the feed is exhausted
    pub entries: Vec<Entry>,
}

impl FeedPage {
    /// Whether this page signals exhaustion
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
