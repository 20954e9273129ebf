//! RSS 2.0 feed parsing
//!
//! Deserializes a raw feed response into [`Entry`] values with quick-xml's
//! serde support. A structural parse failure or an item missing a required
//! field is feed-level malformation, distinct from a legitimately empty
//! channel.

use crate::feed::types::Entry;
use crate::feed::FeedFetchError;
use chrono::{DateTime, Utc};
use quick_xml::de::from_str;
use serde::Deserialize;
use url::Url;

/// `<rss>` document root
#[derive(Debug, Deserialize)]
struct RssDocument {
    channel: RssChannel,
}

/// `<channel>` element; `item` may be absent past the last page
#[derive(Debug, Deserialize)]
struct RssChannel {
    #[serde(default, rename = "item")]
    items: Vec<RssItem>,
}

/// `<item>` element with the fields the archiver consumes
///
/// All fields are optional at the XML layer so that a missing one surfaces as
/// a structured error rather than a deserializer failure.
#[derive(Debug, Deserialize)]
struct RssItem {
    title: Option<String>,
    link: Option<String>,
    #[serde(rename = "pubDate")]
    pub_date: Option<String>,
}

/// Parses a feed page body into entries, in feed order
///
/// # Arguments
///
/// * `body` - Raw response body for the page
/// * `page` - Page number, used for error context only
///
/// # Returns
///
/// * `Ok(Vec<Entry>)` - Entries in feed order; empty when the feed is exhausted
/// * `Err(FeedFetchError)` - The response is structurally malformed
pub fn parse_feed_page(body: &str, page: u32) -> Result<Vec<Entry>, FeedFetchError> {
    let document: RssDocument =
        from_str(body).map_err(|source| FeedFetchError::Malformed { page, source })?;

    document
        .channel
        .items
        .into_iter()
        .map(|item| convert_item(item, page))
        .collect()
}

/// Converts one `<item>` into an [`Entry`], requiring all archived fields
fn convert_item(item: RssItem, page: u32) -> Result<Entry, FeedFetchError> {
    let title = item
        .title
        .ok_or(FeedFetchError::IncompleteEntry { page, field: "title" })?;

    let link = item
        .link
        .ok_or(FeedFetchError::IncompleteEntry { page, field: "link" })?;
    let link = Url::parse(&link).map_err(|source| FeedFetchError::InvalidLink { link, source })?;

    let pub_date = item
        .pub_date
        .ok_or(FeedFetchError::IncompleteEntry { page, field: "pubDate" })?;
    let published_at = parse_pub_date(&pub_date)?;

    Ok(Entry {
        title,
        link,
        published_at,
    })
}

/// Parses an RFC 2822 `pubDate` into UTC
fn parse_pub_date(value: &str) -> Result<DateTime<Utc>, FeedFetchError> {
    DateTime::parse_from_rfc2822(value.trim())
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|source| FeedFetchError::InvalidDate {
            value: value.to_string(),
            source,
        })
}
