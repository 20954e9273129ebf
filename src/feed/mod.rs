//! Feed source client
//!
//! This module consumes a WordPress-style paginated RSS feed:
//! - `types` defines the immutable [`Entry`] and [`FeedPage`] values
//! - `parser` turns a raw response body into entries, detecting feed-level
//!   malformation
//! - `pager` owns the pagination cursor and issues one request per page
//!
//! An empty page is the exhaustion signal and is not an error; a response
//! that cannot be understood is a [`FeedFetchError`] and aborts the run.

pub mod pager;
pub mod parser;
pub mod types;

use thiserror::Error;

/// Errors raised while fetching or parsing a feed page
///
/// All variants are fatal to the run under the default fail-fast policy.
#[derive(Debug, Error)]
pub enum FeedFetchError {
    #[error("Failed to request feed page {page}: {source}")]
    Http {
        page: u32,
        #[source]
        source: reqwest::Error,
    },

    #[error("Feed returned HTTP {status} for page {page}")]
    Status { page: u32, status: u16 },

    #[error("Malformed feed response for page {page}: {source}")]
    Malformed {
        page: u32,
        #[source]
        source: quick_xml::errors::serialize::DeError,
    },

    #[error("Feed entry on page {page} is missing its {field}")]
    IncompleteEntry { page: u32, field: &'static str },

    #[error("Invalid entry link '{link}': {source}")]
    InvalidLink {
        link: String,
        #[source]
        source: url::ParseError,
    },

    #[error("Invalid publication date '{value}': {source}")]
    InvalidDate {
        value: String,
        #[source]
        source: chrono::ParseError,
    },
}

impl FeedFetchError {
    /// Whether a re-attempt could plausibly succeed
    ///
    /// Transport failures and server-side statuses are transient; a response
    /// the parser rejected will be rejected again.
    pub fn is_transient(&self) -> bool {
        match self {
            FeedFetchError::Http { .. } => true,
            FeedFetchError::Status { status, .. } => *status >= 500 || *status == 429,
            _ => false,
        }
    }
}

pub use pager::FeedPager;
pub use types::{Entry, FeedPage};
