//! Feed pagination
//!
//! [`FeedPager`] owns the page cursor and retrieves successive pages from the
//! feed source. The cursor is strictly increasing: it advances by exactly 1
//! after every attempt that returns a non-error result (including an empty
//! page) and never advances on a [`FeedFetchError`].

use crate::config::RetryPolicy;
use crate::feed::parser::parse_feed_page;
use crate::feed::types::{Entry, FeedPage};
use crate::feed::FeedFetchError;
use reqwest::Client;
use url::Url;

/// Retrieves successive pages of feed entries
pub struct FeedPager {
    client: Client,
    feed_url: Url,
    cursor: u32,
    retry: RetryPolicy,
}

impl FeedPager {
    /// Creates a pager starting at `start_page`
    ///
    /// # Arguments
    ///
    /// * `client` - HTTP client used for all feed requests
    /// * `feed_url` - Base feed URL; the page number is appended as the
    ///   `paged` query parameter
    /// * `start_page` - Initial cursor value
    /// * `retry` - Retry policy for transient failures; the disabled policy
    ///   makes every failure immediately fatal
    pub fn new(client: Client, feed_url: Url, start_page: u32, retry: RetryPolicy) -> Self {
        Self {
            client,
            feed_url,
            cursor: start_page,
            retry,
        }
    }

    /// Current cursor value: the next page that will be requested
    pub fn cursor(&self) -> u32 {
        self.cursor
    }

    /// Builds the URL for a given page number
    fn page_url(&self, page: u32) -> Url {
        let mut url = self.feed_url.clone();
        url.query_pairs_mut()
            .append_pair("paged", &page.to_string());
        url
    }

    /// Fetches the page at the current cursor and advances the cursor
    ///
    /// Emits a progress notification before the request. On any error the
    /// cursor is left unchanged so the failed page is re-requested by a
    /// subsequent call, never skipped.
    ///
    /// # Returns
    ///
    /// * `Ok(FeedPage)` - Entries in feed order; an empty page means the feed
    ///   is exhausted
    /// * `Err(FeedFetchError)` - The request or parse failed
    pub async fn next_page(&mut self) -> Result<FeedPage, FeedFetchError> {
        let page = self.cursor;
        tracing::info!("Fetching page {}", page);

        let mut attempt = 1;
        let entries = loop {
            match self.fetch_once(page).await {
                Ok(entries) => break entries,
                Err(e) if e.is_transient() && attempt < self.retry.max_attempts => {
                    let delay = self.retry.backoff(attempt);
                    tracing::warn!(
                        "Transient failure fetching page {} (attempt {}/{}): {}. Retrying in {:?}",
                        page,
                        attempt,
                        self.retry.max_attempts,
                        e,
                        delay
                    );
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
                Err(e) => return Err(e),
            }
        };

        self.cursor += 1;
        Ok(FeedPage { number: page, entries })
    }

    /// One request/parse attempt for a page
    async fn fetch_once(&self, page: u32) -> Result<Vec<Entry>, FeedFetchError> {
        let url = self.page_url(page);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|source| FeedFetchError::Http { page, source })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FeedFetchError::Status {
                page,
                status: status.as_u16(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|source| FeedFetchError::Http { page, source })?;

        parse_feed_page(&body, page)
    }
}
