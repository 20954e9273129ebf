//! Crawl loop
//!
//! Walks the feed page by page and archives every entry it sees:
//!
//! 1. Fetch the page at the cursor
//! 2. If the page is empty, the feed is exhausted; stop successfully
//! 3. Otherwise, for each entry in feed order: render its link, write the
//!    artifact, then wait out the rate limit
//! 4. Advance to the next page
//!
//! The loop is strictly sequential; nothing overlaps. Any feed, render, or
//! write failure aborts the entire run immediately — entries beyond the
//! failure point are never processed.

use crate::archive::ArchiveWriter;
use crate::crawler::limiter::{RateLimiter, Sleeper};
use crate::feed::FeedPager;
use crate::render::DocumentRenderer;
use crate::ArchiveError;
use std::time::Instant;

/// Counters reported after a successful run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Pages fetched, including the final empty one
    pub pages_fetched: u32,

    /// Artifacts written
    pub entries_archived: u64,

    /// Last non-empty page processed, if any entries were seen
    pub last_page: Option<u32>,
}

/// Orchestrates pager, renderer, writer, and limiter for one run
pub struct Crawler<R: DocumentRenderer, S: Sleeper> {
    pager: FeedPager,
    renderer: R,
    writer: ArchiveWriter,
    limiter: RateLimiter<S>,
}

impl<R: DocumentRenderer, S: Sleeper> Crawler<R, S> {
    /// Assembles a crawler from its collaborators
    pub fn new(
        pager: FeedPager,
        renderer: R,
        writer: ArchiveWriter,
        limiter: RateLimiter<S>,
    ) -> Self {
        Self {
            pager,
            renderer,
            writer,
            limiter,
        }
    }

    /// The pager's current cursor, exposed for observation
    pub fn cursor(&self) -> u32 {
        self.pager.cursor()
    }

    /// Runs the crawl to feed exhaustion
    ///
    /// # Returns
    ///
    /// * `Ok(RunSummary)` - The feed was walked to its first empty page
    /// * `Err(ArchiveError)` - The first fatal failure, with everything after
    ///   it unprocessed
    pub async fn run(&mut self) -> Result<RunSummary, ArchiveError> {
        let started = Instant::now();
        let mut summary = RunSummary::default();

        loop {
            let page = self.pager.next_page().await?;
            summary.pages_fetched += 1;

            if page.is_empty() {
                tracing::info!("No more entries");
                break;
            }
            summary.last_page = Some(page.number);

            for entry in &page.entries {
                tracing::info!("Generating PDF for: {}", entry.title);

                let bytes = self.renderer.render(&entry.link).await?;
                let path = self.writer.write(entry, &bytes)?;
                tracing::debug!("Wrote {} ({} bytes)", path.display(), bytes.len());
                summary.entries_archived += 1;

                self.limiter.wait().await;
            }
        }

        tracing::info!(
            "Archived {} entries from {} pages in {:?}",
            summary.entries_archived,
            summary.pages_fetched,
            started.elapsed()
        );

        Ok(summary)
    }
}
