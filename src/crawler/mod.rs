//! Crawl orchestration
//!
//! - `limiter` enforces the fixed delay between consecutive entries
//! - `coordinator` runs the page/entry loop from first page to exhaustion

pub mod coordinator;
pub mod limiter;

pub use coordinator::{Crawler, RunSummary};
pub use limiter::{RateLimiter, Sleeper, TokioSleeper};
