//! Outbound request rate limiting
//!
//! A fixed delay between consecutive entries keeps the archiver from
//! hammering the feed's origin server. The crawl is strictly sequential, so a
//! plain inline wait is sufficient; execution never proceeds while the
//! limiter is waiting. Were parallel renders ever introduced, this would have
//! to become a shared token-bucket limiter instead.

use async_trait::async_trait;
use std::time::Duration;

/// Suspends execution for a duration
///
/// Seam between the limiter and the clock: production uses [`TokioSleeper`],
/// tests inject a recording fake so waited durations are observable without
/// real sleeping.
#[async_trait]
pub trait Sleeper: Send + Sync {
    async fn sleep(&self, duration: Duration);
}

/// Real clock, backed by the tokio timer
#[derive(Debug, Default, Clone, Copy)]
pub struct TokioSleeper;

#[async_trait]
impl Sleeper for TokioSleeper {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

/// Enforces a fixed delay between consecutive outbound renders
pub struct RateLimiter<S: Sleeper = TokioSleeper> {
    delay: Duration,
    sleeper: S,
}

impl RateLimiter<TokioSleeper> {
    /// Creates a limiter waiting `delay` between entries
    pub fn new(delay: Duration) -> Self {
        Self::with_sleeper(delay, TokioSleeper)
    }
}

impl<S: Sleeper> RateLimiter<S> {
    /// Creates a limiter with an injected sleeper
    pub fn with_sleeper(delay: Duration, sleeper: S) -> Self {
        Self { delay, sleeper }
    }

    /// The configured delay
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Waits for the configured delay
    ///
    /// Invoked unconditionally after every fully processed entry, independent
    /// of outcome.
    pub async fn wait(&self) {
        if self.delay.is_zero() {
            return;
        }
        self.sleeper.sleep(self.delay).await;
    }
}
