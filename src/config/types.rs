use std::path::PathBuf;
use std::time::Duration;
use url::Url;

/// Resolved configuration for one archive run
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// URL of the paginated feed to archive
    pub feed_url: Url,

    /// Absolute directory artifacts are written into
    pub output_dir: PathBuf,

    /// Delay enforced between consecutive entries
    pub wait: Duration,

    /// Initial page cursor
    pub start_page: u32,

    /// Base URL of the document render service
    pub render_service: Url,

    /// Retry policy for transient fetch/render failures
    pub retry: RetryPolicy,
}

/// Retry policy for transient failures
///
/// Archive runs are fail-fast: any fetch or render failure aborts the run.
/// This policy is the one resilience layer on top of that contract.
/// `disabled()` performs a single attempt and keeps every failure immediately
/// fatal; it is the default.
#[derive(Debug, Clone, Copy)]
pub struct RetryPolicy {
    /// Total attempts per operation (minimum 1)
    pub max_attempts: u32,

    /// Delay before the first re-attempt; doubles on each subsequent one
    pub base_delay: Duration,
}

impl RetryPolicy {
    /// Single attempt, no re-tries
    pub fn disabled() -> Self {
        Self {
            max_attempts: 1,
            base_delay: Duration::from_millis(500),
        }
    }

    /// Policy performing `retries` re-attempts after the initial one
    pub fn with_retries(retries: u32) -> Self {
        Self {
            max_attempts: retries + 1,
            ..Self::disabled()
        }
    }

    /// Overrides the backoff base delay (tests use a near-zero value)
    pub fn with_base_delay(mut self, base_delay: Duration) -> Self {
        self.base_delay = base_delay;
        self
    }

    /// Backoff before re-attempt number `attempt` (1-based count of attempts
    /// already made): `base_delay * 2^(attempt - 1)`
    pub fn backoff(&self, attempt: u32) -> Duration {
        self.base_delay * 2u32.saturating_pow(attempt.saturating_sub(1))
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::disabled()
    }
}
