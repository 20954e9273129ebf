//! Retry decorator for renderers
//!
//! Archive runs are fail-fast by default: a render failure aborts the whole
//! run. [`RetryingRenderer`] layers bounded re-attempts with exponential backoff
//! on top of any [`DocumentRenderer`] without changing that contract — with
//! the disabled policy it is the identity wrapper, and non-transient failures
//! are never re-attempted.

use crate::config::RetryPolicy;
use crate::render::traits::{DocumentRenderer, RenderError};
use async_trait::async_trait;
use url::Url;

/// Decorator re-attempting transient render failures
pub struct RetryingRenderer<R> {
    inner: R,
    policy: RetryPolicy,
}

impl<R> RetryingRenderer<R> {
    /// Wraps `inner` with the given policy
    pub fn new(inner: R, policy: RetryPolicy) -> Self {
        Self { inner, policy }
    }
}

#[async_trait]
impl<R: DocumentRenderer> DocumentRenderer for RetryingRenderer<R> {
    async fn render(&self, url: &Url) -> Result<Vec<u8>, RenderError> {
        let mut attempt = 1;
        loop {
            match self.inner.render(url).await {
                Err(e) if e.is_transient() && attempt < self.policy.max_attempts => {
                    let delay = self.policy.backoff(attempt);
                    tracing::warn!(
                        "Transient failure rendering {} (attempt {}/{}): {}. Retrying in {:?}",
                        url,
                        attempt,
                        self.policy.max_attempts,
                        e,
                        delay
                    );
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
                result => return result,
            }
        }
    }
}
