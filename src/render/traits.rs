//! Renderer trait and error types

use async_trait::async_trait;
use thiserror::Error;
use url::Url;

/// Errors raised while rendering a document
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Failed to request render of {url}: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Render service returned HTTP {status} for {url}")]
    Status { url: String, status: u16 },
}

impl RenderError {
    /// Whether a re-attempt could plausibly succeed
    pub fn is_transient(&self) -> bool {
        match self {
            RenderError::Http { .. } => true,
            RenderError::Status { status, .. } => *status >= 500 || *status == 429,
        }
    }
}

/// Converts a URL into document artifact bytes
///
/// The crawl loop treats this as an opaque call: one invocation per entry,
/// awaited to completion before anything else happens.
#[async_trait]
pub trait DocumentRenderer: Send + Sync {
    /// Renders the page at `url` into artifact bytes
    async fn render(&self, url: &Url) -> Result<Vec<u8>, RenderError>;
}
