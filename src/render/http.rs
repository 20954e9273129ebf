//! Render service client
//!
//! Posts each entry link to the render service together with the fixed page
//! stylesheet and returns the PDF bytes from the response. The stylesheet is
//! never interpreted here; it travels with the request unchanged.

use crate::render::traits::{DocumentRenderer, RenderError};
use crate::render::PAGE_STYLESHEET;
use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use std::time::Duration;
use url::Url;

/// Rendering can dominate a slow page's request budget, so the per-request
/// timeout is far above the client default.
const RENDER_TIMEOUT: Duration = Duration::from_secs(120);

/// Request body for the render service's `/render` endpoint
#[derive(Debug, Serialize)]
struct RenderRequest<'a> {
    url: &'a str,
    stylesheet: &'a str,
}

/// HTTP client for the document render service
pub struct HttpRenderer {
    client: Client,
    service: Url,
    stylesheet: String,
}

impl HttpRenderer {
    /// Creates a renderer against the given service base URL
    ///
    /// Uses the archive's fixed page stylesheet; see [`PAGE_STYLESHEET`].
    pub fn new(client: Client, service: Url) -> Self {
        Self {
            client,
            service,
            stylesheet: PAGE_STYLESHEET.to_string(),
        }
    }

    /// Overrides the stylesheet sent with every render request
    pub fn with_stylesheet(mut self, stylesheet: impl Into<String>) -> Self {
        self.stylesheet = stylesheet.into();
        self
    }

    /// The service's render endpoint
    fn endpoint(&self) -> Url {
        let mut url = self.service.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push("render");
        }
        url
    }
}

#[async_trait]
impl DocumentRenderer for HttpRenderer {
    async fn render(&self, url: &Url) -> Result<Vec<u8>, RenderError> {
        let request = RenderRequest {
            url: url.as_str(),
            stylesheet: &self.stylesheet,
        };

        let response = self
            .client
            .post(self.endpoint())
            .timeout(RENDER_TIMEOUT)
            .json(&request)
            .send()
            .await
            .map_err(|source| RenderError::Http {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(RenderError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|source| RenderError::Http {
                url: url.to_string(),
                source,
            })?;

        Ok(bytes.to_vec())
    }
}
