//! HTTP client for the CMS `/api/globals/<slug>` endpoints.
//!
//! Wraps the CMS REST API using [`reqwest`]. Every read is bounded by a
//! per-request timeout; there are no retries and nothing is cached.

use std::time::Duration;

use serde::de::DeserializeOwned;
use sope_core::content::GlobalDocument;
use sope_core::error::CoreError;
use sope_core::globals::GlobalSlug;
use sope_core::media::BaseUrl;

/// Default bound on a single CMS read.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// HTTP client for a single CMS instance.
#[derive(Debug, Clone)]
pub struct CmsClient {
    client: reqwest::Client,
    base_url: BaseUrl,
    timeout: Duration,
}

/// Errors from the CMS REST API layer.
#[derive(Debug, thiserror::Error)]
pub enum CmsError {
    /// The HTTP request itself failed (network, DNS, TLS, timeout).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The CMS returned a non-2xx status code.
    #[error("CMS API error ({status}): {body}")]
    ApiError {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },

    /// The body was not valid JSON for the expected document shape.
    #[error("Malformed response body: {0}")]
    Decode(#[from] serde_json::Error),

    /// The body decoded but a required group was missing.
    #[error("Invalid document: {0}")]
    Invalid(#[from] CoreError),
}

impl CmsError {
    /// Whether the request timed out before the CMS answered.
    pub fn is_timeout(&self) -> bool {
        matches!(self, CmsError::Request(e) if e.is_timeout())
    }
}

impl CmsClient {
    /// Create a client for the CMS at `base_url`.
    pub fn new(base_url: BaseUrl, timeout: Duration) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url,
            timeout,
        }
    }

    /// Fetch a global and decode its body as `T`, without normalization.
    ///
    /// Sends `GET {base}/api/globals/{slug}`.
    pub async fn fetch_global<T: DeserializeOwned>(&self, slug: GlobalSlug) -> Result<T, CmsError> {
        let url = self.base_url.join(&slug.endpoint());
        tracing::debug!(%slug, %url, "Fetching CMS global");

        let response = self
            .client
            .get(url)
            .timeout(self.timeout)
            .send()
            .await?;

        let response = Self::ensure_success(response).await?;
        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    /// Fetch a global and normalize it into a renderable document.
    pub async fn fetch_document<D: GlobalDocument>(&self) -> Result<D, CmsError> {
        let raw = self.fetch_global::<D::Raw>(D::SLUG).await?;
        Ok(D::normalize(raw, &self.base_url)?)
    }

    // ---- private helpers ----

    /// Ensure the response has a success status code. Returns the
    /// response unchanged on success, or a [`CmsError::ApiError`]
    /// containing the status and body text on failure.
    async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, CmsError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(CmsError::ApiError {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }
}
