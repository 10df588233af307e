//! Upstream page retrieval with failure absorption.
//!
//! The fetch boundary never propagates failure: any transport problem is
//! logged as a warning and converted to an empty record set. A transient
//! upstream outage therefore degrades data freshness instead of failing
//! client requests.

use async_trait::async_trait;

use super::extract::extract_events;
use super::source::PageSource;
use crate::config::GatewayConfig;
use crate::domain::Earthquake;
use crate::error::GatewayError;

/// Capability to retrieve and extract one upstream listing page.
///
/// Implementations must absorb their own failures; the return type has no
/// error variant on purpose.
#[async_trait]
pub trait FetchPage: Send + Sync + std::fmt::Debug {
    /// Retrieves the page for `source` and extracts its event records.
    /// Returns an empty vec on any transport or parse failure.
    async fn fetch_page(&self, source: &PageSource) -> Vec<Earthquake>;
}

/// HTTP-backed [`FetchPage`] implementation over a shared `reqwest` client.
#[derive(Debug, Clone)]
pub struct PageFetcher {
    client: reqwest::Client,
    latest_url: String,
    archive_base_url: String,
}

impl PageFetcher {
    /// Creates a fetcher from the gateway configuration.
    ///
    /// The client is built once with the configured User-Agent and, when
    /// enabled, relaxed certificate validation — the upstream serves an
    /// incomplete certificate chain.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::Internal`] if the HTTP client cannot be
    /// constructed.
    pub fn from_config(config: &GatewayConfig) -> Result<Self, GatewayError> {
        let client = reqwest::Client::builder()
            .user_agent(&config.user_agent)
            .danger_accept_invalid_certs(config.accept_invalid_certs)
            .build()
            .map_err(|e| GatewayError::Internal(e.to_string()))?;
        Ok(Self {
            client,
            latest_url: config.latest_url.clone(),
            archive_base_url: config.archive_base_url.clone(),
        })
    }

    /// One GET returning the response body, or an [`GatewayError::Upstream`]
    /// on connection failure or non-2xx status.
    async fn try_fetch(&self, url: &str) -> Result<String, GatewayError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(|e| GatewayError::Upstream(e.to_string()))?;
        response
            .text()
            .await
            .map_err(|e| GatewayError::Upstream(e.to_string()))
    }
}

#[async_trait]
impl FetchPage for PageFetcher {
    async fn fetch_page(&self, source: &PageSource) -> Vec<Earthquake> {
        let url = source.url(&self.latest_url, &self.archive_base_url);
        match self.try_fetch(&url).await {
            Ok(body) => extract_events(&body),
            Err(error) => {
                tracing::warn!(%url, %error, "earthquake page fetch failed; contributing zero records");
                Vec::new()
            }
        }
    }
}
