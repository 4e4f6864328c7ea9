use crate::ports::outbound::{HttpFetcher, HttpResponse};
use crate::shared::error::RegistryError;
use crate::shared::Result;
use async_trait::async_trait;
use reqwest::header::ACCEPT;
use std::time::Duration;

/// ReqwestHttpFetcher adapter - the real network behind the HttpFetcher port
///
/// Every request carries a descriptive User-Agent (crates.io rejects
/// anonymous clients) and is bounded by the configured timeout.
pub struct ReqwestHttpFetcher {
    client: reqwest::Client,
}

impl ReqwestHttpFetcher {
    pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

    /// Creates a fetcher with the given per-request timeout and User-Agent
    pub fn new(timeout: Duration, user_agent: &str) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()?;

        Ok(Self { client })
    }

    pub fn default_user_agent() -> String {
        format!(
            "sbom-analyzer/{} (supply-chain provenance report)",
            env!("CARGO_PKG_VERSION")
        )
    }
}

// Note: no Default implementation - client construction can fail and must be handled.

#[async_trait]
impl HttpFetcher for ReqwestHttpFetcher {
    async fn get(&self, url: &str) -> std::result::Result<HttpResponse, RegistryError> {
        let transport_error = |e: reqwest::Error| RegistryError::Transport {
            url: url.to_string(),
            message: e.to_string(),
        };

        let response = self
            .client
            .get(url)
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status().as_u16();
        let body = response.text().await.map_err(transport_error)?;

        Ok(HttpResponse::new(status, body))
    }
}
