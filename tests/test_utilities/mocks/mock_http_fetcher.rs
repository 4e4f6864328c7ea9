use async_trait::async_trait;
use sbom_analyzer::prelude::*;
use sbom_analyzer::shared::error::RegistryError;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Base URL the mock registry answers on
pub const MOCK_REGISTRY: &str = "https://registry.test";

/// Mock HttpFetcher serving canned registry documents
///
/// Paths without a canned response answer with `fallback_status`. Clones
/// share the request log, so a test can keep a handle after handing the
/// fetcher to the registry client.
#[derive(Clone)]
pub struct MockHttpFetcher {
    responses: HashMap<String, (u16, String)>,
    fallback_status: u16,
    requests: Arc<Mutex<Vec<String>>>,
}

impl MockHttpFetcher {
    pub fn new() -> Self {
        Self {
            responses: HashMap::new(),
            fallback_status: 404,
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn with_response(mut self, path: &str, status: u16, body: &str) -> Self {
        self.responses.insert(
            format!("{}{}", MOCK_REGISTRY, path),
            (status, body.to_string()),
        );
        self
    }

    pub fn with_fallback_status(mut self, status: u16) -> Self {
        self.fallback_status = status;
        self
    }

    /// Registers the three crates.io documents for one crate
    pub fn with_crate(self, name: &str, crate_body: &str, owners_body: &str, downloads_body: &str) -> Self {
        self.with_response(&format!("/api/v1/crates/{}", name), 200, crate_body)
            .with_response(&format!("/api/v1/crates/{}/owners", name), 200, owners_body)
            .with_response(&format!("/api/v1/crates/{}/downloads", name), 200, downloads_body)
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

impl Default for MockHttpFetcher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HttpFetcher for MockHttpFetcher {
    async fn get(&self, url: &str) -> std::result::Result<HttpResponse, RegistryError> {
        self.requests.lock().unwrap().push(url.to_string());
        let (status, body) = self
            .responses
            .get(url)
            .cloned()
            .unwrap_or((self.fallback_status, String::new()));
        Ok(HttpResponse::new(status, body))
    }
}
