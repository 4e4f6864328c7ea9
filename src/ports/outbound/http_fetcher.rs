use crate::shared::error::RegistryError;
use async_trait::async_trait;

/// Raw HTTP response as seen by registry adapters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.status == 200
    }
}

/// HttpFetcher port for read-only registry requests
///
/// Non-200 statuses are returned as responses, not errors; only failures to
/// obtain a response at all surface as `RegistryError::Transport`.
#[async_trait]
pub trait HttpFetcher: Send + Sync {
    async fn get(&self, url: &str) -> Result<HttpResponse, RegistryError>;
}
