use crate::ports::outbound::{HttpFetcher, HttpResponse};
use crate::shared::error::RegistryError;
use async_trait::async_trait;
use dashmap::DashMap;
use std::sync::Arc;

/// CachingHttpFetcher wraps an HttpFetcher and memoizes successful responses.
///
/// SBOMs routinely list several versions of the same crate; the registry
/// documents are per crate, so the second lookup is answered from memory
/// instead of hitting the registry again. Only 200 responses whose body is a
/// well-formed JSON document are cached. Anything else, such as an HTML
/// rate-limit page served with a 200, goes back to the inner fetcher on the
/// next attempt.
pub struct CachingHttpFetcher<H: HttpFetcher> {
    inner: H,
    cache: Arc<DashMap<String, HttpResponse>>,
}

impl<H: HttpFetcher> CachingHttpFetcher<H> {
    /// Creates a new caching fetcher wrapping the given inner fetcher
    pub fn new(inner: H) -> Self {
        Self {
            inner,
            cache: Arc::new(DashMap::new()),
        }
    }

    /// Returns the current cache size (for testing/monitoring)
    pub fn cache_size(&self) -> usize {
        self.cache.len()
    }
}

#[async_trait]
impl<H: HttpFetcher> HttpFetcher for CachingHttpFetcher<H> {
    async fn get(&self, url: &str) -> Result<HttpResponse, RegistryError> {
        let cached = self.cache.get(url).map(|entry| entry.value().clone());
        if let Some(response) = cached {
            tracing::debug!("Cache hit for {}", url);
            return Ok(response);
        }

        let response = self.inner.get(url).await?;

        if is_cacheable(&response) {
            self.cache.insert(url.to_string(), response.clone());
        }

        Ok(response)
    }
}

fn is_cacheable(response: &HttpResponse) -> bool {
    response.is_ok() && serde_json::from_str::<serde::de::IgnoredAny>(&response.body).is_ok()
}
