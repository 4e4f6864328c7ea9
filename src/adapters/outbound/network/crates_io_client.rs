use crate::ports::outbound::{EnrichmentOutcome, HttpFetcher, PackageMetadataRepository};
use crate::sbom_analysis::domain::PackageRecord;
use crate::sbom_analysis::policies::RetryPolicy;
use crate::shared::error::RegistryError;
use async_trait::async_trait;
use chrono::{DateTime, FixedOffset};
use serde::de::DeserializeOwned;
use serde::Deserialize;

/// Timestamp layout of `versions[].created_at`
const CREATED_AT_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f%z";

#[derive(Debug, Deserialize)]
struct CrateResponse {
    #[serde(rename = "crate")]
    krate: CrateInfo,
    #[serde(default)]
    versions: Vec<CrateVersion>,
}

#[derive(Debug, Deserialize)]
struct CrateInfo {
    #[serde(default)]
    repository: Option<String>,
    #[serde(default)]
    homepage: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CrateVersion {
    num: String,
    #[serde(default)]
    created_at: Option<String>,
    #[serde(default)]
    published_by: Option<Publisher>,
}

#[derive(Debug, Deserialize)]
struct Publisher {
    #[serde(default)]
    login: Option<String>,
}

#[derive(Debug, Deserialize)]
struct OwnersResponse {
    #[serde(default)]
    users: Vec<CrateOwner>,
}

#[derive(Debug, Deserialize)]
struct CrateOwner {
    login: String,
    #[serde(default)]
    name: Option<String>,
}

impl CrateOwner {
    fn descriptor(&self) -> String {
        match &self.name {
            Some(name) => format!("{} ({})", self.login, name),
            None => self.login.clone(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct DownloadsResponse {
    meta: DownloadsMeta,
}

#[derive(Debug, Deserialize)]
struct DownloadsMeta {
    #[serde(default)]
    extra_downloads: Vec<DailyDownloads>,
}

#[derive(Debug, Deserialize)]
struct DailyDownloads {
    #[serde(default)]
    downloads: u64,
}

/// Connection settings for the crates.io API
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CratesIoSettings {
    pub base_url: String,
    pub retry_policy: RetryPolicy,
    /// Number of leading daily entries summed into the download count
    pub download_window_days: usize,
}

impl CratesIoSettings {
    pub const DEFAULT_BASE_URL: &'static str = "https://crates.io";
    pub const DEFAULT_DOWNLOAD_WINDOW_DAYS: usize = 7;
}

impl Default for CratesIoSettings {
    fn default() -> Self {
        Self {
            base_url: Self::DEFAULT_BASE_URL.to_string(),
            retry_policy: RetryPolicy::default(),
            download_window_days: Self::DEFAULT_DOWNLOAD_WINDOW_DAYS,
        }
    }
}

/// CratesIoClient adapter for cargo packages
///
/// Three read-only requests per crate:
/// - `/api/v1/crates/{name}`: repository URL and version history, retried
///   per the configured policy. When every attempt fails the record keeps
///   its defaults and the outcome is `Failed`.
/// - `/api/v1/crates/{name}/owners` and `/api/v1/crates/{name}/downloads`:
///   attempted once each after the crate document succeeded. Failures are
///   logged and leave the corresponding fields at their defaults.
pub struct CratesIoClient<H: HttpFetcher> {
    fetcher: H,
    settings: CratesIoSettings,
}

impl<H: HttpFetcher> CratesIoClient<H> {
    pub fn new(fetcher: H, settings: CratesIoSettings) -> Self {
        Self { fetcher, settings }
    }

    fn crate_url(&self, name: &str, suffix: &str) -> String {
        format!(
            "{}/api/v1/crates/{}{}",
            self.settings.base_url.trim_end_matches('/'),
            urlencoding::encode(name),
            suffix
        )
    }

    async fn fetch_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, RegistryError> {
        let response = self.fetcher.get(url).await?;

        if !response.is_ok() {
            return Err(RegistryError::Status {
                url: url.to_string(),
                status: response.status,
            });
        }

        serde_json::from_str(&response.body).map_err(|e| RegistryError::Decode {
            url: url.to_string(),
            message: e.to_string(),
        })
    }

    fn apply_crate_metadata(record: &mut PackageRecord, metadata: CrateResponse) {
        let CrateResponse { krate, versions } = metadata;

        let repository = krate
            .repository
            .filter(|url| !url.trim().is_empty())
            .or(krate.homepage);
        record.set_repository_url(repository.as_deref());

        let target = record.version().map(str::to_string);
        let selected = match target.as_deref() {
            Some(target) => versions.into_iter().find(|v| v.num == target),
            None => versions.into_iter().next(),
        };

        // Unknown target version: publish fields stay empty
        if let Some(version) = selected {
            let date = version.created_at.as_deref().and_then(parse_created_at);
            let author = version.published_by.and_then(|publisher| publisher.login);
            record.set_last_publish(date, author);
        }
    }

    async fn apply_owners(&self, record: &mut PackageRecord, name: &str) {
        let url = self.crate_url(name, "/owners");
        match self.fetch_json::<OwnersResponse>(&url).await {
            Ok(owners) => {
                for owner in &owners.users {
                    record.add_owner(owner.descriptor());
                }
            }
            Err(e) => tracing::warn!("Error fetching cargo owners for {}: {}", name, e),
        }
    }

    async fn apply_downloads(&self, record: &mut PackageRecord, name: &str) {
        let url = self.crate_url(name, "/downloads");
        match self.fetch_json::<DownloadsResponse>(&url).await {
            Ok(downloads) => {
                let total = downloads
                    .meta
                    .extra_downloads
                    .iter()
                    .take(self.settings.download_window_days)
                    .map(|day| day.downloads)
                    .sum();
                record.set_downloads(total);
            }
            Err(e) => tracing::warn!("Error fetching cargo downloads for {}: {}", name, e),
        }
    }
}

fn parse_created_at(raw: &str) -> Option<DateTime<FixedOffset>> {
    let parsed = DateTime::parse_from_str(raw, CREATED_AT_FORMAT)
        .or_else(|_| DateTime::parse_from_rfc3339(raw));

    match parsed {
        Ok(date) => Some(date),
        Err(e) => {
            tracing::warn!("Unparsable publish timestamp {:?}: {}", raw, e);
            None
        }
    }
}

#[async_trait]
impl<H: HttpFetcher> PackageMetadataRepository for CratesIoClient<H> {
    async fn enrich(&self, record: &mut PackageRecord) -> EnrichmentOutcome {
        let Some(name) = record.name().map(str::to_string) else {
            return EnrichmentOutcome::Skipped;
        };

        let crate_url = self.crate_url(&name, "");
        let context = format!("Error fetching cargo metadata for {}", name);
        let metadata = self
            .settings
            .retry_policy
            .run(
                &context,
                |_| self.fetch_json::<CrateResponse>(&crate_url),
                RegistryError::is_transient,
            )
            .await;

        let Ok(metadata) = metadata else {
            return EnrichmentOutcome::Failed;
        };
        tracing::debug!("Got cargo metadata for {}", name);

        Self::apply_crate_metadata(record, metadata);
        self.apply_owners(record, &name).await;
        self.apply_downloads(record, &name).await;

        EnrichmentOutcome::Enriched
    }
}
