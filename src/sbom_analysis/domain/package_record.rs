use super::{Ecosystem, PackageIdentity, RepositoryRef};
use chrono::{DateTime, FixedOffset};
use std::collections::BTreeSet;

/// PackageRecord aggregate - one per SBOM entry.
///
/// Holds the resolved identity (if the purl could be parsed) and the
/// provenance data gathered by the metadata client. Records are enriched once,
/// then only read by the report stage.
///
/// Repository owner/name are derived exclusively from the repository URL via
/// [`PackageRecord::set_repository_url`]; there is no way to set them directly.
#[derive(Debug, Clone, PartialEq)]
pub struct PackageRecord {
    identity: Option<PackageIdentity>,
    downloads: u64,
    owners: BTreeSet<String>,
    repository_url: Option<String>,
    repository: Option<RepositoryRef>,
    last_publish_date: Option<DateTime<FixedOffset>>,
    last_publish_author: Option<String>,
}

impl PackageRecord {
    pub fn new(identity: Option<PackageIdentity>) -> Self {
        Self {
            identity,
            downloads: 0,
            owners: BTreeSet::new(),
            repository_url: None,
            repository: None,
            last_publish_date: None,
            last_publish_author: None,
        }
    }

    /// Builds a record from a purl; an unparsable purl yields an unresolved record.
    pub fn from_purl(purl: &str, fallback_version: Option<&str>) -> Self {
        Self::new(PackageIdentity::from_purl(purl, fallback_version))
    }

    pub fn identity(&self) -> Option<&PackageIdentity> {
        self.identity.as_ref()
    }

    pub fn is_resolved(&self) -> bool {
        self.identity.is_some()
    }

    pub fn ecosystem(&self) -> Option<&Ecosystem> {
        self.identity.as_ref().map(PackageIdentity::ecosystem)
    }

    pub fn name(&self) -> Option<&str> {
        self.identity.as_ref().map(PackageIdentity::name)
    }

    pub fn version(&self) -> Option<&str> {
        self.identity.as_ref().and_then(PackageIdentity::version)
    }

    pub fn downloads(&self) -> u64 {
        self.downloads
    }

    pub fn owners(&self) -> impl Iterator<Item = &str> {
        self.owners.iter().map(String::as_str)
    }

    pub fn repository_url(&self) -> Option<&str> {
        self.repository_url.as_deref()
    }

    pub fn repository_owner(&self) -> Option<&str> {
        self.repository.as_ref().map(RepositoryRef::owner)
    }

    pub fn repository_name(&self) -> Option<&str> {
        self.repository.as_ref().map(RepositoryRef::name)
    }

    pub fn last_publish_date(&self) -> Option<&DateTime<FixedOffset>> {
        self.last_publish_date.as_ref()
    }

    pub fn last_publish_author(&self) -> Option<&str> {
        self.last_publish_author.as_deref()
    }

    /// Records the repository URL and derives owner/name from it.
    ///
    /// An empty URL, or one that does not look like a hosted repository,
    /// leaves owner/name unset and logs a warning.
    pub fn set_repository_url(&mut self, url: Option<&str>) {
        let url = url.map(str::trim).filter(|u| !u.is_empty());

        let Some(url) = url else {
            tracing::warn!("Invalid repository URL: <empty> for package {}", self.label());
            return;
        };

        self.repository_url = Some(url.to_string());
        self.repository = RepositoryRef::parse(url);

        if self.repository.is_none() {
            tracing::warn!(
                "Invalid repository URL: {} for package {}",
                url,
                self.label()
            );
        }
    }

    /// Adds an owner descriptor; duplicates are ignored.
    pub fn add_owner(&mut self, descriptor: impl Into<String>) {
        self.owners.insert(descriptor.into());
    }

    pub fn set_downloads(&mut self, downloads: u64) {
        self.downloads = downloads;
    }

    pub fn set_last_publish(&mut self, date: Option<DateTime<FixedOffset>>, author: Option<String>) {
        self.last_publish_date = date;
        self.last_publish_author = author;
    }

    /// Human-readable label for diagnostics
    pub fn label(&self) -> String {
        match &self.identity {
            Some(identity) => match identity.version() {
                Some(version) => format!("{}@{}", identity.name(), version),
                None => identity.name().to_string(),
            },
            None => "<unresolved>".to_string(),
        }
    }
}
