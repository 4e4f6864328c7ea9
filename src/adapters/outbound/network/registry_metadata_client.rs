use crate::ports::outbound::{EnrichmentOutcome, PackageMetadataRepository};
use crate::sbom_analysis::domain::{Ecosystem, PackageRecord};
use async_trait::async_trait;

/// RegistryMetadataClient adapter - routes each record to its ecosystem's registry
///
/// Only cargo has a registry adapter. npm, PyPI, GitHub and GitHub Actions
/// identities are recognized but not looked up yet, so their rows carry
/// identity data only. Unknown ecosystems are skipped the same way.
pub struct RegistryMetadataClient<C: PackageMetadataRepository> {
    cargo: C,
}

impl<C: PackageMetadataRepository> RegistryMetadataClient<C> {
    pub fn new(cargo: C) -> Self {
        Self { cargo }
    }
}

#[async_trait]
impl<C: PackageMetadataRepository> PackageMetadataRepository for RegistryMetadataClient<C> {
    async fn enrich(&self, record: &mut PackageRecord) -> EnrichmentOutcome {
        let Some(ecosystem) = record.ecosystem().cloned() else {
            return EnrichmentOutcome::Skipped;
        };

        match ecosystem {
            Ecosystem::Cargo => self.cargo.enrich(record).await,
            Ecosystem::Npm | Ecosystem::Pypi | Ecosystem::Github | Ecosystem::GithubActions => {
                tracing::debug!(
                    "No {} registry lookup available, skipping {}",
                    ecosystem,
                    record.label()
                );
                EnrichmentOutcome::Skipped
            }
            Ecosystem::Unknown(tag) => {
                tracing::debug!("Unsupported package type {}, skipping {}", tag, record.label());
                EnrichmentOutcome::Skipped
            }
        }
    }
}
