use crate::sbom_analysis::domain::PackageRecord;
use async_trait::async_trait;

/// What happened to a record during enrichment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnrichmentOutcome {
    /// Top-level registry metadata was obtained (owners/downloads may still be missing)
    Enriched,
    /// Every attempt failed; the record keeps its defaults
    Failed,
    /// No adapter for this ecosystem, or the identity could not be resolved
    Skipped,
}

/// PackageMetadataRepository port for provenance enrichment
///
/// Implementations populate the record in place. Registry failures are
/// contained here and reported through the outcome, never as errors, so one
/// bad package cannot abort the report.
#[async_trait]
pub trait PackageMetadataRepository: Send + Sync {
    async fn enrich(&self, record: &mut PackageRecord) -> EnrichmentOutcome;
}
