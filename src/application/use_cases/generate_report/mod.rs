use crate::application::dto::{ReportRequest, ReportResponse, ReportSummary};
use crate::application::read_models::ReportRow;
use crate::ports::inbound::ReportGenerationPort;
use crate::ports::outbound::{
    EnrichmentOutcome, PackageMetadataRepository, ProgressReporter, SbomReader,
};
use crate::sbom_analysis::domain::{PackageRecord, SbomEntry};
use crate::sbom_analysis::services::PackageResolver;
use crate::shared::Result;
use async_trait::async_trait;
use std::time::Duration;

/// GenerateReportUseCase - Core use case for the provenance report
///
/// Reads the SBOM, then resolves and enriches one package at a time. The
/// registry is never queried concurrently: each record is enriched to
/// completion before the next one starts.
///
/// # Type Parameters
/// * `SR` - SbomReader implementation
/// * `MR` - PackageMetadataRepository implementation
/// * `PR` - ProgressReporter implementation
pub struct GenerateReportUseCase<SR, MR, PR> {
    sbom_reader: SR,
    metadata_repository: MR,
    progress_reporter: PR,
}

impl<SR, MR, PR> GenerateReportUseCase<SR, MR, PR>
where
    SR: SbomReader,
    MR: PackageMetadataRepository,
    PR: ProgressReporter,
{
    /// Creates a new GenerateReportUseCase with injected dependencies
    pub fn new(sbom_reader: SR, metadata_repository: MR, progress_reporter: PR) -> Self {
        Self {
            sbom_reader,
            metadata_repository,
            progress_reporter,
        }
    }

    /// Executes the report use case
    ///
    /// # Errors
    /// Only SBOM reading errors propagate; enrichment problems are absorbed
    /// and every package still gets a row.
    pub async fn execute(&self, request: ReportRequest) -> Result<ReportResponse> {
        let entries = self.read_sbom(&request)?;
        let (records, summary) = self
            .enrich_sequentially(&entries, request.package_delay)
            .await;

        self.progress_reporter.report_completion(&format!(
            "✅ Provenance lookup complete: {} package(s), {} enriched, {} failed, {} skipped, {} unresolved",
            summary.total, summary.enriched, summary.failed, summary.skipped, summary.unresolved
        ));

        let rows = records.iter().map(ReportRow::from_record).collect();
        Ok(ReportResponse::new(rows, summary))
    }

    fn read_sbom(&self, request: &ReportRequest) -> Result<Vec<SbomEntry>> {
        self.progress_reporter.report(&format!(
            "📖 Loading SBOM from: {}",
            request.sbom_path.display()
        ));

        let entries = self.sbom_reader.read_sbom(&request.sbom_path)?;

        self.progress_reporter
            .report(&format!("✅ Detected {} package(s)", entries.len()));

        Ok(entries)
    }

    async fn enrich_sequentially(
        &self,
        entries: &[SbomEntry],
        package_delay: Duration,
    ) -> (Vec<PackageRecord>, ReportSummary) {
        let total = entries.len();
        let mut summary = ReportSummary {
            total,
            ..ReportSummary::default()
        };
        let mut records = Vec::with_capacity(total);

        self.progress_reporter
            .report("🔍 Fetching provenance metadata...");

        for (idx, entry) in entries.iter().enumerate() {
            let mut record = PackageResolver::resolve(entry);

            if record.is_resolved() {
                tracing::debug!(
                    "Analyzing package type:{} name:{} version:{}",
                    record.ecosystem().map(ToString::to_string).unwrap_or_default(),
                    record.name().unwrap_or_default(),
                    record.version().unwrap_or_default()
                );

                match self.metadata_repository.enrich(&mut record).await {
                    EnrichmentOutcome::Enriched => summary.enriched += 1,
                    EnrichmentOutcome::Failed => summary.failed += 1,
                    EnrichmentOutcome::Skipped => summary.skipped += 1,
                }
            } else {
                summary.unresolved += 1;
            }

            self.progress_reporter
                .report_progress(idx + 1, total, Some(&record.label()));
            records.push(record);

            if !package_delay.is_zero() && idx + 1 < total {
                tokio::time::sleep(package_delay).await;
            }
        }

        (records, summary)
    }
}

#[async_trait(?Send)]
impl<SR, MR, PR> ReportGenerationPort for GenerateReportUseCase<SR, MR, PR>
where
    SR: SbomReader,
    MR: PackageMetadataRepository,
    PR: ProgressReporter,
{
    async fn generate_report(&self, request: ReportRequest) -> Result<ReportResponse> {
        self.execute(request).await
    }
}
