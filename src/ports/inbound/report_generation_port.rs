use crate::application::dto::{ReportRequest, ReportResponse};
use crate::shared::Result;
use async_trait::async_trait;

/// ReportGenerationPort - Inbound port for the provenance report use case
///
/// This port defines the interface that driving adapters (the CLI today)
/// use to run an analysis. It represents the application's public API.
#[async_trait(?Send)]
pub trait ReportGenerationPort {
    /// Reads the SBOM named in the request, enriches every package and
    /// returns the ordered report rows
    ///
    /// # Errors
    /// Returns an error only if the SBOM cannot be read or parsed.
    /// Registry failures degrade individual rows instead.
    async fn generate_report(&self, request: ReportRequest) -> Result<ReportResponse>;
}
