use crate::application::read_models::ReportRow;

/// Counters describing how the enrichment run went
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReportSummary {
    pub total: usize,
    pub enriched: usize,
    pub failed: usize,
    pub skipped: usize,
    pub unresolved: usize,
}

/// ReportResponse - response DTO from the provenance report use case
///
/// Always holds exactly one row per SBOM package, in document order.
#[derive(Debug, Clone)]
pub struct ReportResponse {
    pub rows: Vec<ReportRow>,
    pub summary: ReportSummary,
}

impl ReportResponse {
    pub fn new(rows: Vec<ReportRow>, summary: ReportSummary) -> Self {
        Self { rows, summary }
    }
}
