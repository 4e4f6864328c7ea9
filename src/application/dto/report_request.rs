use std::path::PathBuf;
use std::time::Duration;

/// ReportRequest - request DTO for the provenance report use case
#[derive(Debug, Clone)]
pub struct ReportRequest {
    /// Path to the SBOM document
    pub sbom_path: PathBuf,
    /// Pause between two packages, on top of strictly sequential access
    pub package_delay: Duration,
}

impl ReportRequest {
    pub fn new(sbom_path: PathBuf) -> Self {
        Self {
            sbom_path,
            package_delay: Duration::ZERO,
        }
    }

    pub fn with_package_delay(mut self, package_delay: Duration) -> Self {
        self.package_delay = package_delay;
        self
    }
}
