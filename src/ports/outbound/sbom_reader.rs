use crate::sbom_analysis::domain::SbomEntry;
use crate::shared::Result;
use std::path::Path;

/// SbomReader port for loading the declared package list
///
/// This port abstracts the SBOM container format (CycloneDX, SPDX, ...).
/// Implementations return the packages in document order.
pub trait SbomReader {
    /// Reads and parses the SBOM document at `path`
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or is not a supported
    /// SBOM document. These errors are fatal for the run.
    fn read_sbom(&self, path: &Path) -> Result<Vec<SbomEntry>>;
}
