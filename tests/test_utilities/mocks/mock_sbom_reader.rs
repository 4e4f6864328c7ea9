use sbom_analyzer::prelude::*;
use std::path::Path;

/// Mock SbomReader for testing
pub struct MockSbomReader {
    pub entries: Vec<SbomEntry>,
    pub should_fail: bool,
}

impl MockSbomReader {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            should_fail: false,
        }
    }

    /// Adds a package declared only through its package URL
    pub fn with_purl(mut self, purl: &str) -> Self {
        self.entries.push(SbomEntry::new(
            None,
            None,
            vec![ExternalReference::new(
                Some("PACKAGE-MANAGER".to_string()),
                "purl",
                purl,
            )],
        ));
        self
    }

    /// Adds a package whose purl omits the version, with the version declared separately
    pub fn with_versioned_purl(mut self, purl: &str, version: &str) -> Self {
        self.entries.push(SbomEntry::new(
            None,
            Some(version.to_string()),
            vec![ExternalReference::new(None, "purl", purl)],
        ));
        self
    }

    /// Adds a package without any external reference
    pub fn with_unreferenced(mut self, name: &str) -> Self {
        self.entries
            .push(SbomEntry::new(Some(name.to_string()), None, Vec::new()));
        self
    }

    pub fn with_failure() -> Self {
        Self {
            entries: Vec::new(),
            should_fail: true,
        }
    }
}

impl Default for MockSbomReader {
    fn default() -> Self {
        Self::new()
    }
}

impl SbomReader for MockSbomReader {
    fn read_sbom(&self, path: &Path) -> Result<Vec<SbomEntry>> {
        if self.should_fail {
            anyhow::bail!("Mock SBOM reader failure for {}", path.display());
        }
        Ok(self.entries.clone())
    }
}
