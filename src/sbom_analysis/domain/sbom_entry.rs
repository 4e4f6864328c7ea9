/// One external reference attached to an SBOM package
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExternalReference {
    pub category: Option<String>,
    pub reference_type: String,
    pub locator: String,
}

impl ExternalReference {
    pub fn new(category: Option<String>, reference_type: impl Into<String>, locator: impl Into<String>) -> Self {
        Self {
            category,
            reference_type: reference_type.into(),
            locator: locator.into(),
        }
    }

    /// Whether this reference carries a package URL
    pub fn is_purl(&self) -> bool {
        self.reference_type.eq_ignore_ascii_case("purl") || self.locator.starts_with("pkg:")
    }
}

/// SbomEntry - a package as declared by the SBOM document, before resolution.
///
/// This is the boundary type between the SBOM reader and the analysis core,
/// independent of the container format it was read from.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SbomEntry {
    pub name: Option<String>,
    pub version: Option<String>,
    pub external_references: Vec<ExternalReference>,
}

impl SbomEntry {
    pub fn new(
        name: Option<String>,
        version: Option<String>,
        external_references: Vec<ExternalReference>,
    ) -> Self {
        Self {
            name,
            version,
            external_references,
        }
    }

    /// Locator of the first package-URL reference, if any
    pub fn purl(&self) -> Option<&str> {
        self.external_references
            .iter()
            .find(|reference| reference.is_purl())
            .map(|reference| reference.locator.as_str())
    }
}
