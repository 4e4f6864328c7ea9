use crate::ports::outbound::SbomReader;
use crate::sbom_analysis::domain::{ExternalReference, SbomEntry};
use crate::shared::error::AnalyzerError;
use crate::shared::Result;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Maximum SBOM size accepted (100 MB)
const MAX_FILE_SIZE: u64 = 100 * 1024 * 1024;

#[derive(Debug, Deserialize)]
struct CycloneDxDocument {
    #[serde(default)]
    components: Vec<CycloneDxComponent>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CycloneDxComponent {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    version: Option<String>,
    #[serde(default)]
    purl: Option<String>,
    #[serde(default)]
    external_references: Vec<CycloneDxReference>,
    #[serde(default)]
    components: Vec<CycloneDxComponent>,
}

#[derive(Debug, Deserialize)]
struct CycloneDxReference {
    #[serde(rename = "type", default)]
    reference_type: String,
    #[serde(default)]
    url: String,
}

#[derive(Debug, Deserialize)]
struct SpdxDocument {
    #[serde(default)]
    packages: Vec<SpdxPackage>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SpdxPackage {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    version_info: Option<String>,
    #[serde(default)]
    external_refs: Vec<SpdxExternalRef>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SpdxExternalRef {
    #[serde(default)]
    reference_category: Option<String>,
    #[serde(default)]
    reference_type: String,
    #[serde(default)]
    reference_locator: String,
}

/// Container formats the reader understands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SbomFormat {
    CycloneDx,
    Spdx,
}

impl SbomFormat {
    fn detect(document: &serde_json::Value) -> Option<Self> {
        let object = document.as_object()?;
        let is_cyclonedx = object
            .get("bomFormat")
            .and_then(|format| format.as_str())
            .is_some_and(|format| format.eq_ignore_ascii_case("CycloneDX"));

        if is_cyclonedx || object.contains_key("components") {
            Some(SbomFormat::CycloneDx)
        } else if object.contains_key("spdxVersion") || object.contains_key("packages") {
            Some(SbomFormat::Spdx)
        } else {
            None
        }
    }
}

/// FileSystemSbomReader adapter for CycloneDX and SPDX JSON documents
///
/// Packages are returned in document order. Nested CycloneDX components
/// follow their parent (depth-first).
pub struct FileSystemSbomReader;

impl FileSystemSbomReader {
    pub fn new() -> Self {
        Self
    }

    /// Reads the file after checking it is a regular, reasonably sized file
    fn safe_read_file(&self, path: &Path) -> Result<String> {
        let metadata = fs::symlink_metadata(path).map_err(|e| AnalyzerError::FileReadError {
            path: path.to_path_buf(),
            details: e.to_string(),
        })?;

        if metadata.is_symlink() {
            return Err(AnalyzerError::SecurityError {
                path: path.to_path_buf(),
                reason: "The SBOM path is a symbolic link".to_string(),
                hint: "Pass the path of the actual SBOM file instead of a link to it".to_string(),
            }
            .into());
        }

        if !metadata.is_file() {
            return Err(AnalyzerError::FileReadError {
                path: path.to_path_buf(),
                details: "Not a regular file".to_string(),
            }
            .into());
        }

        if metadata.len() > MAX_FILE_SIZE {
            return Err(AnalyzerError::SecurityError {
                path: path.to_path_buf(),
                reason: format!(
                    "File is too large ({} bytes). Maximum allowed size is {} bytes.",
                    metadata.len(),
                    MAX_FILE_SIZE
                ),
                hint: "Split the SBOM or remove unrelated documents from it".to_string(),
            }
            .into());
        }

        fs::read_to_string(path).map_err(|e| {
            AnalyzerError::FileReadError {
                path: path.to_path_buf(),
                details: e.to_string(),
            }
            .into()
        })
    }

    fn parse(content: &str) -> std::result::Result<Vec<SbomEntry>, String> {
        let document: serde_json::Value =
            serde_json::from_str(content).map_err(|e| format!("Invalid JSON: {}", e))?;

        match SbomFormat::detect(&document) {
            Some(SbomFormat::CycloneDx) => {
                let bom: CycloneDxDocument = serde_json::from_value(document)
                    .map_err(|e| format!("Invalid CycloneDX document: {}", e))?;
                let mut entries = Vec::new();
                flatten_components(bom.components, &mut entries);
                Ok(entries)
            }
            Some(SbomFormat::Spdx) => {
                let spdx: SpdxDocument = serde_json::from_value(document)
                    .map_err(|e| format!("Invalid SPDX document: {}", e))?;
                Ok(spdx.packages.into_iter().map(SbomEntry::from).collect())
            }
            None => Err("Neither a CycloneDX nor an SPDX JSON document".to_string()),
        }
    }
}

impl Default for FileSystemSbomReader {
    fn default() -> Self {
        Self::new()
    }
}

impl SbomReader for FileSystemSbomReader {
    fn read_sbom(&self, path: &Path) -> Result<Vec<SbomEntry>> {
        if !path.exists() && fs::symlink_metadata(path).is_err() {
            return Err(AnalyzerError::SbomNotFound {
                path: path.to_path_buf(),
                suggestion: "Check the input_file argument; it must point to a CycloneDX or SPDX JSON file"
                    .to_string(),
            }
            .into());
        }

        let content = self.safe_read_file(path)?;

        let entries = Self::parse(&content).map_err(|details| AnalyzerError::SbomParseError {
            path: path.to_path_buf(),
            details,
        })?;

        tracing::debug!("Read {} package(s) from {}", entries.len(), path.display());
        Ok(entries)
    }
}

fn flatten_components(components: Vec<CycloneDxComponent>, entries: &mut Vec<SbomEntry>) {
    for component in components {
        let mut references = Vec::with_capacity(component.external_references.len() + 1);
        if let Some(purl) = component.purl {
            references.push(ExternalReference::new(None, "purl", purl));
        }
        references.extend(
            component
                .external_references
                .into_iter()
                .map(|reference| ExternalReference::new(None, reference.reference_type, reference.url)),
        );

        entries.push(SbomEntry::new(component.name, component.version, references));
        flatten_components(component.components, entries);
    }
}

impl From<SpdxPackage> for SbomEntry {
    fn from(package: SpdxPackage) -> Self {
        let references = package
            .external_refs
            .into_iter()
            .map(|reference| {
                ExternalReference::new(
                    reference.reference_category,
                    reference.reference_type,
                    reference.reference_locator,
                )
            })
            .collect();

        SbomEntry::new(package.name, package.version_info, references)
    }
}
