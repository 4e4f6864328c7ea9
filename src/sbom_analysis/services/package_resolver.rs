use crate::sbom_analysis::domain::{PackageRecord, SbomEntry};

/// PackageResolver service - turns declared SBOM entries into package records
///
/// Pure logic: no I/O, never fails. Entries without a usable package URL
/// become unresolved records so they still show up in the report.
pub struct PackageResolver;

impl PackageResolver {
    pub fn resolve(entry: &SbomEntry) -> PackageRecord {
        let Some(purl) = entry.purl() else {
            tracing::warn!(
                "No package URL reference for SBOM package {}",
                entry.name.as_deref().unwrap_or("<unnamed>")
            );
            return PackageRecord::new(None);
        };

        let record = PackageRecord::from_purl(purl, entry.version.as_deref());
        if !record.is_resolved() {
            tracing::warn!("Unparsable package URL: {}", purl);
        }
        record
    }
}
