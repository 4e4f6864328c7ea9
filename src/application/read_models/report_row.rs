//! Flattened report row
//!
//! One row per SBOM package, detached from the domain record so formatters
//! never see mutable state.

use crate::sbom_analysis::domain::PackageRecord;
use serde::Serialize;

/// Date format used for the last-publish column
const OUTPUT_DATE_FORMAT: &str = "%Y-%m-%d";

/// View representation of one enriched package
///
/// Absent data stays `None`; formatters decide how to render it (empty CSV
/// cell, JSON `null`). Field names serialize to the report column names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportRow {
    #[serde(rename = "PackageType")]
    pub package_type: Option<String>,
    #[serde(rename = "PackageName")]
    pub package_name: Option<String>,
    #[serde(rename = "Version")]
    pub version: Option<String>,
    #[serde(rename = "RepoURL")]
    pub repo_url: Option<String>,
    #[serde(rename = "RepoOwner")]
    pub repo_owner: Option<String>,
    #[serde(rename = "RepoName")]
    pub repo_name: Option<String>,
    #[serde(rename = "PackageOwners")]
    pub package_owners: String,
    #[serde(rename = "7DaysDownloads")]
    pub recent_downloads: u64,
    #[serde(rename = "LastPackagePushDate")]
    pub last_push_date: Option<String>,
    #[serde(rename = "LastPackagePushAuthor")]
    pub last_push_author: Option<String>,
}

impl ReportRow {
    /// Column names, in output order
    pub const HEADERS: [&'static str; 10] = [
        "PackageType",
        "PackageName",
        "Version",
        "RepoURL",
        "RepoOwner",
        "RepoName",
        "PackageOwners",
        "7DaysDownloads",
        "LastPackagePushDate",
        "LastPackagePushAuthor",
    ];

    pub fn from_record(record: &PackageRecord) -> Self {
        Self {
            package_type: record.ecosystem().map(ToString::to_string),
            package_name: record.name().map(String::from),
            version: record.version().map(String::from),
            repo_url: record.repository_url().map(String::from),
            repo_owner: record.repository_owner().map(String::from),
            repo_name: record.repository_name().map(String::from),
            package_owners: record.owners().collect::<Vec<_>>().join(", "),
            recent_downloads: record.downloads(),
            last_push_date: record
                .last_publish_date()
                .map(|date| date.format(OUTPUT_DATE_FORMAT).to_string()),
            last_push_author: record.last_publish_author().map(String::from),
        }
    }

    /// Cell values in [`ReportRow::HEADERS`] order, with absent values as empty strings
    pub fn cells(&self) -> [String; 10] {
        let text = |value: &Option<String>| value.clone().unwrap_or_default();
        [
            text(&self.package_type),
            text(&self.package_name),
            text(&self.version),
            text(&self.repo_url),
            text(&self.repo_owner),
            text(&self.repo_name),
            self.package_owners.clone(),
            self.recent_downloads.to_string(),
            text(&self.last_push_date),
            text(&self.last_push_author),
        ]
    }
}
