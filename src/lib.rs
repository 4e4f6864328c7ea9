//! sbom-analyzer - supply-chain provenance enrichment for SBOMs
//!
//! This library reads a Software Bill of Materials (CycloneDX or SPDX JSON),
//! resolves every declared package from its package URL and looks up
//! provenance data on the package's registry: source repository, owners,
//! recent downloads and the last publish event. The result is a flat
//! report, one row per SBOM package, in document order.
//!
//! Registry access is strictly sequential. One package is enriched to
//! completion before the next one starts, and a package's requests are
//! issued one after another.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`sbom_analysis`): identities, records, retry policy
//! - **Application Layer** (`application`): the report use case and DTOs
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): filesystem, registry, formatter and console implementations
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use sbom_analyzer::prelude::*;
//! use std::path::PathBuf;
//! use std::time::Duration;
//!
//! # async fn example() -> Result<()> {
//! // Create adapters
//! let fetcher = ReqwestHttpFetcher::new(
//!     Duration::from_secs(30),
//!     &ReqwestHttpFetcher::default_user_agent(),
//! )?;
//! let crates_io = CratesIoClient::new(CachingHttpFetcher::new(fetcher), CratesIoSettings::default());
//!
//! // Create use case
//! let use_case = GenerateReportUseCase::new(
//!     FileSystemSbomReader::new(),
//!     RegistryMetadataClient::new(crates_io),
//!     StderrProgressReporter::new(),
//! );
//!
//! // Execute
//! let response = use_case
//!     .execute(ReportRequest::new(PathBuf::from("bom.cdx.json")))
//!     .await?;
//!
//! // Format output
//! let output = CsvFormatter::new().format(&response.rows)?;
//! print!("{}", output);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod ports;
pub mod sbom_analysis;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemSbomReader, FileSystemWriter, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::{CsvFormatter, JsonFormatter};
    pub use crate::adapters::outbound::network::{
        CachingHttpFetcher, CratesIoClient, CratesIoSettings, RegistryMetadataClient,
        ReqwestHttpFetcher,
    };
    pub use crate::application::dto::{OutputFormat, ReportRequest, ReportResponse, ReportSummary};
    pub use crate::application::read_models::ReportRow;
    pub use crate::application::use_cases::GenerateReportUseCase;
    pub use crate::ports::inbound::ReportGenerationPort;
    pub use crate::ports::outbound::{
        EnrichmentOutcome, HttpFetcher, HttpResponse, OutputPresenter, PackageMetadataRepository,
        ProgressReporter, ReportFormatter, SbomReader,
    };
    pub use crate::sbom_analysis::domain::{
        Ecosystem, ExternalReference, PackageIdentity, PackageRecord, RepositoryRef, SbomEntry,
    };
    pub use crate::sbom_analysis::policies::RetryPolicy;
    pub use crate::sbom_analysis::services::PackageResolver;
    pub use crate::shared::Result;
}
