/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (file system, registries, console).
pub mod http_fetcher;
pub mod metadata_repository;
pub mod output_presenter;
pub mod progress_reporter;
pub mod report_formatter;
pub mod sbom_reader;

pub use http_fetcher::{HttpFetcher, HttpResponse};
pub use metadata_repository::{EnrichmentOutcome, PackageMetadataRepository};
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
pub use report_formatter::ReportFormatter;
pub use sbom_reader::SbomReader;
