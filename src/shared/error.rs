use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// Partial enrichment failures never change the exit code; only fatal
/// input/output problems do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// The report was produced (possibly with incomplete provenance data)
    Success = 0,
    /// Application error (unreadable SBOM, invalid config, output failure, etc.)
    ApplicationError = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::ApplicationError => write!(f, "Application Error (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
        }
    }
}

/// Fatal application errors.
///
/// Everything here terminates the run. Registry problems are deliberately
/// absent: they are contained by the metadata client (see [`RegistryError`]).
#[derive(Debug, Error)]
pub enum AnalyzerError {
    #[error("SBOM file not found: {path}\n\n💡 Hint: {suggestion}")]
    SbomNotFound { path: PathBuf, suggestion: String },

    #[error("Failed to parse SBOM file: {path}\nDetails: {details}\n\n💡 Hint: Only CycloneDX JSON and SPDX JSON documents are supported")]
    SbomParseError { path: PathBuf, details: String },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Security violation: {path}\nReason: {reason}\n\n💡 Hint: {hint}")]
    SecurityError {
        path: PathBuf,
        reason: String,
        hint: String,
    },

    /// Validation error for configuration values
    #[error("Validation error: {message}")]
    Validation { message: String },
}

/// Errors raised while talking to a package registry.
///
/// These never leave the metadata client; they drive the retry decision and
/// end up as warnings on the diagnostic stream.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RegistryError {
    /// The request never produced a response (DNS, connection refused, timeout, ...)
    #[error("request to {url} failed: {message}")]
    Transport { url: String, message: String },

    /// The registry answered with a non-200 status
    #[error("{url} returned status code {status}")]
    Status { url: String, status: u16 },

    /// The response body was not the JSON document we expected
    #[error("unexpected response from {url}: {message}")]
    Decode { url: String, message: String },
}

impl RegistryError {
    /// Whether another attempt could plausibly succeed.
    ///
    /// A 404 means the package is not published on the registry, so retrying
    /// only adds load.
    pub fn is_transient(&self) -> bool {
        !matches!(self, RegistryError::Status { status: 404, .. })
    }
}
