/// Filesystem adapters for SBOM input and report output
mod file_writer;
mod sbom_reader;

pub use file_writer::{FileSystemWriter, StdoutPresenter};
pub use sbom_reader::FileSystemSbomReader;
