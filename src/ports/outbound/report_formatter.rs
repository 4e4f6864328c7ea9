use crate::application::read_models::ReportRow;
use crate::shared::Result;

/// ReportFormatter port for serializing the provenance report
pub trait ReportFormatter {
    /// Formats the rows, in order, into the final document
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format(&self, rows: &[ReportRow]) -> Result<String>;
}
