use crate::application::read_models::ReportRow;
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;

/// JsonFormatter adapter - the report as a pretty-printed JSON array
///
/// Objects use the CSV column names as keys; absent values are `null`.
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for JsonFormatter {
    fn format(&self, rows: &[ReportRow]) -> Result<String> {
        let mut json = serde_json::to_string_pretty(rows)?;
        json.push('\n');
        Ok(json)
    }
}
