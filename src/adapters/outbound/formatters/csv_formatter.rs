use crate::application::read_models::ReportRow;
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;

/// CsvFormatter adapter for the tabular provenance report
///
/// Emits a header line followed by one line per row. Fields are quoted only
/// when they contain a comma, double quote, CR or LF; embedded quotes are
/// doubled (RFC 4180). Lines end with `\n`.
pub struct CsvFormatter;

impl CsvFormatter {
    pub fn new() -> Self {
        Self
    }

    fn escape_field(field: &str) -> String {
        if field.contains([',', '"', '\r', '\n']) {
            format!("\"{}\"", field.replace('"', "\"\""))
        } else {
            field.to_string()
        }
    }

    fn write_line<S: AsRef<str>>(output: &mut String, fields: &[S]) {
        let line = fields
            .iter()
            .map(|field| Self::escape_field(field.as_ref()))
            .collect::<Vec<_>>()
            .join(",");
        output.push_str(&line);
        output.push('\n');
    }
}

impl Default for CsvFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for CsvFormatter {
    fn format(&self, rows: &[ReportRow]) -> Result<String> {
        let mut output = String::new();
        Self::write_line(&mut output, &ReportRow::HEADERS);
        for row in rows {
            Self::write_line(&mut output, &row.cells());
        }
        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sbom_analysis::domain::PackageRecord;

    #[test]
    fn test_header_only_for_empty_report() {
        let output = CsvFormatter::new().format(&[]).unwrap();
        assert_eq!(
            output,
            "PackageType,PackageName,Version,RepoURL,RepoOwner,RepoName,PackageOwners,7DaysDownloads,LastPackagePushDate,LastPackagePushAuthor\n"
        );
    }

    #[test]
    fn test_rows_follow_header_in_order() {
        let mut serde = PackageRecord::from_purl("pkg:cargo/serde@1.0.197", None);
        serde.set_repository_url(Some("https://github.com/serde-rs/serde"));
        serde.set_downloads(1500);
        let unresolved = PackageRecord::from_purl("not-a-purl", None);

        let rows = vec![
            ReportRow::from_record(&serde),
            ReportRow::from_record(&unresolved),
        ];
        let output = CsvFormatter::new().format(&rows).unwrap();
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(
            lines[1],
            "cargo,serde,1.0.197,https://github.com/serde-rs/serde,serde-rs,serde,,1500,,"
        );
        assert_eq!(lines[2], ",,,,,,,0,,");
    }

    #[test]
    fn test_multiple_owners_are_quoted() {
        let mut record = PackageRecord::from_purl("pkg:cargo/serde@1.0.197", None);
        record.add_owner("dtolnay (David Tolnay)");
        record.add_owner("oli-obk");

        let output = CsvFormatter::new()
            .format(&[ReportRow::from_record(&record)])
            .unwrap();

        assert!(output.contains(",\"dtolnay (David Tolnay), oli-obk\","));
    }

    #[test]
    fn test_escape_field() {
        assert_eq!(CsvFormatter::escape_field("plain"), "plain");
        assert_eq!(CsvFormatter::escape_field("a,b"), "\"a,b\"");
        assert_eq!(CsvFormatter::escape_field("say \"hi\""), "\"say \"\"hi\"\"\"");
        assert_eq!(CsvFormatter::escape_field("two\nlines"), "\"two\nlines\"");
        assert_eq!(CsvFormatter::escape_field(""), "");
    }
}
