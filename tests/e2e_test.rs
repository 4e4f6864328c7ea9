/// End-to-end tests for the CLI
///
/// Fixtures contain no cargo packages unless a test points the registry at
/// an unreachable address, so these tests never touch the network.
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const CSV_HEADER: &str = "PackageType,PackageName,Version,RepoURL,RepoOwner,RepoName,PackageOwners,7DaysDownloads,LastPackagePushDate,LastPackagePushAuthor";

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

/// Writes a config that sends cargo lookups to a closed local port
fn write_offline_registry_config(dir: &Path, file_name: &str, extra: &str) -> PathBuf {
    let path = dir.join(file_name);
    fs::write(
        &path,
        format!(
            "registry:\n  base_url: http://127.0.0.1:9\n  max_attempts: 1\n  timeout_secs: 2\n{}",
            extra
        ),
    )
    .unwrap();
    path
}

// Exit code tests for CLI
mod exit_code_tests {
    use super::*;

    /// Exit code 0: Success - normal execution
    #[test]
    fn test_exit_code_success() {
        cargo_bin_cmd!("sbom-analyzer")
            .arg(fixture("offline.cdx.json"))
            .assert()
            .code(0);
    }

    /// Exit code 0: --help should return success
    #[test]
    fn test_exit_code_help() {
        cargo_bin_cmd!("sbom-analyzer").arg("--help").assert().code(0);
    }

    /// Exit code 0: --version should return success
    #[test]
    fn test_exit_code_version() {
        cargo_bin_cmd!("sbom-analyzer")
            .arg("--version")
            .assert()
            .code(0)
            .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    }

    /// Exit code 2: Missing input file argument
    #[test]
    fn test_exit_code_missing_input() {
        cargo_bin_cmd!("sbom-analyzer").assert().code(2);
    }

    /// Exit code 2: Invalid arguments
    #[test]
    fn test_exit_code_invalid_argument() {
        cargo_bin_cmd!("sbom-analyzer")
            .args(["bom.json", "--invalid-option"])
            .assert()
            .code(2);
    }

    /// Exit code 2: Invalid format value
    #[test]
    fn test_exit_code_invalid_format() {
        cargo_bin_cmd!("sbom-analyzer")
            .args(["bom.json", "-f", "markdown"])
            .assert()
            .code(2);
    }

    /// Exit code 1: Application error - non-existent SBOM
    #[test]
    fn test_exit_code_nonexistent_sbom() {
        cargo_bin_cmd!("sbom-analyzer")
            .arg("/nonexistent/path/bom.json")
            .assert()
            .code(1)
            .stderr(predicate::str::contains("SBOM file not found"));
    }

    /// Exit code 1: Application error - JSON that is not an SBOM
    #[test]
    fn test_exit_code_unparsable_sbom() {
        cargo_bin_cmd!("sbom-analyzer")
            .arg(fixture("not-an-sbom.json"))
            .assert()
            .code(1)
            .stderr(predicate::str::contains("Failed to parse SBOM file"));
    }

    /// Exit code 1: Application error - output directory missing
    #[test]
    fn test_exit_code_unwritable_output() {
        cargo_bin_cmd!("sbom-analyzer")
            .arg(fixture("offline.cdx.json"))
            .args(["-o", "/nonexistent/dir/report.csv"])
            .assert()
            .code(1)
            .stderr(predicate::str::contains("Parent directory does not exist"));
    }
}

#[test]
fn test_cyclonedx_csv_report_on_stdout() {
    let expected = format!(
        "{}\n\
         npm,left-pad,1.3.0,,,,,0,,\n\
         pypi,requests,2.31.0,,,,,0,,\n\
         pypi,urllib3,2.2.1,,,,,0,,\n\
         githubactions,actions/checkout,4,,,,,0,,\n\
         ,,,,,,,0,,\n\
         ,,,,,,,0,,\n",
        CSV_HEADER
    );

    cargo_bin_cmd!("sbom-analyzer")
        .arg(fixture("offline.cdx.json"))
        .assert()
        .success()
        .stdout(predicate::str::diff(expected));
}

#[test]
fn test_spdx_json_report_to_file() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("report.json");

    cargo_bin_cmd!("sbom-analyzer")
        .arg(fixture("offline.spdx.json"))
        .args(["--format", "json", "-o"])
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Report written to"));

    let report: serde_json::Value = serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
    let rows = report.as_array().unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["PackageType"], "npm");
    assert_eq!(rows[0]["PackageName"], "lodash");
    assert_eq!(rows[1]["PackageType"], "github");
    assert_eq!(rows[1]["PackageName"], "octocat/hello-world");
    // Version comes from versionInfo when the purl has none
    assert_eq!(rows[1]["Version"], "1.0");
}

#[test]
fn test_unreachable_registry_still_reports_every_package() {
    let dir = TempDir::new().unwrap();
    let config = write_offline_registry_config(dir.path(), "offline.yml", "");

    cargo_bin_cmd!("sbom-analyzer")
        .arg(fixture("cargo.cdx.json"))
        .arg("--config")
        .arg(&config)
        .env_remove("LOGLEVEL")
        .assert()
        .success()
        .stdout(predicate::str::diff(format!(
            "{}\ncargo,serde,1.0.197,,,,,0,,\nnpm,left-pad,1.3.0,,,,,0,,\n",
            CSV_HEADER
        )))
        .stderr(predicate::str::contains("Error fetching cargo metadata for serde"))
        .stderr(predicate::str::contains("attempt 1/1"));
}

#[test]
fn test_every_failed_attempt_is_logged() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("retrying.yml");
    fs::write(
        &config,
        "registry:\n  base_url: http://127.0.0.1:9\n  max_attempts: 3\n  timeout_secs: 2\n",
    )
    .unwrap();

    cargo_bin_cmd!("sbom-analyzer")
        .arg(fixture("cargo.cdx.json"))
        .arg("--config")
        .arg(&config)
        .env_remove("LOGLEVEL")
        .assert()
        .success()
        .stderr(predicate::str::contains("attempt 1/3"))
        .stderr(predicate::str::contains("attempt 2/3"))
        .stderr(predicate::str::contains("attempt 3/3"))
        .stderr(predicate::str::contains("attempt 4/3").not());
}

#[test]
fn test_loglevel_error_silences_warnings() {
    let dir = TempDir::new().unwrap();
    let config = write_offline_registry_config(dir.path(), "offline.yml", "");

    cargo_bin_cmd!("sbom-analyzer")
        .arg(fixture("cargo.cdx.json"))
        .arg("-c")
        .arg(&config)
        .env("LOGLEVEL", "error")
        .assert()
        .success()
        .stderr(predicate::str::contains("Error fetching cargo metadata").not());
}

#[test]
fn test_verbose_enables_debug_output() {
    cargo_bin_cmd!("sbom-analyzer")
        .arg(fixture("offline.spdx.json"))
        .arg("--verbose")
        .env("LOGLEVEL", "error")
        .assert()
        .success()
        .stderr(predicate::str::contains("Analyzing package type:npm name:lodash"));
}
