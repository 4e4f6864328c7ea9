use clap::Parser;
use std::path::PathBuf;

use sbom_analyzer::application::dto::OutputFormat;

/// Report where the packages listed in an SBOM come from
#[derive(Parser, Debug)]
#[command(name = "sbom-analyzer")]
#[command(version)]
#[command(
    about = "Enrich SBOM packages with provenance data from their package registry",
    long_about = "Reads a CycloneDX or SPDX JSON SBOM, looks up every cargo package on crates.io \
                  (one package at a time) and writes a CSV or JSON report with repository, \
                  owner, download and last-publish information."
)]
pub struct Args {
    /// SBOM file to analyze (CycloneDX or SPDX JSON)
    pub input_file: PathBuf,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Output format: csv or json [default: csv]
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Path to a config file (defaults to ./sbom-analyzer.config.yml if present)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Query the registry again for every package, even repeated crates
    #[arg(long)]
    pub no_cache: bool,

    /// Enable debug logging (overrides LOGLEVEL)
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
