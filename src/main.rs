mod cli;
mod logging;

use cli::Args;
use owo_colors::OwoColorize;
use sbom_analyzer::adapters::outbound::console::StderrProgressReporter;
use sbom_analyzer::adapters::outbound::filesystem::{
    FileSystemSbomReader, FileSystemWriter, StdoutPresenter,
};
use sbom_analyzer::adapters::outbound::network::{
    CachingHttpFetcher, CratesIoClient, CratesIoSettings, RegistryMetadataClient,
    ReqwestHttpFetcher,
};
use sbom_analyzer::application::dto::{OutputFormat, ReportRequest};
use sbom_analyzer::application::factories::FormatterFactory;
use sbom_analyzer::application::use_cases::GenerateReportUseCase;
use sbom_analyzer::config::{self, ConfigFile};
use sbom_analyzer::ports::outbound::{HttpFetcher, OutputPresenter};
use sbom_analyzer::sbom_analysis::policies::RetryPolicy;
use sbom_analyzer::shared::error::ExitCode;
use sbom_analyzer::shared::Result;
use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use std::process;
use std::time::Duration;

/// Effective run settings after merging CLI flags, config file and defaults
#[derive(Debug)]
struct RunSettings {
    format: OutputFormat,
    cache: bool,
    timeout: Duration,
    user_agent: String,
    package_delay: Duration,
    crates_io: CratesIoSettings,
}

impl RunSettings {
    fn resolve(args: &Args, config: Option<&ConfigFile>) -> Result<Self> {
        let registry = config.and_then(|c| c.registry.as_ref());
        let config_format = match config {
            Some(c) => c.output_format()?,
            None => None,
        };

        let mut crates_io = CratesIoSettings::default();
        if let Some(base_url) = registry.and_then(|r| r.base_url.clone()) {
            crates_io.base_url = base_url;
        }
        if let Some(max_attempts) = registry.and_then(|r| r.max_attempts) {
            crates_io.retry_policy = RetryPolicy::new(max_attempts);
        }
        if let Some(window) = registry.and_then(|r| r.download_window_days) {
            crates_io.download_window_days = window;
        }

        Ok(Self {
            format: args.format.or(config_format).unwrap_or_default(),
            cache: !args.no_cache && config.and_then(|c| c.cache).unwrap_or(true),
            timeout: Duration::from_secs(
                registry
                    .and_then(|r| r.timeout_secs)
                    .unwrap_or(ReqwestHttpFetcher::DEFAULT_TIMEOUT_SECONDS),
            ),
            user_agent: registry
                .and_then(|r| r.user_agent.clone())
                .unwrap_or_else(ReqwestHttpFetcher::default_user_agent),
            package_delay: Duration::from_millis(
                registry.and_then(|r| r.request_delay_ms).unwrap_or(0),
            ),
            crates_io,
        })
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // clap exits with status 2 on invalid arguments
    let args = Args::parse_args();

    if let Err(e) = run(args).await {
        if std::io::stderr().is_terminal() {
            eprintln!("\n{}\n", "❌ An error occurred:".red().bold());
        } else {
            eprintln!("\n❌ An error occurred:\n");
        }
        eprintln!("{}", e);

        // Display error chain
        for cause in e.chain().skip(1) {
            eprintln!("\nCaused by: {}", cause);
        }

        eprintln!();
        process::exit(ExitCode::ApplicationError.as_i32());
    }
}

async fn run(args: Args) -> Result<()> {
    let config = load_config(args.config.as_deref())?;

    let env_level = std::env::var(logging::LOG_LEVEL_ENV).ok();
    let (level, rejected_env_level) = logging::resolve_level(
        args.verbose,
        env_level.as_deref(),
        config.as_ref().and_then(|c| c.log_level.as_deref()),
    );
    logging::init_tracing(level)?;

    if let Some(raw) = rejected_env_level {
        tracing::warn!(
            "Ignoring unrecognized {} value '{}'",
            logging::LOG_LEVEL_ENV,
            raw
        );
    }
    if let Some(config) = &config {
        config.warn_unknown_fields();
    }

    let settings = RunSettings::resolve(&args, config.as_ref())?;
    tracing::debug!("Effective settings: {:?}", settings);

    let fetcher = ReqwestHttpFetcher::new(settings.timeout, &settings.user_agent)?;
    if settings.cache {
        generate(CachingHttpFetcher::new(fetcher), &args, &settings).await
    } else {
        generate(fetcher, &args, &settings).await
    }
}

fn load_config(explicit: Option<&Path>) -> Result<Option<ConfigFile>> {
    match explicit {
        Some(path) => Ok(Some(config::load_config_from_path(path)?)),
        None => config::discover_config(Path::new(".")),
    }
}

async fn generate<H: HttpFetcher>(fetcher: H, args: &Args, settings: &RunSettings) -> Result<()> {
    // Create adapters (Dependency Injection)
    let sbom_reader = FileSystemSbomReader::new();
    let cargo_registry = CratesIoClient::new(fetcher, settings.crates_io.clone());
    let metadata_repository = RegistryMetadataClient::new(cargo_registry);
    let progress_reporter = StderrProgressReporter::new();

    let use_case = GenerateReportUseCase::new(sbom_reader, metadata_repository, progress_reporter);

    let request = ReportRequest::new(args.input_file.clone())
        .with_package_delay(settings.package_delay);
    let response = use_case.execute(request).await?;

    tracing::info!(
        "Report covers {} package(s): {} enriched, {} failed, {} skipped, {} unresolved",
        response.summary.total,
        response.summary.enriched,
        response.summary.failed,
        response.summary.skipped,
        response.summary.unresolved
    );

    eprintln!("{}", FormatterFactory::progress_message(settings.format));
    let formatter = FormatterFactory::create(settings.format);
    let content = formatter.format(&response.rows)?;

    let presenter = create_presenter(args.output.as_ref());
    presenter.present(&content)?;

    Ok(())
}

fn create_presenter(output: Option<&PathBuf>) -> Box<dyn OutputPresenter> {
    match output {
        Some(path) => Box::new(FileSystemWriter::new(path.clone())),
        None => Box::new(StdoutPresenter::new()),
    }
}
