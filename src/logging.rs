//! Diagnostics setup for the sbom-analyzer binary.
//!
//! Installs one process-wide `tracing` subscriber writing to stderr, so
//! diagnostics never mix with a report written to stdout.

use anyhow::Result;
use std::io::IsTerminal;
use std::str::FromStr;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Environment variable selecting the minimum log level.
pub const LOG_LEVEL_ENV: &str = "LOGLEVEL";

/// Picks the effective level: `--verbose`, then `LOGLEVEL`, then the config
/// file, then `info`.
///
/// An unrecognized `LOGLEVEL` value is skipped and handed back so it can be
/// reported once logging is up.
pub fn resolve_level(
    verbose: bool,
    env_level: Option<&str>,
    config_level: Option<&str>,
) -> (LevelFilter, Option<String>) {
    if verbose {
        return (LevelFilter::DEBUG, None);
    }

    let mut rejected = None;
    if let Some(raw) = env_level.map(str::trim).filter(|raw| !raw.is_empty()) {
        match parse_level(raw) {
            Some(level) => return (level, None),
            None => rejected = Some(raw.to_string()),
        }
    }

    let level = config_level
        .and_then(|raw| parse_level(raw.trim()))
        .unwrap_or(LevelFilter::INFO);
    (level, rejected)
}

/// Parses a level name case-insensitively. `WARNING` and `CRITICAL` are
/// accepted as aliases for `warn` and `error`.
fn parse_level(raw: &str) -> Option<LevelFilter> {
    match raw.to_ascii_lowercase().as_str() {
        "warning" => Some(LevelFilter::WARN),
        "critical" => Some(LevelFilter::ERROR),
        other => LevelFilter::from_str(other).ok(),
    }
}

/// Initialize the global tracing subscriber.
///
/// Must be called exactly once, before any tracing macros are used.
/// Dependencies (reqwest, hyper) are capped at `warn` so `--verbose` shows
/// only this tool's own debug output.
pub fn init_tracing(level: LevelFilter) -> Result<()> {
    let env_filter = EnvFilter::new(format!("warn,sbom_analyzer={}", level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr)
                .with_ansi(std::io::stderr().is_terminal()),
        )
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to initialize tracing subscriber: {}", e))?;

    Ok(())
}
