//! Configuration file support for sbom-analyzer.
//!
//! Provides YAML-based configuration through `sbom-analyzer.config.yml`
//! files, including data structures, file loading, and validation.
//! Command-line flags take precedence over anything set here.

use anyhow::Context;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use std::str::FromStr;

use crate::application::dto::OutputFormat;
use crate::shared::error::AnalyzerError;
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "sbom-analyzer.config.yml";

const LOG_LEVELS: [&str; 7] = [
    "trace", "debug", "info", "warn", "warning", "error", "critical",
];

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub format: Option<String>,
    pub log_level: Option<String>,
    /// Reuse successful registry responses within a run (default true).
    pub cache: Option<bool>,
    pub registry: Option<RegistryConfig>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Registry access settings.
#[derive(Debug, Deserialize, Default)]
pub struct RegistryConfig {
    pub base_url: Option<String>,
    pub timeout_secs: Option<u64>,
    pub max_attempts: Option<u32>,
    pub download_window_days: Option<usize>,
    pub user_agent: Option<String>,
    /// Pause between two packages, in milliseconds.
    pub request_delay_ms: Option<u64>,
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

impl ConfigFile {
    /// Parsed output format, if one is configured.
    pub fn output_format(&self) -> Result<Option<OutputFormat>> {
        self.format
            .as_deref()
            .map(|format| OutputFormat::from_str(format).map_err(anyhow::Error::msg))
            .transpose()
    }

    /// Dotted names of every field the schema does not know, sorted.
    pub fn unknown_field_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.unknown_fields.keys().cloned().collect();
        if let Some(registry) = &self.registry {
            names.extend(
                registry
                    .unknown_fields
                    .keys()
                    .map(|key| format!("registry.{}", key)),
            );
        }
        names.sort();
        names
    }

    /// Logs a warning for each unknown field.
    ///
    /// Kept separate from loading because the log level itself may come
    /// from this file, so the subscriber is installed in between.
    pub fn warn_unknown_fields(&self) {
        for name in self.unknown_field_names() {
            tracing::warn!("Unknown config field '{}' will be ignored", name);
        }
    }
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)
        .with_context(|| format!("Invalid config file: {}", path.display()))?;

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

fn invalid(message: impl Into<String>) -> anyhow::Error {
    AnalyzerError::Validation {
        message: message.into(),
    }
    .into()
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    config.output_format()?;

    if let Some(level) = &config.log_level {
        if !LOG_LEVELS.contains(&level.to_lowercase().as_str()) {
            return Err(invalid(format!(
                "log_level '{}' is not recognized.\n\n\
                 💡 Hint: Use one of: {}.",
                level,
                LOG_LEVELS.join(", ")
            )));
        }
    }

    if let Some(registry) = &config.registry {
        validate_registry(registry)?;
    }

    Ok(())
}

fn validate_registry(registry: &RegistryConfig) -> Result<()> {
    if let Some(base_url) = &registry.base_url {
        if !(base_url.starts_with("https://") || base_url.starts_with("http://")) {
            return Err(invalid(format!(
                "registry.base_url '{}' must be an http(s) URL.\n\n\
                 💡 Hint: The default is https://crates.io.",
                base_url
            )));
        }
    }

    if registry.timeout_secs == Some(0) {
        return Err(invalid("registry.timeout_secs must be greater than 0."));
    }

    if registry.max_attempts == Some(0) {
        return Err(invalid(
            "registry.max_attempts must be at least 1.\n\n\
             💡 Hint: Use 1 to disable retries.",
        ));
    }

    if registry.download_window_days == Some(0) {
        return Err(invalid("registry.download_window_days must be at least 1."));
    }

    if let Some(user_agent) = &registry.user_agent {
        if user_agent.trim().is_empty() {
            return Err(invalid(
                "registry.user_agent must not be empty.\n\n\
                 💡 Hint: crates.io rejects requests without a descriptive User-Agent.",
            ));
        }
    }

    Ok(())
}
