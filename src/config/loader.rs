//! Configuration file loading with precedence handling.

use crate::view::constants::{
    DEFAULT_CHART_HEIGHT, DEFAULT_CHART_WIDTH, DEFAULT_TITLE, MIN_CHART_DIMENSION,
};
use crate::view::{ChartMode, ChartOptions};
use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;

/// Log file analysed when no path is configured.
pub const DEFAULT_INPUT: &str = "LogFile.txt";

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV_VAR: &str = "BYTECHART_CONFIG";

/// Environment variable overriding the input log path.
pub const INPUT_ENV_VAR: &str = "BYTECHART_INPUT";

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Failed to read config file (permission issues, not a file, ...).
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML syntax or unknown keys.
    #[error("Invalid TOML in {path}: {reason}")]
    ParseError {
        /// Path with invalid TOML.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },
}

/// TOML configuration file structure.
///
/// All fields are optional - if not specified, hardcoded defaults are used.
/// Corresponds to `~/.config/bytechart/config.toml`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Log file to analyse.
    #[serde(default)]
    pub input: Option<PathBuf>,

    /// Render the chart off-screen instead of in the terminal.
    #[serde(default)]
    pub headless: Option<bool>,

    /// File receiving the headless chart.
    #[serde(default)]
    pub output: Option<PathBuf>,

    /// Headless chart width in cells.
    #[serde(default)]
    pub chart_width: Option<u16>,

    /// Headless chart height in cells.
    #[serde(default)]
    pub chart_height: Option<u16>,

    /// Chart title.
    #[serde(default)]
    pub title: Option<String>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,
}

/// Resolved configuration after applying precedence rules.
///
/// Created by merging defaults, config file, env vars, and CLI args.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Log file to analyse.
    pub input: PathBuf,
    /// Headless rendering requested.
    pub headless: bool,
    /// Headless output file (`None` = stdout).
    pub output: Option<PathBuf>,
    /// Headless chart width.
    pub chart_width: u16,
    /// Headless chart height.
    pub chart_height: u16,
    /// Chart title.
    pub title: String,
    /// Path to log file for tracing output.
    pub log_file_path: PathBuf,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            headless: false,
            output: None,
            chart_width: DEFAULT_CHART_WIDTH,
            chart_height: DEFAULT_CHART_HEIGHT,
            title: DEFAULT_TITLE.to_string(),
            log_file_path: default_log_path(),
        }
    }
}

impl ResolvedConfig {
    /// Chart rendering options for this configuration.
    ///
    /// Headless rendering is used when requested or when stdout is not a
    /// terminal, since an interactive chart cannot be shown there. An output
    /// file also implies headless rendering. Dimensions below the minimum are
    /// raised to it.
    pub fn chart_options(&self, stdout_is_terminal: bool) -> ChartOptions {
        let headless = self.headless || self.output.is_some() || !stdout_is_terminal;
        ChartOptions {
            title: self.title.clone(),
            mode: if headless {
                ChartMode::Headless
            } else {
                ChartMode::Interactive
            },
            width: self.chart_width.max(MIN_CHART_DIMENSION),
            height: self.chart_height.max(MIN_CHART_DIMENSION),
            output: self.output.clone(),
        }
    }
}

/// Values given on the command line; `None` leaves the config untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliOverrides {
    /// Positional log file argument.
    pub input: Option<PathBuf>,
    /// `--headless` (only `Some(true)` when the flag was passed).
    pub headless: Option<bool>,
    /// `--output`.
    pub output: Option<PathBuf>,
    /// `--width`.
    pub chart_width: Option<u16>,
    /// `--height`.
    pub chart_height: Option<u16>,
    /// `--title`.
    pub title: Option<String>,
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/bytechart/bytechart.log` on Unix-like systems,
/// or appropriate platform path on other systems.
///
/// If state directory cannot be determined, falls back to current directory.
pub fn default_log_path() -> PathBuf {
    // Try to get platform-appropriate state directory
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("bytechart").join("bytechart.log")
    } else {
        // Fallback to current directory
        PathBuf::from("bytechart.log")
    }
}

/// Load configuration file from a specific path.
///
/// Returns `Ok(None)` if file doesn't exist (not an error - use defaults).
/// Returns `Err` if file exists but cannot be read or parsed.
///
/// # Errors
///
/// Returns error if file exists but has read or parse errors.
pub fn load_config_file(path: impl Into<PathBuf>) -> Result<Option<ConfigFile>, ConfigError> {
    let path = path.into();

    // Missing file is not an error - use defaults
    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    let config: ConfigFile = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    Ok(Some(config))
}

/// Resolve default config file path.
///
/// Returns `~/.config/bytechart/config.toml` on Unix, appropriate path on other platforms.
/// Returns `None` if home directory cannot be determined.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("bytechart").join("config.toml"))
}

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument (CLI `--config`)
/// 2. `BYTECHART_CONFIG` environment variable
/// 3. Default path `~/.config/bytechart/config.toml`
///
/// Missing config files are NOT errors - defaults are used.
///
/// # Errors
///
/// Returns error only if a config file exists but cannot be read or parsed.
pub fn load_config_with_precedence(
    config_path: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    if let Some(path) = config_path {
        return load_config_file(path);
    }

    if let Ok(env_path) = std::env::var(CONFIG_ENV_VAR) {
        return load_config_file(PathBuf::from(env_path));
    }

    if let Some(default_path) = default_config_path() {
        return load_config_file(default_path);
    }

    Ok(None)
}

/// Merge config file into defaults to create resolved config.
///
/// For each field in `ConfigFile`, if `Some(value)`, use it; otherwise use default.
pub fn merge_config(config_file: Option<ConfigFile>) -> ResolvedConfig {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return defaults;
    };

    ResolvedConfig {
        input: config.input.unwrap_or(defaults.input),
        headless: config.headless.unwrap_or(defaults.headless),
        output: config.output.or(defaults.output),
        chart_width: config.chart_width.unwrap_or(defaults.chart_width),
        chart_height: config.chart_height.unwrap_or(defaults.chart_height),
        title: config.title.unwrap_or(defaults.title),
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
    }
}

/// Apply environment variable overrides to resolved config.
///
/// Checks for:
/// - `BYTECHART_INPUT`: Override the input log path
pub fn apply_env_overrides(mut config: ResolvedConfig) -> ResolvedConfig {
    if let Ok(input) = std::env::var(INPUT_ENV_VAR) {
        if !input.is_empty() {
            config.input = PathBuf::from(input);
        }
    }

    config
}

/// Apply CLI argument overrides to resolved config.
///
/// CLI args have the highest precedence and override all other sources.
/// Only applies overrides for values that were explicitly given.
///
/// Precedence chain: Defaults → Config File → Env Vars → CLI Args (highest)
pub fn apply_cli_overrides(mut config: ResolvedConfig, cli: CliOverrides) -> ResolvedConfig {
    if let Some(input) = cli.input {
        config.input = input;
    }
    if let Some(headless) = cli.headless {
        config.headless = headless;
    }
    if let Some(output) = cli.output {
        config.output = Some(output);
    }
    if let Some(width) = cli.chart_width {
        config.chart_width = width;
    }
    if let Some(height) = cli.chart_height {
        config.chart_height = height;
    }
    if let Some(title) = cli.title {
        config.title = title;
    }

    config
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
