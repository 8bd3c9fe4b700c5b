//! Configuration file loading with precedence handling.

use crate::state::SelectAllMode;
use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV_VAR: &str = "ROSTER_CONFIG";

/// Environment variable naming the roster file to load.
pub const SOURCE_ENV_VAR: &str = "ROSTER_SOURCE";

/// Informal standard for disabling colored output (<https://no-color.org>).
pub const NO_COLOR_ENV_VAR: &str = "NO_COLOR";

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Config path is set but unusable (e.g. an empty `ROSTER_CONFIG`).
    #[error("Invalid config path: {0}")]
    InvalidPath(String),

    /// Failed to read config file (permission issues, not a file, ...).
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML or unknown keys.
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
/// Corresponds to `~/.config/roster/config.toml`:
///
/// ```toml
/// source = "/srv/roster/members.json"
/// log_file_path = "/tmp/roster.log"
/// select_all_mode = "recompute"
/// no_color = true
/// ```
#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Roster JSON file to load when none is given on the command line.
    #[serde(default)]
    pub source: Option<PathBuf>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,

    /// How the per-page "select all" checkbox tracks the selection.
    #[serde(default)]
    pub select_all_mode: Option<SelectAllMode>,

    /// Render without colors.
    #[serde(default)]
    pub no_color: Option<bool>,
}

/// Resolved configuration after applying precedence rules.
///
/// Created by merging defaults, config file, env vars, and CLI args.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Roster file. `None` means read piped stdin.
    pub source: Option<PathBuf>,
    /// Path to log file for tracing output.
    pub log_file_path: PathBuf,
    /// Select-all marker policy.
    pub select_all_mode: SelectAllMode,
    /// Render without colors.
    pub no_color: bool,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            source: None,
            log_file_path: default_log_path(),
            select_all_mode: SelectAllMode::default(),
            no_color: false,
        }
    }
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/roster/roster.log` on Linux, or the platform's
/// state directory elsewhere. Falls back to the current directory when no
/// state directory exists (macOS, Windows).
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("roster").join("roster.log")
    } else {
        PathBuf::from("roster.log")
    }
}

/// Load configuration file from a specific path.
///
/// Returns `Ok(None)` if file doesn't exist (not an error - use defaults).
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
/// Returns `~/.config/roster/config.toml` on Unix, appropriate path on other platforms.
/// Returns `None` if home directory cannot be determined.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("roster").join("config.toml"))
}

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument (CLI `--config`)
/// 2. `ROSTER_CONFIG` environment variable
/// 3. Default path `~/.config/roster/config.toml`
///
/// Missing config files are NOT errors - defaults are used.
///
/// # Errors
///
/// `InvalidPath` when `ROSTER_CONFIG` is set to an empty string; otherwise
/// only if a config file exists but cannot be read or parsed.
pub fn load_config_with_precedence(
    config_path: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    if let Some(path) = config_path {
        return load_config_file(path);
    }

    if let Ok(env_path) = std::env::var(CONFIG_ENV_VAR) {
        if env_path.trim().is_empty() {
            return Err(ConfigError::InvalidPath(format!(
                "{CONFIG_ENV_VAR} is set but empty"
            )));
        }
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
        source: config.source.or(defaults.source),
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
        select_all_mode: config.select_all_mode.unwrap_or(defaults.select_all_mode),
        no_color: config.no_color.unwrap_or(defaults.no_color),
    }
}

/// Apply environment variable overrides to resolved config.
///
/// Checks for:
/// - `ROSTER_SOURCE`: roster file to load (ignored when empty)
/// - `NO_COLOR`: any non-empty value disables color
pub fn apply_env_overrides(mut config: ResolvedConfig) -> ResolvedConfig {
    if let Ok(source) = std::env::var(SOURCE_ENV_VAR) {
        if !source.is_empty() {
            config.source = Some(PathBuf::from(source));
        }
    }

    if std::env::var_os(NO_COLOR_ENV_VAR).is_some_and(|v| !v.is_empty()) {
        config.no_color = true;
    }

    config
}

/// Apply CLI argument overrides to resolved config.
///
/// CLI args have the highest precedence and override all other sources.
/// Only applies overrides for flags that were explicitly set by the user.
///
/// Precedence chain: Defaults → Config File → Env Vars → CLI Args (highest)
pub fn apply_cli_overrides(
    mut config: ResolvedConfig,
    source_override: Option<PathBuf>,
    select_all_mode_override: Option<SelectAllMode>,
    no_color_override: Option<bool>,
) -> ResolvedConfig {
    if let Some(source) = source_override {
        config.source = Some(source);
    }

    if let Some(mode) = select_all_mode_override {
        config.select_all_mode = mode;
    }

    if let Some(no_color) = no_color_override {
        config.no_color = no_color;
    }

    config
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
