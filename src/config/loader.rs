//! Configuration file loading with precedence handling.

use crate::query::{SortColumn, SortDirection, SortState};
use crate::state::DEFAULT_BANNER_DURATION;
use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV_VAR: &str = "WAITLIST_ADMIN_CONFIG";

/// Environment variable naming the record data file.
pub const DATA_ENV_VAR: &str = "WAITLIST_ADMIN_DATA";

const APP_DIR: &str = "waitlist-admin";

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
/// Corresponds to `~/.config/waitlist-admin/config.toml`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// JSON array of records to load instead of the bundled sample.
    #[serde(default)]
    pub data_file: Option<PathBuf>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,

    /// How long the success banner stays up, in milliseconds.
    #[serde(default)]
    pub banner_duration_ms: Option<u64>,

    /// Initial sort column key, e.g. `"signupDate"` or `"postcode"`.
    #[serde(default)]
    pub default_sort_column: Option<String>,

    /// Initial sort direction, `"asc"` or `"desc"`.
    #[serde(default)]
    pub default_sort_direction: Option<String>,

    /// Show the filter sidebar on startup.
    #[serde(default)]
    pub show_filters: Option<bool>,
}

/// Resolved configuration after applying precedence rules.
///
/// Created by merging defaults, config file, env vars, and CLI args.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Record data file. `None` means the bundled sample.
    pub data_file: Option<PathBuf>,
    /// Path to log file for tracing output.
    pub log_file_path: PathBuf,
    /// Banner dismiss delay.
    pub banner_duration: Duration,
    /// Initial sort.
    pub sort: SortState,
    /// Show the filter sidebar on startup.
    pub show_filters: bool,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            data_file: None,
            log_file_path: default_log_path(),
            banner_duration: DEFAULT_BANNER_DURATION,
            sort: SortState::default(),
            show_filters: true,
        }
    }
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/waitlist-admin/waitlist-admin.log` on Linux,
/// or the platform equivalent.
///
/// If state directory cannot be determined, falls back to current directory.
pub fn default_log_path() -> PathBuf {
    match dirs::state_dir() {
        Some(state_dir) => state_dir.join(APP_DIR).join("waitlist-admin.log"),
        None => PathBuf::from("waitlist-admin.log"),
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

    tracing::debug!(path = %path.display(), "Loaded config file");
    Ok(Some(config))
}

/// Resolve default config file path.
///
/// Returns `~/.config/waitlist-admin/config.toml` on Linux, the platform
/// equivalent elsewhere, or `None` if no config directory is known.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join("config.toml"))
}

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument (CLI `--config`)
/// 2. `WAITLIST_ADMIN_CONFIG` environment variable
/// 3. Default path `~/.config/waitlist-admin/config.toml`
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

    match default_config_path() {
        Some(default_path) => load_config_file(default_path),
        None => Ok(None),
    }
}

/// Resolve the initial sort from config keys.
///
/// An unknown column key falls back to the default sort; an unknown or
/// missing direction falls back to the direction a header click would pick
/// (descending for the default column, ascending otherwise).
pub fn resolve_sort(column: Option<&str>, direction: Option<&str>) -> SortState {
    let default = SortState::default();
    let Some(key) = column else {
        return match direction.and_then(SortDirection::from_key) {
            Some(direction) => SortState::new(default.column, direction),
            None => default,
        };
    };

    let Some(column) = SortColumn::from_key(key) else {
        tracing::warn!(key, "Unknown default_sort_column; using signupDate desc");
        return default;
    };

    let fallback = if column == default.column {
        default.direction
    } else {
        SortDirection::Asc
    };
    let direction = match direction {
        None => fallback,
        Some(key) => SortDirection::from_key(key).unwrap_or_else(|| {
            tracing::warn!(key, "Unknown default_sort_direction; expected asc or desc");
            fallback
        }),
    };
    SortState::new(column, direction)
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
        data_file: config.data_file.or(defaults.data_file),
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
        banner_duration: config
            .banner_duration_ms
            .map(Duration::from_millis)
            .unwrap_or(defaults.banner_duration),
        sort: resolve_sort(
            config.default_sort_column.as_deref(),
            config.default_sort_direction.as_deref(),
        ),
        show_filters: config.show_filters.unwrap_or(defaults.show_filters),
    }
}

/// Apply environment variable overrides to resolved config.
///
/// Checks for:
/// - `WAITLIST_ADMIN_DATA`: Override the data file
pub fn apply_env_overrides(mut config: ResolvedConfig) -> ResolvedConfig {
    if let Ok(path) = std::env::var(DATA_ENV_VAR) {
        config.data_file = Some(PathBuf::from(path));
    }

    config
}

/// Apply CLI argument overrides to resolved config.
///
/// CLI args have the highest precedence and override all other sources.
/// Only applies overrides for flags that were explicitly set by the user.
///
/// Precedence chain: Defaults → Config File → Env Vars → CLI Args (highest)
///
/// # Arguments
///
/// * `config` - Base resolved config (already merged with defaults, file, and env vars)
/// * `data_override` - Optional data file from `--data`
/// * `hide_filters` - Whether `--hide-filters` was passed
pub fn apply_cli_overrides(
    mut config: ResolvedConfig,
    data_override: Option<PathBuf>,
    hide_filters: bool,
) -> ResolvedConfig {
    if let Some(path) = data_override {
        config.data_file = Some(path);
    }

    if hide_filters {
        config.show_filters = false;
    }

    config
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
