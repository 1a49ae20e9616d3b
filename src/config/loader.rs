//! Configuration file loading with precedence handling.

use crate::grid::animation::DEFAULT_SETTLE_DURATION;
use crate::grid::ItemSize;
use crate::model::{WidgetId, WidgetKind};
use crate::signup::KOREA_COUNTRY_CODE;
use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Failed to read config file (file may not exist or have permission issues).
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML syntax.
    #[error("Invalid TOML in {path}: {reason}")]
    ParseError {
        /// Path with invalid TOML.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },

    /// `widgets` names a widget the dashboard does not have.
    #[error("Unknown widget in config: {0:?}")]
    UnknownWidget(String),

    /// `item_width` or `item_height` exceeds [`MAX_ITEM_CELLS`].
    #[error("Widget size {width}x{height} exceeds the {max}-cell limit")]
    ItemTooLarge {
        /// Configured width.
        width: u16,
        /// Configured height.
        height: u16,
        /// Largest accepted side.
        max: u16,
    },
}

/// Largest accepted widget side in terminal cells.
pub const MAX_ITEM_CELLS: u16 = 200;

/// TOML configuration file structure.
///
/// All fields are optional - if not specified, hardcoded defaults are used.
/// Corresponds to `~/.config/findeck/config.toml`.
#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Number of grid columns.
    #[serde(default)]
    pub columns: Option<usize>,

    /// Widget width in terminal columns.
    #[serde(default)]
    pub item_width: Option<u16>,

    /// Widget height in terminal rows.
    #[serde(default)]
    pub item_height: Option<u16>,

    /// Settle animation duration in milliseconds.
    #[serde(default)]
    pub settle_duration_ms: Option<u64>,

    /// Country code pre-filled on the sign-up screen.
    #[serde(default)]
    pub country_code: Option<String>,

    /// Initial widget order by id.
    #[serde(default)]
    pub widgets: Option<Vec<String>>,

    /// Start on the dashboard instead of the sign-up screen.
    #[serde(default)]
    pub skip_signup: Option<bool>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,
}

/// Resolved configuration after applying precedence rules.
///
/// Created by merging defaults, config file, env vars, and CLI args.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Number of grid columns.
    pub columns: usize,
    /// Widget width in terminal columns.
    pub item_width: u16,
    /// Widget height in terminal rows.
    pub item_height: u16,
    /// Settle animation duration in milliseconds.
    pub settle_duration_ms: u64,
    /// Country code pre-filled on the sign-up screen.
    pub country_code: String,
    /// Initial widget order by id.
    pub widgets: Vec<String>,
    /// Start on the dashboard.
    pub skip_signup: bool,
    /// Path to log file for tracing output.
    pub log_file_path: PathBuf,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            columns: 2,
            item_width: 28,
            item_height: 8,
            settle_duration_ms: DEFAULT_SETTLE_DURATION.as_millis() as u64,
            country_code: KOREA_COUNTRY_CODE.to_string(),
            widgets: WidgetKind::ALL
                .iter()
                .map(|kind| kind.id_str().to_string())
                .collect(),
            skip_signup: false,
            log_file_path: default_log_path(),
        }
    }
}

impl ResolvedConfig {
    /// Settle animation duration.
    pub fn settle_duration(&self) -> Duration {
        Duration::from_millis(self.settle_duration_ms)
    }

    /// Widget size, rejecting sides larger than [`MAX_ITEM_CELLS`].
    pub fn item_size(&self) -> Result<ItemSize, ConfigError> {
        if self.item_width > MAX_ITEM_CELLS || self.item_height > MAX_ITEM_CELLS {
            return Err(ConfigError::ItemTooLarge {
                width: self.item_width,
                height: self.item_height,
                max: MAX_ITEM_CELLS,
            });
        }
        Ok(ItemSize::new(
            f64::from(self.item_width),
            f64::from(self.item_height),
        ))
    }

    /// Validate `widgets` against the catalogue.
    pub fn widget_ids(&self) -> Result<Vec<WidgetId>, ConfigError> {
        self.widgets
            .iter()
            .map(|raw| {
                WidgetKind::from_id_str(raw)
                    .map(WidgetKind::widget_id)
                    .ok_or_else(|| ConfigError::UnknownWidget(raw.clone()))
            })
            .collect()
    }
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/findeck/findeck.log` on Unix-like systems,
/// or appropriate platform path on other systems.
///
/// If state directory cannot be determined, falls back to current directory.
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("findeck").join("findeck.log")
    } else {
        PathBuf::from("findeck.log")
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
/// Returns `~/.config/findeck/config.toml` on Unix, appropriate path on other platforms.
/// Returns `None` if home directory cannot be determined.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("findeck").join("config.toml"))
}

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument (CLI `--config`)
/// 2. `FINDECK_CONFIG` environment variable
/// 3. Default path `~/.config/findeck/config.toml`
///
/// Missing config files are NOT errors - defaults are used.
pub fn load_config_with_precedence(
    config_path: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    if let Some(path) = config_path {
        return load_config_file(path);
    }

    if let Ok(env_path) = std::env::var("FINDECK_CONFIG") {
        return load_config_file(PathBuf::from(env_path));
    }

    if let Some(default_path) = default_config_path() {
        return load_config_file(default_path);
    }

    Ok(None)
}

/// Apply environment variable overrides to resolved config.
///
/// Checks for:
/// - `FINDECK_COLUMNS`: Override column count (ignored unless a positive integer)
/// - `FINDECK_COUNTRY_CODE`: Override sign-up country code
pub fn apply_env_overrides(mut config: ResolvedConfig) -> ResolvedConfig {
    if let Some(columns) = std::env::var("FINDECK_COLUMNS")
        .ok()
        .and_then(|raw| raw.trim().parse::<usize>().ok())
        .filter(|&columns| columns > 0)
    {
        config.columns = columns;
    }

    if let Ok(country_code) = std::env::var("FINDECK_COUNTRY_CODE") {
        config.country_code = country_code;
    }

    config
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
        columns: config.columns.unwrap_or(defaults.columns),
        item_width: config.item_width.unwrap_or(defaults.item_width),
        item_height: config.item_height.unwrap_or(defaults.item_height),
        settle_duration_ms: config
            .settle_duration_ms
            .unwrap_or(defaults.settle_duration_ms),
        country_code: config.country_code.unwrap_or(defaults.country_code),
        widgets: config.widgets.unwrap_or(defaults.widgets),
        skip_signup: config.skip_signup.unwrap_or(defaults.skip_signup),
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
    }
}

/// Apply CLI argument overrides to resolved config.
///
/// Only applies overrides for flags that were explicitly set by the user.
///
/// Precedence chain: Defaults → Config File → Env Vars → CLI Args (highest)
pub fn apply_cli_overrides(
    mut config: ResolvedConfig,
    columns_override: Option<usize>,
    country_code_override: Option<String>,
    skip_signup_override: Option<bool>,
) -> ResolvedConfig {
    if let Some(columns) = columns_override {
        config.columns = columns;
    }

    if let Some(country_code) = country_code_override {
        config.country_code = country_code;
    }

    if let Some(skip_signup) = skip_signup_override {
        config.skip_signup = skip_signup;
    }

    config
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
