//! Configuration file loading with precedence handling.

use crate::model::ColumnVisibility;
use crate::state::{PageSize, DEFAULT_TRUNCATE_AT};
use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;

/// Environment variable naming an explicit config file.
pub const ENV_CONFIG: &str = "QLV_CONFIG";
/// Environment variable overriding the page size.
pub const ENV_PAGE_SIZE: &str = "QLV_PAGE_SIZE";
/// Environment variable naming a questions file.
pub const ENV_QUESTIONS: &str = "QLV_QUESTIONS";

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Config file path contains invalid UTF-8 or cannot be resolved.
    #[error("Invalid config path: {0}")]
    InvalidPath(String),

    /// Failed to read config file (permission issues, directory instead of file).
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

    /// A setting parsed but is out of range (e.g. `page_size = 0`).
    #[error("Invalid value for {key}: {reason}")]
    InvalidValue {
        /// Setting name as written in the file or environment.
        key: String,
        /// Why the value was rejected.
        reason: String,
    },
}

/// TOML configuration file structure.
///
/// All fields are optional - if not specified, hardcoded defaults are used.
/// Corresponds to `~/.config/qlv/config.toml`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Rows added or removed per Load More / Show Less step.
    #[serde(default)]
    pub page_size: Option<usize>,

    /// Character budget for collapsed question text.
    #[serde(default)]
    pub truncate_at: Option<usize>,

    /// Start in full view.
    #[serde(default)]
    pub full_view: Option<bool>,

    /// Start with the sidebar expanded.
    #[serde(default)]
    pub sidebar_open: Option<bool>,

    /// Questions file to load instead of the built-in set.
    #[serde(default)]
    pub questions_file: Option<PathBuf>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,

    /// Initial column visibility.
    #[serde(default)]
    pub columns: Option<ColumnsSection>,

    /// Reserved. Parsed so existing files stay valid; bindings are not configurable.
    #[serde(default)]
    pub keybindings: Option<toml::Value>,
}

/// `[columns]` section. The Questions column is always on.
///
/// ```toml
/// [columns]
/// owner = true
/// type = true
/// ```
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ColumnsSection {
    /// Show the Owner column.
    #[serde(default)]
    pub owner: Option<bool>,
    /// Show the Type column.
    #[serde(default, rename = "type")]
    pub kind: Option<bool>,
    /// Show the Marks column.
    #[serde(default)]
    pub marks: Option<bool>,
    /// Show the Actions column.
    #[serde(default)]
    pub actions: Option<bool>,
}

impl ColumnsSection {
    fn apply(&self, mut visibility: ColumnVisibility) -> ColumnVisibility {
        visibility.owner = self.owner.unwrap_or(visibility.owner);
        visibility.kind = self.kind.unwrap_or(visibility.kind);
        visibility.marks = self.marks.unwrap_or(visibility.marks);
        visibility.actions = self.actions.unwrap_or(visibility.actions);
        visibility
    }
}

/// Resolved configuration after applying precedence rules.
///
/// Created by merging defaults, config file, env vars, and CLI args.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Rows revealed per Load More step.
    pub page_size: PageSize,
    /// Never zero.
    pub truncate_at: usize,
    /// Start in full view.
    pub full_view: bool,
    /// Start with the sidebar open.
    pub sidebar_open: bool,
    /// Initial column visibility.
    pub columns: ColumnVisibility,
    /// `None` selects the built-in sample set.
    pub questions_file: Option<PathBuf>,
    /// Path to log file for tracing output.
    pub log_file_path: PathBuf,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            page_size: PageSize::default(),
            truncate_at: DEFAULT_TRUNCATE_AT,
            full_view: false,
            sidebar_open: true,
            columns: ColumnVisibility::default(),
            questions_file: None,
            log_file_path: default_log_path(),
        }
    }
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/qlv/qlv.log` on Unix-like systems,
/// or appropriate platform path on other systems.
///
/// If state directory cannot be determined, falls back to current directory.
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("qlv").join("qlv.log")
    } else {
        PathBuf::from("qlv.log")
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
/// Returns `~/.config/qlv/config.toml` on Unix, appropriate path on other platforms.
/// Returns `None` if home directory cannot be determined.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("qlv").join("config.toml"))
}

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument (CLI `--config`)
/// 2. `QLV_CONFIG` environment variable
/// 3. Default path `~/.config/qlv/config.toml`
///
/// Missing config files are NOT errors - defaults are used.
///
/// # Errors
///
/// Returns error only if a config file exists but cannot be read or parsed,
/// or if `QLV_CONFIG` is set to an empty string.
pub fn load_config_with_precedence(
    config_path: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    if let Some(path) = config_path {
        return load_config_file(path);
    }

    if let Some(env_path) = std::env::var_os(ENV_CONFIG) {
        if env_path.is_empty() {
            return Err(ConfigError::InvalidPath(format!("{} is empty", ENV_CONFIG)));
        }
        return load_config_file(PathBuf::from(env_path));
    }

    if let Some(default_path) = default_config_path() {
        return load_config_file(default_path);
    }

    Ok(None)
}

fn page_size_value(key: &str, raw: usize) -> Result<PageSize, ConfigError> {
    PageSize::new(raw).ok_or_else(|| ConfigError::InvalidValue {
        key: key.to_string(),
        reason: "must be at least 1".to_string(),
    })
}

/// Merge config file into defaults to create resolved config.
///
/// For each field in `ConfigFile`, if `Some(value)`, use it; otherwise use default.
///
/// # Errors
///
/// Returns `ConfigError::InvalidValue` for `page_size = 0` or `truncate_at = 0`.
pub fn merge_config(config_file: Option<ConfigFile>) -> Result<ResolvedConfig, ConfigError> {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return Ok(defaults);
    };

    let page_size = match config.page_size {
        Some(raw) => page_size_value("page_size", raw)?,
        None => defaults.page_size,
    };
    let truncate_at = match config.truncate_at {
        Some(0) => {
            return Err(ConfigError::InvalidValue {
                key: "truncate_at".to_string(),
                reason: "must be at least 1".to_string(),
            })
        }
        Some(n) => n,
        None => defaults.truncate_at,
    };
    let columns = match &config.columns {
        Some(section) => section.apply(defaults.columns),
        None => defaults.columns,
    };

    Ok(ResolvedConfig {
        page_size,
        truncate_at,
        full_view: config.full_view.unwrap_or(defaults.full_view),
        sidebar_open: config.sidebar_open.unwrap_or(defaults.sidebar_open),
        columns,
        questions_file: config.questions_file.or(defaults.questions_file),
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
    })
}

/// Apply environment variable overrides to resolved config.
///
/// Checks for:
/// - `QLV_PAGE_SIZE`: Override page size
/// - `QLV_QUESTIONS`: Override questions file
///
/// # Errors
///
/// Returns `ConfigError::InvalidValue` if `QLV_PAGE_SIZE` is not a positive integer.
pub fn apply_env_overrides(mut config: ResolvedConfig) -> Result<ResolvedConfig, ConfigError> {
    if let Ok(raw) = std::env::var(ENV_PAGE_SIZE) {
        let parsed = raw.trim().parse::<usize>().map_err(|e| ConfigError::InvalidValue {
            key: ENV_PAGE_SIZE.to_string(),
            reason: e.to_string(),
        })?;
        config.page_size = page_size_value(ENV_PAGE_SIZE, parsed)?;
    }

    if let Some(path) = std::env::var_os(ENV_QUESTIONS) {
        if !path.is_empty() {
            config.questions_file = Some(PathBuf::from(path));
        }
    }

    Ok(config)
}

/// Flags explicitly set on the command line.
///
/// `None` / `false` means "not given" and leaves the lower layers alone.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliOverrides {
    /// `--questions FILE`.
    pub questions_file: Option<PathBuf>,
    /// `--page-size N`.
    pub page_size: Option<PageSize>,
    /// `--full-view`.
    pub full_view: bool,
    /// `--no-sidebar`.
    pub no_sidebar: bool,
}

/// Apply CLI argument overrides to resolved config.
///
/// Precedence chain: Defaults → Config File → Env Vars → CLI Args (highest)
pub fn apply_cli_overrides(mut config: ResolvedConfig, cli: CliOverrides) -> ResolvedConfig {
    if let Some(path) = cli.questions_file {
        config.questions_file = Some(path);
    }

    if let Some(page_size) = cli.page_size {
        config.page_size = page_size;
    }

    if cli.full_view {
        config.full_view = true;
    }

    if cli.no_sidebar {
        config.sidebar_open = false;
    }

    config
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
