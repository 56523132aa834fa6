//! Configuration module.

pub mod keybindings;
pub mod loader;

pub use keybindings::KeyBindings;
pub use loader::{
    apply_cli_overrides, apply_env_overrides, default_config_path, default_log_path,
    load_config_with_precedence, merge_config, CliOverrides, ConfigError, ConfigFile,
    ResolvedConfig,
};

use std::path::PathBuf;
use tracing::info;

/// Resolve the full configuration stack.
///
/// Defaults → config file → environment → CLI flags.
///
/// # Errors
///
/// Returns `ConfigError` if a config file is unreadable or malformed, or if
/// any layer supplies an out-of-range value.
pub fn resolve(
    config_path: Option<PathBuf>,
    cli: CliOverrides,
) -> Result<ResolvedConfig, ConfigError> {
    let file = load_config_with_precedence(config_path)?;
    let from_file = file.is_some();
    let merged = merge_config(file)?;
    let with_env = apply_env_overrides(merged)?;
    let resolved = apply_cli_overrides(with_env, cli);
    info!(
        from_file,
        page_size = resolved.page_size.get(),
        truncate_at = resolved.truncate_at,
        questions = ?resolved.questions_file,
        "Configuration resolved"
    );
    Ok(resolved)
}
