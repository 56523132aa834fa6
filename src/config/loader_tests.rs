//! Tests for configuration file loading.

use super::*;
use serial_test::serial;
use std::env;
use std::fs;

fn write_temp_config(name: &str, content: &str) -> PathBuf {
    let path = env::temp_dir().join(name);
    fs::write(&path, content).expect("Failed to write test config");
    path
}

// ===== Paths =====

#[test]
fn default_config_path_contains_qlv_config_toml() {
    let path = default_config_path().expect("Should have default path");
    let path_str = path.to_string_lossy();
    assert!(
        path_str.contains("qlv") && path_str.ends_with("config.toml"),
        "Path should contain 'qlv' and end with 'config.toml', got: {}",
        path_str
    );
}

#[test]
fn default_log_path_ends_with_qlv_log() {
    let path = default_log_path();
    assert!(
        path.to_string_lossy().ends_with("qlv.log"),
        "Default log path should end with 'qlv.log', got: {:?}",
        path
    );
}

// ===== load_config_file =====

#[test]
fn load_config_file_returns_ok_none_for_missing_file() {
    let result = load_config_file("/nonexistent/path/to/qlv/config.toml");
    assert_eq!(result, Ok(None), "Missing config file is not an error");
}

#[test]
fn load_config_file_parses_valid_toml() {
    let path = write_temp_config(
        "qlv_test_config_valid.toml",
        r#"
page_size = 5
truncate_at = 30
full_view = true
sidebar_open = false
questions_file = "/data/questions.json"

[columns]
owner = true
type = true
"#,
    );

    let result = load_config_file(&path);
    fs::remove_file(&path).ok();

    let config = result.unwrap().expect("Should return Some for existing file");
    assert_eq!(config.page_size, Some(5));
    assert_eq!(config.truncate_at, Some(30));
    assert_eq!(config.full_view, Some(true));
    assert_eq!(config.sidebar_open, Some(false));
    assert_eq!(
        config.questions_file,
        Some(PathBuf::from("/data/questions.json"))
    );
    let columns = config.columns.expect("columns section");
    assert_eq!(columns.owner, Some(true));
    assert_eq!(columns.kind, Some(true));
    assert_eq!(columns.marks, None);
}

#[test]
fn load_config_file_returns_error_for_invalid_toml() {
    let path = write_temp_config("qlv_test_config_invalid.toml", "page_size = [unclosed");

    let result = load_config_file(&path);
    fs::remove_file(&path).ok();

    assert!(matches!(result, Err(ConfigError::ParseError { .. })));
}

#[test]
fn load_config_file_rejects_unknown_keys() {
    let path = write_temp_config("qlv_test_config_unknown.toml", "theme = \"dark\"\n");

    let result = load_config_file(&path);
    fs::remove_file(&path).ok();

    assert!(matches!(result, Err(ConfigError::ParseError { .. })));
}

#[test]
fn keybindings_table_is_accepted_and_ignored() {
    let path = write_temp_config(
        "qlv_test_config_keybindings.toml",
        "page_size = 3\n\n[keybindings]\nquit = \"x\"\n",
    );

    let result = load_config_file(&path);
    fs::remove_file(&path).ok();

    let config = result.unwrap().expect("Should return Some for existing file");
    assert!(config.keybindings.is_some());

    let with_table = merge_config(Some(config)).unwrap();
    let without_table = merge_config(Some(ConfigFile {
        page_size: Some(3),
        ..ConfigFile::default()
    }))
    .unwrap();
    assert_eq!(with_table, without_table);
}

#[test]
fn load_config_file_reports_read_error_for_directory() {
    let dir = env::temp_dir();

    let result = load_config_file(&dir);

    assert!(matches!(result, Err(ConfigError::ReadError { .. })));
}

// ===== load_config_with_precedence =====

#[test]
#[serial]
fn explicit_path_wins_over_env() {
    let explicit = write_temp_config("qlv_test_precedence_explicit.toml", "page_size = 3\n");
    let from_env = write_temp_config("qlv_test_precedence_env.toml", "page_size = 7\n");
    env::set_var(ENV_CONFIG, &from_env);

    let result = load_config_with_precedence(Some(explicit.clone()));

    env::remove_var(ENV_CONFIG);
    fs::remove_file(&explicit).ok();
    fs::remove_file(&from_env).ok();
    assert_eq!(result.unwrap().unwrap().page_size, Some(3));
}

#[test]
#[serial]
fn env_path_used_without_explicit_path() {
    let from_env = write_temp_config("qlv_test_precedence_env_only.toml", "page_size = 7\n");
    env::set_var(ENV_CONFIG, &from_env);

    let result = load_config_with_precedence(None);

    env::remove_var(ENV_CONFIG);
    fs::remove_file(&from_env).ok();
    assert_eq!(result.unwrap().unwrap().page_size, Some(7));
}

#[test]
#[serial]
fn empty_env_path_is_invalid() {
    env::set_var(ENV_CONFIG, "");

    let result = load_config_with_precedence(None);

    env::remove_var(ENV_CONFIG);
    assert!(matches!(result, Err(ConfigError::InvalidPath(_))));
}

// ===== merge_config =====

#[test]
fn merge_none_yields_defaults() {
    let resolved = merge_config(None).unwrap();

    assert_eq!(resolved, ResolvedConfig::default());
    assert_eq!(resolved.page_size.get(), 10);
    assert_eq!(resolved.truncate_at, 50);
    assert!(resolved.sidebar_open);
    assert!(!resolved.full_view);
    assert_eq!(resolved.columns, ColumnVisibility::default());
}

#[test]
fn merge_applies_file_values() {
    let file = ConfigFile {
        page_size: Some(4),
        full_view: Some(true),
        columns: Some(ColumnsSection {
            marks: Some(true),
            ..ColumnsSection::default()
        }),
        ..ConfigFile::default()
    };

    let resolved = merge_config(Some(file)).unwrap();

    assert_eq!(resolved.page_size.get(), 4);
    assert!(resolved.full_view);
    assert!(resolved.columns.marks);
    assert!(resolved.columns.questions);
    assert!(!resolved.columns.owner);
}

#[test]
fn merge_rejects_zero_page_size() {
    let file = ConfigFile {
        page_size: Some(0),
        ..ConfigFile::default()
    };

    let result = merge_config(Some(file));

    assert!(matches!(
        result,
        Err(ConfigError::InvalidValue { ref key, .. }) if key == "page_size"
    ));
}

#[test]
fn merge_rejects_zero_truncate_at() {
    let file = ConfigFile {
        truncate_at: Some(0),
        ..ConfigFile::default()
    };

    assert!(matches!(
        merge_config(Some(file)),
        Err(ConfigError::InvalidValue { .. })
    ));
}

#[test]
fn config_file_log_path_overrides_default() {
    let custom = PathBuf::from("/custom/path/to/app.log");
    let file = ConfigFile {
        log_file_path: Some(custom.clone()),
        ..ConfigFile::default()
    };

    assert_eq!(merge_config(Some(file)).unwrap().log_file_path, custom);
}

// ===== apply_env_overrides =====

#[test]
#[serial]
fn env_page_size_overrides_file() {
    env::set_var(ENV_PAGE_SIZE, "6");
    env::remove_var(ENV_QUESTIONS);

    let result = apply_env_overrides(ResolvedConfig::default());

    env::remove_var(ENV_PAGE_SIZE);
    assert_eq!(result.unwrap().page_size.get(), 6);
}

#[test]
#[serial]
fn env_page_size_zero_is_invalid() {
    env::set_var(ENV_PAGE_SIZE, "0");

    let result = apply_env_overrides(ResolvedConfig::default());

    env::remove_var(ENV_PAGE_SIZE);
    assert!(matches!(result, Err(ConfigError::InvalidValue { .. })));
}

#[test]
#[serial]
fn env_page_size_non_numeric_is_invalid() {
    env::set_var(ENV_PAGE_SIZE, "ten");

    let result = apply_env_overrides(ResolvedConfig::default());

    env::remove_var(ENV_PAGE_SIZE);
    assert!(matches!(result, Err(ConfigError::InvalidValue { .. })));
}

#[test]
#[serial]
fn env_questions_sets_file() {
    env::remove_var(ENV_PAGE_SIZE);
    env::set_var(ENV_QUESTIONS, "/tmp/q.toml");

    let result = apply_env_overrides(ResolvedConfig::default());

    env::remove_var(ENV_QUESTIONS);
    assert_eq!(
        result.unwrap().questions_file,
        Some(PathBuf::from("/tmp/q.toml"))
    );
}

// ===== apply_cli_overrides =====

#[test]
fn cli_overrides_win() {
    let base = ResolvedConfig {
        page_size: PageSize::new(6).unwrap(),
        questions_file: Some(PathBuf::from("/from/env.json")),
        ..ResolvedConfig::default()
    };
    let cli = CliOverrides {
        questions_file: Some(PathBuf::from("/from/cli.json")),
        page_size: PageSize::new(3),
        full_view: true,
        no_sidebar: true,
    };

    let resolved = apply_cli_overrides(base, cli);

    assert_eq!(resolved.page_size.get(), 3);
    assert_eq!(resolved.questions_file, Some(PathBuf::from("/from/cli.json")));
    assert!(resolved.full_view);
    assert!(!resolved.sidebar_open);
}

#[test]
fn absent_cli_flags_leave_config_alone() {
    let base = ResolvedConfig {
        full_view: true,
        ..ResolvedConfig::default()
    };

    let resolved = apply_cli_overrides(base.clone(), CliOverrides::default());

    assert_eq!(resolved, base);
}
