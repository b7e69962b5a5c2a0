//! Tests for loading the settings file.

use std::io::Write;
use strictly_minimax::GameConfig;
use strictly_minimax_core::FirstPlayer;
use tempfile::NamedTempFile;

#[test]
fn test_load_full_config() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(
        file,
        "first_player = \"computer\"\njson = true\nlog_filter = \"debug\""
    )
    .unwrap();

    let config = GameConfig::from_file(file.path()).unwrap();
    assert_eq!(*config.first_player(), FirstPlayer::Computer);
    assert!(*config.json());
    assert_eq!(config.log_filter(), "debug");
}

#[test]
fn test_partial_config_uses_defaults() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "json = true").unwrap();

    let config = GameConfig::from_file(file.path()).unwrap();
    assert_eq!(*config.first_player(), FirstPlayer::Human);
    assert_eq!(config.log_filter(), "warn");
}

#[test]
fn test_missing_file_gives_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = GameConfig::load_or_default(dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, GameConfig::default());
}

#[test]
fn test_malformed_file_reports_parse_error() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "first_player = \"nobody\"").unwrap();

    let err = GameConfig::from_file(file.path()).unwrap_err();
    assert!(err.message.contains("Failed to parse config"), "{}", err);
    assert!(err.to_string().starts_with("Config error:"));
}
