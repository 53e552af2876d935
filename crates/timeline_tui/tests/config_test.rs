//! Tests for loading the host configuration from disk.

use std::io::Write;
use std::path::PathBuf;
use timeline_tui::TuiConfig;

#[test]
fn test_missing_file_uses_defaults() {
    let dir = tempfile::tempdir().expect("temp dir");
    let config = TuiConfig::load(dir.path().join("absent.toml")).expect("defaults");
    assert_eq!(config, TuiConfig::default());
}

#[test]
fn test_loads_all_fields() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(
        file,
        "initial_games = 2\nshow_coordinates = false\nlog_file = \"games.log\""
    )
    .expect("write config");

    let config = TuiConfig::load(file.path()).expect("valid config");
    assert_eq!(*config.initial_games(), 2);
    assert!(!*config.show_coordinates());
    assert_eq!(config.log_file(), &PathBuf::from("games.log"));
}

#[test]
fn test_malformed_file_reports_location() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(file, "initial_games = [").expect("write config");

    let err = TuiConfig::load(file.path()).expect_err("malformed");
    assert!(err.to_string().starts_with("Config error: Failed to parse config"));
    assert!(err.file.ends_with("config.rs"));
}
