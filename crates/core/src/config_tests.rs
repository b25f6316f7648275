// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use serial_test::serial;
use std::io::Write;

use super::*;

const ENV_VARS: [&str; 3] = [
    "DETECTOR_LOG_PATH",
    "DETECTOR_SERVER_URL",
    "DETECTOR_REPO_URL",
];

fn clear_env() {
    for var in ENV_VARS {
        std::env::remove_var(var);
    }
}

fn write_toml(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "{contents}").unwrap();
    file
}

#[test]
#[serial]
fn loads_complete_config_from_file() {
    clear_env();
    let file = write_toml(
        r#"
        log_path = "/var/log/app.log"
        server_url = "https://ingest.example.com/v1/incidents"
        repo_url = "org/repo"
        "#,
    );
    let config = Config::load(file.path()).unwrap();
    assert_eq!(config.log_path, PathBuf::from("/var/log/app.log"));
    assert_eq!(config.server_url, "https://ingest.example.com/v1/incidents");
    assert_eq!(config.repo_url, "org/repo");
}

#[test]
#[serial]
fn missing_field_is_fatal_with_field_name_in_message() {
    clear_env();
    let file = write_toml(
        r#"
        server_url = "https://ingest.example.com/v1/incidents"
        repo_url = "org/repo"
        "#,
    );
    let err = Config::load(file.path()).unwrap_err();
    assert_eq!(err.to_string(), "log_path is required");
}

#[test]
#[serial]
fn empty_field_is_treated_as_missing() {
    clear_env();
    let file = write_toml(
        r#"
        log_path = "   "
        server_url = "https://ingest.example.com/v1/incidents"
        repo_url = "org/repo"
        "#,
    );
    let err = Config::load(file.path()).unwrap_err();
    assert_eq!(err.to_string(), "log_path is required");
}

#[test]
#[serial]
fn missing_config_file_falls_back_to_env_only() {
    clear_env();
    std::env::set_var("DETECTOR_LOG_PATH", "/tmp/app.log");
    std::env::set_var("DETECTOR_SERVER_URL", "https://ingest.example.com/v1/incidents");
    std::env::set_var("DETECTOR_REPO_URL", "org/repo");
    let config = Config::load(Path::new("/nonexistent/detector.toml")).unwrap();
    assert_eq!(config.log_path, PathBuf::from("/tmp/app.log"));
    clear_env();
}

#[test]
#[serial]
fn env_var_overrides_file_value() {
    clear_env();
    let file = write_toml(
        r#"
        log_path = "/var/log/app.log"
        server_url = "https://ingest.example.com/v1/incidents"
        repo_url = "org/repo"
        "#,
    );
    std::env::set_var("DETECTOR_REPO_URL", "org/other-repo");
    let config = Config::load(file.path()).unwrap();
    assert_eq!(config.repo_url, "org/other-repo");
    clear_env();
}

#[test]
#[serial]
fn malformed_toml_is_a_parse_error() {
    clear_env();
    let file = write_toml("this is not valid toml {{{");
    assert!(matches!(
        Config::load(file.path()),
        Err(ConfigError::Parse { .. })
    ));
}
