// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Detector configuration: a `detector.toml` file, with environment
//! variable overrides for each field.
//!
//! Validation is total — any missing or empty field is a fatal startup
//! error, matching the "no partial configuration" contract the daemon
//! relies on before it opens the log file or starts the delivery client.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("{field} is required")]
    MissingField { field: &'static str },
}

/// Raw, possibly-incomplete config as read from `detector.toml`.
#[derive(Debug, Default, Deserialize)]
struct RawConfig {
    log_path: Option<String>,
    server_url: Option<String>,
    repo_url: Option<String>,
}

/// Validated detector configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub log_path: PathBuf,
    pub server_url: String,
    pub repo_url: String,
}

impl Config {
    /// Load configuration from `path`, applying `DETECTOR_LOG_PATH`,
    /// `DETECTOR_SERVER_URL`, and `DETECTOR_REPO_URL` environment overrides
    /// (which take precedence over the file), then validate totality.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = read_raw(path)?;
        Self::from_raw(raw)
    }

    /// Build a `Config` purely from environment variables, for deployments
    /// that skip the config file entirely.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_raw(RawConfig::default())
    }

    fn from_raw(raw: RawConfig) -> Result<Self, ConfigError> {
        let log_path = overridden("DETECTOR_LOG_PATH", raw.log_path)
            .ok_or(ConfigError::MissingField { field: "log_path" })?;
        let server_url = overridden("DETECTOR_SERVER_URL", raw.server_url)
            .ok_or(ConfigError::MissingField { field: "server_url" })?;
        let repo_url = overridden("DETECTOR_REPO_URL", raw.repo_url)
            .ok_or(ConfigError::MissingField { field: "repo_url" })?;

        if log_path.trim().is_empty() {
            return Err(ConfigError::MissingField { field: "log_path" });
        }
        if server_url.trim().is_empty() {
            return Err(ConfigError::MissingField { field: "server_url" });
        }
        if repo_url.trim().is_empty() {
            return Err(ConfigError::MissingField { field: "repo_url" });
        }

        Ok(Self {
            log_path: PathBuf::from(log_path),
            server_url,
            repo_url,
        })
    }
}

fn read_raw(path: &Path) -> Result<RawConfig, ConfigError> {
    match std::fs::read_to_string(path) {
        Ok(contents) => toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        }),
        Err(source) if source.kind() == std::io::ErrorKind::NotFound => Ok(RawConfig::default()),
        Err(source) => Err(ConfigError::Read {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Environment variable takes precedence over the file value.
fn overridden(env_var: &str, file_value: Option<String>) -> Option<String> {
    std::env::var(env_var).ok().or(file_value)
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
