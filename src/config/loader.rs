//! Configuration loading and validation.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::config::types::Config;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl Config {
    /// Load configuration from `path`.
    ///
    /// - A missing file yields the defaults.
    /// - An existing file is parsed as TOML and validated.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Validate splice safety of the configured strings.
    ///
    /// The entry point and flag scope end up inside command strings and
    /// flag keys, so they must not contain the delimiters of either.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let workflow = &self.workflow;
        if workflow.entry_point.is_empty()
            || workflow.entry_point.contains('"')
            || workflow.entry_point.contains('(')
        {
            return Err(ConfigError::ValidationError {
                message: format!("invalid macro entry point '{}'", workflow.entry_point),
            });
        }
        if workflow.flag_scope.is_empty() {
            return Err(ConfigError::ValidationError {
                message: "flag scope must not be empty".to_string(),
            });
        }
        Ok(())
    }
}
