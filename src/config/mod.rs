//! Configuration module for tsundoku
//!
//! Manages application configuration: where the reading-list database
//! lives, the default result cap for catalog searches, and an optional
//! catalog endpoint override. Configuration is stored in the user's
//! config directory.

use std::fs;
use std::path::PathBuf;

use config::{Config, ConfigError, File, FileFormat};
use serde::{Deserialize, Serialize};

use crate::catalog::GOOGLE_BOOKS_ENDPOINT;

/// Result cap used when neither the CLI nor the config names one
pub const DEFAULT_MAX_RESULTS: u32 = 20;

fn default_max_results() -> u32 {
    DEFAULT_MAX_RESULTS
}

/// Application configuration structure
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct TsundokuConfig {
    /// Directory holding the reading-list database; defaults to the
    /// platform data directory
    #[serde(default)]
    pub data_dir: Option<PathBuf>,

    /// Result-count cap passed to catalog lookups
    #[serde(default = "default_max_results")]
    pub max_results: u32,

    /// Override for the catalog endpoint, mainly for testing against a
    /// local server
    #[serde(default)]
    pub catalog_endpoint: Option<String>,

    /// Suppress informational output by default
    #[serde(default)]
    pub quiet: bool,
}

impl Default for TsundokuConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            max_results: DEFAULT_MAX_RESULTS,
            catalog_endpoint: None,
            quiet: false,
        }
    }
}

impl TsundokuConfig {
    /// Get the path to the config file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the system config directory cannot be
    /// determined.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| ConfigError::Message("Could not determine config directory".to_string()))?;

        Ok(config_dir.join("tsundoku").join("config.toml"))
    }

    /// Load configuration from file, creating a default one if it doesn't
    /// exist
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config file cannot be read, parsed,
    /// or created.
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            let default_config = Self::default();
            default_config.save()?;
            return Ok(default_config);
        }

        let settings = Config::builder()
            .add_source(File::from(config_path).format(FileFormat::Toml))
            .build()?;

        settings.try_deserialize()
    }

    /// Save configuration to file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config directory cannot be created,
    /// the configuration cannot be serialized to TOML, or the file cannot
    /// be written.
    pub fn save(&self) -> Result<(), ConfigError> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| ConfigError::Message(format!("Failed to create config directory: {e}")))?;
        }

        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Message(format!("Failed to serialize config: {e}")))?;

        fs::write(&config_path, toml_string)
            .map_err(|e| ConfigError::Message(format!("Failed to write config file: {e}")))?;

        Ok(())
    }

    /// Resolve the directory of the durable slot
    ///
    /// `data_dir` from the config wins; otherwise the platform data
    /// directory is used.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if no data directory is configured and the
    /// system data directory cannot be determined.
    pub fn slot_path(&self) -> Result<PathBuf, ConfigError> {
        if let Some(dir) = &self.data_dir {
            return Ok(dir.join("books"));
        }

        let data_dir = dirs::data_dir()
            .ok_or_else(|| ConfigError::Message("Could not determine data directory".to_string()))?;

        Ok(data_dir.join("tsundoku").join("books"))
    }

    /// The catalog endpoint to use, honoring the override
    #[must_use]
    pub fn catalog_endpoint(&self) -> &str {
        self.catalog_endpoint
            .as_deref()
            .unwrap_or(GOOGLE_BOOKS_ENDPOINT)
    }
}
