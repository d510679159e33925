//! Loads `config.toml`.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use verbum_core::config::{GeminiSettings, RetrySettings};

use crate::error::ConfigError;

/// Contents of config.toml. Every table and key is optional.
///
/// ```toml
/// [gemini]
/// model_name = "gemini-2.5-flash"
/// request_timeout_secs = 120
///
/// [retry]
/// max_attempts = 3
/// base_delay_ms = 1000
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigFile {
    pub gemini: GeminiSettings,
    pub retry: RetrySettings,
}

pub struct ConfigStorage {
    path: PathBuf,
}

impl ConfigStorage {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Loads the config file, falling back to defaults when it doesn't exist
    /// or is empty.
    pub fn load(&self) -> Result<ConfigFile, ConfigError> {
        if !self.path.exists() {
            return Ok(ConfigFile::default());
        }

        let content = fs::read_to_string(&self.path).map_err(|e| ConfigError::io(&self.path, e))?;
        if content.trim().is_empty() {
            return Ok(ConfigFile::default());
        }

        toml::from_str(&content).map_err(|source| ConfigError::InvalidToml {
            path: self.path.clone(),
            source,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
