//! Path management for Verbum configuration files.

use std::path::{Path, PathBuf};

use crate::error::ConfigError;

const APP_DIR: &str = "verbum";
const CONFIG_FILE: &str = "config.toml";
const SECRET_FILE: &str = "secret.json";

/// Resolves where Verbum keeps its files.
///
/// # Directory Structure
///
/// ```text
/// ~/.config/verbum/
/// ├── config.toml     # Model, endpoint and retry settings
/// └── secret.json     # API key
/// ```
///
/// A base directory can be injected for tests; otherwise the platform config
/// directory is used (XDG on Linux).
#[derive(Debug, Clone)]
pub struct VerbumPaths {
    config_dir: PathBuf,
}

impl VerbumPaths {
    /// Uses `base` as the config directory when given, the platform default
    /// otherwise.
    pub fn new(base: Option<&Path>) -> Result<Self, ConfigError> {
        let config_dir = match base {
            Some(base) => base.to_path_buf(),
            None => dirs::config_dir()
                .ok_or(ConfigError::ConfigDirNotFound)?
                .join(APP_DIR),
        };
        Ok(Self { config_dir })
    }

    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    pub fn config_file(&self) -> PathBuf {
        self.config_dir.join(CONFIG_FILE)
    }

    /// Path to secret.json.
    ///
    /// # Security Note
    ///
    /// The file holds a plaintext key; keep its permissions at 600.
    pub fn secret_file(&self) -> PathBuf {
        self.config_dir.join(SECRET_FILE)
    }
}
