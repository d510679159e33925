//! Secret configuration file storage.
//!
//! Loads `secret.json` from the config directory.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Gemini credentials in secret.json.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeminiSecret {
    #[serde(default)]
    pub api_key: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_name: Option<String>,
}

/// Contents of secret.json.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecretConfig {
    #[serde(default)]
    pub gemini: Option<GeminiSecret>,
}

/// Read-only storage for secret.json.
///
/// Does NOT:
/// - Write or modify secret files
/// - Validate API keys against the service
pub struct SecretStorage {
    path: PathBuf,
}

impl SecretStorage {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Loads the secret configuration.
    ///
    /// # Returns
    ///
    /// - `Ok(None)`: File doesn't exist or is empty
    /// - `Ok(Some(SecretConfig))`: Successfully loaded and parsed
    /// - `Err(ConfigError)`: Unreadable file or invalid JSON
    pub fn load(&self) -> Result<Option<SecretConfig>, ConfigError> {
        if !self.path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&self.path).map_err(|e| ConfigError::io(&self.path, e))?;
        if content.trim().is_empty() {
            return Ok(None);
        }

        let config = serde_json::from_str(&content).map_err(|source| ConfigError::InvalidJson {
            path: self.path.clone(),
            source,
        })?;
        Ok(Some(config))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_nonexistent_file() {
        let temp_dir = TempDir::new().unwrap();
        let storage = SecretStorage::new(temp_dir.path().join("secret.json"));
        assert_eq!(storage.load().unwrap(), None);
    }

    #[test]
    fn test_load_valid_json() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("secret.json");
        fs::write(
            &file_path,
            r#"{ "gemini": { "api_key": "AIza-test", "model_name": "gemini-2.5-pro" } }"#,
        )
        .unwrap();

        let config = SecretStorage::new(file_path).load().unwrap().unwrap();
        let gemini = config.gemini.unwrap();
        assert_eq!(gemini.api_key, "AIza-test");
        assert_eq!(gemini.model_name.as_deref(), Some("gemini-2.5-pro"));
    }

    #[test]
    fn test_load_without_gemini_section() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("secret.json");
        fs::write(&file_path, r#"{ "claude": { "api_key": "x" } }"#).unwrap();

        let config = SecretStorage::new(file_path).load().unwrap().unwrap();
        assert!(config.gemini.is_none());
    }

    #[test]
    fn test_load_invalid_json() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("secret.json");
        fs::write(&file_path, "{ invalid json }").unwrap();

        let result = SecretStorage::new(file_path).load();
        assert!(matches!(result, Err(ConfigError::InvalidJson { .. })));
    }
}
