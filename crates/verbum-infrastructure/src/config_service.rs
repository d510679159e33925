//! Resolves the effective [`StudyConfig`].
//!
//! Sources, in order of precedence for the credential:
//!
//! 1. `API_KEY` environment variable
//! 2. `GEMINI_API_KEY` environment variable
//! 3. `gemini.api_key` in secret.json
//!
//! Settings come from config.toml; a `gemini.model_name` in secret.json
//! overrides the configured model.

use verbum_core::config::{ApiKey, StudyConfig};

use crate::error::ConfigError;
use crate::paths::VerbumPaths;
use crate::storage::{ConfigStorage, SecretStorage};

/// Environment variables consulted for the credential, highest priority first.
pub const API_KEY_ENV_VARS: [&str; 2] = ["API_KEY", "GEMINI_API_KEY"];

#[derive(Debug, Clone)]
pub struct ConfigService {
    paths: VerbumPaths,
}

impl ConfigService {
    pub fn new(paths: VerbumPaths) -> Self {
        Self { paths }
    }

    /// Service over the platform config directory.
    pub fn from_default_paths() -> Result<Self, ConfigError> {
        Ok(Self::new(VerbumPaths::new(None)?))
    }

    pub fn paths(&self) -> &VerbumPaths {
        &self.paths
    }

    /// Resolves against the process environment.
    pub fn resolve(&self) -> Result<StudyConfig, ConfigError> {
        self.resolve_with_env(|name| std::env::var(name).ok())
    }

    /// Resolves with `lookup` standing in for the process environment.
    pub fn resolve_with_env<F>(&self, lookup: F) -> Result<StudyConfig, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let file = ConfigStorage::new(self.paths.config_file()).load()?;
        let env_key = API_KEY_ENV_VARS
            .into_iter()
            .find_map(|name| lookup(name).and_then(ApiKey::new));

        // An unreadable secret.json only matters when it is the credential source.
        let secret = match SecretStorage::new(self.paths.secret_file()).load() {
            Ok(secret) => secret.and_then(|secret| secret.gemini),
            Err(err) if env_key.is_some() => {
                tracing::warn!("Ignoring secret.json, credential taken from environment: {err}");
                None
            }
            Err(err) => return Err(err),
        };

        let mut gemini = file.gemini;
        if let Some(model) = secret
            .as_ref()
            .and_then(|secret| secret.model_name.as_deref())
            .map(str::trim)
            .filter(|model| !model.is_empty())
        {
            gemini.model_name = model.to_string();
        }

        let api_key = env_key.or_else(|| secret.and_then(|secret| ApiKey::new(secret.api_key)));

        match &api_key {
            Some(_) => tracing::debug!(model = %gemini.model_name, "Credential resolved"),
            None => tracing::debug!("No credential found in environment or secret.json"),
        }

        Ok(StudyConfig {
            api_key,
            gemini,
            retry: file.retry,
        })
    }
}
