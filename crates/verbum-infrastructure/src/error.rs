use std::path::PathBuf;

use thiserror::Error;

/// Failure to read the configuration files.
///
/// A missing file is never an error; defaults apply.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// No home/config directory could be determined.
    #[error("Cannot find the configuration directory")]
    ConfigDirNotFound,

    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid TOML in {path}: {source}")]
    InvalidToml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid JSON in {path}: {source}")]
    InvalidJson {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl ConfigError {
    pub(crate) fn io(path: &std::path::Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}
