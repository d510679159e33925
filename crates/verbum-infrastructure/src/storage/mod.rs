//! Readers for the two configuration files.

pub mod config_storage;
pub mod secret_storage;

pub use config_storage::{ConfigFile, ConfigStorage};
pub use secret_storage::{GeminiSecret, SecretConfig, SecretStorage};
