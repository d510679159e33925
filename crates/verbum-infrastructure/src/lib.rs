//! File-system and environment plumbing for Verbum.
//!
//! Resolves a [`verbum_core::StudyConfig`] from `~/.config/verbum/` and the
//! process environment.

pub mod config_service;
pub mod error;
pub mod paths;
pub mod storage;

pub use config_service::ConfigService;
pub use error::ConfigError;
pub use paths::VerbumPaths;
