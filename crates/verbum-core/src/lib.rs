//! Domain model for Verbum: requests, study results, output contracts and
//! the error taxonomy shared by every other crate.

pub mod config;
pub mod error;
pub mod generator;
pub mod request;
pub mod schema;
pub mod study;

pub use config::{ApiKey, GeminiSettings, RetrySettings, StudyConfig};
pub use error::{GenerationError, StudyError};
pub use generator::{ContentGenerator, GenerationCall};
pub use request::{Depth, StudyMode, StudyRequest, Translation};
pub use study::{StudyMeta, StudyResult};
