//! Use cases of Verbum: prompt construction, generation with retries and
//! the [`StudyService`] entry point.

pub mod generation_client;
pub mod prompt;
pub mod retry;
pub mod study_service;

pub use generation_client::GenerationClient;
pub use prompt::{PromptBuilder, StudyPrompt};
pub use retry::{RetryError, RetryPolicy, RetryState};
pub use study_service::StudyService;
