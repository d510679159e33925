//! The study generation entry point.

use std::sync::Arc;

use tokio_util::sync::CancellationToken;
use verbum_core::config::StudyConfig;
use verbum_core::error::{Result, StudyError};
use verbum_core::generator::ContentGenerator;
use verbum_core::request::StudyRequest;
use verbum_core::study::StudyResult;

use crate::generation_client::GenerationClient;
use crate::prompt::PromptBuilder;
use crate::retry::RetryError;

/// Generates studies for requests.
///
/// Every failure is reported as a [`StudyError`] whose message is safe to
/// show to the user; transport detail only reaches the logs.
pub struct StudyService {
    config: StudyConfig,
    generator: Arc<dyn ContentGenerator>,
    prompts: PromptBuilder,
}

impl StudyService {
    pub fn new(config: StudyConfig, generator: Arc<dyn ContentGenerator>) -> Self {
        Self {
            config,
            generator,
            prompts: PromptBuilder::new(),
        }
    }

    pub fn config(&self) -> &StudyConfig {
        &self.config
    }

    /// Generates a study, branching on the request's mode.
    pub async fn generate_study(&self, request: &StudyRequest) -> Result<StudyResult> {
        self.generate_study_with_cancel(request, &CancellationToken::new())
            .await
    }

    /// Like [`generate_study`](Self::generate_study), abandoning the work
    /// once `cancel` fires.
    pub async fn generate_study_with_cancel(
        &self,
        request: &StudyRequest,
        cancel: &CancellationToken,
    ) -> Result<StudyResult> {
        tracing::info!(
            mode = %request.mode(),
            subject = request.subject(),
            translation = %request.translation(),
            depth = %request.depth(),
            "Generating study"
        );

        let client = GenerationClient::new(&self.config, Arc::clone(&self.generator))
            .map_err(|err| {
                tracing::error!("Cannot generate study: {err}");
                StudyError::MissingCredential
            })?;

        let prompt = self.prompts.build(request).map_err(|err| {
            tracing::error!("{err}");
            StudyError::GenerationFailed
        })?;

        match client.generate(request, &prompt, cancel).await {
            Ok(study) => {
                tracing::info!(mode = %study.mode(), reference = %study.meta().reference, "Study generated");
                Ok(study)
            }
            Err(RetryError::Cancelled { attempts }) => {
                tracing::info!(attempts, "Study generation cancelled");
                Err(StudyError::Cancelled)
            }
            Err(err) => {
                tracing::error!(attempts = err.attempts(), "Study generation failed: {err}");
                Err(StudyError::GenerationFailed)
            }
        }
    }
}
