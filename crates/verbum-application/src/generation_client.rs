//! Generation Client: one [`StudyPrompt`] in, one validated
//! [`StudyResult`] out, with retries.

use std::sync::Arc;

use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::Value;
use tokio_util::sync::CancellationToken;
use verbum_core::config::{ApiKey, StudyConfig};
use verbum_core::error::GenerationError;
use verbum_core::generator::{ContentGenerator, GenerationCall};
use verbum_core::request::{Depth, StudyMode, StudyRequest};
use verbum_core::schema::schema_for;
use verbum_core::study::{BookPayload, PassagePayload, StudyMeta, StudyResult};

use crate::prompt::StudyPrompt;
use crate::retry::{RetryError, RetryPolicy};

/// Sampling temperature for academic passage studies.
pub const ACADEMIC_TEMPERATURE: f32 = 0.3;
/// Sampling temperature for every other study.
pub const DEFAULT_TEMPERATURE: f32 = 0.7;

pub struct GenerationClient {
    generator: Arc<dyn ContentGenerator>,
    api_key: ApiKey,
    policy: RetryPolicy,
}

impl GenerationClient {
    /// Binds a generator to the configured credential.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::Configuration`] when no credential is
    /// configured. No client exists without one, so no request can be sent.
    pub fn new(
        config: &StudyConfig,
        generator: Arc<dyn ContentGenerator>,
    ) -> Result<Self, GenerationError> {
        let api_key = config
            .api_key
            .clone()
            .ok_or_else(|| GenerationError::configuration("API key is not configured"))?;

        Ok(Self {
            generator,
            api_key,
            policy: RetryPolicy::from_settings(&config.retry),
        })
    }

    pub fn policy(&self) -> &RetryPolicy {
        &self.policy
    }

    /// Runs the prompt through the generator under the retry policy.
    ///
    /// Every attempt is normalized and validated; malformed output counts as
    /// a retryable failure.
    pub async fn generate(
        &self,
        request: &StudyRequest,
        prompt: &StudyPrompt,
        cancel: &CancellationToken,
    ) -> Result<StudyResult, RetryError> {
        let call = GenerationCall {
            system_instruction: prompt.system_instruction.clone(),
            user_instruction: prompt.user_instruction.clone(),
            schema: prompt.schema,
            temperature: temperature_for(request),
        };

        self.policy
            .run(cancel, |attempt| {
                let call = &call;
                async move {
                    tracing::debug!(attempt, "Requesting study from generator");
                    let raw = self.generator.generate(&self.api_key, call).await?;
                    normalize(&raw, request, Utc::now())
                }
            })
            .await
    }
}

/// Lower temperature only where precision matters most.
pub fn temperature_for(request: &StudyRequest) -> f32 {
    match (request.mode(), request.depth()) {
        (StudyMode::Passage, Depth::Academic) => ACADEMIC_TEMPERATURE,
        _ => DEFAULT_TEMPERATURE,
    }
}

/// Turns raw model text into a study for `request`.
///
/// The model's own `meta` is discarded: the result always carries the
/// request's subject and translation, stamped `generated_at`.
pub fn normalize(
    raw: &str,
    request: &StudyRequest,
    generated_at: DateTime<Utc>,
) -> Result<StudyResult, GenerationError> {
    let text = strip_code_fence(raw);
    if text.is_empty() {
        return Err(GenerationError::EmptyResponse);
    }

    let mut value: Value = serde_json::from_str(text)?;
    prune_nulls(&mut value);

    let meta = StudyMeta::for_request(request, generated_at);
    let Value::Object(fields) = &mut value else {
        return Err(GenerationError::malformed("top-level JSON is not an object"));
    };
    fields.insert(
        "meta".to_string(),
        serde_json::json!({
            "reference": meta.reference,
            "translation": meta.translation,
            "generated_at": generated_at.to_rfc3339_opts(SecondsFormat::Millis, true),
        }),
    );

    schema_for(request.mode())
        .validate(&value)
        .map_err(|violation| GenerationError::malformed(format!("schema violation {violation}")))?;

    let study = match request.mode() {
        StudyMode::Passage => {
            StudyResult::Passage(serde_json::from_value::<PassagePayload>(value)?.into_study(meta))
        }
        StudyMode::Book => {
            StudyResult::Book(serde_json::from_value::<BookPayload>(value)?.into_study(meta))
        }
    };
    Ok(study)
}

/// Strips a surrounding Markdown code fence (with or without a language tag).
fn strip_code_fence(raw: &str) -> &str {
    let trimmed = raw.trim();
    if !(trimmed.starts_with("```") && trimmed.ends_with("```") && trimmed.len() >= 6) {
        return trimmed;
    }

    let inner = &trimmed[3..trimmed.len() - 3];
    // Drop the language tag line, if any.
    let body = match inner.find('\n') {
        Some(newline) => &inner[newline + 1..],
        None => {
            let inline = inner.trim_start();
            inline
                .get(..4)
                .filter(|tag| tag.eq_ignore_ascii_case("json"))
                .map_or(inline, |_| &inline[4..])
        }
    };
    body.trim()
}

/// Removes `null` object members recursively; absent and null are the same.
fn prune_nulls(value: &mut Value) {
    match value {
        Value::Object(fields) => {
            fields.retain(|_, field| !field.is_null());
            fields.values_mut().for_each(prune_nulls);
        }
        Value::Array(items) => items.iter_mut().for_each(prune_nulls),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use verbum_core::request::Translation;

    const PASSAGE_FIXTURE: &str = include_str!("../../verbum-core/tests/fixtures/passage.json");
    const BOOK_FIXTURE: &str = include_str!("../../verbum-core/tests/fixtures/book.json");

    fn passage_request(depth: Depth) -> StudyRequest {
        StudyRequest::passage("Mateus 3:11", Translation::Nvi, depth).unwrap()
    }

    #[test]
    fn test_temperature_rule() {
        assert_eq!(temperature_for(&passage_request(Depth::Academic)), 0.3);
        assert_eq!(temperature_for(&passage_request(Depth::Quick)), 0.7);
        let book =
            StudyRequest::new("Jó", Translation::Nvi, Depth::Academic, StudyMode::Book).unwrap();
        assert_eq!(temperature_for(&book), 0.7);
    }

    #[test]
    fn test_meta_comes_from_request() {
        let now = Utc::now();
        let result = normalize(PASSAGE_FIXTURE, &passage_request(Depth::Detailed), now).unwrap();
        let meta = result.meta();
        assert_eq!(meta.reference, "Mateus 3:11");
        assert_eq!(meta.translation, Translation::Nvi);
        assert_eq!(meta.generated_at, now);
        assert_eq!(result.mode(), StudyMode::Passage);
    }

    #[test]
    fn test_book_variant() {
        let request = StudyRequest::book("Romanos", Translation::Arc).unwrap();
        let result = normalize(BOOK_FIXTURE, &request, Utc::now()).unwrap();
        let book = result.as_book().unwrap();
        assert_eq!(book.meta.reference, "Romanos");
        assert_eq!(book.book_intro.key_passages.len(), 1);
    }

    #[test]
    fn test_mode_mismatch_is_malformed() {
        let request = StudyRequest::book("Romanos", Translation::Arc).unwrap();
        let err = normalize(PASSAGE_FIXTURE, &request, Utc::now()).unwrap_err();
        assert!(matches!(err, GenerationError::MalformedOutput(ref msg) if msg.contains("bookIntro")));
    }

    #[test]
    fn test_fenced_output_is_accepted() {
        let fenced = format!("```json\n{PASSAGE_FIXTURE}\n```");
        assert!(normalize(&fenced, &passage_request(Depth::Quick), Utc::now()).is_ok());
    }

    #[test]
    fn test_empty_and_garbage_output() {
        let request = passage_request(Depth::Quick);
        assert_eq!(
            normalize("   ", &request, Utc::now()).unwrap_err(),
            GenerationError::EmptyResponse
        );
        assert_eq!(
            normalize("```\n```", &request, Utc::now()).unwrap_err(),
            GenerationError::EmptyResponse
        );
        assert!(matches!(
            normalize("{ not json", &request, Utc::now()).unwrap_err(),
            GenerationError::MalformedOutput(_)
        ));
        assert!(matches!(
            normalize("[]", &request, Utc::now()).unwrap_err(),
            GenerationError::MalformedOutput(_)
        ));
    }

    #[test]
    fn test_missing_required_field_is_rejected() {
        let mut value: Value = serde_json::from_str(PASSAGE_FIXTURE).unwrap();
        value["sermon"].as_object_mut().unwrap().remove("text_focus");
        let err = normalize(
            &value.to_string(),
            &passage_request(Depth::Sermon),
            Utc::now(),
        )
        .unwrap_err();
        assert!(
            matches!(err, GenerationError::MalformedOutput(ref msg) if msg.contains("sermon.text_focus"))
        );
    }

    #[test]
    fn test_null_optional_fields_are_dropped() {
        let mut value: Value = serde_json::from_str(PASSAGE_FIXTURE).unwrap();
        value["content"]["bibliography"][0]["publisher"] = Value::Null;
        value["content"]["intertextuality"] = Value::Null;
        let result = normalize(
            &value.to_string(),
            &passage_request(Depth::Detailed),
            Utc::now(),
        )
        .unwrap();
        let study = result.as_passage().unwrap();
        assert_eq!(study.content.bibliography[0].publisher, None);
        assert_eq!(study.content.intertextuality, "");
    }

    #[test]
    fn test_strip_code_fence() {
        assert_eq!(strip_code_fence("```json\n{\"a\":1}\n```"), "{\"a\":1}");
        assert_eq!(strip_code_fence("```\n{}\n```"), "{}");
        assert_eq!(strip_code_fence("  {\"a\":1}  "), "{\"a\":1}");
        assert_eq!(strip_code_fence("```"), "```");
        assert_eq!(strip_code_fence("```json {\"a\":1}```"), "{\"a\":1}");
        assert_eq!(strip_code_fence("```{\"a\":1}```"), "{\"a\":1}");
    }

    #[test]
    fn test_single_line_fence_with_tag_is_accepted() {
        let compact: Value = serde_json::from_str(PASSAGE_FIXTURE).unwrap();
        let fenced = format!("```json {compact}```");
        assert!(normalize(&fenced, &passage_request(Depth::Quick), Utc::now()).is_ok());
    }
}
