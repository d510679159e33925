mod common;

use std::sync::Arc;

use common::{BOOK_FIXTURE, PASSAGE_FIXTURE, ScriptedGenerator, config};
use serde_json::Value;
use tokio_util::sync::CancellationToken;
use verbum_application::StudyService;
use verbum_application::prompt::DepthFragments;
use verbum_core::config::StudyConfig;
use verbum_core::error::{GENERATION_FAILED_MESSAGE, GenerationError, MISSING_CREDENTIAL_MESSAGE, StudyError};
use verbum_core::request::{Depth, StudyMode, StudyRequest, Translation};
use verbum_core::study::StudyResult;

fn service(generator: &Arc<ScriptedGenerator>) -> StudyService {
    StudyService::new(config(), generator.clone())
}

fn passage(depth: Depth) -> StudyRequest {
    StudyRequest::passage("Mateus 3:11", Translation::Nvi, depth).unwrap()
}

#[tokio::test(start_paused = true)]
async fn test_passage_study_takes_meta_from_request() {
    let generator = Arc::new(ScriptedGenerator::always(Ok(PASSAGE_FIXTURE.to_string())));

    let study = service(&generator)
        .generate_study(&passage(Depth::Detailed))
        .await
        .unwrap();

    assert_eq!(generator.attempts(), 1);
    let StudyResult::Passage(passage) = &study else {
        panic!("expected a passage study");
    };
    // The fixture's own meta says "Mt 3.11-12" / KJV.
    assert_eq!(passage.meta.reference, "Mateus 3:11");
    assert_eq!(passage.meta.translation, Translation::Nvi);
    assert!(!passage.sermon.text_focus.is_empty());

    let json = serde_json::to_value(&study).unwrap();
    assert_eq!(json["type"], "passage");
    assert!(json.get("bookIntro").is_none());
}

#[tokio::test(start_paused = true)]
async fn test_book_study_has_only_book_payload() {
    let generator = Arc::new(ScriptedGenerator::always(Ok(BOOK_FIXTURE.to_string())));
    let request = StudyRequest::book("Romanos", Translation::Arc).unwrap();

    let study = service(&generator).generate_study(&request).await.unwrap();

    assert_eq!(study.mode(), StudyMode::Book);
    assert_eq!(study.meta().reference, "Romanos");
    assert_eq!(study.meta().translation, Translation::Arc);

    let json = serde_json::to_value(&study).unwrap();
    assert_eq!(json["type"], "book");
    for absent in ["summary", "content", "sermon", "slides"] {
        assert!(json.get(absent).is_none(), "{absent}");
    }

    let call = &generator.calls()[0];
    assert!(call.user_instruction.contains("\"Romanos\""));
    assert_eq!(call.temperature, 0.7);
}

#[tokio::test(start_paused = true)]
async fn test_missing_credential_makes_no_attempt() {
    let generator = Arc::new(ScriptedGenerator::always(Ok(PASSAGE_FIXTURE.to_string())));
    let service = StudyService::new(StudyConfig::default(), generator.clone());

    let err = service
        .generate_study(&passage(Depth::Quick))
        .await
        .unwrap_err();

    assert_eq!(err, StudyError::MissingCredential);
    assert_eq!(err.to_string(), MISSING_CREDENTIAL_MESSAGE);
    assert_eq!(generator.attempts(), 0);
}

#[tokio::test(start_paused = true)]
async fn test_server_errors_exhaust_three_attempts() {
    let generator = Arc::new(ScriptedGenerator::always(Err(GenerationError::service(
        Some(500),
        "internal error",
    ))));

    let err = service(&generator)
        .generate_study(&passage(Depth::Detailed))
        .await
        .unwrap_err();

    assert_eq!(err, StudyError::GenerationFailed);
    assert_eq!(err.to_string(), GENERATION_FAILED_MESSAGE);
    assert!(!err.to_string().contains("500"));
    assert_eq!(generator.attempts(), 3);
}

#[tokio::test(start_paused = true)]
async fn test_client_error_fails_after_one_attempt() {
    let generator = Arc::new(ScriptedGenerator::always(Err(GenerationError::service(
        Some(400),
        "invalid argument",
    ))));

    let err = service(&generator)
        .generate_study(&passage(Depth::Detailed))
        .await
        .unwrap_err();

    assert_eq!(err, StudyError::GenerationFailed);
    assert_eq!(generator.attempts(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_transient_failures_then_success() {
    let generator = Arc::new(ScriptedGenerator::new(vec![
        Err(GenerationError::service(None, "connection reset")),
        Ok("not json at all".to_string()),
        Ok(format!("```json\n{PASSAGE_FIXTURE}\n```")),
    ]));

    let study = service(&generator)
        .generate_study(&passage(Depth::Sermon))
        .await
        .unwrap();

    assert_eq!(study.mode(), StudyMode::Passage);
    assert_eq!(generator.attempts(), 3);
}

#[tokio::test(start_paused = true)]
async fn test_schema_violation_is_never_returned() {
    let mut value: Value = serde_json::from_str(PASSAGE_FIXTURE).unwrap();
    value["content"]["theologians"][0]
        .as_object_mut()
        .unwrap()
        .remove("era");
    let generator = Arc::new(ScriptedGenerator::always(Ok(value.to_string())));

    let err = service(&generator)
        .generate_study(&passage(Depth::Academic))
        .await
        .unwrap_err();

    assert_eq!(err, StudyError::GenerationFailed);
    assert_eq!(generator.attempts(), 3);
}

#[tokio::test(start_paused = true)]
async fn test_depth_drives_prompt_and_temperature() {
    let generator = Arc::new(ScriptedGenerator::always(Ok(PASSAGE_FIXTURE.to_string())));
    let service = service(&generator);

    service.generate_study(&passage(Depth::Academic)).await.unwrap();
    service.generate_study(&passage(Depth::Quick)).await.unwrap();

    let calls = generator.calls();
    assert_eq!(calls[0].temperature, 0.3);
    assert_eq!(calls[1].temperature, 0.7);
    assert!(
        calls[0]
            .system_instruction
            .contains(DepthFragments::for_depth(Depth::Academic).tone)
    );
    assert!(
        calls[1]
            .user_instruction
            .contains(DepthFragments::for_depth(Depth::Quick).lexical)
    );
    assert!(calls[0].schema.is_required("sermon"));
}

#[tokio::test(start_paused = true)]
async fn test_cancelled_request() {
    let generator = Arc::new(ScriptedGenerator::always(Ok(PASSAGE_FIXTURE.to_string())));
    let token = CancellationToken::new();
    token.cancel();

    let err = service(&generator)
        .generate_study_with_cancel(&passage(Depth::Quick), &token)
        .await
        .unwrap_err();

    assert_eq!(err, StudyError::Cancelled);
    assert_eq!(generator.attempts(), 0);
}
