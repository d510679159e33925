use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use tokio_util::sync::CancellationToken;
use verbum_application::StudyService;
use verbum_core::request::{Depth, StudyRequest, Translation};
use verbum_core::study::StudyResult;
use verbum_infrastructure::{ConfigService, VerbumPaths};
use verbum_interaction::GeminiApiAgent;

pub async fn passage(
    config_dir: Option<PathBuf>,
    reference: String,
    translation: Translation,
    depth: Depth,
    output: Option<PathBuf>,
) -> Result<()> {
    let request = StudyRequest::passage(reference, translation, depth)?;
    run(config_dir, request, output).await
}

pub async fn book(
    config_dir: Option<PathBuf>,
    book: String,
    translation: Translation,
    output: Option<PathBuf>,
) -> Result<()> {
    let request = StudyRequest::book(book, translation)?;
    run(config_dir, request, output).await
}

async fn run(
    config_dir: Option<PathBuf>,
    request: StudyRequest,
    output: Option<PathBuf>,
) -> Result<()> {
    let paths = VerbumPaths::new(config_dir.as_deref())?;
    let config = ConfigService::new(paths).resolve()?;
    let agent = GeminiApiAgent::new(&config.gemini)?;
    let service = StudyService::new(config, Arc::new(agent));

    let cancel = CancellationToken::new();
    let on_ctrl_c = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::warn!("Interrupted, cancelling generation");
            on_ctrl_c.cancel();
        }
    });

    let study = service
        .generate_study_with_cancel(&request, &cancel)
        .await?;
    write_study(&study, output)
}

fn write_study(study: &StudyResult, output: Option<PathBuf>) -> Result<()> {
    let json = serde_json::to_string_pretty(study)?;
    match output {
        Some(path) => {
            std::fs::write(&path, json)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            tracing::info!(path = %path.display(), "Study written");
        }
        None => println!("{json}"),
    }
    Ok(())
}
