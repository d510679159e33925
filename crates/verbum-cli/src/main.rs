use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use verbum_core::request::{Depth, StudyMode, Translation};

mod commands;

#[derive(Parser)]
#[command(name = "verbum")]
#[command(about = "Verbum - exegetical studies and book introductions generated with Gemini", long_about = None)]
struct Cli {
    /// Directory holding config.toml and secret.json (default: ~/.config/verbum)
    #[arg(long, global = true, value_name = "DIR")]
    config_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate an exegetical study of a passage
    Passage {
        /// Scripture reference, e.g. "Mateus 3:11"
        reference: String,

        /// Bible translation (NVI, ARC, ACF, KJA, NVT, NAA, KJV, NIV, ESV)
        #[arg(short, long, default_value = "NVI")]
        translation: Translation,

        /// Study depth (rapido, detalhado, academico, sermao)
        #[arg(short, long, default_value = "detalhado")]
        depth: Depth,

        /// Write the study JSON to a file instead of stdout
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },
    /// Generate an introduction to a whole book
    Book {
        /// Book name, e.g. "Romanos"
        book: String,

        /// Bible translation used for quotations
        #[arg(short, long, default_value = "NVI")]
        translation: Translation,

        /// Write the study JSON to a file instead of stdout
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },
    /// Print the response schema sent to the model
    Schema {
        /// passage or book
        mode: StudyMode,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing()?;

    match cli.command {
        Commands::Passage {
            reference,
            translation,
            depth,
            output,
        } => {
            commands::study::passage(cli.config_dir, reference, translation, depth, output).await?
        }
        Commands::Book {
            book,
            translation,
            output,
        } => commands::study::book(cli.config_dir, book, translation, output).await?,
        Commands::Schema { mode } => commands::schema::print(mode)?,
    }

    Ok(())
}

/// Logs go to stderr so stdout carries only JSON.
fn init_tracing() -> Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
