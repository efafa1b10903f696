//! askmemo command line: answer a question from the notes directory.
//!
//! Usage:
//!     askmemo [--notes-dir DIR] [--index-file NAME] [--json] QUESTION...
//!
//! Logs go to stderr; stdout carries only the answer.

use anyhow::{bail, Context, Result};
use askmemo::config::AskConfig;
use askmemo::loader::FsNoteSource;
use askmemo::render::{render_answer, EMPTY_QUESTION_MESSAGE, LOADING_MESSAGE};
use askmemo::{AskError, NoteStore};
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "askmemo", version, about = "Answer a question from your past notes")]
struct Args {
    /// Directory holding index.json and the note files [env: ASKMEMO_NOTES_DIR]
    #[arg(long)]
    notes_dir: Option<PathBuf>,

    /// Name of the index file inside the notes directory [env: ASKMEMO_INDEX_FILE]
    #[arg(long)]
    index_file: Option<String>,

    /// Print the answer as JSON
    #[arg(long)]
    json: bool,

    /// The question; multiple words are joined with spaces
    #[arg(required = true)]
    question: Vec<String>,
}

fn init_tracing(config: &AskConfig) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_filter))
        .unwrap_or_else(|_| EnvFilter::new(askmemo::config::DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = AskConfig::from_env();
    if let Some(dir) = args.notes_dir {
        config.notes_dir = dir;
    }
    if let Some(index_file) = args.index_file {
        config.index_file = index_file;
    }
    init_tracing(&config);

    tracing::info!(notes_dir = %config.notes_dir.display(), "{LOADING_MESSAGE}");
    let store = NoteStore::open(FsNoteSource::from_config(&config))
        .await
        .with_context(|| format!("failed to load notes from {}", config.notes_dir.display()))?;

    let question = args.question.join(" ");
    let answer = match store.ask(&question) {
        Ok(answer) => answer,
        Err(AskError::EmptyQuestion) => bail!(EMPTY_QUESTION_MESSAGE),
        Err(e) => return Err(e.into()),
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&answer)?);
    } else {
        print!("{}", render_answer(&answer));
    }
    Ok(())
}
