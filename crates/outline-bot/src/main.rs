//! `outline-bot`: answer one document upload from the command line.
//!
//! The file is handled exactly like a chat upload; frames and the
//! acknowledgement go to stdout one per line, logs go to stderr.

use anyhow::Context;
use clap::{Parser, ValueEnum};
use outline_bot::{Dispatcher, DocumentUpload, Incoming};
use outline_core::{AppConfig, DocumentFormat, ExtractionMode, OutputFormat};
use outline_delivery::WriterChannel;
use std::num::NonZeroUsize;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "outline-bot", version, about = "Turn a document's table of contents into JSON")]
struct Cli {
    /// PDF, DOCX or XLSX file to process
    file: PathBuf,

    /// JSON configuration file
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    #[arg(long, value_enum)]
    mode: Option<Mode>,

    /// Frame size in characters
    #[arg(long, value_name = "CHARS")]
    limit: Option<NonZeroUsize>,

    /// Page ceiling for the scan
    #[arg(long, value_name = "PAGES")]
    max_pages: Option<usize>,

    /// Declared MIME type; guessed from the file extension when absent
    #[arg(long)]
    mime: Option<String>,

    /// Send the extracted text instead of the outline
    #[arg(long)]
    text: bool,

    /// Single-line JSON
    #[arg(long)]
    compact: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Mode {
    Toc,
    FullBody,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn load_config(cli: &Cli) -> anyhow::Result<AppConfig> {
    let mut config = match &cli.config {
        Some(path) => AppConfig::from_json_file(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => AppConfig::default(),
    };
    if let Some(mode) = cli.mode {
        config.outline.mode = match mode {
            Mode::Toc => ExtractionMode::Toc,
            Mode::FullBody => ExtractionMode::FullBody,
        };
    }
    if let Some(pages) = cli.max_pages {
        config.outline.max_pages = Some(pages);
    }
    if let Some(limit) = cli.limit {
        config.delivery.frame_limit = limit;
    }
    if cli.text {
        config.bot.output = OutputFormat::Text;
    }
    if cli.compact {
        config.delivery.pretty = false;
    }
    config.outline.validate()?;
    Ok(config)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let config = load_config(&cli)?;
    let dispatcher = Dispatcher::from_config(&config)?;

    let bytes = tokio::fs::read(&cli.file)
        .await
        .with_context(|| format!("reading {}", cli.file.display()))?;
    let mime = cli.mime.clone().unwrap_or_else(|| {
        DocumentFormat::from_extension(&cli.file)
            .map_or("application/octet-stream", |f| f.mime_type())
            .to_string()
    });
    let file_name = cli
        .file
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    let message = Incoming::Document(DocumentUpload::new(file_name, mime, bytes));
    let channel = WriterChannel::stdout();
    dispatcher.dispatch(&message, &channel).await?;
    Ok(())
}
