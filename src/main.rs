use clap::{Parser, Subcommand};
use std::path::PathBuf;

use resume_mark::{config::Config, document, error::Result, timeline};

#[derive(Debug, Parser)]
#[command(name = "resume-mark", version, about = "Extract structured data from a markdown resume")]
struct Cli {
    /// Path to a resume.toml configuration file.
    #[arg(long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the extracted resume record as JSON.
    Extract {
        /// Markdown source, overriding the configured path.
        file: Option<PathBuf>,
    },
    /// Print the reverse-chronological timeline as JSON.
    Timeline {
        /// Markdown source, overriding the configured path.
        file: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };

    let (Command::Extract { file } | Command::Timeline { file }) = &cli.command;
    let source = file.clone().unwrap_or_else(|| config.resume.source.clone());
    let fallback = config.resume.fallback_summary.as_deref().unwrap_or_default();
    let record = document::load_or_fallback(source, fallback);

    let output = match cli.command {
        Command::Extract { .. } => serde_json::to_string_pretty(&record)?,
        Command::Timeline { .. } => serde_json::to_string_pretty(&timeline::timeline(&record))?,
    };

    println!("{output}");

    Ok(())
}
