use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "folio")]
#[command(about = "Folio CLI - portfolio assistant grounded in live portfolio content", long_about = None)]
struct Cli {
    /// Override the configuration directory (default: ~/.config/folio)
    #[arg(long, global = true)]
    config_dir: Option<PathBuf>,

    /// Fill empty content sections from bundled sample content
    #[arg(long, global = true)]
    fallback: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start an interactive chat session
    Chat,
    /// Load the content context and print the assembled system prompt
    Prompt,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config_dir = cli.config_dir.as_deref();

    match cli.command {
        Commands::Chat => commands::chat::run(config_dir, cli.fallback).await?,
        Commands::Prompt => commands::prompt::run(config_dir, cli.fallback).await?,
    }

    Ok(())
}
