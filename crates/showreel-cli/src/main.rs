use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use showreel_core::AppConfig;

mod commands;

#[derive(Parser)]
#[command(name = "showreel")]
#[command(author, version, about = "A terminal slideshow with autoplay and animated counters")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Present a deck (the built-in demo deck if none is given)
    Run {
        /// Deck file (TOML)
        deck: Option<PathBuf>,
    },
    /// Validate a deck file and print a summary
    Check {
        /// Deck file (TOML)
        deck: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = Arc::new(AppConfig::load()?);

    match cli.command {
        Some(Commands::Run { deck }) => {
            init_logging(true)?;
            commands::run::run(config, deck).await
        }
        None => {
            init_logging(true)?;
            commands::run::run(config, None).await
        }
        Some(Commands::Check { deck }) => {
            init_logging(false)?;
            commands::check::run(&deck).await
        }
    }
}

/// Initialize logging. While the TUI owns the terminal, log lines go to a
/// file instead of corrupting the screen.
fn init_logging(to_file: bool) -> Result<()> {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
    );

    if to_file {
        let path = AppConfig::log_path();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)?;
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_ansi(false)
                    .with_writer(Arc::new(file)),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_writer(std::io::stderr),
            )
            .init();
    }

    Ok(())
}
