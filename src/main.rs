//! # Quillpad
//!
//! A small multi-tab code editor.
//!
//! ```bash
//! # Start with one empty tab
//! cargo run
//!
//! # Open files into tabs
//! cargo run -- main.py util.py
//!
//! # Use a specific config file
//! cargo run -- --config ./quillpad.toml
//! ```

use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use quillpad_core::Config;
use quillpad_ui::{run, Flags};

/// Quillpad - a small multi-tab code editor
#[derive(Parser, Debug)]
#[command(name = "quillpad")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Files to open, one tab each
    #[arg(value_name = "FILE")]
    files: Vec<PathBuf>,

    /// Config file to use instead of the default location
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Verbose logging
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn log_level(verbose: u8) -> tracing::Level {
    match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // RUST_LOG wins over -v when set
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level(args.verbose).as_str()));

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_level(true),
        )
        .with(filter)
        .init();

    tracing::info!("Starting Quillpad v{}", env!("CARGO_PKG_VERSION"));

    let config = Config::load(args.config.as_deref())?;
    tracing::debug!("Loaded config: {:?}", config);

    let flags = Flags {
        files: args.files,
        config,
    };

    run(flags).map_err(|e| anyhow::anyhow!("Application error: {}", e))?;

    Ok(())
}
