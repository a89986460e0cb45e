//! # Slate - A Small Notepad
//!
//! A plain-text notepad with a line-number gutter and current-line
//! highlight, built in Rust.
//!
//! ## Quick Start
//!
//! ```bash
//! # Run the notepad
//! cargo run
//!
//! # Open a file
//! cargo run -- notes.txt
//!
//! # Open a file without allowing edits
//! cargo run -- --readonly notes.txt
//! ```

use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use slate_core::Config;
use slate_ui::{run, Flags};

/// Slate - a small notepad built in Rust
#[derive(Parser, Debug)]
#[command(name = "slate")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// File to open
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,

    /// Start in read-only mode
    #[arg(short, long)]
    readonly: bool,

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

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_level(true),
        )
        .with(tracing_subscriber::filter::LevelFilter::from_level(
            log_level(args.verbose),
        ))
        .init();

    tracing::info!("Starting Slate v{}", env!("CARGO_PKG_VERSION"));

    let config = match &args.config {
        Some(path) => Config::load_from(path)
            .map_err(|e| anyhow::anyhow!("Failed to load config {}: {}", path.display(), e))?,
        None => Config::load(),
    };

    let flags = Flags {
        file: args.file,
        read_only: args.readonly,
        config,
    };

    run(flags).map_err(|e| anyhow::anyhow!("Application error: {}", e))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_parsing() {
        let args = Args::parse_from(["slate"]);
        assert!(args.file.is_none());
        assert!(!args.readonly);
        assert!(args.config.is_none());
    }

    #[test]
    fn test_args_with_file() {
        let args = Args::parse_from(["slate", "notes.txt"]);
        assert_eq!(args.file, Some(PathBuf::from("notes.txt")));
    }

    #[test]
    fn test_args_readonly_and_config() {
        let args = Args::parse_from(["slate", "-r", "--config", "slate.toml", "notes.txt"]);
        assert!(args.readonly);
        assert_eq!(args.config, Some(PathBuf::from("slate.toml")));
    }

    #[test]
    fn test_verbosity_levels() {
        let args = Args::parse_from(["slate", "-vv"]);
        assert_eq!(log_level(args.verbose), tracing::Level::DEBUG);
        assert_eq!(log_level(0), tracing::Level::WARN);
        assert_eq!(log_level(7), tracing::Level::TRACE);
    }
}
