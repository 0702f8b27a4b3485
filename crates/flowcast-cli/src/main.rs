//! Flowcast CLI - Expense and cash-flow forecaster
//!
//! Usage:
//!   flowcast analyze                 Forecast from the built-in sample ledger
//!   flowcast analyze --file CSV      Forecast from a ledger file
//!   flowcast analyze --json          Print the forecast as JSON
//!   flowcast sample                  Print the built-in sample ledger

mod cli;
mod commands;
mod sample;

#[cfg(test)]
mod tests;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::{Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    // Priority: RUST_LOG env var > --verbose flag > default (info)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).compact())
        .init();

    match cli.command {
        Commands::Analyze { file, no_ai, json } => {
            commands::cmd_analyze(file.as_deref(), no_ai, json).await
        }
        Commands::Sample => commands::cmd_sample(),
    }
}
