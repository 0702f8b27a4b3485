//! CLI argument definitions using clap
//!
//! This module contains the clap structs and enums for parsing CLI
//! arguments. The command implementations are in the `commands` module.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Flowcast - Forecast next month's expenses from a transaction ledger
#[derive(Parser)]
#[command(name = "flowcast")]
#[command(about = "Expense and cash-flow forecaster for personal transaction ledgers", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Analyze a ledger and print the forecast
    Analyze {
        /// Ledger CSV to analyze (omit to use the built-in sample ledger)
        ///
        /// Expected header: date,category,amount (any order, case-insensitive).
        /// Rows under the "Income" category count as inflow; everything
        /// else is an expense.
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Skip the AI narrative summary
        #[arg(long)]
        no_ai: bool,

        /// Print the forecast as JSON instead of a report
        #[arg(long)]
        json: bool,
    },

    /// Print the built-in sample ledger
    Sample,
}
