//! CLI argument definitions using clap
//!
//! This module contains all the clap structs and enums for parsing CLI arguments.
//! The actual command implementations are in the `commands` module.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// SmartSpend - Spending analytics for transaction exports
#[derive(Parser)]
#[command(name = "smartspend")]
#[command(about = "Analyze a CSV transaction export", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Config override file (defaults to the platform data directory)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Analyze a CSV export of transactions
    Analyze {
        /// CSV file to analyze
        #[arg(short, long)]
        file: PathBuf,

        /// Date column (auto-detected if not specified)
        #[arg(long)]
        date_column: Option<String>,

        /// Amount column (auto-detected if not specified)
        #[arg(long)]
        amount_column: Option<String>,

        /// Category column (auto-detected if not specified)
        #[arg(long)]
        category_column: Option<String>,

        /// Output format: text, json, summary
        #[arg(long, default_value = "text")]
        format: String,
    },

    /// Show how category values normalize
    Categorize {
        /// Raw category values (e.g., "Uber trip" "Monthly rent")
        #[arg(required = true)]
        values: Vec<String>,
    },

    /// List category aliases and fixed-expense categories
    Categories,

    /// Show effective configuration
    Config {
        /// Only print the override file path
        #[arg(long)]
        path: bool,
    },
}
