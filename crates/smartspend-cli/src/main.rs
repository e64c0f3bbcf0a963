//! SmartSpend CLI - Spending analytics for transaction exports
//!
//! Usage:
//!   smartspend analyze --file CSV       Analyze an export (columns auto-detected)
//!   smartspend categorize "Uber trip"   Show category normalization
//!   smartspend categories               List category aliases
//!   smartspend config                   Show effective configuration

mod cli;
mod commands;


use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::*;

fn main() -> Result<()> {
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

    // Logs go to stderr so JSON output on stdout stays clean
    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();

    match cli.command {
        Commands::Analyze {
            file,
            date_column,
            amount_column,
            category_column,
            format,
        } => commands::cmd_analyze(
            &file,
            cli.config.as_deref(),
            commands::ColumnOverrides {
                date: date_column,
                amount: amount_column,
                category: category_column,
            },
            &format,
        ),
        Commands::Categorize { values } => commands::cmd_categorize(&values),
        Commands::Categories => commands::cmd_categories(),
        Commands::Config { path } => {
            if path {
                commands::cmd_config_path()
            } else {
                commands::cmd_config_show(cli.config.as_deref())
            }
        }
    }
}
