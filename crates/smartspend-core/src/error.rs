//! Error types for SmartSpend

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// Cleaning removed every row. The only error the analytics engine raises.
    #[error("No valid rows remain after cleaning.")]
    EmptyDataset,

    #[error("{0}")]
    Import(String),

    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, Error>;
