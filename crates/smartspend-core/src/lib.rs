//! SmartSpend Core Library
//!
//! Turns a transaction export into a spending summary:
//! - CSV import with header-based column detection
//! - Category normalization and fixed/variable classification
//! - Analytics engine (totals, monthly trend, forecast, anomalies, series)
//! - Layered configuration with embedded defaults

pub mod analytics;
pub mod categories;
pub mod config;
pub mod error;
pub mod import;
pub mod models;

pub use analytics::{analyze, analyze_columns, analyze_with_config};
pub use config::AnalyticsConfig;
pub use error::{Error, Result};
pub use import::{load_csv, load_csv_with, ColumnOverrides};
pub use models::{AnalysisSummary, AnalyticsResult, ColumnSelection, ExpenseType, Table, Transaction};
