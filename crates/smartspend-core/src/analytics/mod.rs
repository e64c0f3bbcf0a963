//! Analytics Engine
//!
//! A single synchronous pass from a parsed table to an [`AnalyticsResult`]:
//!
//! - **clean** - parse dates and amounts, drop bad rows, clip negatives, sort
//! - **aggregate** - total, average, category and fixed/variable breakdowns
//! - **resample** - monthly sums with zero-filled gaps
//! - **forecast** - linear trend one month ahead
//! - **anomaly** - amounts above mean + 2 standard deviations
//! - **series** - cumulative, rolling average, velocity, per-category volatility
//! - **insights** - summary sentences
//!
//! The engine holds no state and touches no files; the only error it raises
//! is [`Error::EmptyDataset`](crate::error::Error::EmptyDataset).
//!
//! ## Usage
//!
//! ```rust,ignore
//! use smartspend_core::{analytics, import};
//!
//! let (table, columns) = import::load_csv(file, config.max_upload_bytes())?;
//! let result = analytics::analyze(&table, &columns.date, &columns.amount, &columns.category)?;
//! ```

pub mod aggregate;
pub mod anomaly;
pub mod clean;
pub mod forecast;
pub mod insights;
pub mod resample;
pub mod series;
pub mod stats;

pub use aggregate::{aggregate, Aggregates};
pub use anomaly::{detect_anomalies, detect_anomalies_with_sigma};
pub use clean::clean;
pub use forecast::forecast;
pub use insights::{insights, insights_with_currency};
pub use resample::resample_monthly;
pub use series::{build_row_series, category_volatility, RowSeries};

use tracing::info;

use crate::config::AnalyticsConfig;
use crate::error::Result;
use crate::models::{AnalyticsResult, ColumnSelection, Table};

use stats::round2;

/// Analyze a table with the default configuration
pub fn analyze(
    table: &Table,
    date_col: &str,
    amount_col: &str,
    category_col: &str,
) -> Result<AnalyticsResult> {
    analyze_with_config(
        table,
        date_col,
        amount_col,
        category_col,
        &AnalyticsConfig::default(),
    )
}

/// Analyze a table using the columns picked by the importer
pub fn analyze_columns(
    table: &Table,
    columns: &ColumnSelection,
    config: &AnalyticsConfig,
) -> Result<AnalyticsResult> {
    analyze_with_config(
        table,
        &columns.date,
        &columns.amount,
        &columns.category,
        config,
    )
}

pub fn analyze_with_config(
    table: &Table,
    date_col: &str,
    amount_col: &str,
    category_col: &str,
    config: &AnalyticsConfig,
) -> Result<AnalyticsResult> {
    let rows = clean(table, date_col, amount_col, category_col)?;
    let amounts: Vec<f64> = rows.iter().map(|t| t.amount).collect();

    let aggregates = aggregate(&rows);
    let (months, monthly) = resample_monthly(&rows);
    let prediction = forecast(&monthly);
    let anomalies = detect_anomalies_with_sigma(&amounts, config.anomaly_sigma);
    let series = build_row_series(&amounts, config.effective_rolling_window());
    let volatility = category_volatility(&rows);
    let insights = insights_with_currency(
        &aggregates,
        prediction,
        anomalies,
        &config.currency_symbol,
    );

    info!(
        "Analyzed {} rows across {} months (prediction {:.2}, {} anomalies)",
        rows.len(),
        months.len(),
        prediction,
        anomalies
    );

    let (categories, category_totals) = aggregates.category_totals.into_iter().unzip();
    let (volatility_labels, volatility_values) = volatility.into_iter().unzip();
    let (expense_labels, expense_values) = aggregates
        .expense_split
        .into_iter()
        .map(|(kind, sum)| (kind.as_str().to_string(), sum))
        .unzip();

    Ok(AnalyticsResult {
        total: aggregates.total,
        average: aggregates.average,
        prediction,
        anomalies,
        strongest_category: aggregates.strongest_category,
        insights,
        months,
        monthly,
        categories,
        category_totals,
        dates: rows.iter().map(|t| t.date).collect(),
        cumulative: series.cumulative,
        rolling: series.rolling,
        velocity: series.velocity,
        volatility_labels,
        volatility_values,
        expense_labels,
        expense_values,
        amounts: amounts.into_iter().map(round2).collect(),
    })
}
