//! Analyze command implementation

use std::fmt::{self, Write};
use std::fs::File;
use std::path::Path;

use anyhow::{Context, Result};
use smartspend_core::{analyze_columns, load_csv_with, AnalyticsConfig, AnalyticsResult};
use tracing::debug;

pub use smartspend_core::ColumnOverrides;

use super::truncate;

/// How `analyze` prints its result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable dashboard
    Text,
    /// Full result as pretty JSON
    Json,
    /// Stored summary subset as pretty JSON
    Summary,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            "summary" => Ok(Self::Summary),
            _ => Err(format!(
                "Unknown format: {}. Available: text, json, summary",
                s
            )),
        }
    }
}

pub fn cmd_analyze(
    file: &Path,
    config_path: Option<&Path>,
    overrides: ColumnOverrides,
    format: &str,
) -> Result<()> {
    let format = format.parse::<OutputFormat>().map_err(anyhow::Error::msg)?;
    let config = AnalyticsConfig::load_from(config_path)?;

    let result = run_analysis(file, &config, &overrides)?;
    println!("{}", render(&result, format, &config.currency_symbol)?);

    Ok(())
}

/// Load a CSV file and run the engine over it
pub fn run_analysis(
    file: &Path,
    config: &AnalyticsConfig,
    overrides: &ColumnOverrides,
) -> Result<AnalyticsResult> {
    let csv_file =
        File::open(file).with_context(|| format!("Failed to open file: {}", file.display()))?;

    let (table, columns) = load_csv_with(csv_file, config.max_upload_bytes(), overrides)?;
    debug!(
        "Loaded {} rows from {} (date={}, amount={}, category={})",
        table.len(),
        file.display(),
        columns.date,
        columns.amount,
        columns.category
    );

    Ok(analyze_columns(&table, &columns, config)?)
}

/// Render a result in the requested format
pub fn render(result: &AnalyticsResult, format: OutputFormat, currency: &str) -> Result<String> {
    match format {
        OutputFormat::Text => format_dashboard(result, currency),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(result)?),
        OutputFormat::Summary => Ok(serde_json::to_string_pretty(&result.summary()?)?),
    }
}

/// Dashboard view: scalars, insights, then one table per breakdown
pub fn format_dashboard(result: &AnalyticsResult, currency: &str) -> Result<String> {
    let mut out = String::new();
    write_dashboard(&mut out, result, currency)?;
    Ok(out)
}

fn write_dashboard(out: &mut impl Write, result: &AnalyticsResult, currency: &str) -> fmt::Result {
    let rule = "   ─────────────────────────────────────────────────────────────";

    writeln!(out)?;
    writeln!(out, "📊 Spending Analysis")?;
    writeln!(out, "{}", rule)?;
    if let (Some(first), Some(last)) = (result.dates.first(), result.dates.last()) {
        writeln!(out, "   Period: {} to {}", first, last)?;
    }
    writeln!(out, "   Transactions: {}", result.dates.len())?;
    writeln!(out, "   Total: {} {:.2}", currency, result.total)?;
    writeln!(out, "   Average: {} {:.2}", currency, result.average)?;
    if result.prediction != 0.0 {
        writeln!(out, "   Forecast: {} {:.2}", currency, result.prediction)?;
    } else {
        writeln!(out, "   Forecast: (not enough monthly data)")?;
    }
    writeln!(out, "   Unusual: {}", result.anomalies)?;
    writeln!(out, "   Top category: {}", result.strongest_category)?;

    writeln!(out)?;
    writeln!(out, "💡 Insights")?;
    writeln!(out, "{}", rule)?;
    for line in &result.insights {
        writeln!(out, "   • {}", line)?;
    }

    writeln!(out)?;
    writeln!(out, "📈 Monthly Trend")?;
    writeln!(out, "{}", rule)?;
    writeln!(out, "   {:12} │ {:>12}", "Month", "Amount")?;
    writeln!(out, "   ─────────────┼─────────────")?;
    for (month, amount) in result.months.iter().zip(&result.monthly) {
        writeln!(out, "   {:12} │ {:>12.2}", month, amount)?;
    }

    writeln!(out)?;
    writeln!(out, "🏷️  Categories")?;
    writeln!(out, "{}", rule)?;
    writeln!(out, "   {:25} │ {:>12} │ {:>6}", "Category", "Amount", "%")?;
    writeln!(out, "   ──────────────────────────┼──────────────┼────────")?;
    for (name, amount) in result.categories.iter().zip(&result.category_totals) {
        writeln!(
            out,
            "   {:25} │ {:>12.2} │ {:>5.1}%",
            truncate(name, 25),
            amount,
            percentage(*amount, result.total)
        )?;
    }

    writeln!(out)?;
    writeln!(out, "📌 Fixed vs Variable")?;
    writeln!(out, "{}", rule)?;
    for (label, amount) in result.expense_labels.iter().zip(&result.expense_values) {
        writeln!(
            out,
            "   {:12} │ {:>12.2} │ {:>5.1}%",
            label,
            amount,
            percentage(*amount, result.total)
        )?;
    }

    writeln!(out)?;
    writeln!(out, "🌡️  Volatility (std. deviation)")?;
    writeln!(out, "{}", rule)?;
    for (name, value) in result
        .volatility_labels
        .iter()
        .zip(&result.volatility_values)
    {
        writeln!(out, "   {:25} │ {:>12.2}", truncate(name, 25), value)?;
    }

    Ok(())
}

fn percentage(part: f64, total: f64) -> f64 {
    if total > 0.0 {
        part / total * 100.0
    } else {
        0.0
    }
}
