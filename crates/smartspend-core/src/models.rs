//! Domain models for SmartSpend

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// A parsed tabular dataset with named columns
///
/// Cells are kept as raw strings; the analytics engine decides how to
/// interpret them. Rows shorter than the header behave as if the missing
/// cells were empty.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { headers, rows }
    }

    /// Build a table from string slices (handy for tests and fixtures)
    pub fn from_rows(headers: &[&str], rows: &[&[&str]]) -> Self {
        Self {
            headers: headers.iter().map(|h| h.to_string()).collect(),
            rows: rows
                .iter()
                .map(|row| row.iter().map(|c| c.to_string()).collect())
                .collect(),
        }
    }

    /// Position of a column by exact header name
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// Cell value, or "" when the row is too short or the column is unknown
    pub fn cell(&self, row: usize, column: Option<usize>) -> &str {
        column
            .and_then(|c| self.rows.get(row).and_then(|r| r.get(c)))
            .map(|s| s.as_str())
            .unwrap_or("")
    }

    /// Append a column holding the same value in every row
    pub fn add_constant_column(&mut self, name: &str, value: &str) {
        let width = self.headers.len();
        self.headers.push(name.to_string());
        for row in &mut self.rows {
            row.resize(width, String::new());
            row.push(value.to_string());
        }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Column names chosen for date, amount and category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnSelection {
    pub date: String,
    pub amount: String,
    pub category: String,
}

/// Fixed vs. variable spending
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ExpenseType {
    Fixed,
    Variable,
}

impl ExpenseType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Fixed => "Fixed",
            Self::Variable => "Variable",
        }
    }
}

impl std::str::FromStr for ExpenseType {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "fixed" => Ok(Self::Fixed),
            "variable" => Ok(Self::Variable),
            _ => Err(format!("Unknown expense type: {}", s)),
        }
    }
}

impl std::fmt::Display for ExpenseType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A cleaned transaction row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub date: NaiveDate,
    /// Never negative: negative inputs are clipped to zero during cleaning
    pub amount: f64,
    /// Raw category cell as it appeared in the export
    pub category: String,
    pub normalized_category: String,
    pub expense_type: ExpenseType,
}

/// Output of a single analytics run
///
/// Scalars are rounded to 2 decimals. Row-aligned series (`dates`, `amounts`,
/// `cumulative`, `rolling`, `velocity`) have one entry per cleaned row;
/// `months`/`monthly` are aligned by bucket; the label/value pairs are aligned
/// with each other.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsResult {
    pub total: f64,
    pub average: f64,
    /// Linear trend estimate for the month after the last bucket.
    /// 0 means either "no trend" or "fewer than 2 months of data".
    pub prediction: f64,
    pub anomalies: usize,
    pub strongest_category: String,
    pub insights: Vec<String>,
    pub months: Vec<String>,
    pub monthly: Vec<f64>,
    pub categories: Vec<String>,
    pub category_totals: Vec<f64>,
    pub dates: Vec<NaiveDate>,
    pub cumulative: Vec<f64>,
    pub rolling: Vec<f64>,
    pub velocity: Vec<f64>,
    pub volatility_labels: Vec<String>,
    pub volatility_values: Vec<f64>,
    pub expense_labels: Vec<String>,
    pub expense_values: Vec<f64>,
    pub amounts: Vec<f64>,
}

impl AnalyticsResult {
    /// Reduce to the fields a saved analysis keeps, with the full result as payload
    pub fn summary(&self) -> Result<AnalysisSummary> {
        Ok(AnalysisSummary {
            total: self.total,
            average: self.average,
            prediction: self.prediction,
            anomalies: self.anomalies,
            strongest_category: self.strongest_category.clone(),
            payload: serde_json::to_string(self)?,
        })
    }
}

/// Stored form of an analysis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisSummary {
    pub total: f64,
    pub average: f64,
    pub prediction: f64,
    pub anomalies: usize,
    pub strongest_category: String,
    /// Serialized `AnalyticsResult` (JSON)
    pub payload: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_cell_short_row() {
        let table = Table::from_rows(&["date", "amount", "category"], &[&["2024-01-01", "5"]]);
        let category = table.column_index("category");
        assert_eq!(table.cell(0, category), "");
        assert_eq!(table.cell(0, None), "");
        assert_eq!(table.cell(0, Some(1)), "5");
    }

    #[test]
    fn test_add_constant_column_pads_short_rows() {
        let mut table = Table::from_rows(&["date", "amount"], &[&["2024-01-01"], &["2024-01-02", "3"]]);
        table.add_constant_column("category", "General");

        assert_eq!(table.headers, vec!["date", "amount", "category"]);
        assert_eq!(table.rows[0], vec!["2024-01-01", "", "General"]);
        assert_eq!(table.rows[1], vec!["2024-01-02", "3", "General"]);
    }

    #[test]
    fn test_expense_type_parse() {
        assert_eq!("fixed".parse::<ExpenseType>().unwrap(), ExpenseType::Fixed);
        assert_eq!("Variable".parse::<ExpenseType>().unwrap(), ExpenseType::Variable);
        assert!("other".parse::<ExpenseType>().is_err());
        assert_eq!(ExpenseType::Fixed.to_string(), "Fixed");
    }

    #[test]
    fn test_summary_payload_round_trips() {
        let result = AnalyticsResult {
            total: 10.0,
            average: 10.0,
            prediction: 0.0,
            anomalies: 0,
            strongest_category: "General".to_string(),
            insights: vec![],
            months: vec!["Jan 2024".to_string()],
            monthly: vec![10.0],
            categories: vec!["General".to_string()],
            category_totals: vec![10.0],
            dates: vec![NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()],
            cumulative: vec![10.0],
            rolling: vec![10.0],
            velocity: vec![0.0],
            volatility_labels: vec!["General".to_string()],
            volatility_values: vec![0.0],
            expense_labels: vec!["Variable".to_string()],
            expense_values: vec![10.0],
            amounts: vec![10.0],
        };

        let summary = result.summary().unwrap();
        assert_eq!(summary.strongest_category, "General");
        let decoded: AnalyticsResult = serde_json::from_str(&summary.payload).unwrap();
        assert_eq!(decoded, result);
        assert!(summary.payload.contains("\"dates\":[\"2024-01-01\"]"));
    }
}
