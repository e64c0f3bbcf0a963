//! Totals and per-group sums

use std::collections::BTreeMap;

use crate::categories::DEFAULT_CATEGORY;
use crate::models::{ExpenseType, Transaction};

use super::stats::round2;

/// Scalar totals plus category and expense-type breakdowns
#[derive(Debug, Clone, PartialEq)]
pub struct Aggregates {
    pub total: f64,
    pub average: f64,
    /// Sum per normalized category, largest first
    pub category_totals: Vec<(String, f64)>,
    pub strongest_category: String,
    /// Sum per expense type, Fixed before Variable, only types present
    pub expense_split: Vec<(ExpenseType, f64)>,
}

pub fn aggregate(rows: &[Transaction]) -> Aggregates {
    let sum: f64 = rows.iter().map(|t| t.amount).sum();
    let average = if rows.is_empty() {
        0.0
    } else {
        sum / rows.len() as f64
    };

    let category_totals = category_totals(rows);
    let strongest_category = category_totals
        .first()
        .map(|(name, _)| name.clone())
        .unwrap_or_else(|| DEFAULT_CATEGORY.to_string());

    let mut by_type: BTreeMap<ExpenseType, f64> = BTreeMap::new();
    for t in rows {
        *by_type.entry(t.expense_type).or_insert(0.0) += t.amount;
    }

    Aggregates {
        total: round2(sum),
        average: round2(average),
        category_totals,
        strongest_category,
        expense_split: by_type.into_iter().map(|(k, v)| (k, round2(v))).collect(),
    }
}

/// Group by normalized category (name order), then sort by sum descending.
/// The sort is stable, so equal sums stay in name order.
fn category_totals(rows: &[Transaction]) -> Vec<(String, f64)> {
    let mut groups: BTreeMap<&str, f64> = BTreeMap::new();
    for t in rows {
        *groups.entry(t.normalized_category.as_str()).or_insert(0.0) += t.amount;
    }

    let mut totals: Vec<(String, f64)> = groups
        .into_iter()
        .map(|(name, sum)| (name.to_string(), sum))
        .collect();
    totals.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

    totals
        .into_iter()
        .map(|(name, sum)| (name, round2(sum)))
        .collect()
}
