//! Row-wise charting series and per-category volatility

use std::collections::{BTreeMap, VecDeque};

use crate::models::Transaction;

use super::stats::{round2, sample_std_dev};

/// Default trailing window for the rolling average
pub const DEFAULT_ROLLING_WINDOW: usize = 4;

/// Series aligned with the cleaned, date-sorted rows
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RowSeries {
    /// Running total up to and including each row
    pub cumulative: Vec<f64>,
    /// Mean over the trailing `window` rows (fewer at the start)
    pub rolling: Vec<f64>,
    /// Change from the previous row's amount; 0 for the first row
    pub velocity: Vec<f64>,
}

pub fn build_row_series(amounts: &[f64], window: usize) -> RowSeries {
    let window = window.max(1);
    let mut series = RowSeries::default();
    let mut running = 0.0;
    let mut trailing: VecDeque<f64> = VecDeque::with_capacity(window);
    let mut previous: Option<f64> = None;

    for &amount in amounts {
        running += amount;
        series.cumulative.push(round2(running));

        if trailing.len() == window {
            trailing.pop_front();
        }
        trailing.push_back(amount);
        let avg = trailing.iter().sum::<f64>() / trailing.len() as f64;
        series.rolling.push(round2(avg));

        let delta = previous.map(|p| amount - p).unwrap_or(0.0);
        series.velocity.push(round2(delta));
        previous = Some(amount);
    }

    series
}

/// Sample standard deviation of amounts per normalized category
///
/// Categories come back in name order. A category seen only once has no
/// sample variance and reports 0.
pub fn category_volatility(rows: &[Transaction]) -> Vec<(String, f64)> {
    let mut groups: BTreeMap<&str, Vec<f64>> = BTreeMap::new();
    for t in rows {
        groups
            .entry(t.normalized_category.as_str())
            .or_default()
            .push(t.amount);
    }

    groups
        .into_iter()
        .map(|(name, amounts)| {
            let std = sample_std_dev(&amounts).unwrap_or(0.0);
            (name.to_string(), round2(std))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ExpenseType;
    use chrono::NaiveDate;

    #[test]
    fn test_row_series() {
        let series = build_row_series(&[10.0, 20.0, 30.0, 40.0, 50.0], 4);

        assert_eq!(series.cumulative, vec![10.0, 30.0, 60.0, 100.0, 150.0]);
        assert_eq!(series.rolling, vec![10.0, 15.0, 20.0, 25.0, 35.0]);
        assert_eq!(series.velocity, vec![0.0, 10.0, 10.0, 10.0, 10.0]);
    }

    #[test]
    fn test_first_row_invariants() {
        let series = build_row_series(&[42.42, 1.0], 4);
        assert_eq!(series.rolling[0], 42.42);
        assert_eq!(series.velocity[0], 0.0);
        assert_eq!(series.velocity[1], -41.42);
    }

    #[test]
    fn test_rolling_window_of_one() {
        let series = build_row_series(&[3.0, 9.0], 0);
        assert_eq!(series.rolling, vec![3.0, 9.0]);
    }

    #[test]
    fn test_row_series_empty() {
        assert_eq!(build_row_series(&[], 4), RowSeries::default());
    }

    fn tx(category: &str, amount: f64) -> Transaction {
        Transaction {
            date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            amount,
            category: category.to_lowercase(),
            normalized_category: category.to_string(),
            expense_type: ExpenseType::Variable,
        }
    }

    #[test]
    fn test_category_volatility() {
        let rows = vec![
            tx("Transport", 10.0),
            tx("Dining", 5.0),
            tx("Transport", 20.0),
            tx("Transport", 30.0),
        ];

        let volatility = category_volatility(&rows);
        assert_eq!(
            volatility,
            vec![("Dining".to_string(), 0.0), ("Transport".to_string(), 10.0)]
        );
    }
}
