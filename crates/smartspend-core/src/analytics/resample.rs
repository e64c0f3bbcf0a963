//! Monthly resampling

use std::collections::BTreeMap;

use chrono::{Datelike, Months, NaiveDate};

use crate::models::Transaction;

use super::stats::round2;

/// Label format for month buckets, e.g. "Mar 2024"
pub const MONTH_LABEL_FORMAT: &str = "%b %Y";

/// Sum amounts per calendar month
///
/// Buckets run from the earliest to the latest observed month with no gaps:
/// months without transactions appear with a zero sum.
pub fn resample_monthly(rows: &[Transaction]) -> (Vec<String>, Vec<f64>) {
    let mut buckets: BTreeMap<NaiveDate, f64> = BTreeMap::new();
    for t in rows {
        *buckets.entry(month_start(t.date)).or_insert(0.0) += t.amount;
    }

    let (first, last) = match (buckets.keys().next(), buckets.keys().next_back()) {
        (Some(&first), Some(&last)) => (first, last),
        _ => return (Vec::new(), Vec::new()),
    };

    let mut months = Vec::new();
    let mut values = Vec::new();
    let mut current = Some(first);

    while let Some(month) = current.filter(|m| *m <= last) {
        months.push(month.format(MONTH_LABEL_FORMAT).to_string());
        values.push(round2(buckets.get(&month).copied().unwrap_or(0.0)));
        current = month.checked_add_months(Months::new(1));
    }

    (months, values)
}

fn month_start(date: NaiveDate) -> NaiveDate {
    date.with_day(1).expect("Day 1 always valid")
}
