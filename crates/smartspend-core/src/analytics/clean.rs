//! Dataset cleaning: typed rows out of raw table cells

use tracing::debug;

use crate::categories::{expense_type, normalize};
use crate::error::{Error, Result};
use crate::import::{parse_amount, parse_date};
use crate::models::{Table, Transaction};

/// Turn table rows into date-sorted transactions
///
/// Rows whose date or amount does not parse are dropped. Negative amounts are
/// clipped to zero. A date or amount column that is not in the table makes
/// every row unparseable; a missing category column reads as empty cells.
///
/// Fails with [`Error::EmptyDataset`] when no row survives.
pub fn clean(
    table: &Table,
    date_col: &str,
    amount_col: &str,
    category_col: &str,
) -> Result<Vec<Transaction>> {
    let date_idx = table.column_index(date_col);
    let amount_idx = table.column_index(amount_col);
    let category_idx = table.column_index(category_col);

    if category_idx.is_none() {
        debug!("Category column {:?} not found, using defaults", category_col);
    }

    let mut rows: Vec<Transaction> = (0..table.len())
        .filter_map(|i| {
            let date = parse_date(table.cell(i, date_idx))?;
            let amount = parse_amount(table.cell(i, amount_idx))?;
            let category = table.cell(i, category_idx).to_string();
            let normalized_category = normalize(&category);

            Some(Transaction {
                date,
                amount: if amount > 0.0 { amount } else { 0.0 },
                expense_type: expense_type(&normalized_category),
                normalized_category,
                category,
            })
        })
        .collect();

    let dropped = table.len() - rows.len();
    if dropped > 0 {
        debug!("Dropped {} of {} rows during cleaning", dropped, table.len());
    }

    if rows.is_empty() {
        return Err(Error::EmptyDataset);
    }

    // Stable: rows sharing a date keep their export order
    rows.sort_by_key(|t| t.date);

    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ExpenseType;
    use chrono::NaiveDate;

    fn table(rows: &[&[&str]]) -> Table {
        Table::from_rows(&["date", "amount", "category"], rows)
    }

    #[test]
    fn test_clean_sorts_and_normalizes() {
        let t = table(&[
            &["2024-02-10", "200", "grocery"],
            &["2024-01-05", "100", "uber"],
            &["2024-01-20", "50", "rent"],
        ]);

        let rows = clean(&t, "date", "amount", "category").unwrap();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].date, NaiveDate::from_ymd_opt(2024, 1, 5).unwrap());
        assert_eq!(rows[0].normalized_category, "Transport");
        assert_eq!(rows[0].category, "uber");
        assert_eq!(rows[1].normalized_category, "Housing");
        assert_eq!(rows[1].expense_type, ExpenseType::Fixed);
        assert_eq!(rows[2].normalized_category, "Groceries");
        assert_eq!(rows[2].expense_type, ExpenseType::Variable);
    }

    #[test]
    fn test_clean_drops_invalid_rows() {
        let t = table(&[
            &["2024-01-05", "100", "uber"],
            &["yesterday", "20", "coffee"],
            &["2024-01-06", "twelve", "coffee"],
            &["2024-01-07", "", "coffee"],
        ]);

        let rows = clean(&t, "date", "amount", "category").unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].amount, 100.0);
    }

    #[test]
    fn test_clean_drops_out_of_range_dates() {
        let t = table(&[
            &["-262000-01-01", "10", "uber"],
            &["2024-01-05", "20", "rent"],
            &["+262000-01-01", "30", "coffee"],
        ]);

        let rows = clean(&t, "date", "amount", "category").unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].date, NaiveDate::from_ymd_opt(2024, 1, 5).unwrap());
    }

    #[test]
    fn test_clean_clips_negative_amounts() {
        let t = table(&[&["2024-01-05", "-50", "refund"], &["2024-01-06", "30", "coffee"]]);

        let rows = clean(&t, "date", "amount", "category").unwrap();
        assert_eq!(rows[0].amount, 0.0);
        assert!(rows[0].amount.is_sign_positive());
        assert_eq!(rows[1].amount, 30.0);
    }

    #[test]
    fn test_clean_keeps_order_for_same_date() {
        let t = table(&[
            &["2024-01-05", "1", "a"],
            &["2024-01-04", "2", "b"],
            &["2024-01-05", "3", "c"],
        ]);

        let rows = clean(&t, "date", "amount", "category").unwrap();
        let amounts: Vec<f64> = rows.iter().map(|r| r.amount).collect();
        assert_eq!(amounts, vec![2.0, 1.0, 3.0]);
    }

    #[test]
    fn test_clean_all_dates_invalid() {
        let t = table(&[&["soon", "10", "uber"], &["later", "20", "rent"]]);
        let result = clean(&t, "date", "amount", "category");
        assert!(matches!(result, Err(Error::EmptyDataset)));
    }

    #[test]
    fn test_clean_empty_table() {
        let t = table(&[]);
        let result = clean(&t, "date", "amount", "category");
        assert!(matches!(result, Err(Error::EmptyDataset)));
    }

    #[test]
    fn test_clean_missing_category_column() {
        let t = Table::from_rows(&["date", "amount"], &[&["2024-01-05", "10"]]);
        let rows = clean(&t, "date", "amount", "category").unwrap();
        assert_eq!(rows[0].normalized_category, "General");
        assert_eq!(rows[0].category, "");
    }

    #[test]
    fn test_clean_unknown_amount_column() {
        let t = table(&[&["2024-01-05", "10", "uber"]]);
        let result = clean(&t, "date", "price", "category");
        assert!(matches!(result, Err(Error::EmptyDataset)));
    }
}
