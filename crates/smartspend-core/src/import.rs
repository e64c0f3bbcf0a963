//! CSV import for transaction exports
//!
//! Reads an arbitrary CSV into a [`Table`], normalizes the headers and guesses
//! which columns hold the date, amount and category. Also holds the cell
//! parsers the analytics cleaner uses.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};
use csv::ReaderBuilder;
use std::io::Read;
use tracing::debug;

use crate::categories::DEFAULT_CATEGORY;
use crate::error::{Error, Result};
use crate::models::{ColumnSelection, Table};

/// Header substrings that identify each column, checked per header in order
const DATE_HINTS: &[&str] = &["date", "time"];
const AMOUNT_HINTS: &[&str] = &["amount", "price", "cost", "value"];
const CATEGORY_HINTS: &[&str] = &["category", "type", "group"];

/// Name of the column added when the export has no category column
pub const FALLBACK_CATEGORY_COLUMN: &str = "category";

/// Read CSV data into a table, lower-casing and trimming the headers
pub fn read_table<R: Read>(reader: R) -> Result<Table> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers = rdr
        .headers()
        .map_err(unreadable_csv)?
        .iter()
        .map(|h| h.trim().to_lowercase())
        .collect::<Vec<_>>();

    if headers.iter().all(|h| h.is_empty()) {
        return Err(unreadable_csv("no header row"));
    }

    // Short rows read as empty trailing cells; rows wider than the header are rejected
    let mut rows = Vec::new();
    for result in rdr.records() {
        let record = result.map_err(unreadable_csv)?;
        if record.len() > headers.len() {
            return Err(unreadable_csv(format!(
                "row {} has {} fields, header has {}",
                rows.len() + 1,
                record.len(),
                headers.len()
            )));
        }
        rows.push(record.iter().map(|c| c.to_string()).collect());
    }

    debug!("Read {} rows with {} columns", rows.len(), headers.len());
    Ok(Table::new(headers, rows))
}

/// Read CSV data, refusing input larger than `max_bytes`
pub fn read_table_limited<R: Read>(reader: R, max_bytes: u64) -> Result<Table> {
    let mut buf = Vec::new();
    reader.take(max_bytes.saturating_add(1)).read_to_end(&mut buf)?;

    if buf.len() as u64 > max_bytes {
        return Err(Error::Import(format!(
            "File too large. Max upload size is {}MB.",
            max_bytes / (1024 * 1024)
        )));
    }

    read_table(buf.as_slice())
}

/// Column names supplied by the caller instead of detection
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnOverrides {
    pub date: Option<String>,
    pub amount: Option<String>,
    pub category: Option<String>,
}

/// Guess date, amount and category columns from the headers
///
/// When no category column exists, a constant "General" column is appended
/// to the table so the engine always has one to read.
pub fn detect_columns(table: &mut Table) -> Result<ColumnSelection> {
    select_columns(table, &ColumnOverrides::default())
}

/// Pick columns, preferring caller overrides over header detection
///
/// Override names are matched the same way headers are stored (trimmed,
/// lower-case) and must exist in the table.
pub fn select_columns(table: &mut Table, overrides: &ColumnOverrides) -> Result<ColumnSelection> {
    let date = pick_column(table, overrides.date.as_deref(), DATE_HINTS)?;
    let amount = pick_column(table, overrides.amount.as_deref(), AMOUNT_HINTS)?;

    let (date, amount) = match (date, amount) {
        (Some(d), Some(a)) => (d, a),
        _ => {
            return Err(Error::Import(
                "CSV must include date/time and amount columns.".into(),
            ))
        }
    };

    let category = match pick_column(table, overrides.category.as_deref(), CATEGORY_HINTS)? {
        Some(c) => c,
        None => {
            debug!("No category column found, defaulting to {}", DEFAULT_CATEGORY);
            table.add_constant_column(FALLBACK_CATEGORY_COLUMN, DEFAULT_CATEGORY);
            FALLBACK_CATEGORY_COLUMN.to_string()
        }
    };

    debug!(
        "Selected columns: date={}, amount={}, category={}",
        date, amount, category
    );

    Ok(ColumnSelection {
        date,
        amount,
        category,
    })
}

fn pick_column(table: &Table, requested: Option<&str>, hints: &[&str]) -> Result<Option<String>> {
    match requested {
        Some(name) => {
            let name = name.trim().to_lowercase();
            if table.column_index(&name).is_none() {
                return Err(Error::Import(format!("Column not found in CSV: {}", name)));
            }
            Ok(Some(name))
        }
        None => Ok(find_column(&table.headers, hints)),
    }
}

/// Read a CSV export and pick its columns in one step
pub fn load_csv<R: Read>(reader: R, max_bytes: u64) -> Result<(Table, ColumnSelection)> {
    load_csv_with(reader, max_bytes, &ColumnOverrides::default())
}

/// Like [`load_csv`], with explicit column choices taking precedence
pub fn load_csv_with<R: Read>(
    reader: R,
    max_bytes: u64,
    overrides: &ColumnOverrides,
) -> Result<(Table, ColumnSelection)> {
    let mut table = read_table_limited(reader, max_bytes)?;
    let columns = select_columns(&mut table, overrides)?;
    Ok((table, columns))
}

fn find_column(headers: &[String], hints: &[&str]) -> Option<String> {
    headers
        .iter()
        .find(|h| hints.iter().any(|hint| h.contains(hint)))
        .cloned()
}

fn unreadable_csv<E: std::fmt::Display>(e: E) -> Error {
    debug!("CSV read failed: {}", e);
    Error::Import("Could not read CSV. Please upload a valid CSV file.".into())
}

/// Earliest and latest accepted years; cells outside are treated as unparseable
pub const MIN_YEAR: i32 = 1677;
pub const MAX_YEAR: i32 = 2262;

/// Parse a date cell, accepting common export formats
///
/// Date-times are accepted and truncated to the calendar date. Dates outside
/// `MIN_YEAR..=MAX_YEAR` return `None`.
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    parse_any_date(s).filter(|d| (MIN_YEAR..=MAX_YEAR).contains(&d.year()))
}

fn parse_any_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }

    let date_formats = [
        "%Y-%m-%d", // 2024-01-15
        "%Y/%m/%d", // 2024/01/15
        "%m/%d/%y", // 01/15/24 (before %Y, which would read "24" as year 24)
        "%m/%d/%Y", // 01/15/2024
        "%m-%d-%Y", // 01-15-2024
        "%d/%m/%Y", // 15/01/2024 (European)
        "%d %b %Y", // 15 Jan 2024
        "%b %d, %Y", // Jan 15, 2024
        "%B %d, %Y", // January 15, 2024
    ];

    for fmt in date_formats {
        if let Ok(date) = NaiveDate::parse_from_str(s, fmt) {
            return Some(date);
        }
    }

    let datetime_formats = [
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%d %H:%M",
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%dT%H:%M:%S%.f",
        "%m/%d/%Y %H:%M",
        "%m/%d/%Y %H:%M:%S",
    ];

    for fmt in datetime_formats {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt.date());
        }
    }

    DateTime::parse_from_rfc3339(s)
        .ok()
        .map(|dt| dt.date_naive())
}

/// Parse an amount cell as a plain decimal number
///
/// Non-finite values are rejected so they cannot poison the totals.
pub fn parse_amount(s: &str) -> Option<f64> {
    s.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}
