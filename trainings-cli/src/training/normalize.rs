//! Cell normalization
//!
//! Every raw spreadsheet value is reduced to an optional trimmed string before
//! any structural parsing happens. Whole-number floats lose their fractional
//! part (`3.0` -> `"3"`), and blank text counts as absent.

use calamine::Data;
use chrono::NaiveDateTime;

use super::types::{Cell, NormalizedRow, RowSnapshot};

/// Normalize a single raw cell
pub fn normalize(cell: &Data) -> Cell {
    match cell {
        Data::Empty => None,
        Data::String(s) | Data::DateTimeIso(s) | Data::DurationIso(s) => normalize_text(s),
        Data::Int(i) => Some(i.to_string()),
        Data::Float(f) => Some(format_float(*f)),
        Data::Bool(b) => Some(if *b { "True" } else { "False" }.to_string()),
        Data::DateTime(dt) => match dt.as_datetime() {
            Some(datetime) => Some(format_datetime(datetime)),
            None => normalize_text(&dt.to_string()),
        },
        Data::Error(e) => normalize_text(&e.to_string()),
    }
}

/// Normalize already-textual content
pub fn normalize_text(text: &str) -> Cell {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn format_float(f: f64) -> String {
    if f.is_finite() && f.fract() == 0.0 {
        // i64::MAX as f64 rounds up to 2^63, which no longer fits
        if f >= i64::MIN as f64 && f < i64::MAX as f64 {
            (f as i64).to_string()
        } else {
            format!("{:.0}", f)
        }
    } else {
        f.to_string()
    }
}

fn format_datetime(datetime: NaiveDateTime) -> String {
    datetime.format("%Y-%m-%d %H:%M:%S").to_string()
}

pub fn normalize_row(row: &[Data]) -> NormalizedRow {
    row.iter().map(normalize).collect()
}

pub fn normalize_grid(rows: &[Vec<Data>]) -> Vec<NormalizedRow> {
    rows.iter().map(|row| normalize_row(row)).collect()
}

/// Cell text at `col`, or `None` if the row is too short or the cell is absent
pub fn cell_text(row: &[Cell], col: usize) -> Option<&str> {
    row.get(col).and_then(|c| c.as_deref())
}

/// Copy the first `width` cells of a row, padding short rows with absent cells
pub fn snapshot(row: &[Cell], width: usize) -> RowSnapshot {
    (0..width).map(|i| row.get(i).cloned().flatten()).collect()
}
