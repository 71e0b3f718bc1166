//! Positional layout of a training sheet
//!
//! The workbook carries no schema. Structure is recovered from fixed cell
//! coordinates and exact sentinel strings, all of which live here so the
//! parser state machines never hard-code them.

use serde::{Deserialize, Serialize};

/// Zero-based cell coordinate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellRef {
    pub row: usize,
    pub col: usize,
}

impl CellRef {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// Sentinels and column conventions consulted by the sheet parser
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SheetLayout {
    /// Training phase text (B2)
    pub phase_cell: CellRef,
    /// Sheet title text (B4)
    pub title_cell: CellRef,

    /// Row holding the microcycle labels
    pub microcycle_row: usize,
    /// Columns of `microcycle_row` that hold labels, in output order
    pub microcycle_columns: Vec<usize>,

    /// Column holding warm-up descriptions, exercise names and row labels
    pub label_column: usize,
    /// Column whose "X" marks an exercise header row
    pub marker_column: usize,
    /// Column holding a warm-up entry's resource link
    pub resource_column: usize,
    /// Number of cells kept per row snapshot
    pub snapshot_width: usize,

    /// Label that opens the warm-up block
    pub warmup_start: String,
    /// Label prefix that closes the warm-up block
    pub warmup_stop_prefix: String,
    /// Label that opens (and may repeat inside) the exercise section
    pub exercise_section: String,
    /// Label of an exercise's rest-interval row
    pub rest_label: String,
    /// Case-insensitive label prefixes of per-set rows
    pub series_ordinals: Vec<String>,
    /// Text the marker cell must contain (case-insensitive) on a header row
    pub header_marker: String,
    /// Exercise names starting with this (case-insensitive) are series rows, not headers
    pub series_name_prefix: String,
}

impl Default for SheetLayout {
    fn default() -> Self {
        Self {
            phase_cell: CellRef::new(1, 1),
            title_cell: CellRef::new(3, 1),
            microcycle_row: 4,
            microcycle_columns: vec![2, 4, 6, 8, 10, 12],
            label_column: 1,
            marker_column: 2,
            resource_column: 4,
            snapshot_width: 14,
            warmup_start: "EN EL CALENTAMIENTO:".to_string(),
            warmup_stop_prefix: "SERIES &".to_string(),
            exercise_section: "SERIES & REPETICIONES TARGET".to_string(),
            rest_label: "Tiempo de pausa entre series".to_string(),
            series_ordinals: (1..=5).map(|n| format!("{}ª serie", n)).collect(),
            header_marker: "X".to_string(),
            series_name_prefix: "serie".to_string(),
        }
    }
}
