//! Sheet assembly

use super::exercise::parse_exercises;
use super::layout::{CellRef, SheetLayout};
use super::microcycles::extract_microcycle_labels;
use super::normalize::cell_text;
use super::types::{NormalizedRow, SheetRecord};
use super::warmup::parse_warmups;

/// Build the record for one sheet from its normalized grid
pub fn parse_sheet(sheet_name: &str, rows: &[NormalizedRow], layout: &SheetLayout) -> SheetRecord {
    SheetRecord {
        sheet_name: sheet_name.to_string(),
        phase: fixed_cell(rows, layout.phase_cell),
        title: fixed_cell(rows, layout.title_cell),
        microcycles: extract_microcycle_labels(rows, layout),
        warmups: parse_warmups(rows, layout),
        exercises: parse_exercises(rows, layout),
    }
}

fn fixed_cell(rows: &[NormalizedRow], at: CellRef) -> Option<String> {
    rows.get(at.row)
        .and_then(|row| cell_text(row, at.col))
        .map(str::to_string)
}
