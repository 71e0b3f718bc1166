//! Microcycle labels from the sheet's header row

use super::layout::SheetLayout;
use super::normalize::cell_text;
use super::types::NormalizedRow;

/// Read the microcycle labels in column order, skipping empty label cells
///
/// A sheet too short to have the label row yields no labels.
pub fn extract_microcycle_labels(rows: &[NormalizedRow], layout: &SheetLayout) -> Vec<String> {
    let Some(header_row) = rows.get(layout.microcycle_row) else {
        return Vec::new();
    };

    layout
        .microcycle_columns
        .iter()
        .filter_map(|&col| cell_text(header_row, col))
        .map(str::to_string)
        .collect()
}
