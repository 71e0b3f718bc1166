//! Warm-up block parser
//!
//! The block opens on the row whose label is exactly the warm-up sentinel and
//! closes on the first row with an empty label or a label starting with the
//! exercise-section prefix. Every row in between is one entry.

use super::layout::SheetLayout;
use super::normalize::cell_text;
use super::types::{NormalizedRow, WarmupEntry};

/// Scanner state for the warm-up block
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WarmupState {
    /// Sentinel not seen yet
    Outside,
    /// Collecting entries
    Inside,
    /// Block closed; no further rows are read
    Done,
}

/// Advance the scanner by one row, returning the next state and any entry the row produced
pub fn step(
    state: WarmupState,
    row: &NormalizedRow,
    layout: &SheetLayout,
) -> (WarmupState, Option<WarmupEntry>) {
    let text = cell_text(row, layout.label_column);

    match state {
        WarmupState::Done => (WarmupState::Done, None),
        // A repeated sentinel re-opens the block without producing an entry
        _ if text == Some(layout.warmup_start.as_str()) => (WarmupState::Inside, None),
        WarmupState::Outside => (WarmupState::Outside, None),
        WarmupState::Inside => match text {
            None => (WarmupState::Done, None),
            Some(t) if t.starts_with(&layout.warmup_stop_prefix) => (WarmupState::Done, None),
            Some(t) => {
                let entry = WarmupEntry {
                    description: t.to_string(),
                    resource: cell_text(row, layout.resource_column).map(str::to_string),
                };
                (WarmupState::Inside, Some(entry))
            }
        },
    }
}

/// Collect the sheet's warm-up entries in row order
pub fn parse_warmups(rows: &[NormalizedRow], layout: &SheetLayout) -> Vec<WarmupEntry> {
    let mut state = WarmupState::Outside;
    let mut warmups = Vec::new();

    for (idx, row) in rows.iter().enumerate() {
        let (next, entry) = step(state, row, layout);
        if state == WarmupState::Outside && next == WarmupState::Inside {
            log::debug!("Warm-up block opens at row {}", idx + 1);
        }
        if let Some(entry) = entry {
            warmups.push(entry);
        }
        if next == WarmupState::Done {
            log::debug!("Warm-up block closes at row {} ({} entries)", idx + 1, warmups.len());
            break;
        }
        state = next;
    }

    warmups
}
