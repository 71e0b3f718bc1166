//! Training-plan workbook parsing
//!
//! Each sheet is one training session laid out as:
//! - phase and title in fixed cells near the top
//! - a row of microcycle labels
//! - an optional warm-up block opened by a sentinel label
//! - an exercise section of header rows, each followed by its series, rest and note rows

pub mod exercise;
pub mod layout;
pub mod microcycles;
pub mod normalize;
pub mod output;
pub mod sheet;
pub mod summary;
pub mod types;
pub mod warmup;
pub mod workbook;

pub use layout::SheetLayout;
pub use output::{render_json, write_json};
pub use summary::{PlanSummary, summarize};
pub use types::SheetRecord;
pub use workbook::{CalamineSource, convert_workbook};
