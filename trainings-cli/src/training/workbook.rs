//! Workbook driver
//!
//! Reads every sheet through a [`GridSource`], normalizes its grid and hands
//! it to the sheet parser. Only this module touches calamine.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use calamine::{Data, Range, Reader, Sheets, open_workbook_auto};

use super::layout::SheetLayout;
use super::normalize::normalize_grid;
use super::sheet::parse_sheet;
use super::types::TrainingMap;

/// Provider of raw sheet grids, in workbook order
pub trait GridSource {
    fn sheet_names(&self) -> Vec<String>;

    /// Raw rows of a sheet, anchored at A1 (row 0, column 0)
    fn sheet_rows(&mut self, sheet_name: &str) -> Result<Vec<Vec<Data>>>;
}

/// Any workbook format calamine can open (.xlsx, .xlsm, .xlsb, .xls, .ods)
pub struct CalamineSource {
    path: PathBuf,
    workbook: Sheets<BufReader<File>>,
}

impl CalamineSource {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            bail!("Source workbook not found: {}", path.display());
        }

        let workbook = open_workbook_auto(path)
            .with_context(|| format!("Failed to open workbook: {}", path.display()))?;

        Ok(Self {
            path: path.to_path_buf(),
            workbook,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl GridSource for CalamineSource {
    fn sheet_names(&self) -> Vec<String> {
        self.workbook.sheet_names()
    }

    fn sheet_rows(&mut self, sheet_name: &str) -> Result<Vec<Vec<Data>>> {
        let range = self
            .workbook
            .worksheet_range(sheet_name)
            .with_context(|| {
                format!(
                    "Failed to read sheet '{}' from {}",
                    sheet_name,
                    self.path.display()
                )
            })?;

        Ok(anchored_rows(&range))
    }
}

/// Expand a range back to absolute coordinates
///
/// calamine trims leading empty rows and columns, which would shift every
/// fixed cell position the parser relies on.
fn anchored_rows(range: &Range<Data>) -> Vec<Vec<Data>> {
    let Some((start_row, start_col)) = range.start() else {
        return Vec::new();
    };

    let mut rows: Vec<Vec<Data>> = (0..start_row).map(|_| Vec::new()).collect();
    for row in range.rows() {
        let mut cells = vec![Data::Empty; start_col as usize];
        cells.extend_from_slice(row);
        rows.push(cells);
    }
    rows
}

/// Parse the selected sheets (all of them when `only` is empty) into a [`TrainingMap`]
pub fn convert_workbook<S: GridSource>(
    source: &mut S,
    layout: &SheetLayout,
    only: &[String],
) -> Result<TrainingMap> {
    let sheet_names = source.sheet_names();

    for wanted in only {
        if !sheet_names.contains(wanted) {
            bail!(
                "Sheet '{}' not found (available: {})",
                wanted,
                sheet_names.join(", ")
            );
        }
    }

    let mut trainings = TrainingMap::new();
    for sheet_name in sheet_names {
        if !only.is_empty() && !only.contains(&sheet_name) {
            log::debug!("Skipping sheet '{}'", sheet_name);
            continue;
        }

        let raw = source.sheet_rows(&sheet_name)?;
        let rows = normalize_grid(&raw);
        let record = parse_sheet(&sheet_name, &rows, layout);

        if record.exercises.is_empty() {
            log::warn!("Sheet '{}' has no exercises", sheet_name);
        }
        log::info!(
            "Parsed sheet '{}': {} rows, {} microcycles, {} warm-ups, {} exercises",
            sheet_name,
            rows.len(),
            record.microcycles.len(),
            record.warmups.len(),
            record.exercises.len()
        );

        trainings.insert(record);
    }

    if trainings.is_empty() {
        log::warn!("No sheets converted");
    }

    Ok(trainings)
}
