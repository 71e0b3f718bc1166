//! Output records produced by the sheet parser

use serde::Serialize;
use serde::ser::{SerializeMap, Serializer};

/// A normalized cell: absent, or non-empty trimmed text
pub type Cell = Option<String>;

/// A row of normalized cells, indexed from 0. Rows may be ragged.
pub type NormalizedRow = Vec<Cell>;

/// The first `snapshot_width` normalized cells of a row, padded with absent cells
pub type RowSnapshot = Vec<Cell>;

/// One entry of a sheet's warm-up block
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WarmupEntry {
    pub description: String,
    pub resource: Option<String>,
}

/// One exercise block and the rows it owns
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Exercise {
    pub name: String,
    /// Snapshot of the header row itself
    pub header: RowSnapshot,
    /// Free-text rows with at least one non-empty cell
    pub notes: Vec<RowSnapshot>,
    /// "Nª serie" rows, in sheet order
    pub series: Vec<RowSnapshot>,
    /// The rest-interval row, if any
    pub rest: Option<RowSnapshot>,
}

/// Everything recovered from a single sheet
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SheetRecord {
    #[serde(rename = "sheet")]
    pub sheet_name: String,
    pub phase: Option<String>,
    pub title: Option<String>,
    pub microcycles: Vec<String>,
    pub warmups: Vec<WarmupEntry>,
    pub exercises: Vec<Exercise>,
}

/// Sheet records keyed by sheet name, in workbook order
///
/// Serializes as a JSON object whose keys follow insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrainingMap {
    records: Vec<SheetRecord>,
}

impl TrainingMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record, replacing any existing record with the same sheet name in place
    pub fn insert(&mut self, record: SheetRecord) {
        match self
            .records
            .iter_mut()
            .find(|r| r.sheet_name == record.sheet_name)
        {
            Some(existing) => *existing = record,
            None => self.records.push(record),
        }
    }

    #[cfg(test)]
    pub fn get(&self, sheet_name: &str) -> Option<&SheetRecord> {
        self.records.iter().find(|r| r.sheet_name == sheet_name)
    }

    pub fn first(&self) -> Option<&SheetRecord> {
        self.records.first()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SheetRecord> {
        self.records.iter()
    }

    pub fn sheet_names(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(|r| r.sheet_name.as_str())
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl Serialize for TrainingMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.records.len()))?;
        for record in &self.records {
            map.serialize_entry(&record.sheet_name, record)?;
        }
        map.end()
    }
}
