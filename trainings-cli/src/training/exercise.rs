//! Exercise section parser
//!
//! After the first exercise-section marker, every header row opens a new
//! exercise. The rows up to the next header belong to it and are sorted into
//! the rest row, per-set series rows and free-text notes.

use super::layout::SheetLayout;
use super::normalize::{cell_text, snapshot};
use super::types::{Exercise, NormalizedRow, RowSnapshot};

/// Whether `row` opens a new exercise
///
/// A header has a non-empty name and a marker cell containing "X". Names
/// starting with "serie" are series rows that happen to carry an "X".
pub fn is_exercise_header(row: &[Option<String>], layout: &SheetLayout) -> bool {
    if row.len() <= layout.label_column.max(layout.marker_column) {
        return false;
    }

    let (Some(name), Some(marker)) = (
        cell_text(row, layout.label_column),
        cell_text(row, layout.marker_column),
    ) else {
        return false;
    };

    marker
        .to_uppercase()
        .contains(&layout.header_marker.to_uppercase())
        && !name
            .to_lowercase()
            .starts_with(&layout.series_name_prefix.to_lowercase())
}

/// Whether a row label names one of the recognised set ordinals ("1ª serie" .. "5ª serie")
pub fn is_series_label(label: Option<&str>, layout: &SheetLayout) -> bool {
    let Some(label) = label else {
        return false;
    };
    let label = label.trim().to_lowercase();
    layout
        .series_ordinals
        .iter()
        .any(|ordinal| label.starts_with(&ordinal.to_lowercase()))
}

/// What a row means while an exercise is open
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowKind {
    /// A repeated section marker; skipped
    SectionMarker,
    /// Next exercise's header; closes the current one
    Header,
    Rest,
    Series,
    Note,
    /// No content at all; dropped
    Blank,
}

/// Classify a row inside an open exercise
pub fn classify_row(row: &NormalizedRow, layout: &SheetLayout) -> RowKind {
    let label = cell_text(row, layout.label_column);

    if label == Some(layout.exercise_section.as_str()) {
        RowKind::SectionMarker
    } else if is_exercise_header(row, layout) {
        RowKind::Header
    } else if label == Some(layout.rest_label.as_str()) {
        RowKind::Rest
    } else if is_series_label(label, layout) {
        RowKind::Series
    } else if snapshot(row, layout.snapshot_width).iter().any(Option::is_some) {
        RowKind::Note
    } else {
        RowKind::Blank
    }
}

/// Accumulates the rows of one exercise until its block ends
#[derive(Debug)]
pub struct ExerciseBuilder {
    name: String,
    header: RowSnapshot,
    notes: Vec<RowSnapshot>,
    series: Vec<RowSnapshot>,
    rest: Option<RowSnapshot>,
}

impl ExerciseBuilder {
    /// Start an exercise from its header row. Returns `None` if the row is not a header.
    pub fn from_header(row: &NormalizedRow, layout: &SheetLayout) -> Option<Self> {
        if !is_exercise_header(row, layout) {
            return None;
        }
        let name = cell_text(row, layout.label_column)?.to_string();
        Some(Self {
            name,
            header: snapshot(row, layout.snapshot_width),
            notes: Vec::new(),
            series: Vec::new(),
            rest: None,
        })
    }

    /// File a data row under the given kind. Markers, headers and blanks are ignored.
    pub fn absorb(&mut self, kind: RowKind, row: &NormalizedRow, layout: &SheetLayout) {
        match kind {
            // Last rest row wins
            RowKind::Rest => self.rest = Some(snapshot(row, layout.snapshot_width)),
            RowKind::Series => self.series.push(snapshot(row, layout.snapshot_width)),
            RowKind::Note => self.notes.push(snapshot(row, layout.snapshot_width)),
            RowKind::SectionMarker | RowKind::Header | RowKind::Blank => {}
        }
    }

    pub fn finish(self) -> Exercise {
        log::debug!(
            "Exercise '{}': {} series, {} notes, rest {}",
            self.name,
            self.series.len(),
            self.notes.len(),
            if self.rest.is_some() { "set" } else { "missing" }
        );
        Exercise {
            name: self.name,
            header: self.header,
            notes: self.notes,
            series: self.series,
            rest: self.rest,
        }
    }
}

/// Scanner state for the exercise section
#[derive(Debug)]
pub enum ScanState {
    /// Looking for the first section marker
    SeekingSection,
    /// In the section, waiting for a header row
    SeekingHeader,
    /// Collecting rows for an open exercise
    InExercise(ExerciseBuilder),
}

/// Parse every exercise in the sheet
///
/// Never fails: a sheet without the section marker has no exercises.
pub fn parse_exercises(rows: &[NormalizedRow], layout: &SheetLayout) -> Vec<Exercise> {
    let mut exercises = Vec::new();
    let mut state = ScanState::SeekingSection;

    for (idx, row) in rows.iter().enumerate() {
        state = match state {
            ScanState::SeekingSection => {
                if cell_text(row, layout.label_column) == Some(layout.exercise_section.as_str()) {
                    log::debug!("Exercise section starts after row {}", idx + 1);
                    ScanState::SeekingHeader
                } else {
                    ScanState::SeekingSection
                }
            }
            ScanState::SeekingHeader => match ExerciseBuilder::from_header(row, layout) {
                Some(builder) => ScanState::InExercise(builder),
                None => ScanState::SeekingHeader,
            },
            ScanState::InExercise(mut builder) => match classify_row(row, layout) {
                RowKind::Header => {
                    exercises.push(builder.finish());
                    match ExerciseBuilder::from_header(row, layout) {
                        Some(next) => ScanState::InExercise(next),
                        None => ScanState::SeekingHeader,
                    }
                }
                RowKind::Blank => {
                    log::trace!("Dropping blank row {}", idx + 1);
                    ScanState::InExercise(builder)
                }
                kind => {
                    builder.absorb(kind, row, layout);
                    ScanState::InExercise(builder)
                }
            },
        };
    }

    match state {
        ScanState::InExercise(builder) => exercises.push(builder.finish()),
        ScanState::SeekingSection => log::debug!("No exercise section marker found"),
        ScanState::SeekingHeader => {}
    }

    exercises
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::training::test_support::{grid, row};

    #[test]
    fn test_header_classifier() {
        let layout = SheetLayout::default();
        assert!(is_exercise_header(&row(&["", "Squat", "X"]), &layout));
        assert!(is_exercise_header(&row(&["", "Press", "3x10"]), &layout));
        assert!(!is_exercise_header(&row(&["", "1ª serie", "X"]), &layout));
        assert!(!is_exercise_header(&row(&["", "Serie final", "X"]), &layout));
        assert!(!is_exercise_header(&row(&["", "Squat", ""]), &layout));
        assert!(!is_exercise_header(&row(&["", "", "X"]), &layout));
        assert!(!is_exercise_header(&row(&["", "Squat"]), &layout));
    }

    #[test]
    fn test_series_label() {
        let layout = SheetLayout::default();
        assert!(is_series_label(Some("1ª serie"), &layout));
        assert!(is_series_label(Some("3ª SERIE (top set)"), &layout));
        assert!(is_series_label(Some("5ª serie"), &layout));
        assert!(!is_series_label(Some("6ª serie"), &layout));
        assert!(!is_series_label(Some("serie 1"), &layout));
        assert!(!is_series_label(None, &layout));
    }

    #[test]
    fn test_two_exercises() {
        let rows = grid(&[
            &["", "SERIES & REPETICIONES TARGET"],
            &["", "Squat", "X"],
            &["", "1ª serie", "5", "10"],
            &["", "Tiempo de pausa entre series", "60s"],
            &["", "Deadlift", "X"],
        ]);

        let exercises = parse_exercises(&rows, &SheetLayout::default());
        assert_eq!(exercises.len(), 2);
        assert_eq!(exercises[0].name, "Squat");
        assert_eq!(exercises[1].name, "Deadlift");

        let squat = &exercises[0];
        assert_eq!(squat.series.len(), 1);
        assert_eq!(squat.series[0][3].as_deref(), Some("10"));
        assert!(squat.rest.is_some());
        assert!(squat.notes.is_empty());
        assert_eq!(squat.header.len(), 14);

        let deadlift = &exercises[1];
        assert!(deadlift.series.is_empty());
        assert!(deadlift.rest.is_none());
    }

    #[test]
    fn test_no_section_marker() {
        let rows = grid(&[&["", "Squat", "X"], &["", "1ª serie", "5"]]);
        assert!(parse_exercises(&rows, &SheetLayout::default()).is_empty());
    }

    #[test]
    fn test_rows_before_first_header_ignored() {
        let rows = grid(&[
            &["", "SERIES & REPETICIONES TARGET"],
            &["", "Intro text"],
            &["", "1ª serie", "X"],
            &["", "Bench", "X"],
            &["", "1ª serie", "8"],
        ]);

        let exercises = parse_exercises(&rows, &SheetLayout::default());
        assert_eq!(exercises.len(), 1);
        assert_eq!(exercises[0].name, "Bench");
        assert_eq!(exercises[0].series.len(), 1);
    }

    #[test]
    fn test_notes_markers_and_blanks() {
        let rows = grid(&[
            &["", "SERIES & REPETICIONES TARGET"],
            &["", "Row", "X"],
            &["", "SERIES & REPETICIONES TARGET", "X"],
            &[],
            &["", "", "", "", "", "", "", "", "", "", "", "", "", "", "beyond snapshot"],
            &["", "Keep elbows tucked"],
            &["", "6ª serie", "4"],
            &["", "2ª serie", "8"],
        ]);

        let exercises = parse_exercises(&rows, &SheetLayout::default());
        assert_eq!(exercises.len(), 1);

        let row_ex = &exercises[0];
        assert_eq!(row_ex.series.len(), 1);
        assert_eq!(row_ex.series[0][1].as_deref(), Some("2ª serie"));
        assert_eq!(row_ex.notes.len(), 2);
        assert_eq!(row_ex.notes[0][1].as_deref(), Some("Keep elbows tucked"));
        assert_eq!(row_ex.notes[1][1].as_deref(), Some("6ª serie"));
    }

    #[test]
    fn test_last_rest_row_wins() {
        let rows = grid(&[
            &["", "SERIES & REPETICIONES TARGET"],
            &["", "Squat", "X"],
            &["", "Tiempo de pausa entre series", "60s"],
            &["", "Tiempo de pausa entre series", "90s"],
        ]);

        let exercises = parse_exercises(&rows, &SheetLayout::default());
        let rest = exercises[0].rest.as_ref().unwrap();
        assert_eq!(rest[2].as_deref(), Some("90s"));
    }

    #[test]
    fn test_classify_row() {
        let layout = SheetLayout::default();
        assert_eq!(
            classify_row(&row(&["", "SERIES & REPETICIONES TARGET"]), &layout),
            RowKind::SectionMarker
        );
        assert_eq!(classify_row(&row(&["", "Lunge", "x"]), &layout), RowKind::Header);
        assert_eq!(
            classify_row(&row(&["", "Tiempo de pausa entre series"]), &layout),
            RowKind::Rest
        );
        assert_eq!(classify_row(&row(&["", "4ª serie"]), &layout), RowKind::Series);
        assert_eq!(classify_row(&row(&["note"]), &layout), RowKind::Note);
        assert_eq!(classify_row(&row(&["", ""]), &layout), RowKind::Blank);
    }
}
