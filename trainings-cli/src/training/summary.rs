//! Planning summary derived from converted trainings
//!
//! The macrocycle, mesocycle and training type are read from the first
//! sheet's title, e.g. "I MACROCICLO - 10ºMESOCICLO (MIX OF LOADS 2)".

use anyhow::{Result, bail};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use super::types::TrainingMap;

static MACROCYCLE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)([IVX]+)\s*MACROCICLO").expect("valid macrocycle regex"));
static MESOCYCLE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(\d+)[º°]\s*MESOCICLO").expect("valid mesocycle regex"));
static TRAINING_TYPE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\(([^)]+)\)").expect("valid training type regex"));

const DEFAULT_MACROCYCLE: &str = "MACROCICLO PRINCIPAL";
const DEFAULT_MESOCYCLE: &str = "MESOCICLO PRINCIPAL";
const DEFAULT_TRAINING_TYPE: &str = "PLAN DE ENTRENAMIENTO";
const DEFAULT_PHASE: &str = "FASE ACUMULACION";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlanSummary {
    pub macrocycle: String,
    pub mesocycle: String,
    pub phase: String,
    pub training_type: String,
    pub sessions: Vec<SessionSummary>,
}

/// One sheet, seen as a training session
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionSummary {
    pub sheet: String,
    pub title: String,
    pub microcycles: Vec<String>,
    pub warmup_count: usize,
    pub exercise_count: usize,
}

pub fn summarize(trainings: &TrainingMap) -> Result<PlanSummary> {
    let Some(first) = trainings.first() else {
        bail!("No trainings found in workbook");
    };

    let title = first.title.as_deref().unwrap_or("");

    let macrocycle = MACROCYCLE_RE
        .captures(title)
        .map(|caps| format!("{} MACROCICLO", &caps[1]))
        .unwrap_or_else(|| DEFAULT_MACROCYCLE.to_string());

    let mesocycle = MESOCYCLE_RE
        .captures(title)
        .map(|caps| format!("{}º MESOCICLO", &caps[1]))
        .unwrap_or_else(|| DEFAULT_MESOCYCLE.to_string());

    let training_type = TRAINING_TYPE_RE
        .captures(title)
        .map(|caps| caps[1].to_string())
        .unwrap_or_else(|| DEFAULT_TRAINING_TYPE.to_string());

    let phase = first
        .phase
        .clone()
        .unwrap_or_else(|| DEFAULT_PHASE.to_string());

    let sessions = trainings
        .iter()
        .map(|record| SessionSummary {
            sheet: record.sheet_name.clone(),
            title: record
                .title
                .clone()
                .unwrap_or_else(|| record.sheet_name.clone()),
            microcycles: record.microcycles.clone(),
            warmup_count: record.warmups.len(),
            exercise_count: record.exercises.len(),
        })
        .collect();

    Ok(PlanSummary {
        macrocycle,
        mesocycle,
        phase,
        training_type,
        sessions,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::training::types::SheetRecord;

    fn record(name: &str, phase: Option<&str>, title: Option<&str>) -> SheetRecord {
        SheetRecord {
            sheet_name: name.to_string(),
            phase: phase.map(str::to_string),
            title: title.map(str::to_string),
            microcycles: vec!["M1".to_string(), "M2".to_string()],
            warmups: vec![],
            exercises: vec![],
        }
    }

    #[test]
    fn test_summary_from_title() {
        let mut trainings = TrainingMap::new();
        trainings.insert(record(
            "Día 1",
            Some("FASE INTENSIFICACION"),
            Some("I MACROCICLO - 10ºMesociclo (MIX OF LOADS 2)"),
        ));
        trainings.insert(record("Día 2", None, None));

        let summary = summarize(&trainings).unwrap();
        assert_eq!(summary.macrocycle, "I MACROCICLO");
        assert_eq!(summary.mesocycle, "10º MESOCICLO");
        assert_eq!(summary.training_type, "MIX OF LOADS 2");
        assert_eq!(summary.phase, "FASE INTENSIFICACION");
        assert_eq!(summary.sessions.len(), 2);
        assert_eq!(summary.sessions[1].title, "Día 2");
        assert_eq!(summary.sessions[0].microcycles, vec!["M1", "M2"]);
    }

    #[test]
    fn test_summary_defaults() {
        let mut trainings = TrainingMap::new();
        trainings.insert(record("Hoja1", None, Some("Plan sin formato")));

        let summary = summarize(&trainings).unwrap();
        assert_eq!(summary.macrocycle, "MACROCICLO PRINCIPAL");
        assert_eq!(summary.mesocycle, "MESOCICLO PRINCIPAL");
        assert_eq!(summary.training_type, "PLAN DE ENTRENAMIENTO");
        assert_eq!(summary.phase, "FASE ACUMULACION");
    }

    #[test]
    fn test_summary_requires_sheets() {
        assert!(summarize(&TrainingMap::new()).is_err());
    }
}
