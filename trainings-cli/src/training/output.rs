//! JSON rendering of converted trainings

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use super::types::TrainingMap;

/// Pretty-printed JSON (2-space indent, non-ASCII text kept verbatim)
pub fn render_json(trainings: &TrainingMap) -> Result<String> {
    serde_json::to_string_pretty(trainings).context("Failed to serialize trainings")
}

/// Write the JSON document, creating parent directories as needed
pub fn write_json(trainings: &TrainingMap, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    let json = render_json(trainings)?;
    fs::write(path, json).with_context(|| format!("Failed to write output to: {}", path.display()))?;

    log::info!("Wrote {} sheets to {}", trainings.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::training::types::{Exercise, SheetRecord, WarmupEntry};

    fn sample() -> TrainingMap {
        let mut trainings = TrainingMap::new();
        trainings.insert(SheetRecord {
            sheet_name: "Día 1".to_string(),
            phase: Some("FASE ACUMULACION".to_string()),
            title: None,
            microcycles: vec!["M1".to_string()],
            warmups: vec![WarmupEntry {
                description: "Movilidad".to_string(),
                resource: None,
            }],
            exercises: vec![Exercise {
                name: "Sentadilla".to_string(),
                header: vec![None, Some("Sentadilla".to_string()), Some("X".to_string())],
                notes: vec![],
                series: vec![vec![None, Some("1ª serie".to_string())]],
                rest: None,
            }],
        });
        trainings
    }

    #[test]
    fn test_render_keeps_non_ascii() {
        let json = render_json(&sample()).unwrap();
        assert!(json.contains("\"Día 1\": {"));
        assert!(json.contains("1ª serie"));
        assert!(!json.contains("\\u"));
    }

    #[test]
    fn test_render_shape() {
        let json = render_json(&sample()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        let day = &value["Día 1"];
        assert_eq!(day["sheet"], "Día 1");
        assert!(day["title"].is_null());
        assert_eq!(day["warmups"][0]["resource"], serde_json::Value::Null);
        assert_eq!(day["exercises"][0]["header"][0], serde_json::Value::Null);
        assert!(day["exercises"][0]["rest"].is_null());
        assert_eq!(day["exercises"][0]["notes"].as_array().unwrap().len(), 0);
    }

    #[test]
    fn test_write_creates_parent_dirs() {
        let dir = std::env::temp_dir().join(format!("trainings-cli-out-{}", std::process::id()));
        let path = dir.join("public").join("data").join("trainings.json");

        write_json(&sample(), &path).unwrap();
        let written = fs::read_to_string(&path).unwrap();
        fs::remove_dir_all(&dir).ok();

        assert!(written.starts_with("{\n  \"Día 1\""));
    }
}
