//! Sheets command handler

use anyhow::Result;
use colored::*;

use super::SheetsCommands;
use crate::config::Config;
use crate::training::{CalamineSource, SheetRecord, convert_workbook};

pub fn handle_sheets_command(args: SheetsCommands, config: &Config) -> Result<()> {
    let source_path = args.source.unwrap_or_else(|| config.source.clone());
    let mut source = CalamineSource::open(&source_path)?;
    let trainings = convert_workbook(&mut source, &config.layout, &[])?;

    println!(
        "{} ({} sheets)",
        source_path.display().to_string().cyan(),
        trainings.len()
    );

    let width = trainings
        .sheet_names()
        .map(|name| name.chars().count())
        .max()
        .unwrap_or(0);

    for record in trainings.iter() {
        println!("  {}", format_sheet_line(record, width));
    }

    Ok(())
}

fn format_sheet_line(record: &SheetRecord, width: usize) -> String {
    let counts = format!(
        "{} exercises, {} warm-ups, {} microcycles",
        record.exercises.len(),
        record.warmups.len(),
        record.microcycles.len()
    );

    let name = format!("{:<width$}", record.sheet_name, width = width);
    if record.exercises.is_empty() {
        format!("{}  {}", name.yellow(), counts.dimmed())
    } else {
        format!("{}  {}", name.bold(), counts)
    }
}
