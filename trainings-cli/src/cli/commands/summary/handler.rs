//! Summary command handler

use anyhow::{Context, Result};
use colored::*;

use super::SummaryCommands;
use crate::config::Config;
use crate::training::{CalamineSource, PlanSummary, convert_workbook, summarize};

pub fn handle_summary_command(args: SummaryCommands, config: &Config) -> Result<()> {
    let source_path = args.source.unwrap_or_else(|| config.source.clone());
    let mut source = CalamineSource::open(&source_path)?;
    let trainings = convert_workbook(&mut source, &config.layout, &[])?;
    let summary = summarize(&trainings)?;

    if args.json {
        let json =
            serde_json::to_string_pretty(&summary).context("Failed to serialize summary")?;
        println!("{}", json);
    } else {
        print_summary(&summary);
    }

    Ok(())
}

fn print_summary(summary: &PlanSummary) {
    println!("{}", summary.macrocycle.bright_green().bold());
    println!("  {}", summary.mesocycle.bold());
    println!("  Phase: {}", summary.phase.cyan());
    println!("  Type:  {}", summary.training_type.cyan());
    println!();

    for session in &summary.sessions {
        println!(
            "  {} {}",
            session.sheet.bold(),
            format!("({})", session.title).dimmed()
        );
        println!(
            "    {} exercises, {} warm-ups",
            session.exercise_count, session.warmup_count
        );
        if !session.microcycles.is_empty() {
            println!("    Microcycles: {}", session.microcycles.join(", "));
        }
    }
}
