//! Convert command handler

use std::time::Instant;

use anyhow::Result;
use colored::*;

use super::ConvertCommands;
use crate::config::Config;
use crate::training::{CalamineSource, convert_workbook, render_json, write_json};

/// Convert the workbook and write (or print) the JSON document
pub fn handle_convert_command(args: ConvertCommands, config: &Config) -> Result<()> {
    let source_path = args.source.unwrap_or_else(|| config.source.clone());
    let output_path = args.output.unwrap_or_else(|| config.output.clone());

    // Fails before any parsing when the workbook is missing
    let mut source = CalamineSource::open(&source_path)?;
    log::info!("Reading workbook: {}", source.path().display());

    let start = Instant::now();
    let trainings = convert_workbook(&mut source, &config.layout, &args.sheet)?;
    log::info!(
        "Converted {} sheets in {:.2}ms",
        trainings.len(),
        start.elapsed().as_secs_f64() * 1000.0
    );

    if args.stdout {
        println!("{}", render_json(&trainings)?);
        return Ok(());
    }

    write_json(&trainings, &output_path)?;
    println!(
        "Wrote {}",
        output_path.display().to_string().bright_green()
    );

    Ok(())
}
