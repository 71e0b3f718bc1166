//! Command-line interface

pub mod commands;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::config::Config;
use commands::convert::{ConvertCommands, handle_convert_command};
use commands::sheets::{SheetsCommands, handle_sheets_command};
use commands::summary::{SummaryCommands, handle_summary_command};

#[derive(Parser)]
#[command(
    name = "trainings-cli",
    version,
    about = "Convert training-plan workbooks into structured JSON",
    long_about = "Reads every sheet of a training-plan workbook (phase, microcycles, warm-up and exercise blocks) and writes one JSON document keyed by sheet name"
)]
pub struct Cli {
    /// Config file (defaults to <config dir>/trainings-cli/config.toml when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Convert the workbook and write the JSON document
    Convert(ConvertCommands),
    /// List the workbook's sheets with what was found in each
    Sheets(SheetsCommands),
    /// Show the planning summary (macrocycle, mesocycle, sessions)
    Summary(SummaryCommands),
}

pub fn run(command: Commands, config: &Config) -> Result<()> {
    match command {
        Commands::Convert(args) => handle_convert_command(args, config),
        Commands::Sheets(args) => handle_sheets_command(args, config),
        Commands::Summary(args) => handle_summary_command(args, config),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_convert_args() {
        let cli = Cli::try_parse_from([
            "trainings-cli",
            "-vv",
            "convert",
            "--source",
            "plan.xlsx",
            "--sheet",
            "Día 1",
            "--sheet",
            "Día 2",
            "--stdout",
        ])
        .unwrap();

        assert_eq!(cli.verbose, 2);
        match cli.command {
            Commands::Convert(args) => {
                assert_eq!(args.source, Some(PathBuf::from("plan.xlsx")));
                assert_eq!(args.sheet, vec!["Día 1", "Día 2"]);
                assert!(args.stdout);
                assert_eq!(args.output, None);
            }
            _ => panic!("expected convert command"),
        }
    }

    #[test]
    fn test_stdout_conflicts_with_output() {
        let result = Cli::try_parse_from([
            "trainings-cli",
            "convert",
            "--stdout",
            "--output",
            "out.json",
        ]);
        assert!(result.is_err());
    }
}
