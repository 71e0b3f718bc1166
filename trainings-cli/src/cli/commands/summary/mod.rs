//! `summary` command

mod handler;

use std::path::PathBuf;

use clap::Args;

pub use handler::handle_summary_command;

#[derive(Args, Debug)]
pub struct SummaryCommands {
    /// Workbook to read (overrides config and TRAININGS_SOURCE)
    #[arg(short, long)]
    pub source: Option<PathBuf>,

    /// Print the summary as JSON
    #[arg(long)]
    pub json: bool,
}
