//! `sheets` command

mod handler;

use std::path::PathBuf;

use clap::Args;

pub use handler::handle_sheets_command;

#[derive(Args, Debug)]
pub struct SheetsCommands {
    /// Workbook to read (overrides config and TRAININGS_SOURCE)
    #[arg(short, long)]
    pub source: Option<PathBuf>,
}
