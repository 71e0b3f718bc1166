//! `convert` command

mod handler;

use std::path::PathBuf;

use clap::Args;

pub use handler::handle_convert_command;

#[derive(Args, Debug)]
pub struct ConvertCommands {
    /// Workbook to read (overrides config and TRAININGS_SOURCE)
    #[arg(short, long)]
    pub source: Option<PathBuf>,

    /// JSON file to write (overrides config and TRAININGS_OUTPUT)
    #[arg(short, long, conflicts_with = "stdout")]
    pub output: Option<PathBuf>,

    /// Only convert these sheets (repeatable)
    #[arg(long, value_name = "NAME")]
    pub sheet: Vec<String>,

    /// Print the JSON document instead of writing it
    #[arg(long)]
    pub stdout: bool,
}
