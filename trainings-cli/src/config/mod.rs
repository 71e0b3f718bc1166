//! Configuration
//!
//! Values are resolved in order, later sources winning:
//! defaults, the TOML config file, `TRAININGS_*` environment variables
//! (a `.env` file is loaded first), then command-line flags.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};

use crate::training::SheetLayout;

pub const SOURCE_ENV: &str = "TRAININGS_SOURCE";
pub const OUTPUT_ENV: &str = "TRAININGS_OUTPUT";

const DEFAULT_SOURCE: &str = "(10ºMesociclo) MIX OF LOADS II    11-09-23.xlsx";
const DEFAULT_OUTPUT: &str = "public/data/trainings.json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Workbook to convert
    pub source: PathBuf,
    /// Where the JSON document is written
    pub output: PathBuf,
    /// Sheet layout overrides
    pub layout: SheetLayout,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source: PathBuf::from(DEFAULT_SOURCE),
            output: PathBuf::from(DEFAULT_OUTPUT),
            layout: SheetLayout::default(),
        }
    }
}

impl Config {
    /// Load from `explicit` (must exist) or the default location (if present), then apply the environment
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let mut config = match explicit {
            Some(path) => {
                if !path.exists() {
                    bail!("Config file does not exist: {}", path.display());
                }
                Self::from_file(path)?
            }
            None => match default_config_path().filter(|p| p.exists()) {
                Some(path) => Self::from_file(&path)?,
                None => Self::default(),
            },
        };

        config.apply_env(|key| std::env::var(key).ok());
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        log::debug!("Loaded config from {}", path.display());
        Self::from_toml_str(&content)
            .with_context(|| format!("Invalid config file: {}", path.display()))
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse TOML")
    }

    /// Override paths from environment variables, looked up through `lookup`
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(source) = lookup(SOURCE_ENV).filter(|v| !v.trim().is_empty()) {
            self.source = PathBuf::from(source);
        }
        if let Some(output) = lookup(OUTPUT_ENV).filter(|v| !v.trim().is_empty()) {
            self.output = PathBuf::from(output);
        }
    }
}

/// `~/.config/trainings-cli/config.toml` (platform equivalent)
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("trainings-cli").join("config.toml"))
}
