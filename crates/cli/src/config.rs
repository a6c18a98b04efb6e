use std::env;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use almanac_core::providers::StaticHolidays;
use clap::ValueEnum;
use tracing::info;

use crate::cli::{Cli, EraSystem};
use crate::error::Result;
use crate::session;

/// CLI configuration loaded from environment variables and flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Weekday algorithm identifier (default: "sakamoto")
    pub algorithm: String,
    /// Holiday file to install (default: none)
    pub holidays_path: Option<PathBuf>,
    /// Era system to install (default: none)
    pub era: EraSystem,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `ALMANAC_ALGORITHM` - Weekday algorithm (default: "sakamoto")
    /// - `ALMANAC_HOLIDAYS` - Path to a JSON holiday file (default: none)
    /// - `ALMANAC_ERA` - Era system, `none` or `japanese` (default: "none")
    pub fn from_env() -> Self {
        Self::from_vars(|key| env::var(key).ok())
    }

    fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            algorithm: var("ALMANAC_ALGORITHM").unwrap_or_else(|| "sakamoto".to_string()),
            holidays_path: var("ALMANAC_HOLIDAYS")
                .filter(|v| !v.trim().is_empty())
                .map(PathBuf::from),
            era: var("ALMANAC_ERA")
                .and_then(|v| EraSystem::from_str(&v, true).ok())
                .unwrap_or_default(),
        }
    }

    /// Applies command line flags on top of this configuration.
    pub fn with_overrides(mut self, cli: &Cli) -> Self {
        if let Some(algorithm) = &cli.algorithm {
            self.algorithm = algorithm.clone();
        }
        if let Some(path) = &cli.holidays {
            self.holidays_path = Some(path.clone());
        }
        if let Some(era) = cli.era {
            self.era = era;
        }
        self
    }

    /// Installs this configuration as the process-wide default.
    pub fn apply(&self) -> Result<()> {
        session::set_algorithm(&self.algorithm)?;
        if let Some(path) = &self.holidays_path {
            session::install_holidays(Arc::new(load_holidays(path)?));
        }
        session::install_era_converter(self.era.converter());
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

/// Reads a `"month-day"` keyed holiday file.
pub fn load_holidays(path: &Path) -> Result<StaticHolidays> {
    let file = File::open(path)?;
    let holidays: StaticHolidays = serde_json::from_reader(BufReader::new(file))?;
    info!(count = holidays.len(), path = %path.display(), "loaded holidays");
    Ok(holidays)
}
