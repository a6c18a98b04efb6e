//! Era CLI commands.

use std::sync::Arc;

use almanac_core::providers::{EraTable, NoEras};
use almanac_core::EraConverter;
use clap::{Parser, ValueEnum};

/// Era systems the CLI can install.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum EraSystem {
    /// No era annotations.
    #[default]
    None,
    /// Modern Japanese eras (Meiji onwards).
    Japanese,
}

impl EraSystem {
    /// Builds the converter for this era system.
    pub fn converter(self) -> Arc<dyn EraConverter> {
        match self {
            EraSystem::None => Arc::new(NoEras),
            EraSystem::Japanese => Arc::new(EraTable::japanese()),
        }
    }
}

/// Arguments of the `from-era` command.
#[derive(Debug, Parser)]
pub struct FromEraArgs {
    /// Era name (e.g. Reiwa).
    pub era: String,
    /// Year within the era, starting at 1.
    pub era_year: i32,
    /// Month (1-12).
    pub month: u32,
    /// Day of the month.
    pub day: u32,
}
