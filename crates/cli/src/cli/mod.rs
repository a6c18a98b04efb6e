//! CLI command definitions.

pub mod era;
pub mod year;

use clap::{Parser, Subcommand, ValueEnum};

pub use era::{EraSystem, FromEraArgs};
pub use year::{WeekdayArgs, YearArgs};

/// Generate annotated calendar data for a year.
#[derive(Debug, Parser)]
#[command(name = "almanac")]
#[command(version, about = "Generate annotated calendar data for a year", long_about = None)]
pub struct Cli {
    /// Weekday algorithm (overrides ALMANAC_ALGORITHM).
    #[arg(long, global = true)]
    pub algorithm: Option<String>,

    /// JSON file of "month-day" keyed holidays (overrides ALMANAC_HOLIDAYS).
    #[arg(long, global = true)]
    pub holidays: Option<std::path::PathBuf>,

    /// Era system used to annotate days (overrides ALMANAC_ERA).
    #[arg(long, global = true)]
    pub era: Option<EraSystem>,

    /// Output format.
    #[arg(long, global = true, default_value = "pretty")]
    pub format: OutputFormat,

    /// Increase log verbosity (-v, -vv, -vvv).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Pretty-printed JSON.
    Json,
    /// One row per day.
    Csv,
    /// YAML document.
    Yaml,
    /// Human-readable listing.
    #[default]
    Pretty,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Build the calendar data of a year.
    Year(YearArgs),
    /// Print the weekday of a single date.
    Weekday(WeekdayArgs),
    /// List the available weekday algorithms.
    Algorithms,
    /// Convert an era date to a Gregorian date.
    FromEra(FromEraArgs),
}
