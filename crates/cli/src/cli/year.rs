//! Year and weekday CLI commands.

use clap::Parser;

/// Arguments of the `year` command.
#[derive(Debug, Parser)]
pub struct YearArgs {
    /// Gregorian year (proleptic for years before 1582).
    pub year: i32,
}

/// Arguments of the `weekday` command.
#[derive(Debug, Parser)]
pub struct WeekdayArgs {
    /// Gregorian year.
    pub year: i32,
    /// Month (1-12).
    pub month: u32,
    /// Day of the month.
    pub day: u32,
}
