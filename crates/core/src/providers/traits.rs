use crate::calendar::{CalendarDate, EraTag};

use super::error::EraError;
use super::types::HolidayMap;

/// Source of holidays for the year-data builder.
pub trait HolidayProvider: Send + Sync {
    /// Returns every holiday of `year`.
    ///
    /// Never fails: a year without holidays yields an empty map.
    fn holidays_for_year(&self, year: i32) -> HolidayMap;
}

/// Converts between Gregorian dates and a named era system.
pub trait EraConverter: Send + Sync {
    /// Returns the era of a Gregorian date, or `None` when the date is not covered.
    fn to_era(&self, year: i32, month: u32, day: u32) -> Option<EraTag>;

    /// Resolves a date given in era years to its Gregorian date.
    fn from_era(
        &self,
        era: &str,
        era_year: i32,
        month: u32,
        day: u32,
    ) -> Result<CalendarDate, EraError>;
}
