//! No-op providers used when nothing else is configured.

use crate::calendar::{CalendarDate, EraTag};

use super::error::EraError;
use super::traits::{EraConverter, HolidayProvider};
use super::types::HolidayMap;

/// Holiday provider that knows no holidays.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoHolidays;

impl HolidayProvider for NoHolidays {
    fn holidays_for_year(&self, _year: i32) -> HolidayMap {
        HolidayMap::new()
    }
}

/// Era converter for a calendar without an era system.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoEras;

impl EraConverter for NoEras {
    fn to_era(&self, _year: i32, _month: u32, _day: u32) -> Option<EraTag> {
        None
    }

    fn from_era(
        &self,
        _era: &str,
        _era_year: i32,
        _month: u32,
        _day: u32,
    ) -> Result<CalendarDate, EraError> {
        Err(EraError::NoConverterInstalled)
    }
}
