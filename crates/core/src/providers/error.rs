use thiserror::Error;

use crate::calendar::CalendarError;

/// Errors that can occur when converting an era date to a Gregorian date.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EraError {
    #[error("No era converter installed")]
    NoConverterInstalled,
    #[error("Unsupported era: {0}")]
    UnsupportedEra(String),
    #[error("Year {year} is outside the {era} era")]
    EraYearOutOfRange { era: String, year: i32 },
    #[error(transparent)]
    InvalidDate(#[from] CalendarError),
}

/// Errors that can occur when parsing a holiday key.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HolidayKeyError {
    #[error("Invalid holiday key: {0:?} (expected \"month-day\")")]
    Malformed(String),
    #[error("Holiday key {0:?} is not a day of any year")]
    OutOfRange(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_era_error_display() {
        assert_eq!(
            EraError::NoConverterInstalled.to_string(),
            "No era converter installed"
        );
        assert_eq!(
            EraError::UnsupportedEra("Kamakura".to_string()).to_string(),
            "Unsupported era: Kamakura"
        );
        assert_eq!(
            EraError::EraYearOutOfRange {
                era: "Reiwa".to_string(),
                year: 0
            }
            .to_string(),
            "Year 0 is outside the Reiwa era"
        );
    }

    #[test]
    fn test_era_error_wraps_calendar_error() {
        let error: EraError = CalendarError::InvalidMonth(13).into();
        assert_eq!(error.to_string(), "Invalid month: 13 (must be 1..=12)");
    }

    #[test]
    fn test_holiday_key_error_display() {
        assert_eq!(
            HolidayKeyError::Malformed("jan-1".to_string()).to_string(),
            "Invalid holiday key: \"jan-1\" (expected \"month-day\")"
        );
        assert_eq!(
            HolidayKeyError::OutOfRange("2-30".to_string()).to_string(),
            "Holiday key \"2-30\" is not a day of any year"
        );
    }
}
