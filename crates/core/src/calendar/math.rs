use super::error::CalendarError;

/// Days per month in a common year, January first.
const MONTH_LENGTHS: [u32; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Returns true if `year` is a Gregorian leap year.
pub fn is_leap_year(year: i32) -> bool {
    year % 400 == 0 || (year % 4 == 0 && year % 100 != 0)
}

/// Returns the number of days in `month` of `year`.
pub fn days_in_month(year: i32, month: u32) -> Result<u32, CalendarError> {
    if !(1..=12).contains(&month) {
        return Err(CalendarError::InvalidMonth(month));
    }
    Ok(month_length(year, month))
}

/// Checks that `(year, month, day)` names a day of the Gregorian calendar.
pub fn validate_date(year: i32, month: u32, day: u32) -> Result<(), CalendarError> {
    let length = days_in_month(year, month)?;
    if day == 0 || day > length {
        return Err(CalendarError::InvalidDay { year, month, day });
    }
    Ok(())
}

/// Month length for a month already known to be in `1..=12`.
pub(crate) fn month_length(year: i32, month: u32) -> u32 {
    if month == 2 && is_leap_year(year) {
        return 29;
    }
    MONTH_LENGTHS[(month.saturating_sub(1) % 12) as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_leap_year() {
        assert!(is_leap_year(2000));
        assert!(is_leap_year(1600));
        assert!(is_leap_year(2024));
        assert!(!is_leap_year(1900));
        assert!(!is_leap_year(2100));
        assert!(!is_leap_year(2023));
    }

    #[test]
    fn test_is_leap_year_negative_years() {
        // Proleptic year 0 and -400 are leap years, -100 is not.
        assert!(is_leap_year(0));
        assert!(is_leap_year(-400));
        assert!(is_leap_year(-4));
        assert!(!is_leap_year(-100));
    }

    #[test]
    fn test_days_in_february() {
        assert_eq!(days_in_month(2024, 2), Ok(29));
        assert_eq!(days_in_month(2023, 2), Ok(28));
        assert_eq!(days_in_month(1900, 2), Ok(28));
        assert_eq!(days_in_month(2000, 2), Ok(29));
    }

    #[test]
    fn test_days_in_april_is_always_30() {
        for year in 1590..=2410 {
            assert_eq!(days_in_month(year, 4), Ok(30));
        }
    }

    #[test]
    fn test_days_in_month_table() {
        let lengths: Vec<u32> = (1..=12)
            .map(|month| days_in_month(2023, month).unwrap())
            .collect();
        assert_eq!(lengths, vec![31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31]);
    }

    #[test]
    fn test_days_in_month_rejects_out_of_range() {
        assert_eq!(days_in_month(2024, 0), Err(CalendarError::InvalidMonth(0)));
        assert_eq!(
            days_in_month(2024, 13),
            Err(CalendarError::InvalidMonth(13))
        );
    }

    #[test]
    fn test_validate_date() {
        assert!(validate_date(2024, 2, 29).is_ok());
        assert!(validate_date(2024, 12, 31).is_ok());
        assert_eq!(
            validate_date(2023, 2, 29),
            Err(CalendarError::InvalidDay {
                year: 2023,
                month: 2,
                day: 29
            })
        );
        assert_eq!(
            validate_date(2023, 4, 0),
            Err(CalendarError::InvalidDay {
                year: 2023,
                month: 4,
                day: 0
            })
        );
        assert_eq!(validate_date(2023, 14, 1), Err(CalendarError::InvalidMonth(14)));
    }
}
