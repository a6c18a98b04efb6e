//! Interchangeable weekday algorithms.
//!
//! Every algorithm maps a proleptic Gregorian `(year, month, day)` to a
//! weekday index where 0 is Sunday and 6 is Saturday. All of them agree on
//! every valid date; they differ only in how they get there. Results for a
//! month outside `1..=12` are unspecified (but never panic), so callers that
//! take untrusted input go through [`AlgorithmRegistry::checked_weekday`].
//!
//! [`AlgorithmRegistry::checked_weekday`]: super::AlgorithmRegistry::checked_weekday

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::calendar::CalendarError;

/// Short English weekday labels indexed by weekday (0 = Sunday).
pub const WEEKDAY_LABELS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Month offsets for Sakamoto's method, January first.
const SAKAMOTO_OFFSETS: [i64; 12] = [0, 3, 2, 5, 0, 3, 5, 1, 4, 6, 2, 4];

/// Returns the label for a weekday index.
pub fn weekday_label(weekday: u8) -> &'static str {
    WEEKDAY_LABELS[usize::from(weekday % 7)]
}

/// Sakamoto's table-based congruence.
pub fn sakamoto(year: i32, month: u32, day: u32) -> u8 {
    let mut y = i64::from(year);
    if month < 3 {
        y -= 1;
    }
    let offset = SAKAMOTO_OFFSETS[month_slot(month)];
    let w = (y + y.div_euclid(4) - y.div_euclid(100) + y.div_euclid(400) + offset
        + i64::from(day))
        % 7;
    ((w + 7) % 7) as u8
}

/// Zeller's congruence.
///
/// The congruence itself yields 0 for Saturday; the result is shifted so
/// that 0 is Sunday like every other algorithm.
pub fn zeller(year: i32, month: u32, day: u32) -> u8 {
    let mut y = i64::from(year);
    let mut m = i64::from(month);
    if m < 3 {
        m += 12;
        y -= 1;
    }
    let k = y.rem_euclid(100);
    let j = y.div_euclid(100);
    let h = (i64::from(day) + (13 * (m + 1)).div_euclid(5) + k + k / 4 + j.div_euclid(4)
        + 5 * j)
        .rem_euclid(7);
    ((h + 6) % 7) as u8
}

/// Weekday according to `chrono`.
///
/// Years `chrono` cannot represent fall back to [`sakamoto`].
pub fn date_api(year: i32, month: u32, day: u32) -> u8 {
    NaiveDate::from_ymd_opt(year, month, day)
        .map(|date| date.weekday().num_days_from_sunday() as u8)
        .unwrap_or_else(|| sakamoto(year, month, day))
}

fn month_slot(month: u32) -> usize {
    (month.wrapping_sub(1) % 12) as usize
}

/// The registered weekday algorithms.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WeekdayAlgorithm {
    #[default]
    #[serde(rename = "sakamoto")]
    Sakamoto,
    #[serde(rename = "zeller")]
    Zeller,
    #[serde(rename = "dateApi")]
    DateApi,
}

impl WeekdayAlgorithm {
    /// Every algorithm, in registration order.
    pub const ALL: [WeekdayAlgorithm; 3] = [Self::Sakamoto, Self::Zeller, Self::DateApi];

    /// Identifier used for selection and provenance tagging.
    pub fn name(self) -> &'static str {
        match self {
            Self::Sakamoto => "sakamoto",
            Self::Zeller => "zeller",
            Self::DateApi => "dateApi",
        }
    }

    /// Computes the weekday index (0 = Sunday) of the given date.
    pub fn compute(self, year: i32, month: u32, day: u32) -> u8 {
        match self {
            Self::Sakamoto => sakamoto(year, month, day),
            Self::Zeller => zeller(year, month, day),
            Self::DateApi => date_api(year, month, day),
        }
    }
}

impl fmt::Display for WeekdayAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for WeekdayAlgorithm {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|algorithm| algorithm.name() == s)
            .ok_or_else(|| CalendarError::UnknownAlgorithm(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// (year, month, day, weekday) with independently known weekdays.
    const KNOWN_DATES: &[(i32, u32, u32, u8)] = &[
        (2024, 1, 1, 1),   // Monday
        (2000, 2, 29, 2),  // Tuesday
        (1970, 1, 1, 4),   // Thursday
        (1900, 3, 1, 4),   // Thursday
        (1600, 1, 1, 6),   // Saturday
        (2023, 12, 31, 0), // Sunday
        (2019, 5, 1, 3),   // Wednesday
        (2400, 12, 31, 0), // Sunday
    ];

    #[test]
    fn test_sakamoto_known_dates() {
        for &(y, m, d, expected) in KNOWN_DATES {
            assert_eq!(sakamoto(y, m, d), expected, "sakamoto({y}, {m}, {d})");
        }
    }

    #[test]
    fn test_zeller_known_dates() {
        for &(y, m, d, expected) in KNOWN_DATES {
            assert_eq!(zeller(y, m, d), expected, "zeller({y}, {m}, {d})");
        }
    }

    #[test]
    fn test_date_api_known_dates() {
        for &(y, m, d, expected) in KNOWN_DATES {
            assert_eq!(date_api(y, m, d), expected, "date_api({y}, {m}, {d})");
        }
    }

    #[test]
    fn test_algorithms_agree_on_negative_years() {
        // Floor division keeps the congruences valid before year 0.
        for year in [-1, -100, -401, -4713] {
            for month in 1..=12 {
                let expected = date_api(year, month, 15);
                assert_eq!(sakamoto(year, month, 15), expected, "{year}-{month}");
                assert_eq!(zeller(year, month, 15), expected, "{year}-{month}");
            }
        }
    }

    #[test]
    fn test_date_api_falls_back_outside_chrono_range() {
        assert_eq!(date_api(i32::MAX, 6, 1), sakamoto(i32::MAX, 6, 1));
        assert_eq!(date_api(i32::MIN, 6, 1), sakamoto(i32::MIN, 6, 1));
    }

    #[test]
    fn test_out_of_range_month_does_not_panic() {
        for algorithm in WeekdayAlgorithm::ALL {
            assert!(algorithm.compute(2024, 0, 1) < 7);
            assert!(algorithm.compute(2024, 13, 1) < 7);
        }
    }

    #[test]
    fn test_weekday_label() {
        assert_eq!(weekday_label(0), "Sun");
        assert_eq!(weekday_label(1), "Mon");
        assert_eq!(weekday_label(6), "Sat");
    }

    #[test]
    fn test_algorithm_names_round_trip_through_from_str() {
        for algorithm in WeekdayAlgorithm::ALL {
            assert_eq!(algorithm.name().parse::<WeekdayAlgorithm>(), Ok(algorithm));
        }
    }

    #[test]
    fn test_from_str_rejects_unknown_names() {
        assert_eq!(
            "bogus".parse::<WeekdayAlgorithm>(),
            Err(CalendarError::UnknownAlgorithm("bogus".to_string()))
        );
        // Identifiers are case sensitive.
        assert!("Zeller".parse::<WeekdayAlgorithm>().is_err());
    }

    #[test]
    fn test_algorithm_serializes_as_identifier() {
        assert_eq!(
            serde_json::to_string(&WeekdayAlgorithm::DateApi).unwrap(),
            "\"dateApi\""
        );
    }
}
