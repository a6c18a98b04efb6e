use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::calendar::month_length;

use super::error::HolidayKeyError;

/// Holidays of one year, keyed by month and day.
pub type HolidayMap = HashMap<MonthDay, Holiday>;

/// A year-independent calendar day, written `"month-day"` (e.g. `"12-25"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthDay {
    pub month: u32,
    pub day: u32,
}

impl MonthDay {
    /// Creates a key, rejecting days that exist in no year (Feb 29 is allowed).
    pub fn new(month: u32, day: u32) -> Result<Self, HolidayKeyError> {
        // 2000 is a leap year, so this is the longest each month can be.
        let valid = (1..=12).contains(&month) && (1..=month_length(2000, month)).contains(&day);
        if !valid {
            return Err(HolidayKeyError::OutOfRange(format!("{month}-{day}")));
        }
        Ok(Self { month, day })
    }

    /// Returns true if this day exists in `year`.
    pub fn occurs_in(&self, year: i32) -> bool {
        self.day <= month_length(year, self.month)
    }
}

impl fmt::Display for MonthDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.month, self.day)
    }
}

impl FromStr for MonthDay {
    type Err = HolidayKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || HolidayKeyError::Malformed(s.to_string());
        let (month, day) = s.split_once('-').ok_or_else(malformed)?;
        let month = month.trim().parse().map_err(|_| malformed())?;
        let day = day.trim().parse().map_err(|_| malformed())?;
        Self::new(month, day).map_err(|_| HolidayKeyError::OutOfRange(s.to_string()))
    }
}

impl Serialize for MonthDay {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for MonthDay {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Holiday descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Holiday {
    #[serde(default)]
    pub name: String,
}

impl Holiday {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// The holiday name, or `None` when it is empty.
    pub fn label(&self) -> Option<&str> {
        (!self.name.is_empty()).then_some(self.name.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_day_parse() {
        assert_eq!("1-1".parse::<MonthDay>(), Ok(MonthDay { month: 1, day: 1 }));
        assert_eq!("12-25".parse::<MonthDay>(), Ok(MonthDay { month: 12, day: 25 }));
        assert_eq!("2-29".parse::<MonthDay>(), Ok(MonthDay { month: 2, day: 29 }));
    }

    #[test]
    fn test_month_day_parse_rejects_malformed() {
        for key in ["", "1", "1/1", "a-1", "1-b", "-1"] {
            assert_eq!(
                key.parse::<MonthDay>(),
                Err(HolidayKeyError::Malformed(key.to_string())),
                "{key:?}"
            );
        }
    }

    #[test]
    fn test_month_day_parse_rejects_impossible_days() {
        for key in ["0-1", "13-1", "2-30", "4-31", "1-0"] {
            assert_eq!(
                key.parse::<MonthDay>(),
                Err(HolidayKeyError::OutOfRange(key.to_string())),
                "{key:?}"
            );
        }
    }

    #[test]
    fn test_month_day_display_matches_key_format() {
        let key = MonthDay::new(7, 4).unwrap();
        assert_eq!(key.to_string(), "7-4");
    }

    #[test]
    fn test_month_day_occurs_in() {
        let leap_day = MonthDay::new(2, 29).unwrap();
        assert!(leap_day.occurs_in(2024));
        assert!(!leap_day.occurs_in(2023));
        assert!(MonthDay::new(2, 28).unwrap().occurs_in(2023));
    }

    #[test]
    fn test_holiday_label() {
        assert_eq!(Holiday::new("Christmas").label(), Some("Christmas"));
        assert_eq!(Holiday::new("  ").label(), Some("  "));
        assert_eq!(Holiday::new("").label(), None);
    }

    #[test]
    fn test_holiday_deserializes_without_name() {
        let holiday: Holiday = serde_json::from_str("{}").unwrap();
        assert_eq!(holiday, Holiday::new(""));
    }
}
