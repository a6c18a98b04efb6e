use std::fmt;

use serde::{Deserialize, Serialize};

use crate::providers::Holiday;

/// A Gregorian calendar date.
///
/// Ordering is chronological because fields compare year first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CalendarDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl CalendarDate {
    pub fn new(year: i32, month: u32, day: u32) -> Self {
        Self { year, month, day }
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

/// Era annotation for a single day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EraTag {
    pub name: Option<String>,
    pub year: Option<i32>,
}

impl EraTag {
    /// Creates a tag with both the era name and the year within the era.
    pub fn new(name: impl Into<String>, year: i32) -> Self {
        Self {
            name: Some(name.into()),
            year: Some(year),
        }
    }
}

/// One annotated day of a month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Day {
    date: u32,
    weekday: u8,
    weekday_name: String,
    weekday_index_in_month: u32,
    is_holiday: bool,
    holiday_name: Option<String>,
    era: Option<EraTag>,
}

impl Day {
    pub(crate) fn new(
        date: u32,
        weekday: u8,
        weekday_name: &str,
        weekday_index_in_month: u32,
        holiday: Option<&Holiday>,
        era: Option<EraTag>,
    ) -> Self {
        Self {
            date,
            weekday,
            weekday_name: weekday_name.to_string(),
            weekday_index_in_month,
            is_holiday: holiday.is_some(),
            holiday_name: holiday.and_then(Holiday::label).map(str::to_string),
            era,
        }
    }

    /// Day of the month, starting at 1.
    pub fn date(&self) -> u32 {
        self.date
    }

    /// Weekday index, 0 = Sunday.
    pub fn weekday(&self) -> u8 {
        self.weekday
    }

    pub fn weekday_name(&self) -> &str {
        &self.weekday_name
    }

    /// How many times this weekday has occurred in the month so far, this day included.
    pub fn weekday_index_in_month(&self) -> u32 {
        self.weekday_index_in_month
    }

    pub fn is_holiday(&self) -> bool {
        self.is_holiday
    }

    pub fn holiday_name(&self) -> Option<&str> {
        self.holiday_name.as_deref()
    }

    pub fn era(&self) -> Option<&EraTag> {
        self.era.as_ref()
    }
}

/// All days of one month, in ascending order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Month {
    month: u32,
    days_in_month: u32,
    days: Vec<Day>,
}

impl Month {
    pub(crate) fn new(month: u32, days: Vec<Day>) -> Self {
        Self {
            month,
            days_in_month: days.len() as u32,
            days,
        }
    }

    /// Month number, 1 = January.
    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn days_in_month(&self) -> u32 {
        self.days_in_month
    }

    pub fn days(&self) -> &[Day] {
        &self.days
    }

    /// Returns the day with the given day-of-month number.
    pub fn day(&self, date: u32) -> Option<&Day> {
        let index = usize::try_from(date.checked_sub(1)?).ok()?;
        self.days.get(index)
    }
}

/// The complete annotated calendar of one year.
///
/// Built by [`build_year_data`](super::build_year_data) and never modified afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YearData {
    year: i32,
    calendar_algorithm: String,
    months: Vec<Month>,
}

impl YearData {
    pub(crate) fn new(year: i32, calendar_algorithm: &str, months: Vec<Month>) -> Self {
        Self {
            year,
            calendar_algorithm: calendar_algorithm.to_string(),
            months,
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// Identifier of the weekday algorithm that produced this data.
    pub fn calendar_algorithm(&self) -> &str {
        &self.calendar_algorithm
    }

    pub fn months(&self) -> &[Month] {
        &self.months
    }

    /// Returns the month with the given number (1 = January).
    pub fn month(&self, month: u32) -> Option<&Month> {
        let index = usize::try_from(month.checked_sub(1)?).ok()?;
        self.months.get(index)
    }

    /// Returns the given day, if it exists in this year.
    pub fn day(&self, month: u32, date: u32) -> Option<&Day> {
        self.month(month)?.day(date)
    }

    /// Iterates over every day of the year together with its month number.
    pub fn days(&self) -> impl Iterator<Item = (u32, &Day)> {
        self.months
            .iter()
            .flat_map(|month| month.days.iter().map(move |day| (month.month, day)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calendar_date_ordering() {
        let earlier = CalendarDate::new(1989, 1, 7);
        let later = CalendarDate::new(1989, 1, 8);
        assert!(earlier < later);
        assert!(CalendarDate::new(1988, 12, 31) < earlier);
        assert!(CalendarDate::new(1989, 2, 1) > later);
    }

    #[test]
    fn test_calendar_date_display() {
        assert_eq!(CalendarDate::new(2019, 5, 1).to_string(), "2019-05-01");
    }

    #[test]
    fn test_day_with_named_holiday() {
        let holiday = Holiday::new("New Year");
        let day = Day::new(1, 1, "Mon", 1, Some(&holiday), None);
        assert!(day.is_holiday());
        assert_eq!(day.holiday_name(), Some("New Year"));
    }

    #[test]
    fn test_day_with_unnamed_holiday() {
        let holiday = Holiday::new("");
        let day = Day::new(1, 1, "Mon", 1, Some(&holiday), None);
        assert!(day.is_holiday());
        assert_eq!(day.holiday_name(), None);
    }

    #[test]
    fn test_day_serializes_camel_case_with_nulls() {
        let day = Day::new(2, 2, "Tue", 1, None, None);
        let json = serde_json::to_value(&day).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "date": 2,
                "weekday": 2,
                "weekdayName": "Tue",
                "weekdayIndexInMonth": 1,
                "isHoliday": false,
                "holidayName": null,
                "era": null
            })
        );
    }

    #[test]
    fn test_month_lookup_by_date() {
        let days = vec![
            Day::new(1, 3, "Wed", 1, None, None),
            Day::new(2, 4, "Thu", 1, None, None),
        ];
        let month = Month::new(5, days);
        assert_eq!(month.days_in_month(), 2);
        assert_eq!(month.day(2).map(Day::weekday), Some(4));
        assert!(month.day(0).is_none());
        assert!(month.day(3).is_none());
    }
}
