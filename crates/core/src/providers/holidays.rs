use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::traits::HolidayProvider;
use super::types::{Holiday, HolidayMap, MonthDay};

/// Holidays that fall on the same month and day every year.
///
/// Deserializes from a `"month-day"` keyed object:
///
/// ```
/// use almanac_core::providers::{HolidayProvider, StaticHolidays};
///
/// let holidays: StaticHolidays =
///     serde_json::from_str(r#"{"1-1": {"name": "New Year's Day"}}"#).unwrap();
/// assert_eq!(holidays.holidays_for_year(2024).len(), 1);
/// ```
///
/// A Feb 29 rule only yields a holiday in leap years.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StaticHolidays {
    rules: BTreeMap<MonthDay, Holiday>,
}

impl StaticHolidays {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a holiday, replacing any previous one on the same day.
    pub fn with_holiday(mut self, month_day: MonthDay, name: impl Into<String>) -> Self {
        self.insert(month_day, Holiday::new(name));
        self
    }

    pub fn insert(&mut self, month_day: MonthDay, holiday: Holiday) {
        self.rules.insert(month_day, holiday);
    }

    pub fn get(&self, month_day: &MonthDay) -> Option<&Holiday> {
        self.rules.get(month_day)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl FromIterator<(MonthDay, Holiday)> for StaticHolidays {
    fn from_iter<I: IntoIterator<Item = (MonthDay, Holiday)>>(iter: I) -> Self {
        Self {
            rules: iter.into_iter().collect(),
        }
    }
}

impl HolidayProvider for StaticHolidays {
    fn holidays_for_year(&self, year: i32) -> HolidayMap {
        self.rules
            .iter()
            .filter(|(month_day, _)| month_day.occurs_in(year))
            .map(|(month_day, holiday)| (*month_day, holiday.clone()))
            .collect()
    }
}
