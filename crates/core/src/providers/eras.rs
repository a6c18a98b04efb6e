use serde::{Deserialize, Serialize};

use crate::calendar::{validate_date, CalendarDate, EraTag};

use super::error::EraError;
use super::traits::EraConverter;

/// A named era starting on a Gregorian date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Era {
    pub name: String,
    pub start: CalendarDate,
}

impl Era {
    pub fn new(name: impl Into<String>, start: CalendarDate) -> Self {
        Self {
            name: name.into(),
            start,
        }
    }
}

/// Era converter backed by a table of consecutive eras.
///
/// Each era lasts until the next one starts; the last era is open-ended.
/// Year 1 of an era is the Gregorian year it starts in, so a year shared by
/// two eras is year N of the old era before the switch and year 1 of the new
/// one after it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EraTable {
    eras: Vec<Era>,
}

impl EraTable {
    /// Builds a table, ordering the eras by start date.
    pub fn new(eras: impl IntoIterator<Item = Era>) -> Self {
        let mut eras: Vec<Era> = eras.into_iter().collect();
        eras.sort_by_key(|era| era.start);
        Self { eras }
    }

    /// The modern Japanese eras, Meiji onwards.
    pub fn japanese() -> Self {
        Self::new([
            Era::new("Meiji", CalendarDate::new(1868, 10, 23)),
            Era::new("Taisho", CalendarDate::new(1912, 7, 30)),
            Era::new("Showa", CalendarDate::new(1926, 12, 25)),
            Era::new("Heisei", CalendarDate::new(1989, 1, 8)),
            Era::new("Reiwa", CalendarDate::new(2019, 5, 1)),
        ])
    }

    pub fn eras(&self) -> &[Era] {
        &self.eras
    }

    /// Returns the era covering `date`, if any.
    pub fn era_of(&self, date: CalendarDate) -> Option<&Era> {
        self.eras.iter().rev().find(|era| era.start <= date)
    }
}

impl EraConverter for EraTable {
    fn to_era(&self, year: i32, month: u32, day: u32) -> Option<EraTag> {
        let era = self.era_of(CalendarDate::new(year, month, day))?;
        // Years too far from the era start to count are left unannotated.
        let era_year = year.checked_sub(era.start.year)?.checked_add(1)?;
        Some(EraTag::new(era.name.clone(), era_year))
    }

    fn from_era(
        &self,
        era: &str,
        era_year: i32,
        month: u32,
        day: u32,
    ) -> Result<CalendarDate, EraError> {
        let index = self
            .eras
            .iter()
            .position(|candidate| candidate.name.eq_ignore_ascii_case(era))
            .ok_or_else(|| EraError::UnsupportedEra(era.to_string()))?;
        let current = &self.eras[index];

        let out_of_range = || EraError::EraYearOutOfRange {
            era: current.name.clone(),
            year: era_year,
        };
        if era_year < 1 {
            return Err(out_of_range());
        }
        let year = current
            .start
            .year
            .checked_sub(1)
            .and_then(|base| base.checked_add(era_year))
            .ok_or_else(out_of_range)?;
        validate_date(year, month, day)?;

        let date = CalendarDate::new(year, month, day);
        let next_start = self.eras.get(index + 1).map(|next| next.start);
        if date < current.start || next_start.is_some_and(|next| date >= next) {
            return Err(out_of_range());
        }
        Ok(date)
    }
}
