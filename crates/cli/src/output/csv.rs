//! CSV output formatting.

use almanac_core::calendar::YearData;
use serde::Serialize;

use crate::error::{CliError, Result};

/// One CSV row; field names double as the header.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct DayRow<'a> {
    year: i32,
    month: u32,
    date: u32,
    weekday: u8,
    weekday_name: &'a str,
    weekday_index_in_month: u32,
    is_holiday: bool,
    holiday_name: &'a str,
    era_name: &'a str,
    era_year: Option<i32>,
}

/// Format year data as CSV, one row per day.
pub fn format_csv(data: &YearData) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    for (month, day) in data.days() {
        let era = day.era();
        writer.serialize(DayRow {
            year: data.year(),
            month,
            date: day.date(),
            weekday: day.weekday(),
            weekday_name: day.weekday_name(),
            weekday_index_in_month: day.weekday_index_in_month(),
            is_holiday: day.is_holiday(),
            holiday_name: day.holiday_name().unwrap_or_default(),
            era_name: era.and_then(|e| e.name.as_deref()).unwrap_or_default(),
            era_year: era.and_then(|e| e.year),
        })?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| CliError::Io(e.into_error()))?;
    String::from_utf8(bytes).map_err(|e| CliError::InvalidOutput(e.to_string()))
}
