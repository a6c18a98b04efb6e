use tracing::{debug, trace};

use crate::providers::{EraConverter, HolidayMap, MonthDay};
use crate::weekday::{weekday_label, WeekdayAlgorithm};

use super::config::CalendarConfig;
use super::math::month_length;
use super::types::{Day, Month, YearData};

/// Builds the annotated calendar of `year`.
///
/// The algorithm and providers are read from `config` once, before the first
/// day is computed, and holidays are fetched in a single call for the whole
/// year. The result depends only on `year` and `config`.
pub fn build_year_data(year: i32, config: &CalendarConfig) -> YearData {
    let algorithm = config.registry().current();
    let eras = config.eras();
    let holidays = config.holidays().holidays_for_year(year);

    debug!(year, %algorithm, holidays = holidays.len(), "building year data");

    let months: Vec<Month> = (1..=12)
        .map(|month| build_month(year, month, algorithm, &holidays, eras))
        .collect();

    debug!(
        year,
        days = months.iter().map(Month::days_in_month).sum::<u32>(),
        "built year data"
    );
    YearData::new(year, algorithm.name(), months)
}

fn build_month(
    year: i32,
    month: u32,
    algorithm: WeekdayAlgorithm,
    holidays: &HolidayMap,
    eras: &dyn EraConverter,
) -> Month {
    let days_in_month = month_length(year, month);
    let mut weekday_count = [0u32; 7];

    let days = (1..=days_in_month)
        .map(|date| {
            let weekday = algorithm.compute(year, month, date);
            let slot = &mut weekday_count[usize::from(weekday)];
            *slot += 1;

            let holiday = holidays.get(&MonthDay { month, day: date });
            let era = eras.to_era(year, month, date);

            Day::new(date, weekday, weekday_label(weekday), *slot, holiday, era)
        })
        .collect();

    trace!(year, month, days_in_month, "built month");
    Month::new(month, days)
}
