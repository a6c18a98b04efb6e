//! Pretty output formatting.

use almanac_core::calendar::{CalendarDate, Day, Month, YearData};

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

fn month_name(month: u32) -> &'static str {
    MONTH_NAMES
        .get(month.saturating_sub(1) as usize)
        .copied()
        .unwrap_or("?")
}

/// Format a day for display.
pub fn format_day(day: &Day) -> String {
    let mut output = format!(
        "{:>2} {} #{}",
        day.date(),
        day.weekday_name(),
        day.weekday_index_in_month()
    );
    if let Some(era) = day.era() {
        match (&era.name, era.year) {
            (Some(name), Some(year)) => output.push_str(&format!("  {name} {year}")),
            (Some(name), None) => output.push_str(&format!("  {name}")),
            (None, Some(year)) => output.push_str(&format!("  {year}")),
            (None, None) => {}
        }
    }
    if day.is_holiday() {
        output.push_str(&format!("  * {}", day.holiday_name().unwrap_or("holiday")));
    }
    output
}

/// Format a month for display.
pub fn format_month(month: &Month) -> String {
    let mut output = format!("{} ({} days)\n", month_name(month.month()), month.days_in_month());
    output.push_str(&"-".repeat(40));
    for day in month.days() {
        output.push_str(&format!("\n{}", format_day(day)));
    }
    output
}

/// Format year data for display.
pub fn format_year(data: &YearData) -> String {
    let mut output = format!("YEAR {} [{}]\n", data.year(), data.calendar_algorithm());
    for month in data.months() {
        output.push_str(&format!("\n{}\n", format_month(month)));
    }
    output
}

/// Format a single weekday lookup for display.
pub fn format_weekday(date: CalendarDate, weekday: u8, label: &str, algorithm: &str) -> String {
    format!("{date} is a {label} ({weekday}) [{algorithm}]")
}

/// Format the algorithm list, marking the active one.
pub fn format_algorithms(algorithms: &[&str], current: &str) -> String {
    algorithms
        .iter()
        .map(|name| {
            if *name == current {
                format!("* {name}")
            } else {
                format!("  {name}")
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use almanac_core::providers::{EraTable, MonthDay, StaticHolidays};
    use almanac_core::CalendarConfig;

    use super::*;

    #[test]
    fn test_format_day_plain() {
        let data = CalendarConfig::default().build_year_data(2024);
        let day = data.day(1, 1).unwrap();
        assert_eq!(format_day(day), " 1 Mon #1");
    }

    #[test]
    fn test_format_day_annotated() {
        let config = CalendarConfig::new()
            .with_holidays(StaticHolidays::new().with_holiday(MonthDay::new(5, 1).unwrap(), ""))
            .with_era_converter(EraTable::japanese());
        let data = config.build_year_data(2019);

        assert_eq!(format_day(data.day(4, 30).unwrap()), "30 Tue #5  Heisei 31");
        assert_eq!(format_day(data.day(5, 1).unwrap()), " 1 Wed #1  Reiwa 1  * holiday");
    }

    #[test]
    fn test_format_year_lists_every_month() {
        let data = CalendarConfig::default().build_year_data(2023);
        let output = format_year(&data);

        assert!(output.starts_with("YEAR 2023 [sakamoto]\n"));
        assert!(output.contains("February (28 days)"));
        assert!(output.contains("December (31 days)"));
        assert_eq!(output.matches(" days)").count(), 12);
    }

    #[test]
    fn test_format_weekday() {
        let output = format_weekday(CalendarDate::new(2024, 1, 1), 1, "Mon", "zeller");
        assert_eq!(output, "2024-01-01 is a Mon (1) [zeller]");
    }

    #[test]
    fn test_format_algorithms_marks_current() {
        let output = format_algorithms(&["sakamoto", "zeller", "dateApi"], "zeller");
        assert_eq!(output, "  sakamoto\n* zeller\n  dateApi");
    }
}
