//! Process-wide default configuration.
//!
//! The engine itself takes its configuration as an argument. This module is
//! the one place that keeps a shared, mutable default so the CLI can install
//! providers once at startup and hand out consistent snapshots afterwards.

use std::sync::{Arc, LazyLock, PoisonError, RwLock};

use almanac_core::calendar::YearData;
use almanac_core::{CalendarConfig, CalendarError, EraConverter, HolidayProvider};

static DEFAULT_CONFIG: LazyLock<RwLock<CalendarConfig>> =
    LazyLock::new(|| RwLock::new(CalendarConfig::default()));

/// Selects the weekday algorithm of the default configuration.
pub fn set_algorithm(name: &str) -> Result<(), CalendarError> {
    DEFAULT_CONFIG
        .write()
        .unwrap_or_else(PoisonError::into_inner)
        .set_algorithm(name)
}

/// Installs the holiday provider of the default configuration.
pub fn install_holidays(provider: Arc<dyn HolidayProvider>) {
    DEFAULT_CONFIG
        .write()
        .unwrap_or_else(PoisonError::into_inner)
        .install_holidays(provider);
}

/// Installs the era converter of the default configuration.
pub fn install_era_converter(converter: Arc<dyn EraConverter>) {
    DEFAULT_CONFIG
        .write()
        .unwrap_or_else(PoisonError::into_inner)
        .install_era_converter(converter);
}

/// Returns the identifier of the selected weekday algorithm.
pub fn current_algorithm() -> &'static str {
    DEFAULT_CONFIG
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .registry()
        .current_algorithm()
}

/// Copies the default configuration.
///
/// Later changes to the default do not affect the returned value.
pub fn snapshot() -> CalendarConfig {
    DEFAULT_CONFIG
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .clone()
}

/// Builds year data from a snapshot of the default configuration.
pub fn build_year_data(year: i32) -> YearData {
    snapshot().build_year_data(year)
}

#[cfg(test)]
mod tests {
    use super::*;

    use almanac_core::providers::{EraTable, NoEras};

    // Tests share the process-wide default, so everything that mutates it
    // lives in one test.
    #[test]
    fn test_default_config_lifecycle() {
        assert!(set_algorithm("bogus").is_err());

        set_algorithm("zeller").unwrap();
        assert_eq!(current_algorithm(), "zeller");

        let before = snapshot();
        set_algorithm("dateApi").unwrap();
        assert_eq!(before.registry().current_algorithm(), "zeller");
        assert_eq!(build_year_data(2024).calendar_algorithm(), "dateApi");

        install_era_converter(Arc::new(EraTable::japanese()));
        let data = build_year_data(2024);
        assert_eq!(
            data.day(1, 1).and_then(|day| day.era()).and_then(|era| era.year),
            Some(6)
        );

        install_era_converter(Arc::new(NoEras));
        set_algorithm("sakamoto").unwrap();
        assert_eq!(build_year_data(2024).day(1, 1).unwrap().era(), None);
    }
}
