use std::fmt;
use std::sync::Arc;

use crate::providers::{EraConverter, EraError, HolidayProvider, NoEras, NoHolidays};
use crate::weekday::{AlgorithmRegistry, WeekdayAlgorithm};

use super::builder::build_year_data;
use super::error::CalendarError;
use super::types::{CalendarDate, EraTag, YearData};

/// Everything the year-data builder consults: the weekday algorithm and
/// the two providers.
///
/// Cloning is cheap; providers are shared.
#[derive(Clone)]
pub struct CalendarConfig {
    registry: AlgorithmRegistry,
    holidays: Arc<dyn HolidayProvider>,
    eras: Arc<dyn EraConverter>,
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            registry: AlgorithmRegistry::default(),
            holidays: Arc::new(NoHolidays),
            eras: Arc::new(NoEras),
        }
    }
}

impl fmt::Debug for CalendarConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CalendarConfig")
            .field("registry", &self.registry)
            .finish_non_exhaustive()
    }
}

impl CalendarConfig {
    /// Creates a configuration with Sakamoto's algorithm and no-op providers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the weekday algorithm.
    pub fn with_algorithm(mut self, algorithm: WeekdayAlgorithm) -> Self {
        self.registry.select(algorithm);
        self
    }

    /// Sets the holiday provider.
    pub fn with_holidays(mut self, provider: impl HolidayProvider + 'static) -> Self {
        self.holidays = Arc::new(provider);
        self
    }

    /// Sets the era converter.
    pub fn with_era_converter(mut self, converter: impl EraConverter + 'static) -> Self {
        self.eras = Arc::new(converter);
        self
    }

    /// Selects the weekday algorithm by identifier, keeping the current one on error.
    pub fn set_algorithm(&mut self, name: &str) -> Result<(), CalendarError> {
        self.registry.set_algorithm(name)
    }

    /// Replaces the holiday provider.
    pub fn install_holidays(&mut self, provider: Arc<dyn HolidayProvider>) {
        self.holidays = provider;
    }

    /// Replaces the era converter.
    pub fn install_era_converter(&mut self, converter: Arc<dyn EraConverter>) {
        self.eras = converter;
    }

    pub fn registry(&self) -> &AlgorithmRegistry {
        &self.registry
    }

    pub fn holidays(&self) -> &dyn HolidayProvider {
        self.holidays.as_ref()
    }

    pub fn eras(&self) -> &dyn EraConverter {
        self.eras.as_ref()
    }

    /// Builds the annotated calendar of `year`.
    pub fn build_year_data(&self, year: i32) -> YearData {
        build_year_data(year, self)
    }

    /// Era of a Gregorian date according to the configured converter.
    pub fn to_era(&self, year: i32, month: u32, day: u32) -> Option<EraTag> {
        self.eras.to_era(year, month, day)
    }

    /// Resolves an era date with the configured converter.
    pub fn from_era(
        &self,
        era: &str,
        era_year: i32,
        month: u32,
        day: u32,
    ) -> Result<CalendarDate, EraError> {
        self.eras.from_era(era, era_year, month, day)
    }
}
