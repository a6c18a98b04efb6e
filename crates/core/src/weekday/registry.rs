use tracing::debug;

use crate::calendar::{validate_date, CalendarError};

use super::algorithms::WeekdayAlgorithm;

/// Holds the selected weekday algorithm and dispatches weekday queries to it.
///
/// The registry is a plain value: whoever owns it decides who observes a
/// change of selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AlgorithmRegistry {
    current: WeekdayAlgorithm,
}

impl AlgorithmRegistry {
    /// Creates a registry with `algorithm` selected.
    pub fn new(algorithm: WeekdayAlgorithm) -> Self {
        Self { current: algorithm }
    }

    /// Selects the algorithm registered under `name`.
    ///
    /// On error the previous selection is kept.
    pub fn set_algorithm(&mut self, name: &str) -> Result<(), CalendarError> {
        let algorithm = name.parse::<WeekdayAlgorithm>()?;
        self.select(algorithm);
        Ok(())
    }

    /// Selects `algorithm` directly.
    pub fn select(&mut self, algorithm: WeekdayAlgorithm) {
        if algorithm != self.current {
            debug!(from = %self.current, to = %algorithm, "weekday algorithm changed");
        }
        self.current = algorithm;
    }

    /// Returns the selected algorithm.
    pub fn current(&self) -> WeekdayAlgorithm {
        self.current
    }

    /// Returns the identifier of the selected algorithm.
    pub fn current_algorithm(&self) -> &'static str {
        self.current.name()
    }

    /// Identifiers of every registered algorithm, in registration order.
    pub fn algorithms(&self) -> Vec<&'static str> {
        WeekdayAlgorithm::ALL.iter().map(|a| a.name()).collect()
    }

    /// Computes the weekday (0 = Sunday) with the selected algorithm.
    pub fn weekday(&self, year: i32, month: u32, day: u32) -> u8 {
        self.current.compute(year, month, day)
    }

    /// Like [`weekday`](Self::weekday), but rejects dates that do not exist.
    pub fn checked_weekday(&self, year: i32, month: u32, day: u32) -> Result<u8, CalendarError> {
        validate_date(year, month, day)?;
        Ok(self.weekday(year, month, day))
    }
}
