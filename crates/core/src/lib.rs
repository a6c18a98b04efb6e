//! almanac_core - year-data generation engine.
//!
//! Builds an annotated model of a calendar year (weekday, nth weekday of the
//! month, holiday and era for every day) from a [`CalendarConfig`]:
//!
//! ```
//! use almanac_core::{CalendarConfig, WeekdayAlgorithm};
//!
//! let config = CalendarConfig::new().with_algorithm(WeekdayAlgorithm::Zeller);
//! let data = config.build_year_data(2024);
//!
//! let new_year = data.day(1, 1).unwrap();
//! assert_eq!(new_year.weekday_name(), "Mon");
//! assert_eq!(data.calendar_algorithm(), "zeller");
//! ```
//!
//! Rendering and text formats live outside this crate; they consume
//! [`YearData`] read-only.

pub mod calendar;
pub mod providers;
pub mod weekday;

pub use calendar::{build_year_data, CalendarConfig, CalendarDate, CalendarError, YearData};
pub use providers::{EraConverter, EraError, HolidayProvider};
pub use weekday::{AlgorithmRegistry, WeekdayAlgorithm};
