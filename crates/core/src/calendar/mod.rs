mod builder;
mod config;
mod error;
mod math;
mod types;

pub use builder::build_year_data;
pub use config::CalendarConfig;
pub use error::CalendarError;
pub(crate) use math::month_length;
pub use math::{days_in_month, is_leap_year, validate_date};
pub use types::{CalendarDate, Day, EraTag, Month, YearData};
