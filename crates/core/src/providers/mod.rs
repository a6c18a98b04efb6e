mod defaults;
mod eras;
mod error;
mod holidays;
mod traits;
mod types;

pub use defaults::{NoEras, NoHolidays};
pub use eras::{Era, EraTable};
pub use error::{EraError, HolidayKeyError};
pub use holidays::StaticHolidays;
pub use traits::{EraConverter, HolidayProvider};
pub use types::{Holiday, HolidayMap, MonthDay};
