use thiserror::Error;

/// Errors that can occur when selecting an algorithm or querying calendar math.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CalendarError {
    #[error("Unknown calendar algorithm: {0}")]
    UnknownAlgorithm(String),
    #[error("Invalid month: {0} (must be 1..=12)")]
    InvalidMonth(u32),
    #[error("Invalid day: {year}-{month}-{day} is not a calendar date")]
    InvalidDay { year: i32, month: u32, day: u32 },
}
