mod algorithms;
mod registry;

pub use algorithms::{
    date_api, sakamoto, weekday_label, zeller, WeekdayAlgorithm, WEEKDAY_LABELS,
};
pub use registry::AlgorithmRegistry;
