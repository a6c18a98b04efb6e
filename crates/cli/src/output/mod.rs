//! Output formatting functions.

pub mod csv;
pub mod json;
pub mod pretty;
pub mod yaml;

use almanac_core::calendar::YearData;

use crate::cli::OutputFormat;
use crate::error::Result;

/// Format year data for output.
pub fn format_year(data: &YearData, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => json::format_json(data),
        OutputFormat::Csv => csv::format_csv(data),
        OutputFormat::Yaml => yaml::format_yaml(data),
        OutputFormat::Pretty => Ok(pretty::format_year(data)),
    }
}

/// Format a single record in a structured format.
///
/// Returns `None` for formats without a structured rendering of single
/// records; callers fall back to the pretty text.
pub fn format_record<T: serde::Serialize>(
    value: &T,
    format: OutputFormat,
) -> Result<Option<String>> {
    match format {
        OutputFormat::Json => json::format_json(value).map(Some),
        OutputFormat::Yaml => yaml::format_yaml(value).map(Some),
        OutputFormat::Csv | OutputFormat::Pretty => Ok(None),
    }
}
