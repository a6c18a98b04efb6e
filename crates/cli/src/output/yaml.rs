//! YAML output formatting.

use crate::error::Result;

/// Format a value as a YAML document.
pub fn format_yaml<T: serde::Serialize>(value: &T) -> Result<String> {
    Ok(serde_yaml::to_string(value)?)
}
