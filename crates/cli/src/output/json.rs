//! JSON output formatting.

use crate::error::Result;

/// Format a value as pretty-printed JSON.
pub fn format_json<T: serde::Serialize>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}
