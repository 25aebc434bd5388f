//! JSON output formatting.

use serde::Serialize;

/// Render a value as compact JSON on a single line.
///
/// Falls back to an empty string if serialization fails.
pub fn format_json<T: Serialize>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_default()
}
