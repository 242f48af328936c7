//! Generic JSON rendering.

use serde_json::Value;

/// Pretty-print a JSON value with two-space indentation.
pub fn format_json(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}

/// The `data` member of an object payload, or the payload itself.
pub fn unwrap_data(body: &Value) -> &Value {
    body.get("data").unwrap_or(body)
}
