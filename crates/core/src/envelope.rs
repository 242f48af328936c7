//! Upstream response envelope.

use serde_json::Value;

/// Outcome of one upstream call, as seen by the tools.
///
/// The upstream wraps payloads as `{ "data": ..., "meta": {...} }` and
/// failures as `{ "error": "..." }`. An `error` key wins regardless of
/// the HTTP status.
#[derive(Debug, Clone, PartialEq)]
pub enum Envelope {
    /// Usable payload (the whole response body)
    Success(Value),
    /// Domain-level failure message to hand back verbatim
    Failure(String),
}

impl Envelope {
    /// Classify a decoded response body.
    pub fn from_body(body: Value) -> Self {
        match body.get("error") {
            Some(Value::String(message)) => Envelope::Failure(message.clone()),
            Some(other) => Envelope::Failure(other.to_string()),
            None => Envelope::Success(body),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_error_key_is_failure() {
        let envelope = Envelope::from_body(json!({"error": "Ticker not found: ZZZZ"}));
        assert_eq!(envelope, Envelope::Failure("Ticker not found: ZZZZ".to_string()));
    }

    #[test]
    fn test_structured_error_is_rendered() {
        let envelope = Envelope::from_body(json!({"error": {"code": 429}}));
        assert_eq!(envelope, Envelope::Failure("{\"code\":429}".to_string()));
    }

    #[test]
    fn test_data_is_success() {
        let body = json!({"data": [], "meta": {"total": 0}});
        let envelope = Envelope::from_body(body.clone());
        assert_eq!(envelope, Envelope::Success(body));
    }

    #[test]
    fn test_non_object_is_success() {
        assert_eq!(Envelope::from_body(json!([1, 2])), Envelope::Success(json!([1, 2])));
    }
}
