//! Normalized upstream response shape.

use serde_json::{Value, json};

/// The outcome of one upstream REST call.
///
/// Success carries the upstream JSON body verbatim. Failure carries the
/// `{"error": message}` shape. Bitrix24 reports its own API errors with an
/// `error` key in a 2xx body, so [`BitrixResponse::is_error`] covers both
/// transport failures and API-level errors with one check.
#[derive(Debug, Clone, PartialEq)]
pub struct BitrixResponse {
    body: Value,
}

impl BitrixResponse {
    /// Wrap a successfully parsed upstream body.
    pub fn ok(body: Value) -> Self {
        Self { body }
    }

    /// Build the normalized failure shape from an error message.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            body: json!({ "error": message.into() }),
        }
    }

    /// Whether the body carries an `error` key.
    pub fn is_error(&self) -> bool {
        self.body.get("error").is_some()
    }

    /// The `result` field of the body, if present.
    pub fn result(&self) -> Option<&Value> {
        self.body.get("result")
    }

    /// Borrow the raw body.
    pub fn body(&self) -> &Value {
        &self.body
    }

    /// Consume into the raw body.
    pub fn into_value(self) -> Value {
        self.body
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_shape() {
        let response = BitrixResponse::error("boom");
        assert!(response.is_error());
        assert_eq!(response.into_value(), json!({"error": "boom"}));
    }

    #[test]
    fn test_api_error_body_is_detected() {
        let response = BitrixResponse::ok(json!({
            "error": "NOT_FOUND",
            "error_description": "Deal not found"
        }));
        assert!(response.is_error());
    }

    #[test]
    fn test_success_body_exposes_result() {
        let response = BitrixResponse::ok(json!({"result": {"ID": "7"}, "time": {}}));
        assert!(!response.is_error());
        assert_eq!(response.result(), Some(&json!({"ID": "7"})));
    }
}
