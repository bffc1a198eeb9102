//! HTTP response type.

use std::collections::HashMap;

/// An HTTP response from the Petstore API.
///
/// Header names are lower-cased; a header may carry several values.
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// Response headers.
    pub headers: HashMap<String, Vec<String>>,
    /// The response body.
    ///
    /// JSON bodies are parsed; any other text is kept as a JSON string and an
    /// empty body is `null`.
    pub body: serde_json::Value,
    /// Seconds to wait before retrying (from the `Retry-After` header).
    pub retry_request_after: Option<f64>,
}

impl HttpResponse {
    /// Creates a new `HttpResponse`, parsing `Retry-After` from the headers.
    #[must_use]
    pub fn new(code: u16, headers: HashMap<String, Vec<String>>, body: serde_json::Value) -> Self {
        let retry_request_after = headers
            .get("retry-after")
            .and_then(|values| values.first())
            .and_then(|value| value.trim().parse::<f64>().ok())
            .filter(|secs| secs.is_finite() && *secs >= 0.0);

        Self {
            code,
            headers,
            body,
            retry_request_after,
        }
    }

    /// Builds a response from raw body text.
    #[must_use]
    pub fn from_text(code: u16, headers: HashMap<String, Vec<String>>, text: &str) -> Self {
        let body = if text.trim().is_empty() {
            serde_json::Value::Null
        } else {
            serde_json::from_str(text)
                .unwrap_or_else(|_| serde_json::Value::String(text.to_string()))
        };
        Self::new(code, headers, body)
    }

    /// Returns `true` if the response status code is in the 2xx range.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code <= 299
    }

    /// Returns the first value of a header.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_lowercase())
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Returns the `X-Request-Id` header value, if present.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        self.header("x-request-id")
    }

    /// Returns the `Deprecation` header value, if present.
    #[must_use]
    pub fn deprecation(&self) -> Option<&str> {
        self.header("deprecation")
    }

    /// Returns a human-readable error message for this response.
    ///
    /// Uses the `message` field of a Petstore `ApiResponse` body when present,
    /// then a plain string body, then the serialized body.
    #[must_use]
    pub fn error_message(&self) -> String {
        match &self.body {
            serde_json::Value::Object(map) => map
                .get("message")
                .and_then(serde_json::Value::as_str)
                .map_or_else(|| self.body.to_string(), ToString::to_string),
            serde_json::Value::String(text) => text.clone(),
            serde_json::Value::Null => format!("status {}", self.code),
            other => other.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_is_ok_returns_true_for_2xx() {
        for code in 200..=299 {
            let response = HttpResponse::new(code, HashMap::new(), json!({}));
            assert!(response.is_ok(), "Expected is_ok() for code {code}");
        }
    }

    #[test]
    fn test_is_ok_returns_false_for_4xx_and_5xx() {
        for code in [400, 404, 405, 429, 500] {
            assert!(!HttpResponse::new(code, HashMap::new(), json!({})).is_ok());
        }
    }

    #[test]
    fn test_retry_after_parsing() {
        let mut headers = HashMap::new();
        headers.insert("retry-after".to_string(), vec!["2.5".to_string()]);

        let response = HttpResponse::new(429, headers, json!({}));
        assert!((response.retry_request_after.unwrap() - 2.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_negative_retry_after_is_ignored() {
        let mut headers = HashMap::new();
        headers.insert("retry-after".to_string(), vec!["-1".to_string()]);

        let response = HttpResponse::new(429, headers, json!({}));
        assert!(response.retry_request_after.is_none());
    }

    #[test]
    fn test_from_text_parses_json_and_keeps_plain_text() {
        let response = HttpResponse::from_text(200, HashMap::new(), r#"{"sold": 3}"#);
        assert_eq!(response.body, json!({"sold": 3}));

        let response = HttpResponse::from_text(500, HashMap::new(), "upstream down");
        assert_eq!(response.body, json!("upstream down"));

        let response = HttpResponse::from_text(200, HashMap::new(), "");
        assert!(response.body.is_null());
    }

    #[test]
    fn test_request_id_extraction() {
        let mut headers = HashMap::new();
        headers.insert("x-request-id".to_string(), vec!["abc-123".to_string()]);

        let response = HttpResponse::new(200, headers, json!({}));
        assert_eq!(response.request_id(), Some("abc-123"));
        assert_eq!(response.header("X-Request-Id"), Some("abc-123"));
    }

    #[test]
    fn test_error_message_prefers_api_response_message() {
        let response = HttpResponse::new(
            404,
            HashMap::new(),
            json!({"code": 1, "type": "error", "message": "Order not found"}),
        );
        assert_eq!(response.error_message(), "Order not found");

        let response = HttpResponse::new(400, HashMap::new(), json!("Invalid ID supplied"));
        assert_eq!(response.error_message(), "Invalid ID supplied");

        let response = HttpResponse::new(405, HashMap::new(), serde_json::Value::Null);
        assert_eq!(response.error_message(), "status 405");
    }
}
