use serde::{Deserialize, Serialize};

/// Generic response body returned by uploads and most error responses.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ApiResponse {
    /// Application-level status code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<i32>,

    /// Response type, e.g. `"unknown"` or `"error"`.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,

    /// Human-readable message.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}
