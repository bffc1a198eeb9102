//! Operation-level error type.
//!
//! [`ApiError`] classifies transport failures by what they mean for the
//! operation that was called:
//!
//! - **no I/O**: [`ApiError::MissingRequiredParameter`] is returned before
//!   anything is sent
//! - **404** on a by-id operation: [`ApiError::NotFound`]
//! - **400 / 405**: [`ApiError::InvalidInput`]
//! - **2xx with an unexpected body**: [`ApiError::Deserialization`]
//! - **anything else**: [`ApiError::Http`], wrapping the transport error unchanged
//!
//! # Example
//!
//! ```rust,ignore
//! use petstore_client::apis::{ApiError, StoreApi};
//!
//! match store.get_order_by_id(5).await {
//!     Ok(order) => println!("Order {:?} is {:?}", order.id, order.status),
//!     Err(ApiError::NotFound { resource, id, .. }) => println!("{resource} {id} is gone"),
//!     Err(e) => println!("Other error: {e}"),
//! }
//! ```

use crate::clients::HttpError;
use thiserror::Error;

/// Error type for Petstore API operations.
#[derive(Debug, Error)]
pub enum ApiError {
    /// A required argument was missing or empty. No request was sent.
    #[error("Missing the required parameter '{parameter}' when calling {operation}")]
    MissingRequiredParameter {
        /// The parameter name.
        parameter: &'static str,
        /// The operation that was called.
        operation: &'static str,
    },

    /// The addressed resource does not exist (HTTP 404).
    #[error("{resource} with id {id} not found")]
    NotFound {
        /// The resource type, e.g. "Order" or "Pet".
        resource: &'static str,
        /// The ID that was requested.
        id: String,
        /// The request ID for debugging (from `X-Request-Id`).
        request_id: Option<String>,
    },

    /// The service rejected the input (HTTP 400 or 405).
    #[error("Invalid input for {operation} (HTTP {code}): {message}")]
    InvalidInput {
        /// The operation that was called.
        operation: &'static str,
        /// The HTTP status code.
        code: u16,
        /// The service's error message.
        message: String,
        /// The request ID for debugging (from `X-Request-Id`).
        request_id: Option<String>,
    },

    /// A successful response could not be decoded into the expected type.
    #[error("Failed to decode {operation} response: {source}")]
    Deserialization {
        /// The operation that was called.
        operation: &'static str,
        /// The underlying serde error.
        source: serde_json::Error,
    },

    /// The request model could not be encoded as JSON.
    #[error("Failed to encode request body: {0}")]
    Serialization(#[source] serde_json::Error),

    /// Any other transport error.
    #[error(transparent)]
    Http(#[from] HttpError),
}

impl ApiError {
    /// Classifies a transport error for `operation`.
    ///
    /// `id` is the identifier the operation addressed, if any; a 404 is only
    /// reported as [`ApiError::NotFound`] when it is known.
    #[must_use]
    pub fn from_http_error(
        error: HttpError,
        operation: &'static str,
        resource: &'static str,
        id: Option<&str>,
    ) -> Self {
        match error {
            HttpError::Response(response) => match (response.code, id) {
                (404, Some(id)) => Self::NotFound {
                    resource,
                    id: id.to_string(),
                    request_id: response.error_reference,
                },
                (400 | 405, _) => Self::InvalidInput {
                    operation,
                    code: response.code,
                    message: response.message,
                    request_id: response.error_reference,
                },
                _ => Self::Http(HttpError::Response(response)),
            },
            other => Self::Http(other),
        }
    }

    /// Returns the HTTP status code, if a response was received.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::NotFound { .. } => Some(404),
            Self::InvalidInput { code, .. } => Some(*code),
            Self::Http(e) => e.status(),
            Self::MissingRequiredParameter { .. }
            | Self::Deserialization { .. }
            | Self::Serialization(_) => None,
        }
    }

    /// Returns the request ID if available.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        match self {
            Self::NotFound { request_id, .. } | Self::InvalidInput { request_id, .. } => {
                request_id.as_deref()
            }
            Self::Http(e) => e.request_id(),
            _ => None,
        }
    }
}

// Verify ApiError is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ApiError>();
};
