//! Configuration error types for the Petstore client.
//!
//! All configuration constructors return `Result<T, ConfigError>` so invalid
//! values are rejected when the client is set up rather than on the first request.
//!
//! # Example
//!
//! ```rust
//! use petstore_client::{ApiKey, ConfigError};
//!
//! let result = ApiKey::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyApiKey)));
//! ```

use thiserror::Error;

/// Errors that can occur while building client configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// API key cannot be empty.
    #[error("API key cannot be empty. Please provide the key expected in the 'api_key' header.")]
    EmptyApiKey,

    /// OAuth access token cannot be empty.
    #[error("Access token cannot be empty. Please provide a valid petstore_auth access token.")]
    EmptyAccessToken,

    /// Base URL is invalid.
    #[error("Invalid base URL '{url}'. Please provide a URL with scheme and host (e.g., 'http://petstore.swagger.io/v2').")]
    InvalidBaseUrl {
        /// The invalid URL that was provided.
        url: String,
    },

    /// The retry count is out of range.
    #[error("Invalid tries value {tries}. Requests must be attempted at least once.")]
    InvalidTries {
        /// The rejected value.
        tries: u32,
    },
}
