//! Configuration types for the Petstore client.
//!
//! # Overview
//!
//! - [`PetstoreConfig`]: settings shared by every request a client sends
//! - [`PetstoreConfigBuilder`]: a builder for [`PetstoreConfig`]
//! - [`ApiKey`] and [`AccessToken`]: default credentials, masked in debug output
//! - [`BaseUrl`]: the validated service root
//!
//! # Example
//!
//! ```rust
//! use petstore_client::{PetstoreConfig, ApiKey, BaseUrl};
//!
//! let config = PetstoreConfig::builder()
//!     .base_url(BaseUrl::new("http://localhost:8080/v2").unwrap())
//!     .api_key(ApiKey::new("special-key").unwrap())
//!     .tries(3)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.tries(), 3);
//! ```

mod newtypes;

pub use newtypes::{AccessToken, ApiKey, BaseUrl};

use std::time::Duration;

use crate::error::ConfigError;

/// The public Petstore sample server.
pub const DEFAULT_BASE_URL: &str = "http://petstore.swagger.io/v2";

/// Configuration for a Petstore [`ApiClient`](crate::clients::ApiClient).
///
/// `PetstoreConfig` is `Clone`, `Send`, and `Sync`.
///
/// # Default Credentials
///
/// `api_key` and `access_token` are the credentials applied to every call
/// whose operation declares the matching auth scheme. A per-call
/// [`AuthInfo`](crate::auth::AuthInfo) replaces them for that call only.
#[derive(Clone, Debug)]
pub struct PetstoreConfig {
    base_url: BaseUrl,
    api_key: Option<ApiKey>,
    access_token: Option<AccessToken>,
    user_agent_prefix: Option<String>,
    tries: u32,
    timeout: Option<Duration>,
}

impl PetstoreConfig {
    /// Creates a new builder for constructing a `PetstoreConfig`.
    #[must_use]
    pub fn builder() -> PetstoreConfigBuilder {
        PetstoreConfigBuilder::new()
    }

    /// Returns the base URL.
    #[must_use]
    pub const fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    /// Returns the default API key, if configured.
    #[must_use]
    pub const fn api_key(&self) -> Option<&ApiKey> {
        self.api_key.as_ref()
    }

    /// Returns the default OAuth access token, if configured.
    #[must_use]
    pub const fn access_token(&self) -> Option<&AccessToken> {
        self.access_token.as_ref()
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }

    /// Returns how many times a request is attempted by default.
    #[must_use]
    pub const fn tries(&self) -> u32 {
        self.tries
    }

    /// Returns the per-request timeout, if configured.
    #[must_use]
    pub const fn timeout(&self) -> Option<Duration> {
        self.timeout
    }
}

impl Default for PetstoreConfig {
    fn default() -> Self {
        PetstoreConfigBuilder::new().defaults()
    }
}

// Verify PetstoreConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<PetstoreConfig>();
};

/// Builder for constructing [`PetstoreConfig`] instances.
///
/// # Defaults
///
/// - `base_url`: [`DEFAULT_BASE_URL`]
/// - `api_key`, `access_token`: `None`
/// - `user_agent_prefix`: `None`
/// - `tries`: `1` (no retries)
/// - `timeout`: `None` (reqwest default)
#[derive(Debug, Default)]
pub struct PetstoreConfigBuilder {
    base_url: Option<BaseUrl>,
    api_key: Option<ApiKey>,
    access_token: Option<AccessToken>,
    user_agent_prefix: Option<String>,
    tries: Option<u32>,
    timeout: Option<Duration>,
}

impl PetstoreConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the base URL of the service.
    #[must_use]
    pub fn base_url(mut self, url: BaseUrl) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Sets the default API key.
    #[must_use]
    pub fn api_key(mut self, key: ApiKey) -> Self {
        self.api_key = Some(key);
        self
    }

    /// Sets the default OAuth access token.
    #[must_use]
    pub fn access_token(mut self, token: AccessToken) -> Self {
        self.access_token = Some(token);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Sets how many times each request is attempted.
    ///
    /// Values above 1 enable automatic retries for 429 and 500 responses.
    #[must_use]
    pub const fn tries(mut self, tries: u32) -> Self {
        self.tries = Some(tries);
        self
    }

    /// Sets the per-request timeout.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Builds the [`PetstoreConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidTries`] if `tries` was set to 0.
    pub fn build(self) -> Result<PetstoreConfig, ConfigError> {
        if let Some(tries @ 0) = self.tries {
            return Err(ConfigError::InvalidTries { tries });
        }
        Ok(self.defaults())
    }

    fn defaults(self) -> PetstoreConfig {
        PetstoreConfig {
            base_url: self.base_url.unwrap_or_default(),
            api_key: self.api_key,
            access_token: self.access_token,
            user_agent_prefix: self.user_agent_prefix,
            tries: self.tries.unwrap_or(1).max(1),
            timeout: self.timeout,
        }
    }
}
