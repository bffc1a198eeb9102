//! Validated newtype wrappers for configuration values.
//!
//! Each wrapper validates its contents on construction. Credential wrappers
//! mask their value in `Debug` output so they never leak into logs.

use super::DEFAULT_BASE_URL;
use crate::error::ConfigError;
use std::fmt;

/// A validated API key, sent in the `api_key` header.
///
/// # Example
///
/// ```rust
/// use petstore_client::ApiKey;
///
/// let key = ApiKey::new("special-key").unwrap();
/// assert_eq!(key.as_ref(), "special-key");
/// assert_eq!(format!("{:?}", key), "ApiKey(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Creates a new validated API key.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyApiKey`] if the key is empty.
    pub fn new(key: impl Into<String>) -> Result<Self, ConfigError> {
        let key = key.into();
        if key.is_empty() {
            return Err(ConfigError::EmptyApiKey);
        }
        Ok(Self(key))
    }
}

impl AsRef<str> for ApiKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(*****)")
    }
}

/// A validated OAuth access token for the `petstore_auth` scheme.
///
/// Sent as `Authorization: Bearer <token>`. The `Debug` implementation
/// masks the token.
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    /// Creates a new validated access token.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyAccessToken`] if the token is empty.
    pub fn new(token: impl Into<String>) -> Result<Self, ConfigError> {
        let token = token.into();
        if token.is_empty() {
            return Err(ConfigError::EmptyAccessToken);
        }
        Ok(Self(token))
    }
}

impl AsRef<str> for AccessToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken(*****)")
    }
}

/// A validated base URL for the Petstore service.
///
/// The URL must have an alphabetic scheme and a non-empty host. A path
/// component is allowed (e.g. `/v2`); trailing slashes are trimmed so
/// operation paths can be appended directly.
///
/// # Example
///
/// ```rust
/// use petstore_client::BaseUrl;
///
/// let url = BaseUrl::new("http://petstore.swagger.io/v2/").unwrap();
/// assert_eq!(url.as_ref(), "http://petstore.swagger.io/v2");
/// assert_eq!(url.scheme(), "http");
/// assert_eq!(url.host_name(), "petstore.swagger.io");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BaseUrl {
    url: String,
    scheme_end: usize,
    host_start: usize,
    host_end: usize,
}

impl BaseUrl {
    /// Creates a new validated base URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBaseUrl`] if the URL is invalid.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into();
        let url = url.trim().trim_end_matches('/').to_string();

        let scheme_end = url
            .find("://")
            .ok_or_else(|| ConfigError::InvalidBaseUrl { url: url.clone() })?;

        let scheme = &url[..scheme_end];
        if scheme.is_empty() || !scheme.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(ConfigError::InvalidBaseUrl { url: url.clone() });
        }

        let host_start = scheme_end + 3;
        if host_start >= url.len() {
            return Err(ConfigError::InvalidBaseUrl { url: url.clone() });
        }

        // Host ends at port, path, query, or end of string
        let remainder = &url[host_start..];
        if remainder.contains(['?', '#']) {
            return Err(ConfigError::InvalidBaseUrl { url: url.clone() });
        }
        let host_end = remainder
            .find([':', '/'])
            .map_or(url.len(), |i| host_start + i);

        if host_end == host_start {
            return Err(ConfigError::InvalidBaseUrl { url: url.clone() });
        }

        Ok(Self {
            url,
            scheme_end,
            host_start,
            host_end,
        })
    }

    /// Returns the URL scheme (e.g., "https").
    #[must_use]
    pub fn scheme(&self) -> &str {
        &self.url[..self.scheme_end]
    }

    /// Returns the host name portion of the URL.
    #[must_use]
    pub fn host_name(&self) -> &str {
        &self.url[self.host_start..self.host_end]
    }

    /// Joins an operation path onto this base URL.
    ///
    /// Leading slashes on `path` are ignored.
    #[must_use]
    pub fn join(&self, path: &str) -> String {
        format!("{}/{}", self.url, path.trim_start_matches('/'))
    }
}

impl Default for BaseUrl {
    /// Returns [`DEFAULT_BASE_URL`], already in normalized form.
    fn default() -> Self {
        Self {
            url: DEFAULT_BASE_URL.to_string(),
            scheme_end: "http".len(),
            host_start: "http://".len(),
            host_end: "http://petstore.swagger.io".len(),
        }
    }
}

impl AsRef<str> for BaseUrl {
    fn as_ref(&self) -> &str {
        &self.url
    }
}

impl fmt::Display for BaseUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_key_rejects_empty_string() {
        assert!(matches!(ApiKey::new(""), Err(ConfigError::EmptyApiKey)));
    }

    #[test]
    fn test_access_token_rejects_empty_string() {
        assert!(matches!(
            AccessToken::new(""),
            Err(ConfigError::EmptyAccessToken)
        ));
    }

    #[test]
    fn test_credentials_are_masked_in_debug() {
        let key = ApiKey::new("special-key").unwrap();
        let token = AccessToken::new("secret-token").unwrap();

        assert_eq!(format!("{key:?}"), "ApiKey(*****)");
        assert_eq!(format!("{token:?}"), "AccessToken(*****)");
        assert!(!format!("{token:?}").contains("secret-token"));
    }

    #[test]
    fn test_base_url_accepts_path_and_port() {
        let url = BaseUrl::new("http://127.0.0.1:8080/v2").unwrap();
        assert_eq!(url.scheme(), "http");
        assert_eq!(url.host_name(), "127.0.0.1");
        assert_eq!(url.as_ref(), "http://127.0.0.1:8080/v2");
    }

    #[test]
    fn test_base_url_trims_trailing_slashes() {
        let url = BaseUrl::new("https://petstore.example.com//").unwrap();
        assert_eq!(url.as_ref(), "https://petstore.example.com");
    }

    #[test]
    fn test_base_url_join() {
        let url = BaseUrl::new("http://petstore.swagger.io/v2").unwrap();
        assert_eq!(
            url.join("store/inventory"),
            "http://petstore.swagger.io/v2/store/inventory"
        );
        assert_eq!(
            url.join("/store/order/5"),
            "http://petstore.swagger.io/v2/store/order/5"
        );
    }

    #[test]
    fn test_base_url_rejects_invalid() {
        assert!(BaseUrl::new("petstore.swagger.io").is_err());
        assert!(BaseUrl::new("https://").is_err());
        assert!(BaseUrl::new("://petstore.swagger.io").is_err());
        assert!(BaseUrl::new("http://:8080").is_err());
        assert!(BaseUrl::new("http://host/v2?x=1").is_err());
    }
}
