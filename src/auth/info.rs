//! Per-call credential override.

use crate::auth::AuthScheme;
use crate::config::{AccessToken, ApiKey, PetstoreConfig};

/// Credentials used for a single call.
///
/// An `AuthInfo` replaces the client's default credentials as a whole: a
/// scheme with no credential here sends nothing, even if the client has a
/// default for it. `AuthInfo::new()` therefore sends the call anonymously.
///
/// Credential values are masked in `Debug` output.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthInfo {
    api_key: Option<ApiKey>,
    access_token: Option<AccessToken>,
}

impl AuthInfo {
    /// Creates an `AuthInfo` with no credentials.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the default credentials from a configuration.
    #[must_use]
    pub fn from_config(config: &PetstoreConfig) -> Self {
        Self {
            api_key: config.api_key().cloned(),
            access_token: config.access_token().cloned(),
        }
    }

    /// Sets the API key for the `api_key` scheme.
    #[must_use]
    pub fn with_api_key(mut self, key: ApiKey) -> Self {
        self.api_key = Some(key);
        self
    }

    /// Sets the access token for the `petstore_auth` scheme.
    #[must_use]
    pub fn with_access_token(mut self, token: AccessToken) -> Self {
        self.access_token = Some(token);
        self
    }

    /// Returns the API key, if set.
    #[must_use]
    pub const fn api_key(&self) -> Option<&ApiKey> {
        self.api_key.as_ref()
    }

    /// Returns the access token, if set.
    #[must_use]
    pub const fn access_token(&self) -> Option<&AccessToken> {
        self.access_token.as_ref()
    }

    /// Returns `true` if no credential is set.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.api_key.is_none() && self.access_token.is_none()
    }

    /// Returns the headers that authenticate a request declaring `schemes`.
    ///
    /// Schemes without a matching credential are skipped.
    #[must_use]
    pub fn headers_for(&self, schemes: &[AuthScheme]) -> Vec<(String, String)> {
        schemes
            .iter()
            .filter_map(|scheme| match scheme {
                AuthScheme::ApiKey => self.api_key.as_ref().map(|key| {
                    (
                        AuthScheme::API_KEY_HEADER.to_string(),
                        key.as_ref().to_string(),
                    )
                }),
                AuthScheme::PetstoreAuth => self.access_token.as_ref().map(|token| {
                    (
                        "Authorization".to_string(),
                        format!("Bearer {}", token.as_ref()),
                    )
                }),
            })
            .collect()
    }
}
