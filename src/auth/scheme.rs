//! Auth schemes declared by the Petstore API.

use std::fmt;

/// A named security scheme an operation may require.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AuthScheme {
    /// API key passed in the `api_key` request header.
    ApiKey,
    /// OAuth2 implicit flow; the access token is sent as a bearer token.
    PetstoreAuth,
}

impl AuthScheme {
    /// Header carrying the API key.
    pub const API_KEY_HEADER: &'static str = "api_key";

    /// Returns the scheme name used by the API description.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::ApiKey => "api_key",
            Self::PetstoreAuth => "petstore_auth",
        }
    }
}

impl fmt::Display for AuthScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scheme_names() {
        assert_eq!(AuthScheme::ApiKey.to_string(), "api_key");
        assert_eq!(AuthScheme::PetstoreAuth.to_string(), "petstore_auth");
    }
}
