//! Credential handling for Petstore operations.
//!
//! Every operation declares the auth schemes it accepts (see [`AuthScheme`]).
//! When a request is sent, the [`ApiClient`](crate::clients::ApiClient)
//! resolves credentials for those schemes from either:
//!
//! - the default credentials in [`PetstoreConfig`](crate::PetstoreConfig), or
//! - an [`AuthInfo`] passed to a `*_with_auth` method, which replaces the
//!   defaults for that single call.
//!
//! # Example
//!
//! ```rust
//! use petstore_client::{AccessToken, ApiKey};
//! use petstore_client::auth::{AuthInfo, AuthScheme};
//!
//! let auth = AuthInfo::new()
//!     .with_api_key(ApiKey::new("special-key").unwrap())
//!     .with_access_token(AccessToken::new("token").unwrap());
//!
//! let headers = auth.headers_for(&[AuthScheme::ApiKey]);
//! assert_eq!(headers, vec![("api_key".to_string(), "special-key".to_string())]);
//! ```

mod info;
mod scheme;

pub use info::AuthInfo;
pub use scheme::AuthScheme;
