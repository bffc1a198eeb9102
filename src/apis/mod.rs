//! Petstore API operations.
//!
//! - [`StoreApi`] / [`StoreApiClient`]: orders and inventory
//! - [`PetApi`] / [`PetApiClient`]: pets
//!
//! The operation traits let callers substitute their own implementation,
//! e.g. a fake in tests. The provided clients share one [`ApiClient`]:
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use petstore_client::{ApiClient, PetstoreConfig};
//! use petstore_client::apis::{PetApiClient, StoreApiClient};
//!
//! let client = Arc::new(ApiClient::new(&PetstoreConfig::default())?);
//! let store = StoreApiClient::new(Arc::clone(&client));
//! let pets = PetApiClient::new(client);
//! ```
//!
//! [`ApiClient`]: crate::clients::ApiClient

mod errors;
mod params;
mod pet;
mod store;

pub use errors::ApiError;
pub use pet::{FileUpload, PetApi, PetApiClient};
pub use store::{StoreApi, StoreApiClient};
