//! # Petstore API Rust client
//!
//! A typed async client for the OpenAPI Petstore sample service.
//!
//! ## Overview
//!
//! This crate provides:
//! - Type-safe configuration via [`PetstoreConfig`] and [`PetstoreConfigBuilder`]
//! - Validated newtypes for credentials and the service URL
//! - Per-call credential overrides via [`AuthInfo`]
//! - Store operations (orders, inventory) via [`apis::StoreApi`]
//! - Pet operations via [`apis::PetApi`]
//! - An async HTTP transport with retry handling for 429 and 500 responses
//!
//! ## Quick Start
//!
//! ```rust
//! use petstore_client::{ApiKey, BaseUrl, PetstoreConfig};
//!
//! let config = PetstoreConfig::builder()
//!     .base_url(BaseUrl::new("http://petstore.swagger.io/v2").unwrap())
//!     .api_key(ApiKey::new("special-key").unwrap())
//!     .tries(3)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.tries(), 3);
//! ```
//!
//! ## Calling the Store API
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use petstore_client::{ApiClient, PetstoreConfig};
//! use petstore_client::apis::{StoreApi, StoreApiClient};
//! use petstore_client::models::{Order, OrderStatus};
//!
//! let client = Arc::new(ApiClient::new(&PetstoreConfig::default())?);
//! let store = StoreApiClient::new(client);
//!
//! let order = Order {
//!     pet_id: Some(10),
//!     quantity: Some(1),
//!     status: Some(OrderStatus::Placed),
//!     ..Order::default()
//! };
//! let placed = store.place_order(&order).await?;
//! let fetched = store.get_order_by_id(placed.id.unwrap_or_default()).await?;
//! ```
//!
//! ## Overriding credentials for one call
//!
//! ```rust,ignore
//! use petstore_client::{ApiKey, AuthInfo};
//!
//! let auth = AuthInfo::new().with_api_key(ApiKey::new("other-key")?);
//! let inventory = store.get_inventory_with_auth(&auth).await?;
//! ```
//!
//! An [`AuthInfo`] replaces the client's default credentials for that call;
//! the client's defaults are left untouched.
//!
//! ## Error handling
//!
//! Operations return [`apis::ApiError`]. Missing required arguments fail
//! before any request is sent; 404 and 400/405 responses are classified;
//! everything else carries the transport's [`HttpError`] unchanged.
//!
//! ## Logging
//!
//! The crate emits [`tracing`] events: `debug` for each attempt and
//! completed operation, `warn` for retries and deprecated operations.
//! Install a subscriber in the application to see them.

pub mod apis;
pub mod auth;
pub mod clients;
pub mod config;
pub mod error;
pub mod models;

// Re-export public types at crate root for convenience
pub use auth::{AuthInfo, AuthScheme};
pub use config::{AccessToken, ApiKey, BaseUrl, PetstoreConfig, PetstoreConfigBuilder};
pub use error::ConfigError;

// Re-export HTTP client types
pub use clients::{
    ApiClient, HttpError, HttpMethod, HttpRequest, HttpRequestBuilder, HttpResponse,
    HttpResponseError, InvalidHttpRequestError, MaxHttpRetriesExceededError,
};

// Re-export operation types
pub use apis::{ApiError, PetApi, PetApiClient, StoreApi, StoreApiClient};
