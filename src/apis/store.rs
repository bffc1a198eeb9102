//! Store operations: orders and inventory.
//!
//! | Operation | Request | Auth |
//! |-----------|---------|------|
//! | [`StoreApi::delete_order`] | `DELETE store/order/{orderId}` | none |
//! | [`StoreApi::get_inventory`] | `GET store/inventory` | `api_key` |
//! | [`StoreApi::get_order_by_id`] | `GET store/order/{orderId}` | none |
//! | [`StoreApi::place_order`] | `POST store/order` | none |
//!
//! Every operation has a `_with_auth` form taking an [`AuthInfo`] that
//! replaces the client's default credentials for that call only.
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use petstore_client::{ApiClient, PetstoreConfig};
//! use petstore_client::apis::{StoreApi, StoreApiClient};
//! use petstore_client::models::Order;
//!
//! let client = Arc::new(ApiClient::new(&PetstoreConfig::default())?);
//! let store = StoreApiClient::new(client);
//!
//! let order = Order { pet_id: Some(1), quantity: Some(2), ..Order::default() };
//! let placed = store.place_order(&order).await?;
//! let inventory = store.get_inventory().await?;
//! store.delete_order(&placed.id.unwrap_or_default().to_string()).await?;
//! ```

use std::sync::Arc;

use crate::apis::params::{decode, encode, path_param, require_non_blank};
use crate::apis::ApiError;
use crate::auth::{AuthInfo, AuthScheme};
use crate::clients::{ApiClient, HttpError, HttpMethod, HttpRequest, RequestBody};
use crate::models::{Inventory, Order};

const ORDER: &str = "Order";
const INVENTORY: &str = "Inventory";

/// Store operations.
///
/// Each call sends exactly one logical request (more only when the client
/// retries a 429 or 500) and resolves exactly once.
#[allow(async_fn_in_trait)]
pub trait StoreApi {
    /// Deletes a purchase order by ID.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::MissingRequiredParameter`] if `order_id` is blank,
    /// without sending a request. A 404 maps to [`ApiError::NotFound`].
    async fn delete_order(&self, order_id: &str) -> Result<(), ApiError>;

    /// Deletes a purchase order by ID using the given credentials.
    ///
    /// # Errors
    ///
    /// See [`StoreApi::delete_order`].
    async fn delete_order_with_auth(
        &self,
        order_id: &str,
        auth_info: &AuthInfo,
    ) -> Result<(), ApiError>;

    /// Returns pet quantities keyed by status.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Deserialization`] if the body is not a map of
    /// integers, or [`ApiError::Http`] for transport failures.
    async fn get_inventory(&self) -> Result<Inventory, ApiError>;

    /// Returns pet quantities keyed by status using the given credentials.
    ///
    /// # Errors
    ///
    /// See [`StoreApi::get_inventory`].
    async fn get_inventory_with_auth(&self, auth_info: &AuthInfo) -> Result<Inventory, ApiError>;

    /// Finds a purchase order by ID.
    ///
    /// # Errors
    ///
    /// A 404 maps to [`ApiError::NotFound`], a 400 to
    /// [`ApiError::InvalidInput`].
    async fn get_order_by_id(&self, order_id: i64) -> Result<Order, ApiError>;

    /// Finds a purchase order by ID using the given credentials.
    ///
    /// # Errors
    ///
    /// See [`StoreApi::get_order_by_id`].
    async fn get_order_by_id_with_auth(
        &self,
        order_id: i64,
        auth_info: &AuthInfo,
    ) -> Result<Order, ApiError>;

    /// Places an order for a pet and returns the order as stored.
    ///
    /// # Errors
    ///
    /// A 400 maps to [`ApiError::InvalidInput`].
    async fn place_order(&self, order: &Order) -> Result<Order, ApiError>;

    /// Places an order for a pet using the given credentials.
    ///
    /// # Errors
    ///
    /// See [`StoreApi::place_order`].
    async fn place_order_with_auth(
        &self,
        order: &Order,
        auth_info: &AuthInfo,
    ) -> Result<Order, ApiError>;
}

/// [`StoreApi`] over a shared [`ApiClient`].
///
/// Cloning is cheap; clones share the underlying connection pool.
#[derive(Clone, Debug)]
pub struct StoreApiClient {
    client: Arc<ApiClient>,
}

// Verify StoreApiClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<StoreApiClient>();
};

impl StoreApiClient {
    /// Creates a store client over a shared transport.
    #[must_use]
    pub const fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// Returns the underlying transport.
    #[must_use]
    pub fn api_client(&self) -> &ApiClient {
        &self.client
    }

    async fn delete_order_inner(
        &self,
        order_id: &str,
        auth_info: Option<&AuthInfo>,
    ) -> Result<(), ApiError> {
        const OPERATION: &str = "delete_order";
        require_non_blank(order_id, "order_id", OPERATION)?;

        let path = format!("store/order/{}", path_param(order_id));
        let request = HttpRequest::builder(HttpMethod::Delete, path)
            .build()
            .map_err(HttpError::from)?;

        tracing::debug!("Deleting order {}", order_id);
        self.client
            .request(request, auth_info)
            .await
            .map_err(|e| ApiError::from_http_error(e, OPERATION, ORDER, Some(order_id)))?;
        Ok(())
    }

    async fn get_inventory_inner(
        &self,
        auth_info: Option<&AuthInfo>,
    ) -> Result<Inventory, ApiError> {
        const OPERATION: &str = "get_inventory";

        let request = HttpRequest::builder(HttpMethod::Get, "store/inventory")
            .auth(AuthScheme::ApiKey)
            .build()
            .map_err(HttpError::from)?;

        let response = self
            .client
            .request(request, auth_info)
            .await
            .map_err(|e| ApiError::from_http_error(e, OPERATION, INVENTORY, None))?;
        let inventory: Inventory = decode(response, OPERATION)?;
        tracing::debug!("Fetched inventory with {} statuses", inventory.len());
        Ok(inventory)
    }

    async fn get_order_by_id_inner(
        &self,
        order_id: i64,
        auth_info: Option<&AuthInfo>,
    ) -> Result<Order, ApiError> {
        const OPERATION: &str = "get_order_by_id";

        let path = format!("store/order/{}", path_param(order_id));
        let request = HttpRequest::builder(HttpMethod::Get, path)
            .build()
            .map_err(HttpError::from)?;

        let id = order_id.to_string();
        let response = self
            .client
            .request(request, auth_info)
            .await
            .map_err(|e| ApiError::from_http_error(e, OPERATION, ORDER, Some(&id)))?;
        decode(response, OPERATION)
    }

    async fn place_order_inner(
        &self,
        order: &Order,
        auth_info: Option<&AuthInfo>,
    ) -> Result<Order, ApiError> {
        const OPERATION: &str = "place_order";

        let request = HttpRequest::builder(HttpMethod::Post, "store/order")
            .body(RequestBody::Json(encode(order)?))
            .build()
            .map_err(HttpError::from)?;

        let response = self
            .client
            .request(request, auth_info)
            .await
            .map_err(|e| ApiError::from_http_error(e, OPERATION, ORDER, None))?;
        let placed: Order = decode(response, OPERATION)?;
        tracing::debug!("Placed order {:?} for pet {:?}", placed.id, placed.pet_id);
        Ok(placed)
    }
}

impl StoreApi for StoreApiClient {
    async fn delete_order(&self, order_id: &str) -> Result<(), ApiError> {
        self.delete_order_inner(order_id, None).await
    }

    async fn delete_order_with_auth(
        &self,
        order_id: &str,
        auth_info: &AuthInfo,
    ) -> Result<(), ApiError> {
        self.delete_order_inner(order_id, Some(auth_info)).await
    }

    async fn get_inventory(&self) -> Result<Inventory, ApiError> {
        self.get_inventory_inner(None).await
    }

    async fn get_inventory_with_auth(&self, auth_info: &AuthInfo) -> Result<Inventory, ApiError> {
        self.get_inventory_inner(Some(auth_info)).await
    }

    async fn get_order_by_id(&self, order_id: i64) -> Result<Order, ApiError> {
        self.get_order_by_id_inner(order_id, None).await
    }

    async fn get_order_by_id_with_auth(
        &self,
        order_id: i64,
        auth_info: &AuthInfo,
    ) -> Result<Order, ApiError> {
        self.get_order_by_id_inner(order_id, Some(auth_info)).await
    }

    async fn place_order(&self, order: &Order) -> Result<Order, ApiError> {
        self.place_order_inner(order, None).await
    }

    async fn place_order_with_auth(
        &self,
        order: &Order,
        auth_info: &AuthInfo,
    ) -> Result<Order, ApiError> {
        self.place_order_inner(order, Some(auth_info)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{BaseUrl, PetstoreConfig};

    fn create_store() -> StoreApiClient {
        // Nothing listens on port 9; requests that reach the network fail
        let config = PetstoreConfig::builder()
            .base_url(BaseUrl::new("http://127.0.0.1:9").unwrap())
            .build()
            .unwrap();
        StoreApiClient::new(Arc::new(ApiClient::new(&config).unwrap()))
    }

    #[tokio::test]
    async fn test_delete_order_rejects_empty_id_before_sending() {
        let store = create_store();

        let result = store.delete_order("").await;
        assert!(matches!(
            result,
            Err(ApiError::MissingRequiredParameter {
                parameter: "order_id",
                operation: "delete_order"
            })
        ));

        let result = store.delete_order_with_auth("   ", &AuthInfo::new()).await;
        assert!(matches!(
            result,
            Err(ApiError::MissingRequiredParameter { .. })
        ));
    }

    #[tokio::test]
    async fn test_unreachable_server_reports_network_error() {
        let store = create_store();

        let result = store.get_order_by_id(1).await;
        assert!(matches!(result, Err(ApiError::Http(HttpError::Network(_)))));
    }

    #[test]
    fn test_clients_share_transport() {
        let store = create_store();
        let clone = store.clone();

        assert!(std::ptr::eq(store.api_client(), clone.api_client()));
    }
}
