//! Integration tests for the Store API against a mock Petstore server.

use std::sync::Arc;

use petstore_client::apis::{ApiError, StoreApi, StoreApiClient};
use petstore_client::models::{Order, OrderStatus};
use petstore_client::{ApiClient, ApiKey, AuthInfo, BaseUrl, HttpError, PetstoreConfig};
use serde_json::json;
use wiremock::matchers::{body_json, header, header_exists, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Creates a store client pointed at the mock server.
fn create_store(mock_server: &MockServer, api_key: Option<&str>) -> StoreApiClient {
    let mut builder = PetstoreConfig::builder().base_url(BaseUrl::new(mock_server.uri()).unwrap());
    if let Some(key) = api_key {
        builder = builder.api_key(ApiKey::new(key).unwrap());
    }
    let config = builder.build().unwrap();
    StoreApiClient::new(Arc::new(ApiClient::new(&config).unwrap()))
}

// ============================================================================
// delete_order
// ============================================================================

#[tokio::test]
async fn test_delete_order_sends_one_request() {
    let mock_server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/store/order/5"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&mock_server)
        .await;

    let store = create_store(&mock_server, None);
    store.delete_order("5").await.unwrap();
}

#[tokio::test]
async fn test_delete_order_with_empty_id_sends_nothing() {
    let mock_server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let store = create_store(&mock_server, None);
    let result = store.delete_order("").await;

    assert!(matches!(
        result,
        Err(ApiError::MissingRequiredParameter {
            parameter: "order_id",
            operation: "delete_order"
        })
    ));
}

#[tokio::test]
async fn test_delete_order_percent_encodes_id() {
    let mock_server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/store/order/a%2Fb"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&mock_server)
        .await;

    let store = create_store(&mock_server, None);
    store.delete_order("a/b").await.unwrap();
}

#[tokio::test]
async fn test_delete_missing_order_is_not_found() {
    let mock_server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/store/order/404"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "code": 1,
            "type": "error",
            "message": "Order Not Found"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let store = create_store(&mock_server, None);
    let result = store.delete_order("404").await;

    assert!(matches!(
        result,
        Err(ApiError::NotFound { resource: "Order", ref id, .. }) if id == "404"
    ));
}

// ============================================================================
// get_inventory
// ============================================================================

#[tokio::test]
async fn test_get_inventory_sends_default_api_key() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/store/inventory"))
        .and(header("api_key", "special-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "available": 7,
            "sold": 2
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let store = create_store(&mock_server, Some("special-key"));
    let inventory = store.get_inventory().await.unwrap();

    assert_eq!(inventory.get("available"), Some(&7));
    assert_eq!(inventory.get("sold"), Some(&2));
}

#[tokio::test]
async fn test_get_inventory_with_auth_overrides_default_key() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/store/inventory"))
        .and(header("api_key", "override-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"pending": 1})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let store = create_store(&mock_server, Some("default-key"));
    let auth = AuthInfo::new().with_api_key(ApiKey::new("override-key").unwrap());
    let inventory = store.get_inventory_with_auth(&auth).await.unwrap();

    assert_eq!(inventory.get("pending"), Some(&1));
    assert_eq!(
        store
            .api_client()
            .default_auth()
            .api_key()
            .map(AsRef::as_ref),
        Some("default-key")
    );
}

#[tokio::test]
async fn test_empty_auth_override_sends_no_api_key() {
    let mock_server = MockServer::start().await;
    // Registered first so it wins if the header is present
    Mock::given(method("GET"))
        .and(header_exists("api_key"))
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/store/inventory"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let store = create_store(&mock_server, Some("default-key"));
    let inventory = store
        .get_inventory_with_auth(&AuthInfo::new())
        .await
        .unwrap();

    assert!(inventory.is_empty());
}

#[tokio::test]
async fn test_get_inventory_rejects_malformed_body() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/store/inventory"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!(["available"])))
        .mount(&mock_server)
        .await;

    let store = create_store(&mock_server, None);
    let result = store.get_inventory().await;

    assert!(matches!(
        result,
        Err(ApiError::Deserialization {
            operation: "get_inventory",
            ..
        })
    ));
}

// ============================================================================
// get_order_by_id
// ============================================================================

#[tokio::test]
async fn test_get_order_by_id_decodes_order() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/store/order/3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 3,
            "petId": 10,
            "quantity": 1,
            "shipDate": "2024-05-01T12:00:00.000+0000",
            "status": "approved",
            "complete": true
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let store = create_store(&mock_server, None);
    let order = store.get_order_by_id(3).await.unwrap();

    assert_eq!(order.id, Some(3));
    assert_eq!(order.pet_id, Some(10));
    assert_eq!(order.status, Some(OrderStatus::Approved));
    assert!(order.ship_date.is_some());
    assert!(order.complete);
}

#[tokio::test]
async fn test_get_order_by_id_with_auth_sends_no_credentials() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(header_exists("api_key"))
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/store/order/4"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 4})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let store = create_store(&mock_server, None);
    let auth = AuthInfo::new().with_api_key(ApiKey::new("unused").unwrap());
    let order = store.get_order_by_id_with_auth(4, &auth).await.unwrap();

    assert_eq!(order.id, Some(4));
}

#[tokio::test]
async fn test_get_order_by_id_invalid_id_is_invalid_input() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/store/order/-1"))
        .respond_with(ResponseTemplate::new(400).set_body_string("Invalid ID supplied"))
        .mount(&mock_server)
        .await;

    let store = create_store(&mock_server, None);
    let result = store.get_order_by_id(-1).await;

    match result {
        Err(ApiError::InvalidInput { code, message, .. }) => {
            assert_eq!(code, 400);
            assert_eq!(message, "Invalid ID supplied");
        }
        other => panic!("Expected InvalidInput, got {other:?}"),
    }
}

// ============================================================================
// place_order
// ============================================================================

#[tokio::test]
async fn test_place_order_posts_json_and_returns_stored_order() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/store/order"))
        .and(body_json(json!({
            "petId": 10,
            "quantity": 2,
            "status": "placed",
            "complete": false
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 99,
            "petId": 10,
            "quantity": 2,
            "status": "placed",
            "complete": false
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let store = create_store(&mock_server, None);
    let order = Order {
        pet_id: Some(10),
        quantity: Some(2),
        status: Some(OrderStatus::Placed),
        ..Order::default()
    };
    let placed = store
        .place_order_with_auth(&order, &AuthInfo::new())
        .await
        .unwrap();

    assert_eq!(placed.id, Some(99));
    assert_eq!(placed.pet_id, Some(10));
}

#[tokio::test]
async fn test_place_order_server_error_passes_through() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/store/order"))
        .respond_with(
            ResponseTemplate::new(503)
                .insert_header("X-Request-Id", "req-503")
                .set_body_string("maintenance"),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let store = create_store(&mock_server, None);
    let result = store.place_order(&Order::default()).await;

    match result {
        Err(ApiError::Http(HttpError::Response(e))) => {
            assert_eq!(e.code, 503);
            assert_eq!(e.message, "maintenance");
            assert_eq!(e.error_reference.as_deref(), Some("req-503"));
        }
        other => panic!("Expected HttpError::Response, got {other:?}"),
    }
}

// ============================================================================
// Concurrency
// ============================================================================

#[tokio::test]
async fn test_concurrent_calls_share_one_client() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/store/inventory"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"available": 1})))
        .expect(4)
        .mount(&mock_server)
        .await;

    let store = create_store(&mock_server, None);
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let store = store.clone();
            tokio::spawn(async move { store.get_inventory().await })
        })
        .collect();

    for handle in handles {
        let inventory = handle.await.unwrap().unwrap();
        assert_eq!(inventory.get("available"), Some(&1));
    }
}
