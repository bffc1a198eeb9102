//! Order model.
//!
//! An [`Order`] is a purchase order for a pet. Orders are created with
//! [`StoreApi::place_order`](crate::apis::StoreApi::place_order); the server
//! fills in `id` and returns the stored order.
//!
//! # Example
//!
//! ```rust
//! use petstore_client::models::{Order, OrderStatus};
//!
//! let order = Order {
//!     pet_id: Some(42),
//!     quantity: Some(1),
//!     status: Some(OrderStatus::Placed),
//!     ..Default::default()
//! };
//!
//! let json = serde_json::to_value(&order).unwrap();
//! assert_eq!(json["petId"], 42);
//! assert!(json.get("id").is_none());
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The status of an order.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    /// The order has been placed.
    Placed,
    /// The order has been approved.
    Approved,
    /// The order has been delivered.
    Delivered,
}

/// A purchase order for a pet.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Server-assigned order ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    /// ID of the ordered pet.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pet_id: Option<i64>,

    /// Number of pets ordered.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<i32>,

    /// When the order ships.
    #[serde(
        default,
        with = "super::datetime",
        skip_serializing_if = "Option::is_none"
    )]
    pub ship_date: Option<DateTime<Utc>>,

    /// Order status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<OrderStatus>,

    /// Whether the order is complete.
    #[serde(default)]
    pub complete: bool,
}
