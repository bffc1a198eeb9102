//! Data types exchanged with the Petstore API.
//!
//! - [`Order`] and [`OrderStatus`]: purchase orders (Store API)
//! - [`Inventory`]: counts of pets by status (Store API)
//! - [`Pet`], [`PetStatus`], [`Category`], [`Tag`]: pets (Pet API)
//! - [`ApiResponse`]: the generic response body of uploads and errors
//!
//! Field names follow Rust conventions and are renamed to the service's
//! camelCase on the wire. Optional fields that are `None` are omitted when
//! serialized.

mod api_response;
mod category;
mod datetime;
mod order;
mod pet;
mod tag;

use std::collections::HashMap;

pub use api_response::ApiResponse;
pub use category::Category;
pub use order::{Order, OrderStatus};
pub use pet::{Pet, PetStatus};
pub use tag::Tag;

/// Map of pet status name to the number of pets with that status.
pub type Inventory = HashMap<String, i32>;
