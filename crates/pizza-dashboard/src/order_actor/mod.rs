//! # Order Actor
//!
//! The store actor that owns every order of the dashboard.
//!
//! ## Structure
//!
//! - [`entity`] - [`Record`](order_store::Record) implementation for [`Order`]
//! - [`error`] - [`OrderError`] type for type-safe error handling
//! - [`new()`] / [`seeded()`] - Factory functions that create the actor and client
//!
//! ## Usage
//!
//! ```rust
//! use pizza_dashboard::clients::OrderClient;
//! use pizza_dashboard::model::{sample_orders, Menu, OrderStatus};
//! use pizza_dashboard::order_actor;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, client) = order_actor::seeded(32, sample_orders(&Menu::standard()))?;
//!     tokio::spawn(actor.run());
//!
//!     let client = OrderClient::new(client);
//!     let order = client.update_status("ORD-12345".into(), OrderStatus::Ready).await?;
//!     assert_eq!(order.status, OrderStatus::Ready);
//!     Ok(())
//! }
//! ```

pub mod entity;
pub mod error;

pub use error::*;

use crate::model::Order;
use order_store::{StoreActor, StoreClient};

/// Creates an empty Order actor and its client.
pub fn new(buffer_size: usize) -> (StoreActor<Order>, StoreClient<Order>) {
    StoreActor::new(buffer_size)
}

/// Creates an Order actor holding `orders`, in the given order.
pub fn seeded(
    buffer_size: usize,
    orders: Vec<Order>,
) -> Result<(StoreActor<Order>, StoreClient<Order>), OrderError> {
    StoreActor::seeded(buffer_size, orders)
        .map_err(|e| OrderError::ValidationError(format!("invalid seed data: {e}")))
}
