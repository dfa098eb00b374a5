//! Typed clients over the store actors.

pub mod order_client;

pub use order_client::OrderClient;
pub use order_store::StoreHandle;
