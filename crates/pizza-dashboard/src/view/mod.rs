//! # Order View
//!
//! The filter model and the projection of the store it selects. The store
//! evaluates [`OrderFilter`] itself (it is the order record's query type),
//! so a derived view is always a consistent snapshot at one revision.

mod filter;
mod order_view;

pub use filter::*;
pub use order_view::*;
