//! # Order Composer
//!
//! Drafts a new order: customer details, a pizza list picked from the menu
//! with autocomplete, and a running total. A draft only becomes an
//! [`Order`](crate::model::Order) on a successful [`OrderComposer::submit`];
//! appending that order to the store is the caller's job (see
//! [`NewOrderForm`](crate::pages::NewOrderForm)).
//!
//! ## Structure
//!
//! - [`ComposerDraft`] - the uncommitted order
//! - [`OrderComposer`] - the state machine around one draft
//! - [`OrderNumberSource`] - random or sequential `ORD-` numbers
//! - [`ComposerError`] - everything that can go wrong while composing

mod draft;
mod error;
mod numbers;
mod order_composer;

pub use draft::*;
pub use error::*;
pub use numbers::*;
pub use order_composer::*;
