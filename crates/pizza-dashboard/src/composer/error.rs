//! Error types for the order composer.

use crate::order_actor::OrderError;
use thiserror::Error;

/// Errors that can occur while composing or submitting an order.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ComposerError {
    /// The draft is missing something it needs before submission.
    #[error("{0}")]
    ValidationError(String),

    #[error("No pizza at position {index} (order has {len})")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Pizza not on the menu: {0}")]
    UnknownPizza(String),

    /// A draft operation was called while no draft was open.
    #[error("No order is being composed")]
    NotDrafting,

    /// Every candidate order number was already taken.
    #[error("Could not find a free order number after {0} attempts")]
    NumbersExhausted(usize),

    #[error(transparent)]
    Store(#[from] OrderError),
}
