//! Error types for the Order actor.

use thiserror::Error;

/// Errors that can occur during order operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    /// The order data or the requested change is invalid, including an
    /// order number that is already taken.
    #[error("Order validation error: {0}")]
    ValidationError(String),

    /// No order with this number exists.
    #[error("Order not found: {0}")]
    NotFound(String),

    /// The store actor could not be reached.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}
