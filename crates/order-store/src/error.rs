//! # Store Errors
//!
//! Errors produced by the store itself, independent of any record type.
//! Domain clients translate these into their own error enums through
//! [`StoreHandle::map_error`](crate::StoreHandle::map_error).

/// Errors that can occur within the record store or its actor.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Store actor closed")]
    ActorClosed,
    #[error("Store actor dropped response channel")]
    ActorDropped,
    #[error("Record not found: {0}")]
    NotFound(String),
    #[error("Duplicate key: {0}")]
    DuplicateKey(String),
    #[error("Record error: {0}")]
    Record(Box<dyn std::error::Error + Send + Sync>),
}

impl StoreError {
    /// Wrap a record-level error.
    pub fn record<E>(error: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        StoreError::Record(Box::new(error))
    }
}
