//! # Record Trait
//!
//! The `Record` trait is the contract a value must satisfy to live inside a
//! [`RecordStore`](crate::RecordStore) and be served by a
//! [`StoreActor`](crate::StoreActor). It names the key that identifies a
//! record, the patch type used to mutate it, the query type used to select
//! a subset, and the error type its own rules produce.
//!
//! # Architecture Note
//! The store never looks inside a record. Uniqueness is decided by
//! [`Record::key`], mutation by [`Record::apply`] and selection by
//! [`Record::matches`], so the collection logic and the actor loop are
//! written once and reused for any record type.
//!
//! # Provided Methods (Hooks)
//! - [`Record::validate`] runs before a record is inserted. The default
//!   accepts everything.

use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Trait that any value must implement to be held by a [`RecordStore`](crate::RecordStore).
///
/// Records carry their own key. The key is read once at insertion time and
/// must not change afterwards: [`Record::apply`] implementations must leave
/// it untouched.
pub trait Record: Clone + Debug + Send + Sync + 'static {
    /// The unique identifier of a record (e.g. an order number).
    type Key: Eq + Hash + Clone + Send + Sync + Display + Debug;

    /// A partial change applied to an existing record.
    type Patch: Send + Sync + Debug;

    /// A predicate description used to select a subset of records.
    type Query: Send + Sync + Debug;

    /// The error type produced by this record's own rules.
    type Error: std::error::Error + Send + Sync + 'static;

    /// The record's key.
    fn key(&self) -> &Self::Key;

    /// Called before the record is inserted. Rejecting here leaves the store unchanged.
    fn validate(&self) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Apply a patch in place.
    ///
    /// The store applies patches to a copy and only commits the copy when this
    /// returns `Ok`, so a failing patch never leaves a half-updated record behind.
    fn apply(&mut self, patch: Self::Patch) -> Result<(), Self::Error>;

    /// Whether this record belongs to the subset described by `query`.
    fn matches(&self, query: &Self::Query) -> bool;
}
