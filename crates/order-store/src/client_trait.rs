//! # StoreHandle Trait
//!
//! Domain clients wrap a [`StoreClient`] and speak their own error type.
//! Implementing [`StoreHandle`] gives them `get`, `remove` and `snapshot`
//! for free, with store errors translated through [`StoreHandle::map_error`].
use crate::{Record, Snapshot, StoreClient, StoreError};
use async_trait::async_trait;

/// Trait for record-specific clients to inherit the common store operations.
///
/// # Example
///
/// ```rust
/// use order_store::{Record, StoreClient, StoreError, StoreHandle};
///
/// #[derive(Clone, Debug)]
/// struct Note { id: u32 }
///
/// #[derive(Debug, thiserror::Error)]
/// #[error("{0}")]
/// struct NoteError(String);
///
/// impl Record for Note {
///     type Key = u32;
///     type Patch = ();
///     type Query = ();
///     type Error = NoteError;
///     fn key(&self) -> &u32 { &self.id }
///     fn apply(&mut self, _: ()) -> Result<(), NoteError> { Ok(()) }
///     fn matches(&self, _: &()) -> bool { true }
/// }
///
/// struct NoteClient { inner: StoreClient<Note> }
///
/// impl StoreHandle<Note> for NoteClient {
///     type Error = NoteError;
///     fn inner(&self) -> &StoreClient<Note> { &self.inner }
///     fn map_error(e: StoreError) -> NoteError { NoteError(e.to_string()) }
/// }
///
/// async fn usage(client: NoteClient) {
///     // get(), remove() and snapshot() come from the trait
///     let _ = client.get(1).await;
///     let _ = client.remove(1).await;
/// }
/// ```
#[async_trait]
pub trait StoreHandle<R: Record>: Send + Sync {
    /// The record-specific error type.
    type Error: Send + Sync;

    /// Access the inner generic client.
    fn inner(&self) -> &StoreClient<R>;

    /// Map store errors to the record-specific error type.
    fn map_error(e: StoreError) -> Self::Error;

    /// Fetch a record by key.
    #[tracing::instrument(skip(self))]
    async fn get(&self, key: R::Key) -> Result<Option<R>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().get(key).await.map_err(Self::map_error)
    }

    /// Remove a record by key, returning it.
    #[tracing::instrument(skip(self))]
    async fn remove(&self, key: R::Key) -> Result<R, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().remove(key).await.map_err(Self::map_error)
    }

    /// Every record, in store order.
    #[tracing::instrument(skip(self))]
    async fn snapshot(&self) -> Result<Snapshot<R>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().all().await.map_err(Self::map_error)
    }
}
