//! # Store Actor
//!
//! [`StoreActor`] is the single owner of a [`RecordStore`]. It runs in its own
//! Tokio task and processes [`StoreRequest`]s one at a time, so every
//! operation runs to completion before the next one starts and the
//! collection needs no lock.

use crate::client::StoreClient;
use crate::error::StoreError;
use crate::message::StoreRequest;
use crate::record::Record;
use crate::store::RecordStore;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The actor that exclusively owns a collection of records.
///
/// # Usage Pattern
///
/// 1. **Create**: [`StoreActor::new`] (empty) or [`StoreActor::seeded`] returns
///    the actor and its [`StoreClient`].
/// 2. **Run**: spawn [`StoreActor::run`] on the runtime.
/// 3. **Share**: clone the client and hand it to every consumer.
///
/// The loop ends once every client has been dropped.
///
/// ```rust
/// use order_store::{Record, StoreActor};
///
/// #[derive(Clone, Debug)]
/// struct Note { id: u32, text: String }
///
/// #[derive(Debug, thiserror::Error)]
/// #[error("note error")]
/// struct NoteError;
///
/// impl Record for Note {
///     type Key = u32;
///     type Patch = String;
///     type Query = ();
///     type Error = NoteError;
///
///     fn key(&self) -> &u32 { &self.id }
///     fn apply(&mut self, text: String) -> Result<(), NoteError> { self.text = text; Ok(()) }
///     fn matches(&self, _: &()) -> bool { true }
/// }
///
/// #[tokio::main]
/// async fn main() {
///     let (actor, client) = StoreActor::<Note>::new(10);
///     let handle = tokio::spawn(actor.run());
///
///     client.insert(Note { id: 1, text: "hello".into() }).await.unwrap();
///     let note = client.patch(1, "bye".into()).await.unwrap();
///     assert_eq!(note.text, "bye");
///
///     drop(client);
///     handle.await.unwrap();
/// }
/// ```
pub struct StoreActor<R: Record> {
    receiver: mpsc::Receiver<StoreRequest<R>>,
    store: RecordStore<R>,
}

impl<R: Record> StoreActor<R> {
    /// Creates an empty store actor and its client.
    ///
    /// `buffer_size` is the capacity of the request channel; when it is full,
    /// client calls wait for space.
    pub fn new(buffer_size: usize) -> (Self, StoreClient<R>) {
        Self::from_store(buffer_size, RecordStore::new())
    }

    /// Creates a store actor pre-loaded with `records`, in order.
    pub fn seeded(
        buffer_size: usize,
        records: impl IntoIterator<Item = R>,
    ) -> Result<(Self, StoreClient<R>), StoreError> {
        let store = RecordStore::with_records(records)?;
        Ok(Self::from_store(buffer_size, store))
    }

    fn from_store(buffer_size: usize, store: RecordStore<R>) -> (Self, StoreClient<R>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self { receiver, store };
        (actor, StoreClient::new(sender))
    }

    /// Runs the request loop until the channel closes.
    pub async fn run(mut self) {
        // "Order" rather than "pizza_dashboard::model::order::Order"
        let record_type = std::any::type_name::<R>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(record_type, size = self.store.len(), "Store started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                StoreRequest::Insert { record, respond_to } => {
                    debug!(record_type, ?record, "Insert");
                    match self.store.insert(record) {
                        Ok(key) => {
                            info!(record_type, %key, size = self.store.len(), revision = self.store.revision(), "Inserted");
                            let _ = respond_to.send(Ok(key));
                        }
                        Err(e) => {
                            warn!(record_type, error = %e, "Insert rejected");
                            let _ = respond_to.send(Err(e));
                        }
                    }
                }
                StoreRequest::Get { key, respond_to } => {
                    let record = self.store.get(&key).cloned();
                    debug!(record_type, %key, found = record.is_some(), "Get");
                    let _ = respond_to.send(Ok(record));
                }
                StoreRequest::Patch {
                    key,
                    patch,
                    respond_to,
                } => {
                    debug!(record_type, %key, ?patch, "Patch");
                    let result = self.store.patch(&key, patch);
                    match &result {
                        Ok(_) => info!(record_type, %key, revision = self.store.revision(), "Patched"),
                        Err(e) => warn!(record_type, %key, error = %e, "Patch rejected"),
                    }
                    let _ = respond_to.send(result);
                }
                StoreRequest::Remove { key, respond_to } => {
                    debug!(record_type, %key, "Remove");
                    let result = self.store.remove(&key);
                    match &result {
                        Ok(_) => info!(record_type, %key, size = self.store.len(), revision = self.store.revision(), "Removed"),
                        Err(e) => warn!(record_type, %key, error = %e, "Remove rejected"),
                    }
                    let _ = respond_to.send(result);
                }
                StoreRequest::Select { query, respond_to } => {
                    let snapshot = self.store.snapshot(query.as_ref());
                    debug!(record_type, ?query, matched = snapshot.len(), "Select");
                    let _ = respond_to.send(Ok(snapshot));
                }
                StoreRequest::Revision { respond_to } => {
                    let _ = respond_to.send(Ok(self.store.revision()));
                }
            }
        }

        info!(record_type, size = self.store.len(), "Shutdown");
    }
}
