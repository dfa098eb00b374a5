//! # Store Messages
//!
//! Requests sent from a [`StoreClient`](crate::StoreClient) to the
//! [`StoreActor`](crate::StoreActor) that owns the collection.

use crate::error::StoreError;
use crate::record::Record;
use crate::store::Snapshot;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by the store actor.
pub type Response<T> = oneshot::Sender<Result<T, StoreError>>;

/// Internal message type sent to the store actor.
///
/// Each variant maps to one operation on the owned
/// [`RecordStore`](crate::RecordStore):
///
/// - **Insert**: append a fully-formed record; rejected on a duplicate key.
/// - **Get**: fetch one record by key.
/// - **Patch**: apply a [`Record::Patch`] to one record.
/// - **Remove**: delete one record by key.
/// - **Select**: copy the records matching an optional [`Record::Query`].
/// - **Revision**: read the mutation counter.
///
/// The enum is generic over `R: Record`, so a patch for one record type can
/// never be sent to a store of another.
#[derive(Debug)]
pub enum StoreRequest<R: Record> {
    Insert {
        record: R,
        respond_to: Response<R::Key>,
    },
    Get {
        key: R::Key,
        respond_to: Response<Option<R>>,
    },
    Patch {
        key: R::Key,
        patch: R::Patch,
        respond_to: Response<R>,
    },
    Remove {
        key: R::Key,
        respond_to: Response<R>,
    },
    Select {
        query: Option<R::Query>,
        respond_to: Response<Snapshot<R>>,
    },
    Revision {
        respond_to: Response<u64>,
    },
}
