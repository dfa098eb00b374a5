//! # Store Client
//!
//! The handle through which everything outside the actor reaches the store.

use crate::error::StoreError;
use crate::message::StoreRequest;
use crate::record::Record;
use crate::store::Snapshot;
use tokio::sync::{mpsc, oneshot};

/// A type-safe handle to a [`StoreActor`](crate::StoreActor).
///
/// Holds only the sending half of the request channel, so cloning is cheap.
/// Every method sends one request and waits for its reply.
#[derive(Clone)]
pub struct StoreClient<R: Record> {
    sender: mpsc::Sender<StoreRequest<R>>,
}

impl<R: Record> StoreClient<R> {
    pub fn new(sender: mpsc::Sender<StoreRequest<R>>) -> Self {
        Self { sender }
    }

    async fn request<T>(
        &self,
        build: impl FnOnce(oneshot::Sender<Result<T, StoreError>>) -> StoreRequest<R>,
    ) -> Result<T, StoreError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(build(respond_to))
            .await
            .map_err(|_| StoreError::ActorClosed)?;
        response.await.map_err(|_| StoreError::ActorDropped)?
    }

    pub async fn insert(&self, record: R) -> Result<R::Key, StoreError> {
        self.request(|respond_to| StoreRequest::Insert { record, respond_to })
            .await
    }

    pub async fn get(&self, key: R::Key) -> Result<Option<R>, StoreError> {
        self.request(|respond_to| StoreRequest::Get { key, respond_to })
            .await
    }

    pub async fn patch(&self, key: R::Key, patch: R::Patch) -> Result<R, StoreError> {
        self.request(|respond_to| StoreRequest::Patch {
            key,
            patch,
            respond_to,
        })
        .await
    }

    pub async fn remove(&self, key: R::Key) -> Result<R, StoreError> {
        self.request(|respond_to| StoreRequest::Remove { key, respond_to })
            .await
    }

    /// Records matching `query`, in store order.
    pub async fn select(&self, query: R::Query) -> Result<Snapshot<R>, StoreError> {
        self.request(|respond_to| StoreRequest::Select {
            query: Some(query),
            respond_to,
        })
        .await
    }

    /// Every record, in store order.
    pub async fn all(&self) -> Result<Snapshot<R>, StoreError> {
        self.request(|respond_to| StoreRequest::Select {
            query: None,
            respond_to,
        })
        .await
    }

    pub async fn revision(&self) -> Result<u64, StoreError> {
        self.request(|respond_to| StoreRequest::Revision { respond_to })
            .await
    }
}
