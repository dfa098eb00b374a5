//! # Mock Store & Testing Guide
//!
//! [`MockStore<R>`] hands out a real [`StoreClient<R>`] whose requests are
//! answered from a queue of expectations instead of a collection. Use it to
//! test domain clients and the code built on them without running a
//! [`StoreActor`](crate::StoreActor).
//!
//! ## When to use the mock vs the real actor
//!
//! | | MockStore | StoreActor |
//! |---|---|---|
//! | **State** | None, only scripted replies | Real collection |
//! | **Error injection** | `return_err(...)` | Needs the right data |
//! | **Use case** | Logic *around* the client | The store itself, full flows |
//!
//! ## Example
//!
//! ```rust
//! use order_store::mock::MockStore;
//! use order_store::{Record, StoreError};
//!
//! #[derive(Clone, Debug, PartialEq)]
//! struct Note { id: u32, text: String }
//!
//! #[derive(Debug, thiserror::Error)]
//! #[error("note error")]
//! struct NoteError;
//!
//! impl Record for Note {
//!     type Key = u32;
//!     type Patch = String;
//!     type Query = ();
//!     type Error = NoteError;
//!     fn key(&self) -> &u32 { &self.id }
//!     fn apply(&mut self, text: String) -> Result<(), NoteError> { self.text = text; Ok(()) }
//!     fn matches(&self, _: &()) -> bool { true }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut mock = MockStore::<Note>::new();
//!     mock.expect_get(1).return_ok(Some(Note { id: 1, text: "hi".into() }));
//!     mock.expect_remove(2).return_err(StoreError::NotFound("2".into()));
//!
//!     let client = mock.client();
//!     assert_eq!(client.get(1).await.unwrap().unwrap().text, "hi");
//!     assert!(matches!(client.remove(2).await, Err(StoreError::NotFound(_))));
//!
//!     mock.verify();
//! }
//! ```
//!
//! For tests that need to inspect the raw requests, [`create_mock_client`]
//! returns a client together with the receiving end of its channel, and the
//! `expect_*` free functions pull the next request off it.

use crate::client::StoreClient;
use crate::error::StoreError;
use crate::message::StoreRequest;
use crate::record::Record;
use crate::store::Snapshot;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::{mpsc, oneshot};

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

/// A scripted reply for the next request.
enum Expectation<R: Record> {
    Insert {
        response: Result<R::Key, StoreError>,
    },
    Get {
        key: R::Key,
        response: Result<Option<R>, StoreError>,
    },
    Patch {
        key: R::Key,
        response: Result<R, StoreError>,
    },
    Remove {
        key: R::Key,
        response: Result<R, StoreError>,
    },
    Select {
        response: Result<Snapshot<R>, StoreError>,
    },
    Revision {
        response: Result<u64, StoreError>,
    },
}

type Expectations<R> = Arc<Mutex<VecDeque<Expectation<R>>>>;

/// A mock store with expectation tracking.
///
/// Requests are matched against expectations in the order the expectations
/// were registered. A request of the wrong kind, or for the wrong key, panics
/// the mock task, which the caller observes as
/// [`StoreError::ActorDropped`].
pub struct MockStore<R: Record> {
    client: StoreClient<R>,
    expectations: Expectations<R>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<R: Record> Default for MockStore<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Record> MockStore<R> {
    /// Creates a mock store with no expectations. Must be called inside a Tokio runtime.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<StoreRequest<R>>(100);
        let expectations: Expectations<R> = Arc::new(Mutex::new(VecDeque::new()));
        let queue = expectations.clone();

        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let next = queue.lock().unwrap().pop_front();

                match (request, next) {
                    (
                        StoreRequest::Insert { respond_to, .. },
                        Some(Expectation::Insert { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        StoreRequest::Get { key, respond_to },
                        Some(Expectation::Get {
                            key: expected,
                            response,
                        }),
                    ) => {
                        assert_eq!(key, expected, "unexpected key for Get");
                        let _ = respond_to.send(response);
                    }
                    (
                        StoreRequest::Patch {
                            key, respond_to, ..
                        },
                        Some(Expectation::Patch {
                            key: expected,
                            response,
                        }),
                    ) => {
                        assert_eq!(key, expected, "unexpected key for Patch");
                        let _ = respond_to.send(response);
                    }
                    (
                        StoreRequest::Remove { key, respond_to },
                        Some(Expectation::Remove {
                            key: expected,
                            response,
                        }),
                    ) => {
                        assert_eq!(key, expected, "unexpected key for Remove");
                        let _ = respond_to.send(response);
                    }
                    (
                        StoreRequest::Select { respond_to, .. },
                        Some(Expectation::Select { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        StoreRequest::Revision { respond_to },
                        Some(Expectation::Revision { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (request, _) => {
                        panic!("Unexpected request or expectation mismatch: {request:?}");
                    }
                }
            }
        });

        Self {
            client: StoreClient::new(sender),
            expectations,
            _handle: handle,
        }
    }

    /// Returns a client wired to this mock.
    pub fn client(&self) -> StoreClient<R> {
        self.client.clone()
    }

    pub fn expect_insert(&mut self) -> ReplyBuilder<R, R::Key> {
        ReplyBuilder::new(self.expectations.clone(), |response| {
            Expectation::Insert { response }
        })
    }

    pub fn expect_get(&mut self, key: R::Key) -> ReplyBuilder<R, Option<R>> {
        ReplyBuilder::new(self.expectations.clone(), move |response| {
            Expectation::Get { key, response }
        })
    }

    pub fn expect_patch(&mut self, key: R::Key) -> ReplyBuilder<R, R> {
        ReplyBuilder::new(self.expectations.clone(), move |response| {
            Expectation::Patch { key, response }
        })
    }

    pub fn expect_remove(&mut self, key: R::Key) -> ReplyBuilder<R, R> {
        ReplyBuilder::new(self.expectations.clone(), move |response| {
            Expectation::Remove { key, response }
        })
    }

    pub fn expect_select(&mut self) -> ReplyBuilder<R, Snapshot<R>> {
        ReplyBuilder::new(self.expectations.clone(), |response| {
            Expectation::Select { response }
        })
    }

    pub fn expect_revision(&mut self) -> ReplyBuilder<R, u64> {
        ReplyBuilder::new(self.expectations.clone(), |response| {
            Expectation::Revision { response }
        })
    }

    /// Panics unless every registered expectation has been consumed.
    pub fn verify(&self) {
        let remaining = self.expectations.lock().unwrap().len();
        if remaining != 0 {
            panic!("Not all expectations were met. {remaining} remaining");
        }
    }
}

/// Completes an expectation with the reply the mock should send.
pub struct ReplyBuilder<R: Record, T> {
    expectations: Expectations<R>,
    make: Box<dyn FnOnce(Result<T, StoreError>) -> Expectation<R> + Send>,
}

impl<R: Record, T> ReplyBuilder<R, T> {
    fn new(
        expectations: Expectations<R>,
        make: impl FnOnce(Result<T, StoreError>) -> Expectation<R> + Send + 'static,
    ) -> Self {
        Self {
            expectations,
            make: Box::new(make),
        }
    }

    /// Reply with a successful result.
    pub fn return_ok(self, value: T) {
        self.push(Ok(value));
    }

    /// Reply with an error.
    pub fn return_err(self, error: StoreError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<T, StoreError>) {
        let expectation = (self.make)(response);
        self.expectations.lock().unwrap().push_back(expectation);
    }
}

// =============================================================================
// RAW CHANNEL HELPERS
// =============================================================================

/// Creates a client plus the receiver its requests arrive on.
pub fn create_mock_client<R: Record>(
    buffer_size: usize,
) -> (StoreClient<R>, mpsc::Receiver<StoreRequest<R>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (StoreClient::new(sender), receiver)
}

/// Next request, if it is an Insert.
pub async fn expect_insert<R: Record>(
    receiver: &mut mpsc::Receiver<StoreRequest<R>>,
) -> Option<(R, oneshot::Sender<Result<R::Key, StoreError>>)> {
    match receiver.recv().await {
        Some(StoreRequest::Insert { record, respond_to }) => Some((record, respond_to)),
        _ => None,
    }
}

/// Next request, if it is a Patch.
pub async fn expect_patch<R: Record>(
    receiver: &mut mpsc::Receiver<StoreRequest<R>>,
) -> Option<(R::Key, R::Patch, oneshot::Sender<Result<R, StoreError>>)> {
    match receiver.recv().await {
        Some(StoreRequest::Patch {
            key,
            patch,
            respond_to,
        }) => Some((key, patch, respond_to)),
        _ => None,
    }
}

/// Next request, if it is a Remove.
pub async fn expect_remove<R: Record>(
    receiver: &mut mpsc::Receiver<StoreRequest<R>>,
) -> Option<(R::Key, oneshot::Sender<Result<R, StoreError>>)> {
    match receiver.recv().await {
        Some(StoreRequest::Remove { key, respond_to }) => Some((key, respond_to)),
        _ => None,
    }
}

/// Next request, if it is a Select.
pub async fn expect_select<R: Record>(
    receiver: &mut mpsc::Receiver<StoreRequest<R>>,
) -> Option<(
    Option<R::Query>,
    oneshot::Sender<Result<Snapshot<R>, StoreError>>,
)> {
    match receiver.recv().await {
        Some(StoreRequest::Select { query, respond_to }) => Some((query, respond_to)),
        _ => None,
    }
}
