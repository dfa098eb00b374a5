//! # Order Store
//!
//! A single-owner, insertion-ordered record store that runs as one Tokio
//! task and is reached through cloneable handles.
//!
//! ## Why an actor?
//!
//! The collection has exactly one owner, the [`StoreActor`]. Everything else
//! holds a [`StoreClient`] and sends it requests. Requests are processed one
//! at a time, so each operation runs to completion before the next begins
//! and the collection needs no `Mutex`. There is no ambient global list: a
//! consumer can only reach the records if it was handed a client.
//!
//! ## Layers
//!
//! 1. **Record layer** ([`Record`]) - what a stored value is: its key, how it is
//!    patched and how it is selected.
//! 2. **Collection layer** ([`RecordStore`]) - insertion order, key uniqueness,
//!    atomic patches and the revision counter. Synchronous and usable on its own.
//! 3. **Runtime layer** ([`StoreActor`]) - owns one collection and serves requests.
//! 4. **Interface layer** ([`StoreClient`], [`StoreHandle`]) - typed async handle,
//!    plus a trait domain clients implement to get common operations for free.
//!
//! ## Revisions
//!
//! Every successful insert, patch or remove bumps the store's revision.
//! [`Snapshot`]s carry the revision they were taken at, so a reader can ask
//! the store later whether what it derived is still current.
//!
//! ## Testing
//!
//! [`mock::MockStore`] answers a client's requests from scripted
//! expectations. See the [`mock`] module.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod error;
pub mod message;
pub mod mock;
pub mod record;
pub mod store;
pub mod telemetry;

pub use actor::StoreActor;
pub use client::StoreClient;
pub use client_trait::StoreHandle;
pub use error::StoreError;
pub use message::{Response, StoreRequest};
pub use record::Record;
pub use store::{RecordStore, Snapshot};
