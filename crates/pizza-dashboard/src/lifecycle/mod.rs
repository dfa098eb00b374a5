//! # System Lifecycle
//!
//! [`DashboardSystem`] starts the order store actor, hands out the clients
//! and page controllers built on it, and shuts the actor down.
//!
//! ## Graceful Shutdown
//!
//! The store actor ends when the last [`OrderClient`](crate::clients::OrderClient)
//! is dropped. [`DashboardSystem::shutdown`] drops its own client and awaits
//! the actor task, so every page (each holds a client clone) must be dropped
//! before calling it or the wait never ends.
//!
//! Logging goes through `tracing`; binaries install a subscriber with
//! [`order_store::telemetry::setup_tracing`].

mod dashboard_system;

pub use dashboard_system::*;
