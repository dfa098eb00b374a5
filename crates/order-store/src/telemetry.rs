//! # Tracing Setup
//!
//! Every store operation is logged through `tracing` with structured fields
//! (`record_type`, `key`, `size`, `revision`). [`setup_tracing`] installs a
//! compact formatter for binaries and tests that want to see them.
//!
//! ```bash
//! RUST_LOG=info cargo run      # one line per mutation
//! RUST_LOG=debug cargo run     # full payloads, reads and selects
//! ```
//!
//! With `RUST_LOG=info` a status change and a delete look like:
//!
//! ```text
//! INFO Patched record_type="Order" key=ORD-12346 revision=1
//! INFO Removed record_type="Order" key=ORD-12347 size=3 revision=2
//! ```

/// Installs the global subscriber. Calling it again is a no-op.
pub fn setup_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false) // record_type already says where a line comes from
        .compact()
        .try_init();
}
