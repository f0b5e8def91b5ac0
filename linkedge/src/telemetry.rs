//! Tracing initialization for binaries and tests embedding this crate.
//!
//! Installs a `tracing-subscriber` fmt layer filtered by `RUST_LOG`
//! (defaulting to `info`). Repository methods are instrumented with
//! `#[tracing::instrument]`, so query spans carry the identifiers they were
//! invoked with.

use tracing_subscriber::EnvFilter;

/// Install the global tracing subscriber.
///
/// Idempotent: repeated calls (e.g. from multiple tests) leave the first
/// subscriber in place.
pub fn init_telemetry() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
