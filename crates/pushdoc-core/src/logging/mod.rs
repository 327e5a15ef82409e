//! Structured logging setup.
//!
//! pushdoc emits `tracing` events and never installs a subscriber on its own.
//! Binaries call [`init_subscriber`] once at startup; tests use
//! [`test_utils::capture_logs`] to assert that recovered anomalies (malformed
//! payloads, failed projections) were reported.

pub mod test_utils;

pub use test_utils::{CapturedEvent, CapturedLogs, capture_logs};

/// Initialize the global tracing subscriber with stderr output.
///
/// `RUST_LOG` takes precedence over `level` when set. Call once at
/// application startup; subsequent calls are no-ops.
pub fn init_subscriber(level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .compact();

    // set_global_default is a no-op if already set
    let _ = subscriber.try_init();
}
