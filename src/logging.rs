//! Logging setup for binaries embedding the client.
//!
//! The library itself only emits `tracing` events; installing a subscriber is
//! left to the application.

use tracing_subscriber::EnvFilter;

/// Install a fmt subscriber filtered by `RUST_LOG`, or `default_directive` when unset.
///
/// Returns `false` if a global subscriber was already installed.
///
/// ```
/// locator_rest_client::logging::init_logging("locator_rest_client=debug");
/// ```
pub fn init_logging(default_directive: &str) -> bool {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()
        .is_ok()
}
