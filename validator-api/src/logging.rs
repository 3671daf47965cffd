//! Tracing setup for the API server.
//!
//! Request lines come from `tower_http`'s trace layer; handlers add their own
//! events. Passwords are never recorded.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_FILTER: &str = "validator_api=info,tower_http=info";

/// Initialize the global tracing subscriber.
///
/// Reads `RUST_LOG`; falls back to `validator_api=info,tower_http=info`.
/// Output: stderr, compact format.
///
/// # Example
/// ```bash
/// RUST_LOG=validator=debug,validator_api=debug validator-api
/// ```
pub fn init() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}
