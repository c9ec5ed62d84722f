//! Subscriber installation.
//!
//! Output is JSON with timestamps and targets. The filter comes from
//! `RUST_LOG`, e.g. `RUST_LOG=catalog_servers=debug,catalog_client=debug` to
//! see search and total-price events.

use tracing_subscriber::EnvFilter;

/// Filter applied when `RUST_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "info";

/// Install the global subscriber.
///
/// Returns `true` when this call installed it, `false` when a global
/// subscriber was already in place (the call is then a no-op).
pub fn init() -> bool {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .json()
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_target(true)
        .try_init()
        .is_ok();

    if installed {
        ::tracing::debug!(default_filter = DEFAULT_FILTER, "tracing subscriber installed");
    }
    installed
}
