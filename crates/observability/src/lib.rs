//! Tracing and logging setup shared by processes embedding the catalog.
//!
//! Library crates only emit `tracing` events; installing a subscriber is left
//! to the process, through [`init`]. What the catalog logs, all at `debug`:
//!
//! - `catalog_servers::search`: one event per search (`letter_count`,
//!   `pattern`, `candidates`, `matched`), plus one when a search is rejected as
//!   too broad (`found`, `limit`);
//! - `catalog_client::client`: one event when a total price is reduced to
//!   absence (too broad or no match).

/// Initialize process-wide observability (tracing/logging).
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init();
}

/// Subscriber installation and filtering.
pub mod tracing;
