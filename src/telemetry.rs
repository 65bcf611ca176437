//! Logging setup shared by every demo binary.
//!
//! Library code only emits `tracing` events. Binaries install a subscriber
//! that writes to stderr, so stdout carries nothing but the demo itself.
//! Filtering follows `RUST_LOG` and falls back to [`DEFAULT_FILTER`].

use tracing_subscriber::EnvFilter;

pub const DEFAULT_FILTER: &str = "warn";

fn filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the stderr subscriber. A second call is a no-op.
pub fn init() {
    // try_init fails only when a global subscriber is already set
    tracing_subscriber::fmt()
        .with_env_filter(filter())
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .ok();
}

/// Subscriber for `cargo test`, captured per test by the harness.
pub fn init_for_tests() {
    tracing_subscriber::fmt()
        .with_env_filter(filter())
        .with_test_writer()
        .try_init()
        .ok();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_is_idempotent() {
        init_for_tests();
        init_for_tests();
        init();
        tracing::info!("subscriber still usable");
    }
}
