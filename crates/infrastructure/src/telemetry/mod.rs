//! Tracing initialization
//!
//! Console-only subscriber; `RUST_LOG` overrides the default filter.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the global tracing subscriber
///
/// `default_filter` applies when `RUST_LOG` is unset (e.g. `"info"` or
/// `"buttond=debug"`). Subsequent calls are no-ops, which keeps tests that
/// share a process safe.
pub fn init_tracing(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false))
        .try_init();
}
