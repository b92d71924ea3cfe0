//! Tracing subscriber for the binary.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Log to stderr, filtered by `RUST_LOG` (default `warn`).
///
/// Does nothing if a subscriber is already installed.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact();

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}
