//! Tracing initialization.
//!
//! Diagnostics go to stderr in compact format so stdout stays reserved for
//! the scriptable surface (summaries, plans, help). Defaults to `warn`;
//! `RUST_LOG` raises verbosity for debugging without changing tool behavior.

use tracing_subscriber::EnvFilter;

pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    // try_init so repeated initialization (e.g. in tests) is harmless.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .compact()
        .try_init();
}
