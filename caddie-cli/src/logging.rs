//! Log output for the command-line interface.

use tracing_subscriber::{EnvFilter, fmt};

/// Install a formatter on stderr, filtered by `RUST_LOG` (default `info`).
///
/// Records emitted through the `log` facade by the engine crates are
/// captured as well. Returns `false` when a subscriber is already installed.
pub fn init() -> bool {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init()
        .is_ok()
}
