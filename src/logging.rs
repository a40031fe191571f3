// src/logging.rs
//! Diagnostic logging to stderr.

use tracing_subscriber::{fmt, EnvFilter};

/// Installs a stderr subscriber once. `RUST_LOG` wins over `verbose`.
///
/// Returns false if a subscriber was already installed.
pub fn init(verbose: bool) -> bool {
    let fallback = if verbose { "knotscan_core=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .is_ok()
}
