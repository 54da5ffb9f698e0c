//! Logging setup for the binaries.
//!
//! Library code only emits `tracing` events. Binaries call [`init`] once; output goes to stderr so
//! stdout stays reserved for the move.

use tracing_subscriber::EnvFilter;

/// Install a stderr fmt subscriber filtered by `RUST_LOG` (default `warn`).
///
/// Calling it again, or after another subscriber was installed, is a no-op.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
