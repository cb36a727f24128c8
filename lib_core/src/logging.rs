use tracing_subscriber::EnvFilter;

use crate::constants::RUST_LOG;

/// Installs a stderr fmt subscriber filtered by `RUST_LOG` (default `warn`).
/// Calling it more than once is a no-op.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_env(RUST_LOG).unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
