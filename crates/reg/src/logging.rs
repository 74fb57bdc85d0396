//! Tracing setup shared by the reg binaries.

use tracing_subscriber::EnvFilter;

/// Installs a fmt subscriber on stderr, filtered by `RUST_LOG` (default
/// `info`). Later calls are ignored, so tests may call this repeatedly.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
}
