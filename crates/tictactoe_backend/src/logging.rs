//! Tracing subscriber setup.

use crate::config::BackendConfig;
use tracing_subscriber::EnvFilter;

/// Installs the global subscriber, logging to stderr.
///
/// `RUST_LOG` wins over the configured filter. Stdout is left for JSON output.
pub fn init_tracing(config: &BackendConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_filter()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
