use std::io;

use tracing_subscriber::EnvFilter;

/// `RUST_LOG` wins over the configured filter.
pub fn init(configured: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(configured));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(io::stderr).init();
}
