//! Structured logging

use tracing_subscriber::EnvFilter;

use crate::{config::Config, error::Result};

/// Build the log filter from the configured level or directive
///
/// Falls back to `info` when the configured value does not parse.
pub fn env_filter(config: &Config) -> EnvFilter {
    EnvFilter::try_new(&config.service.log_level).unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Install the global JSON subscriber
///
/// Safe to call more than once; only the first call installs a subscriber.
pub fn init_tracing(config: &Config) -> Result<()> {
    let installed = tracing_subscriber::fmt()
        .json()
        .with_env_filter(env_filter(config))
        .try_init()
        .is_ok();

    if installed {
        tracing::info!("Tracing initialized for service: {}", config.service.name);
    }

    Ok(())
}
