//! Log subscriber setup
//!
//! The service logs through `tracing`; this module installs the global subscriber.

use crate::config::{LogFormat, LoggingConfig};
use crate::utils::error::{Result, ServiceError};
use tracing::subscriber::DefaultGuard;
use tracing_subscriber::EnvFilter;

/// Level used before the configuration is loaded
const BOOTSTRAP_LEVEL: &str = "info";

/// Install the global `tracing` subscriber described by `config`.
///
/// `RUST_LOG` takes precedence over the configured level when it is set.
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let filter = build_filter(config)?;

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false);

    let installed = match config.format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Text => builder.try_init(),
    };

    installed.map_err(|e| ServiceError::Config(format!("Failed to initialize logging: {}", e)))
}

/// Route events from the current thread to a plain text subscriber until the
/// returned guard is dropped.
///
/// Covers configuration loading, which runs before [`init_logging`].
pub fn bootstrap_logging() -> DefaultGuard {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(BOOTSTRAP_LEVEL));
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .finish();
    tracing::subscriber::set_default(subscriber)
}

fn build_filter(config: &LoggingConfig) -> Result<EnvFilter> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => EnvFilter::try_new(&config.level).map_err(|e| {
            ServiceError::Config(format!("Invalid log level '{}': {}", config.level, e))
        }),
    }
}
