//! Logging subscriber initialisation.

use thiserror::Error;
use tracing_subscriber::{
    EnvFilter, Registry,
    layer::{Layer, SubscriberExt},
    util::{SubscriberInitExt, TryInitError},
};

use crate::config::{LogFormat, LoggingConfig};

/// Errors from installing the global subscriber.
#[derive(Debug, Error)]
pub enum LoggingError {
    /// A global subscriber was already installed.
    #[error("failed to install tracing subscriber: {0}")]
    Init(#[from] TryInitError),
}

/// Install the global `tracing` subscriber described by `config`.
///
/// # Errors
///
/// Returns [`LoggingError::Init`] if a subscriber is already installed.
pub fn init_subscriber(config: &LoggingConfig) -> Result<(), LoggingError> {
    match config.log_format {
        LogFormat::Compact => init_with_layer(
            config,
            tracing_subscriber::fmt::layer()
                .compact()
                .with_target(true)
                .with_writer(std::io::stderr),
        ),
        LogFormat::Json => init_with_layer(
            config,
            tracing_subscriber::fmt::layer()
                .json()
                .with_current_span(true)
                .with_target(true)
                .with_writer(std::io::stderr),
        ),
    }
}

fn build_env_filter(config: &LoggingConfig) -> EnvFilter {
    EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("warn"))
}

fn init_with_layer<L>(config: &LoggingConfig, fmt_layer: L) -> Result<(), LoggingError>
where
    L: Layer<Registry> + Send + Sync + 'static,
{
    tracing_subscriber::registry()
        .with(fmt_layer)
        .with(build_env_filter(config))
        .try_init()?;

    Ok(())
}
