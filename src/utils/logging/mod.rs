//! Logging utilities
//!
//! Installs the global tracing subscriber. `RUST_LOG` wins over the configured
//! level when both are present.

use crate::config::{LogFormat, LoggingConfig};
use tracing_subscriber::EnvFilter;

/// Build the filter from `RUST_LOG`, falling back to the configured level
pub fn env_filter(config: &LoggingConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "{level},actix_web=info,reqwest=warn,hyper=warn",
            level = config.level
        ))
    })
}

/// Initialize the global subscriber. Calling it twice is a no-op.
pub fn init_tracing(config: &LoggingConfig) {
    let filter = env_filter(config);

    let result = match config.format {
        LogFormat::Json => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .json()
            .with_current_span(true)
            .try_init(),
        LogFormat::Text => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_thread_ids(false)
            .try_init(),
    };

    if result.is_err() {
        tracing::debug!("Tracing subscriber already installed");
    }
}
