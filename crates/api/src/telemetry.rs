//! Tracing subscriber setup.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::config::{Config, LogFormat};

/// Installs the global tracing subscriber described by `config`.
///
/// An unparsable `RUST_LOG` directive falls back to `info` and is reported
/// once the subscriber is live.
pub fn init(config: &Config) {
    let (filter, invalid) = match EnvFilter::try_new(&config.log_level) {
        Ok(filter) => (filter, None),
        Err(err) => (EnvFilter::new("info"), Some(err)),
    };

    let registry = tracing_subscriber::registry().with(filter);
    match config.log_format {
        LogFormat::Text => registry.with(fmt::layer()).init(),
        LogFormat::Json => registry.with(fmt::layer().json()).init(),
    }

    if let Some(err) = invalid {
        tracing::warn!(
            directive = %config.log_level,
            error = %err,
            "invalid RUST_LOG directive, falling back to info"
        );
    }
}
