//! Application configuration loaded from environment variables.

use std::str::FromStr;

use thiserror::Error;

/// Errors raised while reading configuration values.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// `PORT` was set but is not a valid port number.
    #[error("invalid PORT value {0:?}: expected an integer in 0..=65535")]
    InvalidPort(String),

    /// A boolean flag was set to something other than true/false.
    #[error("invalid value {value:?} for {key}: expected true or false")]
    InvalidFlag { key: &'static str, value: String },

    /// `LOG_FORMAT` was set to an unknown format.
    #[error("invalid LOG_FORMAT value {0:?}: expected text or json")]
    InvalidLogFormat(String),
}

/// Output format of the log subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for LogFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" | "pretty" => Ok(LogFormat::Text),
            "json" => Ok(LogFormat::Json),
            _ => Err(ConfigError::InvalidLogFormat(s.to_string())),
        }
    }
}

/// Server configuration with sensible defaults.
///
/// Reads from environment variables:
/// - `HOST` — bind address (default: `"0.0.0.0"`)
/// - `PORT` — listen port (default: `8080`)
/// - `RUST_LOG` — tracing filter directive (default: `"info"`)
/// - `LOG_FORMAT` — `text` or `json` (default: `text`)
/// - `DOCS_ENABLED` — serve the OpenAPI document (default: `true`)
/// - `METRICS_ENABLED` — expose Prometheus metrics (default: `false`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub log_level: String,
    pub log_format: LogFormat,
    pub docs_enabled: bool,
    pub metrics_enabled: bool,
}

impl Config {
    /// Loads configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads configuration through `lookup`, falling back to defaults for
    /// unset keys. Set but malformed values are rejected.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidPort(raw.clone()))?,
            None => defaults.port,
        };

        let log_format = match lookup("LOG_FORMAT") {
            Some(raw) => raw.parse()?,
            None => defaults.log_format,
        };

        Ok(Self {
            host: lookup("HOST").unwrap_or(defaults.host),
            port,
            log_level: lookup("RUST_LOG").unwrap_or(defaults.log_level),
            log_format,
            docs_enabled: parse_flag(
                "DOCS_ENABLED",
                lookup("DOCS_ENABLED"),
                defaults.docs_enabled,
            )?,
            metrics_enabled: parse_flag(
                "METRICS_ENABLED",
                lookup("METRICS_ENABLED"),
                defaults.metrics_enabled,
            )?,
        })
    }

    /// Returns the `"host:port"` bind address string.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_flag(key: &'static str, raw: Option<String>, default: bool) -> Result<bool, ConfigError> {
    let Some(value) = raw else {
        return Ok(default);
    };
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidFlag { key, value }),
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            log_level: "info".to_string(),
            log_format: LogFormat::Text,
            docs_enabled: true,
            metrics_enabled: false,
        }
    }
}
