//! Logging configuration and tracing initialization.

use serde::{Deserialize, Serialize};
use tracing_subscriber::EnvFilter;

/// Logging and tracing configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level: `"trace"`, `"debug"`, `"info"`, `"warn"`, `"error"`.
    #[serde(default = "default_level")]
    pub level: String,
    /// Log format: `"json"` or `"pretty"`.
    #[serde(default = "default_format")]
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            format: default_format(),
        }
    }
}

impl LoggingConfig {
    /// Initialize the global tracing subscriber from this configuration.
    ///
    /// The `RUST_LOG` environment variable takes precedence over the
    /// configured level. Calling this more than once is a no-op (the
    /// second registration fails silently).
    pub fn init(&self) {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(self.level.clone()));

        let builder = tracing_subscriber::fmt().with_env_filter(filter);
        let result = if self.format == "json" {
            builder.json().try_init()
        } else {
            builder.pretty().try_init()
        };
        // Already-initialized is fine in tests and embedded hosts.
        let _ = result;
    }
}

fn default_level() -> String {
    "info".to_string()
}

fn default_format() -> String {
    "pretty".to_string()
}
