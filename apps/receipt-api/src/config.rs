//! Receipt API configuration module.
//!
//! Configuration is loaded from environment variables with fallback to defaults.

use serde::{Deserialize, Serialize};
use std::env;

/// Default HTTP port.
pub const DEFAULT_PORT: u16 = 8080;

/// Default request body limit (1MB).
pub const DEFAULT_MAX_BODY_BYTES: usize = 1024 * 1024;

/// Receipt API configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Listen address (default: 0.0.0.0)
    pub bind_addr: String,

    /// HTTP server port
    pub port: u16,

    /// Largest accepted request body in bytes
    pub max_body_bytes: usize,
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfig {
            bind_addr: "0.0.0.0".to_string(),
            port: DEFAULT_PORT,
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
        }
    }
}

impl ApiConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from any key lookup.
    ///
    /// ## Variables
    /// - `RECEIPT_API_BIND_ADDR` - listen address (default: 0.0.0.0)
    /// - `RECEIPT_API_PORT` - HTTP port (default: 8080)
    /// - `RECEIPT_API_MAX_BODY_BYTES` - body limit (default: 1048576)
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = ApiConfig::default();

        let config = ApiConfig {
            bind_addr: lookup("RECEIPT_API_BIND_ADDR").unwrap_or(defaults.bind_addr),

            port: match lookup("RECEIPT_API_PORT") {
                Some(raw) => raw
                    .trim()
                    .parse()
                    .map_err(|_| ConfigError::InvalidValue("RECEIPT_API_PORT".to_string()))?,
                None => defaults.port,
            },

            max_body_bytes: match lookup("RECEIPT_API_MAX_BODY_BYTES") {
                Some(raw) => raw
                    .trim()
                    .parse()
                    .map_err(|_| ConfigError::InvalidValue("RECEIPT_API_MAX_BODY_BYTES".to_string()))?,
                None => defaults.max_body_bytes,
            },
        };

        if config.bind_addr.trim().is_empty() {
            return Err(ConfigError::InvalidValue("RECEIPT_API_BIND_ADDR".to_string()));
        }

        if config.port == 0 {
            return Err(ConfigError::InvalidValue("RECEIPT_API_PORT".to_string()));
        }

        if config.max_body_bytes == 0 {
            return Err(ConfigError::InvalidValue("RECEIPT_API_MAX_BODY_BYTES".to_string()));
        }

        Ok(config)
    }

    /// Returns the full bind address.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.bind_addr, self.port)
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}
