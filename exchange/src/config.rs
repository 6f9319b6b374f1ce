//! Configuration for the exchange gateway

use std::env;

use common::error::{Error, Result};

/// Default number of order lines shown by `display_orders`
pub const DEFAULT_DISPLAY_LIMIT: usize = 100;

/// Configuration for the exchange gateway
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExchangeConfig {
    /// Maximum order lines per report, 0 for no limit
    pub display_limit: usize,
}

impl Default for ExchangeConfig {
    fn default() -> Self {
        Self {
            display_limit: env::var("DISPLAY_LIMIT")
                .ok()
                .and_then(|s| s.trim().parse().ok())
                .unwrap_or(DEFAULT_DISPLAY_LIMIT),
        }
    }
}

impl ExchangeConfig {
    /// Create a new configuration using environment variables, rejecting bad values
    pub fn from_env() -> Result<Self> {
        let display_limit = match env::var("DISPLAY_LIMIT") {
            Ok(value) => value.trim().parse().map_err(|_| {
                Error::ConfigurationError(format!(
                    "DISPLAY_LIMIT must be a non-negative integer, got '{}'",
                    value
                ))
            })?,
            Err(_) => DEFAULT_DISPLAY_LIMIT,
        };

        Ok(Self { display_limit })
    }

    /// Create a new configuration with custom values
    pub fn new(display_limit: usize) -> Self {
        Self { display_limit }
    }
}
