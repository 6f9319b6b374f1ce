//! Application configuration

use std::env;

/// Application configuration
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    /// Enable debug logging
    pub debug: bool,
}

impl AppConfig {
    /// Create a new configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            debug: env::var("DEBUG")
                .map(|v| v == "1" || v == "true")
                .unwrap_or(false),
        }
    }
}
