//! Error types for the stock exchange gateway
//!
//! Gateway operations themselves never fail. This module covers everything
//! around them: parsing order text, loading configuration and reading order
//! files.

use std::fmt::Display;
use thiserror::Error;

/// Stock exchange error type
#[derive(Debug, Error)]
pub enum Error {
    /// Error related to order parsing
    #[error("Invalid order: {0}")]
    InvalidOrder(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Extension trait to add context to error results
pub trait ErrorExt<T> {
    /// Add context information to an error
    fn with_context<C, F>(self, context_fn: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Display;
}

impl<T> ErrorExt<T> for Result<T> {
    fn with_context<C, F>(self, context_fn: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Display,
    {
        self.map_err(|e| {
            let context = context_fn().to_string();
            match e {
                Error::InvalidOrder(msg) => Error::InvalidOrder(format!("{}: {}", context, msg)),
                Error::ConfigurationError(msg) => Error::ConfigurationError(format!("{}: {}", context, msg)),
                Error::Io(e) => Error::Io(std::io::Error::new(e.kind(), format!("{}: {}", context, e))),
                Error::Serialization(e) => Error::Serialization(e),
            }
        })
    }
}
