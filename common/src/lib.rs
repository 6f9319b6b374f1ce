//! Common types and utilities for the stock exchange gateway
//!
//! This library contains the shared order model and the unified error type
//! used by the exchange library and the gateway binary.

pub mod error;
pub mod model;

/// Re-export important types
pub use error::{Error, Result, ErrorExt};
pub use model::order::{HeldOrder, Operation, Order};
