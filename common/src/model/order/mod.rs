//! Order models and related types

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Order operation (buy or sell)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Operation {
    Buy,
    Sell,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Buy => write!(f, "BUY"),
            Operation::Sell => write!(f, "SELL"),
        }
    }
}

impl FromStr for Operation {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "BUY" => Ok(Operation::Buy),
            "SELL" => Ok(Operation::Sell),
            _ => Err(Error::InvalidOrder(format!("unknown operation '{}'", s))),
        }
    }
}

/// Order model
///
/// A plain value holder. Negative prices and volumes are accepted as given.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    /// Ticker symbol (e.g., "AAPL")
    pub symbol: String,
    /// Limit price, unit left to the caller
    pub price: f64,
    /// Quantity
    pub volume: i32,
    /// Buy or sell
    pub operation: Operation,
}

impl Order {
    /// Create a new order
    pub fn new(symbol: impl Into<String>, price: f64, volume: i32, operation: Operation) -> Self {
        Self {
            symbol: symbol.into(),
            price,
            volume,
            operation,
        }
    }

    /// Create a new buy order
    pub fn buy(symbol: impl Into<String>, price: f64, volume: i32) -> Self {
        Self::new(symbol, price, volume, Operation::Buy)
    }

    /// Create a new sell order
    pub fn sell(symbol: impl Into<String>, price: f64, volume: i32) -> Self {
        Self::new(symbol, price, volume, Operation::Sell)
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} @ {:.2}", self.operation, self.symbol, self.volume, self.price)
    }
}

/// An order retained by the gateway after processing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeldOrder {
    /// Position in processing order, starting at 1
    pub sequence: u64,
    /// When the gateway received the order
    pub received_at: DateTime<Utc>,
    /// The order exactly as submitted
    pub order: Order,
}

impl HeldOrder {
    /// Wrap an order received now
    pub fn new(sequence: u64, order: Order) -> Self {
        Self {
            sequence,
            received_at: Utc::now(),
            order,
        }
    }
}
