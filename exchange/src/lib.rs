//! Stock exchange order gateway
//!
//! The [`StockExchange`] trait, the [`create`] factory and the in-memory
//! gateway that keeps every processed order for display.

mod held_orders;
pub mod config;
pub mod gateway;

pub use config::ExchangeConfig;
pub use gateway::{create, create_with_config, InMemoryStockExchange, StockExchange, TestCallback};
pub use held_orders::HeldOrderLog;
