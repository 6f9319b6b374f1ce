//! Domain models for the stock exchange gateway

pub mod order;
