//! Order sources for the gateway binary

use std::fs;
use std::path::Path;

use common::error::{Error, ErrorExt, Result};
use common::model::order::Order;

/// Orders submitted by `--demo`
pub fn demo_orders() -> Vec<Order> {
    vec![
        Order::buy("AAPL", 150.25, 10),
        Order::sell("AAPL", 151.00, 5),
        Order::buy("MSFT", 310.50, 20),
    ]
}

/// Read a JSON array of orders
pub fn load_orders(path: &Path) -> Result<Vec<Order>> {
    let contents = fs::read_to_string(path)
        .map_err(Error::from)
        .with_context(|| path.display())?;
    let orders = serde_json::from_str(&contents)?;
    Ok(orders)
}
