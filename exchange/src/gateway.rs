//! The order gateway interface and its in-memory implementation

use std::io::{self, Write};

use common::model::order::{HeldOrder, Order};
use tracing::{debug, info, warn};

use crate::config::ExchangeConfig;
use crate::held_orders::HeldOrderLog;

/// Zero-argument hook run synchronously by [`StockExchange::test`]
pub type TestCallback<'a> = Box<dyn FnOnce() + 'a>;

/// Exchange-facing order gateway
pub trait StockExchange: Send + Sync {
    /// Run `callback` once, on the caller's thread
    fn test(&self, callback: TestCallback<'_>);

    /// Take ownership of one order
    fn process(&self, order: Order);

    /// Write the held-order report to `out`
    fn write_orders(&self, out: &mut dyn Write) -> io::Result<()>;

    /// Snapshot of held orders, in processing order
    fn held_orders(&self) -> Vec<HeldOrder>;

    /// Number of held orders
    fn order_count(&self) -> usize;

    /// Print the held-order report to stdout
    fn display_orders(&self) {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        if let Err(e) = self.write_orders(&mut out).and_then(|_| out.flush()) {
            warn!("Failed to display orders: {}", e);
        }
    }
}

/// Create a gateway with the default configuration
pub fn create() -> Box<dyn StockExchange> {
    create_with_config(ExchangeConfig::default())
}

/// Create a gateway with the given configuration
pub fn create_with_config(config: ExchangeConfig) -> Box<dyn StockExchange> {
    Box::new(InMemoryStockExchange::with_config(config))
}

/// Gateway that keeps every processed order in memory
pub struct InMemoryStockExchange {
    config: ExchangeConfig,
    orders: HeldOrderLog,
}

impl InMemoryStockExchange {
    /// Create a new gateway with the default configuration
    pub fn new() -> Self {
        Self::with_config(ExchangeConfig::default())
    }

    /// Create a new gateway with the given configuration
    pub fn with_config(config: ExchangeConfig) -> Self {
        info!("Creating stock exchange gateway (display limit {})", config.display_limit);
        Self {
            config,
            orders: HeldOrderLog::new(),
        }
    }

    /// Configuration in effect
    pub fn config(&self) -> &ExchangeConfig {
        &self.config
    }

    /// Held orders for one symbol
    pub fn orders_for(&self, symbol: &str) -> Vec<HeldOrder> {
        self.orders.orders_for(symbol)
    }
}

impl Default for InMemoryStockExchange {
    fn default() -> Self {
        Self::new()
    }
}

impl StockExchange for InMemoryStockExchange {
    fn test(&self, callback: TestCallback<'_>) {
        debug!("Running test hook");
        callback();
    }

    fn process(&self, order: Order) {
        let summary = order.to_string();
        let sequence = self.orders.append(order);
        debug!("Processed order #{}: {}", sequence, summary);
    }

    fn write_orders(&self, out: &mut dyn Write) -> io::Result<()> {
        self.orders.render(out, self.config.display_limit)
    }

    fn held_orders(&self) -> Vec<HeldOrder> {
        self.orders.snapshot()
    }

    fn order_count(&self) -> usize {
        self.orders.len()
    }
}
