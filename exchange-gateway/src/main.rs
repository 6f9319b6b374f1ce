//! Stock exchange gateway driver

mod config;
mod orders;

use std::path::PathBuf;

use clap::Parser;
use dotenv::dotenv;
use exchange::ExchangeConfig;
use tracing::{debug, info, Level};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use crate::config::AppConfig;

/// Command line arguments
#[derive(Parser, Debug)]
#[clap(author, version, about)]
struct Args {
    /// Process a fixed set of demo orders
    #[clap(short, long)]
    demo: bool,

    /// JSON file holding an array of orders to process
    #[clap(long, value_name = "PATH")]
    orders: Option<PathBuf>,

    /// Maximum order lines to display, 0 for no limit (overrides DISPLAY_LIMIT)
    #[clap(long, value_name = "N")]
    display_limit: Option<usize>,

    /// Run the gateway test hook before processing
    #[clap(long)]
    test_hook: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables
    dotenv().ok();

    let args = Args::parse();
    let app_config = AppConfig::from_env();

    let log_level = if app_config.debug { Level::DEBUG } else { Level::INFO };
    let env_filter = EnvFilter::builder()
        .with_default_directive(log_level.into())
        .from_env_lossy();

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .finish();

    // Only set the global subscriber if it hasn't been set already
    if tracing::subscriber::set_global_default(subscriber).is_ok() {
        debug!("Debug logging enabled");
    }

    let mut exchange_config = ExchangeConfig::from_env()?;
    if let Some(limit) = args.display_limit {
        exchange_config.display_limit = limit;
    }

    let exchange = exchange::create_with_config(exchange_config);

    if args.test_hook {
        exchange.test(Box::new(|| info!("Test hook invoked")));
    }

    if args.demo {
        info!("Submitting demo orders...");
        for order in orders::demo_orders() {
            exchange.process(order);
        }
    }

    if let Some(path) = args.orders {
        let loaded = orders::load_orders(&path)?;
        info!("Loaded {} orders from {}", loaded.len(), path.display());
        for order in loaded {
            exchange.process(order);
        }
    }

    info!("Holding {} orders", exchange.order_count());
    exchange.display_orders();

    Ok(())
}
