//! Append-only log of the orders a gateway has processed, keyed by symbol

use std::collections::BTreeMap;
use std::io::{self, Write};
use std::sync::atomic::{AtomicU64, Ordering};

use common::model::order::{HeldOrder, Order};
use dashmap::DashMap;

/// Orders held by a gateway, grouped by symbol
pub struct HeldOrderLog {
    /// Map of symbols to held orders, in arrival order
    by_symbol: DashMap<String, Vec<HeldOrder>>,
    /// Last sequence number handed out
    sequence: AtomicU64,
}

impl HeldOrderLog {
    /// Create an empty log
    pub fn new() -> Self {
        Self {
            by_symbol: DashMap::new(),
            sequence: AtomicU64::new(0),
        }
    }

    /// Record an order and return the sequence number it was given
    pub fn append(&self, order: Order) -> u64 {
        let sequence = self.sequence.fetch_add(1, Ordering::SeqCst) + 1;
        self.by_symbol
            .entry(order.symbol.clone())
            .or_default()
            .push(HeldOrder::new(sequence, order));
        sequence
    }

    /// Number of held orders
    pub fn len(&self) -> usize {
        self.by_symbol.iter().map(|entry| entry.value().len()).sum()
    }

    /// Whether no order has been processed yet
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Symbols with at least one held order, ascending
    pub fn symbols(&self) -> Vec<String> {
        let mut symbols: Vec<String> = self.by_symbol.iter().map(|entry| entry.key().clone()).collect();
        symbols.sort();
        symbols
    }

    /// Held orders for one symbol, in sequence order
    pub fn orders_for(&self, symbol: &str) -> Vec<HeldOrder> {
        let mut orders = self
            .by_symbol
            .get(symbol)
            .map(|entry| entry.value().clone())
            .unwrap_or_default();
        orders.sort_by_key(|held| held.sequence);
        orders
    }

    /// Snapshot of every held order, in sequence order
    pub fn snapshot(&self) -> Vec<HeldOrder> {
        let mut orders: Vec<HeldOrder> = self
            .by_symbol
            .iter()
            .flat_map(|entry| entry.value().clone())
            .collect();
        orders.sort_by_key(|held| held.sequence);
        orders
    }

    /// Write a report grouped by symbol. A `limit` of 0 prints every order.
    pub fn render(&self, out: &mut dyn Write, limit: usize) -> io::Result<()> {
        let orders = self.snapshot();
        if orders.is_empty() {
            return writeln!(out, "No orders held");
        }

        // Snapshot is in sequence order, so each group is too
        let mut by_symbol: BTreeMap<&str, Vec<&HeldOrder>> = BTreeMap::new();
        for held in &orders {
            by_symbol.entry(held.order.symbol.as_str()).or_default().push(held);
        }

        let mut shown = 0;
        'symbols: for (symbol, group) in by_symbol {
            if limit != 0 && shown >= limit {
                break;
            }

            writeln!(out, "== {} ({} orders) ==", symbol, group.len())?;
            for held in group {
                if limit != 0 && shown >= limit {
                    break 'symbols;
                }
                writeln!(
                    out,
                    "#{} {} {} @ {:.2}",
                    held.sequence, held.order.operation, held.order.volume, held.order.price
                )?;
                shown += 1;
            }
        }

        if shown < orders.len() {
            writeln!(out, "... {} more orders not shown", orders.len() - shown)?;
        }
        Ok(())
    }
}

impl Default for HeldOrderLog {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render_to_string(log: &HeldOrderLog, limit: usize) -> String {
        let mut buf = Vec::new();
        log.render(&mut buf, limit).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_empty_log() {
        let log = HeldOrderLog::new();
        assert!(log.is_empty());
        assert!(log.snapshot().is_empty());
        assert_eq!(render_to_string(&log, 0), "No orders held\n");
    }

    #[test]
    fn test_sequence_spans_symbols() {
        let log = HeldOrderLog::new();
        assert_eq!(log.append(Order::buy("MSFT", 310.5, 20)), 1);
        assert_eq!(log.append(Order::buy("AAPL", 150.25, 10)), 2);
        assert_eq!(log.append(Order::sell("MSFT", 311.0, 5)), 3);

        assert_eq!(log.len(), 3);
        assert_eq!(log.symbols(), vec!["AAPL".to_string(), "MSFT".to_string()]);

        let sequences: Vec<u64> = log.snapshot().iter().map(|h| h.sequence).collect();
        assert_eq!(sequences, vec![1, 2, 3]);

        let msft: Vec<u64> = log.orders_for("MSFT").iter().map(|h| h.sequence).collect();
        assert_eq!(msft, vec![1, 3]);
        assert!(log.orders_for("TSLA").is_empty());
    }

    #[test]
    fn test_render_groups_by_symbol() {
        let log = HeldOrderLog::new();
        log.append(Order::buy("MSFT", 310.5, 20));
        log.append(Order::buy("AAPL", 150.25, 10));
        log.append(Order::sell("AAPL", 151.0, 5));

        let expected = "\
== AAPL (2 orders) ==
#2 BUY 10 @ 150.25
#3 SELL 5 @ 151.00
== MSFT (1 orders) ==
#1 BUY 20 @ 310.50
";
        assert_eq!(render_to_string(&log, 0), expected);
    }

    #[test]
    fn test_render_truncates_at_limit() {
        let log = HeldOrderLog::new();
        log.append(Order::buy("AAPL", 150.25, 10));
        log.append(Order::sell("AAPL", 151.0, 5));
        log.append(Order::buy("MSFT", 310.5, 20));

        let expected = "\
== AAPL (2 orders) ==
#1 BUY 10 @ 150.25
#2 SELL 5 @ 151.00
... 1 more orders not shown
";
        assert_eq!(render_to_string(&log, 2), expected);

        let one = render_to_string(&log, 1);
        assert!(one.ends_with("... 2 more orders not shown\n"));
        assert!(!one.contains("MSFT"));
    }

    #[test]
    fn test_render_is_consistent_while_appending() {
        use std::sync::Arc;
        use std::thread;

        let log = Arc::new(HeldOrderLog::new());
        let writers: Vec<_> = (0..4)
            .map(|i| {
                let log = Arc::clone(&log);
                thread::spawn(move || {
                    for n in 0..200 {
                        log.append(Order::buy(format!("SYM{}", (i + n) % 3), 100.0, n));
                    }
                })
            })
            .collect();

        for _ in 0..50 {
            let report = render_to_string(&log, 0);
            let mut expected_lines = 0;
            for line in report.lines() {
                if let Some(header) = line.strip_prefix("== ") {
                    assert_eq!(expected_lines, 0, "section ended early in:\n{}", report);
                    let count = header.split(" (").nth(1).unwrap().split(' ').next().unwrap();
                    expected_lines = count.parse().unwrap();
                } else if line.starts_with('#') {
                    expected_lines -= 1;
                }
            }
            assert_eq!(expected_lines, 0, "section ended early in:\n{}", report);
        }

        for writer in writers {
            writer.join().unwrap();
        }
        assert_eq!(log.len(), 800);
    }
}
