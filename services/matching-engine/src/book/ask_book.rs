//! Ask (sell-side) order book
//!
//! Maintains sell orders sorted by price ascending (best ask first).
//! Uses BTreeMap for deterministic iteration order.

use std::collections::BTreeMap;
use types::ids::OrderId;
use types::numeric::Price;
use types::order::Order;

use super::price_level::PriceLevel;
use super::BookSide;
use crate::snapshot::{DepthLevel, LevelSnapshot, SideSnapshot};

/// Ask (sell) side order book
///
/// Orders are sorted by price ascending, so the lowest ask is first.
/// At each price level, orders are maintained in FIFO order.
#[derive(Debug, Clone)]
pub struct AskBook {
    /// Price levels sorted ascending (lowest price first)
    levels: BTreeMap<Price, PriceLevel>,
}

impl AskBook {
    /// Create a new empty ask book
    pub fn new() -> Self {
        Self {
            levels: BTreeMap::new(),
        }
    }

    /// Insert a priced order into the ask book
    pub fn insert(&mut self, order: Order, price: Price) {
        self.levels.entry(price).or_default().insert(order);
    }

    /// Remove an order from the ask book
    pub fn remove(&mut self, order_id: &OrderId, price: Price) -> Option<Order> {
        let level = self.levels.get_mut(&price)?;
        let order = level.remove(order_id)?;
        if level.is_empty() {
            self.levels.remove(&price);
        }
        Some(order)
    }

    pub fn get(&self, order_id: &OrderId, price: Price) -> Option<&Order> {
        self.levels.get(&price)?.get(order_id)
    }

    /// Get depth snapshot (top N price levels, lowest first)
    pub fn depth_snapshot(&self, depth: usize) -> Vec<DepthLevel> {
        self.levels
            .iter()
            .take(depth)
            .map(|(price, level)| DepthLevel::new(*price, level.total_quantity()))
            .collect()
    }

    /// Full view of the side, best level first
    pub fn side_snapshot(&self) -> SideSnapshot {
        SideSnapshot::from_levels(
            self.levels
                .iter()
                .map(|(price, level)| LevelSnapshot::from_level(*price, level)),
        )
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }
}

impl BookSide for AskBook {
    fn best_level_mut(&mut self) -> Option<(Price, &mut PriceLevel)> {
        self.levels
            .iter_mut()
            .next()
            .map(|(price, level)| (*price, level))
    }

    fn remove_level(&mut self, price: Price) {
        self.levels.remove(&price);
    }
}

impl Default for AskBook {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use types::numeric::Quantity;
    use types::order::Side;

    fn insert_order(book: &mut AskBook, price: u64, qty: &str) -> OrderId {
        let price = Price::from_u64(price);
        let order = Order::limit(
            OrderId::generate(),
            Side::Sell,
            Quantity::from_str(qty).unwrap(),
            price,
            1708123456789000000,
        );
        let id = order.id.clone();
        book.insert(order, price);
        id
    }

    #[test]
    fn test_ask_book_best_level() {
        let mut book = AskBook::new();

        insert_order(&mut book, 50000, "1.0");
        insert_order(&mut book, 51000, "2.0");
        insert_order(&mut book, 49000, "1.5"); // Lower price (best ask)

        let (best_price, level) = book.best_level_mut().unwrap();
        assert_eq!(best_price, Price::from_u64(49000));
        assert_eq!(level.total_quantity(), Quantity::from_str("1.5").unwrap());
    }

    #[test]
    fn test_ask_book_remove_keeps_other_orders() {
        let mut book = AskBook::new();
        let first = insert_order(&mut book, 50000, "1.0");
        let second = insert_order(&mut book, 50000, "2.0");

        assert!(book.remove(&first, Price::from_u64(50000)).is_some());
        assert_eq!(book.depth_snapshot(usize::MAX).len(), 1);
        assert!(book.get(&second, Price::from_u64(50000)).is_some());
        assert!(book.remove(&first, Price::from_u64(50000)).is_none());
    }

    #[test]
    fn test_ask_book_side_snapshot() {
        let mut book = AskBook::new();

        insert_order(&mut book, 50000, "1.0");
        insert_order(&mut book, 51000, "2.0");
        insert_order(&mut book, 50000, "1.5");

        let snapshot = book.side_snapshot();
        assert_eq!(snapshot.num_orders, 3);
        assert_eq!(snapshot.depth, 2);
        assert_eq!(snapshot.levels[0].price, Price::from_u64(50000));
        assert_eq!(snapshot.levels[0].volume, Quantity::from_str("2.5").unwrap());
        assert_eq!(snapshot.levels[0].orders.len(), 2);
    }

    #[test]
    fn test_ask_book_depth_snapshot() {
        let mut book = AskBook::new();

        insert_order(&mut book, 50000, "1.0");
        insert_order(&mut book, 51000, "2.0");
        insert_order(&mut book, 49000, "1.5");
        insert_order(&mut book, 52000, "0.5");

        let depth = book.depth_snapshot(2);

        assert_eq!(depth.len(), 2);
        assert_eq!(depth[0].price, Price::from_u64(49000));
        assert_eq!(depth[1].price, Price::from_u64(50000));
    }
}
