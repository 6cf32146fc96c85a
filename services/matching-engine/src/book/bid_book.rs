//! Bid (buy-side) order book
//!
//! Maintains buy orders sorted by price descending (best bid first).
//! Uses BTreeMap for deterministic iteration order.

use std::collections::BTreeMap;
use types::ids::OrderId;
use types::numeric::Price;
use types::order::Order;

use super::price_level::PriceLevel;
use super::BookSide;
use crate::snapshot::{DepthLevel, LevelSnapshot, SideSnapshot};

/// Bid (buy) side order book
///
/// Orders are sorted by price descending, so the highest bid is first.
/// At each price level, orders are maintained in FIFO order.
#[derive(Debug, Clone)]
pub struct BidBook {
    /// Price levels keyed by price (BTreeMap iterates ascending, best bid is last)
    levels: BTreeMap<Price, PriceLevel>,
}

impl BidBook {
    /// Create a new empty bid book
    pub fn new() -> Self {
        Self {
            levels: BTreeMap::new(),
        }
    }

    /// Insert a priced order into the bid book
    pub fn insert(&mut self, order: Order, price: Price) {
        self.levels.entry(price).or_default().insert(order);
    }

    /// Remove an order from the bid book
    pub fn remove(&mut self, order_id: &OrderId, price: Price) -> Option<Order> {
        let level = self.levels.get_mut(&price)?;
        let order = level.remove(order_id)?;
        // Remove empty price levels to keep book clean
        if level.is_empty() {
            self.levels.remove(&price);
        }
        Some(order)
    }

    pub fn get(&self, order_id: &OrderId, price: Price) -> Option<&Order> {
        self.levels.get(&price)?.get(order_id)
    }

    /// Get depth snapshot (top N price levels, highest first)
    pub fn depth_snapshot(&self, depth: usize) -> Vec<DepthLevel> {
        self.levels
            .iter()
            .rev()
            .take(depth)
            .map(|(price, level)| DepthLevel::new(*price, level.total_quantity()))
            .collect()
    }

    /// Full view of the side, best level first
    pub fn side_snapshot(&self) -> SideSnapshot {
        SideSnapshot::from_levels(
            self.levels
                .iter()
                .rev()
                .map(|(price, level)| LevelSnapshot::from_level(*price, level)),
        )
    }

    /// Check if the bid book is empty
    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }
}

impl BookSide for BidBook {
    fn best_level_mut(&mut self) -> Option<(Price, &mut PriceLevel)> {
        self.levels
            .iter_mut()
            .next_back()
            .map(|(price, level)| (*price, level))
    }

    fn remove_level(&mut self, price: Price) {
        self.levels.remove(&price);
    }
}

impl Default for BidBook {
    fn default() -> Self {
        Self::new()
    }
}
