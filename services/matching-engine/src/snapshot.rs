//! Serializable views of an order book
//!
//! `BookSnapshot` is the full book (every resting order, level by level).
//! `MarketView` aggregates each side into price/quantity depth.

use serde::{Deserialize, Serialize};
use types::numeric::{Price, Quantity};
use types::order::Order;

use crate::book::PriceLevel;

/// Full order book view
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BookSnapshot {
    pub asks: SideSnapshot,
    pub bids: SideSnapshot,
}

/// One side of the book, best level first
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SideSnapshot {
    /// Number of resting orders across all levels
    pub num_orders: usize,
    /// Number of price levels
    pub depth: usize,
    pub levels: Vec<LevelSnapshot>,
}

impl SideSnapshot {
    pub(crate) fn from_levels(levels: impl Iterator<Item = LevelSnapshot>) -> Self {
        let levels: Vec<LevelSnapshot> = levels.collect();
        Self {
            num_orders: levels.iter().map(|level| level.orders.len()).sum(),
            depth: levels.len(),
            levels,
        }
    }
}

/// Resting orders at one price, in time priority
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelSnapshot {
    pub price: Price,
    pub volume: Quantity,
    pub orders: Vec<Order>,
}

impl LevelSnapshot {
    pub(crate) fn from_level(price: Price, level: &PriceLevel) -> Self {
        Self {
            price,
            volume: level.total_quantity(),
            orders: level.iter().cloned().collect(),
        }
    }
}

/// Aggregated market depth
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MarketView {
    /// Ask levels, lowest price first
    pub asks: Vec<DepthLevel>,
    /// Bid levels, highest price first
    pub bids: Vec<DepthLevel>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DepthLevel {
    pub price: Price,
    pub quantity: Quantity,
}

impl DepthLevel {
    pub fn new(price: Price, quantity: Quantity) -> Self {
        Self { price, quantity }
    }
}
