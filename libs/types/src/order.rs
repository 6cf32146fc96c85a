//! Order side, state and record types
//!
//! The authoritative state of an order lives in the matching engine. `Order`
//! is the record the engine hands back when it reports on an order.

use crate::ids::OrderId;
use crate::numeric::{Price, Quantity};
use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Order side (buyer or seller)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    /// Buy order (bid)
    #[default]
    Buy,
    /// Sell order (ask)
    Sell,
}

/// Derived status of an order
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderState {
    /// Resting in the book, nothing traded yet
    #[default]
    Open,
    /// Part of the quantity has traded, the rest is still resting
    PartiallyFilled,
    /// Completely matched (terminal)
    Filled,
    /// Removed by an explicit cancel (terminal)
    Canceled,
}

/// Order record as reported by the matching engine
///
/// `quantity` is the quantity the order carried when the record was taken,
/// so for a resting order it is the unfilled remainder. Market orders carry
/// no price.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub side: Side,
    pub quantity: Quantity,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<Price>,
    pub state: OrderState,
    pub timestamp: i64, // Unix nanos
}

impl Order {
    /// Create a new open limit order
    pub fn limit(id: OrderId, side: Side, quantity: Quantity, price: Price, timestamp: i64) -> Self {
        Self {
            id,
            side,
            quantity,
            price: Some(price),
            state: OrderState::Open,
            timestamp,
        }
    }

    /// Take `filled` off the order and mark it partially filled
    pub fn reduce(&mut self, filled: Quantity) {
        self.quantity = self.quantity.saturating_sub(filled);
        self.state = OrderState::PartiallyFilled;
    }

    /// Consume the order into a terminal record with the given state
    pub fn into_state(mut self, state: OrderState) -> Self {
        self.state = state;
        self
    }
}

/// Current time as Unix nanoseconds
pub fn timestamp_now() -> i64 {
    Utc::now().timestamp_nanos_opt().unwrap_or_default()
}
