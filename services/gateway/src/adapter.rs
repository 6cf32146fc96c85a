//! Boundary to the matching engine
//!
//! The gateway never touches engine internals; it holds `Arc<dyn BookHandle>`
//! values and calls these operations. Implementations must serialize calls
//! against the same handle themselves: the gateway holds no lock while a call
//! is in flight, so two requests for one book may reach it concurrently.

use std::sync::Arc;

use matching_engine::{BookSnapshot, LimitFill, MarketFill, MarketView, OrderBook};
use types::errors::OrderError;
use types::ids::OrderId;
use types::numeric::{Price, Quantity};
use types::order::{Order, Side};

/// Operations on one order book session
pub trait BookHandle: Send + Sync {
    fn process_limit_order(
        &self,
        side: Side,
        order_id: &OrderId,
        quantity: Quantity,
        price: Price,
    ) -> Result<LimitFill, OrderError>;

    fn process_market_order(&self, side: Side, quantity: Quantity) -> Result<MarketFill, OrderError>;

    /// `None` means the order is unknown or already settled
    fn cancel_order(&self, order_id: &OrderId) -> Option<Order>;

    fn order(&self, order_id: &OrderId) -> Option<Order>;

    fn snapshot(&self) -> BookSnapshot;

    fn market_overview(&self) -> MarketView;
}

/// Factory for new sessions; never fails
pub trait MatchingEngine: Send + Sync {
    fn new_book(&self) -> Arc<dyn BookHandle>;
}

/// Engine running inside the gateway process
#[derive(Debug, Default, Clone, Copy)]
pub struct InProcessEngine;

impl MatchingEngine for InProcessEngine {
    fn new_book(&self) -> Arc<dyn BookHandle> {
        Arc::new(OrderBook::new())
    }
}

impl BookHandle for OrderBook {
    fn process_limit_order(
        &self,
        side: Side,
        order_id: &OrderId,
        quantity: Quantity,
        price: Price,
    ) -> Result<LimitFill, OrderError> {
        OrderBook::process_limit_order(self, side, order_id, quantity, price)
    }

    fn process_market_order(&self, side: Side, quantity: Quantity) -> Result<MarketFill, OrderError> {
        OrderBook::process_market_order(self, side, quantity)
    }

    fn cancel_order(&self, order_id: &OrderId) -> Option<Order> {
        OrderBook::cancel_order(self, order_id)
    }

    fn order(&self, order_id: &OrderId) -> Option<Order> {
        OrderBook::order(self, order_id)
    }

    fn snapshot(&self) -> BookSnapshot {
        OrderBook::snapshot(self)
    }

    fn market_overview(&self) -> MarketView {
        OrderBook::market_overview(self)
    }
}
