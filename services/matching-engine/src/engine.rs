//! Matching engine core
//!
//! `OrderBook` coordinates the two book sides, the resting-order index and the
//! sweep executor behind a single lock.

use parking_lot::Mutex;
use std::collections::HashMap;
use tracing::debug;
use types::errors::OrderError;
use types::ids::OrderId;
use types::numeric::{Price, Quantity};
use types::order::{timestamp_now, Order, OrderState, Side};

use crate::book::{AskBook, BidBook};
use crate::matching::executor::{self, Sweep};
use crate::matching::{LimitFill, MarketFill};
use crate::snapshot::{BookSnapshot, MarketView};

/// A single order book session
///
/// All operations take `&self`; the interior lock serializes concurrent calls
/// against the same book, so callers may share it freely behind an `Arc`.
#[derive(Debug, Default)]
pub struct OrderBook {
    state: Mutex<BookState>,
}

#[derive(Debug, Default)]
struct BookState {
    bids: BidBook,
    asks: AskBook,
    /// Resting order id -> where it rests
    index: HashMap<OrderId, (Side, Price)>,
}

impl BookState {
    fn sweep(&mut self, side: Side, quantity: Quantity, limit: Option<Price>) -> Sweep {
        let sweep = match side {
            Side::Buy => executor::sweep(&mut self.asks, side, quantity, limit),
            Side::Sell => executor::sweep(&mut self.bids, side, quantity, limit),
        };
        for order in &sweep.done {
            self.index.remove(&order.id);
        }
        sweep
    }

    fn rest(&mut self, order: Order, price: Price) {
        self.index.insert(order.id.clone(), (order.side, price));
        match order.side {
            Side::Buy => self.bids.insert(order, price),
            Side::Sell => self.asks.insert(order, price),
        }
    }
}

impl OrderBook {
    /// Create an empty order book
    pub fn new() -> Self {
        Self::default()
    }

    /// Match a limit order and rest whatever does not trade
    ///
    /// When the incoming order fills completely, a terminal record for it is
    /// appended to `done`, priced at the volume-weighted execution price.
    pub fn process_limit_order(
        &self,
        side: Side,
        order_id: &OrderId,
        quantity: Quantity,
        price: Price,
    ) -> Result<LimitFill, OrderError> {
        if !quantity.is_positive() {
            return Err(OrderError::InvalidQuantity(quantity.to_string()));
        }
        if !price.is_positive() {
            return Err(OrderError::InvalidPrice(price.to_string()));
        }

        let mut state = self.state.lock();
        if state.index.contains_key(order_id) {
            return Err(OrderError::AlreadyExists {
                order_id: order_id.to_string(),
            });
        }

        let sweep = state.sweep(side, quantity, Some(price));
        let average_price = sweep.average_price();
        let quantity_left = sweep.quantity_left;
        let timestamp = timestamp_now();

        let mut fill = LimitFill {
            done: sweep.done,
            partial: sweep.partial,
            partial_quantity_processed: sweep.partial_quantity_processed,
        };

        if quantity_left.is_positive() {
            let mut order = Order::limit(order_id.clone(), side, quantity_left, price, timestamp);
            if !fill.done.is_empty() {
                order.state = OrderState::PartiallyFilled;
                fill.partial = Some(order.clone());
                fill.partial_quantity_processed = quantity - quantity_left;
            }
            state.rest(order, price);
        } else {
            fill.done.push(Order {
                id: order_id.clone(),
                side,
                quantity,
                price: average_price.or(Some(price)),
                state: OrderState::Filled,
                timestamp,
            });
        }

        debug!(
            order_id = %order_id,
            ?side,
            %quantity,
            %price,
            done = fill.done.len(),
            partial = fill.partial.is_some(),
            "processed limit order"
        );
        Ok(fill)
    }

    /// Match a market order; unmatched quantity is discarded, never rested
    pub fn process_market_order(&self, side: Side, quantity: Quantity) -> Result<MarketFill, OrderError> {
        if !quantity.is_positive() {
            return Err(OrderError::InvalidQuantity(quantity.to_string()));
        }

        let sweep = self.state.lock().sweep(side, quantity, None);

        debug!(
            ?side,
            %quantity,
            done = sweep.done.len(),
            quantity_left = %sweep.quantity_left,
            "processed market order"
        );
        Ok(MarketFill {
            done: sweep.done,
            partial: sweep.partial,
            partial_quantity_processed: sweep.partial_quantity_processed,
            quantity_left: sweep.quantity_left,
        })
    }

    /// Cancel a resting order
    ///
    /// Returns `None` if the order is unknown or no longer resting.
    pub fn cancel_order(&self, order_id: &OrderId) -> Option<Order> {
        let mut state = self.state.lock();
        let (side, price) = state.index.remove(order_id)?;
        let order = match side {
            Side::Buy => state.bids.remove(order_id, price),
            Side::Sell => state.asks.remove(order_id, price),
        }?;
        Some(order.into_state(OrderState::Canceled))
    }

    /// Current record of a resting order
    pub fn order(&self, order_id: &OrderId) -> Option<Order> {
        let state = self.state.lock();
        let (side, price) = state.index.get(order_id)?;
        match side {
            Side::Buy => state.bids.get(order_id, *price),
            Side::Sell => state.asks.get(order_id, *price),
        }
        .cloned()
    }

    /// Get full order book snapshot
    pub fn snapshot(&self) -> BookSnapshot {
        let state = self.state.lock();
        BookSnapshot {
            asks: state.asks.side_snapshot(),
            bids: state.bids.side_snapshot(),
        }
    }

    /// Get aggregated depth for both sides
    pub fn market_overview(&self) -> MarketView {
        let state = self.state.lock();
        MarketView {
            asks: state.asks.depth_snapshot(usize::MAX),
            bids: state.bids.depth_snapshot(usize::MAX),
        }
    }
}
