//! Session cache: the order book and order indexes
//!
//! Two concurrent maps, each guarded per shard by `DashMap`:
//! - book index: orderbook id -> book handle (entries live for the process)
//! - order index: order id -> owning orderbook id (removed on cancel only)
//!
//! Lookups clone the handle out of the map before returning, so no shard
//! guard is ever held while the caller talks to the engine.

use std::sync::Arc;

use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use thiserror::Error;
use tracing::{debug, warn};
use types::ids::{OrderBookId, OrderId};

use crate::adapter::{BookHandle, MatchingEngine};

#[derive(Debug, Error, PartialEq)]
pub enum LookupError {
    #[error("Missing orderbook_id")]
    MissingOrderBookId,

    #[error("orderbook_id is invalid")]
    UnknownOrderBook,

    #[error("Missing order_id")]
    MissingOrderId,

    #[error("order_id is invalid")]
    UnknownOrder,
}

pub struct SessionCache {
    engine: Arc<dyn MatchingEngine>,
    books: DashMap<OrderBookId, Arc<dyn BookHandle>>,
    orders: DashMap<OrderId, OrderBookId>,
}

impl SessionCache {
    pub fn new(engine: Arc<dyn MatchingEngine>) -> Self {
        Self {
            engine,
            books: DashMap::new(),
            orders: DashMap::new(),
        }
    }

    /// Open a new engine session and index it under a fresh id
    pub fn create_book(&self) -> OrderBookId {
        let book = self.engine.new_book();
        loop {
            let id = OrderBookId::generate();
            match self.books.entry(id.clone()) {
                Entry::Vacant(slot) => {
                    slot.insert(book);
                    debug!(orderbook_id = %id, "indexed new order book");
                    return id;
                }
                Entry::Occupied(_) => warn!(orderbook_id = %id, "generated orderbook id collided, drawing again"),
            }
        }
    }

    pub fn lookup_book(&self, orderbook_id: &str) -> Result<Arc<dyn BookHandle>, LookupError> {
        if orderbook_id.is_empty() {
            return Err(LookupError::MissingOrderBookId);
        }
        self.books
            .get(orderbook_id)
            .map(|entry| Arc::clone(entry.value()))
            .ok_or(LookupError::UnknownOrderBook)
    }

    /// Resolve the book owning `order_id`
    ///
    /// The two index reads are independent; if the order mapping disappears
    /// in between, the caller just sees a not-found error.
    pub fn lookup_book_by_order(&self, order_id: &str) -> Result<Arc<dyn BookHandle>, LookupError> {
        if order_id.is_empty() {
            return Err(LookupError::MissingOrderId);
        }
        let orderbook_id = self
            .orders
            .get(order_id)
            .map(|entry| entry.value().clone())
            .ok_or(LookupError::UnknownOrder)?;
        self.lookup_book(orderbook_id.as_str())
    }

    /// Map each non-empty order id to `orderbook_id`, overwriting silently
    pub fn associate_orders<'a, I>(&self, orderbook_id: &OrderBookId, order_ids: I)
    where
        I: IntoIterator<Item = &'a OrderId>,
    {
        for order_id in order_ids {
            if !order_id.is_empty() {
                self.orders.insert(order_id.clone(), orderbook_id.clone());
            }
        }
    }

    pub fn remove_order(&self, order_id: &str) {
        self.orders.remove(order_id);
    }

    pub fn book_count(&self) -> usize {
        self.books.len()
    }

    pub fn order_count(&self) -> usize {
        self.orders.len()
    }
}
