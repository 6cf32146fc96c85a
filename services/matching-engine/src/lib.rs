//! Matching Engine Service
//!
//! In-process order matching engine implementing price-time priority.
//! Each `OrderBook` is one independent session; the gateway creates as many
//! as clients ask for and drives them through its adapter boundary.
//!
//! **Key Invariants:**
//! - Price-time priority strictly enforced
//! - Calls against the same book are serialized by the book itself
//! - Conservation of quantity (traded + resting + left == submitted)

pub mod book;
pub mod matching;
pub mod engine;
pub mod snapshot;

pub use engine::OrderBook;
pub use matching::{LimitFill, MarketFill};
pub use snapshot::{BookSnapshot, DepthLevel, MarketView};
