//! Order book infrastructure module
//!
//! Contains price levels, bid book, and ask book implementations.

pub mod price_level;
pub mod bid_book;
pub mod ask_book;

pub use price_level::PriceLevel;
pub use bid_book::BidBook;
pub use ask_book::AskBook;

use types::numeric::Price;

/// One side of the book as seen by the sweep executor
///
/// `best_level_mut` yields the level an incoming order of the opposite side
/// would trade against first.
pub(crate) trait BookSide {
    fn best_level_mut(&mut self) -> Option<(Price, &mut PriceLevel)>;

    /// Drop a level once its queue has drained
    fn remove_level(&mut self, price: Price);
}
