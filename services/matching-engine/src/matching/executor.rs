//! Sweep execution logic
//!
//! Walks one side of the book best price first, consuming resting orders in
//! time priority until the incoming quantity is exhausted, the side runs dry,
//! or (for limit orders) prices stop crossing.

use rust_decimal::Decimal;
use types::numeric::{Price, Quantity};
use types::order::{Order, OrderState, Side};

use super::crossing;
use crate::book::BookSide;

/// Outcome of processing a limit order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LimitFill {
    /// Orders that reached a terminal filled state
    pub done: Vec<Order>,
    /// The single order left partially filled, if any
    pub partial: Option<Order>,
    /// Quantity traded against `partial`
    pub partial_quantity_processed: Quantity,
}

impl LimitFill {
    /// Every order the fill reports on
    pub fn orders(&self) -> impl Iterator<Item = &Order> {
        self.done.iter().chain(self.partial.iter())
    }
}

/// Outcome of processing a market order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MarketFill {
    pub done: Vec<Order>,
    pub partial: Option<Order>,
    pub partial_quantity_processed: Quantity,
    /// Requested quantity that found no liquidity and was discarded
    pub quantity_left: Quantity,
}

impl MarketFill {
    pub fn orders(&self) -> impl Iterator<Item = &Order> {
        self.done.iter().chain(self.partial.iter())
    }
}

/// Result of one sweep over a book side
#[derive(Debug, Default)]
pub(crate) struct Sweep {
    /// Resting orders consumed completely
    pub done: Vec<Order>,
    /// Resting order consumed in part (always the last one touched)
    pub partial: Option<Order>,
    pub partial_quantity_processed: Quantity,
    pub quantity_left: Quantity,
}

impl Sweep {
    /// Volume-weighted execution price over everything the sweep traded
    pub fn average_price(&self) -> Option<Price> {
        let mut volume = Decimal::ZERO;
        let mut notional = Decimal::ZERO;

        let traded = self
            .done
            .iter()
            .map(|order| (order, order.quantity))
            .chain(self.partial.iter().map(|order| (order, self.partial_quantity_processed)));

        for (order, quantity) in traded {
            if let Some(price) = order.price {
                volume += quantity.as_decimal();
                notional += price.as_decimal() * quantity.as_decimal();
            }
        }

        notional.checked_div(volume).map(Price::new)
    }
}

/// Consume resting liquidity from `book` for an incoming order
///
/// `limit` is `None` for market orders, which trade at any price.
pub(crate) fn sweep<S: BookSide>(
    book: &mut S,
    incoming: Side,
    quantity: Quantity,
    limit: Option<Price>,
) -> Sweep {
    let mut sweep = Sweep::default();
    let mut left = quantity;

    while left.is_positive() {
        let (price, drained) = {
            let Some((price, level)) = book.best_level_mut() else {
                break;
            };
            if !crossing::crosses(incoming, limit, price) {
                break;
            }

            while left.is_positive() {
                let Some(head_quantity) = level.front().map(|order| order.quantity) else {
                    break;
                };

                if left < head_quantity {
                    sweep.partial = level.fill_front(left);
                    sweep.partial_quantity_processed = left;
                    left = Quantity::zero();
                } else if let Some(order) = level.pop_front() {
                    left = left - order.quantity;
                    sweep.done.push(order.into_state(OrderState::Filled));
                }
            }

            (price, level.is_empty())
        };

        if drained {
            book.remove_level(price);
        }
    }

    sweep.quantity_left = left;
    sweep
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::book::AskBook;
    use std::str::FromStr;
    use types::ids::OrderId;
    use crate::snapshot::DepthLevel;

    fn qty(s: &str) -> Quantity {
        Quantity::from_str(s).unwrap()
    }

    fn ask(book: &mut AskBook, price: u64, quantity: &str) -> OrderId {
        let price = Price::from_u64(price);
        let order = Order::limit(OrderId::generate(), Side::Sell, qty(quantity), price, 1);
        let id = order.id.clone();
        book.insert(order, price);
        id
    }

    #[test]
    fn test_sweep_stops_at_limit() {
        let mut book = AskBook::new();
        ask(&mut book, 100, "1");
        ask(&mut book, 105, "1");

        let result = sweep(&mut book, Side::Buy, qty("2"), Some(Price::from_u64(100)));

        assert_eq!(result.done.len(), 1);
        assert_eq!(result.quantity_left, qty("1"));
        assert_eq!(book.depth_snapshot(usize::MAX).len(), 1);
    }

    #[test]
    fn test_sweep_without_limit_walks_levels() {
        let mut book = AskBook::new();
        ask(&mut book, 100, "1");
        ask(&mut book, 105, "1");

        let result = sweep(&mut book, Side::Buy, qty("3"), None);

        assert_eq!(result.done.len(), 2);
        assert!(result.partial.is_none());
        assert_eq!(result.quantity_left, qty("1"));
        assert!(book.is_empty());
    }

    #[test]
    fn test_sweep_partially_consumes_head() {
        let mut book = AskBook::new();
        let head = ask(&mut book, 100, "5");
        ask(&mut book, 100, "5");

        let result = sweep(&mut book, Side::Buy, qty("2"), None);

        let partial = result.partial.unwrap();
        assert_eq!(partial.id, head);
        assert_eq!(partial.quantity, qty("3"));
        assert_eq!(partial.state, OrderState::PartiallyFilled);
        assert_eq!(result.partial_quantity_processed, qty("2"));
        assert!(result.done.is_empty());
        assert_eq!(book.depth_snapshot(1), vec![DepthLevel::new(Price::from_u64(100), qty("8"))]);
    }

    #[test]
    fn test_average_price_is_volume_weighted() {
        let mut book = AskBook::new();
        ask(&mut book, 100, "1");
        ask(&mut book, 110, "4");

        // 1 @ 100 + 3 @ 110 = 430 over 4
        let result = sweep(&mut book, Side::Buy, qty("4"), None);
        assert_eq!(result.average_price(), Some(Price::from_str("107.5").unwrap()));
    }

    #[test]
    fn test_average_price_of_empty_sweep() {
        assert_eq!(Sweep::default().average_price(), None);
    }
}
