//! Price level implementation with FIFO queue
//!
//! A price level contains all orders resting at a specific price point.
//! Orders are maintained in FIFO (First-In-First-Out) order to enforce
//! time priority.

use std::collections::VecDeque;
use types::ids::OrderId;
use types::numeric::Quantity;
use types::order::Order;

/// A price level containing orders at a specific price
///
/// Maintains strict FIFO ordering for time-priority matching.
/// `total_quantity` always equals the sum of the queued orders' quantities.
#[derive(Debug, Clone)]
pub struct PriceLevel {
    /// Queue of orders at this price level (FIFO order)
    orders: VecDeque<Order>,
    /// Total quantity available at this level
    total_quantity: Quantity,
}

impl PriceLevel {
    /// Create a new empty price level
    pub fn new() -> Self {
        Self {
            orders: VecDeque::new(),
            total_quantity: Quantity::zero(),
        }
    }

    /// Insert an order at the back of the queue (time priority)
    pub fn insert(&mut self, order: Order) {
        self.total_quantity = self.total_quantity + order.quantity;
        self.orders.push_back(order);
    }

    /// Remove an order from the queue by OrderId
    pub fn remove(&mut self, order_id: &OrderId) -> Option<Order> {
        let position = self.orders.iter().position(|order| &order.id == order_id)?;
        let order = self.orders.remove(position)?;
        self.total_quantity = self.total_quantity.saturating_sub(order.quantity);
        Some(order)
    }

    pub fn get(&self, order_id: &OrderId) -> Option<&Order> {
        self.orders.iter().find(|order| &order.id == order_id)
    }

    /// Peek at the front order without removing it
    pub fn front(&self) -> Option<&Order> {
        self.orders.front()
    }

    /// Pop the front order from the queue
    pub fn pop_front(&mut self) -> Option<Order> {
        let order = self.orders.pop_front()?;
        self.total_quantity = self.total_quantity.saturating_sub(order.quantity);
        Some(order)
    }

    /// Take `filled` off the front order, which stays at the front
    ///
    /// Returns the updated front order. Callers fill less than the front
    /// order's quantity; a full fill goes through `pop_front`.
    pub fn fill_front(&mut self, filled: Quantity) -> Option<Order> {
        let front = self.orders.front_mut()?;
        front.reduce(filled);
        self.total_quantity = self.total_quantity.saturating_sub(filled);
        Some(front.clone())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Order> {
        self.orders.iter()
    }

    /// Check if the price level is empty
    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    /// Get the total quantity at this price level
    pub fn total_quantity(&self) -> Quantity {
        self.total_quantity
    }

    /// Get the number of orders at this level
    pub fn order_count(&self) -> usize {
        self.orders.len()
    }
}

impl Default for PriceLevel {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use types::numeric::Price;
    use types::order::{OrderState, Side};

    fn order(qty: &str) -> Order {
        Order::limit(
            OrderId::generate(),
            Side::Buy,
            Quantity::from_str(qty).unwrap(),
            Price::from_u64(100),
            1708123456789000000,
        )
    }

    #[test]
    fn test_price_level_insert() {
        let mut level = PriceLevel::new();
        level.insert(order("1.5"));

        assert_eq!(level.order_count(), 1);
        assert_eq!(level.total_quantity(), Quantity::from_str("1.5").unwrap());
        assert!(!level.is_empty());
    }

    #[test]
    fn test_price_level_fifo_order() {
        let mut level = PriceLevel::new();
        let first = order("1.0");
        let first_id = first.id.clone();

        level.insert(first);
        level.insert(order("2.0"));
        level.insert(order("3.0"));

        let front = level.front().unwrap();
        assert_eq!(front.id, first_id);
        assert_eq!(front.quantity, Quantity::from_str("1.0").unwrap());
    }

    #[test]
    fn test_price_level_remove() {
        let mut level = PriceLevel::new();
        let first = order("1.0");
        let first_id = first.id.clone();
        level.insert(first);
        level.insert(order("2.0"));

        let removed = level.remove(&first_id).unwrap();
        assert_eq!(removed.quantity, Quantity::from_str("1.0").unwrap());
        assert_eq!(level.order_count(), 1);
        assert_eq!(level.total_quantity(), Quantity::from_str("2.0").unwrap());
        assert!(level.remove(&first_id).is_none());
    }

    #[test]
    fn test_price_level_fill_front() {
        let mut level = PriceLevel::new();
        level.insert(order("5.0"));

        let updated = level.fill_front(Quantity::from_str("2.0").unwrap()).unwrap();
        assert_eq!(updated.quantity, Quantity::from_str("3.0").unwrap());
        assert_eq!(updated.state, OrderState::PartiallyFilled);
        assert_eq!(level.total_quantity(), Quantity::from_str("3.0").unwrap());
        assert_eq!(level.order_count(), 1);

        level.pop_front();
        assert!(level.is_empty());
        assert_eq!(level.total_quantity(), Quantity::zero());
    }

    #[test]
    fn test_price_level_total_quantity_invariant() {
        let mut level = PriceLevel::new();
        level.insert(order("1.5"));
        level.insert(order("2.5"));
        level.insert(order("3.0"));

        assert_eq!(level.total_quantity(), Quantity::from_str("7.0").unwrap());
    }
}
