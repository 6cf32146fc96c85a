use matching_engine::{LimitFill, MarketFill};
use serde::{Deserialize, Serialize};
use types::ids::OrderBookId;
use types::numeric::Quantity;
use types::order::Order;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatedOrderBook {
    pub orderbook_id: OrderBookId,
}

/// Uniform result of a limit or market order submission
///
/// `partial` is the empty order when nothing was partially filled, and
/// `quantity_left` is always zero for limit orders since their remainder rests.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderStatus {
    pub done: Vec<Order>,
    pub partial: Order,
    pub partial_quantity_processed: Quantity,
    pub quantity_left: Quantity,
}

impl From<LimitFill> for OrderStatus {
    fn from(fill: LimitFill) -> Self {
        Self {
            done: fill.done,
            partial: fill.partial.unwrap_or_default(),
            partial_quantity_processed: fill.partial_quantity_processed,
            quantity_left: Quantity::zero(),
        }
    }
}

impl From<MarketFill> for OrderStatus {
    fn from(fill: MarketFill) -> Self {
        Self {
            done: fill.done,
            partial: fill.partial.unwrap_or_default(),
            partial_quantity_processed: fill.partial_quantity_processed,
            quantity_left: fill.quantity_left,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use types::ids::OrderId;
    use types::numeric::Price;
    use types::order::Side;

    fn order(qty: &str) -> Order {
        Order::limit(
            OrderId::generate(),
            Side::Sell,
            Quantity::from_str(qty).unwrap(),
            Price::from_u64(100),
            1708123456789000000,
        )
    }

    #[test]
    fn test_limit_fill_without_partial() {
        let status = OrderStatus::from(LimitFill::default());

        assert!(status.done.is_empty());
        assert_eq!(status.partial, Order::default());
        assert!(status.partial_quantity_processed.is_zero());
        assert!(status.quantity_left.is_zero());
    }

    #[test]
    fn test_limit_fill_never_reports_quantity_left() {
        let partial = order("3");
        let status = OrderStatus::from(LimitFill {
            done: vec![order("1")],
            partial: Some(partial.clone()),
            partial_quantity_processed: Quantity::from_str("2").unwrap(),
        });

        assert_eq!(status.done.len(), 1);
        assert_eq!(status.partial, partial);
        assert!(status.quantity_left.is_zero());
    }

    #[test]
    fn test_market_fill_keeps_quantity_left() {
        let status = OrderStatus::from(MarketFill {
            quantity_left: Quantity::from_str("5").unwrap(),
            ..MarketFill::default()
        });

        assert_eq!(status.quantity_left, Quantity::from_str("5").unwrap());
        assert_eq!(status.partial, Order::default());
    }

    #[test]
    fn test_json_shape() {
        let json = serde_json::to_value(OrderStatus::default()).unwrap();

        assert_eq!(json["done"], serde_json::json!([]));
        assert_eq!(json["partial"]["id"], "");
        assert_eq!(json["partialQuantityProcessed"], "0");
        assert_eq!(json["quantityLeft"], "0");
    }
}
