//! Price compatibility between an incoming order and a resting level

use types::numeric::Price;
use types::order::Side;

/// Whether an incoming order may trade at `resting` price
///
/// A buy crosses levels at or below its limit, a sell crosses levels at or
/// above it. Market orders carry no limit and cross every level.
pub fn crosses(incoming: Side, limit: Option<Price>, resting: Price) -> bool {
    match (incoming, limit) {
        (_, None) => true,
        (Side::Buy, Some(limit)) => resting <= limit,
        (Side::Sell, Some(limit)) => resting >= limit,
    }
}
