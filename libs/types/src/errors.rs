//! Error types reported by the matching engine
//!
//! Comprehensive error taxonomy using thiserror

use thiserror::Error;

/// Errors a matching engine reports when it refuses to process an order
#[derive(Error, Debug, Clone, PartialEq)]
pub enum OrderError {
    #[error("Invalid order quantity: {0}")]
    InvalidQuantity(String),

    #[error("Invalid order price: {0}")]
    InvalidPrice(String),

    #[error("Order already exists: {order_id}")]
    AlreadyExists { order_id: String },
}
