//! Types library for the order book gateway
//!
//! This library provides the value types shared between the HTTP gateway and
//! the matching engine, so both sides agree on identifiers, decimal handling
//! and the order record that travels back to clients.
//!
//! # Modules
//! - `ids`: Opaque identifiers (OrderBookId, OrderId) and their generator
//! - `numeric`: Fixed-point decimal types (Price, Quantity)
//! - `order`: Order side, state and record
//! - `errors`: Error taxonomy reported by the matching engine

// Public modules
pub mod ids;
pub mod numeric;
pub mod order;
pub mod errors;

