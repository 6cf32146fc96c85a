//! Order book gateway
//!
//! HTTP control layer in front of the matching engine: creates order book
//! sessions, validates and routes order submissions and cancels, and keeps the
//! two session indexes (book id -> book, order id -> book id) that let later
//! requests find the right book.

pub mod adapter;
pub mod cache;
pub mod config;
pub mod error;
pub mod fields;
pub mod handlers;
pub mod models;
pub mod router;
pub mod state;
pub mod telemetry;
