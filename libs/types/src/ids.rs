//! Opaque identifier types for order books and orders
//!
//! Identifiers are random UUID v4 tokens rendered as text. Uniqueness comes
//! from the 122 random bits alone, so generating an id never needs to
//! coordinate with whoever stores it.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;
use uuid::Uuid;

/// Generate a fresh identifier string.
pub fn generate_id() -> String {
    Uuid::new_v4().to_string()
}

/// Unique identifier for an order book session
///
/// `Default` is the empty id, which never refers to a real book.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderBookId(String);

impl OrderBookId {
    /// Create a new random OrderBookId
    pub fn generate() -> Self {
        Self(generate_id())
    }

    /// Get the id as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for OrderBookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for OrderBookId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for OrderBookId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl Borrow<str> for OrderBookId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// Unique identifier for an order
///
/// Orders submitted through the gateway get a generated id; ids coming back
/// from clients are taken verbatim and only resolved against the indexes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(String);

impl OrderId {
    /// Create a new random OrderId
    pub fn generate() -> Self {
        Self(generate_id())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for OrderId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for OrderId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl Borrow<str> for OrderId {
    fn borrow(&self) -> &str {
        &self.0
    }
}
