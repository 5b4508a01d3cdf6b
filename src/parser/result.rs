use super::Dialect;
use serde::{Deserialize, Serialize};

/// A single price change extracted from a message
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Update {
    /// Slot number exactly as written (leading zeros and width preserved)
    pub number: String,
    /// Amount to apply to the slot
    pub new_price: f64,
}

impl Update {
    pub fn new(number: impl Into<String>, new_price: f64) -> Self {
        Self {
            number: number.into(),
            new_price,
        }
    }
}

/// Result of dispatching a message through the registry
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParseResult {
    /// Dialect that produced the updates
    pub dialect: Dialect,
    /// Updates in message order, duplicates kept
    pub updates: Vec<Update>,
}

impl ParseResult {
    pub fn is_empty(&self) -> bool {
        self.updates.is_empty()
    }

    /// Sum of every update's price
    pub fn total(&self) -> f64 {
        self.updates.iter().map(|u| u.new_price).sum()
    }
}
