mod error;
pub mod layout;
mod settlement;

#[cfg(test)]
mod tests;

pub use error::TableError;
pub use layout::{Pool, is_valid_number, standard_numbers};
pub use settlement::{Settlement, TableConfig};

use crate::parser::{KnownNumbers, Update};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// One numbered slot; `None` is an empty slot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Slot {
    pub number: String,
    pub price: Option<f64>,
}

/// A manual entry that can be undone
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub number: String,
    pub previous: Option<f64>,
    pub next: f64,
}

/// Numbered price table fed by manual entries and parsed messages
///
/// Amounts accumulate: applying `15/50` twice leaves `100.00` in slot `15`.
/// Stored values are kept to cents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceTable {
    slots: Vec<Slot>,
    #[serde(default)]
    history: Vec<HistoryEntry>,
    /// Slot values captured before the last message was applied
    #[serde(default)]
    message_snapshot: Option<Vec<Option<f64>>>,
}

impl PriceTable {
    /// Table with the standard 120-slot layout, all empty
    pub fn standard() -> Self {
        Self::from_numbers(standard_numbers())
    }

    /// Table with a custom set of slot numbers, kept in the given order
    pub fn from_numbers<I, S>(numbers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            slots: numbers
                .into_iter()
                .map(|n| Slot {
                    number: n.into(),
                    price: None,
                })
                .collect(),
            history: Vec::new(),
            message_snapshot: None,
        }
    }

    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    /// Slots that currently hold a value
    pub fn filled(&self) -> impl Iterator<Item = (&str, f64)> {
        self.slots
            .iter()
            .filter_map(|s| s.price.map(|p| (s.number.as_str(), p)))
    }

    /// Current value of a slot, `None` if empty or absent
    pub fn price(&self, number: &str) -> Option<f64> {
        self.slot(number).and_then(|s| s.price)
    }

    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    pub fn has_message_snapshot(&self) -> bool {
        self.message_snapshot.is_some()
    }

    /// Add a manually entered amount to a slot
    ///
    /// Negative amounts are accepted as corrections; only non-finite amounts
    /// are rejected. Returns the slot's new value.
    pub fn add_entry(&mut self, number: &str, price: f64) -> Result<f64, TableError> {
        let number = number.trim();
        if !is_valid_number(number) {
            return Err(TableError::InvalidNumber(number.to_string()));
        }
        if !price.is_finite() {
            return Err(TableError::InvalidPrice(price));
        }

        let slot = self
            .slot_mut(number)
            .ok_or_else(|| TableError::NotInTable(number.to_string()))?;

        let previous = slot.price;
        let next = to_cents(previous.unwrap_or(0.0) + price);
        slot.price = Some(next);

        self.history.push(HistoryEntry {
            number: number.to_string(),
            previous,
            next,
        });
        info!("Added {} = {:.2}", number, price);

        Ok(next)
    }

    /// Revert the most recent manual entry
    pub fn undo_last(&mut self) -> Result<HistoryEntry, TableError> {
        let entry = self.history.pop().ok_or(TableError::NothingToUndo)?;
        if let Some(slot) = self.slot_mut(&entry.number) {
            slot.price = entry.previous;
        }
        debug!(number = %entry.number, "undid manual entry");
        Ok(entry)
    }

    /// Accumulate parsed updates onto their slots
    ///
    /// The whole table is snapshotted first so the batch can be reverted with
    /// [`undo_message`](Self::undo_message). Updates for numbers the table
    /// does not hold are ignored. Returns how many updates were applied.
    pub fn apply_updates(&mut self, updates: &[Update]) -> usize {
        self.message_snapshot = Some(self.slots.iter().map(|s| s.price).collect());

        let mut applied = 0;
        for update in updates {
            let Some(slot) = self.slot_mut(&update.number) else {
                continue;
            };
            let current = slot.price.unwrap_or(0.0);
            slot.price = Some(to_cents(current + update.new_price));
            applied += 1;
            info!("Updated {} = {:.2}", update.number, update.new_price);
        }

        applied
    }

    /// Restore the table to how it was before the last message
    pub fn undo_message(&mut self) -> Result<(), TableError> {
        let snapshot = self
            .message_snapshot
            .take()
            .ok_or(TableError::NoMessageToUndo)?;

        for (slot, price) in self.slots.iter_mut().zip(snapshot) {
            slot.price = price;
        }
        debug!("restored table from message snapshot");
        Ok(())
    }

    /// Empty every slot and forget manual-entry history
    pub fn reset(&mut self) {
        for slot in &mut self.slots {
            slot.price = None;
        }
        self.history.clear();
        info!("reset all slots");
    }

    /// Filled slots as `"NN":V` pairs joined by `; `
    ///
    /// The output is itself a valid JSON-style message.
    pub fn to_text(&self) -> String {
        self.filled()
            .map(|(number, price)| format!("\"{}\":{:.2}", number, price))
            .collect::<Vec<_>>()
            .join("; ")
    }

    fn slot(&self, number: &str) -> Option<&Slot> {
        self.slots.iter().find(|s| s.number == number)
    }

    fn slot_mut(&mut self, number: &str) -> Option<&mut Slot> {
        self.slots.iter_mut().find(|s| s.number == number)
    }
}

impl Default for PriceTable {
    fn default() -> Self {
        Self::standard()
    }
}

impl KnownNumbers for PriceTable {
    fn contains(&self, number: &str) -> bool {
        self.slot(number).is_some()
    }
}

fn to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
