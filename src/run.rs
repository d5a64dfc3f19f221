//! Run inventory and discovery state.
//!
//! The inventory is an ordered multiset: every slot is addressable by position
//! and duplicates are allowed. Discovery is the permanent set of item names the
//! player has ever unlocked and outlives any single run.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Items currently held during a run
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Inventory {
    slots: Vec<String>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Item held in a slot
    pub fn get(&self, index: usize) -> Option<&str> {
        self.slots.get(index).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.slots.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.slots
    }

    /// Whether an item with exactly this name is held
    pub fn contains(&self, name: &str) -> bool {
        self.slots.iter().any(|s| s == name)
    }

    /// Append an item at the end of the run
    pub fn push(&mut self, name: impl Into<String>) {
        self.slots.push(name.into());
    }

    /// Remove a single slot, shifting later slots down
    pub fn remove(&mut self, index: usize) -> Option<String> {
        (index < self.slots.len()).then(|| self.slots.remove(index))
    }

    /// Drop every listed slot in one pass.
    ///
    /// Indices refer to positions before the removal, so the order they are
    /// given in does not matter. Out-of-range indices are ignored.
    pub fn remove_indices(&mut self, indices: &[usize]) -> Vec<String> {
        let mut removed = Vec::with_capacity(indices.len());
        let mut kept = Vec::with_capacity(self.slots.len());
        for (i, slot) in std::mem::take(&mut self.slots).into_iter().enumerate() {
            if indices.contains(&i) {
                removed.push(slot);
            } else {
                kept.push(slot);
            }
        }
        self.slots = kept;
        removed
    }

    pub fn clear(&mut self) {
        self.slots.clear();
    }

    pub fn into_vec(self) -> Vec<String> {
        self.slots
    }
}

impl From<Vec<String>> for Inventory {
    fn from(slots: Vec<String>) -> Self {
        Self { slots }
    }
}

impl<S: Into<String>> FromIterator<S> for Inventory {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            slots: iter.into_iter().map(Into::into).collect(),
        }
    }
}

/// Every item the player has unlocked (the encyclopedia)
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Discovery {
    found: BTreeSet<String>,
}

impl Discovery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.found.contains(name)
    }

    /// Mark an item as discovered. Returns true if it was new.
    pub fn insert(&mut self, name: impl Into<String>) -> bool {
        self.found.insert(name.into())
    }

    /// Flip discovery of an item. Returns true if it is now discovered.
    pub fn toggle(&mut self, name: &str) -> bool {
        if self.found.remove(name) {
            false
        } else {
            self.found.insert(name.to_string());
            true
        }
    }

    pub fn len(&self) -> usize {
        self.found.len()
    }

    pub fn is_empty(&self) -> bool {
        self.found.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.found.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for Discovery {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            found: iter.into_iter().map(Into::into).collect(),
        }
    }
}
