//! Ingredient matching against a run inventory.
//!
//! Matching is greedy and left to right: each requirement claims the first
//! unclaimed slot that satisfies it. There is no backtracking, so an earlier
//! requirement can take a slot that a later one needed even when a different
//! assignment would have satisfied both. Ingredient lists are short enough
//! that this rarely matters.

use serde::{Deserialize, Serialize};

use super::fusion::is_fused;
use crate::run::Inventory;

/// Any item whose name contains this matches any requirement that contains it
pub const WILDCARD_FAMILY: &str = "Laser";

/// How item names are compared
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NameComparison {
    /// Case-sensitive equality
    #[default]
    Exact,
    /// Exact, falling back to case-insensitive equality
    CaseInsensitive,
}

/// Whether a held item can stand in for a required ingredient
pub fn satisfies(held: &str, required: &str, comparison: NameComparison) -> bool {
    // Fused items are dead ends, even if a source name was a laser
    if is_fused(held) {
        return false;
    }
    let equal = match comparison {
        NameComparison::Exact => held == required,
        NameComparison::CaseInsensitive => {
            held == required || held.to_lowercase() == required.to_lowercase()
        }
    };
    equal || (required.contains(WILDCARD_FAMILY) && held.contains(WILDCARD_FAMILY))
}

/// Outcome of matching one ingredient list
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Match {
    /// Claimed inventory slots, in requirement order
    pub matched: Vec<usize>,
    /// Requirements no slot could satisfy, in requirement order
    pub missing: Vec<String>,
}

impl Match {
    /// Every requirement found a slot
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
    }

    pub fn matched_count(&self) -> usize {
        self.matched.len()
    }
}

/// Greedy ingredient matcher
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Matcher {
    comparison: NameComparison,
}

impl Matcher {
    pub fn new(comparison: NameComparison) -> Self {
        Self { comparison }
    }

    pub fn comparison(&self) -> NameComparison {
        self.comparison
    }

    /// Match a required ingredient list against the inventory.
    ///
    /// Never mutates the inventory; it only reports which slots would be used.
    pub fn match_ingredients(&self, required: &[String], inventory: &Inventory) -> Match {
        let mut result = Match::default();
        for ingredient in required {
            let slot = inventory.iter().enumerate().position(|(i, held)| {
                !result.matched.contains(&i) && satisfies(held, ingredient, self.comparison)
            });
            match slot {
                Some(index) => result.matched.push(index),
                None => result.missing.push(ingredient.clone()),
            }
        }
        result
    }
}
