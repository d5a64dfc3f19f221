//! Committing an evolution.
//!
//! Crafting re-validates against the inventory it is given rather than
//! trusting an earlier recommendation, since the run may have changed since.

use super::matcher::Matcher;
use crate::catalog::RecipeEntry;
use crate::error::{CraftError, CraftResult};
use crate::run::{Discovery, Inventory};

/// A committed craft
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Crafted {
    pub inventory: Inventory,
    pub discovery: Discovery,
    /// Slots consumed, as indices into the inventory before the craft
    pub consumed: Vec<usize>,
    /// Alternative that was used
    pub alternative: usize,
    /// The product was not in the discovery set before
    pub newly_discovered: bool,
}

/// Craft an evolution from the first fully satisfied alternative.
///
/// The inputs are never modified. On success the returned state has the
/// consumed slots removed in one pass and the product appended. On failure
/// the caller's state is untouched and the error carries what the first
/// alternative is still missing.
pub fn craft(
    entry: &RecipeEntry,
    inventory: &Inventory,
    discovery: &Discovery,
    matcher: &Matcher,
) -> CraftResult<Crafted> {
    let mut first_missing = None;

    for (alternative, ingredients) in entry.alternatives().iter().enumerate() {
        let m = matcher.match_ingredients(ingredients, inventory);
        if !m.is_complete() {
            first_missing.get_or_insert(m.missing);
            continue;
        }

        let mut next = inventory.clone();
        next.remove_indices(&m.matched);
        next.push(entry.name());

        let mut found = discovery.clone();
        let newly_discovered = found.insert(entry.name());

        return Ok(Crafted {
            inventory: next,
            discovery: found,
            consumed: m.matched,
            alternative,
            newly_discovered,
        });
    }

    Err(CraftError::MissingIngredients {
        name: entry.name().to_string(),
        missing: first_missing.unwrap_or_default(),
    })
}
