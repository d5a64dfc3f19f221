//! Recommendation ranking.
//!
//! Every evolution the player is not already holding is run through the
//! matcher, classified, and the satisfiable ones are ordered ready-first, then
//! new-discovery-first. No score is computed.

use serde::Serialize;

use super::matcher::{Match, Matcher};
use crate::catalog::{Catalog, RecipeEntry};
use crate::run::{Discovery, Inventory};

/// How close an evolution is to being craftable
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    /// Every ingredient is held
    Ready,
    /// Some but not all ingredients are held
    Potential,
    /// Nothing useful is held
    #[serde(rename = "none")]
    Unmet,
}

impl Status {
    /// Classify a single match
    pub fn of(m: &Match) -> Self {
        if m.is_complete() {
            Status::Ready
        } else if m.matched_count() > 0 {
            Status::Potential
        } else {
            Status::Unmet
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Status::Ready => "ready",
            Status::Potential => "potential",
            Status::Unmet => "none",
        }
    }
}

/// One ranked evolution
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Recommendation {
    pub entry: RecipeEntry,
    pub status: Status,
    /// Ingredients still to find; empty when ready
    pub missing: Vec<String>,
    /// The player has never unlocked this item
    pub is_new_discovery: bool,
    /// Which alternative the status came from
    pub alternative: usize,
}

impl Recommendation {
    pub fn name(&self) -> &str {
        self.entry.name()
    }

    pub fn is_ready(&self) -> bool {
        self.status == Status::Ready
    }

    /// Lexicographic priority, lower sorts first
    fn priority(&self) -> (bool, bool) {
        (self.status != Status::Ready, !self.is_new_discovery)
    }
}

/// Evaluate one evolution across all of its alternatives.
///
/// The first ready alternative wins outright. Otherwise the first potential
/// alternative is kept, even if a later one is missing fewer ingredients.
/// Returns `None` when no alternative matches anything.
pub fn evaluate(
    entry: &RecipeEntry,
    inventory: &Inventory,
    discovery: &Discovery,
    matcher: &Matcher,
) -> Option<Recommendation> {
    let mut best: Option<(Status, Vec<String>, usize)> = None;

    for (index, ingredients) in entry.alternatives().iter().enumerate() {
        let m = matcher.match_ingredients(ingredients, inventory);
        match Status::of(&m) {
            Status::Ready => {
                best = Some((Status::Ready, Vec::new(), index));
                break;
            }
            Status::Potential if best.is_none() => {
                best = Some((Status::Potential, m.missing, index));
            }
            _ => {}
        }
    }

    best.map(|(status, missing, alternative)| Recommendation {
        entry: entry.clone(),
        status,
        missing,
        is_new_discovery: !discovery.contains(entry.name()),
        alternative,
    })
}

/// Rank every evolution in the catalog against the current run
pub fn recommend(
    catalog: &Catalog,
    inventory: &Inventory,
    discovery: &Discovery,
    matcher: &Matcher,
) -> Vec<Recommendation> {
    let mut results: Vec<Recommendation> = catalog
        .entries()
        .iter()
        .filter(|entry| !inventory.contains(entry.name()))
        .filter_map(|entry| evaluate(entry, inventory, discovery, matcher))
        .collect();

    // Stable, so catalog order survives within each tier
    results.sort_by_key(Recommendation::priority);
    results
}
