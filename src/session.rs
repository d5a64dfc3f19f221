//! The application context that owns run state.
//!
//! A `Session` holds the catalog, the run inventory, the discovery set, the
//! transient fusion and character selections, and a persistence collaborator.
//! Every mutation is a single state transition followed by a save; derived
//! recommendations are recomputed lazily and cached on the
//! `(inventory, discovery)` snapshot.

use anyhow::Result;
use tracing::{debug, info, warn};

use crate::catalog::Catalog;
use crate::config::Config;
use crate::crafting::{self, FusionSelection, Matcher, Recommendation};
use crate::error::{CraftError, CraftResult, FusionError, FusionResult};
use crate::persist::{JsonFileStore, RunStore, Snapshot};
use crate::run::{Discovery, Inventory};

/// How many characters can be picked at once
pub const CHARACTER_CAP: usize = 2;

/// What a successful craft did
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CraftOutcome {
    pub product: String,
    /// Items used up, in ingredient order
    pub consumed: Vec<String>,
    /// Alternative recipe that was used
    pub alternative: usize,
    pub newly_discovered: bool,
}

#[derive(Debug, Clone)]
struct RankingCache {
    inventory: Inventory,
    discovery: Discovery,
    ranked: Vec<Recommendation>,
}

/// Run state plus everything needed to act on it
pub struct Session<S: RunStore> {
    catalog: Catalog,
    matcher: Matcher,
    inventory: Inventory,
    discovery: Discovery,
    selection: FusionSelection,
    characters: Vec<String>,
    store: S,
    cache: Option<RankingCache>,
}

impl Session<JsonFileStore> {
    /// Open a session as described by the configuration
    pub fn from_config(config: &Config) -> Result<Self> {
        let catalog = match &config.catalog {
            Some(path) => Catalog::from_file(path)?,
            None => Catalog::presets(),
        };
        let matcher = Matcher::new(config.matching.comparison());
        Self::new(catalog, matcher, JsonFileStore::new(&config.save_file))
    }
}

impl<S: RunStore> Session<S> {
    /// Create a session, loading any saved state from the store
    pub fn new(catalog: Catalog, matcher: Matcher, store: S) -> Result<Self> {
        let (inventory, discovery) = match store.load()? {
            Some(snapshot) => {
                debug!(
                    "Loaded {} run items and {} discoveries",
                    snapshot.run.len(),
                    snapshot.found.len()
                );
                snapshot.into_state()
            }
            None => (Inventory::new(), Discovery::new()),
        };

        Ok(Self {
            catalog,
            matcher,
            inventory,
            discovery,
            selection: FusionSelection::new(),
            characters: Vec::new(),
            store,
            cache: None,
        })
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    pub fn discovery(&self) -> &Discovery {
        &self.discovery
    }

    pub fn fusion_selection(&self) -> &FusionSelection {
        &self.selection
    }

    /// Selected character names, oldest first
    pub fn selected_characters(&self) -> &[String] {
        &self.characters
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(&self.inventory, &self.discovery)
    }

    // ==================== Recommendations ====================

    /// Ranked evolutions for the current run
    pub fn recommendations(&mut self) -> &[Recommendation] {
        let fresh = matches!(
            &self.cache,
            Some(c) if c.inventory == self.inventory && c.discovery == self.discovery
        );
        if !fresh {
            let ranked = crafting::recommend(
                &self.catalog,
                &self.inventory,
                &self.discovery,
                &self.matcher,
            );
            debug!("Ranked {} recommendations", ranked.len());
            self.cache = Some(RankingCache {
                inventory: self.inventory.clone(),
                discovery: self.discovery.clone(),
                ranked,
            });
        }
        match &self.cache {
            Some(cache) => cache.ranked.as_slice(),
            None => &[],
        }
    }

    // ==================== Crafting ====================

    /// Craft an evolution by product name
    pub fn craft(&mut self, name: &str) -> CraftResult<CraftOutcome> {
        let entry = self
            .catalog
            .get(name)
            .ok_or_else(|| CraftError::UnknownEntry(name.to_string()))?;

        let crafted = match crafting::craft(entry, &self.inventory, &self.discovery, &self.matcher) {
            Ok(crafted) => crafted,
            Err(err) => {
                debug!("Craft refused: {}", err);
                return Err(err);
            }
        };

        let consumed = crafted
            .consumed
            .iter()
            .filter_map(|&i| self.inventory.get(i).map(str::to_string))
            .collect::<Vec<_>>();
        let outcome = CraftOutcome {
            product: entry.name().to_string(),
            consumed,
            alternative: crafted.alternative,
            newly_discovered: crafted.newly_discovered,
        };

        self.selection.after_removal(&crafted.consumed);
        self.inventory = crafted.inventory;
        self.discovery = crafted.discovery;
        info!(
            "Crafted {} from {}",
            outcome.product,
            outcome.consumed.join(" + ")
        );
        self.commit();
        Ok(outcome)
    }

    /// Select or deselect a slot for fusion. Returns whether it is selected.
    pub fn toggle_fusion(&mut self, index: usize) -> bool {
        if index >= self.inventory.len() {
            return false;
        }
        self.selection.toggle(index)
    }

    /// Fuse the two selected slots. Returns the fused item's name.
    pub fn fuse(&mut self, a: usize, b: usize) -> FusionResult<String> {
        let fusion = match crafting::fuse(a, b, &self.inventory, &self.selection) {
            Ok(fusion) => fusion,
            Err(err) => {
                debug!("Fusion refused: {}", err);
                return Err(err);
            }
        };

        self.inventory = fusion.inventory;
        self.selection.clear();
        info!("Fused slots {} and {} into {}", a, b, fusion.product);
        self.commit();
        Ok(fusion.product)
    }

    /// Select both slots and fuse them in one step
    pub fn fuse_slots(&mut self, a: usize, b: usize) -> FusionResult<String> {
        if a == b {
            return Err(FusionError::SameSlot(a));
        }
        let len = self.inventory.len();
        if let Some(index) = [a, b].into_iter().find(|&i| i >= len) {
            return Err(FusionError::OutOfRange { index, len });
        }
        self.selection.clear();
        self.toggle_fusion(a);
        self.toggle_fusion(b);
        self.fuse(a, b)
    }

    // ==================== Run mutation ====================

    /// Add an item to the run, discovering it if needed.
    ///
    /// Empty names are ignored. Returns whether the item was added.
    pub fn add_item(&mut self, name: &str) -> bool {
        let name = name.trim();
        if name.is_empty() {
            return false;
        }
        self.push_item(name);
        self.commit();
        true
    }

    /// Remove one slot from the run
    pub fn remove_at(&mut self, index: usize) -> Option<String> {
        let removed = self.inventory.remove(index)?;
        self.selection.after_removal(&[index]);
        debug!("Removed {} from slot {}", removed, index);
        self.commit();
        Some(removed)
    }

    /// Flip an item's discovery flag. Returns whether it is now discovered.
    pub fn toggle_discovery(&mut self, name: &str) -> bool {
        let discovered = self.discovery.toggle(name);
        debug!("{} discovered: {}", name, discovered);
        self.commit();
        discovered
    }

    /// Clear the run. Discoveries are kept.
    pub fn reset_run(&mut self) {
        self.inventory.clear();
        self.selection.clear();
        info!("Run reset");
        self.commit();
    }

    /// Pick or unpick a character, adding its starting ball to the run.
    ///
    /// Picking a third character drops the oldest pick. Returns false for an
    /// unknown character.
    pub fn select_character(&mut self, name: &str) -> bool {
        if self.catalog.character(name).is_none() {
            return false;
        }

        if let Some(pos) = self.characters.iter().position(|c| c == name) {
            self.characters.remove(pos);
        } else {
            if self.characters.len() >= CHARACTER_CAP {
                self.characters.remove(0);
            }
            self.characters.push(name.to_string());
        }

        self.add_starting_balls();
        self.commit();
        true
    }

    /// Pick both characters of a duo. Returns false for an unknown duo.
    pub fn select_duo(&mut self, name: &str) -> bool {
        let Some(duo) = self.catalog.duo(name) else {
            return false;
        };
        self.characters = duo
            .chars
            .iter()
            .filter(|c| self.catalog.character(c).is_some())
            .cloned()
            .collect();

        self.add_starting_balls();
        self.commit();
        true
    }

    /// Replace the run with a meta build plus the selected characters' balls.
    ///
    /// Returns false for an unknown build.
    pub fn load_build(&mut self, name: &str) -> bool {
        let Some(build) = self.catalog.build(name) else {
            return false;
        };

        let mut items: Vec<String> = Vec::new();
        for item in self.starting_balls().chain(build.items().map(str::to_string)) {
            if !items.contains(&item) {
                items.push(item);
            }
        }

        for item in &items {
            self.discovery.insert(item.as_str());
        }
        self.inventory = Inventory::from(items);
        self.selection.clear();
        info!("Loaded build {} ({} items)", name, self.inventory.len());
        self.commit();
        true
    }

    fn push_item(&mut self, name: &str) {
        self.inventory.push(name);
        if self.discovery.insert(name) {
            debug!("Discovered {}", name);
        }
    }

    fn starting_balls(&self) -> impl Iterator<Item = String> + '_ {
        self.characters
            .iter()
            .filter_map(|c| self.catalog.character(c))
            .filter_map(|c| c.ball.clone())
    }

    fn add_starting_balls(&mut self) {
        let balls: Vec<String> = self.starting_balls().collect();
        for ball in balls {
            if !self.inventory.contains(&ball) {
                self.push_item(&ball);
            }
        }
    }

    /// Persist current state. A failed save leaves the mutation in place.
    fn commit(&mut self) {
        let snapshot = self.snapshot();
        if let Err(err) = self.store.save(&snapshot) {
            warn!("Failed to save run state: {:#}", err);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::RawEntry;
    use crate::crafting::Status;
    use crate::persist::MemoryStore;

    fn session(items: &[&str]) -> Session<MemoryStore> {
        let store = MemoryStore::with_snapshot(Snapshot {
            run: items.iter().map(|s| s.to_string()).collect(),
            found: Vec::new(),
        });
        Session::new(Catalog::presets(), Matcher::default(), store).unwrap()
    }

    #[test]
    fn test_loads_from_store() {
        let session = session(&["Burn", "Iron"]);
        assert_eq!(session.inventory().as_slice(), ["Burn", "Iron"]);
        assert!(session.discovery().is_empty());
    }

    #[test]
    fn test_add_item_discovers() {
        let mut session = session(&[]);
        assert!(session.add_item("Burn"));
        assert!(session.add_item("Burn"));
        assert!(!session.add_item("   "));
        assert_eq!(session.inventory().len(), 2);
        assert!(session.discovery().contains("Burn"));
        assert_eq!(session.store().saves(), 2);
    }

    #[test]
    fn test_craft_updates_state_and_saves() {
        let mut session = session(&["Burn", "Wind", "Iron"]);
        let outcome = session.craft("Bomb").unwrap();

        assert_eq!(outcome.consumed, ["Burn", "Iron"]);
        assert!(outcome.newly_discovered);
        assert_eq!(session.inventory().as_slice(), ["Wind", "Bomb"]);
        assert!(session.discovery().contains("Bomb"));

        let saved = session.store().snapshot().unwrap();
        assert_eq!(saved.run, ["Wind", "Bomb"]);
    }

    #[test]
    fn test_failed_craft_changes_nothing() {
        let mut session = session(&["Burn"]);
        let before = session.snapshot();

        assert!(matches!(
            session.craft("Bomb"),
            Err(CraftError::MissingIngredients { .. })
        ));
        assert_eq!(
            session.craft("Nope"),
            Err(CraftError::UnknownEntry("Nope".to_string()))
        );
        assert_eq!(session.snapshot(), before);
        assert_eq!(session.store().saves(), 0);
    }

    #[test]
    fn test_craft_revalidates_stale_recommendation() {
        let mut session = session(&["Burn", "Iron"]);
        assert_eq!(session.recommendations()[0].status, Status::Ready);

        session.remove_at(1);
        assert!(session.craft("Bomb").is_err());
    }

    #[test]
    fn test_recommendations_follow_mutations() {
        let mut session = session(&["Burn"]);
        let bomb = |s: &mut Session<MemoryStore>| {
            s.recommendations()
                .iter()
                .find(|r| r.name() == "Bomb")
                .map(|r| r.status)
        };

        assert_eq!(bomb(&mut session), Some(Status::Potential));
        session.add_item("Iron");
        assert_eq!(bomb(&mut session), Some(Status::Ready));
        session.craft("Bomb").unwrap();
        assert_eq!(bomb(&mut session), None);
    }

    #[test]
    fn test_new_discovery_flag_tracks_toggle() {
        let mut session = session(&["Burn", "Iron"]);
        assert!(session.recommendations()[0].is_new_discovery);

        assert!(session.toggle_discovery("Bomb"));
        let bomb = session
            .recommendations()
            .iter()
            .find(|r| r.name() == "Bomb")
            .cloned()
            .unwrap();
        assert!(!bomb.is_new_discovery);

        assert!(!session.toggle_discovery("Bomb"));
        assert!(!session.discovery().contains("Bomb"));
    }

    #[test]
    fn test_fusion_through_selection() {
        let mut session = session(&["Fire Ball", "Ice Ball", "Burn"]);

        assert_eq!(session.fuse(0, 1), Err(FusionError::SelectionCount(0)));
        assert!(session.toggle_fusion(0));
        assert!(session.toggle_fusion(1));
        assert!(!session.toggle_fusion(2));
        assert!(!session.toggle_fusion(9));

        let product = session.fuse(0, 1).unwrap();
        assert_eq!(product, "Fused: Fire Ball x Ice Ball");
        assert_eq!(
            session.inventory().as_slice(),
            ["Burn", "Fused: Fire Ball x Ice Ball"]
        );
        assert!(session.fusion_selection().is_empty());
        assert!(!session.discovery().contains(&product));
    }

    #[test]
    fn test_remove_clears_selected_slot() {
        let mut session = session(&["A", "B", "C"]);
        session.toggle_fusion(0);
        session.toggle_fusion(2);

        assert_eq!(session.remove_at(0).as_deref(), Some("A"));
        assert_eq!(session.fusion_selection().indices(), [1]);
        assert_eq!(session.fuse(1, 0), Err(FusionError::SelectionCount(1)));
        assert!(session.remove_at(7).is_none());
    }

    #[test]
    fn test_reset_keeps_discoveries() {
        let mut session = session(&[]);
        session.add_item("Burn");
        session.toggle_fusion(0);
        session.reset_run();

        assert!(session.inventory().is_empty());
        assert!(session.fusion_selection().is_empty());
        assert!(session.discovery().contains("Burn"));
    }

    #[test]
    fn test_character_selection_rolls() {
        let mut session = session(&[]);
        assert!(session.select_character("The Itchy Finger"));
        assert!(session.select_character("The Repentant"));
        assert!(session.select_character("The Shade"));
        assert!(!session.select_character("Nobody"));

        assert_eq!(session.selected_characters(), ["The Repentant", "The Shade"]);
        // Balls stay even when their character is dropped
        assert_eq!(session.inventory().as_slice(), ["Burn", "Freeze", "Dark"]);
        assert!(session.discovery().contains("Dark"));

        // Deselecting does not add anything
        assert!(session.select_character("The Shade"));
        assert_eq!(session.selected_characters(), ["The Repentant"]);
        assert_eq!(session.inventory().len(), 3);
    }

    #[test]
    fn test_starting_ball_not_duplicated() {
        let mut session = session(&["Burn"]);
        session.select_character("The Itchy Finger");
        assert_eq!(session.inventory().as_slice(), ["Burn"]);
    }

    #[test]
    fn test_duo_and_build() {
        let mut session = session(&["Wind", "Wind"]);
        assert!(session.select_duo("Fire and Ice"));
        assert_eq!(
            session.selected_characters(),
            ["The Itchy Finger", "The Repentant"]
        );
        assert_eq!(session.inventory().as_slice(), ["Wind", "Wind", "Burn", "Freeze"]);

        assert!(session.load_build("Demolition"));
        assert_eq!(
            session.inventory().as_slice(),
            ["Burn", "Freeze", "Iron", "Earthquake", "Wind"]
        );
        assert!(session.discovery().contains("Earthquake"));
        assert!(!session.load_build("Nope"));
        assert!(!session.select_duo("Nope"));
    }

    #[test]
    fn test_held_product_is_not_recommended() {
        let mut catalog = Catalog::new();
        catalog
            .register(RawEntry::ball("X").with_ingredients(["A"]))
            .unwrap();
        let store = MemoryStore::with_snapshot(Snapshot {
            run: vec!["A".to_string(), "X".to_string()],
            found: Vec::new(),
        });
        let mut session = Session::new(catalog, Matcher::default(), store).unwrap();
        assert!(session.recommendations().is_empty());
    }
}
