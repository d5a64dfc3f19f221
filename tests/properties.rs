//! Property-based tests for the crafting engine.
//!
//! Generates small random inventories and catalogs over a tiny item alphabet
//! (so matches are frequent) and checks the engine's invariants.

use ballpit::crafting::{self, FusionSelection, Matcher};
use ballpit::persist::MemoryStore;
use ballpit::{Catalog, Discovery, Inventory, RawEntry, RecipeEntry, Session};
use proptest::prelude::*;

// ===========================================================================
// Generators
// ===========================================================================

const ITEMS: &[&str] = &["A", "B", "C", "Red Laser", "Blue Laser", "Orb"];

fn arb_item() -> impl Strategy<Value = String> {
    proptest::sample::select(ITEMS).prop_map(str::to_string)
}

fn arb_inventory(max: usize) -> impl Strategy<Value = Inventory> {
    proptest::collection::vec(arb_item(), 0..=max).prop_map(Inventory::from)
}

fn arb_discovery() -> impl Strategy<Value = Discovery> {
    proptest::collection::vec(
        prop_oneof![arb_item(), Just("P0".to_string()), Just("P1".to_string())],
        0..4,
    )
    .prop_map(|names| names.into_iter().collect())
}

fn arb_alternatives() -> impl Strategy<Value = Vec<Vec<String>>> {
    proptest::collection::vec(proptest::collection::vec(arb_item(), 1..=3), 1..=3)
}

fn arb_entry(name: &'static str) -> impl Strategy<Value = RecipeEntry> {
    arb_alternatives().prop_map(move |alternatives| {
        let raw = alternatives
            .into_iter()
            .fold(RawEntry::ball(name), |raw, alt| raw.or_recipe(alt));
        RecipeEntry::try_from(raw).expect("generated entries are well formed")
    })
}

fn arb_catalog() -> impl Strategy<Value = Catalog> {
    proptest::collection::vec(arb_alternatives(), 1..=5).prop_map(|entries| {
        let mut catalog = Catalog::new();
        for (i, alternatives) in entries.into_iter().enumerate() {
            let raw = alternatives
                .into_iter()
                .fold(RawEntry::ball(format!("P{i}")), |raw, alt| raw.or_recipe(alt));
            catalog.register(raw).expect("generated entries are well formed");
        }
        catalog
    })
}

#[derive(Debug, Clone)]
enum Op {
    Add(String),
    Craft(usize),
}

fn arb_ops(max_ops: usize) -> impl Strategy<Value = Vec<Op>> {
    proptest::collection::vec(
        prop_oneof![
            arb_item().prop_map(Op::Add),
            (0..5usize).prop_map(Op::Craft),
        ],
        1..=max_ops,
    )
}

// ===========================================================================
// Properties
// ===========================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Craft succeeds exactly when some alternative is fully matched
    #[test]
    fn craft_succeeds_iff_some_alternative_complete(
        entry in arb_entry("X"),
        inventory in arb_inventory(6),
    ) {
        let matcher = Matcher::default();
        let satisfiable = entry
            .alternatives()
            .iter()
            .any(|alt| matcher.match_ingredients(alt, &inventory).is_complete());
        let result = crafting::craft(&entry, &inventory, &Discovery::new(), &matcher);
        prop_assert_eq!(result.is_ok(), satisfiable);
    }

    /// A successful craft removes exactly the matched slots and adds one
    #[test]
    fn craft_length_invariant(
        entry in arb_entry("X"),
        inventory in arb_inventory(6),
    ) {
        if let Ok(crafted) = crafting::craft(&entry, &inventory, &Discovery::new(), &Matcher::default()) {
            prop_assert_eq!(
                crafted.inventory.len(),
                inventory.len() - crafted.consumed.len() + 1
            );
            prop_assert_eq!(crafted.inventory.iter().last(), Some("X"));
            prop_assert!(crafted.discovery.contains("X"));
        }
    }

    /// Fusing any two distinct slots shrinks the run by one
    #[test]
    fn fusion_shrinks_by_one(
        inventory in arb_inventory(6).prop_filter("need two slots", |i| i.len() >= 2),
        picks in (0..6usize, 0..6usize),
    ) {
        let (a, b) = (picks.0 % inventory.len(), picks.1 % inventory.len());
        prop_assume!(a != b);

        let mut selection = FusionSelection::new();
        selection.toggle(a);
        selection.toggle(b);
        let fusion = crafting::fuse(a, b, &inventory, &selection).unwrap();
        prop_assert_eq!(fusion.inventory.len(), inventory.len() - 1);
    }

    /// Fused items never satisfy any requirement
    #[test]
    fn fused_items_are_inert(
        entry in arb_entry("X"),
        a in arb_item(),
        b in arb_item(),
    ) {
        let inventory = Inventory::from(vec![crafting::fused_name(&a, &b)]);
        let matcher = Matcher::default();
        for alt in entry.alternatives() {
            prop_assert_eq!(matcher.match_ingredients(alt, &inventory).matched_count(), 0);
        }
    }

    /// Ranking twice without changes gives the same ordered list
    #[test]
    fn ranking_is_idempotent(
        catalog in arb_catalog(),
        inventory in arb_inventory(6),
        discovery in arb_discovery(),
    ) {
        let matcher = Matcher::default();
        let first = crafting::recommend(&catalog, &inventory, &discovery, &matcher);
        let second = crafting::recommend(&catalog, &inventory, &discovery, &matcher);
        prop_assert_eq!(first, second);
    }

    /// Ranked output is sorted ready-first, then new-first, catalog order otherwise
    #[test]
    fn ranking_order(
        catalog in arb_catalog(),
        inventory in arb_inventory(6),
        discovery in arb_discovery(),
    ) {
        let recs = crafting::recommend(&catalog, &inventory, &discovery, &Matcher::default());
        let position = |name: &str| catalog.entries().iter().position(|e| e.name() == name);

        for pair in recs.windows(2) {
            let key = |r: &ballpit::Recommendation| (!r.is_ready(), !r.is_new_discovery);
            prop_assert!(key(&pair[0]) <= key(&pair[1]));
            if key(&pair[0]) == key(&pair[1]) {
                prop_assert!(position(pair[0].name()) < position(pair[1].name()));
            }
        }
        for rec in &recs {
            prop_assert!(!inventory.contains(rec.name()));
            prop_assert_eq!(rec.is_ready(), rec.missing.is_empty());
        }
    }

    /// Discovery never shrinks under add and craft
    #[test]
    fn discovery_is_monotonic(
        catalog in arb_catalog(),
        ops in arb_ops(20),
    ) {
        let mut session = Session::new(catalog, Matcher::default(), MemoryStore::new()).unwrap();
        let mut before = session.discovery().clone();

        for op in ops {
            match op {
                Op::Add(name) => {
                    session.add_item(&name);
                }
                Op::Craft(i) => {
                    let name = format!("P{i}");
                    let _ = session.craft(&name);
                }
            }
            let after = session.discovery().clone();
            prop_assert!(before.iter().all(|name| after.contains(name)));
            before = after;
        }
    }
}
