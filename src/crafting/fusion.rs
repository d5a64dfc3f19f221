//! Free-form fusion of two held items.
//!
//! Fusion ignores the catalog entirely. The result is a placeholder that no
//! recipe uses and that the matcher never accepts as an ingredient.

use crate::error::{FusionError, FusionResult};
use crate::run::Inventory;

/// Prefix that marks a fused item
pub const FUSED_PREFIX: &str = "Fused: ";

/// Maximum number of slots that can be selected for fusion
pub const SELECTION_CAP: usize = 2;

/// Name of the item produced by fusing `a` with `b`
pub fn fused_name(a: &str, b: &str) -> String {
    format!("{FUSED_PREFIX}{a} x {b}")
}

/// Whether an item came out of a fusion
pub fn is_fused(name: &str) -> bool {
    name.starts_with(FUSED_PREFIX)
}

/// Inventory slots picked for the next fusion
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FusionSelection {
    slots: Vec<usize>,
}

impl FusionSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.slots.len() >= SELECTION_CAP
    }

    pub fn contains(&self, index: usize) -> bool {
        self.slots.contains(&index)
    }

    /// Selected slots in selection order
    pub fn indices(&self) -> &[usize] {
        &self.slots
    }

    /// Select or deselect a slot. Returns whether it is selected afterwards.
    ///
    /// Selecting a third slot is refused.
    pub fn toggle(&mut self, index: usize) -> bool {
        if let Some(pos) = self.slots.iter().position(|&i| i == index) {
            self.slots.remove(pos);
            false
        } else if self.is_full() {
            false
        } else {
            self.slots.push(index);
            true
        }
    }

    pub fn clear(&mut self) {
        self.slots.clear();
    }

    /// Follow the selected items after `removed` slots left the inventory.
    ///
    /// Removed slots drop out of the selection; the rest shift down so they
    /// keep pointing at the same item.
    pub fn after_removal(&mut self, removed: &[usize]) {
        self.slots.retain(|i| !removed.contains(i));
        for slot in &mut self.slots {
            let shift = removed.iter().filter(|&&r| r < *slot).count();
            *slot -= shift;
        }
    }
}

/// A committed fusion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fusion {
    /// Inventory after the fusion
    pub inventory: Inventory,
    /// The synthetic item appended to the inventory
    pub product: String,
}

/// Fuse two selected slots into one inert item.
///
/// Both slots must be distinct, in range, and be exactly the two currently
/// selected. The sources are removed and the product appended at the end.
pub fn fuse(
    a: usize,
    b: usize,
    inventory: &Inventory,
    selection: &FusionSelection,
) -> FusionResult<Fusion> {
    if selection.len() != SELECTION_CAP {
        return Err(FusionError::SelectionCount(selection.len()));
    }
    if a == b {
        return Err(FusionError::SameSlot(a));
    }

    let len = inventory.len();
    let name_at = |index: usize| {
        inventory
            .get(index)
            .ok_or(FusionError::OutOfRange { index, len })
    };
    let first = name_at(a)?;
    let second = name_at(b)?;
    if let Some(index) = [a, b].into_iter().find(|&i| !selection.contains(i)) {
        return Err(FusionError::NotSelected(index));
    }
    let product = fused_name(first, second);

    let mut next = inventory.clone();
    next.remove_indices(&[a, b]);
    next.push(product.clone());

    Ok(Fusion {
        inventory: next,
        product,
    })
}
