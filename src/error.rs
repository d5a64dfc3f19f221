//! Error types for catalog registration, crafting and fusion.
//!
//! None of these are fatal. Each one means "this particular action did not
//! apply" and the caller's state is left exactly as it was.

use thiserror::Error;

/// Why a catalog entry was refused at registration time.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// Entry has an empty (or whitespace-only) name
    #[error("catalog entry has an empty name")]
    EmptyName,
    /// Neither `ingredients` nor `recipes` was given
    #[error("entry '{0}' has neither ingredients nor recipes")]
    NoRecipes(String),
    /// Both `ingredients` and `recipes` were given
    #[error("entry '{0}' declares both ingredients and recipes")]
    AmbiguousRecipes(String),
    /// `recipes` is present but holds no alternatives
    #[error("entry '{0}' has an empty recipe list")]
    EmptyRecipeList(String),
    /// One of the alternatives has no ingredients
    #[error("entry '{name}' alternative #{alternative} has no ingredients")]
    EmptyAlternative { name: String, alternative: usize },
    /// An ingredient name is empty
    #[error("entry '{name}' alternative #{alternative} contains an empty ingredient")]
    EmptyIngredient { name: String, alternative: usize },
    /// Another entry with the same product name is already registered
    #[error("duplicate catalog entry '{0}'")]
    Duplicate(String),
}

/// Why a craft was refused.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CraftError {
    /// No catalog entry produces this item
    #[error("no evolution named '{0}'")]
    UnknownEntry(String),
    /// No alternative is fully satisfied by the current inventory
    #[error("missing ingredients for '{name}': {}", .missing.join(", "))]
    MissingIngredients {
        name: String,
        /// Leftover requirements of the first alternative
        missing: Vec<String>,
    },
}

/// Why a fusion was refused.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FusionError {
    /// Exactly two slots must be selected
    #[error("fusion needs exactly 2 selected slots, found {0}")]
    SelectionCount(usize),
    /// Both indices point at the same slot
    #[error("cannot fuse slot {0} with itself")]
    SameSlot(usize),
    /// Index does not exist in the inventory
    #[error("slot {index} is out of range (inventory holds {len})")]
    OutOfRange { index: usize, len: usize },
    /// Index is valid but was not selected for fusion
    #[error("slot {0} is not selected for fusion")]
    NotSelected(usize),
}

/// Result type for crafting operations.
pub type CraftResult<T> = Result<T, CraftError>;

/// Result type for fusion operations.
pub type FusionResult<T> = Result<T, FusionError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_ingredients_message() {
        let err = CraftError::MissingIngredients {
            name: "Bomb".to_string(),
            missing: vec!["Burn".to_string(), "Iron".to_string()],
        };
        assert_eq!(err.to_string(), "missing ingredients for 'Bomb': Burn, Iron");
    }

    #[test]
    fn test_fusion_error_message() {
        let err = FusionError::OutOfRange { index: 4, len: 2 };
        assert_eq!(err.to_string(), "slot 4 is out of range (inventory holds 2)");
    }
}
