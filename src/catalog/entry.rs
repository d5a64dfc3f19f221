//! Evolution entries.

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;

/// Which family an evolution belongs to
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EvolutionKind {
    #[default]
    Ball,
    Passive,
}

impl EvolutionKind {
    pub fn display_name(&self) -> &'static str {
        match self {
            EvolutionKind::Ball => "ball",
            EvolutionKind::Passive => "passive",
        }
    }
}

/// An evolution exactly as written in catalog data, before validation
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawEntry {
    pub name: String,
    #[serde(default)]
    pub kind: EvolutionKind,
    /// Human-readable recipe summary, e.g. "Burn + Iron"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logic: Option<String>,
    /// A single fixed recipe
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ingredients: Option<Vec<String>>,
    /// Alternative recipes, any one of which produces the item
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recipes: Option<Vec<Vec<String>>>,
}

impl RawEntry {
    /// Start a ball evolution
    pub fn ball(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Start a passive evolution
    pub fn passive(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: EvolutionKind::Passive,
            ..Self::default()
        }
    }

    /// Set the single fixed recipe
    pub fn with_ingredients<I, S>(mut self, ingredients: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ingredients = Some(ingredients.into_iter().map(Into::into).collect());
        self
    }

    /// Add one alternative recipe
    pub fn or_recipe<I, S>(mut self, ingredients: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.recipes
            .get_or_insert_with(Vec::new)
            .push(ingredients.into_iter().map(Into::into).collect());
        self
    }

    /// Attach a recipe summary
    pub fn with_logic(mut self, logic: impl Into<String>) -> Self {
        self.logic = Some(logic.into());
        self
    }
}

/// A validated evolution: a product name and one or more ingredient lists
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecipeEntry {
    name: String,
    kind: EvolutionKind,
    logic: Option<String>,
    alternatives: Vec<Vec<String>>,
}

impl RecipeEntry {
    /// The product this entry creates
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> EvolutionKind {
        self.kind
    }

    pub fn logic(&self) -> Option<&str> {
        self.logic.as_deref()
    }

    /// Ingredient lists in declared order. Never empty, and no list is empty.
    pub fn alternatives(&self) -> &[Vec<String>] {
        &self.alternatives
    }
}

impl TryFrom<RawEntry> for RecipeEntry {
    type Error = CatalogError;

    fn try_from(raw: RawEntry) -> Result<Self, Self::Error> {
        let name = raw.name.trim().to_string();
        if name.is_empty() {
            return Err(CatalogError::EmptyName);
        }

        let alternatives = match (raw.ingredients, raw.recipes) {
            (None, None) => return Err(CatalogError::NoRecipes(name)),
            (Some(_), Some(_)) => return Err(CatalogError::AmbiguousRecipes(name)),
            (Some(ingredients), None) => vec![ingredients],
            (None, Some(recipes)) if recipes.is_empty() => {
                return Err(CatalogError::EmptyRecipeList(name));
            }
            (None, Some(recipes)) => recipes,
        };

        for (alternative, list) in alternatives.iter().enumerate() {
            if list.is_empty() {
                return Err(CatalogError::EmptyAlternative { name, alternative });
            }
            if list.iter().any(|ing| ing.trim().is_empty()) {
                return Err(CatalogError::EmptyIngredient { name, alternative });
            }
        }

        Ok(Self {
            name,
            kind: raw.kind,
            logic: raw.logic,
            alternatives,
        })
    }
}
