//! Recipe catalog: evolutions plus the character and build roster.
//!
//! Ball and passive evolutions live in one logical list, in registration
//! order. Entries are validated on the way in, so everything downstream can
//! rely on every entry having at least one non-empty ingredient list.

mod entry;
mod presets;
mod roster;

pub use entry::{EvolutionKind, RawEntry, RecipeEntry};
pub use roster::{Character, CharacterDuo, MetaBuild};

use std::path::Path;

use anyhow::Context;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::error::CatalogError;

/// On-disk catalog layout
#[derive(Debug, Default, Deserialize)]
struct CatalogFile {
    #[serde(default, rename = "evolution")]
    evolutions: Vec<RawEntry>,
    #[serde(default, rename = "character")]
    characters: Vec<Character>,
    #[serde(default, rename = "duo")]
    duos: Vec<CharacterDuo>,
    #[serde(default, rename = "build")]
    builds: Vec<MetaBuild>,
}

/// Registry of every evolution and roster entry
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entries: Vec<RecipeEntry>,
    characters: Vec<Character>,
    duos: Vec<CharacterDuo>,
    builds: Vec<MetaBuild>,
}

impl Catalog {
    /// An empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in data set
    pub fn presets() -> Self {
        let mut catalog = Self::new();
        catalog.register_all(presets::ball_evolutions());
        catalog.register_all(presets::passive_evolutions());
        catalog.characters = presets::characters();
        catalog.duos = presets::duos();
        catalog.builds = presets::builds();
        catalog
    }

    /// Load a catalog from a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading catalog {}", path.display()))?;
        Self::from_toml_str(&content).with_context(|| format!("parsing catalog {}", path.display()))
    }

    /// Parse a catalog from TOML text. Malformed evolutions are skipped.
    pub fn from_toml_str(content: &str) -> anyhow::Result<Self> {
        let file: CatalogFile = toml::from_str(content)?;
        let mut catalog = Self::new();
        catalog.register_all(file.evolutions);
        catalog.characters = file.characters;
        catalog.duos = file.duos;
        catalog.builds = file.builds;
        Ok(catalog)
    }

    /// Validate and add an evolution
    pub fn register(&mut self, raw: RawEntry) -> Result<&RecipeEntry, CatalogError> {
        let entry = RecipeEntry::try_from(raw)?;
        if self.get(entry.name()).is_some() {
            return Err(CatalogError::Duplicate(entry.name().to_string()));
        }
        debug!("Registered {} evolution {}", entry.kind().display_name(), entry.name());
        self.entries.push(entry);
        Ok(&self.entries[self.entries.len() - 1])
    }

    /// Register many evolutions, skipping and returning the ones refused
    pub fn register_all(&mut self, raws: impl IntoIterator<Item = RawEntry>) -> Vec<CatalogError> {
        let mut rejected = Vec::new();
        for raw in raws {
            if let Err(err) = self.register(raw) {
                warn!("Skipping catalog entry: {}", err);
                rejected.push(err);
            }
        }
        rejected
    }

    /// All evolutions in registration order
    pub fn entries(&self) -> &[RecipeEntry] {
        &self.entries
    }

    /// Look up an evolution by product name
    pub fn get(&self, name: &str) -> Option<&RecipeEntry> {
        self.entries.iter().find(|e| e.name() == name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn characters(&self) -> &[Character] {
        &self.characters
    }

    pub fn character(&self, name: &str) -> Option<&Character> {
        self.characters.iter().find(|c| c.name == name)
    }

    pub fn duos(&self) -> &[CharacterDuo] {
        &self.duos
    }

    pub fn duo(&self, name: &str) -> Option<&CharacterDuo> {
        self.duos.iter().find(|d| d.name == name)
    }

    pub fn builds(&self) -> &[MetaBuild] {
        &self.builds
    }

    pub fn build(&self, name: &str) -> Option<&MetaBuild> {
        self.builds.iter().find(|b| b.name == name)
    }
}
