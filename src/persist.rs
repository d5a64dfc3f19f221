//! Saving and loading run state.
//!
//! The stored form is two plain name lists with no schema version. The session
//! loads once at startup and saves after every mutation.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::run::{Discovery, Inventory};

/// Default save location
pub const SAVE_FILE: &str = "ballpit.json";

/// Persisted state
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Current run inventory, in slot order
    #[serde(default)]
    pub run: Vec<String>,
    /// Discovered item names
    #[serde(default)]
    pub found: Vec<String>,
}

impl Snapshot {
    pub fn capture(inventory: &Inventory, discovery: &Discovery) -> Self {
        Self {
            run: inventory.as_slice().to_vec(),
            found: discovery.iter().map(str::to_string).collect(),
        }
    }

    pub fn into_state(self) -> (Inventory, Discovery) {
        (Inventory::from(self.run), self.found.into_iter().collect())
    }
}

/// Somewhere run state can be kept between sessions
pub trait RunStore {
    /// Previously saved state, or `None` on first start
    fn load(&self) -> Result<Option<Snapshot>>;

    fn save(&mut self, snapshot: &Snapshot) -> Result<()>;
}

/// JSON file on disk
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for JsonFileStore {
    fn default() -> Self {
        Self::new(SAVE_FILE)
    }
}

impl RunStore for JsonFileStore {
    fn load(&self) -> Result<Option<Snapshot>> {
        match fs::read_to_string(&self.path) {
            Ok(content) => {
                let snapshot = serde_json::from_str(&content)
                    .with_context(|| format!("parsing save {}", self.path.display()))?;
                Ok(Some(snapshot))
            }
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn save(&mut self, snapshot: &Snapshot) -> Result<()> {
        let serialized = serde_json::to_string_pretty(snapshot)?;
        fs::write(&self.path, serialized)
            .with_context(|| format!("writing save {}", self.path.display()))?;
        Ok(())
    }
}

/// In-memory store for tests and embedding
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    snapshot: Option<Snapshot>,
    saves: usize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing snapshot
    pub fn with_snapshot(snapshot: Snapshot) -> Self {
        Self {
            snapshot: Some(snapshot),
            saves: 0,
        }
    }

    pub fn snapshot(&self) -> Option<&Snapshot> {
        self.snapshot.as_ref()
    }

    /// How many times state was saved
    pub fn saves(&self) -> usize {
        self.saves
    }
}

impl RunStore for MemoryStore {
    fn load(&self) -> Result<Option<Snapshot>> {
        Ok(self.snapshot.clone())
    }

    fn save(&mut self, snapshot: &Snapshot) -> Result<()> {
        self.snapshot = Some(snapshot.clone());
        self.saves += 1;
        Ok(())
    }
}
