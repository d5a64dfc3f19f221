use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::crafting::NameComparison;
use crate::persist::SAVE_FILE;

/// Top-level configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Catalog file to load (if None, the built-in presets are used)
    #[serde(default)]
    pub catalog: Option<PathBuf>,
    /// Where run state is saved
    #[serde(default = "default_save_file")]
    pub save_file: PathBuf,
    #[serde(default)]
    pub matching: MatchingConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MatchingConfig {
    /// Accept ingredients that differ only in letter case
    #[serde(default)]
    pub case_insensitive: bool,
}

impl MatchingConfig {
    pub fn comparison(&self) -> NameComparison {
        if self.case_insensitive {
            NameComparison::CaseInsensitive
        } else {
            NameComparison::Exact
        }
    }
}

fn default_save_file() -> PathBuf {
    PathBuf::from(SAVE_FILE)
}

impl Config {
    pub fn from_file(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog: None,
            save_file: default_save_file(),
            matching: MatchingConfig::default(),
        }
    }
}
