//! Characters, recommended character pairs and meta builds.

use serde::{Deserialize, Serialize};

/// A playable character
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Character {
    pub name: String,
    /// Ball the character starts every run with
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ball: Option<String>,
}

impl Character {
    pub fn new(name: impl Into<String>, ball: Option<&str>) -> Self {
        Self {
            name: name.into(),
            ball: ball.map(str::to_string),
        }
    }
}

/// Two characters that play well together
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterDuo {
    pub name: String,
    #[serde(default)]
    pub tag: String,
    #[serde(default)]
    pub desc: String,
    pub chars: [String; 2],
}

/// A known strong item set
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetaBuild {
    pub name: String,
    #[serde(default)]
    pub desc: String,
    /// Items the build is built around
    pub core: Vec<String>,
    /// Nice-to-have items
    #[serde(default)]
    pub support: Vec<String>,
}

impl MetaBuild {
    /// Core then support items, in declared order
    pub fn items(&self) -> impl Iterator<Item = &str> {
        self.core.iter().chain(&self.support).map(String::as_str)
    }
}
