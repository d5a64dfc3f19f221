//! Built-in catalog data, used when no catalog file is configured.

use super::entry::RawEntry;
use super::roster::{Character, CharacterDuo, MetaBuild};

/// Ball evolutions
pub fn ball_evolutions() -> Vec<RawEntry> {
    vec![
        // Two base balls
        RawEntry::ball("Bomb")
            .with_ingredients(["Burn", "Iron"])
            .with_logic("Burn + Iron"),
        RawEntry::ball("Frozen Flame")
            .with_ingredients(["Burn", "Freeze"])
            .with_logic("Burn + Freeze"),
        RawEntry::ball("Magma")
            .with_ingredients(["Burn", "Earthquake"])
            .with_logic("Burn + Earthquake"),
        RawEntry::ball("Sun")
            .with_ingredients(["Burn", "Light"])
            .with_logic("Burn + Light"),
        RawEntry::ball("Sandstorm")
            .with_ingredients(["Earthquake", "Wind"])
            .with_logic("Earthquake + Wind"),
        RawEntry::ball("Storm")
            .with_ingredients(["Lightning", "Wind"])
            .with_logic("Lightning + Wind"),
        RawEntry::ball("Holy Laser")
            .with_ingredients(["Laser (Horizontal)", "Laser (Vertical)"])
            .with_logic("Any two lasers"),
        // Several ways in
        RawEntry::ball("Blizzard")
            .or_recipe(["Freeze", "Wind"])
            .or_recipe(["Freeze", "Lightning"])
            .with_logic("Freeze + Wind or Freeze + Lightning"),
        RawEntry::ball("Virus")
            .or_recipe(["Poison", "Ghost"])
            .or_recipe(["Poison", "Cell"])
            .with_logic("Poison + Ghost or Poison + Cell"),
        // Evolved ingredients
        RawEntry::ball("Black Hole")
            .with_ingredients(["Sun", "Dark"])
            .with_logic("Sun + Dark"),
        RawEntry::ball("Nosferatu")
            .with_ingredients(["Vampire Lord", "Mosquito King", "Spider Queen"])
            .with_logic("Vampire Lord + Mosquito King + Spider Queen"),
    ]
}

/// Passive item evolutions
pub fn passive_evolutions() -> Vec<RawEntry> {
    vec![
        RawEntry::passive("Wings of the Anointed")
            .with_ingredients(["Angelic Feather", "Holy Relic"])
            .with_logic("Angelic Feather + Holy Relic"),
        RawEntry::passive("Soul Reaver")
            .with_ingredients(["Vampiric Sword", "Ghostly Corset"])
            .with_logic("Vampiric Sword + Ghostly Corset"),
        RawEntry::passive("Cornucopia")
            .or_recipe(["Baby Rattle", "Golden Bull"])
            .or_recipe(["Baby Rattle", "Lucky Clover"])
            .with_logic("Baby Rattle + Golden Bull or Lucky Clover"),
    ]
}

pub fn characters() -> Vec<Character> {
    vec![
        Character::new("The Warrior", None),
        Character::new("The Itchy Finger", Some("Burn")),
        Character::new("The Repentant", Some("Freeze")),
        Character::new("The Shade", Some("Dark")),
        Character::new("The Embedded", Some("Poison")),
        Character::new("The Flagellant", Some("Bleed")),
        Character::new("The Empty Nester", Some("Ghost")),
    ]
}

pub fn duos() -> Vec<CharacterDuo> {
    vec![
        CharacterDuo {
            name: "Fire and Ice".to_string(),
            tag: "Elemental".to_string(),
            desc: "Opens with both halves of Frozen Flame.".to_string(),
            chars: ["The Itchy Finger".to_string(), "The Repentant".to_string()],
        },
        CharacterDuo {
            name: "Plague House".to_string(),
            tag: "Damage over time".to_string(),
            desc: "Poison and Ghost on turn one, Virus soon after.".to_string(),
            chars: ["The Embedded".to_string(), "The Empty Nester".to_string()],
        },
    ]
}

pub fn builds() -> Vec<MetaBuild> {
    vec![
        MetaBuild {
            name: "Demolition".to_string(),
            desc: "Stack explosions and let the board clear itself.".to_string(),
            core: vec!["Burn".to_string(), "Iron".to_string()],
            support: vec!["Earthquake".to_string(), "Wind".to_string()],
        },
        MetaBuild {
            name: "Eclipse".to_string(),
            desc: "Rush Sun, then collapse it into a Black Hole.".to_string(),
            core: vec!["Burn".to_string(), "Light".to_string(), "Dark".to_string()],
            support: vec!["Holy Relic".to_string()],
        },
    ]
}
