//! Crafting recommendation and fusion engine for Ball x Pit runs.
//!
//! Given the items held in the current run and a catalog of evolutions, the
//! engine ranks which evolutions are craftable or close, commits crafts, and
//! fuses arbitrary pairs of held items into inert placeholders.

pub mod catalog;
pub mod config;
pub mod crafting;
pub mod error;
pub mod persist;
pub mod run;
pub mod session;

pub use catalog::{Catalog, RawEntry, RecipeEntry};
pub use config::Config;
pub use crafting::{Matcher, NameComparison, Recommendation, Status};
pub use error::{CatalogError, CraftError, FusionError};
pub use persist::{JsonFileStore, MemoryStore, RunStore, Snapshot};
pub use run::{Discovery, Inventory};
pub use session::{CraftOutcome, Session};
