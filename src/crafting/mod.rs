//! Crafting engine: matching, ranking, crafting and fusion.

pub mod craft;
pub mod fusion;
pub mod matcher;
pub mod ranker;

pub use craft::{craft, Crafted};
pub use fusion::{fuse, fused_name, is_fused, Fusion, FusionSelection};
pub use matcher::{Match, Matcher, NameComparison};
pub use ranker::{recommend, Recommendation, Status};
