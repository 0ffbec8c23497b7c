//! Static content and data loaders for the quest engine.
//!
//! This crate houses the tunable data the rules consume and provides JSON
//! loaders for catalog files:
//! - Balance tables (rarity multipliers, combat parameters, set definitions)
//! - Achievement catalog (built-in defaults plus file-based catalogs)
//! - Boss templates and summoning
//!
//! Content is consumed through the `quest-core` oracles and never appears in
//! engine state. All loaders use `quest-core` types directly with serde for
//! JSON deserialization.

pub mod bosses;
pub mod catalog;
pub mod loaders;
pub mod tables;

pub use bosses::{BossTemplate, starter_bosses};
pub use catalog::default_achievements;
pub use loaders::{AchievementLoader, BossLoader, SetLoader};
pub use tables::{StaticTables, starter_sets};
