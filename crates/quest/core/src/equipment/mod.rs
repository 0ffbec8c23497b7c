//! Equipment: items, sets, and bonus aggregation.
//!
//! The aggregate produced here feeds the combat resolver's player stats.
//! Hosts must re-aggregate whenever the equipped-item set changes; a stale
//! aggregate silently produces wrong damage multipliers, not an error.

pub mod aggregate;
pub mod item;
pub mod sets;

pub use aggregate::{EquipmentAggregate, aggregate};
pub use item::{EquipmentItem, ItemId, Rarity, SetId, SlotKind, StatKind};
pub use sets::{SetDefinition, SetProgress};
