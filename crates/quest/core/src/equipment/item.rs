//! Equipment item definitions.
//!
//! Items are immutable once defined; whether an item is currently equipped
//! is owned by the host's inventory, not by the item. All vocabularies are
//! closed enums so new slots, rarities, or stats force exhaustive handling
//! at compile time instead of failing string comparisons at runtime.

use std::collections::BTreeMap;
use std::fmt;

use strum::{Display, EnumIter};

/// Identifier of an equipment item.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ItemId(pub String);

impl ItemId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifier of an equipment set.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct SetId(pub String);

impl SetId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl fmt::Display for SetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Equipment slot an item occupies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumIter)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case")]
pub enum SlotKind {
    Head,
    Body,
    Legs,
    Footwear,
    Weapon,
}

/// Item rarity tier.
///
/// Rarity scales an item's stat bonuses during aggregation; the multiplier
/// table lives in the tables oracle and must be monotone in this ordering.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Display, EnumIter)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case")]
pub enum Rarity {
    #[default]
    Common,
    Rare,
    Epic,
    Legendary,
}

/// Stats an item (or set bonus) can grant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Display, EnumIter)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case")]
pub enum StatKind {
    Strength,
    Intelligence,
    Attack,
    /// Critical hit chance, in percent.
    CritChance,
    /// Bonus to the critical damage multiplier, in percent.
    CritDamage,
    Defense,
    MaxHealth,
    MaxEnergy,
}

/// An equipment item definition.
///
/// Persisted item data is loosely typed JSON, so missing fields take
/// defensive defaults: absent stats grant nothing and an absent rarity is
/// `common`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EquipmentItem {
    pub id: ItemId,

    pub slot: SlotKind,

    #[cfg_attr(feature = "serde", serde(default))]
    pub rarity: Rarity,

    /// Stat bonuses granted while equipped, before rarity scaling.
    #[cfg_attr(feature = "serde", serde(default))]
    pub stats: BTreeMap<StatKind, i64>,

    /// Set this item belongs to, if any.
    #[cfg_attr(feature = "serde", serde(default))]
    pub set: Option<SetId>,
}

impl EquipmentItem {
    /// Create an item with no stats and no set membership.
    pub fn new(id: impl Into<String>, slot: SlotKind, rarity: Rarity) -> Self {
        Self {
            id: ItemId::new(id),
            slot,
            rarity,
            stats: BTreeMap::new(),
            set: None,
        }
    }

    /// Add a stat bonus (builder pattern).
    #[must_use]
    pub fn with_stat(mut self, stat: StatKind, value: i64) -> Self {
        self.stats.insert(stat, value);
        self
    }

    /// Assign set membership (builder pattern).
    #[must_use]
    pub fn with_set(mut self, set: impl Into<String>) -> Self {
        self.set = Some(SetId::new(set));
        self
    }
}
