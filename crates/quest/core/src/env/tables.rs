//! Oracle providing balance tables and static configuration.
//!
//! Rarity multipliers, equipment-set definitions, and combat balance
//! parameters are data, not rules: they are versioned independently of the
//! engine and injected through [`TablesOracle`]. The `quest-content` crate
//! provides the standard implementation backed by shipped catalogs.

use crate::equipment::{Rarity, SetDefinition, SetId};

/// Oracle providing balance tables for stat aggregation and combat.
///
/// This oracle defines tunable numbers (rarity scale, set rewards, combat
/// parameters). It does NOT define entity data such as boss templates.
pub trait TablesOracle: Send + Sync {
    /// Stat multiplier for an item rarity.
    ///
    /// Implementations must be monotone: a higher rarity never yields a
    /// smaller multiplier.
    fn rarity_multiplier(&self, rarity: Rarity) -> f64;

    /// Look up the definition of a named equipment set.
    fn set_definition(&self, set: &SetId) -> Option<&SetDefinition>;

    /// Combat balance parameters.
    fn combat(&self) -> CombatParams {
        CombatParams::default()
    }
}

/// Balance parameters for damage resolution.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CombatParams {
    /// Maximum combined resistance percentage (damage reduction cap).
    pub resistance_cap: i64,

    /// Damage floor; a boss can never fully no-sell a hit.
    pub minimum_damage: i64,

    /// Crit damage multiplier used when the player has no crit-damage stat.
    pub default_crit_multiplier: f64,

    /// Divisor for stat scaling: `multiplier = 1 + stat / divisor`.
    pub scaling_divisor: i64,
}

impl CombatParams {
    pub const fn new(
        resistance_cap: i64,
        minimum_damage: i64,
        default_crit_multiplier: f64,
        scaling_divisor: i64,
    ) -> Self {
        Self {
            resistance_cap,
            minimum_damage,
            default_crit_multiplier,
            scaling_divisor,
        }
    }
}

impl Default for CombatParams {
    fn default() -> Self {
        Self::new(75, 1, 1.5, 200)
    }
}
