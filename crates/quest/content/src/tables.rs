//! Static balance tables.
//!
//! [`StaticTables`] is the standard [`TablesOracle`] implementation: the
//! shipped rarity scale and combat parameters, plus whatever equipment-set
//! definitions were registered (built-in starter sets by default, or a
//! catalog loaded from disk).

use std::collections::BTreeMap;

use quest_core::env::{CombatParams, TablesOracle};
use quest_core::equipment::{ItemId, Rarity, SetDefinition, SetId, StatKind};

/// In-memory balance tables.
#[derive(Clone, Debug)]
pub struct StaticTables {
    rarity_multipliers: BTreeMap<Rarity, f64>,
    combat: CombatParams,
    sets: BTreeMap<SetId, SetDefinition>,
}

impl StaticTables {
    /// Tables with the shipped balance values and no set definitions.
    pub fn empty() -> Self {
        let rarity_multipliers = BTreeMap::from([
            (Rarity::Common, 1.0),
            (Rarity::Rare, 1.2),
            (Rarity::Epic, 1.5),
            (Rarity::Legendary, 2.0),
        ]);
        Self {
            rarity_multipliers,
            combat: CombatParams::default(),
            sets: BTreeMap::new(),
        }
    }

    /// Tables with the shipped balance values and the starter set catalog.
    pub fn standard() -> Self {
        let mut tables = Self::empty();
        for set in starter_sets() {
            tables.register_set(set);
        }
        tables
    }

    /// Replace the combat parameters (builder pattern).
    #[must_use]
    pub fn with_combat(mut self, combat: CombatParams) -> Self {
        self.combat = combat;
        self
    }

    /// Register a set definition, replacing any previous one with the same
    /// id.
    pub fn register_set(&mut self, set: SetDefinition) {
        self.sets.insert(set.id.clone(), set);
    }

    /// Number of registered set definitions.
    pub fn set_count(&self) -> usize {
        self.sets.len()
    }
}

impl Default for StaticTables {
    fn default() -> Self {
        Self::standard()
    }
}

impl TablesOracle for StaticTables {
    fn rarity_multiplier(&self, rarity: Rarity) -> f64 {
        self.rarity_multipliers.get(&rarity).copied().unwrap_or(1.0)
    }

    fn set_definition(&self, set: &SetId) -> Option<&SetDefinition> {
        self.sets.get(set)
    }

    fn combat(&self) -> CombatParams {
        self.combat
    }
}

/// Built-in starter equipment sets.
///
/// Two small sets so fresh installs have set bonuses to chase without any
/// data files: a strength-flavored wolf set and an intelligence-flavored
/// scholar set.
pub fn starter_sets() -> Vec<SetDefinition> {
    let wolf = SetDefinition::new(
        "wolf",
        vec![
            ItemId::new("wolf-hood"),
            ItemId::new("wolf-pelt"),
            ItemId::new("wolf-greaves"),
            ItemId::new("wolf-claws"),
        ],
    )
    .with_bonus(StatKind::Strength, 8)
    .with_bonus(StatKind::CritChance, 5);

    let scholar = SetDefinition::new(
        "scholar",
        vec![
            ItemId::new("scholar-cowl"),
            ItemId::new("scholar-robe"),
            ItemId::new("scholar-slippers"),
            ItemId::new("scholar-quill"),
        ],
    )
    .with_bonus(StatKind::Intelligence, 10)
    .with_bonus(StatKind::MaxEnergy, 5);

    vec![wolf, scholar]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rarity_scale_is_monotone() {
        let tables = StaticTables::standard();
        let scale: Vec<f64> = [
            Rarity::Common,
            Rarity::Rare,
            Rarity::Epic,
            Rarity::Legendary,
        ]
        .into_iter()
        .map(|rarity| tables.rarity_multiplier(rarity))
        .collect();
        assert!(scale.windows(2).all(|pair| pair[0] <= pair[1]));
    }

    #[test]
    fn standard_tables_know_the_starter_sets() {
        let tables = StaticTables::standard();
        assert_eq!(tables.set_count(), 2);
        let wolf = tables.set_definition(&SetId::new("wolf")).unwrap();
        assert_eq!(wolf.total_pieces(), 4);
    }

    #[test]
    fn shipped_combat_params() {
        let combat = StaticTables::standard().combat();
        assert_eq!(combat.resistance_cap, 75);
        assert_eq!(combat.minimum_damage, 1);
    }
}
