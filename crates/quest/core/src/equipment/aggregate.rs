//! Equipment bonus aggregation.
//!
//! Pure function over the currently-equipped item list: rarity-scaled item
//! stats plus tiered set-completion bonuses. Safe to recompute on every
//! render or turn; inputs are never mutated.

use std::collections::BTreeMap;

use crate::env::TablesOracle;

use super::item::{EquipmentItem, SetId, StatKind};
use super::sets::SetProgress;

/// Aggregated stat totals and set progress for one equipped loadout.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EquipmentAggregate {
    /// Summed stat bonuses (rarity-scaled item stats + applied set tiers).
    pub stats: BTreeMap<StatKind, i64>,

    /// Per-set collection progress, keyed by set id.
    pub sets: BTreeMap<SetId, SetProgress>,
}

impl EquipmentAggregate {
    /// Value of one stat, 0 when absent.
    pub fn stat(&self, stat: StatKind) -> i64 {
        self.stats.get(&stat).copied().unwrap_or(0)
    }
}

/// Aggregate stat bonuses from a set of equipped items.
///
/// # Algorithm
///
/// 1. Each item contributes `floor(value × rarity_multiplier)` per stat.
/// 2. Items are grouped by set id; sets without a known definition are
///    ignored.
/// 3. Tier policy on `collected / total_pieces`:
///    - `≥ 1.0`: the full set bonus is added once;
///    - `[0.5, 1.0)`: `floor(bonus / 2)` per stat;
///    - `< 0.5`: no bonus, but the set is still reported.
pub fn aggregate(
    items: &[EquipmentItem],
    tables: &(impl TablesOracle + ?Sized),
) -> EquipmentAggregate {
    let mut stats: BTreeMap<StatKind, i64> = BTreeMap::new();

    for item in items {
        let multiplier = tables.rarity_multiplier(item.rarity);
        for (&stat, &value) in &item.stats {
            let scaled = (value as f64 * multiplier).floor() as i64;
            *stats.entry(stat).or_insert(0) += scaled;
        }
    }

    let mut collected: BTreeMap<SetId, usize> = BTreeMap::new();
    for item in items {
        if let Some(set) = &item.set {
            *collected.entry(set.clone()).or_insert(0) += 1;
        }
    }

    let mut sets = BTreeMap::new();
    for (set_id, count) in collected {
        let Some(definition) = tables.set_definition(&set_id) else {
            continue;
        };
        let total = definition.total_pieces();
        if total == 0 {
            continue;
        }

        let half_or_more = count * 2 >= total;
        let complete = count >= total;
        if complete {
            for (&stat, &value) in &definition.bonus {
                *stats.entry(stat).or_insert(0) += value;
            }
        } else if half_or_more {
            for (&stat, &value) in &definition.bonus {
                *stats.entry(stat).or_insert(0) += value.div_euclid(2);
            }
        }

        sets.insert(
            set_id.clone(),
            SetProgress {
                set: set_id,
                collected: count,
                total,
                bonus_applied: half_or_more,
            },
        );
    }

    EquipmentAggregate { stats, sets }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::equipment::item::{ItemId, Rarity, SlotKind};
    use crate::equipment::sets::SetDefinition;

    struct TestTables {
        sets: Vec<SetDefinition>,
    }

    impl TestTables {
        fn with_wolf_set() -> Self {
            let pieces = vec![
                ItemId::new("wolf-hood"),
                ItemId::new("wolf-pelt"),
                ItemId::new("wolf-greaves"),
                ItemId::new("wolf-claws"),
            ];
            let definition = SetDefinition::new("wolf", pieces)
                .with_bonus(StatKind::Strength, 9)
                .with_bonus(StatKind::CritChance, 5);
            Self {
                sets: vec![definition],
            }
        }
    }

    impl TablesOracle for TestTables {
        fn rarity_multiplier(&self, rarity: Rarity) -> f64 {
            match rarity {
                Rarity::Common => 1.0,
                Rarity::Rare => 1.2,
                Rarity::Epic => 1.5,
                Rarity::Legendary => 2.0,
            }
        }

        fn set_definition(&self, set: &SetId) -> Option<&SetDefinition> {
            self.sets.iter().find(|definition| definition.id == *set)
        }
    }

    fn wolf_piece(id: &str, slot: SlotKind) -> EquipmentItem {
        EquipmentItem::new(id, slot, Rarity::Common)
            .with_stat(StatKind::Strength, 3)
            .with_set("wolf")
    }

    #[test]
    fn rarity_scales_item_stats() {
        let tables = TestTables::with_wolf_set();
        let sword = EquipmentItem::new("ember-blade", SlotKind::Weapon, Rarity::Epic)
            .with_stat(StatKind::Strength, 7);
        let aggregate = aggregate(&[sword], &tables);
        // floor(7 × 1.5) = 10
        assert_eq!(aggregate.stat(StatKind::Strength), 10);
    }

    #[test]
    fn full_set_grants_bonus_exactly_once() {
        let tables = TestTables::with_wolf_set();
        let items = vec![
            wolf_piece("wolf-hood", SlotKind::Head),
            wolf_piece("wolf-pelt", SlotKind::Body),
            wolf_piece("wolf-greaves", SlotKind::Legs),
            wolf_piece("wolf-claws", SlotKind::Weapon),
        ];
        let result = aggregate(&items, &tables);
        // 4 pieces × 3 STR + 9 full-set STR
        assert_eq!(result.stat(StatKind::Strength), 21);
        assert_eq!(result.stat(StatKind::CritChance), 5);
        let progress = &result.sets[&SetId::new("wolf")];
        assert!(progress.bonus_applied);
        assert_eq!(progress.collected, 4);
    }

    #[test]
    fn half_set_grants_floored_half_bonus() {
        let tables = TestTables::with_wolf_set();
        let items = vec![
            wolf_piece("wolf-hood", SlotKind::Head),
            wolf_piece("wolf-pelt", SlotKind::Body),
        ];
        let result = aggregate(&items, &tables);
        // 2 × 3 STR + floor(9 / 2)
        assert_eq!(result.stat(StatKind::Strength), 10);
        // floor(5 / 2)
        assert_eq!(result.stat(StatKind::CritChance), 2);
        assert!(result.sets[&SetId::new("wolf")].bonus_applied);
    }

    #[test]
    fn under_half_set_reports_without_bonus() {
        let tables = TestTables::with_wolf_set();
        let items = vec![wolf_piece("wolf-hood", SlotKind::Head)];
        let result = aggregate(&items, &tables);
        assert_eq!(result.stat(StatKind::Strength), 3);
        assert_eq!(result.stat(StatKind::CritChance), 0);
        let progress = &result.sets[&SetId::new("wolf")];
        assert!(!progress.bonus_applied);
        assert_eq!(progress.collected, 1);
        assert_eq!(progress.total, 4);
    }

    #[test]
    fn unknown_set_membership_is_ignored() {
        let tables = TestTables::with_wolf_set();
        let items = vec![
            EquipmentItem::new("odd-ring", SlotKind::Head, Rarity::Common).with_set("phantom"),
        ];
        let result = aggregate(&items, &tables);
        assert!(result.sets.is_empty());
    }

    #[test]
    fn inputs_are_untouched() {
        let tables = TestTables::with_wolf_set();
        let items = vec![wolf_piece("wolf-hood", SlotKind::Head)];
        let before = items.clone();
        let _ = aggregate(&items, &tables);
        assert_eq!(items, before);
    }
}
