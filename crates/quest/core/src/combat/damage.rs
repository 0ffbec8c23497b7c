//! Per-hit damage resolution.
//!
//! [`add_damage`] converts one completed task into pending boss damage. It
//! never touches `current_health`; damage accumulates until the daily
//! rollover commits it. The function is pure: the caller supplies the
//! percent roll (see [`crate::env::RngOracle`]) and the clock oracle, and
//! receives the updated boss plus a full breakdown of the hit.

use crate::env::{ClockOracle, TablesOracle};
use crate::equipment::{EquipmentAggregate, StatKind};

use super::boss::{BossEntity, BossStatus};

/// Damage type selected from the player's stat spread.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum DamageKind {
    /// Strength-scaled damage; checked against physical resistance.
    Physical,
    /// Intelligence-scaled damage; checked against magic resistance.
    Magical,
    /// Unscaled damage (no offensive stats); checked against physical
    /// resistance.
    Normal,
}

/// Player stats consumed by the combat resolver.
///
/// Derived from the equipment aggregate; hosts must rebuild this whenever
/// the equipped-item set changes.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayerCombatStats {
    pub strength: i64,
    pub intelligence: i64,
    /// Generic attack stat; drives scaling when neither strength nor
    /// intelligence applies.
    pub attack: i64,
    /// Critical hit chance in percent; 0 disables crits.
    pub crit_chance: i64,
    /// Critical damage multiplier.
    pub crit_damage: f64,
}

impl PlayerCombatStats {
    /// Stats for a player with nothing equipped.
    pub fn unarmed(tables: &(impl TablesOracle + ?Sized)) -> Self {
        Self {
            strength: 0,
            intelligence: 0,
            attack: 0,
            crit_chance: 0,
            crit_damage: tables.combat().default_crit_multiplier,
        }
    }

    /// Derive combat stats from an equipment aggregate.
    ///
    /// The crit-damage stat is a percentage bonus on top of the default
    /// multiplier: +50 turns 1.5× into 2.0×.
    pub fn from_aggregate(
        aggregate: &EquipmentAggregate,
        tables: &(impl TablesOracle + ?Sized),
    ) -> Self {
        let params = tables.combat();
        Self {
            strength: aggregate.stat(StatKind::Strength),
            intelligence: aggregate.stat(StatKind::Intelligence),
            attack: aggregate.stat(StatKind::Attack),
            crit_chance: aggregate.stat(StatKind::CritChance),
            crit_damage: params.default_crit_multiplier
                + aggregate.stat(StatKind::CritDamage) as f64 / 100.0,
        }
    }
}

/// Result of one hit against a boss.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HitOutcome {
    /// Updated boss snapshot (unchanged when the hit was not applied).
    pub boss: BossEntity,

    /// Whether the hit was applied. False for non-active bosses.
    pub applied: bool,

    /// Final damage added to the boss accumulator (0 when not applied).
    pub damage: i64,

    pub kind: DamageKind,

    pub is_critical: bool,

    /// Combined resistance percentage after capping.
    pub total_resistance: i64,

    /// Damage after stat scaling, before crit and resistance. Returned so
    /// hosts can explain the hit without the engine logging anything.
    pub scaled_damage: i64,
}

impl HitOutcome {
    fn skipped(boss: BossEntity) -> Self {
        Self {
            boss,
            applied: false,
            damage: 0,
            kind: DamageKind::Normal,
            is_critical: false,
            total_resistance: 0,
            scaled_damage: 0,
        }
    }
}

/// Select the damage type from the player's stat spread.
///
/// Physical wins ties: strength ≥ intelligence with either stat positive is
/// a physical hit; otherwise positive intelligence is magical; statless
/// players deal normal damage.
pub fn select_damage_kind(stats: &PlayerCombatStats) -> DamageKind {
    if stats.strength >= stats.intelligence && (stats.strength > 0 || stats.intelligence > 0) {
        DamageKind::Physical
    } else if stats.intelligence > 0 {
        DamageKind::Magical
    } else {
        DamageKind::Normal
    }
}

/// Resolve one hit and accumulate it on the boss.
///
/// # Pipeline
///
/// 1. Damage-type selection from the stat spread.
/// 2. Stat scaling: `floor(damage × (1 + stat / divisor))`; the attack stat
///    drives the normal path.
/// 3. Critical check: `effective = max(0, crit_chance − critical_resistance)`
///    against `roll` in `[0, 100)`; a crit multiplies by the crit-damage
///    multiplier.
/// 4. Resistance: damage-reduction effects + time-accumulated resistance +
///    type resistance, capped at the configured total (75 by default), then
///    `floor(damage × (1 − total / 100))`.
/// 5. Floor at the minimum damage (1): a boss never fully no-sells a hit.
/// 6. Record in today's history bucket and add to `accumulated_damage`.
///
/// Hitting a defeated or expired boss is not an error; the outcome reports
/// `applied = false` with the boss unchanged.
pub fn add_damage(
    boss: &BossEntity,
    raw_damage: i64,
    stats: &PlayerCombatStats,
    roll: u32,
    clock: &(impl ClockOracle + ?Sized),
    tables: &(impl TablesOracle + ?Sized),
) -> HitOutcome {
    if boss.status != BossStatus::Active {
        return HitOutcome::skipped(boss.clone());
    }

    let params = tables.combat();
    let raw_damage = raw_damage.max(0);

    // 1–2. Type selection and stat scaling.
    let kind = select_damage_kind(stats);
    let scaling_stat = match kind {
        DamageKind::Physical => stats.strength,
        DamageKind::Magical => stats.intelligence,
        DamageKind::Normal => stats.attack,
    };
    let multiplier = 1.0 + scaling_stat.max(0) as f64 / params.scaling_divisor as f64;
    let scaled_damage = (raw_damage as f64 * multiplier).floor() as i64;

    // 3. Critical check.
    let effective_crit = (stats.crit_chance - boss.critical_resistance()).max(0);
    let is_critical = stats.crit_chance > 0 && (roll as i64) < effective_crit;
    let after_crit = if is_critical {
        (scaled_damage as f64 * stats.crit_damage).floor() as i64
    } else {
        scaled_damage
    };

    // 4. Resistance, capped on the combined total.
    let type_resistance = match kind {
        DamageKind::Magical => boss.magic_resistance,
        DamageKind::Physical | DamageKind::Normal => boss.physical_resistance,
    };
    let total_resistance = (boss.damage_reduction() + boss.current_resistance + type_resistance)
        .clamp(0, params.resistance_cap);
    let resisted = (after_crit * (100 - total_resistance)).div_euclid(100);

    // 5. Damage floor.
    let damage = resisted.max(params.minimum_damage);

    // 6. Accumulate and record.
    let mut boss = boss.clone();
    boss.accumulated_damage += damage;
    let record = boss.record_for(clock.today());
    record.damage += damage;
    match kind {
        DamageKind::Physical => record.physical_damage += damage,
        DamageKind::Magical => record.magical_damage += damage,
        DamageKind::Normal => {}
    }
    if is_critical {
        record.critical_hits += 1;
    }

    HitOutcome {
        boss,
        applied: true,
        damage,
        kind,
        is_critical,
        total_resistance,
        scaled_damage,
    }
}
