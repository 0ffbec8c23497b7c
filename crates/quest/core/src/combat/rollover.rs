//! Daily rollover: committing accumulated damage and boss recurring effects.
//!
//! The rollover is the once-per-calendar-day transition that subtracts the
//! day's accumulated damage from boss health and then runs the boss's
//! recurring effects. The function itself is NOT idempotent against repeated
//! calls on the same day; callers must gate it behind a persisted
//! last-rollover-date marker (the engine facade does exactly that).

use crate::env::ClockOracle;

use super::boss::{BossEntity, BossStatus, Effect};

/// Result of one daily rollover.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RolloverOutcome {
    /// Updated boss snapshot.
    pub boss: BossEntity,

    /// Accumulated damage committed to health this rollover.
    pub damage_applied: i64,

    /// Whether this rollover defeated the boss.
    pub defeated: bool,

    /// Health restored by `HealthRegen` after the damage was applied.
    pub health_regenerated: i64,

    /// Resistance gained from `IncreasingResistance`.
    pub resistance_gained: i64,
}

impl RolloverOutcome {
    fn unchanged(boss: BossEntity) -> Self {
        Self {
            boss,
            damage_applied: 0,
            defeated: false,
            health_regenerated: 0,
            resistance_gained: 0,
        }
    }
}

/// Commit accumulated damage and run boss recurring effects.
///
/// # Steps
///
/// 1. Zero accumulated damage (or a non-active boss) is a no-op.
/// 2. `current_health = max(0, current_health − accumulated)`, accumulator
///    reset to 0.
/// 3. Health reaching 0 defeats the boss (`completed_at` stamped); no
///    further effects apply.
/// 4. Otherwise `HealthRegen` restores `floor(max_health × percent / 100)`
///    capped at maximum, and `IncreasingResistance` grows
///    `current_resistance` by its increment up to its cap.
pub fn apply_daily_rollover(
    boss: &BossEntity,
    clock: &(impl ClockOracle + ?Sized),
) -> RolloverOutcome {
    if boss.status != BossStatus::Active || boss.accumulated_damage == 0 {
        return RolloverOutcome::unchanged(boss.clone());
    }

    let mut boss = boss.clone();
    let damage_applied = boss.accumulated_damage;
    boss.current_health = (boss.current_health - damage_applied).max(0);
    boss.accumulated_damage = 0;

    if boss.current_health == 0 {
        boss.status = BossStatus::Defeated;
        boss.completed_at = Some(clock.now());
        return RolloverOutcome {
            boss,
            damage_applied,
            defeated: true,
            health_regenerated: 0,
            resistance_gained: 0,
        };
    }

    let mut health_regenerated = 0;
    let mut resistance_gained = 0;
    for effect in boss.effects.clone() {
        match effect {
            Effect::HealthRegen { percent } => {
                let restored = (boss.max_health * percent.max(0)).div_euclid(100);
                let before = boss.current_health;
                boss.current_health = (boss.current_health + restored).min(boss.max_health);
                health_regenerated += boss.current_health - before;
            }
            Effect::IncreasingResistance { max, increment, .. } => {
                let before = boss.current_resistance;
                boss.current_resistance = (boss.current_resistance + increment).min(max);
                resistance_gained += boss.current_resistance - before;
            }
            Effect::DamageReduction { .. } | Effect::CriticalResistance { .. } => {}
        }
    }

    RolloverOutcome {
        boss,
        damage_applied,
        defeated: false,
        health_regenerated,
        resistance_gained,
    }
}

/// Check whether a boss is still active, expiring it when its duration has
/// elapsed.
///
/// Side-effecting check: when the duration has run out, the returned boss
/// carries status `Expired` and must be persisted by the caller.
pub fn is_active(boss: &BossEntity, clock: &(impl ClockOracle + ?Sized)) -> (BossEntity, bool) {
    if boss.status != BossStatus::Active {
        return (boss.clone(), false);
    }
    if let Some(expires_after) = boss.expires_after()
        && clock.today() > expires_after
    {
        let mut expired = boss.clone();
        expired.status = BossStatus::Expired;
        return (expired, false);
    }
    (boss.clone(), true)
}
