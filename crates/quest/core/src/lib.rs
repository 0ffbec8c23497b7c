//! Deterministic progression and combat rules for an RPG-flavored task app.
//!
//! `quest-core` defines the canonical rules (experience curve, equipment
//! bonuses, boss combat, achievements) and exposes pure APIs that hosts call
//! with loaded snapshots, persisting the snapshots that come back. The crate
//! performs no I/O; time, randomness, and balance tables are injected through
//! the oracles in [`env`].

pub mod achievement;
pub mod combat;
pub mod engine;
pub mod env;
pub mod equipment;
pub mod progression;

pub use achievement::{
    AchievementId, AchievementState, Condition, EvalOutcome, Priority, ProgressSignal, Reward,
    TimeWindow, evaluate,
};
pub use combat::{
    BossEntity, BossError, BossId, BossStatus, DamageKind, DamageRecord, Effect, HitOutcome,
    PlayerCombatStats, RolloverOutcome, add_damage, apply_daily_rollover, is_active,
    select_damage_kind,
};
pub use engine::{
    EngineState, PlayerCounters, TaskCompletion, TaskCompletionOutcome, complete_task,
    daily_rollover, revert_task,
};
pub use env::{
    ClockOracle, CombatParams, FixedClock, PcgRng, RngOracle, SystemClock, TablesOracle,
    compute_seed,
};
pub use equipment::{
    EquipmentAggregate, EquipmentItem, ItemId, Rarity, SetDefinition, SetId, SetProgress,
    SlotKind, StatKind, aggregate,
};
pub use progression::{
    CharacterProgress, LevelBonus, LevelUp, ResourceMeter, award_experience, clamp_resource,
    level_progress_percent, required_experience_for_level,
};
