//! Combat resolution against time-limited bosses.
//!
//! # Architecture
//!
//! - **Pure Functions**: every operation takes a boss snapshot and returns a
//!   new one plus an explicit result payload
//! - **Two-phase damage**: hits accumulate during the day
//!   ([`add_damage`]); health only changes at the daily rollover
//!   ([`apply_daily_rollover`])
//! - **Injected environment**: clock and balance tables come in as oracles,
//!   and the crit roll is a caller-supplied argument
//!
//! # Core Functions
//!
//! - `add_damage`: full hit pipeline (type selection, scaling, crit,
//!   resistance cap, accumulation)
//! - `apply_daily_rollover`: commit accumulated damage, run recurring boss
//!   effects
//! - `is_active`: liveness check that expires bosses past their duration

pub mod boss;
pub mod damage;
pub mod rollover;

pub use boss::{BossEntity, BossError, BossId, BossStatus, DamageRecord, Effect};
pub use damage::{DamageKind, HitOutcome, PlayerCombatStats, add_damage, select_damage_kind};
pub use rollover::{RolloverOutcome, apply_daily_rollover, is_active};
