//! Host-facing orchestration of the rule set.
//!
//! The individual modules are independently usable, but a host app mostly
//! wants one call per user action. [`complete_task`] runs the full pipeline
//! for a task completion (experience → equipment stats → boss damage →
//! achievements → rewards), and [`daily_rollover`] gates the once-per-day
//! boss rollover behind a persisted date marker.
//!
//! The engine state is still a snapshot: the host loads it, calls in, and
//! persists what comes back. No global state, no I/O.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::achievement::{AchievementState, Priority, ProgressSignal, evaluate};
use crate::combat::{
    BossEntity, HitOutcome, PlayerCombatStats, add_damage, apply_daily_rollover, is_active,
};
use crate::env::{ClockOracle, TablesOracle};
use crate::equipment::{EquipmentItem, aggregate};
use crate::progression::{CharacterProgress, LevelUp, award_experience};

/// Lifetime counters the achievement signals are derived from.
///
/// The streak is maintained by the host (it owns the calendar logic for
/// missed days); the rest is updated by [`complete_task`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayerCounters {
    pub tasks_completed: i64,

    /// Current consecutive-day completion streak.
    pub streak_days: i64,

    /// Completed-task totals per priority.
    #[cfg_attr(feature = "serde", serde(default))]
    pub priority_totals: BTreeMap<Priority, i64>,
}

impl PlayerCounters {
    fn priority_total(&self, priority: Priority) -> i64 {
        self.priority_totals.get(&priority).copied().unwrap_or(0)
    }
}

/// The full engine-owned snapshot for one player.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EngineState {
    pub progress: CharacterProgress,

    pub boss: Option<BossEntity>,

    pub achievements: Vec<AchievementState>,

    pub counters: PlayerCounters,

    /// Currency balance; achievement coin rewards land here.
    #[cfg_attr(feature = "serde", serde(default))]
    pub coins: i64,

    /// Last date a rollover ran, the dedup marker for [`daily_rollover`].
    #[cfg_attr(feature = "serde", serde(default))]
    pub last_rollover: Option<NaiveDate>,
}

impl EngineState {
    /// Fresh state for a new player with a given achievement catalog.
    pub fn new_player(achievements: Vec<AchievementState>) -> Self {
        Self {
            progress: CharacterProgress::new_player(),
            boss: None,
            achievements,
            counters: PlayerCounters::default(),
            coins: 0,
            last_rollover: None,
        }
    }
}

/// One completed task, as reported by the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TaskCompletion {
    /// Experience the task grants.
    pub experience: i64,

    /// Raw damage the task deals to an active boss.
    pub damage: i64,

    pub priority: Priority,

    /// Local hour of completion (0–23), for time-of-day achievements.
    pub completed_hour: u32,
}

/// Everything that happened as a result of one task completion.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TaskCompletionOutcome {
    /// Updated state to persist.
    pub state: EngineState,

    /// Level-ups, in order (task experience first, then achievement
    /// rewards).
    pub level_ups: Vec<LevelUp>,

    /// The boss hit, when a boss was active.
    pub hit: Option<HitOutcome>,

    /// Achievements newly unlocked by this completion.
    pub unlocked: Vec<AchievementState>,
}

/// Signals produced by one task completion, already settled.
fn completion_signals(
    state: &EngineState,
    task: &TaskCompletion,
) -> Vec<ProgressSignal> {
    vec![
        ProgressSignal::TasksCompleted {
            total: state.counters.tasks_completed,
        },
        ProgressSignal::Streak {
            days: state.counters.streak_days,
        },
        ProgressSignal::Level {
            level: state.progress.level as i64,
        },
        ProgressSignal::PriorityCompleted {
            priority: task.priority,
            total: state.counters.priority_total(task.priority),
        },
        ProgressSignal::CompletionAt {
            hour: task.completed_hour,
        },
    ]
}

/// Run the full pipeline for one completed task.
///
/// Order matters and follows the engine's ordering contract: experience and
/// counters settle first, equipment aggregates next, the boss hit consumes
/// the fresh stats, and achievements are evaluated last against the settled
/// snapshot. Rewards from newly unlocked achievements are disbursed
/// immediately (experience through the award path, coins to the wallet).
///
/// `roll` is the percent roll in `[0, 100)` for the critical check; hosts
/// produce it with an [`crate::env::RngOracle`].
pub fn complete_task(
    state: &EngineState,
    task: &TaskCompletion,
    equipped: &[EquipmentItem],
    roll: u32,
    clock: &(impl ClockOracle + ?Sized),
    tables: &(impl TablesOracle + ?Sized),
) -> TaskCompletionOutcome {
    let mut state = state.clone();
    let mut level_ups = Vec::new();

    // 1. Experience and counters settle first.
    let (progress, level_up) = award_experience(&state.progress, task.experience);
    state.progress = progress;
    level_ups.extend(level_up);
    state.counters.tasks_completed += 1;
    *state
        .counters
        .priority_totals
        .entry(task.priority)
        .or_insert(0) += 1;

    // 2. Fresh equipment aggregate feeds the combat stats.
    let loadout = aggregate(equipped, tables);
    let stats = PlayerCombatStats::from_aggregate(&loadout, tables);

    // 3. Boss damage accumulates while a boss is active.
    let mut hit = None;
    if let Some(boss) = state.boss.take() {
        let (boss, active) = is_active(&boss, clock);
        if active {
            let outcome = add_damage(&boss, task.damage, &stats, roll, clock, tables);
            state.boss = Some(outcome.boss.clone());
            hit = Some(outcome);
        } else {
            state.boss = Some(boss);
        }
    }

    // 4. Achievements see the settled counters.
    let signals = completion_signals(&state, task);
    let mut unlocked = Vec::new();
    for achievement in state.achievements.iter_mut() {
        for signal in &signals {
            let outcome = evaluate(achievement, signal, clock);
            if !outcome.evaluated {
                continue;
            }
            *achievement = outcome.achievement;
            if outcome.just_unlocked {
                unlocked.push(achievement.clone());
            }
            break;
        }
    }

    // 5. Disburse rewards from fresh unlocks.
    for achievement in &unlocked {
        if achievement.reward.experience > 0 {
            let (progress, level_up) =
                award_experience(&state.progress, achievement.reward.experience);
            state.progress = progress;
            level_ups.extend(level_up);
        }
        state.coins += achievement.reward.coins;
    }

    TaskCompletionOutcome {
        state,
        level_ups,
        hit,
        unlocked,
    }
}

/// Revert a task completion that was undone by the user.
///
/// The experience award is reversed through the same clamped path (never a
/// level-down) and the counters step back. Boss damage already accumulated
/// and achievements already unlocked stay as they are; unlock is monotonic.
pub fn revert_task(state: &EngineState, task: &TaskCompletion) -> EngineState {
    let mut state = state.clone();
    let (progress, _) = award_experience(&state.progress, -task.experience);
    state.progress = progress;
    state.counters.tasks_completed = (state.counters.tasks_completed - 1).max(0);
    if let Some(total) = state.counters.priority_totals.get_mut(&task.priority) {
        *total = (*total - 1).max(0);
    }
    state
}

/// Run the daily rollover at most once per calendar day.
///
/// The persisted `last_rollover` marker gates repeated calls: on the second
/// call of a day the state comes back unchanged with no outcome. The expiry
/// check runs first, so a boss whose duration elapsed overnight expires
/// (reflected in the returned state) instead of rolling over.
pub fn daily_rollover(
    state: &EngineState,
    clock: &(impl ClockOracle + ?Sized),
) -> (EngineState, Option<crate::combat::RolloverOutcome>) {
    let today = clock.today();
    if state.last_rollover == Some(today) {
        return (state.clone(), None);
    }

    let mut state = state.clone();
    state.last_rollover = Some(today);

    let Some(boss) = state.boss.take() else {
        return (state, None);
    };

    let (boss, active) = is_active(&boss, clock);
    if !active {
        state.boss = Some(boss);
        return (state, None);
    }

    let outcome = apply_daily_rollover(&boss, clock);
    state.boss = Some(outcome.boss.clone());
    (state, Some(outcome))
}
