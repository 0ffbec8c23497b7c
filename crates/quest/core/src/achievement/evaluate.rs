//! Achievement evaluation.
//!
//! One pure function pairs a stored achievement with a progress signal,
//! updates progress, and decides unlock eligibility. Unlock is monotonic and
//! happens exactly once; re-evaluating an unlocked achievement is a no-op.
//!
//! Callers must evaluate against an already-settled progression snapshot
//! (after the triggering event's experience and level updates committed),
//! or progress is computed from stale values.

use crate::env::ClockOracle;

use super::condition::{Condition, ProgressSignal};
use super::state::AchievementState;

/// Result of evaluating one achievement against one signal.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EvalOutcome {
    /// Updated achievement snapshot.
    pub achievement: AchievementState,

    /// True exactly once, on the evaluation that crossed the target.
    pub just_unlocked: bool,

    /// False when the signal does not match the condition family; the state
    /// is unchanged and the host should simply skip this achievement.
    pub evaluated: bool,
}

/// Derive the new progress value from a condition/signal pair.
///
/// Counter-style conditions store the reported running total; the
/// time-of-day condition is event-style and increments by exactly 1 per
/// qualifying completion. `None` means the signal belongs to a different
/// condition family.
fn derive_progress(
    condition: &Condition,
    signal: &ProgressSignal,
    previous: i64,
) -> Option<i64> {
    match (condition, signal) {
        (Condition::TaskCompletedCount { .. }, ProgressSignal::TasksCompleted { total }) => {
            Some(*total)
        }
        (Condition::StreakDays { .. }, ProgressSignal::Streak { days }) => Some(*days),
        (Condition::ReachLevel { .. }, ProgressSignal::Level { level }) => Some(*level),
        (
            Condition::PriorityCount { priority, .. },
            ProgressSignal::PriorityCompleted {
                priority: reported, ..
            },
        ) if priority != reported => Some(previous),
        (Condition::PriorityCount { .. }, ProgressSignal::PriorityCompleted { total, .. }) => {
            Some(*total)
        }
        (Condition::TimeOfDayCount { window, .. }, ProgressSignal::CompletionAt { hour }) => {
            if window.contains(*hour) {
                Some(previous + 1)
            } else {
                Some(previous)
            }
        }
        (Condition::WeeklyEfficiency { .. }, ProgressSignal::WeeklyEfficiency { percent }) => {
            Some(*percent)
        }
        _ => None,
    }
}

/// Evaluate an achievement against a progress signal.
///
/// - Already-unlocked achievements come back unchanged with
///   `just_unlocked = false` (idempotent).
/// - A signal from the wrong condition family comes back unchanged with
///   `evaluated = false`; never an error, since achievement data is
///   config-controlled and hosts should degrade gracefully.
/// - Reaching the target sets `unlocked = true` and stamps `unlocked_at`
///   from the clock; reward disbursement is left to the caller.
pub fn evaluate(
    achievement: &AchievementState,
    signal: &ProgressSignal,
    clock: &(impl ClockOracle + ?Sized),
) -> EvalOutcome {
    if achievement.unlocked {
        return EvalOutcome {
            achievement: achievement.clone(),
            just_unlocked: false,
            evaluated: true,
        };
    }

    let Some(progress) = derive_progress(&achievement.condition, signal, achievement.progress)
    else {
        return EvalOutcome {
            achievement: achievement.clone(),
            just_unlocked: false,
            evaluated: false,
        };
    };

    let mut achievement = achievement.clone();
    achievement.progress = progress;

    let just_unlocked = progress >= achievement.target();
    if just_unlocked {
        achievement.unlocked = true;
        achievement.unlocked_at = Some(clock.now());
    }

    EvalOutcome {
        achievement,
        just_unlocked,
        evaluated: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::achievement::condition::{Priority, TimeWindow};
    use crate::achievement::state::Reward;
    use crate::env::FixedClock;

    fn clock() -> FixedClock {
        FixedClock::from_ymd(2025, 6, 1).unwrap()
    }

    fn task_count_achievement(target: i64) -> AchievementState {
        AchievementState::locked(
            "half-century",
            Condition::TaskCompletedCount { target },
            Reward::new(100, 25),
        )
    }

    #[test]
    fn unlocks_exactly_once_across_signal_sequence() {
        let achievement = task_count_achievement(50);

        let first = evaluate(
            &achievement,
            &ProgressSignal::TasksCompleted { total: 10 },
            &clock(),
        );
        assert!(!first.just_unlocked);
        assert_eq!(first.achievement.progress, 10);

        let second = evaluate(
            &first.achievement,
            &ProgressSignal::TasksCompleted { total: 30 },
            &clock(),
        );
        assert!(!second.just_unlocked);

        let third = evaluate(
            &second.achievement,
            &ProgressSignal::TasksCompleted { total: 50 },
            &clock(),
        );
        assert!(third.just_unlocked);
        assert!(third.achievement.unlocked);
        assert_eq!(third.achievement.unlocked_at, Some(clock().now()));
    }

    #[test]
    fn post_unlock_evaluation_is_idempotent() {
        let achievement = task_count_achievement(10);
        let unlocked = evaluate(
            &achievement,
            &ProgressSignal::TasksCompleted { total: 10 },
            &clock(),
        );
        assert!(unlocked.just_unlocked);

        let again = evaluate(
            &unlocked.achievement,
            &ProgressSignal::TasksCompleted { total: 9999 },
            &clock(),
        );
        assert!(!again.just_unlocked);
        assert!(again.evaluated);
        assert_eq!(again.achievement, unlocked.achievement);
    }

    #[test]
    fn mismatched_signal_family_is_flagged_not_fatal() {
        let achievement = task_count_achievement(50);
        let outcome = evaluate(&achievement, &ProgressSignal::Streak { days: 7 }, &clock());
        assert!(!outcome.evaluated);
        assert!(!outcome.just_unlocked);
        assert_eq!(outcome.achievement, achievement);
    }

    #[test]
    fn priority_condition_ignores_other_priorities() {
        let achievement = AchievementState::locked(
            "urgent-10",
            Condition::PriorityCount {
                priority: Priority::High,
                target: 10,
            },
            Reward::default(),
        );

        let outcome = evaluate(
            &achievement,
            &ProgressSignal::PriorityCompleted {
                priority: Priority::Low,
                total: 40,
            },
            &clock(),
        );
        assert!(outcome.evaluated);
        assert_eq!(outcome.achievement.progress, 0);

        let outcome = evaluate(
            &outcome.achievement,
            &ProgressSignal::PriorityCompleted {
                priority: Priority::High,
                total: 10,
            },
            &clock(),
        );
        assert!(outcome.just_unlocked);
    }

    #[test]
    fn time_of_day_counts_qualifying_events_only() {
        let achievement = AchievementState::locked(
            "early-bird",
            Condition::TimeOfDayCount {
                window: TimeWindow::new(5, 9),
                target: 2,
            },
            Reward::default(),
        );

        let miss = evaluate(
            &achievement,
            &ProgressSignal::CompletionAt { hour: 13 },
            &clock(),
        );
        assert!(miss.evaluated);
        assert_eq!(miss.achievement.progress, 0);

        let one = evaluate(
            &miss.achievement,
            &ProgressSignal::CompletionAt { hour: 6 },
            &clock(),
        );
        assert_eq!(one.achievement.progress, 1);
        assert!(!one.just_unlocked);

        let two = evaluate(
            &one.achievement,
            &ProgressSignal::CompletionAt { hour: 7 },
            &clock(),
        );
        assert!(two.just_unlocked);
    }

    #[test]
    fn weekly_efficiency_evaluates_any_day() {
        // Day-of-week gating is a host scheduling decision, not part of the
        // rule: the evaluator accepts efficiency signals on any date.
        let achievement = AchievementState::locked(
            "efficient-week",
            Condition::WeeklyEfficiency { percent: 80 },
            Reward::default(),
        );
        let outcome = evaluate(
            &achievement,
            &ProgressSignal::WeeklyEfficiency { percent: 85 },
            &clock(),
        );
        assert!(outcome.just_unlocked);
    }
}
