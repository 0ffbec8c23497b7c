//! Achievement conditions and progress signals.
//!
//! Conditions are a closed tagged-variant family: adding a new condition
//! kind forces every match in the evaluator to handle it. Signals mirror the
//! family; the host reports whichever counters changed and the evaluator
//! pairs them up.

use strum::Display;

/// Task priority, used by priority-count conditions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case")]
pub enum Priority {
    Low,
    Medium,
    High,
}

/// A daily time window in whole hours, end-exclusive.
///
/// Windows may wrap midnight: `{ start_hour: 22, end_hour: 6 }` covers late
/// evening through early morning.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TimeWindow {
    pub start_hour: u32,
    pub end_hour: u32,
}

impl TimeWindow {
    pub const fn new(start_hour: u32, end_hour: u32) -> Self {
        Self {
            start_hour,
            end_hour,
        }
    }

    /// Whether `hour` (0–23) falls inside this window.
    pub fn contains(&self, hour: u32) -> bool {
        if self.start_hour <= self.end_hour {
            (self.start_hour..self.end_hour).contains(&hour)
        } else {
            hour >= self.start_hour || hour < self.end_hour
        }
    }
}

/// Unlock condition of an achievement.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case", tag = "kind"))]
pub enum Condition {
    /// Lifetime completed-task total reaches `target`.
    TaskCompletedCount { target: i64 },

    /// Completion streak reaches `target` consecutive days.
    StreakDays { target: i64 },

    /// Character level reaches `target`.
    ReachLevel { target: i64 },

    /// Completed tasks of `priority` reach `target`.
    PriorityCount { priority: Priority, target: i64 },

    /// Completions inside `window` reach `target` (counted one per
    /// qualifying event).
    TimeOfDayCount { window: TimeWindow, target: i64 },

    /// Weekly completion efficiency reaches `percent`.
    WeeklyEfficiency { percent: i64 },
}

impl Condition {
    /// Progress target for this condition.
    ///
    /// Achievement data is config-controlled, so a non-positive target is
    /// defensively treated as 1 rather than rejected.
    pub fn target(&self) -> i64 {
        let raw = match self {
            Condition::TaskCompletedCount { target }
            | Condition::StreakDays { target }
            | Condition::ReachLevel { target }
            | Condition::PriorityCount { target, .. }
            | Condition::TimeOfDayCount { target, .. } => *target,
            Condition::WeeklyEfficiency { percent } => *percent,
        };
        raw.max(1)
    }
}

/// A progress report from the host, mirroring the condition family.
///
/// Counter-style signals carry the already-settled running total; the
/// time-of-day signal is event-style and carries the completion hour.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case", tag = "kind"))]
pub enum ProgressSignal {
    /// Lifetime completed-task total.
    TasksCompleted { total: i64 },

    /// Current streak length in days.
    Streak { days: i64 },

    /// Current character level.
    Level { level: i64 },

    /// Completed-task total for one priority.
    PriorityCompleted { priority: Priority, total: i64 },

    /// One task completed at `hour` (0–23).
    CompletionAt { hour: u32 },

    /// Weekly completion efficiency percentage.
    WeeklyEfficiency { percent: i64 },
}
