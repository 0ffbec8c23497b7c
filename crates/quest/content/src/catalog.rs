//! Built-in achievement catalog.
//!
//! Covers every condition kind so fresh installs have a full achievement
//! board without any data files. Hosts can replace or extend this via the
//! achievement loader.

use quest_core::achievement::{AchievementState, Condition, Priority, Reward, TimeWindow};

/// The default achievement catalog, all locked at zero progress.
pub fn default_achievements() -> Vec<AchievementState> {
    vec![
        AchievementState::locked(
            "first-steps",
            Condition::TaskCompletedCount { target: 1 },
            Reward::new(25, 5),
        ),
        AchievementState::locked(
            "half-century",
            Condition::TaskCompletedCount { target: 50 },
            Reward::new(150, 30),
        ),
        AchievementState::locked(
            "task-master",
            Condition::TaskCompletedCount { target: 250 },
            Reward::new(500, 100),
        ),
        AchievementState::locked(
            "week-streak",
            Condition::StreakDays { target: 7 },
            Reward::new(100, 20),
        ),
        AchievementState::locked(
            "iron-habit",
            Condition::StreakDays { target: 30 },
            Reward::new(400, 80),
        ),
        AchievementState::locked(
            "apprentice",
            Condition::ReachLevel { target: 5 },
            Reward::new(0, 25),
        ),
        AchievementState::locked(
            "veteran",
            Condition::ReachLevel { target: 15 },
            Reward::new(0, 120),
        ),
        AchievementState::locked(
            "firefighter",
            Condition::PriorityCount {
                priority: Priority::High,
                target: 25,
            },
            Reward::new(200, 40),
        ),
        AchievementState::locked(
            "early-bird",
            Condition::TimeOfDayCount {
                window: TimeWindow::new(5, 9),
                target: 10,
            },
            Reward::new(120, 20),
        ),
        AchievementState::locked(
            "night-owl",
            Condition::TimeOfDayCount {
                window: TimeWindow::new(22, 2),
                target: 10,
            },
            Reward::new(120, 20),
        ),
        AchievementState::locked(
            "efficient-week",
            Condition::WeeklyEfficiency { percent: 80 },
            Reward::new(180, 35),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn catalog_ids_are_unique() {
        let achievements = default_achievements();
        let ids: BTreeSet<_> = achievements.iter().map(|a| a.id.clone()).collect();
        assert_eq!(ids.len(), achievements.len());
    }

    #[test]
    fn catalog_starts_locked_with_sane_targets() {
        for achievement in default_achievements() {
            assert!(!achievement.unlocked, "{} starts unlocked", achievement.id);
            assert_eq!(achievement.progress, 0);
            assert!(achievement.target() >= 1);
        }
    }

    #[test]
    fn catalog_covers_every_condition_kind() {
        let achievements = default_achievements();
        let has = |predicate: fn(&Condition) -> bool| {
            achievements.iter().any(|a| predicate(&a.condition))
        };
        assert!(has(|c| matches!(c, Condition::TaskCompletedCount { .. })));
        assert!(has(|c| matches!(c, Condition::StreakDays { .. })));
        assert!(has(|c| matches!(c, Condition::ReachLevel { .. })));
        assert!(has(|c| matches!(c, Condition::PriorityCount { .. })));
        assert!(has(|c| matches!(c, Condition::TimeOfDayCount { .. })));
        assert!(has(|c| matches!(c, Condition::WeeklyEfficiency { .. })));
    }
}
