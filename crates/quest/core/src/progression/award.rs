//! Experience awards and level-up resolution.
//!
//! All progression mutation goes through [`award_experience`]. The function
//! is pure: it takes the current snapshot plus an amount and returns the new
//! snapshot with an optional [`LevelUp`] payload describing what the host
//! should announce.

use super::character::CharacterProgress;
use super::curve::required_experience_for_level;

/// How many levels sit between resource milestones.
const MILESTONE_INTERVAL: u32 = 5;

/// Maximum-resource gain granted at each milestone level.
const MILESTONE_RESOURCE_GAIN: i64 = 10;

/// Resource bonus granted by reaching a milestone level.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LevelBonus {
    /// The milestone level that triggered this bonus.
    pub level: u32,

    /// Amount added to the health maximum.
    pub max_health_gained: i64,

    /// Amount added to the energy maximum.
    pub max_energy_gained: i64,
}

/// Result payload for an award that gained at least one level.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LevelUp {
    /// Level after the award settled.
    pub new_level: u32,

    /// Milestone bonuses granted during this award, in order.
    pub bonuses: Vec<LevelBonus>,
}

/// Award (or revert) experience and settle the level.
///
/// - `amount < 0` is an undo correction: experience clamps at 0 and the
///   level never changes (no level-down, no level-up).
/// - `amount ≥ 0` adds to both experience counters, then loops the level-up
///   check so one large award can jump several levels at once.
///
/// Each level gained that is a multiple of five raises both resource maxima
/// by 10 and refills them; the returned [`LevelUp`] lists those bonuses so
/// the host can surface them.
pub fn award_experience(
    progress: &CharacterProgress,
    amount: i64,
) -> (CharacterProgress, Option<LevelUp>) {
    let mut next = progress.clone();

    if amount < 0 {
        next.experience = (next.experience + amount).max(0);
        next.total_experience = (next.total_experience + amount).max(0);
        return (next, None);
    }

    next.experience += amount;
    next.total_experience += amount;

    let mut bonuses = Vec::new();
    // Terminates: the curve is strictly increasing and the award is finite.
    while next.experience >= required_experience_for_level(next.level as i32) {
        next.level += 1;
        if next.level % MILESTONE_INTERVAL == 0 {
            next.health = next.health.raise_max(MILESTONE_RESOURCE_GAIN).refill();
            next.energy = next.energy.raise_max(MILESTONE_RESOURCE_GAIN).refill();
            bonuses.push(LevelBonus {
                level: next.level,
                max_health_gained: MILESTONE_RESOURCE_GAIN,
                max_energy_gained: MILESTONE_RESOURCE_GAIN,
            });
        }
    }

    let level_up = (next.level > progress.level).then(|| LevelUp {
        new_level: next.level,
        bonuses,
    });

    (next, level_up)
}

/// Percentage of the way from the current level threshold to the next.
///
/// Floor semantics, clamped into `[0, 100]`. Returns 0 when the thresholds
/// collapse (denominator ≤ 0), and clamps to 100 if the stored experience is
/// inconsistent with the stored level.
pub fn level_progress_percent(progress: &CharacterProgress) -> u8 {
    let previous = required_experience_for_level(progress.level as i32 - 1);
    let next = required_experience_for_level(progress.level as i32);
    let span = next - previous;
    if span <= 0 {
        return 0;
    }
    let percent = ((progress.experience - previous) * 100) / span;
    percent.clamp(0, 100) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn award_crosses_one_level() {
        let player = CharacterProgress::new_player();
        let (player, level_up) = award_experience(&player, 100);
        assert_eq!(player.level, 2);
        let level_up = level_up.unwrap();
        assert_eq!(level_up.new_level, 2);
        assert!(level_up.bonuses.is_empty());
    }

    #[test]
    fn award_below_threshold_keeps_level() {
        let player = CharacterProgress::new_player();
        let (player, level_up) = award_experience(&player, 99);
        assert_eq!(player.level, 1);
        assert!(level_up.is_none());
    }

    #[test]
    fn large_award_jumps_multiple_levels() {
        let player = CharacterProgress::new_player();
        // Level 4 threshold is round(100 × 1.5^3) = 338
        let (player, level_up) = award_experience(&player, 400);
        assert_eq!(player.level, 5);
        assert_eq!(level_up.unwrap().new_level, 5);
    }

    #[test]
    fn milestone_level_raises_and_refills_resources() {
        let mut player = CharacterProgress::new_player();
        player.health = player.health.apply(-20);
        let (player, level_up) = award_experience(&player, 450);
        assert_eq!(player.level, 5);
        assert_eq!(player.health.max, CharacterProgress::BASE_MAX_HEALTH + 10);
        assert_eq!(player.health.current, player.health.max);
        assert_eq!(player.energy.max, CharacterProgress::BASE_MAX_ENERGY + 10);
        let bonuses = level_up.unwrap().bonuses;
        assert_eq!(bonuses.len(), 1);
        assert_eq!(bonuses[0].level, 5);
        assert_eq!(bonuses[0].max_health_gained, 10);
    }

    #[test]
    fn negative_award_clamps_and_never_changes_level() {
        let player = CharacterProgress::new_player();
        let (player, _) = award_experience(&player, 120);
        assert_eq!(player.level, 2);

        let (player, level_up) = award_experience(&player, -500);
        assert!(level_up.is_none());
        assert_eq!(player.level, 2);
        assert_eq!(player.experience, 0);
    }

    #[test]
    fn progress_percent_at_threshold_is_zero() {
        // Award 100 at level 1 → level 2 at 0%, then +50 → total 150, which
        // is exactly the level-2 threshold, so the level settles up again.
        let player = CharacterProgress::new_player();
        let (player, _) = award_experience(&player, 100);
        assert_eq!(player.level, 2);
        assert_eq!(level_progress_percent(&player), 0);

        let (player, _) = award_experience(&player, 50);
        // 150 reaches the level-2 threshold exactly, so the level settles
        // up and progress restarts at 0%.
        assert_eq!(level_progress_percent(&player), 0);
    }

    #[test]
    fn progress_percent_clamps_on_inconsistent_state() {
        let mut player = CharacterProgress::new_player();
        player.level = 2;
        player.experience = 10_000; // beyond the level-2 threshold
        assert_eq!(level_progress_percent(&player), 100);

        player.experience = 0; // below the level-1 threshold
        assert_eq!(level_progress_percent(&player), 0);
    }

    #[test]
    fn progress_percent_midway() {
        let mut player = CharacterProgress::new_player();
        player.level = 2;
        player.experience = 125; // halfway between 100 and 150
        assert_eq!(level_progress_percent(&player), 50);
    }
}
