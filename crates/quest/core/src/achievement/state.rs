//! Achievement state and rewards.

use chrono::{DateTime, Utc};

use super::condition::Condition;

/// Identifier of an achievement.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct AchievementId(pub String);

impl AchievementId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl std::fmt::Display for AchievementId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Reward granted when an achievement unlocks.
///
/// Disbursement is the caller's responsibility: feed `experience` through
/// `award_experience` and credit `coins` to the wallet once `just_unlocked`
/// is observed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Reward {
    #[cfg_attr(feature = "serde", serde(default))]
    pub experience: i64,

    #[cfg_attr(feature = "serde", serde(default))]
    pub coins: i64,
}

impl Reward {
    pub const fn new(experience: i64, coins: i64) -> Self {
        Self { experience, coins }
    }
}

/// Stored state of one achievement.
///
/// Invariant: `unlocked` is one-way false→true; once set, progress updates
/// are no-ops.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AchievementState {
    pub id: AchievementId,

    pub condition: Condition,

    /// Current progress toward the condition target.
    #[cfg_attr(feature = "serde", serde(default))]
    pub progress: i64,

    #[cfg_attr(feature = "serde", serde(default))]
    pub unlocked: bool,

    #[cfg_attr(feature = "serde", serde(default))]
    pub unlocked_at: Option<DateTime<Utc>>,

    #[cfg_attr(feature = "serde", serde(default))]
    pub reward: Reward,
}

impl AchievementState {
    /// A locked achievement with zero progress.
    pub fn locked(id: impl Into<String>, condition: Condition, reward: Reward) -> Self {
        Self {
            id: AchievementId::new(id),
            condition,
            progress: 0,
            unlocked: false,
            unlocked_at: None,
            reward,
        }
    }

    /// Progress target, with defensive defaulting (see [`Condition::target`]).
    pub fn target(&self) -> i64 {
        self.condition.target()
    }
}
