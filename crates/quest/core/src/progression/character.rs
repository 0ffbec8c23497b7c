//! Character progression state.
//!
//! [`CharacterProgress`] is the stored snapshot for one player: level,
//! experience counters, and the health/energy resource pools. It is created
//! once per player and mutated only through the award/undo operations in
//! [`super::award`] and the resource clamp below.

/// Clamp a resource change into `[0, max]`.
///
/// Used identically for health and energy.
pub fn clamp_resource(current: i64, delta: i64, max: i64) -> i64 {
    (current + delta).clamp(0, max.max(0))
}

/// A current/maximum resource pair (health or energy).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResourceMeter {
    pub current: i64,
    pub max: i64,
}

impl ResourceMeter {
    /// Create a meter filled to `max`.
    pub const fn full(max: i64) -> Self {
        Self { current: max, max }
    }

    /// Apply a delta, clamped into `[0, max]`.
    #[must_use]
    pub fn apply(self, delta: i64) -> Self {
        Self {
            current: clamp_resource(self.current, delta, self.max),
            ..self
        }
    }

    /// Raise the maximum by `amount` (used by level milestones).
    #[must_use]
    pub fn raise_max(self, amount: i64) -> Self {
        Self {
            max: self.max + amount,
            ..self
        }
    }

    /// Refill to maximum.
    #[must_use]
    pub fn refill(self) -> Self {
        Self::full(self.max)
    }

    /// Whether the pool is empty.
    pub fn is_depleted(&self) -> bool {
        self.current == 0
    }
}

/// Stored progression state for one player.
///
/// Invariant once settled: `required(level-1) ≤ experience < required(level)`;
/// the level is always the largest level whose threshold has been reached.
/// Experience is monotonically non-decreasing except for explicit undo
/// corrections (negative awards), which clamp at 0 and never touch the level.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CharacterProgress {
    /// Current level, always ≥ 1.
    pub level: u32,

    /// Experience accumulated toward the curve.
    pub experience: i64,

    /// Lifetime experience earned (never reduced by level-ups).
    pub total_experience: i64,

    /// Health pool.
    pub health: ResourceMeter,

    /// Energy pool.
    pub energy: ResourceMeter,
}

impl CharacterProgress {
    /// Starting health maximum for a fresh character.
    pub const BASE_MAX_HEALTH: i64 = 50;

    /// Starting energy maximum for a fresh character.
    pub const BASE_MAX_ENERGY: i64 = 30;

    /// A fresh level-1 character with full resources.
    pub fn new_player() -> Self {
        Self {
            level: 1,
            experience: 0,
            total_experience: 0,
            health: ResourceMeter::full(Self::BASE_MAX_HEALTH),
            energy: ResourceMeter::full(Self::BASE_MAX_ENERGY),
        }
    }
}

impl Default for CharacterProgress {
    fn default() -> Self {
        Self::new_player()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_resource_bounds() {
        assert_eq!(clamp_resource(10, 5, 12), 12);
        assert_eq!(clamp_resource(10, -15, 12), 0);
        assert_eq!(clamp_resource(10, -3, 12), 7);
        // Degenerate max never produces a negative pool
        assert_eq!(clamp_resource(5, 3, -1), 0);
    }

    #[test]
    fn meter_apply_and_refill() {
        let meter = ResourceMeter::full(50).apply(-60);
        assert!(meter.is_depleted());
        assert_eq!(meter.refill().current, 50);
    }

    #[test]
    fn new_player_starts_settled() {
        let player = CharacterProgress::new_player();
        assert_eq!(player.level, 1);
        assert_eq!(player.experience, 0);
        assert_eq!(player.health.current, player.health.max);
    }
}
