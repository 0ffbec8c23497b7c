//! Boss entity state.
//!
//! A boss is summoned from a template, absorbs accumulated damage from task
//! completions during the day, and commits that damage once per calendar day
//! in the rollover. Status transitions are one-way:
//!
//! ```text
//! Active ──→ Defeated   (health reaches 0 at rollover)
//! Active ──→ Expired    (duration elapses)
//! ```
//!
//! Defeated and expired bosses accept no further damage.

use chrono::{DateTime, Days, NaiveDate, Utc};

use crate::equipment::Rarity;

/// Identifier of a boss instance.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct BossId(pub String);

impl BossId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl std::fmt::Display for BossId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Lifecycle state of a boss.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum BossStatus {
    #[default]
    Active,
    Defeated,
    Expired,
}

/// Boss-side effects.
///
/// `DamageReduction` and `CriticalResistance` apply on every hit;
/// `HealthRegen` and `IncreasingResistance` run during the daily rollover.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case", tag = "kind"))]
pub enum Effect {
    /// Flat percentage added to total resistance on every hit.
    DamageReduction { value: i64 },

    /// Restores `floor(max_health × percent / 100)` each rollover.
    HealthRegen { percent: i64 },

    /// Resistance that starts at `start` and grows by `increment` each
    /// rollover, capped at `max`.
    IncreasingResistance { start: i64, max: i64, increment: i64 },

    /// Subtracted from the player's crit chance.
    CriticalResistance { value: i64 },
}

/// One day's damage bucket in the boss history.
///
/// The history is append-only and ordered by date; hits within the same
/// calendar day accumulate into a single record.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DamageRecord {
    pub date: NaiveDate,

    /// Total damage dealt on this date.
    pub damage: i64,

    /// Physical-type subtotal.
    pub physical_damage: i64,

    /// Magical-type subtotal.
    pub magical_damage: i64,

    /// Critical hits landed on this date.
    pub critical_hits: u32,
}

impl DamageRecord {
    fn empty(date: NaiveDate) -> Self {
        Self {
            date,
            damage: 0,
            physical_damage: 0,
            magical_damage: 0,
            critical_hits: 0,
        }
    }
}

/// Validation errors for boss construction.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum BossError {
    #[error("boss max health must be positive, got {max_health}")]
    NonPositiveHealth { max_health: i64 },

    #[error("{kind} resistance {value} outside [0, 100]")]
    ResistanceOutOfRange { kind: &'static str, value: i64 },
}

/// A time-limited boss entity.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BossEntity {
    pub id: BossId,

    pub rarity: Rarity,

    pub max_health: i64,

    /// Health after the last committed rollover; never touched mid-day.
    pub current_health: i64,

    #[cfg_attr(feature = "serde", serde(default))]
    pub effects: Vec<Effect>,

    /// Resistance against physical and normal hits, 0–100.
    #[cfg_attr(feature = "serde", serde(default))]
    pub physical_resistance: i64,

    /// Resistance against magical hits, 0–100.
    #[cfg_attr(feature = "serde", serde(default))]
    pub magic_resistance: i64,

    /// Damage dealt today but not yet committed to health.
    #[cfg_attr(feature = "serde", serde(default))]
    pub accumulated_damage: i64,

    /// Time-accumulated resistance from `IncreasingResistance`.
    #[cfg_attr(feature = "serde", serde(default))]
    pub current_resistance: i64,

    #[cfg_attr(feature = "serde", serde(default))]
    pub damage_history: Vec<DamageRecord>,

    #[cfg_attr(feature = "serde", serde(default))]
    pub status: BossStatus,

    pub created_at: DateTime<Utc>,

    /// Days until expiry; `None` means unlimited.
    #[cfg_attr(feature = "serde", serde(default))]
    pub duration_days: Option<u32>,

    /// Stamped when the boss is defeated.
    #[cfg_attr(feature = "serde", serde(default))]
    pub completed_at: Option<DateTime<Utc>>,
}

impl BossEntity {
    /// Create an active boss at full health.
    ///
    /// `current_resistance` starts at the `IncreasingResistance` effect's
    /// `start` value when that effect is present.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: impl Into<String>,
        rarity: Rarity,
        max_health: i64,
        physical_resistance: i64,
        magic_resistance: i64,
        effects: Vec<Effect>,
        duration_days: Option<u32>,
        created_at: DateTime<Utc>,
    ) -> Result<Self, BossError> {
        if max_health <= 0 {
            return Err(BossError::NonPositiveHealth { max_health });
        }
        for (kind, value) in [
            ("physical", physical_resistance),
            ("magic", magic_resistance),
        ] {
            if !(0..=100).contains(&value) {
                return Err(BossError::ResistanceOutOfRange { kind, value });
            }
        }

        let current_resistance = effects
            .iter()
            .find_map(|effect| match effect {
                Effect::IncreasingResistance { start, .. } => Some(*start),
                _ => None,
            })
            .unwrap_or(0);

        Ok(Self {
            id: BossId::new(id),
            rarity,
            max_health,
            current_health: max_health,
            effects,
            physical_resistance,
            magic_resistance,
            accumulated_damage: 0,
            current_resistance,
            damage_history: Vec::new(),
            status: BossStatus::Active,
            created_at,
            duration_days,
            completed_at: None,
        })
    }

    /// Sum of all `DamageReduction` effect values.
    pub fn damage_reduction(&self) -> i64 {
        self.effects
            .iter()
            .map(|effect| match effect {
                Effect::DamageReduction { value } => *value,
                _ => 0,
            })
            .sum()
    }

    /// `CriticalResistance` effect value, 0 when absent.
    pub fn critical_resistance(&self) -> i64 {
        self.effects
            .iter()
            .find_map(|effect| match effect {
                Effect::CriticalResistance { value } => Some(*value),
                _ => None,
            })
            .unwrap_or(0)
    }

    /// Date past which the boss counts as expired, if it has a duration.
    pub fn expires_after(&self) -> Option<NaiveDate> {
        let days = self.duration_days?;
        self.created_at
            .date_naive()
            .checked_add_days(Days::new(days as u64))
    }

    /// Today's history bucket, created on first hit of the day.
    pub(crate) fn record_for(&mut self, date: NaiveDate) -> &mut DamageRecord {
        match self
            .damage_history
            .iter()
            .position(|record| record.date == date)
        {
            Some(index) => &mut self.damage_history[index],
            None => {
                self.damage_history.push(DamageRecord::empty(date));
                self.damage_history
                    .last_mut()
                    .expect("history bucket just pushed")
            }
        }
    }
}
