//! Equipment set definitions and per-set progress reporting.

use std::collections::BTreeMap;

use super::item::{ItemId, SetId, StatKind};

/// Static definition of an equipment set.
///
/// Configuration data, not runtime state: the piece list and the full-set
/// bonus map are versioned with the content tables, independently of the
/// engine logic.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SetDefinition {
    pub id: SetId,

    /// Item ids that make up the set, in display order.
    pub pieces: Vec<ItemId>,

    /// Stat bonuses granted when the whole set is equipped.
    #[cfg_attr(feature = "serde", serde(default))]
    pub bonus: BTreeMap<StatKind, i64>,
}

impl SetDefinition {
    pub fn new(id: impl Into<String>, pieces: Vec<ItemId>) -> Self {
        Self {
            id: SetId::new(id),
            pieces,
            bonus: BTreeMap::new(),
        }
    }

    /// Add a full-set stat bonus (builder pattern).
    #[must_use]
    pub fn with_bonus(mut self, stat: StatKind, value: i64) -> Self {
        self.bonus.insert(stat, value);
        self
    }

    /// Number of pieces in the set.
    pub fn total_pieces(&self) -> usize {
        self.pieces.len()
    }
}

/// Progress toward completing one set, reported by aggregation.
///
/// Sets with fewer than half their pieces equipped still appear in the
/// aggregate (with `bonus_applied = false`) so the UI can show collection
/// progress.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SetProgress {
    pub set: SetId,

    /// Pieces of this set currently equipped.
    pub collected: usize,

    /// Total pieces the set defines.
    pub total: usize,

    /// Whether any tier of the set bonus was folded into the stats map.
    pub bonus_applied: bool,
}

impl SetProgress {
    /// Fraction of the set currently equipped, in `[0, 1]`.
    pub fn completion_ratio(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.collected as f64 / self.total as f64
    }
}
