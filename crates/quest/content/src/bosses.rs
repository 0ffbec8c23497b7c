//! Boss templates.
//!
//! Templates are static content; a [`BossEntity`] is created by summoning a
//! template at a point in time. Template data is loosely typed JSON, so
//! optional fields default defensively.

use quest_core::combat::{BossEntity, BossError, Effect};
use quest_core::env::ClockOracle;
use quest_core::equipment::Rarity;
use serde::{Deserialize, Serialize};

/// Static definition a boss is summoned from.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BossTemplate {
    pub id: String,

    pub name: String,

    #[serde(default)]
    pub rarity: Rarity,

    pub max_health: i64,

    #[serde(default)]
    pub physical_resistance: i64,

    #[serde(default)]
    pub magic_resistance: i64,

    #[serde(default)]
    pub effects: Vec<Effect>,

    /// Days until expiry; `None` means unlimited.
    #[serde(default)]
    pub duration_days: Option<u32>,
}

impl BossTemplate {
    /// Summon an active boss from this template.
    ///
    /// `created_at` comes from the clock, which also drives the later expiry
    /// checks.
    pub fn summon(&self, clock: &(impl ClockOracle + ?Sized)) -> Result<BossEntity, BossError> {
        BossEntity::new(
            self.id.clone(),
            self.rarity,
            self.max_health,
            self.physical_resistance,
            self.magic_resistance,
            self.effects.clone(),
            self.duration_days,
            clock.now(),
        )
    }
}

/// Built-in boss roster.
pub fn starter_bosses() -> Vec<BossTemplate> {
    vec![
        BossTemplate {
            id: "procrastination-imp".into(),
            name: "Procrastination Imp".into(),
            rarity: Rarity::Common,
            max_health: 300,
            physical_resistance: 0,
            magic_resistance: 0,
            effects: vec![],
            duration_days: Some(7),
        },
        BossTemplate {
            id: "deadline-wraith".into(),
            name: "Deadline Wraith".into(),
            rarity: Rarity::Rare,
            max_health: 800,
            physical_resistance: 10,
            magic_resistance: 20,
            effects: vec![Effect::HealthRegen { percent: 5 }],
            duration_days: Some(14),
        },
        BossTemplate {
            id: "burnout-colossus".into(),
            name: "Burnout Colossus".into(),
            rarity: Rarity::Legendary,
            max_health: 2500,
            physical_resistance: 20,
            magic_resistance: 20,
            effects: vec![
                Effect::DamageReduction { value: 10 },
                Effect::IncreasingResistance {
                    start: 0,
                    max: 30,
                    increment: 2,
                },
                Effect::CriticalResistance { value: 25 },
            ],
            duration_days: Some(30),
        },
    ]
}
