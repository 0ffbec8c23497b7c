//! Progression: experience curve, level-ups, and resource clamps.
//!
//! # Architecture
//!
//! - **Curve**: `required_experience_for_level` is the single source of truth
//! - **Awards**: `award_experience` settles the level against the curve and
//!   reports milestone bonuses
//! - **Resources**: health and energy share one clamp rule
//!
//! Everything here is a pure function over [`CharacterProgress`] snapshots;
//! persistence happens entirely in the host around these calls.

pub mod award;
pub mod character;
pub mod curve;

pub use award::{LevelBonus, LevelUp, award_experience, level_progress_percent};
pub use character::{CharacterProgress, ResourceMeter, clamp_resource};
pub use curve::required_experience_for_level;
