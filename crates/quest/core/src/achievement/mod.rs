//! Achievements: conditions, progress, and unlock evaluation.

pub mod condition;
pub mod evaluate;
pub mod state;

pub use condition::{Condition, Priority, ProgressSignal, TimeWindow};
pub use evaluate::{EvalOutcome, evaluate};
pub use state::{AchievementId, AchievementState, Reward};
