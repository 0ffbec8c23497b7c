//! Environment oracles: clock, RNG, and balance tables.
//!
//! The engine owns no ambient state. Everything time-, chance-, or
//! configuration-shaped is injected through the traits in this module so
//! every rule stays a deterministic function of its inputs.

pub mod clock;
pub mod rng;
pub mod tables;

pub use clock::{ClockOracle, FixedClock, SystemClock};
pub use rng::{PcgRng, RngOracle, compute_seed};
pub use tables::{CombatParams, TablesOracle};
