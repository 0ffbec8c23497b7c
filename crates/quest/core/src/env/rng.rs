//! RNG oracle for deterministic random number generation.
//!
//! Critical-hit checks are the engine's only random mechanic. The combat
//! functions themselves take the percent roll as an argument and stay pure;
//! this module is how hosts and tests produce those rolls reproducibly.
//!
//! # Determinism
//!
//! All RNG implementations must be deterministic: given the same seed, they
//! must produce the same value. This keeps task-completion outcomes
//! replayable from persisted state.

/// RNG oracle for deterministic random number generation.
///
/// Implementations must be deterministic and produce the same values given
/// the same seed.
pub trait RngOracle: Send + Sync {
    /// Generate a random u32 value from a seed.
    fn next_u32(&self, seed: u64) -> u32;

    /// Roll a percentage in `[0, 100)`.
    ///
    /// This is the roll format [`crate::combat::add_damage`] expects for its
    /// critical-hit check.
    fn percent_roll(&self, seed: u64) -> u32 {
        self.next_u32(seed) % 100
    }
}

/// PCG random number generator (Permuted Congruential Generator).
///
/// PCG-XSH-RR: 32-bit output from 64-bit state. Small, fast, and passes
/// statistical test suites, which is more than a crit roll needs.
#[derive(Clone, Copy, Debug, Default)]
pub struct PcgRng;

impl PcgRng {
    const MULTIPLIER: u64 = 6364136223846793005;
    const INCREMENT: u64 = 1442695040888963407;

    /// Advance the PCG state by one LCG step.
    #[inline]
    fn pcg_step(state: u64) -> u64 {
        state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT)
    }

    /// PCG output permutation (xorshift high, random rotate).
    #[inline]
    fn pcg_output(state: u64) -> u32 {
        let xorshifted = (((state >> 18) ^ state) >> 27) as u32;
        let rot = (state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }
}

impl RngOracle for PcgRng {
    fn next_u32(&self, seed: u64) -> u32 {
        let state = Self::pcg_step(seed);
        Self::pcg_output(state)
    }
}

/// Compute a deterministic seed for one random event.
///
/// Mixes the profile-level base seed with the ordinal of the action (e.g.
/// lifetime completed-task count) and a context tag for multiple independent
/// rolls inside the same action.
pub fn compute_seed(base_seed: u64, event_ordinal: u64, context: u32) -> u64 {
    // SplitMix64-style mixing; constants shared with FxHash.
    let mut hash = base_seed;
    hash ^= event_ordinal.wrapping_mul(0x9e3779b97f4a7c15);
    hash ^= (context as u64).wrapping_mul(0x85ebca6b);
    hash ^= hash >> 33;
    hash = hash.wrapping_mul(0xff51afd7ed558ccd);
    hash ^= hash >> 33;
    hash
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_roll_is_in_range() {
        let rng = PcgRng;
        for event in 0..1000u64 {
            let roll = rng.percent_roll(compute_seed(42, event, 0));
            assert!(roll < 100);
        }
    }

    #[test]
    fn same_seed_same_roll() {
        let rng = PcgRng;
        let seed = compute_seed(7, 3, 1);
        assert_eq!(rng.next_u32(seed), rng.next_u32(seed));
    }

    #[test]
    fn context_separates_rolls_within_one_event() {
        assert_ne!(compute_seed(7, 3, 0), compute_seed(7, 3, 1));
    }
}
