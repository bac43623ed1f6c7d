//! Deterministic PRNG based on the Xorshift64 algorithm.
//!
//! Every draw the sampler makes goes through [`Xorshift64::next_inclusive`],
//! so a fixed seed reproduces the same colors on every platform (pure integer
//! arithmetic, no floating point in the generator).

use serde::{Deserialize, Serialize};

/// Xorshift64 deterministic PRNG. Same seed always produces the same sequence.
///
/// Uses the standard shift parameters (13, 7, 17). Seed of 0 is automatically
/// replaced with a non-zero fallback to avoid the all-zeros fixed point.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Xorshift64 {
    state: u64,
}

impl Xorshift64 {
    /// Fallback seed used when the caller provides 0, which is a fixed point
    /// of the xorshift algorithm.
    const FALLBACK_SEED: u64 = 0x5EED_DEAD_BEEF_CAFE;

    /// Creates a new PRNG with the given seed.
    ///
    /// If `seed` is 0, uses `0x5EED_DEAD_BEEF_CAFE` as a fallback.
    pub fn new(seed: u64) -> Self {
        Self {
            state: if seed == 0 { Self::FALLBACK_SEED } else { seed },
        }
    }

    /// Draws a fresh seed from the operating system's entropy source.
    pub fn entropy_seed() -> u64 {
        rand::random::<u64>()
    }

    /// Advances the state and returns the next 64-bit value.
    pub fn next_u64(&mut self) -> u64 {
        self.state ^= self.state << 13;
        self.state ^= self.state >> 7;
        self.state ^= self.state << 17;
        self.state
    }

    /// Returns a uniformly distributed integer in `[lower, upper]`, both ends
    /// inclusive.
    ///
    /// Uses modulo reduction over the 64-bit output; the bias is negligible
    /// for spans of a few hundred values. A degenerate range (`upper < lower`)
    /// collapses to `lower` without consuming any state.
    pub fn next_inclusive(&mut self, lower: i32, upper: i32) -> i32 {
        if upper < lower {
            return lower;
        }
        let span = (i64::from(upper) - i64::from(lower) + 1) as u64;
        let offset = (self.next_u64() % span) as i64;
        (i64::from(lower) + offset) as i32
    }
}
