//! RNG oracle for deterministic random number generation.
//!
//! Every random decision the engine makes (condition `probability` gates,
//! `RandomChance` conditions, action `chance` gates) draws from an injected
//! [`RngOracle`]. Given the same seed and the same inputs, a pipeline call
//! makes the same decisions, which keeps battle replays and tests exact.

/// RNG oracle for deterministic random number generation.
pub trait RngOracle {
    /// Generate the next random u32 value.
    fn next_u32(&mut self) -> u32;

    /// Uniform draw in `[0.0, 1.0)`.
    fn next_f64(&mut self) -> f64 {
        f64::from(self.next_u32()) / 4_294_967_296.0
    }

    /// Draws once and returns true with the given probability.
    ///
    /// Always consumes exactly one draw, so `chance(1.0)` and `chance(0.0)`
    /// advance the stream like any other gate.
    fn chance(&mut self, probability: f64) -> bool {
        self.next_f64() < probability
    }
}

impl<R: RngOracle + ?Sized> RngOracle for &mut R {
    fn next_u32(&mut self) -> u32 {
        (**self).next_u32()
    }
}

/// PCG random number generator (PCG-XSH-RR, 64-bit state, 32-bit output).
///
/// - **Deterministic**: Same seed always produces the same sequence
/// - **Fast**: Single multiply + xorshift + rotate
/// - **Small state**: Only 64 bits
///
/// Reference: <https://www.pcg-random.org/>
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PcgRng {
    state: u64,
}

impl PcgRng {
    /// PCG multiplier constant.
    const MULTIPLIER: u64 = 6364136223846793005;

    /// PCG increment constant.
    const INCREMENT: u64 = 1442695040888963407;

    /// Creates a generator whose sequence is fully determined by `seed`.
    pub fn seeded(seed: u64) -> Self {
        Self { state: seed }
    }

    /// `state' = (state × multiplier + increment) mod 2^64`
    #[inline]
    fn pcg_step(state: u64) -> u64 {
        state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT)
    }

    /// XSH-RR output permutation.
    #[inline]
    fn pcg_output(state: u64) -> u32 {
        let xorshifted = (((state >> 18) ^ state) >> 27) as u32;
        let rot = (state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }
}

impl Default for PcgRng {
    fn default() -> Self {
        Self::seeded(0)
    }
}

impl RngOracle for PcgRng {
    fn next_u32(&mut self) -> u32 {
        self.state = Self::pcg_step(self.state);
        Self::pcg_output(self.state)
    }
}

/// Compute a deterministic seed for one pipeline call.
///
/// Orchestrators derive a fresh seed per use so two items used on the same
/// turn do not share a random stream.
///
/// * `battle_seed` - Base seed fixed when the battle (or field session) starts
/// * `turn` - Current battle turn
/// * `slot` - Distinguishes several calls within one turn (party slot, item index)
pub fn compute_seed(battle_seed: u64, turn: u32, slot: u32) -> u64 {
    // SplitMix64 / FxHash style mixing
    let mut hash = battle_seed;
    hash ^= u64::from(turn).wrapping_mul(0x9e3779b97f4a7c15);
    hash ^= u64::from(slot).wrapping_mul(0x517cc1b727220a95);

    // Final avalanche step
    hash ^= hash >> 33;
    hash = hash.wrapping_mul(0xff51afd7ed558ccd);
    hash ^= hash >> 33;

    hash
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_sequence() {
        let mut a = PcgRng::seeded(42);
        let mut b = PcgRng::seeded(42);
        for _ in 0..32 {
            assert_eq!(a.next_u32(), b.next_u32());
        }
    }

    #[test]
    fn unit_draws_stay_in_range() {
        let mut rng = PcgRng::seeded(7);
        for _ in 0..1000 {
            let x = rng.next_f64();
            assert!((0.0..1.0).contains(&x));
        }
    }

    #[test]
    fn certain_and_impossible_chances() {
        let mut rng = PcgRng::seeded(99);
        for _ in 0..1000 {
            assert!(rng.chance(1.0));
            assert!(!rng.chance(0.0));
        }
    }

    #[test]
    fn seeds_differ_per_turn_and_slot() {
        let base = compute_seed(1234, 1, 0);
        assert_ne!(base, compute_seed(1234, 2, 0));
        assert_ne!(base, compute_seed(1234, 1, 1));
        assert_eq!(base, compute_seed(1234, 1, 0));
    }
}
