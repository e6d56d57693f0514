//! RNG oracle for deterministic random number generation.
//!
//! Dice rolls and the initial treasure layout are the only sources of
//! randomness in the game. Both draw from a caller-supplied [`RngOracle`],
//! so a seeded game replays identically and tests can script exact rolls.

/// Mutable source of random numbers consumed by the rules engine.
///
/// Implementations must be deterministic: the same seed produces the same
/// sequence of values.
pub trait RngOracle {
    /// Produce the next random `u32` in the sequence.
    fn next_u32(&mut self) -> u32;

    /// Produce a value in `min..=max`.
    fn range_inclusive(&mut self, min: u32, max: u32) -> u32 {
        if min >= max {
            return min;
        }
        let span = max - min + 1;
        min + self.next_u32() % span
    }
}

/// PCG random number generator (Permuted Congruential Generator).
///
/// PCG-XSH-RR produces 32-bit output from 64-bit state with a single
/// multiply, an xorshift, and a rotate. Small state, good statistical
/// quality, fully deterministic from the seed.
#[derive(Clone, Copy, Debug)]
pub struct PcgRng {
    state: u64,
}

impl PcgRng {
    /// PCG multiplier constant.
    const MULTIPLIER: u64 = 6364136223846793005;

    /// PCG increment constant.
    const INCREMENT: u64 = 1442695040888963407;

    pub fn new(seed: u64) -> Self {
        let mut rng = Self {
            state: seed.wrapping_add(Self::INCREMENT),
        };
        // Discard the first output so nearby seeds diverge immediately.
        rng.next_u32();
        rng
    }

    /// XSH-RR output function: xorshift high bits, then a random rotate.
    #[inline]
    fn output(state: u64) -> u32 {
        let xorshifted = (((state >> 18) ^ state) >> 27) as u32;
        let rot = (state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }
}

impl RngOracle for PcgRng {
    fn next_u32(&mut self) -> u32 {
        self.state = self
            .state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT);
        Self::output(self.state)
    }
}

/// Oracle that replays a fixed sequence of values, cycling when exhausted.
///
/// Useful as a test fixture: seed it with raw `next_u32` outputs and every
/// dice roll and treasure value becomes predictable.
#[derive(Clone, Debug)]
pub struct SequenceRng {
    values: Vec<u32>,
    cursor: usize,
}

impl SequenceRng {
    pub fn new(values: Vec<u32>) -> Self {
        Self { values, cursor: 0 }
    }
}

impl RngOracle for SequenceRng {
    fn next_u32(&mut self) -> u32 {
        if self.values.is_empty() {
            return 0;
        }
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        value
    }
}
