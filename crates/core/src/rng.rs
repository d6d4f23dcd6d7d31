//! RNG module - seeded random number generation
//!
//! Provides a simple LCG usable anywhere a deterministic random stream is
//! needed: piece selection in the puzzle, word selection in the word game.
//!
//! Seeds are explicit constructor arguments. The host derives one from the
//! system clock at launch; tests pass fixed values for reproducible runs.

use crate::types::PieceKind;

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }

    /// Current internal state, usable as the seed of a follow-up session.
    pub fn state(&self) -> u32 {
        self.state
    }
}

/// Uniform random stream of piece kinds.
///
/// Every draw is an independent uniform pick over the seven kinds; there is
/// no bag, so repeats and droughts are possible.
#[derive(Debug, Clone)]
pub struct PieceStream {
    rng: SimpleRng,
}

impl PieceStream {
    /// Create a new stream with the given seed
    pub fn new(seed: u32) -> Self {
        Self {
            rng: SimpleRng::new(seed),
        }
    }

    /// Draw the next piece kind
    pub fn next(&mut self) -> PieceKind {
        PieceKind::ALL[self.rng.next_range(PieceKind::ALL.len() as u32) as usize]
    }

    /// Current RNG state (for restarting with a fresh sequence)
    pub fn state(&self) -> u32 {
        self.rng.state()
    }
}

impl Default for PieceStream {
    fn default() -> Self {
        Self::new(1)
    }
}
