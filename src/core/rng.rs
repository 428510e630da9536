//! RNG module - deterministic randomness for board generation and hints
//!
//! A simple LCG keeps rounds reproducible from a seed, which the tests rely
//! on heavily. `next_range` uses rejection sampling so the Fisher-Yates
//! shuffle stays unbiased: every ordering of the deck is equiprobable given
//! a uniform source.

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce a degenerate opening sequence
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod 2^32
        // Numerical Recipes constants: a=1664525, c=1013904223
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        // LCG low bits have short periods; fold the high bits in. The
        // xorshift is a bijection on u32, so uniformity is preserved.
        self.state ^ (self.state >> 16)
    }

    /// Generate a uniform value in `[0, max)` without modulo bias.
    ///
    /// Rejects draws from the incomplete final bucket and redraws. The
    /// rejection zone is tiny for the ranges used here (deck sizes <= 36),
    /// so this loops more than once almost never.
    pub fn next_range(&mut self, max: u32) -> u32 {
        debug_assert!(max > 0);
        let zone = u32::MAX - (u32::MAX % max);
        loop {
            let v = self.next_u32();
            if v < zone {
                return v % max;
            }
        }
    }

    /// Shuffle a slice using Fisher-Yates
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        for i in (1..slice.len()).rev() {
            let j = self.next_range((i + 1) as u32) as usize;
            slice.swap(i, j);
        }
    }

    /// Pick a uniformly random element index from a non-empty slice
    pub fn pick_index(&mut self, len: usize) -> usize {
        self.next_range(len as u32) as usize
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}
