//! Seeded pseudo-random source
//!
//! The Park-Miller minimal standard generator, stepped with Schrage's
//! method so every product fits in 32 bits, and reduced to 15 bits per draw
//! the way the AVR C library's `rand()` does. The seed comes from
//! configuration and is the same on every boot, so the word sequence after
//! power-up is fixed for a given seed.

/// Seed used when the configuration does not set one
pub const DEFAULT_SEED: u32 = 67;

/// Largest value returned by [`Rng::next_raw`]
pub const RAND_MAX: u32 = 0x7FFF;

/// Substitute for a zero state, which is a fixed point of the generator
const ZERO_SEED_REPLACEMENT: u32 = 123_459_876;

const MULTIPLIER: i64 = 16_807;
const MODULUS: i64 = 0x7FFF_FFFF;
// MODULUS = MULTIPLIER * QUOTIENT + REMAINDER
const QUOTIENT: i64 = 127_773;
const REMAINDER: i64 = 2_836;

/// Minimal standard generator
#[derive(Debug, Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Rng {
    state: u32,
}

impl Default for Rng {
    fn default() -> Self {
        Self::new(DEFAULT_SEED)
    }
}

impl Rng {
    /// Create a generator from a seed
    pub fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    /// Next value in `0..=RAND_MAX`
    pub fn next_raw(&mut self) -> u32 {
        let mut x = i64::from(self.state);
        if x == 0 {
            x = i64::from(ZERO_SEED_REPLACEMENT);
        }
        let hi = x / QUOTIENT;
        let lo = x % QUOTIENT;
        x = MULTIPLIER * lo - REMAINDER * hi;
        if x < 0 {
            x += MODULUS;
        }
        // 0 <= x < MODULUS here, so the state stays within 31 bits
        self.state = x as u32;
        self.state % (RAND_MAX + 1)
    }

    /// Index in `0..bound`
    ///
    /// Divides the draw into `bound` equal buckets of `RAND_MAX / bound + 1`
    /// values. Every index is reachable while `bound <= RAND_MAX + 1`.
    /// Returns 0 when `bound` is 0.
    pub fn below(&mut self, bound: usize) -> usize {
        if bound == 0 {
            return 0;
        }
        let bound = bound.min(RAND_MAX as usize + 1) as u32;
        (self.next_raw() / (RAND_MAX / bound + 1)) as usize
    }
}
