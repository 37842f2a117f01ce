//! PCG32 pseudo-random number generator.
//!
//! Backs every "Seed" control and "Randomize" action in the Auriga tools.
//! The same seed always reproduces the same sequence, so a random patch
//! variation can be recalled, shared, or batch-rendered exactly.

use crate::error::PcgError;

/// LCG multiplier for the 64-bit state. Shared by every independent PCG32
/// implementation; changing it desynchronizes all saved seeds.
const MULTIPLIER: u64 = 0x5851_F42D_4C95_7F2D;

/// Default increment, stored form (already odd). Used when a caller seeds
/// without selecting a stream.
const DEFAULT_INCREMENT: u64 = 0x1405_7B7E_F767_814F;

/// One LCG step, modulo 2^64.
#[inline(always)]
const fn lcg_step(state: u64, increment: u64) -> u64 {
    state.wrapping_mul(MULTIPLIER).wrapping_add(increment)
}

/// Warm-up seeding: step once from zero, mix in the seed, step again.
///
/// Setting `state = seed` directly produces poorly mixed first outputs and
/// must not be used.
const fn seeded(seed: u64, increment: u64) -> u64 {
    let mut state: u64 = 0;
    state = lcg_step(state, increment);
    state = state.wrapping_add(seed);
    lcg_step(state, increment)
}

/// PCG32 pseudo-random number generator (PCG-XSH-RR).
///
/// # Properties
///
/// - 64-bit state, 32-bit output, period 2^64
/// - Selectable odd 64-bit increment ("stream"); different streams give
///   statistically independent sequences from the same multiplier
/// - Deterministic: same seed produces same sequence
/// - State exports as four 32-bit words and re-imports verbatim, so a
///   sequence can be checkpointed and resumed exactly
/// - Copy/Clone for real-time safety
///
/// Not cryptographically secure.
///
/// # Example
///
/// ```rust
/// use auriga_random::Pcg32;
///
/// let mut rng = Pcg32::new(1234);
/// let raw = rng.next_u32();
/// let dice = rng.integer(6);
/// let unit = rng.number();
/// assert!(dice < 6);
/// assert!((0.0..1.0).contains(&unit));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pcg32 {
    state: u64,
    increment: u64,
}

impl Pcg32 {
    /// Create a generator from a 64-bit seed, using the default stream.
    pub const fn new(seed: u64) -> Self {
        Self {
            state: seeded(seed, DEFAULT_INCREMENT),
            increment: DEFAULT_INCREMENT,
        }
    }

    /// Create a generator from a 64-bit seed and stream selector.
    ///
    /// The stored increment is `(stream << 1) | 1`, which keeps it odd as
    /// the LCG requires for full period.
    pub const fn with_stream(seed: u64, stream: u64) -> Self {
        let increment = (stream << 1) | 1;
        Self {
            state: seeded(seed, increment),
            increment,
        }
    }

    /// Create a generator from a seed given as two 32-bit halves.
    ///
    /// Preset files store 64-bit values as word pairs; this avoids callers
    /// having to reassemble them.
    pub const fn from_parts(seed_lo: u32, seed_hi: u32) -> Self {
        Self::new(((seed_hi as u64) << 32) | seed_lo as u64)
    }

    /// Create a generator from seed and stream, each given as two 32-bit
    /// halves. The stream transform of [`Pcg32::with_stream`] applies, with
    /// the carry from `inc_lo` into `inc_hi` handled by the 64-bit shift.
    pub const fn from_parts_with_stream(
        seed_lo: u32,
        seed_hi: u32,
        inc_lo: u32,
        inc_hi: u32,
    ) -> Self {
        Self::with_stream(
            ((seed_hi as u64) << 32) | seed_lo as u64,
            ((inc_hi as u64) << 32) | inc_lo as u64,
        )
    }

    /// Restore a generator from a state array previously returned by
    /// [`Pcg32::get_state`].
    ///
    /// # Errors
    ///
    /// Returns [`PcgError::InvalidState`] unless `words` has exactly four
    /// elements. A corrupt preset must be rejected, not truncated or padded.
    pub fn from_state(words: &[u32]) -> Result<Self, PcgError> {
        let mut rng = Self {
            state: 0,
            increment: DEFAULT_INCREMENT,
        };
        rng.set_state(words)?;
        Ok(rng)
    }

    /// Re-seed in place, keeping the current increment.
    pub fn set_seed(&mut self, seed: u64) {
        self.state = seeded(seed, self.increment);
    }

    /// Re-seed in place and select a new stream.
    pub fn set_seed_with_stream(&mut self, seed: u64, stream: u64) {
        self.increment = (stream << 1) | 1;
        self.state = seeded(seed, self.increment);
    }

    /// Export the internal state as `[state_lo, state_hi, inc_lo, inc_hi]`.
    ///
    /// This is the generator's only serialized form; feeding it back through
    /// [`Pcg32::set_state`] resumes the sequence exactly.
    pub fn get_state(&self) -> [u32; 4] {
        [
            self.state as u32,
            (self.state >> 32) as u32,
            self.increment as u32,
            (self.increment >> 32) as u32,
        ]
    }

    /// Restore the internal state from an array returned by
    /// [`Pcg32::get_state`].
    ///
    /// The increment's low bit is forced to 1 on restore; a validly exported
    /// state already satisfies this.
    ///
    /// # Errors
    ///
    /// Returns [`PcgError::InvalidState`] unless `words` has exactly four
    /// elements.
    pub fn set_state(&mut self, words: &[u32]) -> Result<(), PcgError> {
        if words.len() != 4 {
            return Err(PcgError::InvalidState { len: words.len() });
        }
        self.state = ((words[1] as u64) << 32) | words[0] as u64;
        self.increment = (((words[3] as u64) << 32) | words[2] as u64) | 1;
        Ok(())
    }

    /// Generate the next random u32.
    ///
    /// Advances the LCG one step and permutes the pre-step state with
    /// XSH-RR (xorshift, then random rotate). The output must come from the
    /// state as it was before the step.
    ///
    /// Do not reduce this with `%` to get a bounded value; that biases
    /// toward low numbers. Use [`Pcg32::integer`] instead.
    #[inline(always)]
    pub fn next_u32(&mut self) -> u32 {
        let old = self.state;
        self.state = lcg_step(old, self.increment);

        let xorshifted = (((old >> 18) ^ old) >> 27) as u32;
        let rot = (old >> 59) as u32;
        xorshifted.rotate_right(rot)
    }

    /// Generate a uniformly distributed integer in `[0, max)`.
    ///
    /// `max == 0` means "unrestricted" and returns a raw [`Pcg32::next_u32`]
    /// value. Power-of-two bounds are served by masking; any other bound
    /// uses rejection sampling, which stays unbiased and rarely loops more
    /// than twice.
    pub fn integer(&mut self, max: u32) -> u32 {
        if max == 0 {
            return self.next_u32();
        }
        if max.is_power_of_two() {
            // Masking is unbiased only for power-of-two bounds.
            return self.next_u32() & (max - 1);
        }
        let skew = max.wrapping_neg() % max;
        loop {
            let candidate = self.next_u32();
            if candidate >= skew {
                return candidate % max;
            }
        }
    }

    /// Generate a uniformly distributed f64 in `[0, 1)`.
    ///
    /// Consumes exactly two [`Pcg32::next_u32`] draws and fills all 53
    /// mantissa bits: 26 from the first draw, 27 from the second. Callers
    /// relying on call-count parity for reproducibility depend on the fixed
    /// draw count.
    pub fn number(&mut self) -> f64 {
        const BIT_27: f64 = 134217728.0; // 2^27
        const BIT_53: f64 = 9007199254740992.0; // 2^53
        let hi = (self.next_u32() & 0x03FF_FFFF) as f64;
        let lo = (self.next_u32() & 0x07FF_FFFF) as f64;
        (hi * BIT_27 + lo) / BIT_53
    }

    /// Generate a random f32 in [-1.0, 1.0].
    ///
    /// Uses the high 24 bits for better distribution.
    #[inline(always)]
    pub fn next_f32(&mut self) -> f32 {
        let value = self.next_u32();
        let normalized = ((value >> 8) as f32) / 16_777_215.0;
        normalized * 2.0 - 1.0
    }

    /// Generate a random f32 in [0.0, 1.0].
    #[inline(always)]
    pub fn next_f32_unipolar(&mut self) -> f32 {
        let value = self.next_u32();
        ((value >> 8) as f32) / 16_777_215.0
    }
}

impl Default for Pcg32 {
    fn default() -> Self {
        Self::new(0x1234_5678)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_sequence() {
        let mut a = Pcg32::new(42);
        let mut b = Pcg32::new(42);
        for _ in 0..100 {
            assert_eq!(a.next_u32(), b.next_u32());
        }
    }

    #[test]
    fn different_seeds_differ() {
        let mut a = Pcg32::new(1);
        let mut b = Pcg32::new(2);
        assert_ne!(a.next_u32(), b.next_u32());
    }

    #[test]
    fn different_streams_differ() {
        let mut a = Pcg32::with_stream(1, 0);
        let mut b = Pcg32::with_stream(1, 1);
        assert_ne!(a.next_u32(), b.next_u32());
    }

    #[test]
    fn copy_semantics() {
        let mut a = Pcg32::new(12345);
        let _ = a.next_u32();
        let mut b = a; // Copy
        assert_eq!(a.next_u32(), b.next_u32());
    }

    #[test]
    fn default_stream_words() {
        let words = Pcg32::new(1).get_state();
        assert_eq!(words[2], 0xf767_814f);
        assert_eq!(words[3], 0x1405_7b7e);
    }

    #[test]
    fn next_f32_in_range() {
        let mut rng = Pcg32::new(12345);
        for _ in 0..1000 {
            let value = rng.next_f32();
            assert!((-1.0..=1.0).contains(&value), "value {} out of range", value);
        }
    }

    #[test]
    fn next_f32_unipolar_in_range() {
        let mut rng = Pcg32::new(12345);
        for _ in 0..1000 {
            let value = rng.next_f32_unipolar();
            assert!((0.0..=1.0).contains(&value), "value {} out of range", value);
        }
    }
}
