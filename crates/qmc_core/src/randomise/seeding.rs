//! Seeded pseudo-random source for randomisation parameters.
//!
//! [`SeededRng`] wraps `StdRng` together with the seed that produced it, so
//! a randomiser built without an explicit seed still knows (and can log)
//! the seed it ended up with. Keyed draws for Owen scrambling use
//! a SplitMix64 key mix instead, as they must not depend on draw order.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::types::FixedPointCode;

/// Reproducible random source for shifts, scramble seeds and the IID
/// baseline.
///
/// # Examples
///
/// ```
/// use qmc_core::randomise::SeededRng;
///
/// let mut a = SeededRng::from_seed(42);
/// let mut b = SeededRng::from_seed(42);
/// assert_eq!(a.gen_uniform(), b.gen_uniform());
/// assert_eq!(a.seed(), 42);
/// ```
#[derive(Clone, Debug)]
pub struct SeededRng {
    inner: StdRng,
    /// The seed used for initialisation.
    seed: u64,
}

impl SeededRng {
    /// Creates a generator initialised with `seed`.
    ///
    /// # Arguments
    ///
    /// * `seed` - 64-bit seed; equal seeds give equal streams
    #[inline]
    pub fn from_seed(seed: u64) -> Self {
        Self {
            inner: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    /// Creates a generator from a seed drawn from operating-system entropy.
    ///
    /// The drawn seed is kept, so [`seed`](Self::seed) still reproduces the
    /// stream.
    pub fn from_entropy() -> Self {
        let seed = StdRng::from_entropy().gen();
        Self::from_seed(seed)
    }

    /// Uses `seed` when given, entropy otherwise.
    pub fn from_optional_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::from_seed(seed),
            None => Self::from_entropy(),
        }
    }

    /// Returns the seed used for initialisation.
    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Rewinds the stream to its first draw.
    pub fn reseed(&mut self) {
        self.inner = StdRng::seed_from_u64(self.seed);
    }

    /// Generates a single uniform value in `[0, 1)`.
    #[inline]
    pub fn gen_uniform(&mut self) -> f64 {
        self.inner.gen()
    }

    /// Fills the buffer with uniform values in `[0, 1)`.
    #[inline]
    pub fn fill_uniform(&mut self, buffer: &mut [f64]) {
        for value in buffer.iter_mut() {
            *value = self.inner.gen();
        }
    }

    /// Draws a code uniformly over `[0, 2^bits)`.
    #[inline]
    pub fn gen_code<C: FixedPointCode>(&mut self, bits: u32) -> C {
        C::random_bits(&mut self.inner, bits)
    }

    /// Draws a fresh 64-bit seed for a dependent stream.
    #[inline]
    pub fn gen_seed(&mut self) -> u64 {
        self.inner.gen()
    }
}

/// SplitMix64 finaliser.
#[inline]
pub(crate) fn splitmix64(x: u64) -> u64 {
    let mut z = x.wrapping_add(0x9e3779b97f4a7c15);
    z = (z ^ (z >> 30)).wrapping_mul(0xbf58476d1ce4e5b9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94d049bb133111eb);
    z ^ (z >> 31)
}

/// Hashes `words` under `seed` into one 64-bit value.
///
/// Each word is folded in through a full SplitMix64 round, so keys that
/// differ in any word give unrelated outputs.
#[inline]
pub(crate) fn mix_words(seed: u64, words: &[u64]) -> u64 {
    words
        .iter()
        .fold(splitmix64(seed), |state, &word| splitmix64(state ^ word))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_stream() {
        let mut a = SeededRng::from_seed(12345);
        let mut b = SeededRng::from_seed(12345);
        let mut xs = vec![0.0; 64];
        let mut ys = vec![0.0; 64];
        a.fill_uniform(&mut xs);
        b.fill_uniform(&mut ys);
        assert_eq!(xs, ys);
        assert!(xs.iter().all(|&x| (0.0..1.0).contains(&x)));
    }

    #[test]
    fn test_reseed_rewinds() {
        let mut rng = SeededRng::from_seed(7);
        let first = rng.gen_seed();
        rng.gen_uniform();
        rng.reseed();
        assert_eq!(rng.gen_seed(), first);
    }

    #[test]
    fn test_entropy_seed_is_remembered() {
        let mut drawn = SeededRng::from_optional_seed(None);
        let mut replay = SeededRng::from_seed(drawn.seed());
        assert_eq!(drawn.gen_seed(), replay.gen_seed());
    }

    #[test]
    fn test_gen_code_width() {
        let mut rng = SeededRng::from_seed(3);
        for _ in 0..256 {
            assert!(rng.gen_code::<u64>(53) < 1 << 53);
            assert!(rng.gen_code::<u32>(5) < 32);
        }
    }

    #[test]
    fn test_splitmix64_reference_values() {
        // first outputs of the SplitMix64 stream seeded with 0
        assert_eq!(splitmix64(0), 0xe220a8397b1dcdaf);
        assert_eq!(splitmix64(0x9e3779b97f4a7c15), 0x6e789e6aa1b965f4);
    }

    #[test]
    fn test_mix_words_is_key_sensitive() {
        let base = mix_words(1, &[0, 0, 0]);
        assert_ne!(base, mix_words(2, &[0, 0, 0]));
        assert_ne!(base, mix_words(1, &[0, 0, 1]));
        assert_ne!(base, mix_words(1, &[1, 0, 0]));
        assert_eq!(base, mix_words(1, &[0, 0, 0]));
    }
}
