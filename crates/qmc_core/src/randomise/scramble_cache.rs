//! Memoised random bits of nested (Owen) scrambling.
//!
//! Owen scrambling attaches one random flip bit to every node of a binary
//! tree per dimension and replication: the node at depth `k` is named by
//! the `k` already-scrambled leading digits of a code, and its bit decides
//! whether digit `k` is flipped. Each bit is a pure function of its
//! tree node and the replication seed, so caching only saves work and
//! never changes a result.

use std::collections::HashMap;

use super::seeding::mix_words;
use crate::types::FixedPointCode;

/// Node of a scramble tree.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub(crate) struct ScrambleKey {
    pub(crate) dimension: u32,
    pub(crate) replication: u32,
    /// Digit position, 0 = most significant.
    pub(crate) depth: u32,
    /// Scrambled digits above `depth`, most significant first.
    pub(crate) prefix: u128,
}

impl ScrambleKey {
    fn words(&self) -> [u64; 4] {
        [
            ((self.dimension as u64) << 32) | self.replication as u64,
            self.depth as u64,
            self.prefix as u64,
            (self.prefix >> 64) as u64,
        ]
    }
}

/// Lazily populated scramble trees of every dimension and replication.
///
/// Below the base precision each node holds a flip bit. The digits between
/// the base precision and the randomised precision carry no information
/// from the base net, so each leaf of the informative tree holds a whole
/// random tail word instead of a chain of single bits.
#[derive(Clone, Debug, Default)]
pub struct ScrambleCache<C: FixedPointCode = u64> {
    /// One seed per replication.
    seeds: Vec<u64>,
    flips: HashMap<ScrambleKey, bool>,
    /// Tail words keyed by leaf and width.
    tails: HashMap<(ScrambleKey, u32), C>,
}

impl<C: FixedPointCode> ScrambleCache<C> {
    /// Creates an empty cache for one replication per seed.
    pub fn new(seeds: Vec<u64>) -> Self {
        Self {
            seeds,
            flips: HashMap::new(),
            tails: HashMap::new(),
        }
    }

    /// Number of replications.
    #[inline]
    pub fn replications(&self) -> usize {
        self.seeds.len()
    }

    /// Number of memoised nodes.
    pub fn len(&self) -> usize {
        self.flips.len() + self.tails.len()
    }

    /// True when nothing has been memoised yet.
    pub fn is_empty(&self) -> bool {
        self.flips.is_empty() && self.tails.is_empty()
    }

    /// Flip bit of `key`, memoised on first access.
    ///
    /// `key.replication` must be below [`Self::replications`].
    pub(crate) fn flip(&mut self, key: ScrambleKey) -> bool {
        let seed = self.seeds[key.replication as usize];
        *self
            .flips
            .entry(key)
            .or_insert_with(|| draw_flip(seed, &key))
    }

    /// Random tail of `bits` digits below the leaf `key`, memoised on first
    /// access. A narrower tail is the leading part of a wider one.
    pub(crate) fn tail(&mut self, key: ScrambleKey, bits: u32) -> C {
        let seed = self.seeds[key.replication as usize];
        *self
            .tails
            .entry((key, bits))
            .or_insert_with(|| draw_tail(seed, &key, bits))
    }

    /// Read-only view that computes missing nodes without storing them.
    pub(crate) fn view(&self) -> CacheView<'_, C> {
        CacheView { cache: self }
    }
}

/// Source of scramble bits; either the memoising cache or a read-only view.
pub(crate) trait ScrambleSource<C: FixedPointCode> {
    fn flip(&mut self, key: ScrambleKey) -> bool;
    fn tail(&mut self, key: ScrambleKey, bits: u32) -> C;
}

impl<C: FixedPointCode> ScrambleSource<C> for ScrambleCache<C> {
    #[inline]
    fn flip(&mut self, key: ScrambleKey) -> bool {
        ScrambleCache::flip(self, key)
    }

    #[inline]
    fn tail(&mut self, key: ScrambleKey, bits: u32) -> C {
        ScrambleCache::tail(self, key, bits)
    }
}

#[derive(Clone, Copy)]
pub(crate) struct CacheView<'a, C: FixedPointCode> {
    cache: &'a ScrambleCache<C>,
}

impl<C: FixedPointCode> ScrambleSource<C> for CacheView<'_, C> {
    #[inline]
    fn flip(&mut self, key: ScrambleKey) -> bool {
        match self.cache.flips.get(&key) {
            Some(&bit) => bit,
            None => draw_flip(self.cache.seeds[key.replication as usize], &key),
        }
    }

    #[inline]
    fn tail(&mut self, key: ScrambleKey, bits: u32) -> C {
        match self.cache.tails.get(&(key, bits)) {
            Some(&tail) => tail,
            None => draw_tail(self.cache.seeds[key.replication as usize], &key, bits),
        }
    }
}

fn draw_flip(seed: u64, key: &ScrambleKey) -> bool {
    mix_words(seed, &key.words()) & 1 == 1
}

fn draw_tail<C: FixedPointCode>(seed: u64, key: &ScrambleKey, bits: u32) -> C {
    if bits == 0 {
        return C::zero();
    }
    // tails are keyed apart from flips by an out-of-range depth tag
    let mut words = key.words();
    words[1] |= 1 << 32;
    let high = mix_words(seed, &words);
    words[1] |= 1 << 33;
    let low = mix_words(seed, &words);
    let wide = ((high as u128) << 64) | low as u128;
    C::from_u128_truncated(wide >> (128 - bits))
}

/// Scrambles a code of precision `base` into one of precision `target`.
///
/// Digit `k < base` is flipped by the node named by the scrambled digits
/// above it; the remaining `target - base` digits come from the tail of
/// the leaf reached.
pub(crate) fn scramble_code<C, S>(
    source: &mut S,
    code: C,
    dimension: u32,
    replication: u32,
    base: u32,
    target: u32,
) -> C
where
    C: FixedPointCode,
    S: ScrambleSource<C>,
{
    let mut prefix: u128 = 0;
    for depth in 0..base {
        let flip = source.flip(ScrambleKey {
            dimension,
            replication,
            depth,
            prefix,
        });
        let digit = code.bit(base - 1 - depth) ^ flip;
        prefix = (prefix << 1) | digit as u128;
    }
    let scrambled = C::from_u128_truncated(prefix);
    let tail_bits = target - base;
    if tail_bits == 0 {
        return scrambled;
    }
    let tail = source.tail(
        ScrambleKey {
            dimension,
            replication,
            depth: base,
            prefix,
        },
        tail_bits,
    );
    if base == 0 {
        tail
    } else {
        (scrambled << tail_bits as usize) | tail
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(depth: u32, prefix: u128) -> ScrambleKey {
        ScrambleKey {
            dimension: 1,
            replication: 0,
            depth,
            prefix,
        }
    }

    #[test]
    fn test_memoised_and_view_agree() {
        let mut cache = ScrambleCache::<u64>::new(vec![17, 18]);
        let mut view_cache = ScrambleCache::<u64>::new(vec![17, 18]);
        let mut view = view_cache.view();
        for depth in 0..8 {
            for prefix in 0..(1u128 << depth) {
                assert_eq!(
                    cache.flip(key(depth, prefix)),
                    view.flip(key(depth, prefix))
                );
            }
        }
        assert_eq!(cache.tail(key(8, 3), 21), view.tail(key(8, 3), 21));
        assert!(!cache.is_empty());
        assert!(view_cache.is_empty());
        view_cache.flip(key(0, 0));
        assert_eq!(view_cache.len(), 1);
    }

    #[test]
    fn test_access_order_is_irrelevant() {
        let mut forward = ScrambleCache::<u64>::new(vec![5]);
        let mut backward = ScrambleCache::<u64>::new(vec![5]);
        let keys: Vec<_> = (0..64).map(|p| key(6, p)).collect();
        let a: Vec<bool> = keys.iter().map(|&k| forward.flip(k)).collect();
        let mut b: Vec<bool> = keys.iter().rev().map(|&k| backward.flip(k)).collect();
        b.reverse();
        assert_eq!(a, b);
    }

    #[test]
    fn test_flips_are_balanced() {
        let mut cache = ScrambleCache::<u64>::new(vec![99]);
        let ones = (0..4096u128).filter(|&p| cache.flip(key(12, p))).count();
        assert!((1800..2300).contains(&ones), "ones = {}", ones);
    }

    #[test]
    fn test_tail_width() {
        let mut cache = ScrambleCache::<u64>::new(vec![1]);
        for p in 0..32 {
            assert!(cache.tail(key(32, p), 21) < 1 << 21);
        }
        assert_eq!(cache.tail(key(32, 0), 0), 0);
    }

    #[test]
    fn test_tail_memo_is_keyed_by_width() {
        let mut warmed = ScrambleCache::<u64>::new(vec![1]);
        let mut fresh = ScrambleCache::<u64>::new(vec![1]);
        let wide = warmed.tail(key(32, 7), 21);
        let narrow = warmed.tail(key(32, 7), 8);
        assert_eq!(narrow, fresh.tail(key(32, 7), 8));
        assert_eq!(narrow, wide >> 13);
        assert_eq!(warmed.view().tail(key(32, 7), 8), narrow);
        assert_eq!(fresh.view().tail(key(32, 7), 21), wide);
    }

    #[test]
    fn test_shared_prefix_shares_scrambled_prefix() {
        let mut cache = ScrambleCache::<u64>::new(vec![3]);
        // codes agreeing in their top 5 of 8 digits
        let a = scramble_code(&mut cache, 0b1011_0010u64, 0, 0, 8, 8);
        let b = scramble_code(&mut cache, 0b1011_0111u64, 0, 0, 8, 8);
        assert_eq!(a >> 3, b >> 3);
        assert_ne!(a, b);
    }

    #[test]
    fn test_scramble_is_a_bijection_at_each_depth() {
        let mut cache = ScrambleCache::<u64>::new(vec![11]);
        let mut images: Vec<u64> = (0..256u64)
            .map(|code| scramble_code(&mut cache, code, 2, 0, 8, 8))
            .collect();
        images.sort_unstable();
        assert_eq!(images, (0..256).collect::<Vec<u64>>());
    }

    #[test]
    fn test_widened_code_keeps_scrambled_prefix() {
        let mut cache = ScrambleCache::<u64>::new(vec![4]);
        let narrow = scramble_code(&mut cache, 0b1101u64, 0, 0, 4, 4);
        let wide = scramble_code(&mut cache, 0b1101u64, 0, 0, 4, 53);
        assert_eq!(wide >> 49, narrow);
    }
}
