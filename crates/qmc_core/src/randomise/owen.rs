//! Nested uniform (Owen) scrambling of a base-2 digital net.
//!
//! Every digit of a code is flipped by a random bit that depends on the
//! dimension, the replication, the digit position and the already
//! scrambled digits above it. Points that share a leading block of digits
//! therefore keep sharing it after scrambling, which preserves the
//! equidistribution of the net at every resolution.

use rayon::prelude::*;
use tracing::debug;

use super::scramble_cache::scramble_code;
use super::{ensure_replications, randomised_precision, ScrambleCache, SeededRng};
use crate::sequences::DigitalNet;
use crate::traits::{
    ensure_single_replication, single, DigitalSequence, LowDiscrepancySequence, RandomisedSequence,
};
use crate::types::{CodeSet, FixedPointCode, PointSet, Result};

/// Owen-scrambled digital net with `r` independent replications.
///
/// Scramble bits are memoised in a [`ScrambleCache`] owned by the
/// randomiser. [`first_r_linear`](RandomisedSequence::first_r_linear) only
/// reads the cache, computing any missing bits on the fly, and returns the
/// same values the memoising path would.
///
/// # Examples
///
/// ```
/// use qmc_core::randomise::RandomOwenScramble;
/// use qmc_core::sequences::DigitalNet;
/// use qmc_core::traits::LowDiscrepancySequence;
///
/// let net = DigitalNet::<u64>::new(2).unwrap();
/// let mut owen = RandomOwenScramble::new(net, 1, Some(3)).unwrap();
/// let points = owen.next(16).unwrap();
///
/// // one point in every interval of width 1/16, per coordinate
/// let mut cells: Vec<usize> = points
///     .column(0)
///     .iter()
///     .map(|&x| (x * 16.0) as usize)
///     .collect();
/// cells.sort_unstable();
/// assert_eq!(cells, (0..16).collect::<Vec<_>>());
/// ```
#[derive(Clone, Debug)]
pub struct RandomOwenScramble<C: FixedPointCode = u64> {
    base: DigitalNet<C>,
    replications: usize,
    seed: u64,
    /// Precision of the scrambled codes.
    precision: u32,
    cache: ScrambleCache<C>,
}

impl<C: FixedPointCode> RandomOwenScramble<C> {
    /// Wraps `base` with `replications` independent scrambles.
    ///
    /// # Arguments
    ///
    /// * `base` - Digital net to scramble
    /// * `replications` - Number of independent replications, at least one
    /// * `seed` - Seed of the draws; `None` draws one from entropy
    ///
    /// # Errors
    ///
    /// `InvalidConfig` if `replications` is zero.
    pub fn new(base: DigitalNet<C>, replications: usize, seed: Option<u64>) -> Result<Self> {
        ensure_replications(replications)?;
        let mut rng = SeededRng::from_optional_seed(seed);
        let seeds = (0..replications).map(|_| rng.gen_seed()).collect();
        let precision = randomised_precision::<C>(base.precision());
        debug!(
            dimension = base.dimension(),
            replications,
            base_precision = base.precision(),
            precision,
            seed = rng.seed(),
            seeded = seed.is_some(),
            "initialised owen scramble"
        );
        Ok(Self {
            base,
            replications,
            seed: rng.seed(),
            precision,
            cache: ScrambleCache::new(seeds),
        })
    }

    /// The unscrambled net.
    #[inline]
    pub fn base(&self) -> &DigitalNet<C> {
        &self.base
    }

    /// Consumes the randomiser, returning the unscrambled net.
    pub fn into_base(self) -> DigitalNet<C> {
        self.base
    }

    /// Seed the replication seeds were drawn from.
    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// The memoised scramble trees.
    #[inline]
    pub fn cache(&self) -> &ScrambleCache<C> {
        &self.cache
    }

    /// Returns the next `n` scrambled codes of every replication.
    pub fn next_r_binary(&mut self, n: usize) -> Result<Vec<CodeSet<C>>> {
        let codes = self.base.next_binary(n)?;
        let (base, target) = (self.base.precision(), self.precision);
        let cache = &mut self.cache;
        Ok((0..self.replications)
            .map(|r| {
                codes.map_by_column(|j, code| {
                    scramble_code(&mut *cache, code, j as u32, r as u32, base, target)
                })
            })
            .collect())
    }

    /// Returns the first `2^log2_n` linear-order scrambled codes of every
    /// replication, without touching the cache.
    pub fn first_r_linear_binary(&self, log2_n: u32) -> Result<Vec<CodeSet<C>>> {
        let codes = self.base.first_linear_binary(log2_n)?;
        let (base, target) = (self.base.precision(), self.precision);
        let dimension = codes.dimension();
        let view = self.cache.view();
        Ok((0..self.replications)
            .map(|r| {
                let mut data = codes.as_slice().to_vec();
                data.par_chunks_mut(dimension).for_each(|row| {
                    let mut source = view;
                    for (j, code) in row.iter_mut().enumerate() {
                        *code = scramble_code(&mut source, *code, j as u32, r as u32, base, target);
                    }
                });
                CodeSet::from_vec(codes.n_points(), dimension, data)
            })
            .collect())
    }
}

impl<C: FixedPointCode> LowDiscrepancySequence for RandomOwenScramble<C> {
    fn name(&self) -> &'static str {
        "Digital Net B2 + Owen scramble"
    }

    fn dimension(&self) -> usize {
        self.base.dimension()
    }

    fn cursor(&self) -> u64 {
        self.base.cursor()
    }

    fn next(&mut self, n: usize) -> Result<PointSet> {
        let codes = self.next_binary(n)?;
        Ok(self.binary_to_float(&codes))
    }

    fn reset(&mut self) {
        self.base.reset();
    }

    fn skip(&mut self, n: u64) -> Result<()> {
        self.base.skip(n)
    }

    fn first_linear(&self, log2_n: u32) -> Result<PointSet> {
        let codes = self.first_linear_binary(log2_n)?;
        Ok(self.binary_to_float(&codes))
    }
}

impl<C: FixedPointCode> DigitalSequence<C> for RandomOwenScramble<C> {
    fn precision(&self) -> u32 {
        self.precision
    }

    fn next_binary(&mut self, n: usize) -> Result<CodeSet<C>> {
        ensure_single_replication(self.replications)?;
        single(self.next_r_binary(n)?)
    }

    fn first_linear_binary(&self, log2_n: u32) -> Result<CodeSet<C>> {
        ensure_single_replication(self.replications)?;
        single(self.first_r_linear_binary(log2_n)?)
    }
}

impl<C: FixedPointCode> RandomisedSequence for RandomOwenScramble<C> {
    fn replications(&self) -> usize {
        self.replications
    }

    fn next_r(&mut self, n: usize) -> Result<Vec<PointSet>> {
        let replicated = self.next_r_binary(n)?;
        Ok(replicated
            .iter()
            .map(|codes| self.binary_to_float(codes))
            .collect())
    }

    fn first_r_linear(&self, log2_n: u32) -> Result<Vec<PointSet>> {
        let replicated = self.first_r_linear_binary(log2_n)?;
        Ok(replicated
            .iter()
            .map(|codes| self.binary_to_float(codes))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scrambled(dimension: usize, replications: usize) -> RandomOwenScramble<u64> {
        let net = DigitalNet::new(dimension).unwrap();
        RandomOwenScramble::new(net, replications, Some(42)).unwrap()
    }

    fn sorted_rows(points: &PointSet) -> Vec<Vec<u64>> {
        let mut rows: Vec<Vec<u64>> = points
            .rows()
            .map(|row| row.iter().map(|x| x.to_bits()).collect())
            .collect();
        rows.sort();
        rows
    }

    #[test]
    fn test_stratification_preserved() {
        let mut owen = scrambled(4, 2);
        for points in owen.next_r(256).unwrap() {
            for j in 0..4 {
                let mut cells: Vec<usize> = points
                    .column(j)
                    .iter()
                    .map(|&x| (x * 256.0) as usize)
                    .collect();
                cells.sort_unstable();
                assert_eq!(cells, (0..256).collect::<Vec<_>>());
            }
        }
    }

    #[test]
    fn test_two_dimensional_elementary_intervals() {
        // the first two Sobol' coordinates form a (0, m, 2)-net; Owen
        // scrambling keeps one point per 1/4 x 1/16 box
        let mut owen = scrambled(2, 1);
        let points = owen.next(64).unwrap();
        let mut boxes: Vec<usize> = points
            .rows()
            .map(|row| (row[0] * 4.0) as usize * 16 + (row[1] * 16.0) as usize)
            .collect();
        boxes.sort_unstable();
        assert_eq!(boxes, (0..64).collect::<Vec<_>>());
    }

    #[test]
    fn test_linear_view_matches_memoised_path() {
        let mut owen = scrambled(3, 2);
        let before = owen.first_r_linear(5).unwrap();
        assert!(owen.cache().is_empty());

        let gray = owen.next_r(32).unwrap();
        let after = owen.first_r_linear(5).unwrap();
        assert_eq!(before, after);
        for (linear, gray) in after.iter().zip(&gray) {
            assert_eq!(sorted_rows(linear), sorted_rows(gray));
        }
    }

    #[test]
    fn test_additive_and_reproducible() {
        let mut owen = scrambled(3, 2);
        let whole = owen.next_r(40).unwrap();
        owen.reset();
        let head = owen.next_r(15).unwrap();
        let tail = owen.next_r(25).unwrap();
        for r in 0..2 {
            let mut joined = head[r].clone();
            joined.append_rows(&tail[r]);
            assert_eq!(joined, whole[r]);
        }
    }

    #[test]
    fn test_replications_differ() {
        let mut owen = scrambled(2, 2);
        let replicated = owen.next_r(8).unwrap();
        assert_ne!(replicated[0], replicated[1]);
    }

    #[test]
    fn test_first_point_is_randomised() {
        let mut owen = scrambled(3, 1);
        let first = owen.next(1).unwrap();
        assert!(first.row(0).iter().any(|&x| x != 0.0));
        assert_eq!(owen.precision(), 53);
    }
}
