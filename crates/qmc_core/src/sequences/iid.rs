//! Independent uniform baseline.

use tracing::{debug, trace};

use super::{ensure_capacity, linear_point_count};
use crate::randomise::SeededRng;
use crate::tables::ensure_dimension;
use crate::traits::LowDiscrepancySequence;
use crate::types::{PointSet, Result};

/// Independent uniform points from a seeded PRNG.
///
/// Shares the generator contract with the low-discrepancy sequences so
/// that plain Monte Carlo can be compared against them. `reset` replays
/// the stream from its seed.
///
/// # Examples
///
/// ```
/// use qmc_core::sequences::IidUniform;
/// use qmc_core::traits::LowDiscrepancySequence;
///
/// let mut iid = IidUniform::new(3, Some(7)).unwrap();
/// let first = iid.next(10).unwrap();
/// iid.reset();
/// assert_eq!(iid.next(10).unwrap(), first);
/// ```
#[derive(Clone, Debug)]
pub struct IidUniform {
    dimension: usize,
    rng: SeededRng,
    cursor: u64,
}

impl IidUniform {
    /// Creates the baseline; without a seed one is drawn from entropy and
    /// remembered.
    ///
    /// # Arguments
    ///
    /// * `dimension` - Number of coordinates per point
    /// * `seed` - Seed of the stream; `None` draws one from entropy
    pub fn new(dimension: usize, seed: Option<u64>) -> Result<Self> {
        ensure_dimension(dimension)?;
        let rng = SeededRng::from_optional_seed(seed);
        debug!(
            dimension,
            seed = rng.seed(),
            seeded = seed.is_some(),
            "initialised iid uniform"
        );
        Ok(Self {
            dimension,
            rng,
            cursor: 0,
        })
    }

    /// Seed of the underlying stream.
    #[inline]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }
}

impl LowDiscrepancySequence for IidUniform {
    fn name(&self) -> &'static str {
        "IID U01"
    }

    fn dimension(&self) -> usize {
        self.dimension
    }

    fn cursor(&self) -> u64 {
        self.cursor
    }

    fn next(&mut self, n: usize) -> Result<PointSet> {
        ensure_capacity(self.cursor, n as u128, u64::MAX as u128)?;
        trace!(start = self.cursor, n, "iid batch");
        let mut data = vec![0.0; n * self.dimension];
        self.rng.fill_uniform(&mut data);
        self.cursor += n as u64;
        Ok(PointSet::from_vec(n, self.dimension, data))
    }

    fn reset(&mut self) {
        self.rng.reseed();
        self.cursor = 0;
    }

    fn skip(&mut self, n: u64) -> Result<()> {
        ensure_capacity(self.cursor, n as u128, u64::MAX as u128)?;
        for _ in 0..n.saturating_mul(self.dimension as u64) {
            self.rng.gen_uniform();
        }
        self.cursor += n;
        Ok(())
    }

    fn first_linear(&self, log2_n: u32) -> Result<PointSet> {
        let n = linear_point_count(log2_n)?;
        let mut rng = SeededRng::from_seed(self.seed());
        let mut data = vec![0.0; n * self.dimension];
        rng.fill_uniform(&mut data);
        Ok(PointSet::from_vec(n, self.dimension, data))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_and_shape() {
        let mut iid = IidUniform::new(4, Some(1)).unwrap();
        let points = iid.next(100).unwrap();
        assert_eq!(points.shape(), (100, 4));
        assert!(points.as_slice().iter().all(|&x| (0.0..1.0).contains(&x)));
    }

    #[test]
    fn test_first_linear_is_stream_prefix() {
        let mut iid = IidUniform::new(2, Some(99)).unwrap();
        iid.next(3).unwrap();
        let linear = iid.first_linear(4).unwrap();
        iid.reset();
        assert_eq!(iid.next(16).unwrap(), linear);
    }

    #[test]
    fn test_skip_discards_rows() {
        let mut walked = IidUniform::new(3, Some(5)).unwrap();
        walked.next(10).unwrap();
        let expected = walked.next(4).unwrap();

        let mut jumped = IidUniform::new(3, Some(5)).unwrap();
        jumped.skip(10).unwrap();
        assert_eq!(jumped.cursor(), 10);
        assert_eq!(jumped.next(4).unwrap(), expected);
    }

    #[test]
    fn test_unseeded_reset_reproduces() {
        let mut iid = IidUniform::new(2, None).unwrap();
        let first = iid.next(8).unwrap();
        iid.reset();
        assert_eq!(iid.next(8).unwrap(), first);
    }

    #[test]
    fn test_zero_dimension_rejected() {
        assert!(IidUniform::new(0, Some(1)).is_err());
    }
}
