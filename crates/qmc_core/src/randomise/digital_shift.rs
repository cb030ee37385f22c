//! Random digital shift of a base-2 digital net.

use tracing::debug;

use super::{ensure_replications, randomised_precision, widen_code, SeededRng};
use crate::sequences::DigitalNet;
use crate::traits::{
    ensure_single_replication, single, DigitalSequence, LowDiscrepancySequence, RandomisedSequence,
};
use crate::types::{CodeSet, FixedPointCode, PointSet, Result};

/// Digital net whose codes are XORed with one random code per dimension
/// and replication.
///
/// The shifts are drawn once at construction, dimension-major with the
/// replication index varying fastest, from a [`SeededRng`].
///
/// # Examples
///
/// ```
/// use qmc_core::randomise::RandomDigitalShift;
/// use qmc_core::sequences::DigitalNet;
/// use qmc_core::traits::RandomisedSequence;
///
/// let net = DigitalNet::<u64>::new(3).unwrap();
/// let mut shifted = RandomDigitalShift::new(net, 4, Some(7)).unwrap();
/// let replications = shifted.next_r(16).unwrap();
/// assert_eq!(replications.len(), 4);
/// assert_eq!(replications[0].shape(), (16, 3));
/// ```
#[derive(Clone, Debug)]
pub struct RandomDigitalShift<C: FixedPointCode = u64> {
    base: DigitalNet<C>,
    replications: usize,
    seed: u64,
    /// Precision of the shifted codes.
    precision: u32,
    /// `shifts[j * replications + r]` for dimension `j`, replication `r`.
    shifts: Vec<C>,
}

impl<C: FixedPointCode> RandomDigitalShift<C> {
    /// Wraps `base` with `replications` independent digital shifts.
    ///
    /// # Arguments
    ///
    /// * `base` - Digital net to shift
    /// * `replications` - Number of independent replications, at least one
    /// * `seed` - Seed of the draws; `None` draws one from entropy
    ///
    /// # Errors
    ///
    /// `InvalidConfig` if `replications` is zero.
    pub fn new(base: DigitalNet<C>, replications: usize, seed: Option<u64>) -> Result<Self> {
        ensure_replications(replications)?;
        let mut rng = SeededRng::from_optional_seed(seed);
        let precision = randomised_precision::<C>(base.precision());
        let shifts = (0..base.dimension() * replications)
            .map(|_| rng.gen_code::<C>(precision))
            .collect();
        debug!(
            dimension = base.dimension(),
            replications,
            precision,
            seed = rng.seed(),
            seeded = seed.is_some(),
            "initialised digital shift"
        );
        Ok(Self {
            base,
            replications,
            seed: rng.seed(),
            precision,
            shifts,
        })
    }

    /// The unrandomised net.
    #[inline]
    pub fn base(&self) -> &DigitalNet<C> {
        &self.base
    }

    /// Consumes the randomiser, returning the unrandomised net.
    pub fn into_base(self) -> DigitalNet<C> {
        self.base
    }

    /// Seed the shifts were drawn from.
    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Shift applied to `dimension` in `replication`.
    #[inline]
    pub fn shift(&self, dimension: usize, replication: usize) -> C {
        self.shifts[dimension * self.replications + replication]
    }

    /// Returns the next `n` shifted codes of every replication.
    pub fn next_r_binary(&mut self, n: usize) -> Result<Vec<CodeSet<C>>> {
        let codes = self.base.next_binary(n)?;
        Ok(self.apply(&codes))
    }

    /// Returns the first `2^log2_n` linear-order shifted codes of every
    /// replication.
    pub fn first_r_linear_binary(&self, log2_n: u32) -> Result<Vec<CodeSet<C>>> {
        let codes = self.base.first_linear_binary(log2_n)?;
        Ok(self.apply(&codes))
    }

    fn apply(&self, codes: &CodeSet<C>) -> Vec<CodeSet<C>> {
        let base_precision = self.base.precision();
        (0..self.replications)
            .map(|r| {
                codes.map_by_column(|j, code| {
                    widen_code(code, base_precision, self.precision) ^ self.shift(j, r)
                })
            })
            .collect()
    }
}

impl<C: FixedPointCode> LowDiscrepancySequence for RandomDigitalShift<C> {
    fn name(&self) -> &'static str {
        "Digital Net B2 + digital shift"
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

impl<C: FixedPointCode> DigitalSequence<C> for RandomDigitalShift<C> {
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

impl<C: FixedPointCode> RandomisedSequence for RandomDigitalShift<C> {
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
    use crate::types::QmcError;

    fn shifted(replications: usize) -> RandomDigitalShift<u64> {
        RandomDigitalShift::new(DigitalNet::new(4).unwrap(), replications, Some(2024)).unwrap()
    }

    #[test]
    fn test_precision_widened() {
        let randomiser = shifted(1);
        assert_eq!(randomiser.precision(), 53);
        assert!(randomiser.shifts.iter().all(|&s| s < 1 << 53));
    }

    #[test]
    fn test_shift_is_xor_of_widened_code() {
        let mut randomiser = shifted(2);
        let mut base = DigitalNet::<u64>::new(4).unwrap();
        let base_codes = base.next_binary(8).unwrap();
        let replicated = randomiser.next_r_binary(8).unwrap();
        for (r, codes) in replicated.iter().enumerate() {
            for i in 0..8 {
                for j in 0..4 {
                    let expected = (base_codes.get(i, j) << 21) ^ randomiser.shift(j, r);
                    assert_eq!(codes.get(i, j), expected);
                }
            }
        }
    }

    #[test]
    fn test_same_seed_same_shifts() {
        let a = shifted(3);
        let b = shifted(3);
        assert_eq!(a.shifts, b.shifts);
        assert_eq!(a.seed(), 2024);
    }

    #[test]
    fn test_reset_keeps_shifts() {
        let mut randomiser = shifted(2);
        let first = randomiser.next_r(32).unwrap();
        randomiser.reset();
        assert_eq!(randomiser.cursor(), 0);
        assert_eq!(randomiser.next_r(32).unwrap(), first);
    }

    #[test]
    fn test_single_replication_paths() {
        let mut one = shifted(1);
        let points = one.next(4).unwrap();
        assert!(points.as_slice().iter().all(|&x| (0.0..1.0).contains(&x)));

        let mut many = shifted(3);
        assert!(matches!(
            many.next(4),
            Err(QmcError::MultipleReplications { replications: 3 })
        ));
        assert_eq!(many.cursor(), 0);
        assert!(many.first_linear(2).is_err());
    }

    #[test]
    fn test_zero_replications_rejected() {
        let net = DigitalNet::<u64>::new(2).unwrap();
        assert!(RandomDigitalShift::new(net, 0, Some(1)).is_err());
    }
}
