//! Random shift modulo 1 of a rank-1 lattice.

use tracing::debug;

use super::{ensure_replications, SeededRng};
use crate::sequences::Lattice;
use crate::traits::{
    ensure_single_replication, single, LowDiscrepancySequence, RandomisedSequence,
};
use crate::types::{PointSet, Result};

/// Lattice whose points are translated by one random vector per
/// replication and wrapped back into `[0, 1)`.
///
/// # Examples
///
/// ```
/// use qmc_core::randomise::RandomShift;
/// use qmc_core::sequences::Lattice;
/// use qmc_core::traits::LowDiscrepancySequence;
///
/// let mut shifted = RandomShift::new(Lattice::new(2).unwrap(), 1, Some(11)).unwrap();
/// let points = shifted.next(8).unwrap();
/// assert!(points.as_slice().iter().all(|&x| (0.0..1.0).contains(&x)));
/// ```
#[derive(Clone, Debug)]
pub struct RandomShift {
    base: Lattice,
    replications: usize,
    seed: u64,
    /// `shifts[j * replications + r]` for dimension `j`, replication `r`.
    shifts: Vec<f64>,
}

impl RandomShift {
    /// Wraps `base` with `replications` independent shifts.
    ///
    /// # Arguments
    ///
    /// * `base` - Lattice to shift
    /// * `replications` - Number of independent replications, at least one
    /// * `seed` - Seed of the draws; `None` draws one from entropy
    ///
    /// # Errors
    ///
    /// `InvalidConfig` if `replications` is zero.
    pub fn new(base: Lattice, replications: usize, seed: Option<u64>) -> Result<Self> {
        ensure_replications(replications)?;
        let mut rng = SeededRng::from_optional_seed(seed);
        let mut shifts = vec![0.0; base.dimension() * replications];
        rng.fill_uniform(&mut shifts);
        debug!(
            dimension = base.dimension(),
            replications,
            seed = rng.seed(),
            seeded = seed.is_some(),
            "initialised lattice shift"
        );
        Ok(Self {
            base,
            replications,
            seed: rng.seed(),
            shifts,
        })
    }

    /// The unshifted lattice.
    #[inline]
    pub fn base(&self) -> &Lattice {
        &self.base
    }

    /// Consumes the randomiser, returning the unshifted lattice.
    pub fn into_base(self) -> Lattice {
        self.base
    }

    /// Seed the shifts were drawn from.
    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Shift applied to `dimension` in `replication`.
    #[inline]
    pub fn shift(&self, dimension: usize, replication: usize) -> f64 {
        self.shifts[dimension * self.replications + replication]
    }

    fn apply(&self, points: &PointSet) -> Vec<PointSet> {
        (0..self.replications)
            .map(|r| points.map_by_column(|j, x| wrap_unit(x + self.shift(j, r))))
            .collect()
    }
}

/// Reduces `x` in `[0, 2)` modulo 1.
#[inline]
fn wrap_unit(x: f64) -> f64 {
    if x >= 1.0 {
        x - 1.0
    } else {
        x
    }
}

impl LowDiscrepancySequence for RandomShift {
    fn name(&self) -> &'static str {
        "Lattice B2 + shift"
    }

    fn dimension(&self) -> usize {
        self.base.dimension()
    }

    fn cursor(&self) -> u64 {
        self.base.cursor()
    }

    fn next(&mut self, n: usize) -> Result<PointSet> {
        ensure_single_replication(self.replications)?;
        single(self.next_r(n)?)
    }

    fn reset(&mut self) {
        self.base.reset();
    }

    fn skip(&mut self, n: u64) -> Result<()> {
        self.base.skip(n)
    }

    fn first_linear(&self, log2_n: u32) -> Result<PointSet> {
        ensure_single_replication(self.replications)?;
        single(self.first_r_linear(log2_n)?)
    }
}

impl RandomisedSequence for RandomShift {
    fn replications(&self) -> usize {
        self.replications
    }

    fn next_r(&mut self, n: usize) -> Result<Vec<PointSet>> {
        let points = self.base.next(n)?;
        Ok(self.apply(&points))
    }

    fn first_r_linear(&self, log2_n: u32) -> Result<Vec<PointSet>> {
        let points = self.base.first_linear(log2_n)?;
        Ok(self.apply(&points))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_wrap_unit() {
        assert_eq!(wrap_unit(0.25), 0.25);
        assert_eq!(wrap_unit(1.25), 0.25);
        assert_eq!(wrap_unit(1.0), 0.0);
    }

    #[test]
    fn test_displacement_is_the_shift() {
        let mut shifted = RandomShift::new(Lattice::new(3).unwrap(), 2, Some(5)).unwrap();
        let mut base = Lattice::new(3).unwrap();
        let reference = base.next(16).unwrap();
        let replicated = shifted.next_r(16).unwrap();
        for (r, points) in replicated.iter().enumerate() {
            for i in 0..16 {
                for j in 0..3 {
                    let displacement = (points.get(i, j) - reference.get(i, j)).rem_euclid(1.0);
                    assert_abs_diff_eq!(displacement, shifted.shift(j, r), epsilon = 1e-12);
                }
            }
        }
    }

    #[test]
    fn test_reset_keeps_shifts() {
        let mut shifted = RandomShift::new(Lattice::new(4).unwrap(), 3, Some(8)).unwrap();
        let first = shifted.next_r(10).unwrap();
        shifted.reset();
        assert_eq!(shifted.next_r(10).unwrap(), first);
    }

    #[test]
    fn test_multiple_replications_need_next_r() {
        let mut shifted = RandomShift::new(Lattice::new(2).unwrap(), 2, Some(1)).unwrap();
        assert!(shifted.next(2).is_err());
        assert_eq!(shifted.cursor(), 0);
    }
}
