//! Extensible rank-1 lattice rule in base 2.
//!
//! Point `i` is `frac(φ(i) · z / 2^m)` where `φ` reverses the `m`-bit
//! binary digits of `i`. Under this radical-inverse ordering the first
//! `2^t` points of the sequence form the `2^t`-point lattice for every
//! `t <= m`, so doubling the sample size only ever adds points.

use std::path::Path;

use rayon::prelude::*;
use tracing::{debug, trace};

use super::{ensure_capacity, linear_point_count, pow2};
use crate::tables::GeneratingVector;
use crate::traits::LowDiscrepancySequence;
use crate::types::{FixedPointCode, PointSet, QmcError, Result};

/// Rank-1 lattice generated in extensible (bit-reversed) order.
///
/// # Examples
///
/// ```
/// use qmc_core::sequences::Lattice;
/// use qmc_core::traits::LowDiscrepancySequence;
///
/// let mut lattice = Lattice::new(5).unwrap();
/// let points = lattice.next(4).unwrap();
/// assert_eq!(points.row(2), &[0.25; 5]);
/// assert_eq!(points.row(3), &[0.75; 5]);
/// ```
#[derive(Clone, Debug)]
pub struct Lattice {
    vector: GeneratingVector,
    cursor: u64,
}

impl Lattice {
    /// Lattice over the embedded default generating vector (`m = 20`).
    ///
    /// # Errors
    ///
    /// `DimensionMismatch` if `dimension` exceeds the embedded vector.
    pub fn new(dimension: usize) -> Result<Self> {
        Self::with_vector(dimension, GeneratingVector::lattice_default(dimension)?)
    }

    /// Lattice over the first `dimension` entries of `vector`.
    ///
    /// # Arguments
    ///
    /// * `dimension` - Number of coordinates per point
    /// * `vector` - Generating vector with at least `dimension` entries
    ///
    /// # Errors
    ///
    /// `DimensionMismatch` if `vector` has fewer than `dimension` entries.
    pub fn with_vector(dimension: usize, vector: GeneratingVector) -> Result<Self> {
        let vector = vector.truncated(dimension)?;
        debug!(
            dimension,
            resolution = vector.resolution(),
            "initialised lattice"
        );
        Ok(Self { vector, cursor: 0 })
    }

    /// Lattice over a vector file; see [`GeneratingVector::from_file`].
    ///
    /// # Arguments
    ///
    /// * `dimension` - Number of coordinates per point
    /// * `path` - Vector file, one entry per line
    /// * `resolution` - Resolution `m`, or `None` to read it from the file name
    pub fn from_file<P: AsRef<Path>>(
        dimension: usize,
        path: P,
        resolution: Option<u32>,
    ) -> Result<Self> {
        Self::with_vector(dimension, GeneratingVector::from_file(path, resolution)?)
    }

    /// The generating vector.
    #[inline]
    pub fn vector(&self) -> &GeneratingVector {
        &self.vector
    }

    /// Resolution `m` of the generating vector.
    #[inline]
    pub fn resolution(&self) -> u32 {
        self.vector.resolution()
    }

    /// Maximum number of points, `2^m`.
    #[inline]
    pub fn max_points(&self) -> u128 {
        pow2(self.resolution())
    }

    /// Writes the point `frac(k · z / 2^bits)` into `row`.
    #[inline]
    fn fill_row(&self, k: u64, bits: u32, row: &mut [f64]) {
        let mask = (1u64 << bits) - 1;
        for (x, &z) in row.iter_mut().zip(self.vector.entries()) {
            *x = (k.wrapping_mul(z) & mask).to_unit_f64(bits);
        }
    }
}

impl LowDiscrepancySequence for Lattice {
    fn name(&self) -> &'static str {
        "Lattice B2 (extensible)"
    }

    fn dimension(&self) -> usize {
        self.vector.dimension()
    }

    fn cursor(&self) -> u64 {
        self.cursor
    }

    fn next(&mut self, n: usize) -> Result<PointSet> {
        ensure_capacity(self.cursor, n as u128, self.max_points())?;
        trace!(start = self.cursor, n, "lattice batch");

        let m = self.resolution();
        let dimension = self.dimension();
        let mut data = vec![0.0; n * dimension];
        for (offset, row) in data.chunks_exact_mut(dimension).enumerate() {
            let index = self.cursor + offset as u64;
            self.fill_row(index.reverse_low_bits(m), m, row);
        }
        self.cursor += n as u64;
        Ok(PointSet::from_vec(n, dimension, data))
    }

    fn reset(&mut self) {
        self.cursor = 0;
    }

    fn skip(&mut self, n: u64) -> Result<()> {
        ensure_capacity(self.cursor, n as u128, self.max_points())?;
        self.cursor += n;
        Ok(())
    }

    fn first_linear(&self, log2_n: u32) -> Result<PointSet> {
        if log2_n > self.resolution() {
            return Err(QmcError::InvalidResolution {
                requested: log2_n,
                supported: self.resolution(),
            });
        }
        let n = linear_point_count(log2_n)?;
        let dimension = self.dimension();
        let mut data = vec![0.0; n * dimension];
        data.par_chunks_mut(dimension)
            .enumerate()
            .for_each(|(i, row)| self.fill_row(i as u64, log2_n, row));
        Ok(PointSet::from_vec(n, dimension, data))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_batches_extensible_order() {
        let mut lattice = Lattice::new(5).unwrap();
        let first = lattice.next(4).unwrap();
        assert_eq!(first.row(0), &[0.0; 5]);
        assert_eq!(first.row(1), &[0.5; 5]);
        let second = lattice.next(4).unwrap();
        assert_eq!(second.row(0), &[0.125, 0.625, 0.125, 0.625, 0.625]);
        assert_eq!(second.row(1), &[0.625, 0.125, 0.625, 0.125, 0.125]);
        assert_eq!(second.row(3), &[0.875, 0.375, 0.875, 0.375, 0.375]);
    }

    #[test]
    fn test_linear_order() {
        let lattice = Lattice::new(4).unwrap();
        let points = lattice.first_linear(3).unwrap();
        assert_eq!(points.row(1), &[0.125, 0.625, 0.125, 0.625]);
        assert_eq!(points.row(3), &[0.375, 0.875, 0.375, 0.875]);
        assert_eq!(points.row(7), &[0.875, 0.375, 0.875, 0.375]);
    }

    #[test]
    fn test_linear_resolution_bound() {
        let vector = GeneratingVector::new(vec![1, 5], 4).unwrap();
        let lattice = Lattice::with_vector(2, vector).unwrap();
        assert!(lattice.first_linear(4).is_ok());
        assert!(matches!(
            lattice.first_linear(5),
            Err(QmcError::InvalidResolution {
                requested: 5,
                supported: 4
            })
        ));
    }

    #[test]
    fn test_capacity_exhausted() {
        let vector = GeneratingVector::new(vec![1, 3], 3).unwrap();
        let mut lattice = Lattice::with_vector(2, vector).unwrap();
        lattice.next(6).unwrap();
        assert!(matches!(
            lattice.next(3),
            Err(QmcError::PrecisionExhausted { .. })
        ));
        assert_eq!(lattice.cursor(), 6);
        assert_eq!(lattice.next(2).unwrap().n_points(), 2);
        assert!(lattice.skip(1).is_err());
    }

    #[test]
    fn test_full_lattice_is_a_grid_in_each_dimension() {
        let mut lattice = Lattice::new(8).unwrap();
        let points = lattice.next(256).unwrap();
        for j in 0..8 {
            let mut cells: Vec<u64> = points
                .column(j)
                .iter()
                .map(|&x| (x * 256.0) as u64)
                .collect();
            cells.sort_unstable();
            assert_eq!(cells, (0..256).collect::<Vec<u64>>());
        }
    }

    #[test]
    fn test_skip_then_next() {
        let mut walked = Lattice::new(3).unwrap();
        walked.next(9).unwrap();
        let expected = walked.next(7).unwrap();

        let mut jumped = Lattice::new(3).unwrap();
        jumped.skip(9).unwrap();
        assert_eq!(jumped.next(7).unwrap(), expected);
    }
}
