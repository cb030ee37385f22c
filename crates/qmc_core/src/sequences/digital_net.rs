//! Base-2 digital net in Gray-code order.
//!
//! Point `i` of the net is the XOR of the direction numbers selected by the
//! binary digits of an index. Successive Gray codes differ in exactly one
//! bit, so moving from point `i` to `i + 1` XORs a single column (the one
//! indexed by the trailing zeros of `i + 1`) into the running accumulator:
//! `O(s)` work per point instead of `O(s · m)`.

use std::path::Path;

use rayon::prelude::*;
use tracing::{debug, trace};

use super::{ensure_capacity, linear_point_count, pow2};
use crate::tables::GeneratingMatrix;
use crate::traits::{DigitalSequence, LowDiscrepancySequence};
use crate::types::{CodeSet, FixedPointCode, PointSet, QmcError, Result};

/// Index bits usable by a digital net, independent of its column count.
pub const MAX_INDEX_BITS: u32 = 63;

/// Base-2 digital net generated in Gray-code order.
///
/// # Examples
///
/// ```
/// use qmc_core::sequences::DigitalNet;
/// use qmc_core::traits::LowDiscrepancySequence;
///
/// let mut net = DigitalNet::<u64>::new(5).unwrap();
/// let points = net.next(4).unwrap();
/// assert_eq!(points.row(2), &[0.75, 0.25, 0.25, 0.25, 0.75]);
///
/// net.reset();
/// assert_eq!(net.next(4).unwrap(), points);
/// ```
#[derive(Clone, Debug)]
pub struct DigitalNet<C: FixedPointCode = u64> {
    matrix: GeneratingMatrix<C>,
    /// Index of the next point to emit.
    cursor: u64,
    /// Code of point `cursor`, one entry per dimension.
    accumulator: Vec<C>,
}

impl<C: FixedPointCode> DigitalNet<C> {
    /// Digital net over the embedded Sobol' matrix.
    ///
    /// # Errors
    ///
    /// `DimensionMismatch` if `dimension` exceeds the embedded table.
    pub fn new(dimension: usize) -> Result<Self> {
        Self::with_matrix(dimension, GeneratingMatrix::sobol(dimension)?)
    }

    /// Digital net over the first `dimension` rows of `matrix`.
    ///
    /// # Arguments
    ///
    /// * `dimension` - Number of coordinates per point
    /// * `matrix` - Generating matrix with at least `dimension` rows
    ///
    /// # Errors
    ///
    /// `DimensionMismatch` if `matrix` has fewer than `dimension` rows.
    pub fn with_matrix(dimension: usize, matrix: GeneratingMatrix<C>) -> Result<Self> {
        let matrix = matrix.truncated(dimension)?;
        debug!(
            dimension,
            columns = matrix.columns(),
            precision = matrix.precision(),
            "initialised digital net"
        );
        Ok(Self {
            accumulator: vec![C::zero(); dimension],
            matrix,
            cursor: 0,
        })
    }

    /// Digital net over a matrix read from a table file.
    ///
    /// # Arguments
    ///
    /// * `dimension` - Number of coordinates per point
    /// * `path` - Table file, one dimension per line
    ///
    /// # Errors
    ///
    /// `Io` or `MalformedTable` if the file cannot be used;
    /// `DimensionMismatch` if it has fewer than `dimension` rows.
    pub fn from_file<P: AsRef<Path>>(dimension: usize, path: P) -> Result<Self> {
        Self::with_matrix(dimension, GeneratingMatrix::from_file(path)?)
    }

    /// The generating matrix.
    #[inline]
    pub fn matrix(&self) -> &GeneratingMatrix<C> {
        &self.matrix
    }

    /// Maximum number of points the net supports.
    #[inline]
    pub fn max_points(&self) -> u128 {
        pow2(self.index_bits())
    }

    #[inline]
    fn index_bits(&self) -> u32 {
        (self.matrix.columns() as u32).min(MAX_INDEX_BITS)
    }

    #[inline]
    fn xor_column(accumulator: &mut [C], column: &[C]) {
        for (code, &direction) in accumulator.iter_mut().zip(column) {
            *code = *code ^ direction;
        }
    }

    /// Places the cursor at `index`, rebuilding the accumulator from the
    /// Gray code of `index`.
    fn seek(&mut self, index: u64) {
        let mut gray = index ^ (index >> 1);
        self.accumulator.fill(C::zero());
        while gray != 0 {
            let k = gray.trailing_zeros() as usize;
            gray &= gray - 1;
            if k < self.matrix.columns() {
                Self::xor_column(&mut self.accumulator, self.matrix.column(k));
            }
        }
        self.cursor = index;
    }
}

impl<C: FixedPointCode> LowDiscrepancySequence for DigitalNet<C> {
    fn name(&self) -> &'static str {
        "Digital Net B2 (Gray code)"
    }

    fn dimension(&self) -> usize {
        self.matrix.dimension()
    }

    fn cursor(&self) -> u64 {
        self.cursor
    }

    fn next(&mut self, n: usize) -> Result<PointSet> {
        let codes = self.next_binary(n)?;
        Ok(self.binary_to_float(&codes))
    }

    fn reset(&mut self) {
        self.cursor = 0;
        self.accumulator.fill(C::zero());
    }

    fn skip(&mut self, n: u64) -> Result<()> {
        ensure_capacity(self.cursor, n as u128, self.max_points())?;
        self.seek(self.cursor + n);
        Ok(())
    }

    fn first_linear(&self, log2_n: u32) -> Result<PointSet> {
        let codes = self.first_linear_binary(log2_n)?;
        Ok(self.binary_to_float(&codes))
    }
}

impl<C: FixedPointCode> DigitalSequence<C> for DigitalNet<C> {
    fn precision(&self) -> u32 {
        self.matrix.precision()
    }

    fn next_binary(&mut self, n: usize) -> Result<CodeSet<C>> {
        ensure_capacity(self.cursor, n as u128, self.max_points())?;
        trace!(start = self.cursor, n, "digital net batch");

        let dimension = self.dimension();
        let mut codes = Vec::with_capacity(n * dimension);
        for _ in 0..n {
            codes.extend_from_slice(&self.accumulator);
            self.cursor += 1;
            let k = self.cursor.trailing_zeros() as usize;
            // past the last column only the final, never-emitted index remains
            if k < self.matrix.columns() {
                Self::xor_column(&mut self.accumulator, self.matrix.column(k));
            }
        }
        Ok(CodeSet::from_vec(n, dimension, codes))
    }

    fn first_linear_binary(&self, log2_n: u32) -> Result<CodeSet<C>> {
        if log2_n > self.index_bits() {
            return Err(QmcError::PrecisionExhausted {
                requested: pow2(log2_n),
                supported: self.max_points(),
            });
        }
        let n = linear_point_count(log2_n)?;
        let dimension = self.dimension();
        let mut codes = vec![C::zero(); n * dimension];
        codes
            .par_chunks_mut(dimension)
            .enumerate()
            .for_each(|(i, row)| {
                let mut bits = i as u64;
                while bits != 0 {
                    let k = bits.trailing_zeros() as usize;
                    bits &= bits - 1;
                    Self::xor_column(row, self.matrix.column(k));
                }
            });
        Ok(CodeSet::from_vec(n, dimension, codes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn pascal_matrix() -> GeneratingMatrix<u64> {
        let m = 5;
        let identity: Vec<u64> = (0..m).map(|i| 1 << i).collect();
        let mut pascal = vec![1u64; m];
        for i in 1..m {
            pascal[i] = (pascal[i - 1] << 1) ^ pascal[i - 1];
        }
        GeneratingMatrix::from_columns(vec![identity, pascal]).unwrap()
    }

    #[test]
    fn test_first_points_gray_order() {
        let mut net = DigitalNet::<u64>::new(5).unwrap();
        let points = net.next(8).unwrap();
        assert_eq!(points.row(0), &[0.0; 5]);
        assert_eq!(points.row(1), &[0.5; 5]);
        assert_eq!(points.row(3), &[0.25, 0.75, 0.75, 0.75, 0.25]);
        assert_eq!(points.row(4), &[0.375, 0.375, 0.625, 0.875, 0.375]);
        assert_eq!(points.row(7), &[0.125, 0.625, 0.375, 0.125, 0.125]);
        assert_eq!(net.cursor(), 8);
    }

    #[test]
    fn test_user_matrix() {
        let mut net = DigitalNet::with_matrix(2, pascal_matrix()).unwrap();
        let points = net.next(4).unwrap();
        assert_eq!(
            points.as_slice(),
            &[0.0, 0.0, 0.5, 0.5, 0.75, 0.25, 0.25, 0.75]
        );
    }

    #[test]
    fn test_binary_codes() {
        let mut net = DigitalNet::<u64>::new(4).unwrap();
        let codes = net.next_binary(4).unwrap();
        assert_eq!(codes.row(1), &[2147483648; 4]);
        assert_eq!(
            codes.row(2),
            &[3221225472, 1073741824, 1073741824, 1073741824]
        );
        let points = net.binary_to_float(&codes);
        assert_eq!(points.row(2), &[0.75, 0.25, 0.25, 0.25]);
    }

    #[test]
    fn test_linear_order() {
        let net = DigitalNet::<u64>::new(4).unwrap();
        let points = net.first_linear(3).unwrap();
        assert_eq!(points.n_points(), 8);
        assert_eq!(points.row(2), &[0.25, 0.75, 0.75, 0.75]);
        assert_eq!(points.row(4), &[0.125, 0.625, 0.375, 0.125]);
        assert_eq!(points.row(7), &[0.875, 0.875, 0.125, 0.375]);
        assert_eq!(net.cursor(), 0);
    }

    #[test]
    fn test_capacity_exhausted() {
        let mut net = DigitalNet::with_matrix(2, pascal_matrix()).unwrap();
        assert_eq!(net.max_points(), 32);
        net.next(30).unwrap();
        let err = net.next(3).unwrap_err();
        assert!(matches!(
            err,
            QmcError::PrecisionExhausted {
                requested: 33,
                supported: 32
            }
        ));
        // state untouched by the failed call
        assert_eq!(net.cursor(), 30);
        assert_eq!(net.next(2).unwrap().n_points(), 2);
        assert!(net.first_linear(6).is_err());
        assert!(net.first_linear(5).is_ok());
    }

    #[test]
    fn test_skip_matches_next() {
        let mut walked = DigitalNet::<u64>::new(6).unwrap();
        walked.next(37).unwrap();
        let expected = walked.next(11).unwrap();

        let mut jumped = DigitalNet::<u64>::new(6).unwrap();
        jumped.skip(37).unwrap();
        assert_eq!(jumped.cursor(), 37);
        assert_eq!(jumped.next(11).unwrap(), expected);
    }

    #[test]
    fn test_reset_restores_initial_state() {
        let mut net = DigitalNet::<u64>::new(3).unwrap();
        let first = net.next(16).unwrap();
        net.next(5).unwrap();
        net.reset();
        assert_eq!(net.cursor(), 0);
        assert_eq!(net.next(16).unwrap(), first);
    }

    #[test]
    fn test_code_widths_agree() {
        let mut narrow = DigitalNet::<u32>::new(3).unwrap();
        let mut wide = DigitalNet::<u128>::new(3).unwrap();
        let a = narrow.next(64).unwrap();
        let b = wide.next(64).unwrap();
        for (x, y) in a.as_slice().iter().zip(b.as_slice()) {
            assert_relative_eq!(*x, *y);
        }
    }

    #[test]
    fn test_zero_dimension_rejected() {
        assert!(DigitalNet::<u64>::new(0).is_err());
    }
}
