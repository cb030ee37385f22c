//! Base-2 generating matrices for digital nets.

use std::path::Path;

use super::joe_kuo::{self, MAX_SOBOL_DIMENSION, SOBOL_COLUMNS, SOBOL_PRECISION};
use super::parser::parse_rows;
use crate::types::{FixedPointCode, QmcError, Result};

/// Generating matrix of a base-2 digital net.
///
/// Holds `columns` direction numbers for each of `dimension` coordinates.
/// Every direction number is a fixed-point fraction of `precision` bits,
/// most significant digit first. Storage is column-major so that the
/// Gray-code update, which XORs one column into every coordinate, reads
/// contiguous memory.
///
/// # Examples
///
/// ```
/// use qmc_core::tables::GeneratingMatrix;
///
/// let matrix = GeneratingMatrix::<u64>::sobol(3).unwrap();
/// assert_eq!(matrix.dimension(), 3);
/// assert_eq!(matrix.columns(), 32);
/// assert_eq!(matrix.precision(), 32);
/// assert_eq!(matrix.direction(0, 0), 1 << 31);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeneratingMatrix<C: FixedPointCode = u64> {
    dimension: usize,
    columns: usize,
    precision: u32,
    directions: Vec<C>,
}

impl<C: FixedPointCode> GeneratingMatrix<C> {
    /// Embedded Sobol' matrix (Joe–Kuo direction numbers, 32-bit precision).
    ///
    /// # Errors
    ///
    /// `DimensionMismatch` if `dimension` exceeds the embedded table,
    /// `InvalidConfig` if it is zero.
    pub fn sobol(dimension: usize) -> Result<Self> {
        ensure_dimension(dimension)?;
        if dimension > MAX_SOBOL_DIMENSION {
            return Err(QmcError::DimensionMismatch {
                requested: dimension,
                available: MAX_SOBOL_DIMENSION,
            });
        }
        let mut directions = vec![C::zero(); SOBOL_COLUMNS * dimension];
        for j in 0..dimension {
            for (k, &v) in joe_kuo::direction_numbers(j).iter().enumerate() {
                directions[k * dimension + j] = C::from_u128_truncated(v as u128);
            }
        }
        Ok(Self {
            dimension,
            columns: SOBOL_COLUMNS,
            precision: SOBOL_PRECISION,
            directions,
        })
    }

    /// Builds a matrix from an explicit table, one row per dimension.
    ///
    /// Entries use the column-integer convention: bit `i` of the entry in
    /// column `k` is the matrix element in row `i`, i.e. the digit of weight
    /// `2^-(i+1)`. The precision is the largest bit length in the table.
    ///
    /// ```
    /// use qmc_core::tables::GeneratingMatrix;
    ///
    /// // identity and Pascal matrices for m = 5
    /// let matrix = GeneratingMatrix::<u64>::from_columns(vec![
    ///     vec![1, 2, 4, 8, 16],
    ///     vec![1, 3, 5, 15, 17],
    /// ])
    /// .unwrap();
    /// assert_eq!(matrix.precision(), 5);
    /// assert_eq!(matrix.direction(1, 1), 0b11000);
    /// ```
    ///
    /// # Errors
    ///
    /// `MalformedTable` if the table is empty, ragged or all zero.
    pub fn from_columns(rows: Vec<Vec<C>>) -> Result<Self> {
        let numbered = rows.into_iter().enumerate().map(|(i, row)| (i + 1, row));
        Self::from_numbered_rows(numbered.collect())
    }

    /// Parses a table in the text format: one dimension per line,
    /// whitespace-separated column integers.
    ///
    /// # Errors
    ///
    /// `MalformedTable` on unparsable or ragged input.
    pub fn parse(text: &str) -> Result<Self> {
        Self::from_numbered_rows(parse_rows(text)?)
    }

    /// Reads and parses a table file.
    ///
    /// # Errors
    ///
    /// `Io` if the file cannot be read, `MalformedTable` if it does not parse.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = std::fs::read_to_string(path.as_ref())?;
        let matrix = Self::parse(&text)?;
        tracing::debug!(
            path = %path.as_ref().display(),
            dimension = matrix.dimension,
            columns = matrix.columns,
            precision = matrix.precision,
            "loaded generating matrix"
        );
        Ok(matrix)
    }

    fn from_numbered_rows(rows: Vec<(usize, Vec<C>)>) -> Result<Self> {
        let columns = match rows.first() {
            Some((_, row)) if !row.is_empty() => row.len(),
            _ => {
                return Err(QmcError::MalformedTable {
                    line: 0,
                    reason: "generating matrix has no columns".to_string(),
                })
            }
        };
        if let Some((line, row)) = rows.iter().find(|(_, row)| row.len() != columns) {
            return Err(QmcError::MalformedTable {
                line: *line,
                reason: format!("expected {} entries, found {}", columns, row.len()),
            });
        }

        let precision = rows
            .iter()
            .flat_map(|(_, row)| row.iter())
            .map(|entry| entry.bit_length())
            .max()
            .unwrap_or(0);
        if precision == 0 {
            return Err(QmcError::MalformedTable {
                line: 0,
                reason: "generating matrix is all zero".to_string(),
            });
        }

        let dimension = rows.len();
        let mut directions = vec![C::zero(); columns * dimension];
        for (j, (_, row)) in rows.iter().enumerate() {
            for (k, &entry) in row.iter().enumerate() {
                directions[k * dimension + j] = entry.reverse_low_bits(precision);
            }
        }
        Ok(Self {
            dimension,
            columns,
            precision,
            directions,
        })
    }

    /// Keeps the first `dimension` rows.
    ///
    /// # Errors
    ///
    /// `DimensionMismatch` if the matrix has fewer rows.
    pub fn truncated(&self, dimension: usize) -> Result<Self> {
        ensure_dimension(dimension)?;
        if dimension > self.dimension {
            return Err(QmcError::DimensionMismatch {
                requested: dimension,
                available: self.dimension,
            });
        }
        let directions = self
            .directions
            .chunks_exact(self.dimension)
            .flat_map(|column| column[..dimension].iter().copied())
            .collect();
        Ok(Self {
            dimension,
            columns: self.columns,
            precision: self.precision,
            directions,
        })
    }

    /// Number of coordinates.
    #[inline]
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Number of direction numbers per coordinate.
    #[inline]
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Bit precision of the direction numbers.
    #[inline]
    pub fn precision(&self) -> u32 {
        self.precision
    }

    /// Column `k`: direction number `k` of every coordinate.
    #[inline]
    pub fn column(&self, k: usize) -> &[C] {
        &self.directions[k * self.dimension..(k + 1) * self.dimension]
    }

    /// Direction number `k` of coordinate `j`.
    #[inline]
    pub fn direction(&self, j: usize, k: usize) -> C {
        self.directions[k * self.dimension + j]
    }
}

pub(crate) fn ensure_dimension(dimension: usize) -> Result<()> {
    if dimension == 0 {
        return Err(QmcError::InvalidConfig(
            "dimension must be at least 1".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sobol_leading_columns() {
        let matrix = GeneratingMatrix::<u64>::sobol(5).unwrap();
        let to_f = |c: u64| c as f64 / 2f64.powi(32);
        let first: Vec<f64> = matrix.column(0).iter().map(|&c| to_f(c)).collect();
        assert_eq!(first, vec![0.5; 5]);
        let second: Vec<f64> = matrix.column(1).iter().map(|&c| to_f(c)).collect();
        assert_eq!(second, vec![0.25, 0.75, 0.75, 0.75, 0.25]);
    }

    #[test]
    fn test_sobol_too_many_dimensions() {
        let err = GeneratingMatrix::<u64>::sobol(MAX_SOBOL_DIMENSION + 1).unwrap_err();
        assert!(matches!(err, QmcError::DimensionMismatch { .. }));
    }

    #[test]
    fn test_sobol_narrow_and_wide_codes_agree() {
        let narrow = GeneratingMatrix::<u32>::sobol(4).unwrap();
        let wide = GeneratingMatrix::<u128>::sobol(4).unwrap();
        for j in 0..4 {
            for k in 0..SOBOL_COLUMNS {
                assert_eq!(narrow.direction(j, k) as u128, wide.direction(j, k));
            }
        }
    }

    #[test]
    fn test_from_columns_bit_reversal() {
        let matrix = GeneratingMatrix::<u64>::from_columns(vec![vec![1, 2, 4, 8, 16]]).unwrap();
        assert_eq!(matrix.precision(), 5);
        for k in 0..5 {
            assert_eq!(matrix.direction(0, k), 16 >> k);
        }
    }

    #[test]
    fn test_ragged_table_rejected() {
        let err = GeneratingMatrix::<u64>::parse("1 2 4\n1 3\n").unwrap_err();
        match err {
            QmcError::MalformedTable { line, .. } => assert_eq!(line, 2),
            other => panic!("unexpected error {:?}", other),
        }
    }

    #[test]
    fn test_zero_table_rejected() {
        assert!(GeneratingMatrix::<u64>::from_columns(vec![vec![0, 0]]).is_err());
        assert!(GeneratingMatrix::<u64>::from_columns(vec![]).is_err());
        assert!(GeneratingMatrix::<u64>::from_columns(vec![vec![]]).is_err());
    }

    #[test]
    fn test_truncated() {
        let matrix = GeneratingMatrix::<u64>::sobol(6).unwrap();
        let head = matrix.truncated(2).unwrap();
        assert_eq!(head.dimension(), 2);
        for k in 0..head.columns() {
            assert_eq!(head.column(k), &matrix.column(k)[..2]);
        }
        assert!(matrix.truncated(7).is_err());
        assert!(matches!(
            matrix.truncated(0),
            Err(QmcError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_parse_matches_from_columns() {
        let parsed = GeneratingMatrix::<u64>::parse("1 2 4\n1 3 5\n").unwrap();
        let built = GeneratingMatrix::from_columns(vec![vec![1u64, 2, 4], vec![1, 3, 5]]).unwrap();
        assert_eq!(parsed, built);
    }
}
