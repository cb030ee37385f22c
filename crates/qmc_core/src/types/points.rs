//! Row-major point matrices.
//!
//! Generators return `n × s` matrices: one row per point, one column per
//! dimension. [`PointSet`] holds floating coordinates and [`CodeSet`]
//! holds the raw fixed-point codes of a digital net.

use std::slice::ChunksExact;

/// Dense row-major matrix of `n_points` rows by `dimension` columns.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct PointMatrix<T> {
    n_points: usize,
    dimension: usize,
    data: Vec<T>,
}

/// Matrix of coordinates in `[0, 1)`.
pub type PointSet = PointMatrix<f64>;

/// Matrix of raw fixed-point codes.
pub type CodeSet<C> = PointMatrix<C>;

impl<T: Copy> PointMatrix<T> {
    /// Wraps row-major data.
    ///
    /// # Panics
    ///
    /// Panics if `data.len() != n_points * dimension`.
    pub fn from_vec(n_points: usize, dimension: usize, data: Vec<T>) -> Self {
        assert_eq!(
            data.len(),
            n_points * dimension,
            "point matrix data length does not match {}x{}",
            n_points,
            dimension
        );
        Self {
            n_points,
            dimension,
            data,
        }
    }

    /// Number of rows (points).
    #[inline]
    pub fn n_points(&self) -> usize {
        self.n_points
    }

    /// Number of columns (dimensions).
    #[inline]
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Returns `(n_points, dimension)`.
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.n_points, self.dimension)
    }

    /// True when the matrix has no rows.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.n_points == 0
    }

    /// Returns row `i`.
    ///
    /// # Panics
    ///
    /// Panics if `i >= n_points`.
    #[inline]
    pub fn row(&self, i: usize) -> &[T] {
        &self.data[i * self.dimension..(i + 1) * self.dimension]
    }

    /// Returns the entry at row `i`, column `j`.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> T {
        self.data[i * self.dimension + j]
    }

    /// Iterates over rows.
    pub fn rows(&self) -> ChunksExact<'_, T> {
        // chunks_exact rejects a zero chunk size
        self.data.chunks_exact(self.dimension.max(1))
    }

    /// Copies column `j` into a vector.
    pub fn column(&self, j: usize) -> Vec<T> {
        self.rows().map(|row| row[j]).collect()
    }

    /// Row-major view of the data.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Consumes the matrix, returning the row-major data.
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Applies `f` to every entry.
    pub fn map<U, F: FnMut(T) -> U>(&self, f: F) -> PointMatrix<U> {
        PointMatrix {
            n_points: self.n_points,
            dimension: self.dimension,
            data: self.data.iter().copied().map(f).collect(),
        }
    }

    /// Applies `f(column, entry)` to every entry.
    pub fn map_by_column<U, F: FnMut(usize, T) -> U>(&self, mut f: F) -> PointMatrix<U> {
        let dimension = self.dimension.max(1);
        PointMatrix {
            n_points: self.n_points,
            dimension: self.dimension,
            data: self
                .data
                .iter()
                .enumerate()
                .map(|(k, &entry)| f(k % dimension, entry))
                .collect(),
        }
    }

    /// Splits into the first `at` rows and the remainder.
    pub fn split_at_row(&self, at: usize) -> (Self, Self) {
        let (head, tail) = self.data.split_at(at * self.dimension);
        (
            Self::from_vec(at, self.dimension, head.to_vec()),
            Self::from_vec(self.n_points - at, self.dimension, tail.to_vec()),
        )
    }

    /// Appends the rows of `other` below `self`.
    ///
    /// # Panics
    ///
    /// Panics if the dimensions differ.
    pub fn append_rows(&mut self, other: &Self) {
        assert_eq!(self.dimension, other.dimension, "dimension mismatch");
        self.data.extend_from_slice(&other.data);
        self.n_points += other.n_points;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> PointSet {
        PointSet::from_vec(3, 2, vec![0.0, 0.5, 0.25, 0.75, 0.125, 0.625])
    }

    #[test]
    fn test_shape_and_access() {
        let points = sample();
        assert_eq!(points.shape(), (3, 2));
        assert_eq!(points.row(1), &[0.25, 0.75]);
        assert_eq!(points.get(2, 1), 0.625);
        assert_eq!(points.column(0), vec![0.0, 0.25, 0.125]);
        assert_eq!(points.rows().count(), 3);
    }

    #[test]
    fn test_split_and_append_roundtrip() {
        let points = sample();
        let (mut head, tail) = points.split_at_row(1);
        assert_eq!(head.n_points(), 1);
        assert_eq!(tail.n_points(), 2);
        head.append_rows(&tail);
        assert_eq!(head, points);
    }

    #[test]
    fn test_map() {
        let codes: CodeSet<u64> = CodeSet::from_vec(1, 2, vec![1 << 31, 3 << 30]);
        let points = codes.map(|c| c as f64 / 2f64.powi(32));
        assert_eq!(points.row(0), &[0.5, 0.75]);
    }

    #[test]
    fn test_map_by_column() {
        let shifted = sample().map_by_column(|j, x| x + j as f64);
        assert_eq!(shifted.column(0), vec![0.0, 0.25, 0.125]);
        assert_eq!(shifted.column(1), vec![1.5, 1.75, 1.625]);
    }

    #[test]
    #[should_panic(expected = "does not match")]
    fn test_from_vec_length_check() {
        let _ = PointSet::from_vec(2, 2, vec![0.0; 3]);
    }
}
