//! Generating matrices and vectors.
//!
//! ## Available Tables
//!
//! - [`GeneratingMatrix`]: base-2 digital-net matrix; embedded Sobol'
//!   default or loaded from an explicit/text table
//! - [`GeneratingVector`]: rank-1 lattice vector with its resolution `m`;
//!   embedded default or loaded from an explicit/text table
//!
//! ## Text Format
//!
//! Whitespace-separated unsigned decimal integers. A matrix file holds one
//! dimension per line; a vector file holds one entry per line. Blank lines
//! and `#` comments are ignored.

mod joe_kuo;
mod matrix;
mod parser;
mod vector;

pub use joe_kuo::{MAX_SOBOL_DIMENSION, SOBOL_COLUMNS, SOBOL_PRECISION};
pub(crate) use matrix::ensure_dimension;
pub use matrix::GeneratingMatrix;
pub use vector::{
    GeneratingVector, DEFAULT_LATTICE_RESOLUTION, MAX_LATTICE_DIMENSION, MAX_LATTICE_RESOLUTION,
};
