//! Core value types: fixed-point codes, point matrices and errors.

mod code;
pub mod error;
mod points;

pub use code::{FixedPointCode, F64_MANTISSA_BITS};
pub use error::{QmcError, Result};
pub use points::{CodeSet, PointMatrix, PointSet};
