//! Deterministic point generators.
//!
//! ## Available Generators
//!
//! - [`DigitalNet`]: base-2 digital net (Sobol' by default) in Gray-code order
//! - [`Lattice`]: extensible rank-1 lattice in bit-reversed order
//! - [`IidUniform`]: independent uniform baseline with a reproducible seed
//! - [`QmcSequence`]: static-dispatch enum over every generator and
//!   randomiser

mod digital_net;
mod iid;
mod lattice;
mod sequence_enum;

pub use digital_net::{DigitalNet, MAX_INDEX_BITS};
pub use iid::IidUniform;
pub use lattice::Lattice;
pub use sequence_enum::QmcSequence;

use tracing::warn;

use crate::types::{QmcError, Result};

/// `2^m` as a point count, saturating at `u128::MAX`.
#[inline]
pub(crate) fn pow2(m: u32) -> u128 {
    1u128.checked_shl(m).unwrap_or(u128::MAX)
}

/// Checks that `n` more points fit after `start` within `supported`.
pub(crate) fn ensure_capacity(start: u64, n: u128, supported: u128) -> Result<()> {
    let requested = start as u128 + n;
    if requested > supported {
        warn!(start, n = %n, supported = %supported, "point budget exhausted");
        return Err(QmcError::PrecisionExhausted {
            requested,
            supported,
        });
    }
    Ok(())
}

/// `2^log2_n` as an in-memory row count.
pub(crate) fn linear_point_count(log2_n: u32) -> Result<usize> {
    1usize
        .checked_shl(log2_n)
        .ok_or(QmcError::PrecisionExhausted {
            requested: pow2(log2_n),
            supported: usize::MAX as u128,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pow2_saturates() {
        assert_eq!(pow2(0), 1);
        assert_eq!(pow2(63), 1u128 << 63);
        assert_eq!(pow2(128), u128::MAX);
    }

    #[test]
    fn test_ensure_capacity_boundary() {
        assert!(ensure_capacity(30, 2, 32).is_ok());
        assert!(matches!(
            ensure_capacity(30, 3, 32),
            Err(QmcError::PrecisionExhausted {
                requested: 33,
                supported: 32
            })
        ));
    }

    #[test]
    fn test_linear_point_count() {
        assert_eq!(linear_point_count(0).unwrap(), 1);
        assert_eq!(linear_point_count(10).unwrap(), 1024);
        assert!(linear_point_count(usize::BITS).is_err());
    }
}
