//! Randomisation of deterministic sequences into independent replications.
//!
//! ## Available Randomisers
//!
//! - [`RandomDigitalShift`]: XOR of a random code per dimension (digital nets)
//! - [`RandomShift`]: addition modulo 1 of a random vector (lattices)
//! - [`RandomOwenScramble`]: nested uniform scrambling (digital nets)
//!
//! Randomisation parameters are drawn once at construction and survive
//! `reset`, so a randomised generator is as reproducible as its base.
//! Digital randomisers widen the base codes to at least 53 bits first
//! (see [`randomised_precision`]) so the random low-order digits reach the
//! full `f64` mantissa.

mod digital_shift;
mod owen;
mod scramble_cache;
mod seeding;
mod shift;

pub use digital_shift::RandomDigitalShift;
pub use owen::RandomOwenScramble;
pub use scramble_cache::ScrambleCache;
pub use seeding::SeededRng;
pub use shift::RandomShift;

use crate::types::{FixedPointCode, QmcError, Result, F64_MANTISSA_BITS};

/// Bit precision of randomised codes for a base precision `t`:
/// `min(max(t, 53), C::BITS)`.
///
/// # Examples
///
/// ```
/// use qmc_core::randomise::randomised_precision;
///
/// assert_eq!(randomised_precision::<u64>(32), 53);
/// assert_eq!(randomised_precision::<u32>(32), 32);
/// assert_eq!(randomised_precision::<u128>(70), 70);
/// ```
#[inline]
pub fn randomised_precision<C: FixedPointCode>(base_precision: u32) -> u32 {
    base_precision.max(F64_MANTISSA_BITS).min(C::BITS)
}

pub(crate) fn ensure_replications(replications: usize) -> Result<()> {
    if replications == 0 {
        return Err(QmcError::InvalidConfig(
            "replications must be at least 1".to_string(),
        ));
    }
    Ok(())
}

/// Left-aligns a base code of precision `base` to precision `target`.
#[inline]
pub(crate) fn widen_code<C: FixedPointCode>(code: C, base: u32, target: u32) -> C {
    if target == base {
        code
    } else if base == 0 {
        C::zero()
    } else {
        code << (target - base) as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_widen_code() {
        assert_eq!(widen_code(1u64 << 31, 32, 53), 1u64 << 52);
        assert_eq!(widen_code(5u32, 32, 32), 5);
        assert_eq!(widen_code(0u64, 0, 53), 0);
    }

    #[test]
    fn test_zero_replications_rejected() {
        assert!(matches!(
            ensure_replications(0),
            Err(QmcError::InvalidConfig(_))
        ));
        assert!(ensure_replications(3).is_ok());
    }
}
