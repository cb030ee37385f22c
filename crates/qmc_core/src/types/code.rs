//! Fixed-point binary codes for digital-net coordinates.
//!
//! A code stores one coordinate as a binary fraction of `precision` bits,
//! most significant digit first: the code `c` at precision `t` represents
//! `c / 2^t`. The integer width is a type parameter so that the precision
//! stays a per-generator setting rather than a global one.

use std::fmt::Debug;
use std::hash::Hash;

use num_traits::{PrimInt, Unsigned};
use rand::Rng;

/// Number of significant bits an `f64` mantissa can hold exactly.
pub const F64_MANTISSA_BITS: u32 = 53;

/// Unsigned integer type usable as a fixed-point coordinate code.
///
/// Implemented for `u32`, `u64` and `u128`. The 64-bit width is the
/// default throughout the crate; `u128` carries tables with more than
/// 64 bits of precision.
///
/// # Examples
///
/// ```
/// use qmc_core::types::FixedPointCode;
///
/// let half: u64 = 1 << 31;
/// assert_eq!(half.to_unit_f64(32), 0.5);
/// assert_eq!(0b0011_u64.reverse_low_bits(4), 0b1100);
/// ```
pub trait FixedPointCode:
    PrimInt + Unsigned + Hash + Debug + Default + Send + Sync + 'static
{
    /// Width of the integer type in bits.
    const BITS: u32;

    /// Converts from `u128`, discarding the bits that do not fit.
    fn from_u128_truncated(value: u128) -> Self;

    /// Widens the code to `u128` without loss.
    fn widen(self) -> u128;

    /// Draws a code uniformly over the full integer width.
    fn random<R: Rng + ?Sized>(rng: &mut R) -> Self;

    /// Draws a code uniformly over `[0, 2^bits)`.
    #[inline]
    fn random_bits<R: Rng + ?Sized>(rng: &mut R, bits: u32) -> Self {
        if bits == 0 {
            Self::zero()
        } else {
            Self::random(rng) >> (Self::BITS - bits) as usize
        }
    }

    /// Returns the bit at `position` (0 = least significant).
    #[inline]
    fn bit(self, position: u32) -> bool {
        (self >> position as usize) & Self::one() == Self::one()
    }

    /// Number of bits needed to represent the code.
    #[inline]
    fn bit_length(self) -> u32 {
        Self::BITS - self.leading_zeros()
    }

    /// Reverses the order of the low `width` bits; higher bits are dropped.
    #[inline]
    fn reverse_low_bits(self, width: u32) -> Self {
        if width == 0 {
            Self::zero()
        } else {
            self.reverse_bits() >> (Self::BITS - width) as usize
        }
    }

    /// Converts a code of the given precision to a coordinate in `[0, 1)`.
    ///
    /// Precisions above 53 bits are truncated to their top 53 bits first,
    /// so the division is exact and can never round up to 1.
    #[inline]
    fn to_unit_f64(self, precision: u32) -> f64 {
        let (mantissa, bits) = if precision > F64_MANTISSA_BITS {
            (
                self >> (precision - F64_MANTISSA_BITS) as usize,
                F64_MANTISSA_BITS,
            )
        } else {
            (self, precision)
        };
        mantissa.to_u64().unwrap_or(0) as f64 / 2f64.powi(bits as i32)
    }
}

macro_rules! impl_fixed_point_code {
    ($($t:ty),*) => {$(
        impl FixedPointCode for $t {
            const BITS: u32 = <$t>::BITS;

            #[inline]
            fn from_u128_truncated(value: u128) -> Self {
                value as $t
            }

            #[inline]
            fn widen(self) -> u128 {
                self as u128
            }

            #[inline]
            fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
                rng.gen()
            }
        }
    )*};
}

impl_fixed_point_code!(u32, u64, u128);

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_to_unit_f64_exact() {
        assert_eq!(0u64.to_unit_f64(32), 0.0);
        assert_eq!((3u64 << 30).to_unit_f64(32), 0.75);
        assert_eq!(1u32.to_unit_f64(5), 1.0 / 32.0);
    }

    #[test]
    fn test_to_unit_f64_never_reaches_one() {
        assert!(u64::MAX.to_unit_f64(64) < 1.0);
        assert!(u128::MAX.to_unit_f64(128) < 1.0);
        assert!(((1u64 << 53) - 1).to_unit_f64(53) < 1.0);
    }

    #[test]
    fn test_reverse_low_bits() {
        assert_eq!(1u64.reverse_low_bits(5), 16);
        assert_eq!(0b10110u32.reverse_low_bits(5), 0b01101);
        assert_eq!(1u128.reverse_low_bits(128), 1u128 << 127);
        assert_eq!(7u64.reverse_low_bits(0), 0);
    }

    #[test]
    fn test_bit_helpers() {
        assert_eq!(17u64.bit_length(), 5);
        assert_eq!(0u64.bit_length(), 0);
        assert!(17u64.bit(4));
        assert!(!17u64.bit(3));
    }

    #[test]
    fn test_random_bits_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1000 {
            assert!(u64::random_bits(&mut rng, 53) < 1u64 << 53);
            assert!(u128::random_bits(&mut rng, 70) < 1u128 << 70);
        }
        assert_eq!(u64::random_bits(&mut rng, 0), 0);
    }

    #[test]
    fn test_truncating_conversion() {
        let wide: u128 = (1u128 << 64) | 5;
        assert_eq!(u64::from_u128_truncated(wide), 5);
        assert_eq!(5u32.widen(), 5u128);
    }
}
