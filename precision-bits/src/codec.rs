// MIT/Apache2 License

use core::fmt::Debug;
use num_traits::{Float, PrimInt, Signed, Unsigned};

/// A binary floating point type whose bit layout follows IEEE-754.
///
/// Besides the raw reinterpretation of the value as an unsigned integer of the same width, this trait maps
/// every value onto a *directional* integer. Directional integers are ordered the same way as the floats
/// they come from, and the difference between two of them is the number of representable values between
/// the two floats. Both zeroes map onto `0`.
pub trait Ieee754: Float + Debug + Into<f64> {
    /// The raw bit pattern, as wide as `Self`.
    type Bits: PrimInt + Unsigned + Debug;
    /// The order-preserving signed integer, as wide as `Self`.
    type Directional: PrimInt + Signed + Into<i128> + Debug;

    /// The number of significand digits, including the implicit leading bit.
    const MANTISSA_DIGITS: u32;
    /// The smallest relative step between `1.0` and its neighbours, `2^-MANTISSA_DIGITS`.
    const MACHINE_EPSILON: f64;

    /// Reinterpret the bits of this value as an unsigned integer.
    fn encode(self) -> Self::Bits;

    /// Reinterpret an unsigned integer as a floating point value.
    fn decode(bits: Self::Bits) -> Self;

    /// Map this value onto its directional integer.
    ///
    /// Non-negative bit patterns are kept as they are. Negative values are stored sign-magnitude, so a more
    /// negative float has a *larger* magnitude in the lower bits; those are reflected around the integer
    /// minimum so that they order below zero.
    fn to_directional(self) -> Self::Directional;

    /// The inverse of [`to_directional`](Ieee754::to_directional). A directional `0` decodes to `+0.0`.
    fn from_directional(directional: Self::Directional) -> Self;

    /// Convert a double precision value into `Self`, rounding if `Self` is narrower.
    fn from_f64_lossy(value: f64) -> Self;

    /// The directional integer, widened so that offsets can be applied without overflowing.
    #[inline]
    fn to_ordinal(self) -> i128 {
        self.to_directional().into()
    }

    /// Decode a widened directional integer.
    ///
    /// The ordinal must lie within the range of [`Directional`](Ieee754::Directional); anything outside of it
    /// is truncated.
    fn from_ordinal(ordinal: i128) -> Self;
}

impl Ieee754 for f64 {
    type Bits = u64;
    type Directional = i64;

    const MANTISSA_DIGITS: u32 = 53;
    const MACHINE_EPSILON: f64 = f64::EPSILON / 2.0;

    #[inline]
    fn encode(self) -> u64 {
        self.to_bits()
    }

    #[inline]
    fn decode(bits: u64) -> f64 {
        f64::from_bits(bits)
    }

    #[allow(clippy::cast_possible_wrap)]
    #[inline]
    fn to_directional(self) -> i64 {
        let signed = self.to_bits() as i64;
        if signed < 0 {
            // signed lies in [MIN, -1], so this cannot overflow
            i64::MIN - signed
        } else {
            signed
        }
    }

    #[allow(clippy::cast_sign_loss)]
    #[inline]
    fn from_directional(directional: i64) -> f64 {
        let signed = if directional < 0 {
            i64::MIN - directional
        } else {
            directional
        };
        f64::from_bits(signed as u64)
    }

    #[inline]
    fn from_f64_lossy(value: f64) -> f64 {
        value
    }

    #[allow(clippy::cast_possible_truncation)]
    #[inline]
    fn from_ordinal(ordinal: i128) -> f64 {
        f64::from_directional(ordinal as i64)
    }
}

impl Ieee754 for f32 {
    type Bits = u32;
    type Directional = i32;

    const MANTISSA_DIGITS: u32 = 24;
    const MACHINE_EPSILON: f64 = f32::EPSILON as f64 / 2.0;

    #[inline]
    fn encode(self) -> u32 {
        self.to_bits()
    }

    #[inline]
    fn decode(bits: u32) -> f32 {
        f32::from_bits(bits)
    }

    #[allow(clippy::cast_possible_wrap)]
    #[inline]
    fn to_directional(self) -> i32 {
        let signed = self.to_bits() as i32;
        if signed < 0 {
            i32::MIN - signed
        } else {
            signed
        }
    }

    #[allow(clippy::cast_sign_loss)]
    #[inline]
    fn from_directional(directional: i32) -> f32 {
        let signed = if directional < 0 {
            i32::MIN - directional
        } else {
            directional
        };
        f32::from_bits(signed as u32)
    }

    #[allow(clippy::cast_possible_truncation)]
    #[inline]
    fn from_f64_lossy(value: f64) -> f32 {
        value as f32
    }

    #[allow(clippy::cast_possible_truncation)]
    #[inline]
    fn from_ordinal(ordinal: i128) -> f32 {
        f32::from_directional(ordinal as i32)
    }
}

/// The number of representable values separating `a` and `b`, measured on their directional integers.
///
/// Infinities count as the step after the largest finite value. The result is meaningless if either value
/// is NaN.
#[allow(clippy::cast_possible_truncation)]
#[must_use]
#[inline]
pub fn ulps_between<F: Ieee754>(a: F, b: F) -> u64 {
    // both ordinals lie strictly inside the signed range of at most 64 bits, so the gap fits in a u64
    (a.to_ordinal() - b.to_ordinal()).unsigned_abs() as u64
}
