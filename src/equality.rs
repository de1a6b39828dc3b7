// MIT/Apache2 License

//! Equality predicates. Every criterion shares the same rules for special values before it looks at the
//! tolerance:
//!
//! * NaN is equal to nothing, not even itself.
//! * An infinity is only equal to the exact same infinity.
//!
//! The criteria themselves are written against a pair of norms and the norm of their difference, so the
//! same code serves scalars (where the "norm" is the value itself) and composite types (see
//! [`almost_equal_norm`](crate::almost_equal_norm)).

use crate::{
    error::Result,
    magnitude::{magnitude, power_of_ten},
    tolerance::{error_bound, Criterion, Tolerance},
};
use precision_bits::{ulps_between, Ieee754};

/// Whether `a` and `b` are within `tolerance` of each other.
///
/// This never fails: every [`Tolerance`] comes out of a checked constructor, and NaN and the infinities have
/// fixed results.
#[inline]
pub fn almost_equal<F: Ieee754>(a: F, b: F, tolerance: Tolerance) -> bool {
    match tolerance.criterion() {
        Criterion::AbsoluteError(max) => within_absolute(a, b, max.into_inner()),
        Criterion::RelativeError(max) => within_relative(a, b, max.into_inner()),
        Criterion::DecimalPlaces(places) => within_decimal_places(a, b, places),
        Criterion::Ulps(max) => within_ulps(a, b, max.get()),
    }
}

/// `|a - b| < max_error`. NaN and non-positive bounds are rejected.
#[inline]
pub fn almost_equal_absolute<F: Ieee754>(a: F, b: F, max_error: f64) -> Result<bool> {
    let max_error = error_bound(max_error)?;
    Ok(within_absolute(a, b, max_error.into_inner()))
}

/// `|a - b| < max_error * max(|a|, |b|)`. NaN and non-positive bounds are rejected.
///
/// Relative error means nothing close to zero, so if either value is smaller than the machine epsilon of
/// `F` this falls back to comparing the absolute difference against `max_error`.
#[inline]
pub fn almost_equal_relative<F: Ieee754>(a: F, b: F, max_error: f64) -> Result<bool> {
    let max_error = error_bound(max_error)?;
    Ok(within_relative(a, b, max_error.into_inner()))
}

/// Whether `a` and `b` agree to `places` significant decimal digits. Negative `places` are rejected.
#[inline]
pub fn almost_equal_decimal_places<F: Ieee754>(a: F, b: F, places: i32) -> Result<bool> {
    let tolerance = Tolerance::decimal_places(places)?;
    Ok(almost_equal(a, b, tolerance))
}

/// Whether at most `max_ulps` representable values separate `a` and `b`. A `max_ulps` of zero is rejected.
#[inline]
pub fn almost_equal_ulps<F: Ieee754>(a: F, b: F, max_ulps: u64) -> Result<bool> {
    let tolerance = Tolerance::ulps(max_ulps)?;
    Ok(almost_equal(a, b, tolerance))
}

/// Whether two slices have the same length and are pairwise [`almost_equal`].
pub fn all_almost_equal<F: Ieee754>(a: &[F], b: &[F], tolerance: Tolerance) -> bool {
    a.len() == b.len()
        && a
            .iter()
            .zip(b)
            .all(|(&a, &b)| almost_equal(a, b, tolerance))
}

#[inline]
pub(crate) fn within_absolute<F: Ieee754>(a: F, b: F, max_error: f64) -> bool {
    norm_within_absolute(a.into(), b.into(), (a - b).into(), max_error)
}

#[inline]
pub(crate) fn within_relative<F: Ieee754>(a: F, b: F, max_error: f64) -> bool {
    norm_within_relative(
        a.into(),
        b.into(),
        (a - b).into(),
        max_error,
        F::MACHINE_EPSILON,
    )
}

#[inline]
fn within_decimal_places<F: Ieee754>(a: F, b: F, places: u32) -> bool {
    norm_within_decimal_places(
        a.into(),
        b.into(),
        (a - b).into(),
        places,
        F::MACHINE_EPSILON,
    )
}

#[inline]
pub(crate) fn within_ulps<F: Ieee754>(a: F, b: F, max_ulps: u64) -> bool {
    match special_values(a.into(), b.into()) {
        Some(equal) => equal,
        None => ulps_between(a, b) <= max_ulps,
    }
}

/// The shared verdict for NaN and infinite operands, or `None` if both are finite.
#[inline]
fn special_values(a: f64, b: f64) -> Option<bool> {
    if a.is_nan() || b.is_nan() {
        Some(false)
    } else if a.is_infinite() || b.is_infinite() {
        Some(a == b)
    } else {
        None
    }
}

pub(crate) fn norm_within_absolute(a: f64, b: f64, diff: f64, max_error: f64) -> bool {
    match special_values(a, b) {
        Some(equal) => equal,
        None => diff.abs() < max_error,
    }
}

pub(crate) fn norm_within_relative(a: f64, b: f64, diff: f64, max_error: f64, epsilon: f64) -> bool {
    if let Some(equal) = special_values(a, b) {
        return equal;
    }

    if a.abs() < epsilon || b.abs() < epsilon {
        return diff.abs() < max_error;
    }

    diff.abs() < max_error * a.abs().max(b.abs())
}

pub(crate) fn norm_within_decimal_places(
    a: f64,
    b: f64,
    diff: f64,
    places: u32,
    epsilon: f64,
) -> bool {
    if let Some(equal) = special_values(a, b) {
        return equal;
    }

    // an exact match needs no magnitude, which also covers two zeroes
    if diff == 0.0 {
        return true;
    }

    let places = i32::try_from(places).unwrap_or(i32::MAX);

    if a.abs() < epsilon && b.abs() < epsilon {
        return diff.abs() < 0.5 * power_of_ten(1 - places);
    }

    // values in decades further apart than their neighbours are never equal
    let (magnitude_a, magnitude_b) = (magnitude(a), magnitude(b));
    let magnitude_max = magnitude_a.max(magnitude_b);
    if magnitude_max > magnitude_a.min(magnitude_b) + 1 {
        return false;
    }

    // half a unit of the last requested digit on either side, e.g. three places around 1.0 accept
    // anything within 0.005
    diff.abs() < 0.5 * power_of_ten(magnitude_max.saturating_sub(places).saturating_add(1))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn every_tolerance() -> [Tolerance; 4] {
        [
            Tolerance::absolute(1e-6).unwrap(),
            Tolerance::relative(1e-6).unwrap(),
            Tolerance::decimal_places(6).unwrap(),
            Tolerance::ulps(10).unwrap(),
        ]
    }

    #[test]
    fn test_nan_is_never_equal() {
        for tolerance in every_tolerance() {
            assert!(!almost_equal(f64::NAN, f64::NAN, tolerance));
            assert!(!almost_equal(f64::NAN, 1.0, tolerance));
            assert!(!almost_equal(0.0, f64::NAN, tolerance));
            assert!(!almost_equal(f32::NAN, f32::INFINITY, tolerance));
        }
    }

    #[test]
    fn test_infinities_only_match_themselves() {
        for tolerance in every_tolerance() {
            assert!(almost_equal(f64::INFINITY, f64::INFINITY, tolerance));
            assert!(almost_equal(f64::NEG_INFINITY, f64::NEG_INFINITY, tolerance));
            assert!(!almost_equal(f64::INFINITY, f64::NEG_INFINITY, tolerance));
            assert!(!almost_equal(f64::MAX, f64::INFINITY, tolerance));
            assert!(!almost_equal(f32::INFINITY, f32::MAX, tolerance));
        }
    }

    #[test]
    fn test_absolute() {
        assert!(almost_equal_absolute(1.0, 1.0 + 5.0 * 2f64.powi(-52), 1e-10).unwrap());
        assert!(almost_equal_absolute(100.0, 100.0000001, 1e-6).unwrap());
        assert!(!almost_equal_absolute(100.0, 100.001, 1e-6).unwrap());
        // strictly less than
        assert!(!almost_equal_absolute(0.0, 0.5, 0.5).unwrap());
        assert!(almost_equal_absolute(1.0_f32, 1.0000001, 1e-6).unwrap());
    }

    #[test]
    fn test_raw_bounds_are_checked() {
        assert!(almost_equal_absolute(1.0, 1.0, f64::NAN).unwrap_err().is_invalid_argument());
        assert!(almost_equal_absolute(1.0, 1.0, -1.0).unwrap_err().is_invalid_argument());
        assert!(almost_equal_absolute(1.0_f32, 1.0, 0.0).unwrap_err().is_invalid_argument());
        assert!(almost_equal_relative(2.0, 2.0, 0.0).unwrap_err().is_invalid_argument());
        assert!(almost_equal_relative(2.0, 2.0, f64::NAN).unwrap_err().is_invalid_argument());
        assert!(almost_equal_relative(2.0_f32, 2.0, -1e-3).unwrap_err().is_invalid_argument());
    }

    #[test]
    fn test_every_tolerance_is_reflexive() {
        for tolerance in every_tolerance().into_iter().chain([Tolerance::default()]) {
            for value in [0.0, -0.0, 2.0, -1e-300, 5e-324, f64::MAX] {
                assert!(almost_equal(value, value, tolerance), "{:?} with {:?}", value, tolerance);
            }
        }
    }

    #[test]
    fn test_relative() {
        assert!(almost_equal_relative(1e10, 1e10 + 1.0, 1e-9).unwrap());
        assert!(!almost_equal_relative(1e10, 1e10 + 100.0, 1e-9).unwrap());
        assert!(almost_equal_relative(-3.0, -3.0000003, 1e-6).unwrap());
        assert!(!almost_equal_relative(3.0, -3.0, 0.5).unwrap());

        // near zero the bound is absolute
        assert!(almost_equal_relative(0.0, 1e-20, 1e-10).unwrap());
        assert!(almost_equal_relative(1e-17, 1e-12, 1e-10).unwrap());
        assert!(!almost_equal_relative(0.0, 1e-3, 1e-10).unwrap());
    }

    #[test]
    fn test_relative_single_precision_epsilon() {
        // 1e-8 is below the single precision machine epsilon, so the comparison is absolute
        assert!(almost_equal_relative(1e-8_f32, 2e-8, 1e-6).unwrap());
        // but above the double precision one, so this one is relative
        assert!(!almost_equal_relative(1e-8_f64, 2e-8, 1e-6).unwrap());
    }

    #[test]
    fn test_decimal_places() {
        assert!(almost_equal_decimal_places(1.0, 1.004, 3).unwrap());
        assert!(!almost_equal_decimal_places(1.0, 1.006, 3).unwrap());
        assert!(almost_equal_decimal_places(12345.0, 12346.0, 4).unwrap());
        assert!(!almost_equal_decimal_places(12345.0, 12346.0, 5).unwrap());
        assert!(almost_equal_decimal_places(-0.000123, -0.0001234, 3).unwrap());
        assert!(almost_equal_decimal_places(0.0, -0.0, 10).unwrap());
        assert!(almost_equal_decimal_places(0.0, 1e-20, 3).unwrap());

        assert!(almost_equal_decimal_places(2.0, 3.0, -1)
            .unwrap_err()
            .is_invalid_argument());
    }

    #[test]
    fn test_decimal_places_rejects_distant_decades() {
        // 5 and 500 are two decades apart, so no amount of leniency joins them
        assert!(!almost_equal_decimal_places(5.0, 500.0, 0).unwrap());
        // straddling a power of ten is still one decade apart
        assert!(almost_equal_decimal_places(0.999999, 1.000001, 5).unwrap());
    }

    #[test]
    fn test_ulps() {
        let one_up = 1.0 + f64::EPSILON;
        assert!(almost_equal_ulps(1.0, one_up, 1).unwrap());
        assert!(almost_equal_ulps(1.0, 1.0 + 3.0 * f64::EPSILON, 3).unwrap());
        assert!(!almost_equal_ulps(1.0, 1.0 + 3.0 * f64::EPSILON, 2).unwrap());
        assert!(almost_equal_ulps(-0.0, 0.0, 1).unwrap());
        assert!(almost_equal_ulps(-5e-324, 5e-324, 2).unwrap());
        assert!(almost_equal_ulps(1.0_f32, 1.0 + f32::EPSILON, 1).unwrap());

        assert!(almost_equal_ulps(1.0, 1.0, 0).unwrap_err().is_invalid_argument());
    }

    #[test]
    fn test_all_almost_equal() {
        let tolerance = Tolerance::absolute(1e-9).unwrap();
        assert!(all_almost_equal(&[1.0, 2.0, 3.0], &[1.0, 2.0 + 1e-12, 3.0], tolerance));
        assert!(!all_almost_equal(&[1.0, 2.0], &[1.0, 2.1], tolerance));
        assert!(!all_almost_equal(&[1.0, 2.0], &[1.0], tolerance));
        assert!(all_almost_equal::<f64>(&[], &[], tolerance));
    }
}
