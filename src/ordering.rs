// MIT/Apache2 License

use crate::{equality::almost_equal, tolerance::Tolerance};
use precision_bits::Ieee754;
use std::cmp::Ordering;

/// Three-way comparison that treats values within `tolerance` of each other as equal.
///
/// NaN and infinite operands skip the tolerance and compare the way IEEE-754 does, so this returns `None`
/// exactly when either operand is NaN.
#[inline]
pub fn compare<F: Ieee754>(a: F, b: F, tolerance: Tolerance) -> Option<Ordering> {
    if !a.is_finite() || !b.is_finite() {
        return a.partial_cmp(&b);
    }

    if almost_equal(a, b, tolerance) {
        Some(Ordering::Equal)
    } else {
        a.partial_cmp(&b)
    }
}

/// Whether `a` is larger than `b` by more than `tolerance`. Always `false` if either is NaN.
#[inline]
pub fn is_larger<F: Ieee754>(a: F, b: F, tolerance: Tolerance) -> bool {
    compare(a, b, tolerance) == Some(Ordering::Greater)
}

/// Whether `a` is smaller than `b` by more than `tolerance`. Always `false` if either is NaN.
#[inline]
pub fn is_smaller<F: Ieee754>(a: F, b: F, tolerance: Tolerance) -> bool {
    compare(a, b, tolerance) == Some(Ordering::Less)
}
