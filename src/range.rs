// MIT/Apache2 License

use crate::{
    error::{Error, InvalidArgument, Result},
    magnitude::power_of_ten,
    tolerance::{error_bound, Criterion, Tolerance},
};
use precision_bits::{next_down_by, next_up_by, ulps_between, Ieee754};

/// The number of representable steps between two finite values.
///
/// The distance is symmetric, and the two zeroes are the same step. NaN and the infinities have no
/// meaningful distance and are rejected.
#[inline]
pub fn ulp_distance<F: Ieee754>(a: F, b: F) -> Result<u64> {
    if a.is_finite() && b.is_finite() {
        Ok(ulps_between(a, b))
    } else {
        Err(Error::not_finite())
    }
}

/// The smallest and largest values whose ULP distance from `value` is at most `max_ulps`, inclusive.
///
/// Ends that would run past the finite range are pinned at `F::min_value()` and `F::max_value()`. Infinities
/// only match themselves and NaN matches nothing, so those come back as `(value, value)`.
pub fn range_of_matching_values<F: Ieee754>(value: F, max_ulps: u64) -> Result<(F, F)> {
    Ok((
        minimum_matching_value(value, max_ulps)?,
        maximum_matching_value(value, max_ulps)?,
    ))
}

/// The largest value whose ULP distance from `value` is at most `max_ulps`, pinned at `F::max_value()`.
pub fn maximum_matching_value<F: Ieee754>(value: F, max_ulps: u64) -> Result<F> {
    check_ulps(max_ulps)?;

    if !value.is_finite() {
        return Ok(value);
    }

    let top = next_up_by(value, max_ulps);
    if top.is_infinite() {
        log::trace!(
            "{:?} ULPs above {:?} leave the finite range, pinning to the maximum",
            max_ulps,
            value
        );
        Ok(F::max_value())
    } else {
        Ok(top)
    }
}

/// The smallest value whose ULP distance from `value` is at most `max_ulps`, pinned at `F::min_value()`.
pub fn minimum_matching_value<F: Ieee754>(value: F, max_ulps: u64) -> Result<F> {
    check_ulps(max_ulps)?;

    if !value.is_finite() {
        return Ok(value);
    }

    let bottom = next_down_by(value, max_ulps);
    if bottom.is_infinite() {
        log::trace!(
            "{:?} ULPs below {:?} leave the finite range, pinning to the minimum",
            max_ulps,
            value
        );
        Ok(F::min_value())
    } else {
        Ok(bottom)
    }
}

/// The number of representable values below and above `value` that lie within `relative_difference` of it,
/// i.e. inside `[value - rel * |value|, value + rel * |value|]`.
///
/// Relative differences are meaningless around zero, so for `value == 0` the interval is
/// `[-rel, rel]` instead. Ends past the finite range are pinned at `F::min_value()` and `F::max_value()`,
/// so an infinity is never counted.
pub fn ulps_within_relative<F: Ieee754>(value: F, relative_difference: f64) -> Result<(u64, u64)> {
    let relative_difference = error_bound(relative_difference)?.into_inner();

    if !value.is_finite() {
        return Err(Error::not_finite());
    }

    let relative = F::from_f64_lossy(relative_difference);
    if value.is_zero() {
        let span = ulps_between(F::zero(), relative.min(F::max_value()));
        return Ok((span, span));
    }

    let offset = relative * value.abs();
    let (low, high) = (value - offset, value + offset);
    Ok((
        ulps_between(value, low.max(F::min_value())),
        ulps_between(value, high.min(F::max_value())),
    ))
}

/// Snap `value` to `+0.0` if it is within `tolerance` of zero, otherwise return it unchanged.
///
/// Absolute and ULP tolerances measure the distance to zero directly. A relative tolerance has nothing to
/// be relative to at zero, so its bound is used as an absolute one. A decimal-places tolerance of `n` snaps
/// anything smaller than `0.5 * 10^-(n-1)`. NaN and the infinities pass through.
pub fn coerce_zero<F: Ieee754>(value: F, tolerance: Tolerance) -> F {
    if !value.is_finite() {
        return value;
    }

    let distance: f64 = value.abs().into();
    let snap = match tolerance.criterion() {
        Criterion::AbsoluteError(max) | Criterion::RelativeError(max) => distance < max.into_inner(),
        Criterion::DecimalPlaces(places) => {
            let places = i32::try_from(places).unwrap_or(i32::MAX);
            distance < 0.5 * power_of_ten(1 - places)
        }
        Criterion::Ulps(max) => ulps_between(value, F::zero()) <= max.get(),
    };

    if snap {
        F::zero()
    } else {
        value
    }
}

#[inline]
fn check_ulps(max_ulps: u64) -> Result {
    if max_ulps == 0 {
        Err(Error::invalid_argument(InvalidArgument::ZeroUlps))
    } else {
        Ok(())
    }
}
