// MIT/Apache2 License

use crate::Ieee754;

/// Walk `count` representable values upwards from `value`.
///
/// A negative `count` walks downwards instead. NaN and the infinities are returned unchanged, as is any value
/// when `count` is zero. Walking past the largest finite value yields positive infinity.
///
/// Both zeroes sit on the same step, so walking across zero visits it once and lands on `+0.0`.
#[must_use]
#[inline]
pub fn increment<F: Ieee754>(value: F, count: i64) -> F {
    if count < 0 {
        next_down_by(value, count.unsigned_abs())
    } else {
        next_up_by(value, count.unsigned_abs())
    }
}

/// Walk `count` representable values downwards from `value`.
///
/// A negative `count` walks upwards instead. NaN and the infinities are returned unchanged, as is any value
/// when `count` is zero. Walking past the most negative finite value yields negative infinity.
#[must_use]
#[inline]
pub fn decrement<F: Ieee754>(value: F, count: i64) -> F {
    if count < 0 {
        next_up_by(value, count.unsigned_abs())
    } else {
        next_down_by(value, count.unsigned_abs())
    }
}

/// Walk `steps` representable values upwards, saturating at positive infinity.
#[must_use]
pub fn next_up_by<F: Ieee754>(value: F, steps: u64) -> F {
    if steps == 0 || !value.is_finite() {
        return value;
    }

    let target = value.to_ordinal() + i128::from(steps);
    if target > F::max_value().to_ordinal() {
        F::infinity()
    } else {
        F::from_ordinal(target)
    }
}

/// Walk `steps` representable values downwards, saturating at negative infinity.
#[must_use]
pub fn next_down_by<F: Ieee754>(value: F, steps: u64) -> F {
    if steps == 0 || !value.is_finite() {
        return value;
    }

    let target = value.to_ordinal() - i128::from(steps);
    if target < F::min_value().to_ordinal() {
        F::neg_infinity()
    } else {
        F::from_ordinal(target)
    }
}

/// The distance between the magnitude of `value` and the next representable value towards zero. For zero,
/// this is the smallest positive subnormal.
///
/// This is the absolute precision available at `value`: `epsilon_of(1.0)` is the machine epsilon. NaN and the
/// infinities have no neighbours and yield NaN.
#[must_use]
pub fn epsilon_of<F: Ieee754>(value: F) -> F {
    if !value.is_finite() {
        return F::nan();
    }

    let magnitude = value.abs();
    if magnitude.is_zero() {
        next_up_by(magnitude, 1)
    } else {
        magnitude - next_down_by(magnitude, 1)
    }
}

/// Twice [`epsilon_of`]; the gap a value can move while still rounding to its neighbour.
#[must_use]
#[inline]
pub fn positive_epsilon_of<F: Ieee754>(value: F) -> F {
    let epsilon = epsilon_of(value);
    epsilon + epsilon
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_increment_by_one() {
        assert_eq!(increment(1.0_f64, 1), 1.0 + f64::EPSILON);
        assert_eq!(increment(1.0_f32, 1), 1.0 + f32::EPSILON);
        assert_eq!(decrement(1.0_f64, 1), 1.0 - f64::EPSILON / 2.0);
        assert_eq!(increment(0.0_f64, 1), 5e-324);
    }

    #[test]
    fn test_negative_count_reverses_direction() {
        assert_eq!(increment(1.0_f64, -3), decrement(1.0, 3));
        assert_eq!(decrement(-2.5_f32, -7), increment(-2.5, 7));
        assert_eq!(increment(-1.0_f64, i64::MIN), f64::NEG_INFINITY);
    }

    #[test]
    fn test_non_finite_and_zero_count_are_unchanged() {
        assert!(increment(f64::NAN, 10).is_nan());
        assert_eq!(increment(f64::INFINITY, 10), f64::INFINITY);
        assert_eq!(decrement(f64::NEG_INFINITY, 10), f64::NEG_INFINITY);
        assert_eq!(decrement(f64::INFINITY, 10), f64::INFINITY);
        assert_eq!(increment(3.0_f64, 0), 3.0);
    }

    #[test]
    fn test_crossing_zero() {
        let tiny = 5e-324_f64;

        // down from the smallest positive subnormal: one step to zero, then into the negatives
        assert_eq!(decrement(tiny, 1), 0.0);
        assert!(decrement(tiny, 1).is_sign_positive());
        assert_eq!(decrement(tiny, 2), -tiny);

        // negative zero and positive zero are the same step
        assert_eq!(increment(-0.0_f64, 1), tiny);
        assert_eq!(decrement(-0.0_f64, 1), -tiny);
        assert_eq!(increment(-tiny, 1), 0.0);
        assert_eq!(increment(-tiny, 2), tiny);
    }

    #[test]
    fn test_saturation() {
        assert_eq!(increment(f64::MAX, 1), f64::INFINITY);
        assert_eq!(increment(f64::MAX, i64::MAX), f64::INFINITY);
        assert_eq!(decrement(f64::MIN, 1), f64::NEG_INFINITY);
        assert_eq!(decrement(f32::MIN, 1_000), f32::NEG_INFINITY);
        assert_eq!(increment(f64::MAX, -1), decrement(f64::MAX, 1));
    }

    #[test]
    fn test_wide_steps_are_not_truncated() {
        // more steps than a single precision directional integer can hold, but still finite
        let steps = 1_u64 << 31;
        let landed = next_up_by(f32::MIN, steps);
        assert!(landed.is_finite());
        assert_eq!(crate::ulps_between(f32::MIN, landed), steps);
    }

    #[test]
    fn test_inverse() {
        for &value in &[-1e300_f64, -1.0, -1e-310, 0.0, 1e-310, 0.1, 12345.678] {
            for &count in &[1_i64, 2, 17, 1_000_000] {
                assert_eq!(decrement(increment(value, count), count), value);
                assert_eq!(increment(decrement(value, count), count), value);
            }
        }
    }

    #[test]
    fn test_epsilon_of() {
        assert_eq!(epsilon_of(1.0_f64), f64::EPSILON / 2.0);
        assert_eq!(epsilon_of(-1.0_f64), f64::EPSILON / 2.0);
        assert_eq!(epsilon_of(0.0_f64), 5e-324);
        assert_eq!(epsilon_of(1.5_f32), f32::EPSILON);
        assert_eq!(positive_epsilon_of(1.0_f64), f64::EPSILON);
        assert!(epsilon_of(f64::INFINITY).is_nan());
        assert!(epsilon_of(f32::NAN).is_nan());
    }
}
