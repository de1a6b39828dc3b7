// MIT/Apache2 License

use crate::{
    equality::{within_absolute, within_relative, within_ulps},
    magnitude::Precision,
};
use approx::{AbsDiffEq, RelativeEq, UlpsEq};
use precision_bits::Ieee754;

/// A float compared through this crate's predicates when used with the `approx` traits and macros.
///
/// Unlike the plain `f32`/`f64` implementations in `approx`, an infinity only matches the identical infinity
/// and NaN never matches, whatever epsilon is passed in.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd, Default)]
#[repr(transparent)]
pub struct Precise<F>(pub F);

impl<F> Precise<F> {
    /// Get the wrapped value.
    #[inline]
    pub fn into_inner(self) -> F {
        self.0
    }
}

impl<F> From<F> for Precise<F> {
    #[inline]
    fn from(value: F) -> Self {
        Precise(value)
    }
}

impl<F: Ieee754> AbsDiffEq for Precise<F> {
    type Epsilon = f64;

    #[inline]
    fn default_epsilon() -> f64 {
        Precision::of::<F>().default_accuracy()
    }

    #[inline]
    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        within_absolute(self.0, other.0, epsilon)
    }
}

impl<F: Ieee754> RelativeEq for Precise<F> {
    #[inline]
    fn default_max_relative() -> f64 {
        Precision::of::<F>().default_accuracy()
    }

    #[inline]
    fn relative_eq(&self, other: &Self, epsilon: f64, max_relative: f64) -> bool {
        within_absolute(self.0, other.0, epsilon)
            || within_relative(self.0, other.0, max_relative)
    }
}

impl<F: Ieee754> UlpsEq for Precise<F> {
    #[inline]
    fn default_max_ulps() -> u32 {
        4
    }

    #[inline]
    fn ulps_eq(&self, other: &Self, epsilon: f64, max_ulps: u32) -> bool {
        within_absolute(self.0, other.0, epsilon)
            || within_ulps(self.0, other.0, u64::from(max_ulps))
    }
}
