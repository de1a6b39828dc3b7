// MIT/Apache2 License

use crate::{
    equality::{norm_within_absolute, norm_within_decimal_places, norm_within_relative},
    error::{Error, Result},
    magnitude::Precision,
    tolerance::{Criterion, Tolerance},
};
use precision_bits::Ieee754;

/// A non-negative measure of how far a value is from its zero.
pub trait Norm {
    fn norm(&self) -> f64;

    /// The precision of the values the norm is computed from. Its machine epsilon decides when a norm counts
    /// as being near zero.
    #[inline]
    fn precision(&self) -> Precision {
        Precision::Double
    }
}

/// A non-negative measure of how far apart two values are.
pub trait NormOfDifference<Rhs: ?Sized = Self> {
    fn norm_of_difference(&self, other: &Rhs) -> f64;
}

/// Types that can be compared with [`almost_equal_norm`]. Implemented for everything that has both a
/// [`Norm`] and a [`NormOfDifference`] with itself.
pub trait PrecisionSupport: Norm + NormOfDifference {}

impl<T: Norm + NormOfDifference + ?Sized> PrecisionSupport for T {}

/// Whether `a` and `b` are within `tolerance` of each other, judged by their norms.
///
/// The absolute, relative and decimal-places criteria are the scalar ones with `a.norm()`, `b.norm()` and
/// `a.norm_of_difference(b)` substituted in. ULPs only exist for individual floats, so an ULP tolerance is
/// unsupported here.
pub fn almost_equal_norm<T: PrecisionSupport + ?Sized>(a: &T, b: &T, tolerance: Tolerance) -> Result<bool> {
    let (norm_a, norm_b) = (a.norm(), b.norm());
    let diff = a.norm_of_difference(b);
    let epsilon = a.precision().max(b.precision()).machine_epsilon();

    match tolerance.criterion() {
        Criterion::AbsoluteError(max) => Ok(norm_within_absolute(norm_a, norm_b, diff, max.into_inner())),
        Criterion::RelativeError(max) => Ok(norm_within_relative(
            norm_a,
            norm_b,
            diff,
            max.into_inner(),
            epsilon,
        )),
        Criterion::DecimalPlaces(places) => Ok(norm_within_decimal_places(
            norm_a, norm_b, diff, places, epsilon,
        )),
        Criterion::Ulps(_) => Err(Error::unsupported()),
    }
}

impl Norm for f64 {
    #[inline]
    fn norm(&self) -> f64 {
        self.abs()
    }
}

impl NormOfDifference for f64 {
    #[inline]
    fn norm_of_difference(&self, other: &f64) -> f64 {
        (self - other).abs()
    }
}

impl Norm for f32 {
    #[inline]
    fn norm(&self) -> f64 {
        f64::from(self.abs())
    }

    #[inline]
    fn precision(&self) -> Precision {
        Precision::Single
    }
}

impl NormOfDifference for f32 {
    #[inline]
    fn norm_of_difference(&self, other: &f32) -> f64 {
        f64::from((self - other).abs())
    }
}

// vectors use the euclidean norm

impl<F: Ieee754> Norm for [F] {
    fn norm(&self) -> f64 {
        self.iter()
            .map(|&x| {
                let x: f64 = x.into();
                x * x
            })
            .sum::<f64>()
            .sqrt()
    }

    #[inline]
    fn precision(&self) -> Precision {
        Precision::of::<F>()
    }
}

impl<F: Ieee754> NormOfDifference for [F] {
    /// Slices of different lengths are infinitely far apart.
    fn norm_of_difference(&self, other: &[F]) -> f64 {
        if self.len() != other.len() {
            return f64::INFINITY;
        }

        self.iter()
            .zip(other)
            .map(|(&a, &b)| {
                let diff: f64 = (a - b).into();
                diff * diff
            })
            .sum::<f64>()
            .sqrt()
    }
}

impl<F: Ieee754, const N: usize> Norm for [F; N] {
    #[inline]
    fn norm(&self) -> f64 {
        self[..].norm()
    }

    #[inline]
    fn precision(&self) -> Precision {
        self[..].precision()
    }
}

impl<F: Ieee754, const N: usize> NormOfDifference for [F; N] {
    #[inline]
    fn norm_of_difference(&self, other: &[F; N]) -> f64 {
        self[..].norm_of_difference(&other[..])
    }
}

impl<F: Ieee754> Norm for Vec<F> {
    #[inline]
    fn norm(&self) -> f64 {
        self.as_slice().norm()
    }

    #[inline]
    fn precision(&self) -> Precision {
        self.as_slice().precision()
    }
}

impl<F: Ieee754> NormOfDifference for Vec<F> {
    #[inline]
    fn norm_of_difference(&self, other: &Vec<F>) -> f64 {
        self.as_slice().norm_of_difference(other.as_slice())
    }
}
