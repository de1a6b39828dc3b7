// MIT/Apache2 License

use crate::{
    error::{Error, InvalidArgument, Result},
    magnitude::Precision,
};
use ordered_float::NotNan;
use std::num::NonZeroU64;

/// How close two values need to be before they count as equal.
///
/// A tolerance picks exactly one criterion: an absolute error, a relative error, a number of significant
/// decimal places or a number of ULPs. It can only be built through the checked constructors, so every
/// `Tolerance` holds a positive error bound or a non-zero ULP count, and it can be used as a map key.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Tolerance {
    criterion: Criterion,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub(crate) enum Criterion {
    /// `|a - b| < max`.
    AbsoluteError(NotNan<f64>),
    /// `|a - b| < max * max(|a|, |b|)`, degrading to an absolute test near zero.
    RelativeError(NotNan<f64>),
    /// The values agree to this many significant decimal digits.
    DecimalPlaces(u32),
    /// At most this many representable values lie between the two.
    Ulps(NonZeroU64),
}

impl Tolerance {
    /// An absolute error bound. NaN and non-positive bounds are rejected.
    pub fn absolute(max_error: f64) -> Result<Tolerance> {
        error_bound(max_error).map(|max| Tolerance::with(Criterion::AbsoluteError(max)))
    }

    /// A relative error bound. NaN and non-positive bounds are rejected.
    pub fn relative(max_error: f64) -> Result<Tolerance> {
        error_bound(max_error).map(|max| Tolerance::with(Criterion::RelativeError(max)))
    }

    /// Agreement to `places` significant decimal digits.
    pub fn decimal_places(places: i32) -> Result<Tolerance> {
        u32::try_from(places)
            .map(|places| Tolerance::with(Criterion::DecimalPlaces(places)))
            .map_err(|_| Error::invalid_argument(InvalidArgument::NegativeDecimalPlaces(places)))
    }

    /// At most `max_ulps` representable values apart.
    pub fn ulps(max_ulps: u64) -> Result<Tolerance> {
        NonZeroU64::new(max_ulps)
            .map(|max| Tolerance::with(Criterion::Ulps(max)))
            .ok_or_else(|| Error::invalid_argument(InvalidArgument::ZeroUlps))
    }

    /// Whether this is an absolute error bound.
    #[inline]
    pub fn is_absolute(self) -> bool {
        matches!(self.criterion, Criterion::AbsoluteError(_))
    }

    /// Whether this is a relative error bound.
    #[inline]
    pub fn is_relative(self) -> bool {
        matches!(self.criterion, Criterion::RelativeError(_))
    }

    /// The error bound of an absolute or relative tolerance.
    #[inline]
    pub fn max_error(self) -> Option<f64> {
        match self.criterion {
            Criterion::AbsoluteError(max) | Criterion::RelativeError(max) => Some(max.into_inner()),
            _ => None,
        }
    }

    /// The number of significant digits of a decimal-places tolerance.
    #[inline]
    pub fn places(self) -> Option<u32> {
        match self.criterion {
            Criterion::DecimalPlaces(places) => Some(places),
            _ => None,
        }
    }

    /// The ULP count of an ULP tolerance.
    #[inline]
    pub fn max_ulps(self) -> Option<u64> {
        match self.criterion {
            Criterion::Ulps(max) => Some(max.get()),
            _ => None,
        }
    }

    #[inline]
    fn with(criterion: Criterion) -> Tolerance {
        Tolerance { criterion }
    }

    #[inline]
    pub(crate) fn criterion(self) -> Criterion {
        self.criterion
    }
}

impl Default for Tolerance {
    /// An absolute error of ten double precision machine epsilons.
    #[inline]
    fn default() -> Tolerance {
        let accuracy = NotNan::<f64>::from(10_u8) * Precision::Double.machine_epsilon();
        Tolerance::with(Criterion::AbsoluteError(accuracy))
    }
}

pub(crate) fn error_bound(max_error: f64) -> Result<NotNan<f64>> {
    let max_error = NotNan::new(max_error).map_err(|_| Error::invalid_argument(InvalidArgument::NanError))?;
    if max_error.into_inner() > 0.0 {
        Ok(max_error)
    } else {
        Err(Error::invalid_argument(InvalidArgument::NonPositiveError(
            max_error.into_inner(),
        )))
    }
}
