// MIT/Apache2 License

use std::fmt;

/// Error type for precision operations.
pub struct Error {
    kind: Kind,
}

enum Kind {
    /// A tolerance or count that the operation cannot work with.
    InvalidArgument(InvalidArgument),
    /// An operation that is only defined for finite values received NaN or an infinity.
    NotFinite,
    /// The requested comparison cannot be performed on this kind of value.
    Unsupported,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub(crate) enum InvalidArgument {
    NanError,
    NonPositiveError(f64),
    NegativeDecimalPlaces(i32),
    ZeroUlps,
}

impl fmt::Display for InvalidArgument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidArgument::NanError => f.write_str("error tolerance must not be NaN"),
            InvalidArgument::NonPositiveError(e) => {
                write!(f, "error tolerance must be positive, got {}", e)
            }
            InvalidArgument::NegativeDecimalPlaces(places) => {
                write!(f, "decimal places must not be negative, got {}", places)
            }
            InvalidArgument::ZeroUlps => f.write_str("ULP count must be at least one"),
        }
    }
}

impl Error {
    #[inline]
    pub(crate) fn invalid_argument(arg: InvalidArgument) -> Self {
        log::debug!("Rejecting argument: {}", arg);
        Error {
            kind: Kind::InvalidArgument(arg),
        }
    }

    #[inline]
    pub(crate) fn not_finite() -> Self {
        Error {
            kind: Kind::NotFinite,
        }
    }

    #[inline]
    pub(crate) fn unsupported() -> Self {
        Error {
            kind: Kind::Unsupported,
        }
    }

    /// Was an argument rejected before anything was computed?
    #[inline]
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self.kind, Kind::InvalidArgument(_))
    }

    /// Did a finite-only operation receive NaN or an infinity?
    #[inline]
    pub fn is_not_finite(&self) -> bool {
        matches!(self.kind, Kind::NotFinite)
    }

    /// Is this an unsupported error?
    #[inline]
    pub fn is_unsupported(&self) -> bool {
        matches!(self.kind, Kind::Unsupported)
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        struct KindFmt<'a>(&'a Kind);

        impl<'a> fmt::Debug for KindFmt<'a> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                match self.0 {
                    Kind::InvalidArgument(i) => f.debug_tuple("InvalidArgument").field(i).finish(),
                    Kind::NotFinite => f.write_str("NotFinite"),
                    Kind::Unsupported => f.write_str("Unsupported"),
                }
            }
        }

        f.debug_tuple("Error").field(&KindFmt(&self.kind)).finish()
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            Kind::InvalidArgument(ref arg) => write!(f, "Invalid argument: {}", arg),
            Kind::NotFinite => f.write_str("Operation is undefined for NaN or infinite values"),
            Kind::Unsupported => f.write_str("Attempted to run an unsupported comparison"),
        }
    }
}

impl std::error::Error for Error {}

/// Convenience result type.
pub type Result<T = ()> = std::result::Result<T, Error>;
