// MIT/Apache2 License

//! Approximate comparison of floating point values.
//!
//! Binary floating point arithmetic is inexact, so two computations that "should" agree rarely produce the
//! same bits. This crate decides when two values are close enough to be treated as equal, and lets callers
//! move between neighbouring representable values.
//!
//! A comparison is parameterized by a [`Tolerance`], which selects one of four criteria: absolute error,
//! relative error, significant decimal places or a count of representable values (ULPs) between the two.
//! Whatever the criterion, NaN never equals anything and an infinity only equals itself.
//!
//! ```
//! use precision::{almost_equal, increment, ulp_distance, Tolerance};
//!
//! let tolerance = Tolerance::decimal_places(3).unwrap();
//! assert!(almost_equal(1.0, 1.0004, tolerance));
//! assert!(!almost_equal(f64::NAN, f64::NAN, tolerance));
//!
//! assert_eq!(ulp_distance(1.0, increment(1.0, 3)).unwrap(), 3);
//! ```
//!
//! Composite values such as vectors take part through the [`Norm`] and [`NormOfDifference`] traits and
//! [`almost_equal_norm`].

mod equality;
mod error;
mod interop;
mod magnitude;
mod norm;
mod ordering;
mod range;
mod tolerance;

pub use equality::*;
pub use error::*;
pub use interop::*;
pub use magnitude::*;
pub use norm::*;
pub use ordering::*;
pub use range::*;
pub use tolerance::*;

pub use precision_bits::{
    decrement, epsilon_of, increment, next_down_by, next_up_by, positive_epsilon_of, Ieee754,
};
