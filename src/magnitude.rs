// MIT/Apache2 License

use precision_bits::Ieee754;
use std::sync::OnceLock;

/// Negative powers of ten, `NEGATIVE_POWERS_OF_TEN[i] == 10^-i`. These are the exact literals rather than
/// the result of repeated division, which accumulates error.
const NEGATIVE_POWERS_OF_TEN: [f64; 23] = [
    1e0, 1e-1, 1e-2, 1e-3, 1e-4, 1e-5, 1e-6, 1e-7, 1e-8, 1e-9, 1e-10, 1e-11, 1e-12, 1e-13, 1e-14, 1e-15, 1e-16,
    1e-17, 1e-18, 1e-19, 1e-20, 1e-21, 1e-22,
];

/// The two floating point precisions this crate knows about.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Precision {
    /// 32-bit `f32`.
    Single,
    /// 64-bit `f64`.
    Double,
}

impl Precision {
    /// The precision of the float type `F`.
    #[inline]
    pub fn of<F: Ieee754>() -> Precision {
        if F::MANTISSA_DIGITS <= <f32 as Ieee754>::MANTISSA_DIGITS {
            Precision::Single
        } else {
            Precision::Double
        }
    }

    /// The smallest relative step between adjacent values near `1.0`: `2^-53` for double precision and `2^-24`
    /// for single precision.
    #[inline]
    pub fn machine_epsilon(self) -> f64 {
        match self {
            Precision::Single => <f32 as Ieee754>::MACHINE_EPSILON,
            Precision::Double => <f64 as Ieee754>::MACHINE_EPSILON,
        }
    }

    /// Twice the machine epsilon, the distance from `1.0` to the next larger value.
    #[inline]
    pub fn positive_machine_epsilon(self) -> f64 {
        2.0 * self.machine_epsilon()
    }

    /// The accuracy used when the caller does not pick a tolerance, ten machine epsilons.
    #[inline]
    pub fn default_accuracy(self) -> f64 {
        10.0 * self.machine_epsilon()
    }

    /// The number of decimal digits this precision can hold, `ceil(|log10(machine_epsilon)|)`.
    pub fn decimal_places(self) -> u32 {
        static DECIMAL_PLACES: OnceLock<[u32; 2]> = OnceLock::new();

        let places = DECIMAL_PLACES.get_or_init(|| {
            [Precision::Single, Precision::Double]
                .map(|precision| precision.machine_epsilon().log10().abs().ceil() as u32)
        });

        match self {
            Precision::Single => places[0],
            Precision::Double => places[1],
        }
    }
}

/// `10^exponent`, served from a table for the common small negative exponents.
#[inline]
pub fn power_of_ten(exponent: i32) -> f64 {
    exponent
        .checked_neg()
        .and_then(|index| usize::try_from(index).ok())
        .and_then(|index| NEGATIVE_POWERS_OF_TEN.get(index).copied())
        .unwrap_or_else(|| 10f64.powi(exponent))
}

/// The decimal order of magnitude of `value`: the exponent `m` for which `|value| / 10^m` lies in `[1, 10)`.
///
/// Zero has a magnitude of zero. NaN also yields zero, and the infinities saturate to `i32::MAX`.
pub fn magnitude<F: Ieee754>(value: F) -> i32 {
    if value.is_zero() {
        return 0;
    }

    let log: f64 = Into::<f64>::into(value).abs().log10();
    let truncated = log.trunc();

    // truncation rounds towards zero, which puts fractional values one decade too high
    if log < 0.0 && log != truncated {
        truncated as i32 - 1
    } else {
        truncated as i32
    }
}

/// Scale `value` into the unit decade, `value / 10^magnitude(value)`. The sign is kept.
///
/// Zero, NaN and the infinities are returned unchanged.
pub fn scale_unit_magnitude<F: Ieee754>(value: F) -> F {
    if value.is_zero() || !value.is_finite() {
        return value;
    }

    let scaled = Into::<f64>::into(value) / power_of_ten(magnitude(value));
    F::from_f64_lossy(scaled)
}
