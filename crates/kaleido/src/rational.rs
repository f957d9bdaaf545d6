//! Exact rationals recovered from floating-point Wythoff parameters.
//!
//! Purpose
//! - Symbols are parsed into `f64` angles (`5/2` becomes `2.5`); the solver
//!   needs the exact numerator and denominator back. `Rational::from_float`
//!   runs the continued-fraction recurrence until a convergent reproduces the
//!   input bit for bit.
//! - `1/0` is the sentinel for "infinity". Callers check `is_infinite` and
//!   never divide by the denominator blindly.

use std::fmt;

/// Hard cap on continued-fraction terms. A finite double always terminates
/// long before this; the cap only guards against pathological inputs.
const MAX_TERMS: usize = 96;

/// A reduced fraction `n/d` with `d >= 0`.
///
/// Equality is cross-multiplication, so `1/0 == 2/0` and `2/4 == 1/2`.
#[derive(Clone, Copy, Debug)]
pub struct Rational {
    n: i64,
    d: i64,
}

impl Rational {
    /// The `1/0` sentinel.
    pub const INFINITY: Rational = Rational { n: 1, d: 0 };
    pub const ZERO: Rational = Rational { n: 0, d: 1 };

    /// Builds a reduced fraction; the sign moves to the numerator.
    ///
    /// Reduction runs in `i128`. A reduced part that no longer fits (only
    /// possible when `i64::MIN` changes sign) saturates at `i64::MAX`.
    pub fn new(n: i64, d: i64) -> Self {
        if d == 0 {
            return Self {
                n: if n < 0 { -1 } else { 1 },
                d: 0,
            };
        }
        let g = i128::from(gcd(n.unsigned_abs(), d.unsigned_abs()));
        let s: i128 = if d < 0 { -1 } else { 1 };
        let fit = |x: i128| i64::try_from(x).unwrap_or(i64::MAX);
        Self {
            n: fit(s * i128::from(n) / g),
            d: fit(s * i128::from(d) / g),
        }
    }

    /// Continued-fraction expansion of `x`.
    ///
    /// Stops at the first convergent whose float value equals `x`. If the next
    /// convergent would overflow `i64`, the last representable one is returned.
    /// Non-finite input maps to `1/0` (or `-1/0`).
    pub fn from_float(x: f64) -> Self {
        if x.is_nan() {
            return Self::INFINITY;
        }
        let mut s = x;
        let mut r = Rational { n: 0, d: 1 };
        let mut frax = Rational { n: 1, d: 0 };
        if x == f64::NEG_INFINITY {
            frax.n = -1;
        }
        for _ in 0..MAX_TERMS {
            if s.abs() > f64::MAX {
                return frax;
            }
            let f = s.floor();
            if f.abs() >= i64::MAX as f64 {
                return frax;
            }
            let fi = f as i64;
            let r0 = r;
            r = frax;
            let next_n = frax.n.checked_mul(fi).and_then(|v| v.checked_add(r0.n));
            let next_d = frax.d.checked_mul(fi).and_then(|v| v.checked_add(r0.d));
            match (next_n, next_d) {
                (Some(n), Some(d)) => frax = Rational { n, d },
                _ => return r,
            }
            if x == frax.n as f64 / frax.d as f64 {
                return frax;
            }
            s = 1.0 / (s - f);
        }
        frax
    }

    #[inline]
    pub fn numerator(&self) -> i64 {
        self.n
    }

    #[inline]
    pub fn denominator(&self) -> i64 {
        self.d
    }

    #[inline]
    pub fn is_infinite(&self) -> bool {
        self.d == 0
    }

    /// Float value; `±inf` for the sentinel.
    pub fn value(&self) -> f64 {
        if self.d == 0 {
            if self.n < 0 {
                f64::NEG_INFINITY
            } else {
                f64::INFINITY
            }
        } else {
            self.n as f64 / self.d as f64
        }
    }

    /// `n / (n - d)`: the supplementary polygon, e.g. `{5/2}` for `{5/3}`.
    pub fn complement(&self) -> f64 {
        self.n as f64 / (self.n - self.d) as f64
    }
}

impl PartialEq for Rational {
    fn eq(&self, other: &Self) -> bool {
        (self.n as i128) * (other.d as i128) == (other.n as i128) * (self.d as i128)
    }
}

impl Eq for Rational {}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.d {
            0 => write!(f, "infinity"),
            1 => write!(f, "{}", self.n),
            d => write!(f, "{}/{}", self.n, d),
        }
    }
}

/// Numerator of the fraction recovered from `x`.
#[inline]
pub fn numerator(x: f64) -> i64 {
    Rational::from_float(x).numerator()
}

/// Denominator of the fraction recovered from `x`.
#[inline]
pub fn denominator(x: f64) -> i64 {
    Rational::from_float(x).denominator()
}

/// `n / (n - d)` for the fraction recovered from `x`.
#[inline]
pub fn complement(x: f64) -> f64 {
    Rational::from_float(x).complement()
}

/// Formats `x` as `n`, `n/d` or `infinity`.
pub fn format_fraction(x: f64) -> String {
    Rational::from_float(x).to_string()
}

fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        let t = a % b;
        a = b;
        b = t;
    }
    a.max(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn representative_fractions_reconstruct() {
        for (n, d) in [(5, 2), (3, 1), (7, 3), (5, 3), (4, 3), (3, 2), (5, 4)] {
            let x = n as f64 / d as f64;
            let r = Rational::from_float(x);
            assert_eq!((r.numerator(), r.denominator()), (n, d));
            assert!((r.value() - x).abs() <= f64::EPSILON * x);
            // Stable under its own output.
            assert_eq!(Rational::from_float(r.value()), r);
        }
    }

    #[test]
    fn zero_negative_and_infinite_inputs() {
        assert_eq!(Rational::from_float(0.0), Rational::ZERO);
        let r = Rational::from_float(-2.5);
        assert_eq!((r.numerator(), r.denominator()), (-5, 2));
        assert!(Rational::from_float(f64::INFINITY).is_infinite());
        assert!(Rational::from_float(f64::NAN).is_infinite());
        // Past the i64 range the expansion stops at the sentinel.
        assert!(Rational::from_float(1e300).is_infinite());
        assert!(Rational::from_float(-1e300).is_infinite());
    }

    #[test]
    fn complement_and_display() {
        assert!((complement(2.5) - 5.0 / 3.0).abs() < 1e-15);
        assert!((complement(3.0) - 1.5).abs() < 1e-15);
        assert_eq!(format_fraction(2.5), "5/2");
        assert_eq!(format_fraction(4.0), "4");
        assert_eq!(Rational::INFINITY.to_string(), "infinity");
        assert_eq!(numerator(5.0 / 3.0), 5);
        assert_eq!(denominator(5.0 / 3.0), 3);
    }

    #[test]
    fn equality_is_cross_multiplication() {
        assert_eq!(Rational::new(2, 4), Rational::new(1, 2));
        assert_eq!(Rational::new(3, -6), Rational::new(-1, 2));
        assert_eq!(Rational::new(7, 0), Rational::INFINITY);
        assert_ne!(Rational::new(5, 2), Rational::new(5, 3));
    }

    #[test]
    fn extreme_parts_do_not_overflow() {
        let r = Rational::new(i64::MIN, -1);
        assert_eq!((r.numerator(), r.denominator()), (i64::MAX, 1));
        let r = Rational::new(1, i64::MIN);
        assert_eq!((r.numerator(), r.denominator()), (-1, i64::MAX));
        let r = Rational::new(i64::MIN, i64::MIN);
        assert_eq!((r.numerator(), r.denominator()), (1, 1));
        let r = Rational::new(i64::MIN, 2);
        assert_eq!((r.numerator(), r.denominator()), (i64::MIN / 2, 1));
    }

    proptest! {
        #[test]
        fn reduced_fractions_round_trip(n in 1i64..2000, d in 1i64..2000) {
            let expect = Rational::new(n, d);
            let r = Rational::from_float(n as f64 / d as f64);
            prop_assert_eq!(r.numerator(), expect.numerator());
            prop_assert_eq!(r.denominator(), expect.denominator());
        }
    }
}
