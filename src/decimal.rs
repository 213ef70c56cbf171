//! Arbitrary precision decimal values with an explicit rounding context.
//!
//! This module wraps `dashu`'s decimal big float in a [`Decimal`] newtype
//! and pins every value to a significant-digit precision, so divisions and
//! transcendental operations always round instead of diverging on
//! non-terminating results.

use dashu::base::error::ParseError;
use dashu::base::SquareRoot;
use dashu::float::DBig;
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

/// Guard digits appended to the requested precision for intermediate
/// arithmetic. Every operation rounds, so long quadrature sums accumulate
/// noise; the guard keeps that noise strictly below the 10^-P threshold.
const GUARD_DIGITS: usize = 8;

/// The first 100 fractional digits of π.
const PI_LITERAL: &str =
    "3.1415926535897932384626433832795028841971693993751058209749445923078164062862089986280348253421170679";

/// A count of significant decimal digits governing a computation.
///
/// `Precision` doubles as the factory for [`Decimal`] values: every constant
/// enters a computation through it and therefore carries a rounding context.
/// It also derives the `10^-P` convergence threshold used by adaptive
/// refinement and the upper-border search.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Precision {
    digits: usize,
}

impl Precision {
    /// Creates a context of `digits` significant decimal digits.
    ///
    /// # Panics
    ///
    /// Panics if `digits` is zero.
    #[must_use]
    pub fn new(digits: usize) -> Self {
        assert!(digits > 0, "precision must be at least one digit");
        Self { digits }
    }

    /// The number of significant digits results are reported at.
    #[must_use]
    pub fn digits(&self) -> usize {
        self.digits
    }

    fn working(&self) -> usize {
        self.digits + GUARD_DIGITS
    }

    /// Builds a decimal from an integer.
    #[must_use]
    pub fn from_i64(&self, value: i64) -> Decimal {
        Decimal(DBig::from(value).with_precision(self.working()).value())
    }

    /// Parses a decimal literal such as `"0.5"` or `"1e-8"`.
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not a valid decimal literal.
    pub fn parse(&self, literal: &str) -> Result<Decimal, ParseError> {
        DBig::from_str_native(literal)
            .map(|value| Decimal(value.with_precision(self.working()).value()))
    }

    /// The additive identity at this precision.
    #[must_use]
    pub fn zero(&self) -> Decimal {
        Decimal(DBig::ZERO.with_precision(self.working()).value())
    }

    /// The multiplicative identity at this precision.
    #[must_use]
    pub fn one(&self) -> Decimal {
        Decimal(DBig::ONE.with_precision(self.working()).value())
    }

    /// The convergence threshold `10^-P`.
    #[must_use]
    pub fn threshold(&self) -> Decimal {
        (self.one() / &self.from_i64(10)).powi(self.digits as u32)
    }

    /// π at the working precision.
    ///
    /// # Panics
    ///
    /// Panics if the context asks for more digits than the stored constant
    /// provides (92 significant digits).
    #[must_use]
    pub fn pi(&self) -> Decimal {
        assert!(
            self.working() <= 100,
            "π is available up to {} significant digits",
            100 - GUARD_DIGITS
        );
        let pi = DBig::from_str_native(PI_LITERAL).expect("π literal is a valid decimal");
        Decimal(pi.with_precision(self.working()).value())
    }

    /// Rounds a value back to the reported precision, dropping the guard
    /// digits. Intended for presenting final results.
    #[must_use]
    pub fn round(&self, value: &Decimal) -> Decimal {
        Decimal(value.0.clone().with_precision(self.digits).value())
    }
}

/// An arbitrary precision decimal number carrying its rounding context.
///
/// Values are created through [`Precision`]; arithmetic inherits the widest
/// precision of its operands, so a division can never be asked to produce a
/// non-terminating unrounded quotient.
#[derive(Clone, PartialEq)]
pub struct Decimal(DBig);

impl Decimal {
    /// Returns the absolute value.
    #[must_use]
    pub fn abs(&self) -> Self {
        if self.0 < DBig::ZERO {
            Self(-self.0.clone())
        } else {
            self.clone()
        }
    }

    /// The natural exponential `e^self`, rounded at this value's precision.
    #[must_use]
    pub fn exp(&self) -> Self {
        Self(self.0.clone().exp())
    }

    /// The square root, rounded at this value's precision.
    ///
    /// # Panics
    ///
    /// Panics if the value is negative.
    #[must_use]
    pub fn sqrt(&self) -> Self {
        Self(self.0.clone().sqrt())
    }

    /// Computes `self^exp` by binary exponentiation.
    #[must_use]
    pub fn powi(&self, exp: u32) -> Self {
        let one = Self(DBig::ONE.with_precision(self.0.precision()).value());
        if exp == 0 {
            return one;
        }
        let mut result = one;
        let mut base = self.clone();
        let mut e = exp;
        while e > 0 {
            if e & 1 == 1 {
                result = result * &base;
            }
            base = &base * &base;
            e >>= 1;
        }
        result
    }

    /// Consumes and returns the inner `dashu` float.
    #[must_use]
    pub fn into_inner(self) -> DBig {
        self.0
    }

    /// Returns a reference to the inner `dashu` float.
    #[must_use]
    pub fn as_inner(&self) -> &DBig {
        &self.0
    }
}

/// Returns the absolute difference `|a - b|` of two decimals.
///
/// Order-independent and non-mutating; this is the convergence metric for
/// adaptive refinement and the upper-border search.
#[must_use]
pub fn diff(a: &Decimal, b: &Decimal) -> Decimal {
    if a < b {
        b - a
    } else {
        a - b
    }
}

impl PartialOrd for Decimal {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.0.partial_cmp(&other.0)
    }
}

impl fmt::Debug for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Decimal({})", self.0)
    }
}

impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// Arithmetic operations
impl Add for Decimal {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Add<&Decimal> for Decimal {
    type Output = Self;

    fn add(self, rhs: &Decimal) -> Self::Output {
        Self(self.0 + &rhs.0)
    }
}

impl Add for &Decimal {
    type Output = Decimal;

    fn add(self, rhs: Self) -> Self::Output {
        Decimal(&self.0 + &rhs.0)
    }
}

impl Sub for Decimal {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl Sub<&Decimal> for Decimal {
    type Output = Self;

    fn sub(self, rhs: &Decimal) -> Self::Output {
        Self(self.0 - &rhs.0)
    }
}

impl Sub for &Decimal {
    type Output = Decimal;

    fn sub(self, rhs: Self) -> Self::Output {
        Decimal(&self.0 - &rhs.0)
    }
}

impl Mul for Decimal {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self(self.0 * rhs.0)
    }
}

impl Mul<&Decimal> for Decimal {
    type Output = Self;

    fn mul(self, rhs: &Decimal) -> Self::Output {
        Self(self.0 * &rhs.0)
    }
}

impl Mul for &Decimal {
    type Output = Decimal;

    fn mul(self, rhs: Self) -> Self::Output {
        Decimal(&self.0 * &rhs.0)
    }
}

impl Div for Decimal {
    type Output = Self;

    fn div(self, rhs: Self) -> Self::Output {
        Self(self.0 / rhs.0)
    }
}

impl Div<&Decimal> for Decimal {
    type Output = Self;

    fn div(self, rhs: &Decimal) -> Self::Output {
        Self(self.0 / &rhs.0)
    }
}

impl Div for &Decimal {
    type Output = Decimal;

    fn div(self, rhs: Self) -> Self::Output {
        Decimal(&self.0 / &rhs.0)
    }
}

impl Neg for Decimal {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

impl Neg for &Decimal {
    type Output = Decimal;

    fn neg(self) -> Self::Output {
        Decimal(-self.0.clone())
    }
}
