//! Exact rational arithmetic without implicit normalization
//!
//! [`ExactFraction`] keeps whatever numerator/denominator pair the arithmetic
//! produces. Addition, subtraction and multiplication are plain
//! cross-multiplication; no GCD is taken until [`ExactFraction::reduce`] is
//! called.
//!
//! Denominators grow multiplicatively across unreduced operations. Reduce
//! before converting to `f64`, comparing denominators, or storing a value
//! that will be reused many times.

use std::{
    fmt,
    ops::{Add, Mul, Sub},
    str::FromStr,
};

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Signed, ToPrimitive, Zero};
use serde::{Serialize, Serializer};

use crate::{Error, Result};

/// Bits kept from numerator and denominator when a fraction is too large
/// to convert directly to `f64`.
const FLOAT_WINDOW_BITS: u64 = 128;

/// Signed rational number over arbitrary-precision integers.
///
/// The denominator is never zero. Its sign is whatever the inputs produced;
/// only [`reduce`](Self::reduce) forces it positive.
///
/// Equality is value equality: `2/4 == 1/2` and `1/-2 == -1/2`.
///
/// # Examples
///
/// ```
/// use chomp::ExactFraction;
///
/// let half = ExactFraction::new(1, 2).unwrap();
/// let third = ExactFraction::new(1, 3).unwrap();
/// let sum = &half + &third;
/// assert_eq!(sum.to_string(), "5/6");
///
/// let doubled = &sum + &sum;
/// assert_eq!(doubled.to_string(), "60/36");
/// assert_eq!(doubled.reduce().to_string(), "5/3");
/// ```
#[derive(Debug, Clone)]
pub struct ExactFraction {
    numerator: BigInt,
    denominator: BigInt,
}

impl ExactFraction {
    /// Create a fraction from a numerator and a non-zero denominator.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ZeroDenominator`] when `denominator` is zero.
    pub fn new(numerator: impl Into<BigInt>, denominator: impl Into<BigInt>) -> Result<Self> {
        let denominator = denominator.into();
        if denominator.is_zero() {
            return Err(Error::ZeroDenominator);
        }
        Ok(Self {
            numerator: numerator.into(),
            denominator,
        })
    }

    /// The fraction `value/1`.
    pub fn from_integer(value: impl Into<BigInt>) -> Self {
        Self {
            numerator: value.into(),
            denominator: BigInt::one(),
        }
    }

    pub fn zero() -> Self {
        Self::from_integer(0)
    }

    pub fn one() -> Self {
        Self::from_integer(1)
    }

    /// `1/2`, the reference point of every fair-game comparison.
    pub fn half() -> Self {
        Self {
            numerator: BigInt::one(),
            denominator: BigInt::from(2),
        }
    }

    pub fn numer(&self) -> &BigInt {
        &self.numerator
    }

    pub fn denom(&self) -> &BigInt {
        &self.denominator
    }

    pub fn is_zero(&self) -> bool {
        self.numerator.is_zero()
    }

    /// Divide without reducing: `(f.num * g.den) / (f.den * g.num)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DivideByZero`] when `other` has a zero numerator.
    pub fn checked_div(&self, other: &Self) -> Result<Self> {
        if other.numerator.is_zero() {
            return Err(Error::DivideByZero {
                operation: format!("fraction division {self} / {other}"),
            });
        }
        Ok(Self {
            numerator: &self.numerator * &other.denominator,
            denominator: &self.denominator * &other.numerator,
        })
    }

    /// Lowest-terms form with a positive denominator.
    ///
    /// Idempotent: reducing an already reduced fraction returns an identical
    /// pair. Zero reduces to `0/1`.
    pub fn reduce(&self) -> Self {
        // gcd is never zero here because the denominator is non-zero.
        let gcd = self.numerator.gcd(&self.denominator);
        let mut numerator = &self.numerator / &gcd;
        let mut denominator = &self.denominator / &gcd;
        if denominator.is_negative() {
            numerator = -numerator;
            denominator = -denominator;
        }
        Self {
            numerator,
            denominator,
        }
    }

    /// Whether the pair is already in canonical form.
    pub fn is_reduced(&self) -> bool {
        self.denominator.is_positive() && self.numerator.gcd(&self.denominator).is_one()
    }

    /// Nearest `f64`, computed without overflow for very large terms.
    pub fn to_f64(&self) -> f64 {
        if let (Some(n), Some(d)) = (self.numerator.to_f64(), self.denominator.to_f64()) {
            if n.is_finite() && d.is_finite() {
                return n / d;
            }
        }

        let bits = self.numerator.bits().max(self.denominator.bits());
        let shift = bits.saturating_sub(FLOAT_WINDOW_BITS);
        let n = (&self.numerator >> shift).to_f64().unwrap_or(f64::NAN);
        let d = (&self.denominator >> shift).to_f64().unwrap_or(f64::NAN);
        n / d
    }
}

impl From<i64> for ExactFraction {
    fn from(value: i64) -> Self {
        Self::from_integer(value)
    }
}

impl From<BigInt> for ExactFraction {
    fn from(value: BigInt) -> Self {
        Self::from_integer(value)
    }
}

impl PartialEq for ExactFraction {
    fn eq(&self, other: &Self) -> bool {
        &self.numerator * &other.denominator == &other.numerator * &self.denominator
    }
}

impl Eq for ExactFraction {}

impl Add<&ExactFraction> for &ExactFraction {
    type Output = ExactFraction;

    fn add(self, other: &ExactFraction) -> ExactFraction {
        ExactFraction {
            numerator: &self.numerator * &other.denominator + &other.numerator * &self.denominator,
            denominator: &self.denominator * &other.denominator,
        }
    }
}

impl Sub<&ExactFraction> for &ExactFraction {
    type Output = ExactFraction;

    fn sub(self, other: &ExactFraction) -> ExactFraction {
        ExactFraction {
            numerator: &self.numerator * &other.denominator - &other.numerator * &self.denominator,
            denominator: &self.denominator * &other.denominator,
        }
    }
}

impl Mul<&ExactFraction> for &ExactFraction {
    type Output = ExactFraction;

    fn mul(self, other: &ExactFraction) -> ExactFraction {
        ExactFraction {
            numerator: &self.numerator * &other.numerator,
            denominator: &self.denominator * &other.denominator,
        }
    }
}

impl Add for ExactFraction {
    type Output = ExactFraction;

    fn add(self, other: ExactFraction) -> ExactFraction {
        &self + &other
    }
}

impl Sub for ExactFraction {
    type Output = ExactFraction;

    fn sub(self, other: ExactFraction) -> ExactFraction {
        &self - &other
    }
}

impl Mul for ExactFraction {
    type Output = ExactFraction;

    fn mul(self, other: ExactFraction) -> ExactFraction {
        &self * &other
    }
}

impl fmt::Display for ExactFraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.denominator.is_one() {
            write!(f, "{}", self.numerator)
        } else {
            write!(f, "{}/{}", self.numerator, self.denominator)
        }
    }
}

impl FromStr for ExactFraction {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let parse_error = || Error::ParseFraction {
            input: s.to_string(),
        };
        let trimmed = s.trim();
        match trimmed.split_once('/') {
            Some((numerator, denominator)) => {
                let numerator = BigInt::from_str(numerator.trim()).map_err(|_| parse_error())?;
                let denominator =
                    BigInt::from_str(denominator.trim()).map_err(|_| parse_error())?;
                Self::new(numerator, denominator)
            }
            None => BigInt::from_str(trimmed)
                .map(Self::from_integer)
                .map_err(|_| parse_error()),
        }
    }
}

impl Serialize for ExactFraction {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
