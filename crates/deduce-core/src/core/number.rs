//! Number type for exact and floating arithmetic
//!
//! Supports three representations:
//! - Integer: machine integers (i64 with promotion to Rational on overflow)
//! - Rational: exact fractions (numerator/denominator as BigInt)
//! - Float: floating-point approximations (f64)
//!
//! Division of integers stays exact: it yields an `Integer` when the divisor
//! evenly divides the dividend and a `Rational` otherwise. Any `Float`
//! operand makes the result `Float`.

use crate::error::{DeductionError, DeductionResult};
use num_bigint::BigInt;
use num_integer::Integer as _;
use num_rational::BigRational;
use num_traits::{One, ToPrimitive, Zero};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Add, Div, Mul, Neg, Sub};

/// Unified number type supporting integers, exact rationals, and floats
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Number {
    Integer(i64),
    Rational(Box<BigRational>),
    Float(f64),
}

impl Number {
    /// Create an integer number
    ///
    /// # Examples
    ///
    /// ```rust
    /// use deduce_core::Number;
    ///
    /// let num = Number::integer(42);
    /// ```
    pub fn integer(value: i64) -> Self {
        Self::Integer(value)
    }

    /// Create a float number
    ///
    /// # Examples
    ///
    /// ```rust
    /// use deduce_core::Number;
    ///
    /// let num = Number::float(3.14);
    /// ```
    pub fn float(value: f64) -> Self {
        Self::Float(value)
    }

    /// Create a rational number, normalizing unit denominators to `Integer`
    ///
    /// # Examples
    ///
    /// ```rust
    /// use deduce_core::Number;
    /// use num_rational::BigRational;
    /// use num_bigint::BigInt;
    ///
    /// let three_quarters = BigRational::new(BigInt::from(3), BigInt::from(4));
    /// let num = Number::rational(three_quarters);
    ///
    /// let whole = BigRational::new(BigInt::from(8), BigInt::from(4));
    /// assert_eq!(Number::rational(whole), Number::integer(2));
    /// ```
    pub fn rational(value: BigRational) -> Self {
        if value.denom().is_one() {
            if let Some(i) = value.numer().to_i64() {
                return Self::Integer(i);
            }
        }
        Self::Rational(Box::new(value))
    }

    /// Check whether the number is the additive identity
    ///
    /// The test is `z == -z`, which holds exactly for zero in any field
    /// with well-defined negation.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use deduce_core::Number;
    ///
    /// assert!(Number::integer(0).is_zero());
    /// assert!(Number::float(0.0).is_zero());
    /// assert!(!Number::integer(3).is_zero());
    /// ```
    pub fn is_zero(&self) -> bool {
        match self {
            Number::Integer(i) => *i == 0,
            Number::Rational(r) => r.is_zero(),
            Number::Float(f) => *f == -*f,
        }
    }

    /// Check whether the number is the multiplicative identity
    pub fn is_one(&self) -> bool {
        match self {
            Number::Integer(i) => *i == 1,
            Number::Rational(r) => r.is_one(),
            Number::Float(f) => *f == 1.0,
        }
    }

    /// Approximate the number as a double-precision float
    ///
    /// Exact for integers and small rationals; large rationals round and
    /// may saturate to infinity.
    pub fn to_f64(&self) -> f64 {
        match self {
            Number::Integer(i) => *i as f64,
            Number::Rational(r) => r.to_f64().unwrap_or(f64::NAN),
            Number::Float(f) => *f,
        }
    }

}

impl From<i64> for Number {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<i32> for Number {
    fn from(value: i32) -> Self {
        Self::Integer(value as i64)
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<BigRational> for Number {
    fn from(value: BigRational) -> Self {
        Self::rational(value)
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Integer(i) => write!(f, "{}", i),
            Number::Float(fl) => write!(f, "{}", fl),
            Number::Rational(r) => {
                if r.denom().is_one() {
                    write!(f, "{}", r.numer())
                } else {
                    write!(f, "{}/{}", r.numer(), r.denom())
                }
            }
        }
    }
}

// Structural equality is what the derived PartialEq gives (variants are
// compared per-field, never cross-variant); library arithmetic normalizes
// unit-denominator rationals back to Integer so the exact path never holds
// two representations of the same value.
impl Eq for Number {}

impl Hash for Number {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            Number::Integer(i) => {
                0u8.hash(state);
                i.hash(state);
            }
            Number::Rational(r) => {
                1u8.hash(state);
                r.numer().hash(state);
                r.denom().hash(state);
            }
            Number::Float(f) => {
                2u8.hash(state);
                // -0.0 == 0.0 must hash identically
                let canonical = if *f == 0.0 { 0.0f64 } else { *f };
                canonical.to_bits().hash(state);
            }
        }
    }
}

/// Addition with promotion to Rational on i64 overflow
impl Add for Number {
    type Output = Number;

    fn add(self, other: Number) -> Number {
        match (self, other) {
            (Number::Integer(a), Number::Integer(b)) => match a.checked_add(b) {
                Some(result) => Number::Integer(result),
                None => Number::rational(
                    BigRational::from_integer(BigInt::from(a))
                        + BigRational::from_integer(BigInt::from(b)),
                ),
            },

            (Number::Float(a), b) => Number::Float(a + b.to_f64()),
            (a, Number::Float(b)) => Number::Float(a.to_f64() + b),

            (Number::Rational(a), Number::Rational(b)) => Number::rational(*a + *b),

            (Number::Integer(i), Number::Rational(r))
            | (Number::Rational(r), Number::Integer(i)) => {
                Number::rational(BigRational::from_integer(BigInt::from(i)) + *r)
            }
        }
    }
}

impl Sub for Number {
    type Output = Number;

    fn sub(self, other: Number) -> Number {
        self + (-other)
    }
}

/// Multiplication with promotion to Rational on i64 overflow
impl Mul for Number {
    type Output = Number;

    fn mul(self, other: Number) -> Number {
        match (self, other) {
            (Number::Integer(a), Number::Integer(b)) => match a.checked_mul(b) {
                Some(result) => Number::Integer(result),
                None => Number::rational(
                    BigRational::from_integer(BigInt::from(a))
                        * BigRational::from_integer(BigInt::from(b)),
                ),
            },

            (Number::Float(a), b) => Number::Float(a * b.to_f64()),
            (a, Number::Float(b)) => Number::Float(a.to_f64() * b),

            (Number::Rational(a), Number::Rational(b)) => Number::rational(*a * *b),

            (Number::Integer(i), Number::Rational(r))
            | (Number::Rational(r), Number::Integer(i)) => {
                Number::rational(BigRational::from_integer(BigInt::from(i)) * *r)
            }
        }
    }
}

/// Exact division: integers divide to an integer when even, a rational
/// otherwise; float operands fall through to host float division
impl Div for Number {
    type Output = DeductionResult<Number>;

    fn div(self, other: Number) -> DeductionResult<Number> {
        if other.is_zero() {
            return Err(DeductionError::DivisionByZero);
        }

        match (self, other) {
            (Number::Integer(a), Number::Integer(b)) => {
                if a.is_multiple_of(&b) {
                    Ok(Number::Integer(a / b))
                } else {
                    Ok(Number::rational(BigRational::new(
                        BigInt::from(a),
                        BigInt::from(b),
                    )))
                }
            }

            (Number::Float(a), b) => Ok(Number::Float(a / b.to_f64())),
            (a, Number::Float(b)) => Ok(Number::Float(a.to_f64() / b)),

            (Number::Rational(a), Number::Rational(b)) => Ok(Number::rational(*a / *b)),

            (Number::Integer(i), Number::Rational(r)) => Ok(Number::rational(
                BigRational::from_integer(BigInt::from(i)) / *r,
            )),

            (Number::Rational(r), Number::Integer(i)) => Ok(Number::rational(
                *r / BigRational::from_integer(BigInt::from(i)),
            )),
        }
    }
}

impl Neg for Number {
    type Output = Number;

    fn neg(self) -> Number {
        match self {
            Number::Integer(i) => match i.checked_neg() {
                Some(result) => Number::Integer(result),
                None => Number::rational(-BigRational::from_integer(BigInt::from(i))),
            },
            Number::Rational(r) => Number::Rational(Box::new(-*r)),
            Number::Float(f) => Number::Float(-f),
        }
    }
}
