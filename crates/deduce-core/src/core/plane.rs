//! Objects in the domain of 2D geometry

use crate::core::number::Number;
use crate::error::DeductionResult;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

/// A vector with two coordinates, conveniently named x and y
///
/// Addition and subtraction apply pointwise; multiplication and division
/// take a scalar.
///
/// # Examples
///
/// ```rust
/// use deduce_core::{Number, PlaneVector};
///
/// let a = PlaneVector::new(1, 2);
/// let b = PlaneVector::new(3, 4);
/// assert_eq!(a + b, PlaneVector::new(4, 6));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlaneVector {
    pub x: Number,
    pub y: Number,
}

impl PlaneVector {
    /// Create a vector from its two coordinates
    pub fn new<X: Into<Number>, Y: Into<Number>>(x: X, y: Y) -> Self {
        Self {
            x: x.into(),
            y: y.into(),
        }
    }
}

impl fmt::Display for PlaneVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl Add for PlaneVector {
    type Output = PlaneVector;

    fn add(self, other: PlaneVector) -> PlaneVector {
        PlaneVector {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}

impl Sub for PlaneVector {
    type Output = PlaneVector;

    fn sub(self, other: PlaneVector) -> PlaneVector {
        self + (-other)
    }
}

impl Neg for PlaneVector {
    type Output = PlaneVector;

    fn neg(self) -> PlaneVector {
        PlaneVector {
            x: -self.x,
            y: -self.y,
        }
    }
}

/// Scalar product, scaling both coordinates
impl Mul<Number> for PlaneVector {
    type Output = PlaneVector;

    fn mul(self, scalar: Number) -> PlaneVector {
        PlaneVector {
            x: self.x * scalar.clone(),
            y: self.y * scalar,
        }
    }
}

impl Mul<PlaneVector> for Number {
    type Output = PlaneVector;

    fn mul(self, vector: PlaneVector) -> PlaneVector {
        vector * self
    }
}

/// Scalar division, dividing both coordinates exactly
impl Div<Number> for PlaneVector {
    type Output = DeductionResult<PlaneVector>;

    fn div(self, scalar: Number) -> DeductionResult<PlaneVector> {
        Ok(PlaneVector {
            x: (self.x / scalar.clone())?,
            y: (self.y / scalar)?,
        })
    }
}
