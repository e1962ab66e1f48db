//! Error types for canonicalization, reduction, and solving
//!
//! All failures surface to the caller of the outermost solve; the library
//! performs no retries and no logging of its own.

use std::fmt;

/// Error type covering every failure mode of the deduction engines
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeductionError {
    /// A multiplication produced a cross-term of two non-constant bases,
    /// or a division had a non-constant divisor
    ///
    /// # Examples
    ///
    /// - `x * y` (cross-term)
    /// - `1 / x` (non-constant divisor)
    NonLinear {
        operation: String,
        reason: String,
    },

    /// Two sides of an equation, or the operands of an operation, split
    /// into component lists of incompatible lengths
    DimensionMismatch {
        expected: usize,
        found: usize,
    },

    /// Pivot search failed: a column is all additive-identity from the
    /// pivot row down, so the system is singular or under-determined
    Irreducible {
        column: usize,
    },

    /// An expression form appeared where the canonicalizer or splitter
    /// did not expect one
    TypeMismatch {
        context: &'static str,
        found: String,
    },

    /// An attribute chain was extended with a reserved name
    ///
    /// Attribute names beginning with an underscore are reserved.
    InvalidAttribute {
        name: String,
    },

    /// Division by the additive identity
    DivisionByZero,

    /// Evaluation encountered a variable with no binding in scope
    UnboundVariable {
        name: String,
    },
}

impl fmt::Display for DeductionError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            DeductionError::NonLinear { operation, reason } => {
                write!(f, "Non-linear {}: {}", operation, reason)
            }
            DeductionError::DimensionMismatch { expected, found } => {
                write!(
                    f,
                    "Dimension mismatch: expected {} component(s), found {}",
                    expected, found
                )
            }
            DeductionError::Irreducible { column } => {
                write!(f, "Irreducible rows: no usable pivot in column {}", column)
            }
            DeductionError::TypeMismatch { context, found } => {
                write!(f, "Type mismatch in {}: unexpected {}", context, found)
            }
            DeductionError::InvalidAttribute { name } => {
                write!(f, "Attribute name {} is reserved", name)
            }
            DeductionError::DivisionByZero => {
                write!(f, "Division by zero")
            }
            DeductionError::UnboundVariable { name } => {
                write!(f, "Variable {} has no value in scope", name)
            }
        }
    }
}

impl std::error::Error for DeductionError {}

/// Type alias for deduction operations that can fail
pub type DeductionResult<T> = Result<T, DeductionError>;
