//! Automated mathematical deduction
//!
//! Deduce solves systems of linear equations over symbolic expressions,
//! including systems over two-dimensional planar vectors. Equations are
//! built from named variables, numeric literals, and the four arithmetic
//! operators; solving returns a mapping from every unknown to its value.
//!
//! # Examples
//!
//! Scalar system:
//!
//! ```rust
//! use deduce::prelude::*;
//!
//! let (x, y, z) = vars![x, y, z];
//! let eq_set = EquationSet::from_equations([
//!     x.equals(5 - 3 * y.clone() + 2 * z.clone()),
//!     x.equals((7 - 5 * y.clone() - 6 * z.clone()) / 3),
//!     x.equals((8 - 4 * y.clone() - 3 * z.clone()) / 2),
//! ]);
//!
//! let solutions = LinearEngine::solve_equation_set(&eq_set).unwrap();
//! assert_eq!(solutions[&x], Number::integer(-15));
//! assert_eq!(solutions[&y], Number::integer(8));
//! assert_eq!(solutions[&z], Number::integer(2));
//! ```
//!
//! Planar system:
//!
//! ```rust
//! use deduce::prelude::*;
//!
//! let (v1, v2) = vars![v1, v2];
//! let eq_set = EquationSet::from_equations([
//!     v1.equals(Expression::vector(1, 2)),
//!     v2.equals(2 * v1.clone()),
//! ]);
//!
//! let solutions = PlanarEngine::solve_equation_set(&eq_set).unwrap();
//! assert_eq!(solutions[&v2], PlaneVector::new(2, 4));
//! ```

// Macro re-exports (at crate root for ergonomic use)
pub use deduce_core::{var, vars};

// Core types
pub use deduce_core::{
    AugmentedMatrix, Equation, EquationSet, Expression, Field, Number, OperationData, Operator,
    PlaneVector, Variable, VectorData,
};

// Engines and canonical form
pub use deduce_core::{Basis, LinearEngine, PlanarEngine, SolveMethod, SumOfProducts, Value};

// Error types
pub use deduce_core::{DeductionError, DeductionResult};

/// Convenience prelude for common imports
///
/// This prelude provides everything needed for typical deduction work.
/// Import with `use deduce::prelude::*;`.
pub mod prelude {
    pub use deduce_core::prelude::*;
}
