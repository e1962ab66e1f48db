//! Core deduction engine for Deduce
//!
//! This crate provides the foundational types and engines for automated
//! mathematical deduction: a symbolic expression algebra, a linear
//! canonicalizer, and solvers for linear systems over scalar and planar
//! 2-vector unknowns.
//!
//! # Examples
//!
//! ```rust
//! use deduce_core::prelude::*;
//!
//! let (x, y) = vars![x, y];
//! let eq_set = EquationSet::from_equations([
//!     x.equals(1),
//!     y.equals(x.clone() + 1),
//! ]);
//!
//! let solutions = LinearEngine::solve_equation_set(&eq_set).unwrap();
//! assert_eq!(solutions[&y], Number::integer(2));
//! ```

pub mod core;
pub mod error;
pub mod macros;
pub mod solvers;

// Curated re-exports (no wildcards for maintainability)

// Core types (most commonly used)
pub use crate::core::{
    AugmentedMatrix, Equation, EquationSet, Expression, Field, Number, OperationData, Operator,
    PlaneVector, Variable, VectorData,
};

// Engines and canonical form
pub use solvers::{Basis, LinearEngine, PlanarEngine, SolveMethod, SumOfProducts, Value};

// Error types
pub use error::{DeductionError, DeductionResult};

/// Convenience prelude for common imports
///
/// Import with `use deduce_core::prelude::*;` to access all common types.
pub mod prelude {
    pub use crate::{var, vars};

    pub use crate::{
        AugmentedMatrix, Equation, EquationSet, Expression, Field, Number, PlaneVector, Variable,
    };

    pub use crate::{Basis, LinearEngine, PlanarEngine, SolveMethod, SumOfProducts, Value};

    pub use crate::{DeductionError, DeductionResult};
}

#[cfg(test)]
mod tests {
    use super::prelude::*;

    #[test]
    fn test_prelude_covers_basic_solving() {
        let (x, y) = vars![x, y];
        let eq_set = EquationSet::from_equations([x.equals(2), y.equals(2 * x.clone())]);

        let solutions = LinearEngine::solve_equation_set(&eq_set).unwrap();
        assert_eq!(solutions[&x], Number::integer(2));
        assert_eq!(solutions[&y], Number::integer(4));
    }

    #[test]
    fn test_method_selection_is_caller_visible() {
        let x = Variable::new("x");
        let eq_set = EquationSet::from_equations([(2 * x.clone()).equals(3)]);

        let exact = LinearEngine::solve_equation_set_with(&eq_set, SolveMethod::Exact).unwrap();
        assert_eq!(
            exact[&x],
            (Number::integer(3) / Number::integer(2)).unwrap()
        );

        let float = LinearEngine::solve_equation_set_with(&eq_set, SolveMethod::Float).unwrap();
        assert_eq!(float[&x], Number::float(1.5));
    }
}
