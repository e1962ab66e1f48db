//! Linear deduction engine and related tools
//!
//! `SumOfProducts` folds an expression tree into a flat mapping from basis
//! keys to coefficients, rejecting anything non-linear. `LinearEngine`
//! rewrites each equation as `subj - obj = 0`, canonicalizes it, packs the
//! coefficients into an augmented matrix in first-seen variable order, and
//! reads the solution off the reduced form.

use crate::core::equation::EquationSet;
use crate::core::expression::{Expression, Operator};
use crate::core::matrix::AugmentedMatrix;
use crate::core::number::Number;
use crate::core::variable::Variable;
use crate::error::{DeductionError, DeductionResult};
use crate::solvers::SolveMethod;
use std::collections::HashMap;

/// A basis key of the canonical form: the constant sentinel or a variable
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Basis {
    /// The multiplicative identity, keying the constant term
    Unit,
    Variable(Variable),
}

/// Models an expression that is a sum of products of primitives
///
/// # Examples
///
/// ```rust
/// use deduce_core::{Basis, Number, SumOfProducts, Variable};
///
/// let (x, y) = (Variable::new("x"), Variable::new("y"));
/// let parsed = SumOfProducts::from_expression(&((2 * x.clone() + 3 * y + x) / 3)).unwrap();
/// assert_eq!(
///     parsed.coefficient(&Basis::Variable(Variable::new("x"))),
///     Number::integer(1),
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SumOfProducts {
    coefficients: HashMap<Basis, Number>,
}

impl SumOfProducts {
    /// The canonical form of a pure constant
    pub fn constant(value: Number) -> Self {
        Self {
            coefficients: HashMap::from([(Basis::Unit, value)]),
        }
    }

    /// The canonical form of a lone variable
    pub fn variable(variable: Variable) -> Self {
        Self {
            coefficients: HashMap::from([(Basis::Variable(variable), Number::integer(1))]),
        }
    }

    /// Create a SumOfProducts from an expression
    ///
    /// Fails with `NonLinear` when the expression multiplies two
    /// non-constant terms or divides by a non-constant, and with
    /// `TypeMismatch` when a vector literal reaches the scalar
    /// canonicalizer.
    pub fn from_expression(expression: &Expression) -> DeductionResult<Self> {
        match expression {
            Expression::Number(value) => Ok(Self::constant(value.clone())),
            Expression::Variable(variable) => Ok(Self::variable(variable.clone())),
            Expression::Operation(data) => {
                let (first, rest) = data.arguments.split_first().ok_or_else(|| {
                    DeductionError::TypeMismatch {
                        context: "canonicalization",
                        found: "operation without arguments".to_string(),
                    }
                })?;
                let mut folded = Self::from_expression(first)?;
                for argument in rest {
                    let parsed = Self::from_expression(argument)?;
                    folded = match data.operator {
                        Operator::Add => folded.add(&parsed),
                        Operator::Sub => folded.sub(&parsed),
                        Operator::Mul => folded.mul(&parsed)?,
                        Operator::Div => folded.div(&parsed)?,
                    };
                }
                Ok(folded)
            }
            Expression::Vector(_) => Err(DeductionError::TypeMismatch {
                context: "canonicalization",
                found: "vector literal".to_string(),
            }),
        }
    }

    /// The full coefficient mapping
    pub fn coefficients(&self) -> &HashMap<Basis, Number> {
        &self.coefficients
    }

    /// The coefficient of a basis key, defaulting to the additive identity
    pub fn coefficient(&self, basis: &Basis) -> Number {
        self.coefficients
            .get(basis)
            .cloned()
            .unwrap_or_else(|| Number::integer(0))
    }

    /// The constant term
    pub fn constant_term(&self) -> Number {
        self.coefficient(&Basis::Unit)
    }

    fn add(&self, other: &Self) -> Self {
        let mut coefficients = self.coefficients.clone();
        for (basis, coefficient) in &other.coefficients {
            let entry = coefficients
                .entry(basis.clone())
                .or_insert_with(|| Number::integer(0));
            *entry = entry.clone() + coefficient.clone();
        }
        Self { coefficients }
    }

    fn neg(&self) -> Self {
        Self {
            coefficients: self
                .coefficients
                .iter()
                .map(|(basis, coefficient)| (basis.clone(), -coefficient.clone()))
                .collect(),
        }
    }

    fn sub(&self, other: &Self) -> Self {
        self.add(&other.neg())
    }

    /// Multiply two basis keys, collapsing the unit sentinel
    fn merge_bases(left: &Basis, right: &Basis) -> DeductionResult<Basis> {
        match (left, right) {
            (Basis::Unit, other) | (other, Basis::Unit) => Ok(other.clone()),
            (Basis::Variable(a), Basis::Variable(b)) => Err(DeductionError::NonLinear {
                operation: "multiplication".to_string(),
                reason: format!("cross-term of {} and {}", a, b),
            }),
        }
    }

    fn mul(&self, other: &Self) -> DeductionResult<Self> {
        let mut coefficients = HashMap::new();
        for (left_basis, left_coefficient) in &self.coefficients {
            for (right_basis, right_coefficient) in &other.coefficients {
                let basis = Self::merge_bases(left_basis, right_basis)?;
                let product = left_coefficient.clone() * right_coefficient.clone();
                let entry = coefficients
                    .entry(basis)
                    .or_insert_with(|| Number::integer(0));
                *entry = entry.clone() + product;
            }
        }
        Ok(Self { coefficients })
    }

    fn div(&self, other: &Self) -> DeductionResult<Self> {
        let is_pure_constant =
            other.coefficients.len() == 1 && other.coefficients.contains_key(&Basis::Unit);
        if !is_pure_constant {
            return Err(DeductionError::NonLinear {
                operation: "division".to_string(),
                reason: "divisor is not a pure constant".to_string(),
            });
        }

        let divisor = other.constant_term();
        let coefficients = self
            .coefficients
            .iter()
            .map(|(basis, coefficient)| {
                Ok((basis.clone(), (coefficient.clone() / divisor.clone())?))
            })
            .collect::<DeductionResult<_>>()?;
        Ok(Self { coefficients })
    }
}

/// Deduction engine for solving linear systems over scalar variables
#[derive(Debug, Clone, Copy)]
pub struct LinearEngine;

impl LinearEngine {
    /// Solve an equation set exactly, returning the value of every unknown
    ///
    /// # Examples
    ///
    /// ```rust
    /// use deduce_core::{EquationSet, LinearEngine, Number, Variable};
    ///
    /// let (x, y) = (Variable::new("x"), Variable::new("y"));
    /// let eq_set = EquationSet::from_equations([
    ///     x.equals(1),
    ///     y.equals(x.clone()),
    /// ]);
    ///
    /// let solutions = LinearEngine::solve_equation_set(&eq_set).unwrap();
    /// assert_eq!(solutions[&x], Number::integer(1));
    /// assert_eq!(solutions[&y], Number::integer(1));
    /// ```
    pub fn solve_equation_set(
        eq_set: &EquationSet,
    ) -> DeductionResult<HashMap<Variable, Number>> {
        Self::solve_equation_set_with(eq_set, SolveMethod::Exact)
    }

    /// Solve an equation set with the given reduction backend
    pub fn solve_equation_set_with(
        eq_set: &EquationSet,
        method: SolveMethod,
    ) -> DeductionResult<HashMap<Variable, Number>> {
        let mut variables: Vec<Variable> = Vec::new();
        let mut entries: Vec<Vec<Number>> = Vec::new();
        let mut augmentations: Vec<Number> = Vec::new();

        for equation in eq_set {
            let difference = equation.subj().clone() - equation.obj().clone();
            let parsed = SumOfProducts::from_expression(&difference)?;
            augmentations.push(-parsed.constant_term());

            // extend the variable list in first-seen order; a variable
            // counts as seen even when its coefficient folded to zero
            for variable in difference.variables() {
                let seen = variables.contains(&variable);
                let present = parsed
                    .coefficients()
                    .contains_key(&Basis::Variable(variable.clone()));
                if present && !seen {
                    variables.push(variable);
                }
            }

            entries.push(
                variables
                    .iter()
                    .map(|variable| parsed.coefficient(&Basis::Variable(variable.clone())))
                    .collect(),
            );
        }

        // earlier rows are padded with additive identities as the
        // variable list grows
        let width = variables.len();
        let rows = entries
            .into_iter()
            .zip(augmentations)
            .map(|(mut entry, augmentation)| {
                entry.resize(width, Number::integer(0));
                entry.push(augmentation);
                entry
            })
            .collect();

        let constants = match method {
            SolveMethod::Exact => AugmentedMatrix::new(rows)?.reduced_form()?.constants(),
            SolveMethod::Float => AugmentedMatrix::new(rows)?
                .to_float()
                .reduced_form()?
                .constants()
                .into_iter()
                .map(Number::float)
                .collect(),
        };

        Ok(variables.into_iter().zip(constants).collect())
    }
}
