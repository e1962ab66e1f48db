//! Planar deduction engine lifting the linear solver over 2-vectors
//!
//! Every equation is split component-wise into scalar equations: vector
//! literals contribute their items, unqualified variables project to their
//! `x`/`y` attributes, and operations distribute per component under the
//! linearity rules (scalar divisors, scalar left factors). The scalar
//! solutions are then reassembled into plane vectors.

use crate::core::equation::{Equation, EquationSet};
use crate::core::expression::{Expression, Operator};
use crate::core::number::Number;
use crate::core::plane::PlaneVector;
use crate::core::variable::Variable;
use crate::error::{DeductionError, DeductionResult};
use crate::solvers::{LinearEngine, SolveMethod};
use std::collections::HashMap;
use std::fmt;

/// The result of evaluating an expression: a scalar or a plane vector
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Scalar(Number),
    Vector(PlaneVector),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Scalar(number) => write!(f, "{}", number),
            Value::Vector(vector) => write!(f, "{}", vector),
        }
    }
}

impl From<Number> for Value {
    fn from(value: Number) -> Self {
        Value::Scalar(value)
    }
}

impl From<PlaneVector> for Value {
    fn from(value: PlaneVector) -> Self {
        Value::Vector(value)
    }
}

/// Deduction engine for linear systems over 2-vector unknowns
///
/// Applies to pure planar systems: every unqualified variable is treated
/// as vector-valued and projected into its components.
#[derive(Debug, Clone, Copy)]
pub struct PlanarEngine;

impl PlanarEngine {
    /// Solve an equation set over planar unknowns exactly
    ///
    /// # Examples
    ///
    /// ```rust
    /// use deduce_core::{EquationSet, Expression, PlanarEngine, PlaneVector, Variable};
    ///
    /// let (v1, v2) = (Variable::new("v1"), Variable::new("v2"));
    /// let eq_set = EquationSet::from_equations([
    ///     v1.equals(Expression::vector(1, 2)),
    ///     v2.equals(v1.clone() + Expression::vector(1, 1)),
    /// ]);
    ///
    /// let solutions = PlanarEngine::solve_equation_set(&eq_set).unwrap();
    /// assert_eq!(solutions[&v2], PlaneVector::new(2, 3));
    /// ```
    pub fn solve_equation_set(
        eq_set: &EquationSet,
    ) -> DeductionResult<HashMap<Variable, PlaneVector>> {
        Self::solve_equation_set_with(eq_set, SolveMethod::Exact)
    }

    /// Solve an equation set over planar unknowns with the given reduction
    /// backend
    pub fn solve_equation_set_with(
        eq_set: &EquationSet,
        method: SolveMethod,
    ) -> DeductionResult<HashMap<Variable, PlaneVector>> {
        let mut scalar_equations = EquationSet::new();
        for equation in eq_set {
            let subj_components = Self::split_expression(equation.subj())?;
            let obj_components = Self::split_expression(equation.obj())?;
            if subj_components.len() != obj_components.len() {
                return Err(DeductionError::DimensionMismatch {
                    expected: subj_components.len(),
                    found: obj_components.len(),
                });
            }
            for (subj, obj) in subj_components.into_iter().zip(obj_components) {
                scalar_equations.insert(Equation::new(subj, obj));
            }
        }

        let scalar_solutions =
            LinearEngine::solve_equation_set_with(&scalar_equations, method)?;

        Self::reassemble(scalar_solutions)
    }

    /// Group `v.x`/`v.y` scalar solutions back into plane vectors
    fn reassemble(
        scalar_solutions: HashMap<Variable, Number>,
    ) -> DeductionResult<HashMap<Variable, PlaneVector>> {
        let mut components: HashMap<Variable, (Option<Number>, Option<Number>)> =
            HashMap::new();

        for (variable, value) in scalar_solutions {
            let (parent, attribute) = match (variable.parent(), variable.last_attribute()) {
                (Some(parent), Some(attribute)) => (parent, attribute),
                _ => {
                    return Err(DeductionError::TypeMismatch {
                        context: "planar reassembly",
                        found: format!("scalar unknown {}", variable),
                    })
                }
            };
            let entry = components.entry(parent).or_default();
            match attribute {
                "x" => entry.0 = Some(value),
                "y" => entry.1 = Some(value),
                other => {
                    return Err(DeductionError::TypeMismatch {
                        context: "planar reassembly",
                        found: format!("attribute {}", other),
                    })
                }
            }
        }

        components
            .into_iter()
            .map(|(variable, pair)| match pair {
                (Some(x), Some(y)) => Ok((variable, PlaneVector { x, y })),
                _ => Err(DeductionError::DimensionMismatch {
                    expected: 2,
                    found: 1,
                }),
            })
            .collect()
    }

    /// Split an expression into its scalar components
    ///
    /// Scalar expressions split into one component, planar expressions
    /// into two. Unqualified variables are treated as vector-valued and
    /// project to their `x`/`y` attributes; `x`/`y` attribute variables
    /// are already scalar and do not re-split.
    pub fn split_expression(expression: &Expression) -> DeductionResult<Vec<Expression>> {
        match expression {
            Expression::Number(_) => Ok(vec![expression.clone()]),
            Expression::Vector(data) => {
                Ok(vec![data.items[0].clone(), data.items[1].clone()])
            }
            Expression::Variable(variable) => {
                if matches!(variable.last_attribute(), Some("x") | Some("y")) {
                    Ok(vec![expression.clone()])
                } else {
                    Ok(vec![
                        Expression::from(variable.x()),
                        Expression::from(variable.y()),
                    ])
                }
            }
            Expression::Operation(data) => {
                let (first, rest) = data.arguments.split_first().ok_or_else(|| {
                    DeductionError::TypeMismatch {
                        context: "component splitting",
                        found: "operation without arguments".to_string(),
                    }
                })?;
                let mut folded = Self::split_expression(first)?;
                for argument in rest {
                    let components = Self::split_expression(argument)?;
                    folded = Self::split_pair(data.operator, folded, components)?;
                }
                Ok(folded)
            }
        }
    }

    fn split_pair(
        operator: Operator,
        lhs: Vec<Expression>,
        rhs: Vec<Expression>,
    ) -> DeductionResult<Vec<Expression>> {
        match operator {
            Operator::Div => {
                // the divisor must be scalar
                let [divisor] = <[Expression; 1]>::try_from(rhs).map_err(|components| {
                    DeductionError::DimensionMismatch {
                        expected: 1,
                        found: components.len(),
                    }
                })?;
                Ok(lhs
                    .into_iter()
                    .map(|component| {
                        Expression::operation(operator, vec![component, divisor.clone()])
                    })
                    .collect())
            }
            Operator::Mul => {
                // the left factor must be scalar; dot products are out of scope
                let [factor] = <[Expression; 1]>::try_from(lhs).map_err(|components| {
                    DeductionError::DimensionMismatch {
                        expected: 1,
                        found: components.len(),
                    }
                })?;
                Ok(rhs
                    .into_iter()
                    .map(|component| {
                        Expression::operation(operator, vec![factor.clone(), component])
                    })
                    .collect())
            }
            Operator::Add | Operator::Sub => {
                if lhs.len() != rhs.len() {
                    return Err(DeductionError::DimensionMismatch {
                        expected: lhs.len(),
                        found: rhs.len(),
                    });
                }
                Ok(lhs
                    .into_iter()
                    .zip(rhs)
                    .map(|(left, right)| {
                        Expression::operation(operator, vec![left, right])
                    })
                    .collect())
            }
        }
    }

    /// Substitute bound values for variables and evaluate
    ///
    /// # Examples
    ///
    /// ```rust
    /// use deduce_core::{Expression, PlanarEngine, PlaneVector, Value, Variable};
    /// use std::collections::HashMap;
    ///
    /// let (v1, v2) = (Variable::new("v1"), Variable::new("v2"));
    /// let values = HashMap::from([
    ///     (v1.clone(), Value::from(PlaneVector::new(1, 2))),
    ///     (v2.clone(), Value::from(PlaneVector::new(3, 4))),
    /// ]);
    ///
    /// let result =
    ///     PlanarEngine::evaluate_expression(&(v1 + v2), &values).unwrap();
    /// assert_eq!(result, Value::from(PlaneVector::new(4, 6)));
    /// ```
    pub fn evaluate_expression(
        expression: &Expression,
        values: &HashMap<Variable, Value>,
    ) -> DeductionResult<Value> {
        match expression {
            Expression::Number(number) => Ok(Value::Scalar(number.clone())),
            Expression::Variable(variable) => Self::resolve_variable(variable, values),
            Expression::Vector(data) => {
                let x = Self::evaluate_scalar(&data.items[0], values)?;
                let y = Self::evaluate_scalar(&data.items[1], values)?;
                Ok(Value::Vector(PlaneVector { x, y }))
            }
            Expression::Operation(data) => {
                let (first, rest) = data.arguments.split_first().ok_or_else(|| {
                    DeductionError::TypeMismatch {
                        context: "evaluation",
                        found: "operation without arguments".to_string(),
                    }
                })?;
                let mut folded = Self::evaluate_expression(first, values)?;
                for argument in rest {
                    let value = Self::evaluate_expression(argument, values)?;
                    folded = Self::apply(data.operator, folded, value)?;
                }
                Ok(folded)
            }
        }
    }

    fn evaluate_scalar(
        expression: &Expression,
        values: &HashMap<Variable, Value>,
    ) -> DeductionResult<Number> {
        match Self::evaluate_expression(expression, values)? {
            Value::Scalar(number) => Ok(number),
            Value::Vector(vector) => Err(DeductionError::TypeMismatch {
                context: "evaluation",
                found: format!("vector {} as vector item", vector),
            }),
        }
    }

    fn resolve_variable(
        variable: &Variable,
        values: &HashMap<Variable, Value>,
    ) -> DeductionResult<Value> {
        if let Some(value) = values.get(variable) {
            return Ok(value.clone());
        }

        // an unbound x/y attribute projects out of its parent's binding
        if let (Some(parent), Some(attribute)) =
            (variable.parent(), variable.last_attribute())
        {
            let bound = values.get(&parent).ok_or_else(|| {
                DeductionError::UnboundVariable {
                    name: parent.to_string(),
                }
            })?;
            return match (bound, attribute) {
                (Value::Vector(vector), "x") => Ok(Value::Scalar(vector.x.clone())),
                (Value::Vector(vector), "y") => Ok(Value::Scalar(vector.y.clone())),
                (Value::Vector(_), other) => Err(DeductionError::TypeMismatch {
                    context: "evaluation",
                    found: format!("attribute {}", other),
                }),
                (Value::Scalar(_), _) => Err(DeductionError::TypeMismatch {
                    context: "evaluation",
                    found: format!("attribute access on scalar {}", parent),
                }),
            };
        }

        Err(DeductionError::UnboundVariable {
            name: variable.to_string(),
        })
    }

    fn apply(operator: Operator, lhs: Value, rhs: Value) -> DeductionResult<Value> {
        match (operator, lhs, rhs) {
            (Operator::Add, Value::Scalar(a), Value::Scalar(b)) => Ok(Value::Scalar(a + b)),
            (Operator::Add, Value::Vector(a), Value::Vector(b)) => Ok(Value::Vector(a + b)),
            (Operator::Sub, Value::Scalar(a), Value::Scalar(b)) => Ok(Value::Scalar(a - b)),
            (Operator::Sub, Value::Vector(a), Value::Vector(b)) => Ok(Value::Vector(a - b)),

            (Operator::Mul, Value::Scalar(a), Value::Scalar(b)) => Ok(Value::Scalar(a * b)),
            (Operator::Mul, Value::Scalar(a), Value::Vector(b)) => Ok(Value::Vector(a * b)),
            (Operator::Mul, Value::Vector(a), Value::Scalar(b)) => Ok(Value::Vector(a * b)),
            (Operator::Mul, Value::Vector(_), Value::Vector(_)) => {
                Err(DeductionError::TypeMismatch {
                    context: "evaluation",
                    found: "product of two vectors".to_string(),
                })
            }

            (Operator::Div, Value::Scalar(a), Value::Scalar(b)) => {
                Ok(Value::Scalar((a / b)?))
            }
            (Operator::Div, Value::Vector(a), Value::Scalar(b)) => {
                Ok(Value::Vector((a / b)?))
            }
            (Operator::Div, _, Value::Vector(_)) => Err(DeductionError::TypeMismatch {
                context: "evaluation",
                found: "vector divisor".to_string(),
            }),

            // pointwise operators over mismatched shapes
            (Operator::Add | Operator::Sub, Value::Scalar(_), Value::Vector(_)) => {
                Err(DeductionError::DimensionMismatch {
                    expected: 1,
                    found: 2,
                })
            }
            (Operator::Add | Operator::Sub, Value::Vector(_), Value::Scalar(_)) => {
                Err(DeductionError::DimensionMismatch {
                    expected: 2,
                    found: 1,
                })
            }
        }
    }
}



#[cfg(test)]
mod planar_engine_tests {
    use super::*;

    #[test]
    fn test_simple_vector_equation() {
        let v1 = Variable::new("v1");
        let eq_set =
            EquationSet::from_equations([v1.equals(Expression::vector(5, 7))]);
        let solutions = PlanarEngine::solve_equation_set(&eq_set).unwrap();
        assert_eq!(solutions[&v1], PlaneVector::new(5, 7));
    }

    #[test]
    fn test_medium_vector_system() {
        let (v1, v2, v3) = (
            Variable::new("v1"),
            Variable::new("v2"),
            Variable::new("v3"),
        );
        let eq_set = EquationSet::from_equations([
            v1.equals(Expression::vector(5, 5) - 3 * v2.clone() + 2 * v3.clone()),
            v1.equals((Expression::vector(7, 7) - 5 * v2.clone() - 6 * v3.clone()) / 3),
            v1.equals((Expression::vector(8, 8) - 4 * v2.clone() - 3 * v3.clone()) / 2),
        ]);
        let solutions = PlanarEngine::solve_equation_set(&eq_set).unwrap();
        assert_eq!(solutions[&v1], PlaneVector::new(-15, -15));
        assert_eq!(solutions[&v2], PlaneVector::new(8, 8));
        assert_eq!(solutions[&v3], PlaneVector::new(2, 2));
    }

    #[test]
    fn test_dimension_mismatch_across_sides() {
        let v1 = Variable::new("v1");
        let eq_set = EquationSet::from_equations([v1.x().equals(v1.clone())]);
        assert_eq!(
            PlanarEngine::solve_equation_set(&eq_set),
            Err(DeductionError::DimensionMismatch {
                expected: 1,
                found: 2,
            }),
        );
    }
}
