//! Models for symbolic expressions
//!
//! An expression is an immutable recursive tree of variables, numbers,
//! operator applications, and planar vector literals. Structural equality
//! and hashing follow constructor arguments, so two expressions built the
//! same way compare equal and can key hash maps.

pub mod display;
pub mod operators;

use crate::core::number::Number;
use crate::core::variable::Variable;
use num_rational::BigRational;
use serde::{Deserialize, Serialize};

/// The four arithmetic operators an operation node may carry
///
/// The set is closed: an operation cannot be constructed with any other
/// operator, so downstream consumers match exhaustively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
}

impl Operator {
    /// The conventional symbol for this operator
    pub fn symbol(&self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Sub => "-",
            Operator::Mul => "*",
            Operator::Div => "/",
        }
    }
}

/// An operator applied to an ordered argument list
///
/// Arity is two or more; longer argument lists are interpreted by
/// left-folding the operator pairwise.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OperationData {
    pub operator: Operator,
    pub arguments: Vec<Expression>,
}

/// A planar vector literal with exactly two items
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VectorData {
    pub items: [Expression; 2],
}

/// A symbolic expression
///
/// May be operationally composed with other expressions and with numeric
/// primitives via the standard arithmetic operators; composition builds
/// `Operation` nodes and never evaluates anything.
///
/// # Examples
///
/// ```rust
/// use deduce_core::{Expression, Operator, Variable};
///
/// let x = Variable::new("x");
/// let composed = 2 + x.clone();
/// assert_eq!(
///     composed,
///     Expression::operation(
///         Operator::Add,
///         vec![Expression::integer(2), Expression::from(x)],
///     )
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Expression {
    Number(Number),
    Variable(Variable),
    Operation(Box<OperationData>),
    Vector(Box<VectorData>),
}

impl Expression {
    /// Create a number expression
    pub fn number<N: Into<Number>>(value: N) -> Self {
        Self::Number(value.into())
    }

    /// Create an integer number expression
    pub fn integer(value: i64) -> Self {
        Self::Number(Number::integer(value))
    }

    /// Create a float number expression
    pub fn float(value: f64) -> Self {
        Self::Number(Number::float(value))
    }

    /// Create a variable expression
    pub fn variable<V: Into<Variable>>(variable: V) -> Self {
        Self::Variable(variable.into())
    }

    /// Create an operation node applying `operator` to `arguments` in order
    ///
    /// Callers supply at least two arguments; the canonicalizer and the
    /// planar splitter reject shorter argument lists.
    pub fn operation(operator: Operator, arguments: Vec<Expression>) -> Self {
        Self::Operation(Box::new(OperationData {
            operator,
            arguments,
        }))
    }

    /// Create a planar vector literal
    ///
    /// # Examples
    ///
    /// ```rust
    /// use deduce_core::{Expression, Variable};
    ///
    /// let v1 = Variable::new("v1");
    /// let literal = Expression::vector(v1.x(), 5);
    /// assert_eq!(literal.to_string(), "V(v1.x, 5)");
    /// ```
    pub fn vector<X: Into<Expression>, Y: Into<Expression>>(x: X, y: Y) -> Self {
        Self::Vector(Box::new(VectorData {
            items: [x.into(), y.into()],
        }))
    }

    /// Collect the variables of this expression in first-seen order,
    /// scanning depth-first left to right, without duplicates
    pub fn variables(&self) -> Vec<Variable> {
        let mut found = Vec::new();
        self.collect_variables(&mut found);
        found
    }

    fn collect_variables(&self, found: &mut Vec<Variable>) {
        match self {
            Expression::Number(_) => {}
            Expression::Variable(variable) => {
                if !found.contains(variable) {
                    found.push(variable.clone());
                }
            }
            Expression::Operation(data) => {
                for argument in &data.arguments {
                    argument.collect_variables(found);
                }
            }
            Expression::Vector(data) => {
                for item in &data.items {
                    item.collect_variables(found);
                }
            }
        }
    }
}

impl From<Number> for Expression {
    fn from(value: Number) -> Self {
        Self::Number(value)
    }
}

impl From<Variable> for Expression {
    fn from(variable: Variable) -> Self {
        Self::Variable(variable)
    }
}

impl From<i64> for Expression {
    fn from(value: i64) -> Self {
        Self::integer(value)
    }
}

impl From<i32> for Expression {
    fn from(value: i32) -> Self {
        Self::integer(value as i64)
    }
}

impl From<f64> for Expression {
    fn from(value: f64) -> Self {
        Self::float(value)
    }
}

impl From<BigRational> for Expression {
    fn from(value: BigRational) -> Self {
        Self::Number(Number::rational(value))
    }
}
