//! Operator overloading for Expression and Variable
//!
//! Composition with `+ - * /` builds `Operation` nodes without evaluating.
//! Reverse-operand impls (a primitive on the left) preserve operand order:
//! `2 + x` produces `Operation(+, [2, x])`, not `Operation(+, [x, 2])`.

use super::{Expression, Operator};
use crate::core::variable::Variable;
use std::ops::{Add, Div, Mul, Sub};

macro_rules! symbolic_operand {
    ($op_trait:ident, $method:ident, $operator:expr, $lhs:ty) => {
        impl<T: Into<Expression>> $op_trait<T> for $lhs {
            type Output = Expression;

            fn $method(self, rhs: T) -> Expression {
                Expression::operation($operator, vec![self.into(), rhs.into()])
            }
        }
    };
}

symbolic_operand!(Add, add, Operator::Add, Expression);
symbolic_operand!(Sub, sub, Operator::Sub, Expression);
symbolic_operand!(Mul, mul, Operator::Mul, Expression);
symbolic_operand!(Div, div, Operator::Div, Expression);

symbolic_operand!(Add, add, Operator::Add, Variable);
symbolic_operand!(Sub, sub, Operator::Sub, Variable);
symbolic_operand!(Mul, mul, Operator::Mul, Variable);
symbolic_operand!(Div, div, Operator::Div, Variable);

macro_rules! primitive_operand {
    ($op_trait:ident, $method:ident, $operator:expr, $primitive:ty) => {
        impl $op_trait<Expression> for $primitive {
            type Output = Expression;

            fn $method(self, rhs: Expression) -> Expression {
                Expression::operation($operator, vec![self.into(), rhs])
            }
        }

        impl $op_trait<Variable> for $primitive {
            type Output = Expression;

            fn $method(self, rhs: Variable) -> Expression {
                Expression::operation($operator, vec![self.into(), rhs.into()])
            }
        }
    };
}

primitive_operand!(Add, add, Operator::Add, i64);
primitive_operand!(Sub, sub, Operator::Sub, i64);
primitive_operand!(Mul, mul, Operator::Mul, i64);
primitive_operand!(Div, div, Operator::Div, i64);

primitive_operand!(Add, add, Operator::Add, f64);
primitive_operand!(Sub, sub, Operator::Sub, f64);
primitive_operand!(Mul, mul, Operator::Mul, f64);
primitive_operand!(Div, div, Operator::Div, f64);

#[cfg(test)]
mod tests {
    use super::*;

    fn op(operator: Operator, arguments: Vec<Expression>) -> Expression {
        Expression::operation(operator, arguments)
    }

    #[test]
    fn test_first_level_composition() {
        let (v1, v2) = (Variable::new("v1"), Variable::new("v2"));
        let e1 = Expression::from(v1.clone());
        let e2 = Expression::from(v2.clone());

        assert_eq!(
            v1.clone() + v2.clone(),
            op(Operator::Add, vec![e1.clone(), e2.clone()])
        );
        assert_eq!(
            v1.clone() - v2.clone(),
            op(Operator::Sub, vec![e1.clone(), e2.clone()])
        );
        assert_eq!(
            v1.clone() * v2.clone(),
            op(Operator::Mul, vec![e1.clone(), e2.clone()])
        );
        assert_eq!(v1 / v2, op(Operator::Div, vec![e1, e2]));
    }

    #[test]
    fn test_primitive_composition() {
        let v1 = Variable::new("v1");
        let e1 = Expression::from(v1.clone());

        assert_eq!(
            v1.clone() + 1,
            op(Operator::Add, vec![e1.clone(), Expression::integer(1)])
        );
        assert_eq!(
            v1.clone() - 2.0,
            op(Operator::Sub, vec![e1.clone(), Expression::float(2.0)])
        );
        assert_eq!(
            v1 / 3,
            op(Operator::Div, vec![e1, Expression::integer(3)])
        );
    }

    #[test]
    fn test_reverse_operands_preserve_order() {
        let x = Variable::new("x");
        let e = Expression::from(x.clone());

        assert_eq!(
            2 + x.clone(),
            op(Operator::Add, vec![Expression::integer(2), e.clone()])
        );
        assert_eq!(
            5 - x.clone(),
            op(Operator::Sub, vec![Expression::integer(5), e.clone()])
        );
        assert_eq!(
            3 * x.clone(),
            op(Operator::Mul, vec![Expression::integer(3), e.clone()])
        );
        assert_eq!(
            1.5 * x,
            op(Operator::Mul, vec![Expression::float(1.5), e])
        );
    }

    #[test]
    fn test_second_level_composition() {
        let (v1, v2) = (Variable::new("v1"), Variable::new("v2"));
        let expression = (v1.clone() + v2.clone()) / (v1.clone() - v2.clone());
        let expected = op(
            Operator::Div,
            vec![
                op(
                    Operator::Add,
                    vec![v1.clone().into(), v2.clone().into()],
                ),
                op(Operator::Sub, vec![v1.into(), v2.into()]),
            ],
        );
        assert_eq!(expression, expected);
    }

    #[test]
    fn test_compose_vectors_with_attrs() {
        let (v1, v2) = (Variable::new("v1"), Variable::new("v2"));
        let expression = 1 + Expression::vector(v1.x(), v2.y());
        let expected = op(
            Operator::Add,
            vec![
                Expression::integer(1),
                Expression::vector(v1.x(), v2.y()),
            ],
        );
        assert_eq!(expression, expected);
    }
}
