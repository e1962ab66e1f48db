//! Display formatting for expressions

use super::{Expression, Operator};
use std::fmt;

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expression::Number(number) => write!(f, "{}", number),
            Expression::Variable(variable) => write!(f, "{}", variable),
            Expression::Operation(data) => {
                for (index, argument) in data.arguments.iter().enumerate() {
                    if index > 0 {
                        write!(f, " {} ", data.operator)?;
                    }
                    // parenthesize nested operations to keep grouping readable
                    if matches!(argument, Expression::Operation(_)) {
                        write!(f, "({})", argument)?;
                    } else {
                        write!(f, "{}", argument)?;
                    }
                }
                Ok(())
            }
            Expression::Vector(data) => {
                write!(f, "V({}, {})", data.items[0], data.items[1])
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::core::expression::Expression;
    use crate::core::variable::Variable;

    #[test]
    fn test_flat_operation_display() {
        let (x, y) = (Variable::new("x"), Variable::new("y"));
        assert_eq!((x + y).to_string(), "x + y");
    }

    #[test]
    fn test_nested_operation_display() {
        let (x, y) = (Variable::new("x"), Variable::new("y"));
        let expression = (x.clone() + y.clone()) / (x - y);
        assert_eq!(expression.to_string(), "(x + y) / (x - y)");
    }

    #[test]
    fn test_vector_display() {
        let v1 = Variable::new("v1");
        assert_eq!(
            Expression::vector(v1.x(), 5).to_string(),
            "V(v1.x, 5)"
        );
    }
}
