use std::cmp::Ordering;

use log::trace;

use crate::expression::ast::Expression;
use crate::expression::errors::ExpressionError;
use crate::expression::operator::Operator;

impl Expression {
    /// Combine two expressions with a binary operator into a canonical node
    ///
    /// Plus and multiply splice same-operator operands into one sorted chain. Minus and
    /// divide rewrite a right operand built with the same operator, so `a - (x - y)` is
    /// stored as `a + (y - x)` and `a / (x / y)` as `a * (y / x)`.
    ///
    /// # Errors
    ///
    /// Returns [`ExpressionError::ImpossibleOperator`] when `op` is [`Operator::None`].
    pub fn make(op: Operator, a: Expression, b: Expression) -> Result<Self, ExpressionError> {
        let expr = match op {
            Operator::Plus => Self {
                value: a.value + b.value,
                operator: Operator::Plus,
                children: Self::flatten(vec![a, b], Operator::Plus),
            },
            Operator::Minus => {
                let value = a.value - b.value;
                if b.operator == Operator::Minus {
                    let negated = -b.value;
                    Self {
                        value,
                        operator: Operator::Plus,
                        children: vec![a, b.reversed(negated)],
                    }
                } else {
                    Self {
                        value,
                        operator: Operator::Minus,
                        children: vec![a, b],
                    }
                }
            }
            Operator::Multiply => Self {
                value: a.value * b.value,
                operator: Operator::Multiply,
                children: Self::flatten(vec![a, b], Operator::Multiply),
            },
            Operator::Divide => {
                let value = a.value / b.value;
                if b.operator == Operator::Divide {
                    let reciprocal = 1.0 / b.value;
                    Self {
                        value,
                        operator: Operator::Multiply,
                        children: vec![a, b.reversed(reciprocal)],
                    }
                } else {
                    Self {
                        value,
                        operator: Operator::Divide,
                        children: vec![a, b],
                    }
                }
            }
            Operator::None => return Err(ExpressionError::ImpossibleOperator(op)),
        };

        trace!("Combined with '{}' into {} = {}", op, expr, expr.value);
        Ok(expr)
    }

    /// Splice the children of every `op` node one level up, then sort by value
    ///
    /// The sort is stable so equal values keep their relative order.
    pub fn flatten(children: Vec<Expression>, op: Operator) -> Vec<Expression> {
        let mut flat = Vec::with_capacity(children.len() + 2);
        for child in children {
            if child.operator == op {
                flat.extend(child.children);
            } else {
                flat.push(child);
            }
        }
        flat.sort_by(|a, b| a.value.partial_cmp(&b.value).unwrap_or(Ordering::Equal));
        flat
    }

    /// Same node with its children in reverse order and `value` replacing the old one
    fn reversed(self, value: f64) -> Self {
        let mut children = self.children;
        children.reverse();
        Self {
            value,
            operator: self.operator,
            children,
        }
    }
}
