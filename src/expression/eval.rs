use log::debug;

use crate::expression::ast::Expression;
use crate::expression::errors::ExpressionError;
use crate::expression::operator::Operator;

#[inline]
fn is_zero(value: f64) -> bool {
    value.abs() < f64::EPSILON
}

impl Expression {
    /// Recompute the value from the leaves, ignoring the cached value of inner nodes
    ///
    /// # Errors
    ///
    /// Returns [`ExpressionError::DivisionByZero`] when a divisor evaluates to zero, and
    /// [`ExpressionError::ImpossibleOperator`] for an inner node carrying the leaf marker.
    pub fn evaluate(&self) -> Result<f64, ExpressionError> {
        if self.is_leaf() {
            return Ok(self.value);
        }

        let mut values = Vec::with_capacity(self.children.len());
        for child in &self.children {
            values.push(child.evaluate()?);
        }
        let Some((&first, rest)) = values.split_first() else {
            return Err(ExpressionError::ImpossibleOperator(self.operator));
        };

        let result: Result<f64, ExpressionError> = match self.operator {
            Operator::Plus => Ok(values.iter().sum()),
            Operator::Multiply => Ok(values.iter().product()),
            Operator::Minus => Ok(rest.iter().fold(first, |acc, v| acc - v)),
            Operator::Divide => {
                if rest.iter().any(|&v| is_zero(v)) {
                    debug!("Division by zero in {}", self);
                    Err(ExpressionError::DivisionByZero)
                } else {
                    Ok(rest.iter().fold(first, |acc, v| acc / v))
                }
            }
            Operator::None => Err(ExpressionError::ImpossibleOperator(self.operator)),
        };

        if let Ok(value) = &result {
            debug!("Expression {} evaluated to: {}", self, value);
        }
        result
    }
}
