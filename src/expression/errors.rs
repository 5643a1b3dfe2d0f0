use thiserror::Error;

use crate::expression::operator::Operator;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ExpressionError {
    #[error("Impossible operator for a combined expression: {0}")]
    ImpossibleOperator(Operator),
    #[error("Division by zero")]
    DivisionByZero,
}
