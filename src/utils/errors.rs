use thiserror::Error;

/// Errors raised while reading a hand of numbers
#[derive(Error, Debug, Clone, PartialEq)]
pub enum UtilsError {
    #[error("Input cannot be empty")]
    EmptyInput,
    #[error("Not an integer: {0}")]
    InvalidNumber(String),
    #[error("Too few numbers: expected {expected}, found {found}")]
    TooFewNumbers { expected: usize, found: usize },
    #[error("Too many numbers: expected {expected}, found {found}")]
    TooManyNumbers { expected: usize, found: usize },
}
