use log::{debug, warn};

use crate::utils::errors::UtilsError;
use crate::utils::validation::validate_operand_count;

/// Parse a hand typed as integers separated by commas and/or whitespace
///
/// # Errors
///
/// Returns an error if the input holds no numbers or any token is not an integer.
pub fn parse_numbers(input: &str) -> Result<Vec<f64>, UtilsError> {
    debug!("Parsing numbers from: '{}'", input);

    let tokens: Vec<&str> = input
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .collect();

    if tokens.is_empty() {
        warn!("No numbers in input");
        return Err(UtilsError::EmptyInput);
    }

    let numbers = tokens
        .iter()
        .map(|token| {
            token.parse::<i64>().map(|n| n as f64).map_err(|_| {
                warn!("Rejecting token '{}'", token);
                UtilsError::InvalidNumber((*token).to_string())
            })
        })
        .collect::<Result<Vec<f64>, UtilsError>>()?;

    debug!("Parsed {:?}", numbers);
    Ok(numbers)
}

/// Parse a hand and check it holds exactly `expected` numbers
///
/// # Errors
///
/// Returns any parsing error, or a count error from [`validate_operand_count`].
pub fn parse_hand(input: &str, expected: usize) -> Result<Vec<f64>, UtilsError> {
    let numbers = parse_numbers(input)?;
    validate_operand_count(&numbers, expected)?;
    Ok(numbers)
}
