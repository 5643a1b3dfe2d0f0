use log::{debug, warn};

use crate::utils::errors::UtilsError;

/// # Errors
///
/// Returns an error if `numbers` does not hold exactly `expected` values.
pub fn validate_operand_count(numbers: &[f64], expected: usize) -> Result<(), UtilsError> {
    debug!("Validating {} numbers against {}", numbers.len(), expected);

    let found = numbers.len();
    if found < expected {
        warn!("Too few numbers: {} < {}", found, expected);
        return Err(UtilsError::TooFewNumbers { expected, found });
    }
    if found > expected {
        warn!("Too many numbers: {} > {}", found, expected);
        return Err(UtilsError::TooManyNumbers { expected, found });
    }

    Ok(())
}
