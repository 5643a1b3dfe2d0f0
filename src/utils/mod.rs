//! Reading and presenting hands outside the search itself

mod errors;
mod parsing;
mod symbols;
mod validation;

pub use errors::UtilsError;
pub use parsing::{parse_hand, parse_numbers};
pub use symbols::to_display_symbols;
pub use validation::validate_operand_count;

#[cfg(test)]
mod tests;
