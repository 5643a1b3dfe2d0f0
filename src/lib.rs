//! twenty-four - A solver for the "24 points" card game
//!
//! Given a hand of numbers, this library finds every distinct arithmetic expression that
//! uses each number exactly once with `+`, `-`, `*` and `/` and evaluates to a target
//! (24 by default). Equivalent expressions are folded into one canonical rendering.

pub mod expression;
pub mod solver;
pub mod utils;

// Re-export the main public API
pub use expression::{Expression, ExpressionError, Operator};
pub use solver::{Aggregator, ExpressionSolver, SolverConfig, SolverError};
pub use utils::{
    UtilsError, parse_hand, parse_numbers, to_display_symbols, validate_operand_count,
};

/// Find every solution for `numbers` with the default target of 24
///
/// # Errors
///
/// Returns an error if `numbers` is empty.
///
/// # Examples
///
/// ```
/// use twenty_four::solve;
///
/// let solutions = solve(&[3.0, 3.0, 8.0, 8.0]).unwrap_or_default();
/// assert_eq!(solutions, vec!["8 / (3 - 8 / 3)".to_string()]);
/// ```
pub fn solve(numbers: &[f64]) -> Result<Vec<String>, SolverError> {
    ExpressionSolver::new().solve(numbers)
}

/// Parse a typed hand such as `"4, 6, 2, 8"`, check its size and solve it
///
/// # Errors
///
/// This function will return an error if:
/// * The input holds no numbers or a token that is not an integer
/// * The hand size differs from `config.operand_count`
///
/// # Examples
///
/// ```
/// use twenty_four::{SolverConfig, solve_input};
///
/// match solve_input("1 2 3 4", &SolverConfig::default()) {
///     Ok(solutions) => assert!(solutions.iter().any(|s| s == "1 * 2 * 3 * 4")),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
pub fn solve_input(input: &str, config: &SolverConfig) -> Result<Vec<String>, SolverError> {
    let numbers = parse_hand(input, config.operand_count)?;
    ExpressionSolver::with_config(config.clone()).solve(&numbers)
}
