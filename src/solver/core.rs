use log::{info, trace};
use rayon::prelude::*;

use crate::expression::{Expression, Operator};
use crate::solver::aggregator::Aggregator;
use crate::solver::config::SolverConfig;
use crate::solver::errors::SolverError;

/// Every combination of `a` and `b` worth trying, with its operand order
///
/// Subtraction is only tried in the order that keeps the result non-negative (both
/// orders on a tie), division only with a non-zero divisor.
fn applicable_combinations<'a>(
    a: &'a Expression,
    b: &'a Expression,
) -> Vec<(Operator, &'a Expression, &'a Expression)> {
    let mut combinations = Vec::with_capacity(6);
    combinations.push((Operator::Plus, a, b));
    if a.value() >= b.value() {
        combinations.push((Operator::Minus, a, b));
    }
    if b.value() >= a.value() {
        combinations.push((Operator::Minus, b, a));
    }
    combinations.push((Operator::Multiply, a, b));
    if b.value() != 0.0 {
        combinations.push((Operator::Divide, a, b));
    }
    if a.value() != 0.0 {
        combinations.push((Operator::Divide, b, a));
    }
    combinations
}

/// Exhaustive solver for a hand of numbers
pub struct ExpressionSolver {
    config: SolverConfig,
}

impl ExpressionSolver {
    /// Create a solver for the classic game (target 24)
    pub fn new() -> Self {
        Self::with_config(SolverConfig::default())
    }

    pub fn with_config(config: SolverConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Find every distinct expression that uses each number once and reaches the target
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::EmptyState`] for an empty hand, or an expression error if an
    /// internal combination is malformed.
    pub fn solve(&self, numbers: &[f64]) -> Result<Vec<String>, SolverError> {
        info!(
            "Searching for expressions over {:?} that equal {}",
            numbers, self.config.target
        );

        let leaves: Vec<Expression> = numbers
            .iter()
            .copied()
            .map(Expression::make_leaf)
            .collect();
        let mut aggregator = Aggregator::new();
        if self.search(&mut aggregator, &leaves, None)? {
            info!("Found {} distinct solutions", aggregator.len());
        } else {
            info!("No exact match found");
        }

        Ok(aggregator.into_solutions())
    }

    /// Solve independent hands in parallel, one sequential search per hand
    pub fn solve_batch(&self, hands: &[Vec<f64>]) -> Vec<Result<Vec<String>, SolverError>> {
        info!("Solving {} hands in parallel", hands.len());
        hands.par_iter().map(|hand| self.solve(hand)).collect()
    }

    /// One step of the search over `elems` plus the freshly combined `new_elem`
    ///
    /// Every branch is explored even after a hit, so all solutions reach the aggregator.
    /// Returns whether any branch reached the target.
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::EmptyState`] when there is nothing left to combine.
    pub fn search(
        &self,
        aggregator: &mut Aggregator,
        elems: &[Expression],
        new_elem: Option<Expression>,
    ) -> Result<bool, SolverError> {
        let mut elems = elems.to_vec();
        elems.extend(new_elem);

        match elems.as_slice() {
            [] => Err(SolverError::EmptyState),
            [last] => {
                if last.is_target(self.config.target, self.config.epsilon) {
                    aggregator.add(last);
                    Ok(true)
                } else {
                    Ok(false)
                }
            }
            _ => {
                let mut found = false;
                for (i, a) in elems.iter().enumerate() {
                    for (j, b) in elems.iter().enumerate().skip(i + 1) {
                        let remainder: Vec<Expression> = elems
                            .iter()
                            .enumerate()
                            .filter(|(k, _)| *k != i && *k != j)
                            .map(|(_, e)| e.clone())
                            .collect();

                        for (op, lhs, rhs) in applicable_combinations(a, b) {
                            let combined = Expression::make(op, lhs.clone(), rhs.clone())?;
                            found |= self.search(aggregator, &remainder, Some(combined))?;
                        }
                    }
                }
                if found {
                    trace!("Branch over {} expressions reached the target", elems.len());
                }
                Ok(found)
            }
        }
    }
}

impl Default for ExpressionSolver {
    fn default() -> Self {
        Self::new()
    }
}
