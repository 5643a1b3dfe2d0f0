use crate::solver::constants::{DEFAULT_OPERAND_COUNT, DEFAULT_TARGET, EPSILON};

/// Configuration for a search
#[derive(Debug, Clone, PartialEq)]
pub struct SolverConfig {
    /// Value every solution must reach
    pub target: f64,
    /// Tolerance when comparing against the target
    pub epsilon: f64,
    /// How many numbers make up a hand. The search itself accepts any count; callers
    /// validate input against this.
    pub operand_count: usize,
}

impl SolverConfig {
    pub fn with_target(target: f64) -> Self {
        Self {
            target,
            ..Self::default()
        }
    }
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            target: DEFAULT_TARGET,
            epsilon: EPSILON,
            operand_count: DEFAULT_OPERAND_COUNT,
        }
    }
}
