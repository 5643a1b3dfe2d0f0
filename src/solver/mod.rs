pub mod constants;
mod aggregator;
mod config;
mod core;
mod errors;

pub use aggregator::Aggregator;
pub use config::SolverConfig;
pub use core::ExpressionSolver;
pub use errors::SolverError;
