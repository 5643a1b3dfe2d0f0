//! Expression trees, their canonical construction and rendering

mod ast;
mod build;
mod display;
mod errors;
mod eval;
mod operator;

pub use ast::Expression;
pub use errors::ExpressionError;
pub use operator::Operator;
