//! Arithmetic engine, the final evaluation stage.
//!
//! The engine only understands fully numeric text: decimal literals, `+ - * /`
//! and parentheses. Variables must have been substituted beforehand.

pub mod iterative;
pub mod stack_ops;

pub use iterative::{EvalEngine, eval_iterative};
pub use stack_ops::{BinaryOp, StackSymbol};

use bumpalo::Bump;

use crate::Real;
use crate::config::Associativity;
use crate::error::Result;

/// Evaluate a fully numeric expression with the default (stack) associativity.
///
/// ```
/// use exprtool::eval::compute;
///
/// assert_eq!(compute("2+3*4").unwrap(), 14.0);
/// assert_eq!(compute("(2+3)*4").unwrap(), 20.0);
/// ```
pub fn compute(expression: &str) -> Result<Real> {
    eval_iterative(expression)
}

/// Evaluate a fully numeric expression with explicit associativity, placing the
/// evaluation stacks in `arena`.
pub fn compute_with(expression: &str, associativity: Associativity, arena: &Bump) -> Result<Real> {
    EvalEngine::new_in(arena, associativity).eval(expression)
}
