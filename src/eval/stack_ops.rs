//! Operators and operator-stack symbols used by the two-stack evaluator.

use crate::Real;
use crate::error::ExprError;

/// Binary operators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl BinaryOp {
    /// Precedence class: `*` and `/` bind tighter than `+` and `-`.
    pub fn precedence(self) -> u8 {
        match self {
            BinaryOp::Add | BinaryOp::Subtract => 1,
            BinaryOp::Multiply | BinaryOp::Divide => 2,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            BinaryOp::Add => '+',
            BinaryOp::Subtract => '-',
            BinaryOp::Multiply => '*',
            BinaryOp::Divide => '/',
        }
    }

    /// Apply a binary operation to two values.
    ///
    /// Division by exactly zero is an error rather than an infinity or NaN.
    pub fn apply(self, left: Real, right: Real) -> Result<Real, ExprError> {
        match self {
            BinaryOp::Add => Ok(left + right),
            BinaryOp::Subtract => Ok(left - right),
            BinaryOp::Multiply => Ok(left * right),
            BinaryOp::Divide => {
                if right == 0.0 {
                    Err(ExprError::DivideByZero)
                } else {
                    Ok(left / right)
                }
            }
        }
    }
}

/// Convert an operator character to its operation.
pub fn char_to_stack_op(op: char) -> Result<BinaryOp, ExprError> {
    match op {
        '+' => Ok(BinaryOp::Add),
        '-' => Ok(BinaryOp::Subtract),
        '*' => Ok(BinaryOp::Multiply),
        '/' => Ok(BinaryOp::Divide),
        _ => Err(ExprError::InvalidOperator(op)),
    }
}

/// Check if a character is a binary operator
pub fn is_binary_operator(op: char) -> bool {
    matches!(op, '+' | '-' | '*' | '/')
}

/// Entries of the operator stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StackSymbol {
    /// An open parenthesis waiting for its `)`.
    Open,
    /// A deferred operator.
    Binary(BinaryOp),
}

impl StackSymbol {
    /// The operation this symbol stands for; an open parenthesis has none.
    pub fn operation(self) -> Result<BinaryOp, ExprError> {
        match self {
            StackSymbol::Binary(op) => Ok(op),
            StackSymbol::Open => Err(ExprError::InvalidOperator('(')),
        }
    }
}
