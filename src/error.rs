//! Error types and handling for the exprtool crate.
//!
//! Every stage of an evaluation reports failure through [`ExprError`]. Nothing is
//! recovered internally: the first error aborts the evaluation and is handed back
//! to the caller unchanged.

use alloc::string::String;
use core::fmt;
use core::num::ParseFloatError;

/// Result type used throughout the crate.
///
/// This is a convenience type alias that uses the `ExprError` type for the error variant.
pub type Result<T> = core::result::Result<T, ExprError>;

/// Identifies which evaluation stack ran dry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StackKind {
    /// The stack of pending numeric values.
    Operand,
    /// The stack of pending operators and open parentheses.
    Operator,
}

impl fmt::Display for StackKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StackKind::Operand => write!(f, "operand"),
            StackKind::Operator => write!(f, "operator"),
        }
    }
}

/// Error type for expression validation, resolution and evaluation.
#[derive(Debug, Clone, PartialEq)]
pub enum ExprError {
    /// The counts of `(` and `)` in the expression differ.
    ///
    /// Only the totals are compared, so this is reported before any evaluation
    /// takes place and no value source is consulted.
    UnbalancedParentheses { open: usize, close: usize },

    /// Error when division by zero is attempted.
    ///
    /// Raised when the right operand of `/` is exactly `0.0` (or `-0.0`).
    DivideByZero,

    /// A character reached operator dispatch that is not one of `+ - * /`.
    ///
    /// This covers stray characters such as `%` or `$`, letters left over after
    /// substitution (for instance from a non-finite bound value), and an open
    /// parenthesis that was never closed inside the engine.
    InvalidOperator(char),

    /// An operand or operator was needed but the stack was empty.
    ///
    /// The balance check is deliberately shallow, so inputs like `)(`, `1+`,
    /// `()` or `-5` get past validation and fail here instead.
    StackUnderflow(StackKind),

    /// Error when parsing a floating point number.
    ///
    /// This occurs for malformed literals such as `1.2.3` or a lone `.`.
    Parse(ParseFloatError),

    /// The value source has no binding for a discovered variable.
    UnknownVariable { name: String },

    /// Error when capacity is exceeded for a heapless container.
    ///
    /// The string indicates which container type exceeded capacity.
    CapacityExceeded(&'static str),

    /// Error when a variable name is too long for the heapless string buffer.
    StringTooLong,

    /// The value source could not produce a value (I/O failure, end of input).
    Input(String),
}

impl fmt::Display for ExprError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExprError::UnbalancedParentheses { open, close } => write!(
                f,
                "Invalid expression: unbalanced parentheses ({} opening, {} closing)",
                open, close
            ),
            ExprError::DivideByZero => write!(f, "Division by zero"),
            ExprError::InvalidOperator(op) => write!(f, "Invalid operator: '{}'", op),
            ExprError::StackUnderflow(kind) => {
                write!(f, "Malformed expression: {} stack is empty", kind)
            }
            ExprError::Parse(err) => write!(f, "Invalid number: {}", err),
            ExprError::UnknownVariable { name } => write!(f, "Unknown variable: '{}'", name),
            ExprError::CapacityExceeded(container_type) => {
                write!(f, "Capacity exceeded for {}", container_type)
            }
            ExprError::StringTooLong => write!(f, "String too long for heapless buffer"),
            ExprError::Input(err) => write!(f, "Input error: {}", err),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ExprError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ExprError::Parse(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ParseFloatError> for ExprError {
    fn from(err: ParseFloatError) -> ExprError {
        ExprError::Parse(err)
    }
}

impl From<String> for ExprError {
    fn from(err: String) -> ExprError {
        ExprError::Input(err)
    }
}
