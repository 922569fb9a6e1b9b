//! Structural validation, the second evaluation stage.
//!
//! The check is intentionally shallow: only the net count of parentheses is
//! compared. Ordering is not checked, so `)(` passes here and is left for the
//! engine to reject.

use crate::error::{ExprError, Result};

/// Returns `true` iff the expression has as many `(` as `)`.
pub fn validate(expression: &str) -> bool {
    let mut balance: isize = 0;
    for c in expression.chars() {
        match c {
            '(' => balance += 1,
            ')' => balance -= 1,
            _ => {}
        }
    }
    balance == 0
}

/// Same check as [`validate`], reported as an error carrying both counts.
pub fn check_balance(expression: &str) -> Result<()> {
    if validate(expression) {
        return Ok(());
    }
    let open = expression.chars().filter(|&c| c == '(').count();
    let close = expression.chars().filter(|&c| c == ')').count();
    Err(ExprError::UnbalancedParentheses { open, close })
}
