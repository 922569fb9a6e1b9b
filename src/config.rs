//! Evaluation settings.
//!
//! The defaults reproduce the classic behaviour of the evaluator exactly. The
//! alternatives exist for callers who want conventional arithmetic or safe
//! substitution of overlapping variable names.

use serde::{Deserialize, Serialize};

/// How runs of equal-precedence operators are combined.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Associativity {
    /// Only `*`/`/` over `+`/`-` forces a reduction; equal-precedence runs are
    /// drained from the top of the operator stack, i.e. right to left.
    /// `10/2/5` evaluates to `25`.
    #[default]
    Stack,
    /// Any pending operator of higher or equal precedence is reduced first,
    /// giving conventional left-to-right arithmetic. `10/2/5` evaluates to `1`.
    Left,
}

/// How bound values are written back into the expression text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubstitutionMode {
    /// Plain text replacement of every occurrence, one variable at a time in
    /// discovery order. A name that is a substring of a longer name corrupts it.
    #[default]
    Literal,
    /// Replace only whole alphabetic runs that exactly match a bound name.
    Boundary,
}

/// Configuration for a single evaluation or a reusable [`Evaluator`](crate::engine::Evaluator).
///
/// Missing fields fall back to their defaults when deserializing, so `{}` is a
/// valid configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvalConfig {
    pub associativity: Associativity,
    pub substitution: SubstitutionMode,
}

impl EvalConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_associativity(mut self, associativity: Associativity) -> Self {
        self.associativity = associativity;
        self
    }

    pub fn with_substitution(mut self, substitution: SubstitutionMode) -> Self {
        self.substitution = substitution;
        self
    }
}
