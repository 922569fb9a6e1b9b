//! The expression evaluator: normalize, validate, resolve, compute.

use alloc::string::String;

use bumpalo::Bump;

use crate::Real;
use crate::config::{EvalConfig, SubstitutionMode};
use crate::error::Result;
use crate::eval::EvalEngine;
use crate::normalize::normalize;
use crate::resolver::resolve;
use crate::source::ValueSource;
use crate::validate::check_balance;

/// Run the first three stages and return the fully numeric expression.
///
/// Variables are bound through `source` only if the parenthesis check passes.
///
/// ```
/// use exprtool::config::SubstitutionMode;
/// use exprtool::engine::prepare;
/// use exprtool::source::Bindings;
///
/// let mut vars = Bindings::new();
/// vars.set("x", 2.5).unwrap();
/// let prepared = prepare(" ( x + 1 ) * x ", &mut vars, SubstitutionMode::Literal).unwrap();
/// assert_eq!(prepared, "(2.5+1)*2.5");
/// ```
pub fn prepare<S: ValueSource + ?Sized>(
    expression: &str,
    source: &mut S,
    mode: SubstitutionMode,
) -> Result<String> {
    let normalized = normalize(expression);
    check_balance(&normalized)?;
    resolve(&normalized, source, mode)
}

/// Evaluates an expression with the default configuration.
///
/// # Parameters
///
/// * `expression`: the expression text; whitespace anywhere is ignored
/// * `source`: supplies a value for each distinct variable
///
/// # Returns
///
/// * `Ok(value)`: the result of evaluating the expression
/// * `Err(error)`: the first failure; no partial result is produced
///
/// # Examples
///
/// ```
/// use exprtool::engine::evaluate;
/// use exprtool::source::Bindings;
///
/// let mut vars = Bindings::new();
/// vars.set("x", 3.0).unwrap().set("y", 4.0).unwrap();
/// assert_eq!(evaluate("x + y", &mut vars).unwrap(), 7.0);
/// ```
pub fn evaluate<S: ValueSource + ?Sized>(expression: &str, source: &mut S) -> Result<Real> {
    evaluate_with_config(expression, source, &EvalConfig::default())
}

/// Evaluates an expression with an explicit configuration.
pub fn evaluate_with_config<S: ValueSource + ?Sized>(
    expression: &str,
    source: &mut S,
    config: &EvalConfig,
) -> Result<Real> {
    let numeric = prepare(expression, source, config.substitution)?;
    let arena = Bump::new();
    EvalEngine::new_in(&arena, config.associativity).eval(&numeric)
}

/// Reusable evaluator.
///
/// Holds a configuration and an arena for the evaluation stacks; the arena is
/// reset at the start of every computation, so repeated evaluations reuse the
/// same memory.
///
/// ```
/// use exprtool::config::{Associativity, EvalConfig};
/// use exprtool::engine::Evaluator;
/// use exprtool::source::NoVariables;
///
/// let mut evaluator = Evaluator::new(EvalConfig::new().with_associativity(Associativity::Left));
/// assert_eq!(evaluator.evaluate("8 - 2 - 1", &mut NoVariables).unwrap(), 5.0);
/// assert_eq!(evaluator.compute("8-2-1").unwrap(), 5.0);
/// ```
#[derive(Default)]
pub struct Evaluator {
    config: EvalConfig,
    arena: Bump,
}

impl Evaluator {
    pub fn new(config: EvalConfig) -> Self {
        Self {
            config,
            arena: Bump::new(),
        }
    }

    pub fn config(&self) -> &EvalConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: EvalConfig) {
        self.config = config;
    }

    /// Normalize, validate and substitute, without computing.
    pub fn prepare<S: ValueSource + ?Sized>(
        &self,
        expression: &str,
        source: &mut S,
    ) -> Result<String> {
        prepare(expression, source, self.config.substitution)
    }

    /// Compute an already numeric, normalized expression.
    pub fn compute(&mut self, numeric: &str) -> Result<Real> {
        self.arena.reset();
        EvalEngine::new_in(&self.arena, self.config.associativity).eval(numeric)
    }

    /// Run the full pipeline.
    pub fn evaluate<S: ValueSource + ?Sized>(
        &mut self,
        expression: &str,
        source: &mut S,
    ) -> Result<Real> {
        let numeric = self.prepare(expression, source)?;
        self.compute(&numeric)
    }
}
