#![cfg_attr(not(feature = "std"), no_std)]
#![doc = r#"
# exprtool

A small, no_std-friendly arithmetic expression evaluator built around a classic
two-stack (operand/operator) engine.

## Overview

An expression goes through four stages, strictly in order:

1. **Normalize** - all whitespace is stripped.
2. **Validate** - parenthesis counts must balance.
3. **Resolve** - alphabetic runs are discovered as variables, each one is bound
   exactly once through a [`ValueSource`](source::ValueSource), and the values are
   substituted back into the text.
4. **Compute** - the now purely numeric text is evaluated with an operand stack
   and an operator stack.

Supported syntax is deliberately tiny: decimal literals, the binary operators
`+ - * /`, parentheses, and single-word variables. There is no unary minus and
no exponentiation.

## Quick Start

```rust
use exprtool::engine::evaluate;
use exprtool::source::{Bindings, NoVariables};

let result = evaluate("2 + 3 * 4", &mut NoVariables).unwrap();
assert_eq!(result, 14.0);

let mut vars = Bindings::new();
vars.set("x", 3.0).unwrap();
vars.set("y", 4.0).unwrap();
assert_eq!(evaluate("(x + y) * 2", &mut vars).unwrap(), 14.0);
```

## Value Sources

Any closure can act as a value source. It is asked once per distinct variable,
in the order the variables first appear:

```rust
use exprtool::engine::evaluate;
use exprtool::source::from_fn;

let mut asked = Vec::new();
let mut source = from_fn(|name: &str| {
    asked.push(name.to_string());
    Ok(name.len() as f64)
});
assert_eq!(evaluate("ab * c + ab", &mut source).unwrap(), 4.0);
assert_eq!(asked, ["ab", "c"]);
```

## Operator Associativity

The engine only knows that `*` and `/` bind tighter than `+` and `-`. Runs of
equal precedence are resolved from the top of the operator stack, so by default
`10/2/5` is `10/(2/5)`. Conventional left-to-right evaluation is available
through [`EvalConfig`](config::EvalConfig):

```rust
use exprtool::config::{Associativity, EvalConfig};
use exprtool::engine::{evaluate, evaluate_with_config};
use exprtool::source::NoVariables;

assert_eq!(evaluate("10/2/5", &mut NoVariables).unwrap(), 25.0);

let config = EvalConfig::new().with_associativity(Associativity::Left);
assert_eq!(
    evaluate_with_config("10/2/5", &mut NoVariables, &config).unwrap(),
    1.0
);
```

## Error Handling

Every failure aborts the evaluation and is returned as an [`ExprError`](error::ExprError):

```rust
use exprtool::engine::evaluate;
use exprtool::error::ExprError;
use exprtool::source::NoVariables;

assert!(matches!(
    evaluate("5/0", &mut NoVariables),
    Err(ExprError::DivideByZero)
));
assert!(matches!(
    evaluate("(1+2", &mut NoVariables),
    Err(ExprError::UnbalancedParentheses { open: 1, close: 0 })
));
```

## Feature Flags

- `std` (default): console [`PromptSource`](prompt::PromptSource), `HashMap`
  value sources and `std::error::Error` for [`ExprError`](error::ExprError).
- `cli`: builds the `exprtool` binary.

Without `std` the crate only needs `alloc`.

## Limits

Variable names are stored inline, so one name may be at most
[`MAX_NAME_LEN`](types::MAX_NAME_LEN) (64) bytes and one expression may use at
most [`MAX_VARIABLES`](types::MAX_VARIABLES) (64) distinct names. Longer names
fail with `StringTooLong`, more names with `CapacityExceeded`.
"#]

extern crate alloc;

pub mod config;
pub mod engine;
pub mod error;
pub mod eval;
pub mod normalize;
#[cfg(feature = "std")]
pub mod prompt;
pub mod resolver;
pub mod source;
pub mod types;
pub mod validate;

pub use config::{Associativity, EvalConfig, SubstitutionMode};
pub use engine::{Evaluator, evaluate, evaluate_with_config, prepare};
pub use error::{ExprError, StackKind};
pub use source::{Bindings, NoVariables, ValueSource};

/// Floating-point type used for every value in an expression.
pub type Real = f64;

pub mod constants {
    use super::Real;

    pub const TEST_PRECISION: Real = 1e-10;
}

/// Utility macro to check if two floating point values are approximately equal
/// within a specified epsilon. Supports optional format arguments like assert_eq!.
#[macro_export]
macro_rules! assert_approx_eq {
    ($left:expr, $right:expr $(,)?) => {
        $crate::assert_approx_eq!($left, $right, $crate::constants::TEST_PRECISION)
    };
    ($left:expr, $right:expr, $epsilon:expr $(,)?) => {{
        let left_val: $crate::Real = $left;
        let right_val: $crate::Real = $right;
        let eps = $epsilon;

        if left_val.is_nan() && right_val.is_nan() {
            // NaN == NaN for our purposes
        } else if left_val.is_infinite()
            && right_val.is_infinite()
            && left_val.signum() == right_val.signum()
        {
            // Same-signed infinities are equal
        } else {
            assert!(
                (left_val - right_val).abs() < eps,
                "assertion failed: `(left ≈ right)` (left: `{}`, right: `{}`, epsilon: `{}`)",
                left_val,
                right_val,
                eps
            );
        }
    }};
    ($left:expr, $right:expr, $epsilon:expr, $($arg:tt)+) => {{
        let left_val: $crate::Real = $left;
        let right_val: $crate::Real = $right;
        let eps = $epsilon;

        if !(left_val.is_nan() && right_val.is_nan()) {
            assert!((left_val - right_val).abs() < eps, $($arg)+);
        }
    }};
}
