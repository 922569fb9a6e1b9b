//! Value sources: where variable values come from.
//!
//! The evaluator never reads input on its own. Whenever it discovers a variable
//! it asks a [`ValueSource`] for the value, exactly once per distinct name and in
//! the order the names first appear in the expression.
//!
//! ```
//! use exprtool::engine::evaluate;
//! use exprtool::source::Bindings;
//!
//! let mut vars = Bindings::new();
//! vars.set("rate", 0.5).unwrap().set("hours", 8.0).unwrap();
//! assert_eq!(evaluate("rate * hours", &mut vars).unwrap(), 4.0);
//! ```

use alloc::collections::BTreeMap;
use alloc::string::{String, ToString};

use crate::Real;
use crate::error::{ExprError, Result};
use crate::types::{BindingTable, TryIntoHeaplessString, insert_binding, lookup_binding};

/// Supplies a value for a variable name.
pub trait ValueSource {
    /// Produce the value bound to `name`.
    fn resolve(&mut self, name: &str) -> Result<Real>;
}

impl<S: ValueSource + ?Sized> ValueSource for &mut S {
    fn resolve(&mut self, name: &str) -> Result<Real> {
        (**self).resolve(name)
    }
}

fn unknown(name: &str) -> ExprError {
    ExprError::UnknownVariable {
        name: name.to_string(),
    }
}

/// Fixed set of named values.
#[derive(Debug, Clone, Default)]
pub struct Bindings {
    table: BindingTable,
}

impl Bindings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `name` to `value`, replacing any earlier binding.
    pub fn set(&mut self, name: &str, value: Real) -> Result<&mut Self> {
        let key = name.try_into_heapless()?;
        insert_binding(&mut self.table, key, value)?;
        Ok(self)
    }

    pub fn get(&self, name: &str) -> Option<Real> {
        lookup_binding(&self.table, name)
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}

impl ValueSource for Bindings {
    fn resolve(&mut self, name: &str) -> Result<Real> {
        self.get(name).ok_or_else(|| unknown(name))
    }
}

impl ValueSource for BTreeMap<String, Real> {
    fn resolve(&mut self, name: &str) -> Result<Real> {
        self.get(name).copied().ok_or_else(|| unknown(name))
    }
}

#[cfg(feature = "std")]
impl<S: std::hash::BuildHasher> ValueSource for std::collections::HashMap<String, Real, S> {
    fn resolve(&mut self, name: &str) -> Result<Real> {
        self.get(name).copied().ok_or_else(|| unknown(name))
    }
}

/// A value source backed by a closure. Build one with [`from_fn`].
pub struct FnSource<F>(pub F);

impl<F> ValueSource for FnSource<F>
where
    F: FnMut(&str) -> Result<Real>,
{
    fn resolve(&mut self, name: &str) -> Result<Real> {
        (self.0)(name)
    }
}

/// Wrap a closure as a [`ValueSource`].
pub fn from_fn<F>(f: F) -> FnSource<F>
where
    F: FnMut(&str) -> Result<Real>,
{
    FnSource(f)
}

/// Source for expressions that must not contain variables.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoVariables;

impl ValueSource for NoVariables {
    fn resolve(&mut self, name: &str) -> Result<Real> {
        Err(unknown(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bindings_resolve_and_overwrite() {
        let mut vars = Bindings::new();
        assert!(vars.is_empty());
        vars.set("x", 1.0).unwrap();
        vars.set("x", 2.0).unwrap();
        assert_eq!(vars.len(), 1);
        assert_eq!(vars.resolve("x"), Ok(2.0));
        assert_eq!(
            vars.resolve("y"),
            Err(ExprError::UnknownVariable {
                name: "y".to_string()
            })
        );
    }

    #[test]
    fn test_bindings_reject_long_names() {
        let mut vars = Bindings::new();
        let long = "q".repeat(crate::types::MAX_NAME_LEN + 1);
        assert!(matches!(
            vars.set(&long, 1.0),
            Err(ExprError::StringTooLong)
        ));
    }

    #[test]
    fn test_map_sources() {
        let mut tree = BTreeMap::new();
        tree.insert("a".to_string(), 1.5);
        assert_eq!(tree.resolve("a"), Ok(1.5));
        assert!(tree.resolve("b").is_err());

    }

    #[cfg(feature = "std")]
    #[test]
    fn test_hash_map_source() {
        let mut hash = std::collections::HashMap::new();
        hash.insert("b".to_string(), -2.0);
        assert_eq!(hash.resolve("b"), Ok(-2.0));
        assert!(hash.resolve("a").is_err());
    }

    #[test]
    fn test_fn_source_and_no_variables() {
        let mut calls = 0;
        let mut source = from_fn(|name: &str| {
            calls += 1;
            Ok(name.len() as Real)
        });
        assert_eq!(source.resolve("abc"), Ok(3.0));
        assert_eq!(calls, 1);

        assert!(matches!(
            NoVariables.resolve("x"),
            Err(ExprError::UnknownVariable { .. })
        ));
    }
}
