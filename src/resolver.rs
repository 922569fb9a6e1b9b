//! Variable discovery, binding and substitution, the third evaluation stage.
//!
//! A variable is any maximal run of alphabetic characters. Each distinct name is
//! bound once through a [`ValueSource`] and its value is then written back into
//! the expression as decimal text, leaving a purely numeric expression for the
//! arithmetic engine.

use alloc::format;
use alloc::string::String;

use crate::Real;
use crate::config::SubstitutionMode;
use crate::error::{ExprError, Result};
use crate::source::ValueSource;
use crate::types::{
    BindingTable, HString, TryIntoHeaplessString, VariableSet, insert_binding, lookup_binding,
};

fn record(variables: &mut VariableSet, name: &str) -> Result<()> {
    let name: HString = name.try_into_heapless()?;
    variables
        .insert(name)
        .map(|_| ())
        .map_err(|_| ExprError::CapacityExceeded("variable set"))
}

/// Collect the distinct variable names of `expression` in discovery order.
pub fn extract_variables(expression: &str) -> Result<VariableSet> {
    let mut variables = VariableSet::new();
    let mut start = None;

    for (i, c) in expression.char_indices() {
        if c.is_alphabetic() {
            start.get_or_insert(i);
        } else if let Some(s) = start.take() {
            record(&mut variables, &expression[s..i])?;
        }
    }
    if let Some(s) = start {
        record(&mut variables, &expression[s..])?;
    }

    Ok(variables)
}

/// Ask `source` for the value of every discovered variable, in discovery order.
///
/// The first failing lookup aborts binding; later names are not requested.
pub fn bind_variables<S: ValueSource + ?Sized>(
    variables: &VariableSet,
    source: &mut S,
) -> Result<BindingTable> {
    let mut table = BindingTable::new();
    for name in variables.iter() {
        let value = source.resolve(name.as_str())?;
        insert_binding(&mut table, name.clone(), value)?;
    }
    Ok(table)
}

/// Decimal text used when a bound value is written into the expression.
///
/// `Display` for floats never switches to exponent notation, so finite values
/// always come out as digits, an optional `.` and an optional leading `-`.
pub fn format_value(value: Real) -> String {
    format!("{}", value)
}

/// Write the bound values back into `expression`.
pub fn substitute(expression: &str, bindings: &BindingTable, mode: SubstitutionMode) -> String {
    match mode {
        SubstitutionMode::Literal => substitute_literal(expression, bindings),
        SubstitutionMode::Boundary => substitute_boundary(expression, bindings),
    }
}

// One whole-text replacement per variable, in table order.
fn substitute_literal(expression: &str, bindings: &BindingTable) -> String {
    let mut text = String::from(expression);
    for (name, value) in bindings.iter() {
        if name.is_empty() {
            continue;
        }
        text = text.replace(name.as_str(), &format_value(*value));
    }
    text
}

// Only whole alphabetic runs are replaced; unbound runs are kept as they are.
fn substitute_boundary(expression: &str, bindings: &BindingTable) -> String {
    let mut text = String::with_capacity(expression.len());
    let mut start = None;

    let flush = |text: &mut String, run: &str| match lookup_binding(bindings, run) {
        Some(value) => text.push_str(&format_value(value)),
        None => text.push_str(run),
    };

    for (i, c) in expression.char_indices() {
        if c.is_alphabetic() {
            start.get_or_insert(i);
            continue;
        }
        if let Some(s) = start.take() {
            flush(&mut text, &expression[s..i]);
        }
        text.push(c);
    }
    if let Some(s) = start {
        flush(&mut text, &expression[s..]);
    }

    text
}

/// Discover, bind and substitute in one step.
pub fn resolve<S: ValueSource + ?Sized>(
    expression: &str,
    source: &mut S,
    mode: SubstitutionMode,
) -> Result<String> {
    let variables = extract_variables(expression)?;
    if variables.is_empty() {
        return Ok(String::from(expression));
    }
    let bindings = bind_variables(&variables, source)?;
    Ok(substitute(expression, &bindings, mode))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::{Bindings, from_fn};
    use alloc::vec::Vec;

    fn names(set: &VariableSet) -> Vec<&str> {
        set.iter().map(|n| n.as_str()).collect()
    }

    fn table(pairs: &[(&str, Real)]) -> BindingTable {
        let mut t = BindingTable::new();
        for (name, value) in pairs {
            insert_binding(&mut t, name.try_into_heapless().unwrap(), *value).unwrap();
        }
        t
    }

    #[test]
    fn test_extract_in_discovery_order() {
        let vars = extract_variables("b+a*(b-c)/abc").unwrap();
        assert_eq!(names(&vars), ["b", "a", "c", "abc"]);
    }

    #[test]
    fn test_extract_trailing_and_none() {
        assert_eq!(names(&extract_variables("1+xy").unwrap()), ["xy"]);
        assert!(extract_variables("1+2*(3)").unwrap().is_empty());
        assert!(extract_variables("").unwrap().is_empty());
    }

    #[test]
    fn test_digits_split_names() {
        // Digits are not alphabetic, so "x1y" holds two variables.
        assert_eq!(names(&extract_variables("x1y").unwrap()), ["x", "y"]);
    }

    #[test]
    fn test_extract_too_many_variables() {
        let mut expr = String::new();
        let letters = "abcdefghijklmnopqrstuvwxyz";
        for a in letters.chars().take(3) {
            for b in letters.chars() {
                expr.push(a);
                expr.push(b);
                expr.push('+');
            }
        }
        expr.push('1');
        assert!(matches!(
            extract_variables(&expr),
            Err(ExprError::CapacityExceeded("variable set"))
        ));
    }

    #[test]
    fn test_bind_asks_once_per_name_in_order() {
        let vars = extract_variables("y+x*y+x+z").unwrap();
        let mut asked = Vec::new();
        let mut source = from_fn(|name: &str| {
            asked.push(String::from(name));
            Ok(1.0)
        });
        let bound = bind_variables(&vars, &mut source).unwrap();
        assert_eq!(bound.len(), 3);
        assert_eq!(asked, ["y", "x", "z"]);
    }

    #[test]
    fn test_bind_stops_at_first_failure() {
        let vars = extract_variables("a+b").unwrap();
        let mut vars_source = Bindings::new();
        vars_source.set("b", 1.0).unwrap();
        let err = bind_variables(&vars, &mut vars_source).unwrap_err();
        assert_eq!(
            err,
            ExprError::UnknownVariable {
                name: String::from("a")
            }
        );
    }

    #[test]
    fn test_format_value() {
        assert_eq!(format_value(3.0), "3");
        assert_eq!(format_value(0.25), "0.25");
        assert_eq!(format_value(-4.5), "-4.5");
        assert_eq!(format_value(1e21), "1000000000000000000000");
    }

    #[test]
    fn test_literal_substitution() {
        let t = table(&[("x", 3.0), ("y", 4.5)]);
        assert_eq!(
            substitute("x+y*x", &t, SubstitutionMode::Literal),
            "3+4.5*3"
        );
    }

    #[test]
    fn test_literal_substitution_corrupts_longer_names() {
        let t = table(&[("x", 2.0), ("xy", 5.0)]);
        // "x" is replaced first and eats the prefix of "xy".
        assert_eq!(substitute("x+xy", &t, SubstitutionMode::Literal), "2+2y");
    }

    #[test]
    fn test_boundary_substitution_respects_runs() {
        let t = table(&[("x", 2.0), ("xy", 5.0)]);
        assert_eq!(substitute("x+xy", &t, SubstitutionMode::Boundary), "2+5");
        assert_eq!(
            substitute("(xy)*x", &t, SubstitutionMode::Boundary),
            "(5)*2"
        );
    }

    #[test]
    fn test_boundary_keeps_unbound_runs() {
        let t = table(&[("a", 1.0)]);
        assert_eq!(substitute("a+b", &t, SubstitutionMode::Boundary), "1+b");
    }

    #[test]
    fn test_resolve_without_variables_skips_source() {
        let mut source = from_fn(|_: &str| -> Result<Real> { panic!("source must not be called") });
        assert_eq!(
            resolve("1+2", &mut source, SubstitutionMode::Literal).unwrap(),
            "1+2"
        );
    }
}
