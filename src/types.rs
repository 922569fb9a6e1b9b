//! Type definitions shared by the resolver and the value sources.
//!
//! Variable names and bindings live in fixed-capacity heapless containers so the
//! resolver never allocates per name. Both containers iterate in insertion order,
//! which for the resolver is the order variables were discovered.

use crate::Real;
use crate::error::ExprError;

/// Maximum length of a single variable name, in bytes.
pub const MAX_NAME_LEN: usize = 64;

/// Maximum number of distinct variables in one expression.
///
/// Must be a power of two for the heapless index maps.
pub const MAX_VARIABLES: usize = 64;

/// Heapless string holding one variable name.
pub type HString = heapless::String<MAX_NAME_LEN>;

/// Unique variable names in discovery order.
pub type VariableSet = heapless::FnvIndexSet<HString, MAX_VARIABLES>;

/// The variable binding table: name to bound value.
pub type BindingTable = heapless::FnvIndexMap<HString, Real, MAX_VARIABLES>;

/// Helper trait for converting string slices into heapless names.
pub trait TryIntoHeaplessString {
    fn try_into_heapless(self) -> Result<HString, ExprError>;
}

impl TryIntoHeaplessString for &str {
    fn try_into_heapless(self) -> Result<HString, ExprError> {
        HString::try_from(self).map_err(|_| ExprError::StringTooLong)
    }
}

/// Insert a binding, reporting a full table instead of silently dropping it.
pub fn insert_binding(
    table: &mut BindingTable,
    name: HString,
    value: Real,
) -> Result<(), ExprError> {
    table
        .insert(name, value)
        .map(|_| ())
        .map_err(|_| ExprError::CapacityExceeded("binding table"))
}

/// Look up a binding by plain string name.
pub fn lookup_binding(table: &BindingTable, name: &str) -> Option<Real> {
    table
        .iter()
        .find(|(key, _)| key.as_str() == name)
        .map(|(_, value)| *value)
}
