//! Whitespace normalization, the first evaluation stage.

use alloc::string::String;

/// Return `input` with every whitespace character removed.
///
/// Whitespace is anything `char::is_whitespace` accepts (spaces, tabs, newlines
/// and the Unicode separators). Never fails.
pub fn normalize(input: &str) -> String {
    input.chars().filter(|c| !c.is_whitespace()).collect()
}
