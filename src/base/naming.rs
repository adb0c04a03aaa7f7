//! Naming transforms between declarative attribute names and method names.
//!
//! Resolution and completion must agree on these rules, so both go through
//! this module: `name` ↔ `setName`, `name-ref` → `name`, `p:na` → (`p:`, `na`).

use thiserror::Error;

use super::constants::{REF_SUFFIX, SETTER_PREFIX};

/// A method name that cannot be mapped back to a property name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NameShapeError {
    /// The name lacks the mutator prefix or has nothing after it.
    #[error("invalid name shape: '{0}' is not a mutator name")]
    InvalidNameShape(String),
}

/// Convert a property name into its mutator method name.
///
/// `name` becomes `setName`; an empty property maps to the bare prefix.
pub fn to_accessor_name(property: &str) -> String {
    let mut result = String::with_capacity(SETTER_PREFIX.len() + property.len());
    result.push_str(SETTER_PREFIX);

    let mut chars = property.chars();
    if let Some(first) = chars.next() {
        result.extend(first.to_uppercase());
        result.push_str(chars.as_str());
    }
    result
}

/// Convert a mutator method name back into its property name.
///
/// `setName` becomes `name`. Fails for names without the prefix and for the
/// bare prefix itself.
pub fn from_accessor_name(method: &str) -> Result<String, NameShapeError> {
    let rest = method
        .strip_prefix(SETTER_PREFIX)
        .filter(|rest| !rest.is_empty())
        .ok_or_else(|| NameShapeError::InvalidNameShape(method.to_string()))?;

    let mut chars = rest.chars();
    let mut result = String::with_capacity(rest.len());
    if let Some(first) = chars.next() {
        result.extend(first.to_lowercase());
        result.push_str(chars.as_str());
    }
    Ok(result)
}

/// Drop the by-reference marker from a shorthand attribute name.
///
/// `name-ref` becomes `name`; anything else is returned unchanged.
pub fn strip_reference_suffix(attribute: &str) -> &str {
    attribute.strip_suffix(REF_SUFFIX).unwrap_or(attribute)
}

/// Split typed shorthand text into its namespace prefix and name prefix.
///
/// The namespace prefix keeps its colon: `p:na` → (`p:`, `na`).
/// Text without a colon has no namespace prefix, and a leading colon is
/// dropped: `:na` → (empty, `na`).
pub fn split_namespace_prefix(typed: &str) -> (&str, &str) {
    match typed.find(':') {
        Some(0) => ("", &typed[1..]),
        Some(pos) => typed.split_at(pos + 1),
        None => ("", typed),
    }
}
