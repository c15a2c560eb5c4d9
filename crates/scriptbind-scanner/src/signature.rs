//! Implicit message registration by declaration shape

use crate::types::normalize_type;
use scriptbind_core::SignatureTable;

/// Whether `name(params)` matches an engine signature exactly.
///
/// Names absent from the table never match, whatever their parameters.
pub fn matches_signature(name: &str, params: &[String], table: &SignatureTable) -> bool {
    table.entries_named(name).any(|entry| {
        entry.params.len() == params.len()
            && entry
                .params
                .iter()
                .zip(params)
                .all(|(expected, actual)| normalize_type(expected) == normalize_type(actual))
    })
}
