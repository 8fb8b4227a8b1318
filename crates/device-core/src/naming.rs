//! Attribute namer: turns a scoped attribute into a document field key.

use crate::convention::{Convention, Scope, ValueKind};

/// Suffix appended to string-valued keys under [`Convention::FlatTyped`].
pub const STRING_SUFFIX: &str = "_str";

/// Suffix appended to numeric keys under [`Convention::FlatTyped`].
pub const NUMERIC_SUFFIX: &str = "_num";

/// Build the document key for `attribute` in `scope`.
///
/// Under [`Convention::Flat`] the key is `{scope}_{attribute}` and `kind` is
/// ignored. Under [`Convention::FlatTyped`] the key additionally carries
/// `_str` (text and text lists) or `_num` (integers).
pub fn field_key(scope: Scope, attribute: &str, convention: Convention, kind: ValueKind) -> String {
    match convention {
        Convention::Flat => format!("{scope}_{attribute}"),
        Convention::FlatTyped => {
            let suffix = if kind.is_numeric() {
                NUMERIC_SUFFIX
            } else {
                STRING_SUFFIX
            };
            format!("{scope}_{attribute}{suffix}")
        }
    }
}
