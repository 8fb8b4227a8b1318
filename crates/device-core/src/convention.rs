//! Naming conventions, attribute scopes and value kinds.

use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Field naming convention used when writing device documents.
///
/// The convention decides both how attribute keys are spelled and which
/// mapping document the index is created with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Convention {
    /// `{scope}_{attribute}`; the engine infers storage type from the value.
    Flat,
    /// `{scope}_{attribute}_str` / `{scope}_{attribute}_num`; the key
    /// suffix alone decides the storage type.
    FlatTyped,
}

impl Convention {
    /// All known conventions.
    pub const ALL: [Convention; 2] = [Convention::Flat, Convention::FlatTyped];

    /// The schema name as accepted on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Flat => "flat",
            Self::FlatTyped => "flat_typed",
        }
    }
}

impl fmt::Display for Convention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Convention {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "flat" => Ok(Self::Flat),
            "flat_typed" => Ok(Self::FlatTyped),
            other => Err(CoreError::UnknownSchema(other.to_string())),
        }
    }
}

/// Logical grouping of device attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Scope {
    Identity,
    Inventory,
    Custom,
}

impl Scope {
    /// Scopes in the order their dynamic templates are declared.
    pub const ALL: [Scope; 3] = [Scope::Inventory, Scope::Identity, Scope::Custom];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Identity => "identity",
            Self::Inventory => "inventory",
            Self::Custom => "custom",
        }
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classification of an attribute value, used to pick a typed key suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    /// Single string value
    Text,
    /// List of strings (indexed as keyword, like a single string)
    TextList,
    /// Whole number
    Integer,
}

impl ValueKind {
    /// Whether the value is stored as a number.
    pub fn is_numeric(&self) -> bool {
        matches!(self, Self::Integer)
    }
}
