//! Error types shared across the device-indexer crates.

use thiserror::Error;

/// Errors raised by core type parsing and argument validation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// An argument was out of range or a required option was missing.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The schema name is not one of the known conventions.
    #[error("Unknown schema '{0}' (expected one of: flat, flat_typed)")]
    UnknownSchema(String),
}
