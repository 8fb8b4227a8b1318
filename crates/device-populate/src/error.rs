//! Error types for device population.

use thiserror::Error;

/// Errors that can occur while populating or managing an index.
#[derive(Error, Debug)]
pub enum PopulateError {
    /// Invalid argument or unknown schema.
    #[error(transparent)]
    Core(#[from] device_core::CoreError),

    /// Record generation error.
    #[error("Failed to generate devices")]
    Generator(#[from] device_generator::GeneratorError),

    /// Index engine error, kept unchanged as the source.
    #[error("Index engine error")]
    Gateway(#[from] elasticsearch_client::GatewayError),
}
