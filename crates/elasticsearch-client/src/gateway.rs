//! The gateway trait implemented by every index engine backend.

use crate::error::GatewayError;
use async_trait::async_trait;
use device_core::{DeviceRecord, MappingDocument};

/// Outcome of a successful bulk insert.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BulkSummary {
    /// Number of documents submitted.
    pub submitted: usize,
    /// Number of documents the engine accepted.
    pub indexed: usize,
    /// Engine-side processing time, when reported.
    pub took_ms: Option<u64>,
}

/// Operations the populator and CLI need from an index engine.
///
/// Implementations surface engine failures as [`GatewayError`] without
/// retrying.
#[async_trait]
pub trait IndexGateway: Send + Sync {
    /// Check that the engine is reachable.
    async fn ping(&self) -> Result<(), GatewayError>;

    /// Index every record into the index named by its routing metadata.
    async fn bulk_insert(&self, records: &[DeviceRecord]) -> Result<BulkSummary, GatewayError>;

    /// Create `name` with the given settings and mappings.
    async fn create_index(&self, name: &str, mapping: &MappingDocument)
        -> Result<(), GatewayError>;

    /// Delete `name`.
    async fn delete_index(&self, name: &str) -> Result<(), GatewayError>;
}
