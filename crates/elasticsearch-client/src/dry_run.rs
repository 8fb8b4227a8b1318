//! Gateway that validates and records requests without any network I/O.

use crate::bulk::encode_bulk_body;
use crate::error::GatewayError;
use crate::gateway::{BulkSummary, IndexGateway};
use async_trait::async_trait;
use device_core::{DeviceRecord, MappingDocument};
use std::collections::BTreeMap;
use tokio::sync::Mutex;

#[derive(Debug, Default)]
struct DryRunState {
    /// Created indices; `None` when the index came from a bulk insert.
    indices: BTreeMap<String, Option<MappingDocument>>,
    /// Documents accepted per index.
    documents: BTreeMap<String, u64>,
    bulk_requests: u64,
}

/// In-process stand-in for the index engine.
///
/// Requests are encoded exactly as for the HTTP client, logged at `debug`,
/// then tracked in memory. Bulk inserts into an unknown index create it
/// implicitly.
///
/// A gateway from [`DryRunGateway::new`] cannot know what the real engine
/// holds, so every index lifecycle request succeeds. [`DryRunGateway::strict`]
/// mirrors the engine's lifecycle errors against its own tracked state:
/// creating an existing index or deleting a missing one fails.
#[derive(Debug, Default)]
pub struct DryRunGateway {
    state: Mutex<DryRunState>,
    strict: bool,
}

impl DryRunGateway {
    /// Gateway that accepts every lifecycle request.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gateway that rejects lifecycle requests conflicting with tracked state.
    pub fn strict() -> Self {
        Self {
            state: Mutex::default(),
            strict: true,
        }
    }

    /// Whether lifecycle conflicts are reported as errors.
    pub fn is_strict(&self) -> bool {
        self.strict
    }

    /// Whether `name` currently exists.
    pub async fn index_exists(&self, name: &str) -> bool {
        self.state.lock().await.indices.contains_key(name)
    }

    /// Mapping `name` was created with, if it was created explicitly.
    pub async fn mapping(&self, name: &str) -> Option<MappingDocument> {
        self.state.lock().await.indices.get(name).cloned().flatten()
    }

    /// Number of documents inserted into `name`.
    pub async fn document_count(&self, name: &str) -> u64 {
        self.state
            .lock()
            .await
            .documents
            .get(name)
            .copied()
            .unwrap_or(0)
    }

    /// Number of non-empty bulk requests received.
    pub async fn bulk_requests(&self) -> u64 {
        self.state.lock().await.bulk_requests
    }
}

#[async_trait]
impl IndexGateway for DryRunGateway {
    async fn ping(&self) -> Result<(), GatewayError> {
        tracing::debug!("Dry run: ping");
        Ok(())
    }

    async fn bulk_insert(&self, records: &[DeviceRecord]) -> Result<BulkSummary, GatewayError> {
        if records.is_empty() {
            return Ok(BulkSummary::default());
        }

        let body = encode_bulk_body(records)?;
        tracing::debug!(
            "Dry run: bulk request with {} documents ({} bytes)",
            records.len(),
            body.len()
        );
        tracing::debug!("Dry run: bulk body\n{body}");

        let mut state = self.state.lock().await;
        state.bulk_requests += 1;
        for record in records {
            state
                .indices
                .entry(record.index().to_string())
                .or_insert(None);
            *state
                .documents
                .entry(record.index().to_string())
                .or_insert(0) += 1;
        }

        Ok(BulkSummary {
            submitted: records.len(),
            indexed: records.len(),
            took_ms: None,
        })
    }

    async fn create_index(
        &self,
        name: &str,
        mapping: &MappingDocument,
    ) -> Result<(), GatewayError> {
        // Fail the same way the HTTP client would on an unserializable body.
        let body = serde_json::to_string(mapping)?;
        tracing::info!("Dry run: create index '{}' ({} byte mapping)", name, body.len());
        tracing::debug!("Dry run: PUT /{name} {body}");

        let mut state = self.state.lock().await;
        if self.strict && state.indices.contains_key(name) {
            return Err(GatewayError::IndexAlreadyExists {
                index: name.to_string(),
                body: format!("index [{name}] already exists"),
            });
        }
        state
            .indices
            .insert(name.to_string(), Some(mapping.clone()));
        Ok(())
    }

    async fn delete_index(&self, name: &str) -> Result<(), GatewayError> {
        tracing::info!("Dry run: delete index '{}'", name);

        let mut state = self.state.lock().await;
        if state.indices.remove(name).is_none() && self.strict {
            return Err(GatewayError::IndexNotFound {
                index: name.to_string(),
                body: format!("no such index [{name}]"),
            });
        }
        state.documents.remove(name);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use device_core::{fields, mapping_for, Convention};

    fn record(index: &str, id: &str) -> DeviceRecord {
        DeviceRecord::builder(index).field(fields::ID, id).build()
    }

    #[tokio::test]
    async fn test_create_then_duplicate() {
        let gateway = DryRunGateway::strict();
        let mapping = mapping_for(Convention::FlatTyped);

        gateway.create_index("devices-1", &mapping).await.unwrap();
        assert!(gateway.index_exists("devices-1").await);
        assert_eq!(gateway.mapping("devices-1").await, Some(mapping.clone()));

        let err = gateway.create_index("devices-1", &mapping).await.unwrap_err();
        assert!(matches!(err, GatewayError::IndexAlreadyExists { .. }));
    }

    #[tokio::test]
    async fn test_delete_missing() {
        let gateway = DryRunGateway::strict();
        let err = gateway.delete_index("nope").await.unwrap_err();
        assert!(matches!(err, GatewayError::IndexNotFound { ref index, .. } if index == "nope"));
        assert!(err.to_string().contains("no such index [nope]"));
    }

    #[tokio::test]
    async fn test_lenient_lifecycle_always_succeeds() {
        let gateway = DryRunGateway::new();
        assert!(!gateway.is_strict());

        gateway.delete_index("never-created").await.unwrap();

        let mapping = mapping_for(Convention::Flat);
        gateway.create_index("devices-1", &mapping).await.unwrap();
        gateway.create_index("devices-1", &mapping).await.unwrap();
        assert!(gateway.index_exists("devices-1").await);

        gateway.delete_index("devices-1").await.unwrap();
        assert!(!gateway.index_exists("devices-1").await);
    }

    #[tokio::test]
    async fn test_bulk_counts_per_index() {
        let gateway = DryRunGateway::new();
        let records = vec![record("a", "1"), record("a", "2"), record("b", "3")];

        let summary = gateway.bulk_insert(&records).await.unwrap();
        assert_eq!(summary.submitted, 3);
        assert_eq!(summary.indexed, 3);
        assert_eq!(gateway.document_count("a").await, 2);
        assert_eq!(gateway.document_count("b").await, 1);
        assert_eq!(gateway.bulk_requests().await, 1);

        // Implicitly created indices have no explicit mapping.
        assert!(gateway.index_exists("a").await);
        assert_eq!(gateway.mapping("a").await, None);
    }

    #[tokio::test]
    async fn test_delete_drops_documents() {
        let gateway = DryRunGateway::new();
        gateway
            .create_index("a", &mapping_for(Convention::Flat))
            .await
            .unwrap();
        gateway.bulk_insert(&[record("a", "1")]).await.unwrap();
        gateway.delete_index("a").await.unwrap();

        assert!(!gateway.index_exists("a").await);
        assert_eq!(gateway.document_count("a").await, 0);
    }

    #[tokio::test]
    async fn test_empty_bulk_is_not_a_request() {
        let gateway = DryRunGateway::new();
        gateway.bulk_insert(&[]).await.unwrap();
        assert_eq!(gateway.bulk_requests().await, 0);
    }
}
