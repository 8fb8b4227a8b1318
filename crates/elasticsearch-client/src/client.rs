//! HTTP client for Elasticsearch-compatible engines.

use crate::bulk::{encode_bulk_body, summarize_bulk_response, BulkResponse};
use crate::error::GatewayError;
use crate::gateway::{BulkSummary, IndexGateway};
use async_trait::async_trait;
use device_core::{DeviceRecord, MappingDocument};
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Response};
use std::time::Duration;

/// Default engine address.
pub const DEFAULT_ADDR: &str = "http://localhost:9200";

/// HTTP client settings.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Per-request timeout
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
        }
    }
}

/// Index gateway backed by the engine's REST API.
pub struct ElasticsearchClient {
    base_url: String,
    client: Client,
}

impl ElasticsearchClient {
    /// Build a client without contacting the engine.
    pub fn new(addr: &str, config: ClientConfig) -> Result<Self, GatewayError> {
        let base_url = normalize_addr(addr)?;
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self { base_url, client })
    }

    /// Build a client and verify the engine is reachable.
    pub async fn connect(addr: &str, config: ClientConfig) -> Result<Self, GatewayError> {
        let client = Self::new(addr, config)?;
        client.ping().await?;
        Ok(client)
    }

    /// Base URL requests are sent to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

fn normalize_addr(addr: &str) -> Result<String, GatewayError> {
    let addr = addr.trim();
    if !(addr.starts_with("http://") || addr.starts_with("https://")) {
        return Err(GatewayError::InvalidAddress(addr.to_string()));
    }
    Ok(addr.trim_end_matches('/').to_string())
}

/// Return the response if successful, otherwise the error built by
/// `classify` from its status and body.
///
/// A failure while reading the error body is returned as
/// [`GatewayError::Http`].
async fn check_status<F>(response: Response, classify: F) -> Result<Response, GatewayError>
where
    F: FnOnce(u16, String) -> GatewayError,
{
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.map_err(|e| {
        tracing::debug!("Failed to read error body for status {status}: {e}");
        GatewayError::Http(e)
    })?;
    Err(classify(status.as_u16(), body))
}

fn status_error(status: u16, body: String) -> GatewayError {
    GatewayError::Status { status, body }
}

#[async_trait]
impl IndexGateway for ElasticsearchClient {
    async fn ping(&self) -> Result<(), GatewayError> {
        let url = self.url("/");
        tracing::debug!("Pinging index engine at {url}");

        let response = self.client.get(&url).send().await?;
        check_status(response, status_error).await?;
        Ok(())
    }

    async fn bulk_insert(&self, records: &[DeviceRecord]) -> Result<BulkSummary, GatewayError> {
        if records.is_empty() {
            return Ok(BulkSummary::default());
        }

        let body = encode_bulk_body(records)?;
        tracing::debug!(
            "Sending bulk request: {} documents, {} bytes",
            records.len(),
            body.len()
        );

        let response = self
            .client
            .post(self.url("_bulk"))
            .header(CONTENT_TYPE, "application/x-ndjson")
            .body(body)
            .send()
            .await?;

        let response = check_status(response, status_error).await?;

        let text = response.text().await?;
        let parsed: BulkResponse = serde_json::from_str(&text)?;
        summarize_bulk_response(records.len(), parsed)
    }

    async fn create_index(
        &self,
        name: &str,
        mapping: &MappingDocument,
    ) -> Result<(), GatewayError> {
        tracing::info!("Creating index '{}'", name);

        let response = self.client.put(self.url(name)).json(mapping).send().await?;
        check_status(response, |status, body| {
            GatewayError::from_index_response(name, status, body)
        })
        .await?;
        Ok(())
    }

    async fn delete_index(&self, name: &str) -> Result<(), GatewayError> {
        tracing::info!("Deleting index '{}'", name);

        let response = self.client.delete(self.url(name)).send().await?;
        check_status(response, |status, body| {
            GatewayError::from_index_response(name, status, body)
        })
        .await?;
        Ok(())
    }
}
