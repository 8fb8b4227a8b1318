//! NDJSON encoding of bulk requests and parsing of bulk responses.
//!
//! A bulk body holds two lines per record: an action line naming the target
//! index (and the document id when the record has one), then the document.
//!
//! ```text
//! {"index":{"_index":"devices-1","_id":"4f0c..."}}
//! {"id":"4f0c...","name":"device-4f0c...",...}
//! ```

use crate::error::GatewayError;
use crate::gateway::BulkSummary;
use device_core::DeviceRecord;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Serialize)]
struct BulkAction<'a> {
    index: BulkActionIndex<'a>,
}

#[derive(Serialize)]
struct BulkActionIndex<'a> {
    #[serde(rename = "_index")]
    index: &'a str,
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    id: Option<&'a str>,
}

/// Encode records as a newline-delimited bulk request body.
pub fn encode_bulk_body(records: &[DeviceRecord]) -> Result<String, serde_json::Error> {
    let mut body = String::new();
    for record in records {
        let action = BulkAction {
            index: BulkActionIndex {
                index: record.index(),
                id: record.id(),
            },
        };
        body.push_str(&serde_json::to_string(&action)?);
        body.push('\n');
        body.push_str(&serde_json::to_string(record)?);
        body.push('\n');
    }
    Ok(body)
}

/// Response of the `_bulk` endpoint.
#[derive(Debug, Deserialize)]
pub struct BulkResponse {
    #[serde(default)]
    pub took: Option<u64>,
    pub errors: bool,
    #[serde(default)]
    pub items: Vec<HashMap<String, BulkItem>>,
}

/// Per-document result inside a bulk response.
#[derive(Debug, Deserialize)]
pub struct BulkItem {
    pub status: u16,
    #[serde(default)]
    pub error: Option<serde_json::Value>,
}

impl BulkItem {
    fn is_success(&self) -> bool {
        self.error.is_none() && (200..300).contains(&self.status)
    }

    fn reason(&self) -> String {
        match &self.error {
            Some(error) => {
                let kind = error.get("type").and_then(|v| v.as_str()).unwrap_or("error");
                let reason = error.get("reason").and_then(|v| v.as_str()).unwrap_or_default();
                format!("{kind}: {reason}")
            }
            None => format!("status {}", self.status),
        }
    }
}

/// Turn a bulk response into a summary, failing when any document was rejected.
pub fn summarize_bulk_response(
    submitted: usize,
    response: BulkResponse,
) -> Result<BulkSummary, GatewayError> {
    let items: Vec<&BulkItem> = response.items.iter().flat_map(|m| m.values()).collect();
    let failed: Vec<&&BulkItem> = items.iter().filter(|i| !i.is_success()).collect();

    if response.errors || !failed.is_empty() {
        let reason = failed
            .first()
            .map(|item| item.reason())
            .unwrap_or_else(|| "engine reported errors".to_string());
        return Err(GatewayError::BulkItems {
            failed: failed.len(),
            total: submitted,
            reason,
        });
    }

    Ok(BulkSummary {
        submitted,
        indexed: items.len(),
        took_ms: response.took,
    })
}
