//! Error types for the index gateway.

use thiserror::Error;

/// Errors returned by an [`crate::IndexGateway`].
#[derive(Error, Debug)]
pub enum GatewayError {
    /// The configured address is not an http(s) URL.
    #[error("Invalid index engine address '{0}': expected http:// or https://")]
    InvalidAddress(String),

    /// Connection, timeout or transport failure.
    #[error("Index engine request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The engine answered with a non-success status.
    #[error("Index engine returned status {status}: {body}")]
    Status { status: u16, body: String },

    /// Index creation for a name that is already taken. `body` is the
    /// engine's error response.
    #[error("Index '{index}' already exists: {body}")]
    IndexAlreadyExists { index: String, body: String },

    /// Deletion of an index that does not exist. `body` is the engine's
    /// error response.
    #[error("Index '{index}' not found: {body}")]
    IndexNotFound { index: String, body: String },

    /// Some documents of a bulk request were rejected.
    #[error("Bulk insert rejected {failed} of {total} documents: {reason}")]
    BulkItems {
        failed: usize,
        total: usize,
        reason: String,
    },

    /// Request or response body (de)serialization failure.
    #[error("JSON serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl GatewayError {
    /// Classify an error response for an index lifecycle request.
    pub(crate) fn from_index_response(index: &str, status: u16, body: String) -> Self {
        if body.contains("resource_already_exists_exception") {
            Self::IndexAlreadyExists {
                index: index.to_string(),
                body,
            }
        } else if status == 404 && body.contains("index_not_found_exception") {
            Self::IndexNotFound {
                index: index.to_string(),
                body,
            }
        } else {
            Self::Status { status, body }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_already_exists() {
        let body = r#"{"error":{"type":"resource_already_exists_exception","reason":"index [devices-1/abc] already exists"},"status":400}"#;
        let err = GatewayError::from_index_response("devices-1", 400, body.to_string());
        match &err {
            GatewayError::IndexAlreadyExists { index, body } => {
                assert_eq!(index, "devices-1");
                assert!(body.contains("resource_already_exists_exception"));
            }
            other => panic!("Unexpected error: {other:?}"),
        }
        assert!(err.to_string().contains("index [devices-1/abc] already exists"));
    }

    #[test]
    fn test_classify_not_found() {
        let body = r#"{"error":{"type":"index_not_found_exception","reason":"no such index [x]"},"status":404}"#;
        let err = GatewayError::from_index_response("x", 404, body.to_string());
        assert!(matches!(err, GatewayError::IndexNotFound { .. }));
        assert!(err.to_string().contains("no such index [x]"));
    }

    #[test]
    fn test_classify_other_status() {
        let err = GatewayError::from_index_response("x", 500, "boom".to_string());
        assert_eq!(err.to_string(), "Index engine returned status 500: boom");
    }
}
