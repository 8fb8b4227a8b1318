//! Index gateway for device-indexer.
//!
//! This crate ships device records and mapping documents to an
//! Elasticsearch-compatible engine:
//!
//! - [`IndexGateway`] - the operations the populator and CLI depend on
//! - [`ElasticsearchClient`] - HTTP implementation (`_bulk`, `PUT/DELETE /{index}`)
//! - [`DryRunGateway`] - in-process implementation that never touches the network
//!
//! # Example
//!
//! ```ignore
//! use device_core::{mapping_for, Convention};
//! use elasticsearch_client::{ElasticsearchClient, IndexGateway};
//!
//! let client = ElasticsearchClient::connect("http://localhost:9200", Default::default()).await?;
//! client.create_index("devices-1", &mapping_for(Convention::Flat)).await?;
//! ```

pub mod bulk;
pub mod client;
pub mod dry_run;
pub mod error;
pub mod gateway;

pub use client::{ClientConfig, ElasticsearchClient};
pub use dry_run::DryRunGateway;
pub use error::GatewayError;
pub use gateway::{BulkSummary, IndexGateway};
