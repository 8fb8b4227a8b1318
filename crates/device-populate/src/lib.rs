//! Device index population.
//!
//! This crate ties the generator to an index gateway: it creates and
//! deletes indices with the mapping matching a naming convention, and streams
//! synthesized device records into an index in fixed-size batches.
//!
//! # Example
//!
//! ```ignore
//! use device_core::Convention;
//! use device_populate::DevicePopulator;
//! use elasticsearch_client::DryRunGateway;
//!
//! let gateway = DryRunGateway::new();
//! let mut populator = DevicePopulator::new(&gateway, Some(42)).with_batch_size(100);
//! populator.create_index("devices-1", Convention::Flat).await?;
//! let metrics = populator.populate("devices-1", Convention::Flat, 1000).await?;
//! println!("Inserted {} devices in {:?}", metrics.rows_inserted, metrics.total_duration);
//! ```

pub mod args;
pub mod error;
pub mod populator;

pub use args::{GatewayArgs, IndexArgs};
pub use error::PopulateError;
pub use populator::{DevicePopulator, PopulateMetrics, DEFAULT_BATCH_SIZE};
