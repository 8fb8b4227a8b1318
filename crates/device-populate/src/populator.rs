//! Device populator: generates device records and bulk inserts them.

use crate::error::PopulateError;
use device_core::{mapping_for, Convention, CoreError, DeviceRecord};
use device_generator::DeviceGenerator;
use elasticsearch_client::IndexGateway;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Default number of records per bulk request.
pub const DEFAULT_BATCH_SIZE: usize = 500;

/// Metrics from a populate operation.
#[derive(Debug, Clone, Default)]
pub struct PopulateMetrics {
    /// Number of records inserted.
    pub rows_inserted: u64,
    /// Total time taken.
    pub total_duration: Duration,
    /// Time spent generating data.
    pub generation_duration: Duration,
    /// Time spent inserting data.
    pub insert_duration: Duration,
    /// Number of bulk requests executed.
    pub batch_count: u64,
}

impl PopulateMetrics {
    /// Calculate rows per second.
    pub fn rows_per_second(&self) -> f64 {
        if self.total_duration.as_secs_f64() > 0.0 {
            self.rows_inserted as f64 / self.total_duration.as_secs_f64()
        } else {
            0.0
        }
    }
}

/// Populator that generates device records and hands them to a gateway.
pub struct DevicePopulator<'a> {
    gateway: &'a dyn IndexGateway,
    generator: DeviceGenerator,
    batch_size: usize,
}

impl<'a> DevicePopulator<'a> {
    /// Create a new populator.
    ///
    /// # Arguments
    ///
    /// * `gateway` - Index engine to write to
    /// * `seed` - Random seed for deterministic generation; `None` uses entropy
    pub fn new(gateway: &'a dyn IndexGateway, seed: Option<u64>) -> Self {
        Self {
            gateway,
            generator: DeviceGenerator::with_optional_seed(seed),
            batch_size: DEFAULT_BATCH_SIZE,
        }
    }

    /// Set the number of records per bulk request.
    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size;
        self
    }

    /// Number of records generated so far.
    pub fn generated(&self) -> u64 {
        self.generator.generated()
    }

    /// Create `index_name` with the mapping matching `convention`.
    pub async fn create_index(
        &self,
        index_name: &str,
        convention: Convention,
    ) -> Result<(), PopulateError> {
        info!("Creating index '{}' with schema {}", index_name, convention);
        self.gateway
            .create_index(index_name, &mapping_for(convention))
            .await?;
        Ok(())
    }

    /// Delete `index_name`.
    pub async fn delete_index(&self, index_name: &str) -> Result<(), PopulateError> {
        info!("Deleting index: {}", index_name);
        self.gateway.delete_index(index_name).await?;
        Ok(())
    }

    /// Generate `count` device records and insert them into `index_name`.
    ///
    /// Records are generated lazily, one batch at a time. The first gateway
    /// error aborts the run.
    pub async fn populate(
        &mut self,
        index_name: &str,
        convention: Convention,
        count: i64,
    ) -> Result<PopulateMetrics, PopulateError> {
        if self.batch_size == 0 {
            return Err(CoreError::InvalidArgument("batch size must be positive".to_string()).into());
        }

        let start_time = Instant::now();
        let mut metrics = PopulateMetrics::default();

        let mut records = self.generator.records(count, index_name, convention)?;
        let total = records.len();

        info!(
            "Populating index '{}' with {} devices (schema: {}, batch size: {})",
            index_name, total, convention, self.batch_size
        );

        let mut generation_time = Duration::ZERO;
        let mut insert_time = Duration::ZERO;

        loop {
            let gen_start = Instant::now();
            let batch: Vec<DeviceRecord> = records.by_ref().take(self.batch_size).collect();
            generation_time += gen_start.elapsed();

            if batch.is_empty() {
                break;
            }

            let insert_start = Instant::now();
            let summary = self.gateway.bulk_insert(&batch).await?;
            insert_time += insert_start.elapsed();

            metrics.rows_inserted += summary.indexed as u64;
            metrics.batch_count += 1;

            debug!(
                "Batch {} complete: {} devices inserted, {} remaining",
                metrics.batch_count,
                summary.indexed,
                records.len()
            );
        }

        metrics.total_duration = start_time.elapsed();
        metrics.generation_duration = generation_time;
        metrics.insert_duration = insert_time;

        info!(
            "Population complete: {} devices in {:?} ({:.2} devices/sec)",
            metrics.rows_inserted,
            metrics.total_duration,
            metrics.rows_per_second()
        );

        Ok(metrics)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use device_generator::GeneratorError;
    use elasticsearch_client::{DryRunGateway, GatewayError};

    #[test]
    fn test_metrics() {
        let metrics = PopulateMetrics {
            rows_inserted: 1000,
            total_duration: Duration::from_secs(10),
            generation_duration: Duration::from_secs(2),
            insert_duration: Duration::from_secs(8),
            batch_count: 10,
        };

        assert_eq!(metrics.rows_per_second(), 100.0);
        assert_eq!(PopulateMetrics::default().rows_per_second(), 0.0);
    }

    #[tokio::test]
    async fn test_populate_batches() {
        let gateway = DryRunGateway::new();
        let mut populator = DevicePopulator::new(&gateway, Some(42)).with_batch_size(10);

        let metrics = populator
            .populate("devices-1", Convention::Flat, 25)
            .await
            .unwrap();

        assert_eq!(metrics.rows_inserted, 25);
        assert_eq!(metrics.batch_count, 3);
        assert_eq!(populator.generated(), 25);
        assert_eq!(gateway.document_count("devices-1").await, 25);
        assert_eq!(gateway.bulk_requests().await, 3);
    }

    #[tokio::test]
    async fn test_populate_zero() {
        let gateway = DryRunGateway::new();
        let mut populator = DevicePopulator::new(&gateway, Some(42));

        let metrics = populator
            .populate("devices-1", Convention::FlatTyped, 0)
            .await
            .unwrap();

        assert_eq!(metrics.rows_inserted, 0);
        assert_eq!(metrics.batch_count, 0);
        assert_eq!(gateway.bulk_requests().await, 0);
    }

    #[tokio::test]
    async fn test_populate_negative_count() {
        let gateway = DryRunGateway::new();
        let mut populator = DevicePopulator::new(&gateway, Some(42));

        let err = populator
            .populate("devices-1", Convention::Flat, -5)
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            PopulateError::Generator(GeneratorError::Core(CoreError::InvalidArgument(_)))
        ));
    }

    #[tokio::test]
    async fn test_zero_batch_size_rejected() {
        let gateway = DryRunGateway::new();
        let mut populator = DevicePopulator::new(&gateway, Some(42)).with_batch_size(0);

        let err = populator
            .populate("devices-1", Convention::Flat, 5)
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            PopulateError::Core(CoreError::InvalidArgument(_))
        ));
    }

    #[tokio::test]
    async fn test_create_and_delete_index() {
        let gateway = DryRunGateway::strict();
        let populator = DevicePopulator::new(&gateway, None);

        populator
            .create_index("devices-1", Convention::FlatTyped)
            .await
            .unwrap();
        assert_eq!(
            gateway.mapping("devices-1").await,
            Some(mapping_for(Convention::FlatTyped))
        );

        let err = populator
            .create_index("devices-1", Convention::Flat)
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            PopulateError::Gateway(GatewayError::IndexAlreadyExists { .. })
        ));

        populator.delete_index("devices-1").await.unwrap();
        let err = populator.delete_index("devices-1").await.unwrap_err();
        assert!(matches!(
            err,
            PopulateError::Gateway(GatewayError::IndexNotFound { .. })
        ));
    }
}
