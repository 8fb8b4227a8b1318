//! Command implementations shared by the binary and integration tests.

use anyhow::Context;
use device_populate::{DevicePopulator, GatewayArgs, IndexArgs, PopulateMetrics};
use elasticsearch_client::{ClientConfig, DryRunGateway, ElasticsearchClient, IndexGateway};

/// Build the gateway selected by the arguments.
///
/// The HTTP client pings the engine before returning. The dry-run gateway
/// never performs network I/O and, since it cannot see the engine's state,
/// accepts every index lifecycle request.
pub async fn connect_gateway(args: &GatewayArgs) -> anyhow::Result<Box<dyn IndexGateway>> {
    if args.dry_run {
        tracing::info!("Dry run: requests will not be sent to {}", args.addr);
        return Ok(Box::new(DryRunGateway::new()));
    }

    let client = ElasticsearchClient::connect(&args.addr, ClientConfig::default())
        .await
        .with_context(|| format!("Failed to connect to index engine at {}", args.addr))?;
    Ok(Box::new(client))
}

/// Generate and insert devices into the selected index.
pub async fn run_index(
    gateway: &dyn IndexGateway,
    args: &GatewayArgs,
    index_args: &IndexArgs,
) -> anyhow::Result<PopulateMetrics> {
    let index_name = args.index_name()?;
    let convention = args.convention()?;

    tracing::info!(
        "Indexing {} devices into '{}' (schema={}, seed={:?})",
        index_args.num,
        index_name,
        convention,
        index_args.seed
    );

    let mut populator =
        DevicePopulator::new(gateway, index_args.seed).with_batch_size(index_args.batch_size);

    let metrics = populator
        .populate(index_name, convention, index_args.num)
        .await
        .with_context(|| format!("Failed to index devices into '{index_name}'"))?;

    Ok(metrics)
}

/// Create the selected index with its schema's mapping.
pub async fn run_create(gateway: &dyn IndexGateway, args: &GatewayArgs) -> anyhow::Result<()> {
    let index_name = args.index_name()?;
    let convention = args.convention()?;

    DevicePopulator::new(gateway, None)
        .create_index(index_name, convention)
        .await
        .with_context(|| format!("Failed to create index '{index_name}'"))?;

    Ok(())
}

/// Delete the selected index.
pub async fn run_delete(gateway: &dyn IndexGateway, args: &GatewayArgs) -> anyhow::Result<()> {
    let index_name = args.index_name()?;

    DevicePopulator::new(gateway, None)
        .delete_index(index_name)
        .await
        .with_context(|| format!("Failed to delete index '{index_name}'"))?;

    Ok(())
}
