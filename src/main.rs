//! Command-line interface for device-indexer
//!
//! # Usage Examples
//!
//! ```bash
//! # Create an index using the flat naming convention
//! device-indexer --addr http://localhost:9200 --index devices-1 --schema flat create
//!
//! # Generate and bulk insert 10k devices, 1000 per request, reproducibly
//! device-indexer --index devices-1 --schema flat index --num 10000 --batch-size 1000 --seed 42
//!
//! # Inspect what would be sent without an engine
//! RUST_LOG=debug device-indexer --dry-run --index devices-1 --schema flat_typed index --num 10
//!
//! # Delete the index
//! device-indexer --index devices-1 delete
//! ```

use clap::{CommandFactory, Parser};
use device_indexer::cli::{Cli, Commands};
use device_indexer::commands::{connect_gateway, run_create, run_delete, run_index};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if let Err(e) = run().await {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
    Ok(())
}

async fn run() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    // Fail on missing options before touching the network.
    cli.gateway.index_name()?;

    let gateway = connect_gateway(&cli.gateway).await?;

    match command {
        Commands::Index { args } => {
            let metrics = run_index(gateway.as_ref(), &cli.gateway, &args).await?;
            tracing::info!(
                "Indexed {} devices in {} batches ({:?})",
                metrics.rows_inserted,
                metrics.batch_count,
                metrics.total_duration
            );
        }
        Commands::Create => run_create(gateway.as_ref(), &cli.gateway).await?,
        Commands::Delete => run_delete(gateway.as_ref(), &cli.gateway).await?,
    }

    Ok(())
}
