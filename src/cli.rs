//! Command-line definitions.

use clap::{Parser, Subcommand};
use device_populate::{GatewayArgs, IndexArgs};

#[derive(Parser, Debug)]
#[command(name = "device-indexer")]
#[command(about = "Generate random IoT devices and load them into an Elasticsearch index")]
#[command(version)]
pub struct Cli {
    #[command(flatten)]
    pub gateway: GatewayArgs,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Index <num> random devices
    Index {
        #[command(flatten)]
        args: IndexArgs,
    },

    /// Create the index with the selected schema's mapping
    Create,

    /// Delete the index
    Delete,
}
