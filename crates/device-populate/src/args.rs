//! CLI argument definitions shared by the device-indexer commands.

use clap::Args;
use device_core::{Convention, CoreError};

/// Default index engine address.
pub const DEFAULT_ADDR: &str = "http://localhost:9200";

/// Target engine, index and schema; accepted before or after the subcommand.
#[derive(Args, Clone, Debug)]
pub struct GatewayArgs {
    /// Index engine address
    #[arg(long, global = true, default_value = DEFAULT_ADDR, env = "ES_ADDR")]
    pub addr: String,

    /// Target index name
    #[arg(long, global = true, env = "ES_INDEX")]
    pub index: Option<String>,

    /// Index schema (flat|flat_typed)
    #[arg(long, global = true, env = "ES_SCHEMA")]
    pub schema: Option<String>,

    /// Validate and log requests without contacting the index engine
    #[arg(long, global = true)]
    pub dry_run: bool,
}

impl GatewayArgs {
    /// The target index, required by every command.
    pub fn index_name(&self) -> Result<&str, CoreError> {
        match self.index.as_deref() {
            Some(name) if !name.trim().is_empty() => Ok(name),
            _ => Err(CoreError::InvalidArgument(
                "--index is required".to_string(),
            )),
        }
    }

    /// The naming convention selected by `--schema`.
    pub fn convention(&self) -> Result<Convention, CoreError> {
        self.schema
            .as_deref()
            .ok_or_else(|| CoreError::InvalidArgument("--schema is required".to_string()))?
            .parse()
    }
}

/// Arguments of the `index` command.
#[derive(Args, Clone, Debug)]
pub struct IndexArgs {
    /// Number of devices to generate and insert
    #[arg(long, default_value = "100", allow_negative_numbers = true)]
    pub num: i64,

    /// Number of devices per bulk request
    #[arg(long, default_value = "500")]
    pub batch_size: usize,

    /// Random seed for deterministic generation (same seed = same devices)
    #[arg(long)]
    pub seed: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(index: Option<&str>, schema: Option<&str>) -> GatewayArgs {
        GatewayArgs {
            addr: DEFAULT_ADDR.to_string(),
            index: index.map(str::to_string),
            schema: schema.map(str::to_string),
            dry_run: false,
        }
    }

    #[test]
    fn test_index_name_required() {
        assert_eq!(args(Some("devices-1"), None).index_name().unwrap(), "devices-1");
        assert!(matches!(
            args(None, None).index_name(),
            Err(CoreError::InvalidArgument(_))
        ));
        assert!(matches!(
            args(Some("  "), None).index_name(),
            Err(CoreError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_convention_parsing() {
        assert_eq!(
            args(None, Some("flat_typed")).convention().unwrap(),
            Convention::FlatTyped
        );
        assert!(matches!(
            args(None, None).convention(),
            Err(CoreError::InvalidArgument(_))
        ));
        assert!(matches!(
            args(None, Some("typed")).convention(),
            Err(CoreError::UnknownSchema(_))
        ));
    }
}
