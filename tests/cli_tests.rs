use clap::Parser;
use device_indexer::cli::{Cli, Commands};

#[test]
fn test_parse_index_command() {
    let cli = Cli::try_parse_from([
        "device-indexer",
        "--addr",
        "http://es:9200",
        "--index",
        "devices-1",
        "--schema",
        "flat_typed",
        "index",
        "--num",
        "250",
        "--seed",
        "7",
    ])
    .unwrap();

    assert_eq!(cli.gateway.addr, "http://es:9200");
    assert_eq!(cli.gateway.index.as_deref(), Some("devices-1"));
    assert_eq!(cli.gateway.schema.as_deref(), Some("flat_typed"));
    assert!(!cli.gateway.dry_run);

    match cli.command {
        Some(Commands::Index { args }) => {
            assert_eq!(args.num, 250);
            assert_eq!(args.seed, Some(7));
            assert_eq!(args.batch_size, 500);
        }
        other => panic!("Expected index command, got {other:?}"),
    }
}

#[test]
fn test_index_defaults() {
    let cli = Cli::try_parse_from(["device-indexer", "index"]).unwrap();
    match cli.command {
        Some(Commands::Index { args }) => {
            assert_eq!(args.num, 100);
            assert_eq!(args.seed, None);
        }
        other => panic!("Expected index command, got {other:?}"),
    }
}

#[test]
fn test_global_options_after_subcommand() {
    let cli = Cli::try_parse_from([
        "device-indexer",
        "create",
        "--index",
        "devices-2",
        "--schema",
        "flat",
        "--dry-run",
    ])
    .unwrap();

    assert!(matches!(cli.command, Some(Commands::Create)));
    assert_eq!(cli.gateway.index.as_deref(), Some("devices-2"));
    assert!(cli.gateway.dry_run);
}

#[test]
fn test_negative_num_parses() {
    // Rejected later with an invalid-argument error, not by the parser.
    let cli = Cli::try_parse_from(["device-indexer", "index", "--num", "-3"]).unwrap();
    match cli.command {
        Some(Commands::Index { args }) => assert_eq!(args.num, -3),
        other => panic!("Expected index command, got {other:?}"),
    }
}

#[test]
fn test_no_subcommand() {
    let cli = Cli::try_parse_from(["device-indexer"]).unwrap();
    assert!(cli.command.is_none());
}

#[test]
fn test_unknown_subcommand_rejected() {
    assert!(Cli::try_parse_from(["device-indexer", "search"]).is_err());
}
