//! device-indexer library
//!
//! Synthesizes fake IoT device records and bulk loads them into an
//! Elasticsearch-compatible index under one of two field naming conventions:
//!
//! - `flat`: `inventory_hostname`, `identity_serial_no`, ... typed by the
//!   engine from the detected value type
//! - `flat_typed`: `inventory_hostname_str`, `identity_serial_no_num`, ...
//!   typed by key suffix
//!
//! # CLI Usage
//!
//! ```bash
//! # Create an index with the flat_typed mapping
//! device-indexer --index devices-1 --schema flat_typed create
//!
//! # Insert 1000 random devices
//! device-indexer --index devices-1 --schema flat_typed index --num 1000
//!
//! # Drop the index
//! device-indexer --index devices-1 delete
//! ```

pub mod cli;
pub mod commands;
