//! Device record generator for device-indexer.
//!
//! This crate provides the [`DeviceGenerator`], which synthesizes fake IoT
//! device documents under a chosen [`device_core::Convention`]. The generator
//! owns a seeded RNG so the same seed always yields the same ids, MAC
//! addresses, serial numbers and statuses.
//!
//! # Architecture
//!
//! ```text
//! DEVICE_ATTRIBUTES (scope, name, rule)
//!        │
//!        ▼
//! ┌─────────────────┐
//! │ DeviceGenerator │
//! │                 │
//! │  - rng (StdRng) │──── field_key(scope, name, convention, rule.kind())
//! │  - generated    │
//! └────────┬────────┘
//!          │
//!          ▼
//!    DeviceRecord { index, fields }
//! ```
//!
//! # Example
//!
//! ```rust
//! use device_core::Convention;
//! use device_generator::DeviceGenerator;
//!
//! let mut generator = DeviceGenerator::new(42);
//! let records: Vec<_> = generator
//!     .records(3, "devices-1", Convention::Flat)
//!     .unwrap()
//!     .collect();
//! assert_eq!(records.len(), 3);
//! ```

pub mod attributes;
pub mod generator;
pub mod generators;
pub mod synth;

pub use attributes::{AttributeSpec, DEVICE_ATTRIBUTES};
pub use generator::{DeviceGenerator, DeviceRecordIterator, GeneratorError};
pub use generators::ValueRule;
pub use synth::synthesize;
