//! Core types for the device-indexer framework.
//!
//! This crate provides the foundational types shared by the generator, the
//! index gateway and the CLI:
//!
//! - [`Convention`] - Field naming convention (`flat` or `flat_typed`)
//! - [`Scope`] / [`ValueKind`] - Attribute scope and value classification
//! - [`field_key`] - The attribute namer
//! - [`DeviceRecord`] / [`FieldValue`] - Synthesized device documents
//! - [`MappingDocument`] - Index mappings matching each convention
//!
//! # Architecture
//!
//! ```text
//! device-core (this crate)
//!    │
//!    ├─── device-generator      (builds DeviceRecords using field_key)
//!    ├─── elasticsearch-client  (ships DeviceRecords and MappingDocuments)
//!    └─── device-populate       (drives generator -> gateway)
//! ```
//!
//! # Example
//!
//! ```rust
//! use device_core::{field_key, Convention, Scope, ValueKind};
//!
//! let key = field_key(Scope::Identity, "serial_no", Convention::FlatTyped, ValueKind::Integer);
//! assert_eq!(key, "identity_serial_no_num");
//! ```

pub mod convention;
pub mod error;
pub mod mapping;
pub mod naming;
pub mod record;

pub use convention::{Convention, Scope, ValueKind};
pub use error::CoreError;
pub use mapping::{mapping_for, DynamicTemplate, FieldMapping, IndexSettings, MappingDocument};
pub use naming::field_key;
pub use record::{fields, DeviceRecord, DeviceRecordBuilder, FieldValue};
