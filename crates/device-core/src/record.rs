//! Device record representation.
//!
//! A [`DeviceRecord`] is the document body sent to the index engine together
//! with the name of the index it is routed to. The routing name is not part
//! of the serialized body.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::BTreeMap;

/// Top-level metadata field names shared by both conventions.
pub mod fields {
    pub const ID: &str = "id";
    pub const NAME: &str = "name";
    pub const TENANT_ID: &str = "tenantID";
    pub const CREATED_AT: &str = "created_at";
    pub const UPDATED_AT: &str = "updated_at";
    pub const STATUS: &str = "status";
    pub const GROUP_NAME: &str = "groupName";

    /// Every metadata key, in declaration order.
    pub const METADATA: [&str; 7] = [
        ID, NAME, TENANT_ID, CREATED_AT, UPDATED_AT, STATUS, GROUP_NAME,
    ];
}

/// A single document field value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// Whole number
    Integer(i64),

    /// UTC timestamp, RFC 3339 on the wire
    Timestamp(DateTime<Utc>),

    /// String value
    Text(String),

    /// List of strings
    TextList(Vec<String>),
}

impl FieldValue {
    /// Try to get this value as a string reference.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Try to get this value as an i64.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// Try to get this value as a list of strings.
    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            Self::TextList(items) => Some(items),
            _ => None,
        }
    }

    /// Try to get this value as a timestamp.
    pub fn as_timestamp(&self) -> Option<&DateTime<Utc>> {
        match self {
            Self::Timestamp(ts) => Some(ts),
            _ => None,
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<Vec<String>> for FieldValue {
    fn from(value: Vec<String>) -> Self {
        Self::TextList(value)
    }
}

impl From<DateTime<Utc>> for FieldValue {
    fn from(value: DateTime<Utc>) -> Self {
        Self::Timestamp(value)
    }
}

/// A synthesized device document bound for a specific index.
///
/// Records are built once through [`DeviceRecordBuilder`] and are read-only
/// afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeviceRecord {
    #[serde(skip)]
    index: String,
    #[serde(flatten)]
    fields: BTreeMap<String, FieldValue>,
}

impl DeviceRecord {
    /// Start building a record routed to `index`.
    pub fn builder(index: impl Into<String>) -> DeviceRecordBuilder {
        DeviceRecordBuilder::new(index)
    }

    /// Name of the index this record is routed to.
    pub fn index(&self) -> &str {
        &self.index
    }

    /// Get a field value by key.
    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        self.fields.get(key)
    }

    /// Whether the document contains `key`.
    pub fn contains_key(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    /// Iterate over the document keys in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// The document body without routing metadata.
    pub fn document(&self) -> &BTreeMap<String, FieldValue> {
        &self.fields
    }

    /// The record id, if present.
    pub fn id(&self) -> Option<&str> {
        self.get(fields::ID).and_then(FieldValue::as_str)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Builder for [`DeviceRecord`].
#[derive(Debug, Clone)]
pub struct DeviceRecordBuilder {
    index: String,
    fields: BTreeMap<String, FieldValue>,
}

impl DeviceRecordBuilder {
    pub fn new(index: impl Into<String>) -> Self {
        Self {
            index: index.into(),
            fields: BTreeMap::new(),
        }
    }

    /// Set a field, replacing any previous value for the same key.
    pub fn field(mut self, key: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }

    /// Set a field in place.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<FieldValue>) {
        self.fields.insert(key.into(), value.into());
    }

    pub fn build(self) -> DeviceRecord {
        DeviceRecord {
            index: self.index,
            fields: self.fields,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample() -> DeviceRecord {
        DeviceRecord::builder("devices-1")
            .field(fields::ID, "abc")
            .field(fields::GROUP_NAME, 7i64)
            .field(
                "inventory_network_interfaces",
                vec!["bcm0".to_string(), "usb0".to_string()],
            )
            .field(
                fields::CREATED_AT,
                Utc.with_ymd_and_hms(2021, 3, 12, 13, 21, 16).unwrap(),
            )
            .build()
    }

    #[test]
    fn test_routing_is_not_serialized() {
        let record = sample();
        assert_eq!(record.index(), "devices-1");

        let json = serde_json::to_value(&record).unwrap();
        let obj = json.as_object().unwrap();
        assert!(!obj.contains_key("_index"));
        assert!(!obj.contains_key("index"));
        assert_eq!(obj.len(), 4);
    }

    #[test]
    fn test_serialized_value_shapes() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["id"], "abc");
        assert_eq!(json["groupName"], 7);
        assert_eq!(
            json["inventory_network_interfaces"],
            serde_json::json!(["bcm0", "usb0"])
        );
        assert_eq!(json["created_at"], "2021-03-12T13:21:16Z");
    }

    #[test]
    fn test_accessors() {
        let record = sample();
        assert_eq!(record.id(), Some("abc"));
        assert_eq!(record.get(fields::GROUP_NAME).and_then(|v| v.as_i64()), Some(7));
        assert!(record.get(fields::CREATED_AT).unwrap().as_timestamp().is_some());
        assert_eq!(
            record
                .get("inventory_network_interfaces")
                .and_then(|v| v.as_list())
                .map(|l| l.len()),
            Some(2)
        );
        assert!(!record.contains_key("missing"));
        assert_eq!(record.len(), 4);
    }

    #[test]
    fn test_builder_replaces_duplicate_keys() {
        let mut builder = DeviceRecordBuilder::new("i");
        builder.insert("k", "a");
        builder.insert("k", "b");
        let record = builder.build();
        assert_eq!(record.len(), 1);
        assert_eq!(record.get("k").and_then(|v| v.as_str()), Some("b"));
    }
}
