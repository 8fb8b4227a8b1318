//! Mapping catalog: index mapping documents matching each naming convention.
//!
//! Each [`Convention`] has one fixed [`MappingDocument`]. Metadata fields are
//! typed explicitly; scoped attributes are typed through dynamic templates
//! whose patterns follow the keys produced by [`crate::field_key`].
//!
//! ```text
//! flat        inventory_* + detected string  -> keyword
//!             inventory_* + detected long    -> double
//!             inventory_* + detected double  -> double
//! flat_typed  inventory_*_str                -> keyword
//!             inventory_*_num                -> double
//! ```

use crate::convention::{Convention, Scope};
use crate::naming::{NUMERIC_SUFFIX, STRING_SUFFIX};
use crate::record::fields;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use std::collections::BTreeMap;

/// Storage type assigned to a field by the index engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    Keyword,
    Double,
    Date,
}

/// Value type the engine detects in a JSON document, used by
/// `match_mapping_type`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DetectedType {
    String,
    Long,
    Double,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FieldMapping {
    #[serde(rename = "type")]
    pub field_type: FieldType,
}

impl FieldMapping {
    pub fn new(field_type: FieldType) -> Self {
        Self { field_type }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IndexSettings {
    pub number_of_shards: u32,
    pub number_of_replicas: u32,
}

impl Default for IndexSettings {
    fn default() -> Self {
        Self {
            number_of_shards: 1,
            number_of_replicas: 1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SourceConfig {
    pub enabled: bool,
}

/// A dynamic template rule: fields whose key matches `pattern` (and, when
/// set, whose detected type equals `match_mapping_type`) get `mapping`.
///
/// Serialized in the engine's single-key form:
/// `{"<name>": {"match_mapping_type": ..., "match": ..., "mapping": ...}}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DynamicTemplate {
    pub name: String,
    pub match_mapping_type: Option<DetectedType>,
    pub pattern: String,
    pub mapping: FieldMapping,
}

impl DynamicTemplate {
    /// Whether this rule applies to a field with the given key and detected type.
    pub fn matches(&self, key: &str, detected: DetectedType) -> bool {
        if let Some(expected) = self.match_mapping_type {
            if expected != detected {
                return false;
            }
        }
        wildcard_match(&self.pattern, key)
    }
}

#[derive(Serialize)]
struct TemplateBody<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    match_mapping_type: Option<DetectedType>,
    #[serde(rename = "match")]
    pattern: &'a str,
    mapping: &'a FieldMapping,
}

impl Serialize for DynamicTemplate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(
            &self.name,
            &TemplateBody {
                match_mapping_type: self.match_mapping_type,
                pattern: &self.pattern,
                mapping: &self.mapping,
            },
        )?;
        map.end()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Mappings {
    pub dynamic: bool,
    #[serde(rename = "_source")]
    pub source: SourceConfig,
    pub properties: BTreeMap<String, FieldMapping>,
    pub dynamic_templates: Vec<DynamicTemplate>,
}

/// Index creation body: settings plus mappings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MappingDocument {
    pub settings: IndexSettings,
    pub mappings: Mappings,
}

impl MappingDocument {
    /// Resolve the storage type the engine would assign to `key`.
    ///
    /// Explicit properties win; otherwise the first matching dynamic template
    /// applies. `None` means the engine would fall back to its defaults.
    pub fn resolve(&self, key: &str, detected: DetectedType) -> Option<FieldType> {
        if let Some(mapping) = self.mappings.properties.get(key) {
            return Some(mapping.field_type);
        }
        self.mappings
            .dynamic_templates
            .iter()
            .find(|t| t.matches(key, detected))
            .map(|t| t.mapping.field_type)
    }

    /// Serialize to the JSON body expected by the create-index API.
    pub fn to_json(&self) -> Result<serde_json::Value, serde_json::Error> {
        serde_json::to_value(self)
    }
}

/// Look up the mapping document for a convention.
pub fn mapping_for(convention: Convention) -> MappingDocument {
    let dynamic_templates = match convention {
        Convention::Flat => flat_templates(),
        Convention::FlatTyped => flat_typed_templates(),
    };

    MappingDocument {
        settings: IndexSettings::default(),
        mappings: Mappings {
            dynamic: true,
            source: SourceConfig { enabled: true },
            properties: metadata_properties(),
            dynamic_templates,
        },
    }
}

fn metadata_properties() -> BTreeMap<String, FieldMapping> {
    let keyword = FieldMapping::new(FieldType::Keyword);
    let date = FieldMapping::new(FieldType::Date);

    [
        (fields::ID, keyword),
        (fields::TENANT_ID, keyword),
        (fields::NAME, keyword),
        (fields::GROUP_NAME, keyword),
        (fields::STATUS, keyword),
        (fields::CREATED_AT, date),
        (fields::UPDATED_AT, date),
    ]
    .into_iter()
    .map(|(name, mapping)| (name.to_string(), mapping))
    .collect()
}

fn flat_templates() -> Vec<DynamicTemplate> {
    let rules = [
        ("strings", DetectedType::String, FieldType::Keyword),
        ("nums_long", DetectedType::Long, FieldType::Double),
        ("nums_float", DetectedType::Double, FieldType::Double),
    ];

    rules
        .iter()
        .flat_map(|(label, detected, field_type)| {
            Scope::ALL.into_iter().map(move |scope| DynamicTemplate {
                name: format!("{scope}_{label}"),
                match_mapping_type: Some(*detected),
                pattern: format!("{scope}_*"),
                mapping: FieldMapping::new(*field_type),
            })
        })
        .collect()
}

fn flat_typed_templates() -> Vec<DynamicTemplate> {
    let rules = [
        ("strings", STRING_SUFFIX, FieldType::Keyword),
        ("nums_long", NUMERIC_SUFFIX, FieldType::Double),
    ];

    rules
        .iter()
        .flat_map(|(label, suffix, field_type)| {
            Scope::ALL.into_iter().map(move |scope| DynamicTemplate {
                name: format!("{scope}_{label}"),
                match_mapping_type: None,
                pattern: format!("{scope}_*{suffix}"),
                mapping: FieldMapping::new(*field_type),
            })
        })
        .collect()
}

/// Simple `*` wildcard matching, as used by the engine's `match` option.
fn wildcard_match(pattern: &str, text: &str) -> bool {
    let mut parts = pattern.split('*');
    let first = parts.next().unwrap_or_default();
    let Some(mut rest) = text.strip_prefix(first) else {
        return false;
    };

    let remaining: Vec<&str> = parts.collect();
    let Some((last, middle)) = remaining.split_last() else {
        // No wildcard at all: exact match.
        return rest.is_empty();
    };

    for part in middle {
        match rest.find(part) {
            Some(pos) => rest = &rest[pos + part.len()..],
            None => return false,
        }
    }
    rest.ends_with(last)
}
