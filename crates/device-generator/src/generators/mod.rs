//! Value generators for device attributes.
//!
//! Each attribute in the device table carries a [`ValueRule`] describing how
//! its value is produced. The rule also fixes the attribute's
//! [`ValueKind`], which the attribute namer uses for typed key suffixes.

pub mod mac;
pub mod status;
pub mod uuid;

use device_core::{FieldValue, ValueKind};
use rand::Rng;

/// How an attribute value is produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueRule {
    /// The MAC address shared by every MAC-bearing field of the record
    SharedMac,
    /// Fixed string
    Static(&'static str),
    /// Fixed list of strings
    StaticList(&'static [&'static str]),
    /// Random integer in `min..=max`
    IntRange { min: i64, max: i64 },
    /// `prefix` followed by a random integer in `min..=max`
    Tagged {
        prefix: &'static str,
        min: i64,
        max: i64,
    },
}

impl ValueRule {
    /// The kind of value this rule produces.
    pub fn kind(&self) -> ValueKind {
        match self {
            Self::SharedMac | Self::Static(_) | Self::Tagged { .. } => ValueKind::Text,
            Self::StaticList(_) => ValueKind::TextList,
            Self::IntRange { .. } => ValueKind::Integer,
        }
    }
}

/// Generate a value for `rule`, using `mac` for MAC-derived attributes.
pub fn generate_value<R: Rng>(rule: &ValueRule, rng: &mut R, mac: &str) -> FieldValue {
    match rule {
        ValueRule::SharedMac => FieldValue::Text(mac.to_string()),

        ValueRule::Static(value) => FieldValue::Text((*value).to_string()),

        ValueRule::StaticList(items) => {
            FieldValue::TextList(items.iter().map(|s| (*s).to_string()).collect())
        }

        ValueRule::IntRange { min, max } => FieldValue::Integer(rng.gen_range(*min..=*max)),

        ValueRule::Tagged { prefix, min, max } => {
            FieldValue::Text(format!("{prefix}{}", rng.gen_range(*min..=*max)))
        }
    }
}
