//! Record synthesizer: builds one device record from an explicit RNG.

use crate::attributes::DEVICE_ATTRIBUTES;
use crate::generators::mac::generate_mac;
use crate::generators::status::generate_status;
use crate::generators::uuid::generate_device_id;
use crate::generators::generate_value;
use chrono::Utc;
use device_core::{field_key, fields, Convention, DeviceRecord, DeviceRecordBuilder};
use rand::Rng;

/// Tenant every synthesized device belongs to.
pub const TENANT_ID: &str = "tenant1";

/// Build a complete device record routed to `index_name`.
///
/// One MAC address is drawn per record and reused for every MAC-bearing
/// attribute. Scoped attribute keys are produced by [`field_key`] according
/// to `convention`.
pub fn synthesize<R: Rng>(rng: &mut R, index_name: &str, convention: Convention) -> DeviceRecord {
    let id = generate_device_id(rng);
    let mac = generate_mac(rng);
    let now = Utc::now();

    let mut builder = DeviceRecordBuilder::new(index_name)
        .field(fields::NAME, format!("device-{id}"))
        .field(fields::ID, id)
        .field(fields::TENANT_ID, TENANT_ID)
        .field(fields::CREATED_AT, now)
        .field(fields::UPDATED_AT, now)
        .field(fields::STATUS, generate_status(rng))
        .field(fields::GROUP_NAME, rng.gen_range(0..=100i64));

    for attribute in DEVICE_ATTRIBUTES {
        let key = field_key(
            attribute.scope,
            attribute.name,
            convention,
            attribute.rule.kind(),
        );
        builder.insert(key, generate_value(&attribute.rule, rng, &mac));
    }

    builder.build()
}
