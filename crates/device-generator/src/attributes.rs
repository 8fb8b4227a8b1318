//! The fixed set of device attributes written to every record.

use crate::generators::ValueRule;
use device_core::Scope;

/// One scoped device attribute and the rule producing its value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttributeSpec {
    pub scope: Scope,
    pub name: &'static str,
    pub rule: ValueRule,
}

const fn attr(scope: Scope, name: &'static str, rule: ValueRule) -> AttributeSpec {
    AttributeSpec { scope, name, rule }
}

const KERNEL: &str = "Linux version 4.14.181 (charles-chang@rdsuper) (gcc version 8.2.1 20180802 \
(Linaro GCC 8.2-2018.08~dev)) #1 SMP PREEMPT Fri Mar 12 13:21:16 CST 2021";

const ROOTFS_CHECKSUM: &str = "dbc44ce5bd57f0c909dfb15a1efd9fd5d4e426c0fa95f18ea2876e1b8a08818f";

/// Identity, inventory and custom attributes, in write order.
pub static DEVICE_ATTRIBUTES: &[AttributeSpec] = &[
    // identity
    attr(Scope::Identity, "mac", ValueRule::SharedMac),
    attr(
        Scope::Identity,
        "serial_no",
        ValueRule::IntRange {
            min: 0,
            max: 999_999_999_999,
        },
    ),
    // inventory
    attr(Scope::Inventory, "mac", ValueRule::SharedMac),
    attr(Scope::Inventory, "artifact_name", ValueRule::Static("system-M1")),
    attr(Scope::Inventory, "device_type", ValueRule::Static("dm1")),
    attr(Scope::Inventory, "hostname", ValueRule::Static("Ambarella")),
    attr(Scope::Inventory, "ipv4_bcm0", ValueRule::Static("192.168.42.1/24")),
    attr(Scope::Inventory, "ipv4_usb0", ValueRule::Static("10.0.1.2/8")),
    attr(Scope::Inventory, "ipv4_wlan0", ValueRule::Static("192.168.1.111/24")),
    attr(Scope::Inventory, "kernel", ValueRule::Static(KERNEL)),
    attr(Scope::Inventory, "mac_bcm0", ValueRule::SharedMac),
    attr(Scope::Inventory, "mac_usb0", ValueRule::SharedMac),
    attr(Scope::Inventory, "mac_wlan0", ValueRule::SharedMac),
    attr(
        Scope::Inventory,
        "mem_total_kB",
        ValueRule::IntRange {
            min: 100_000,
            max: 1_000_000,
        },
    ),
    attr(
        Scope::Inventory,
        "mender_bootloader_integration",
        ValueRule::Static("unknown"),
    ),
    attr(Scope::Inventory, "mender_client_version", ValueRule::Static("7cb96ca")),
    attr(
        Scope::Inventory,
        "network_interfaces",
        ValueRule::StaticList(&["bcm0", "usb0", "wlan0"]),
    ),
    attr(
        Scope::Inventory,
        "os",
        ValueRule::Static("Ambarella Flexible Linux CV25 (2.5.7) DMS (0.0.0.21B)"),
    ),
    attr(Scope::Inventory, "rootfs_type", ValueRule::Static("ext4")),
    attr(
        Scope::Inventory,
        "rootfs_image.checksum",
        ValueRule::Static(ROOTFS_CHECKSUM),
    ),
    attr(Scope::Inventory, "rootfs_image.version", ValueRule::Static("system-M1")),
    // custom
    attr(
        Scope::Custom,
        "tag",
        ValueRule::Tagged {
            prefix: "value-",
            min: 0,
            max: 100,
        },
    ),
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_scoped_names_unique() {
        let pairs: HashSet<(Scope, &str)> =
            DEVICE_ATTRIBUTES.iter().map(|a| (a.scope, a.name)).collect();
        assert_eq!(pairs.len(), DEVICE_ATTRIBUTES.len());
    }

    #[test]
    fn test_scope_counts() {
        let count = |scope| DEVICE_ATTRIBUTES.iter().filter(|a| a.scope == scope).count();
        assert_eq!(count(Scope::Identity), 2);
        assert_eq!(count(Scope::Inventory), 19);
        assert_eq!(count(Scope::Custom), 1);
    }

    #[test]
    fn test_mac_bearing_attributes() {
        let macs: Vec<(Scope, &str)> = DEVICE_ATTRIBUTES
            .iter()
            .filter(|a| a.rule == ValueRule::SharedMac)
            .map(|a| (a.scope, a.name))
            .collect();
        assert_eq!(
            macs,
            vec![
                (Scope::Identity, "mac"),
                (Scope::Inventory, "mac"),
                (Scope::Inventory, "mac_bcm0"),
                (Scope::Inventory, "mac_usb0"),
                (Scope::Inventory, "mac_wlan0"),
            ]
        );
    }
}
