//! Device extraction
//!
//! Scans the text with one pattern per device class and de-duplicates matches
//! case-insensitively, keeping first-seen casing. When nothing is named
//! explicitly, a single implicit device is inferred from the commands present.

use regex::Regex;

use crate::model::{Device, DeviceType};

/// Device-name patterns, scanned in this fixed class order. The matched
/// substring becomes the candidate name; a name is claimed by whichever class
/// matched it first.
pub const DEVICE_PATTERNS: &[(DeviceType, &str)] = &[
    (DeviceType::Router, r"(?i)\b(router|R\d+|R-\d+)\b"),
    (DeviceType::Switch, r"(?i)\b(switch|SW\d+|SW-\d+)\b"),
    (DeviceType::Pc, r"(?i)\b(PC\d+|host\d*|computer)\b"),
    (DeviceType::Server, r"(?i)\b(server\d*|srv\d+)\b"),
    (DeviceType::Firewall, r"(?i)\b(firewall|FW\d*)\b"),
    (DeviceType::Cloud, r"(?i)\b(internet|cloud|ISP)\b"),
];

/// Extract the unique devices mentioned in normalized text, falling back to a
/// single inferred device when none is named.
pub fn extract_devices(text: &str) -> Vec<Device> {
    let mut devices = Vec::new();
    let mut seen: Vec<String> = Vec::new();

    for (device_type, pattern) in DEVICE_PATTERNS {
        let re = Regex::new(pattern).unwrap();
        for m in re.find_iter(text) {
            let name = m.as_str().trim();
            let key = name.to_lowercase();
            if !seen.contains(&key) {
                devices.push(Device {
                    device_type: *device_type,
                    name: name.to_string(),
                    implicit: false,
                });
                seen.push(key);
            }
        }
    }

    if devices.is_empty() {
        if let Some(inferred) = infer_device_type(text) {
            devices.push(Device {
                device_type: inferred,
                name: inferred.default_name().to_string(),
                implicit: true,
            });
        }
    }

    tracing::debug!(device_count = devices.len(), "Devices found");
    devices
}

/// Infer a device type from command vocabulary when no device is named.
/// Bare `interface` mentions default to router, which can misclassify
/// switch-only configurations; kept as designed.
fn infer_device_type(text: &str) -> Option<DeviceType> {
    let lower = text.to_lowercase();

    if lower.contains("router ospf")
        || lower.contains("router eigrp")
        || lower.contains("router bgp")
    {
        return Some(DeviceType::Router);
    }

    if lower.contains("vlan") || lower.contains("switchport") {
        return Some(DeviceType::Switch);
    }

    if lower.contains("interface") {
        return Some(DeviceType::Router);
    }

    None
}
