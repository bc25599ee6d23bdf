//! Topology inference
//!
//! Derives the node/edge graph plus protocol and network metadata from the
//! extracted devices and the text, and picks a layout family from device
//! count and composition.

use regex::Regex;

use crate::model::{ConfigType, Device, DeviceType, LayoutKind, Link, Topology};

/// Protocol labels and the keywords that pull them in. Declaration order is
/// the output order.
pub const PROTOCOL_KEYWORDS: &[(&str, &[&str])] = &[
    ("OSPF", &["ospf"]),
    ("EIGRP", &["eigrp"]),
    ("BGP", &["bgp"]),
    ("RIP", &["rip"]),
    ("VLAN", &["vlan"]),
    ("STP", &["spanning-tree", "stp"]),
    ("VPN", &["vpn", "ipsec", "gre"]),
    ("NAT", &["nat"]),
    ("DHCP", &["dhcp"]),
];

/// IPv4 literal with optional CIDR suffix.
const NETWORK_PATTERN: &str = r"\b(?:\d{1,3}\.){3}\d{1,3}(?:/\d{1,2})?\b";

/// Build the topology for one response. Rebuilt from scratch each call.
pub fn build_topology(devices: &[Device], _config_type: ConfigType, text: &str) -> Topology {
    let topology = Topology {
        nodes: devices.iter().map(|d| d.name.clone()).collect(),
        links: infer_links(devices),
        protocols: extract_protocols(text),
        networks: extract_networks(text),
        layout: choose_layout(devices),
    };

    tracing::debug!(
        nodes = topology.nodes.len(),
        links = topology.links.len(),
        layout = ?topology.layout,
        "Topology built"
    );
    topology
}

/// Protocol labels whose keywords appear in the text, in table order.
pub fn extract_protocols(text: &str) -> Vec<String> {
    let lower = text.to_lowercase();
    PROTOCOL_KEYWORDS
        .iter()
        .filter(|(_, keywords)| keywords.iter().any(|kw| lower.contains(kw)))
        .map(|(label, _)| label.to_string())
        .collect()
}

/// All IPv4/CIDR literals, de-duplicated preserving first-seen order.
pub fn extract_networks(text: &str) -> Vec<String> {
    let re = Regex::new(NETWORK_PATTERN).unwrap();
    let mut networks: Vec<String> = Vec::new();
    for m in re.find_iter(text) {
        let net = m.as_str().to_string();
        if !networks.contains(&net) {
            networks.push(net);
        }
    }
    networks
}

/// Infer links: a single direct link for a pair of devices; for more, a star
/// around the first switch/router found (the hub device).
fn infer_links(devices: &[Device]) -> Vec<Link> {
    match devices {
        [a, b] => vec![Link::direct(&a.name, &b.name)],
        [_, _, _, ..] => {
            let hub = devices.iter().find(|d| {
                matches!(d.device_type, DeviceType::Switch | DeviceType::Router)
            });
            match hub {
                Some(hub) => devices
                    .iter()
                    .filter(|d| d.name != hub.name)
                    .map(|d| Link::direct(&hub.name, &d.name))
                    .collect(),
                None => Vec::new(),
            }
        }
        _ => Vec::new(),
    }
}

/// Pick the layout family. The priority order below is significant: star is
/// checked before hierarchical, mesh before the grid fallback.
fn choose_layout(devices: &[Device]) -> LayoutKind {
    match devices.len() {
        0 => return LayoutKind::None,
        1 => return LayoutKind::Single,
        2 => return LayoutKind::Linear,
        _ => {}
    }

    let has_switch = devices.iter().any(|d| d.device_type == DeviceType::Switch);
    let has_router = devices.iter().any(|d| d.device_type == DeviceType::Router);
    let pc_count = devices
        .iter()
        .filter(|d| d.device_type == DeviceType::Pc)
        .count();

    if has_switch && pc_count > 2 {
        LayoutKind::Star
    } else if has_router && has_switch {
        LayoutKind::Hierarchical
    } else if devices.len() > 4 {
        LayoutKind::Mesh
    } else {
        LayoutKind::Grid
    }
}
