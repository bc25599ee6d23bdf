use serde::{Deserialize, Serialize};
use std::fmt;

/// Kinds of network entities the extractor recognizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeviceType {
    Router,
    Switch,
    Pc,
    Server,
    Firewall,
    Cloud,
}

impl DeviceType {
    /// Default display name for a device that was inferred rather than named.
    pub fn default_name(&self) -> &'static str {
        match self {
            DeviceType::Router => "R1",
            DeviceType::Switch => "SW1",
            DeviceType::Pc => "PC1",
            DeviceType::Server => "Server0",
            DeviceType::Firewall => "FW1",
            DeviceType::Cloud => "Internet",
        }
    }
}

// A network entity mentioned or inferred in one response
// - name: display identifier, unique case-insensitively within a response
// - implicit: true when the device was inferred from commands instead of named
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Device {
    #[serde(rename = "type")]
    pub device_type: DeviceType,
    pub name: String,
    pub implicit: bool,
}

/// Dominant configuration intent of a response. Exactly one per response,
/// derived by scoring, never user-supplied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfigType {
    Ospf,
    Eigrp,
    Bgp,
    Vlan,
    Acl,
    Nat,
    Dhcp,
    StaticRouting,
    Interface,
    MultiConfig,
    General,
}

impl ConfigType {
    /// Human-readable name, used for the presenter header and the export `Type:` line.
    pub fn display_name(&self) -> &'static str {
        match self {
            ConfigType::Ospf => "OSPF Routing",
            ConfigType::Eigrp => "EIGRP Routing",
            ConfigType::Bgp => "BGP Routing",
            ConfigType::Vlan => "VLAN Configuration",
            ConfigType::Acl => "Access Control List",
            ConfigType::Nat => "NAT Configuration",
            ConfigType::Dhcp => "DHCP Server",
            ConfigType::StaticRouting => "Static Routing",
            ConfigType::Interface => "Interface Configuration",
            ConfigType::MultiConfig => "Multiple Configurations",
            ConfigType::General => "General Configuration",
        }
    }
}

impl fmt::Display for ConfigType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// An ordered configuration stage. A step with zero commands never leaves the
/// segmenter; ordering reflects presentation order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    pub title: String,
    pub commands: Vec<String>,
    pub description: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LinkType {
    Direct,
    Vpn,
}

/// An inferred connection between two devices, identified by name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub from: String,
    pub to: String,
    #[serde(rename = "type")]
    pub link_type: LinkType,
    /// Optional caption drawn at the midpoint of the link.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl Link {
    pub fn direct(from: &str, to: &str) -> Self {
        Self {
            from: from.to_string(),
            to: to.to_string(),
            link_type: LinkType::Direct,
            label: None,
        }
    }
}

/// Geometric arrangement family chosen from device count and composition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayoutKind {
    None,
    Single,
    Linear,
    Star,
    Hierarchical,
    Mesh,
    Grid,
}

// Derived node/edge graph plus protocol and network metadata for one response.
// Rebuilt from scratch each time, never mutated incrementally.
// - nodes: device names in discovery order
// - networks: IPv4/CIDR literals in first-seen order, de-duplicated
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topology {
    pub nodes: Vec<String>,
    pub links: Vec<Link>,
    pub protocols: Vec<String>,
    pub networks: Vec<String>,
    pub layout: LayoutKind,
}

/// A 2-D coordinate inside the fixed 800x400 design canvas.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

/// Aggregate result of the full pipeline; the sole object handed from parsing
/// to rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedResponse {
    #[serde(rename = "type")]
    pub config_type: ConfigType,
    pub devices: Vec<Device>,
    pub topology: Topology,
    pub steps: Vec<Step>,
    pub commands: Vec<String>,
    /// Residual text after removing recognized commands, truncated to 500 chars.
    pub explanation: String,
}
