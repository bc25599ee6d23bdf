//! Configuration-type classification
//!
//! Scores the text against a fixed category table using keyword occurrence
//! weights plus a flat bonus for command substrings. The weights and the 50%
//! runner-up threshold are tuning constants preserved as designed, not
//! validated domain truths.

use crate::model::ConfigType;

/// Flat bonus per command substring present anywhere in the text.
const COMMAND_BONUS: u32 = 3;

/// One scoring category: keyword list with a shared per-occurrence weight,
/// plus command substrings each worth a presence bonus.
pub struct CategorySpec {
    pub config_type: ConfigType,
    pub keywords: &'static [&'static str],
    pub weight: u32,
    pub commands: &'static [&'static str],
}

/// Category table. Declaration order is the tie-break order: on equal scores
/// the earlier category wins.
pub const CONFIG_CATEGORIES: &[CategorySpec] = &[
    CategorySpec {
        config_type: ConfigType::Ospf,
        keywords: &["ospf", "area"],
        weight: 2,
        commands: &["router ospf", "network", "area"],
    },
    CategorySpec {
        config_type: ConfigType::Eigrp,
        keywords: &["eigrp"],
        weight: 2,
        commands: &["router eigrp", "network"],
    },
    CategorySpec {
        config_type: ConfigType::Bgp,
        keywords: &["bgp", "autonomous"],
        weight: 2,
        commands: &["router bgp", "neighbor"],
    },
    CategorySpec {
        config_type: ConfigType::Vlan,
        keywords: &["vlan", "switchport"],
        weight: 2,
        commands: &["vlan", "switchport mode", "switchport access"],
    },
    CategorySpec {
        config_type: ConfigType::Acl,
        keywords: &["access-list", "acl", "permit", "deny"],
        weight: 2,
        commands: &["access-list", "ip access-group"],
    },
    CategorySpec {
        config_type: ConfigType::Nat,
        keywords: &["nat", "overload", "pool"],
        weight: 2,
        commands: &["ip nat", "access-list"],
    },
    CategorySpec {
        config_type: ConfigType::Dhcp,
        keywords: &["dhcp", "pool", "lease"],
        weight: 2,
        commands: &["ip dhcp pool", "network", "default-router"],
    },
    CategorySpec {
        config_type: ConfigType::StaticRouting,
        keywords: &["ip route", "static"],
        weight: 1,
        commands: &["ip route"],
    },
    CategorySpec {
        config_type: ConfigType::Interface,
        keywords: &["interface", "ip address"],
        weight: 1,
        commands: &["interface", "ip address"],
    },
];

/// Score one category against lower-cased text.
fn score_category(spec: &CategorySpec, lower: &str) -> u32 {
    let keyword_score: u32 = spec
        .keywords
        .iter()
        .map(|kw| lower.matches(kw).count() as u32 * spec.weight)
        .sum();

    let command_score: u32 = spec
        .commands
        .iter()
        .filter(|cmd| lower.contains(*cmd))
        .count() as u32
        * COMMAND_BONUS;

    keyword_score + command_score
}

/// Classify the dominant configuration intent of normalized text.
pub fn classify_config_type(text: &str) -> ConfigType {
    let lower = text.to_lowercase();

    let mut scored: Vec<(ConfigType, u32)> = CONFIG_CATEGORIES
        .iter()
        .map(|spec| (spec.config_type, score_category(spec, &lower)))
        .collect();

    tracing::debug!(scores = ?scored, "Config type scores");

    scored.retain(|(_, score)| *score > 0);
    // Stable sort keeps declaration order among equal scores
    scored.sort_by(|a, b| b.1.cmp(&a.1));

    match scored.as_slice() {
        [] => ConfigType::General,
        [(winner, _)] => *winner,
        [(winner, top), (_, runner_up), ..] => {
            if runner_up * 2 >= *top {
                ConfigType::MultiConfig
            } else {
                *winner
            }
        }
    }
}
