//! Plain-text export
//!
//! Serializes a parsed response into the fixed banner format. List sections
//! are omitted entirely when empty. Pure: the timestamp is a parameter, and
//! nothing in the parsed data is touched.

use chrono::{DateTime, Utc};
use std::fmt::Write;

use crate::model::ParsedResponse;

const BANNER: &str = "━";
const RULE: &str = "─";
const PRODUCT: &str = "NetConfig Intel";

/// Export the whole structure as a plain-text document.
pub fn export_text(parsed: &ParsedResponse, generated_at: DateTime<Utc>) -> String {
    let mut out = String::new();
    let banner = BANNER.repeat(50);
    let rule = RULE.repeat(40);

    let _ = writeln!(out, "{banner}");
    let _ = writeln!(out, "{PRODUCT} - Configuration Export");
    let _ = writeln!(out, "Generated: {}", generated_at.format("%Y-%m-%d"));
    let _ = writeln!(out, "Type: {}", parsed.config_type.display_name());
    let _ = writeln!(out, "{banner}");
    out.push('\n');

    if !parsed.topology.protocols.is_empty() {
        let _ = writeln!(out, "PROTOCOLS: {}", parsed.topology.protocols.join(", "));
    }
    if !parsed.topology.nodes.is_empty() {
        let _ = writeln!(out, "DEVICES: {}", parsed.topology.nodes.join(", "));
    }
    if !parsed.topology.networks.is_empty() {
        let _ = writeln!(out, "NETWORKS: {}", parsed.topology.networks.join(", "));
    }
    out.push('\n');

    for (i, step) in parsed.steps.iter().enumerate() {
        let _ = writeln!(out, "STEP {}: {}", i + 1, step.title);
        let _ = writeln!(out, "{rule}");
        for cmd in &step.commands {
            let _ = writeln!(out, "{cmd}");
        }
        out.push('\n');
    }

    let _ = writeln!(out, "{banner}");
    let _ = writeln!(out, "Generated by {PRODUCT}");
    out.push_str(&banner);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::analyze_response;
    use chrono::TimeZone;

    fn stamp() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_full_export_shape() {
        let parsed = analyze_response(
            "Step 1: OSPF\nrouter ospf 1\nnetwork 10.0.0.0 0.255.255.255 area 0",
        );
        let text = export_text(&parsed, stamp());

        assert!(text.contains("Generated: 2024-05-01"));
        assert!(text.contains("Type: OSPF Routing"));
        assert!(text.contains("PROTOCOLS: OSPF"));
        assert!(text.contains("DEVICES: router"));
        assert!(text.contains("NETWORKS: 10.0.0.0, 0.255.255.255"));
        assert!(text.contains("STEP 1: OSPF"));
        assert!(text.contains("router ospf 1"));
        assert!(text.starts_with(&BANNER.repeat(50)));
        assert!(text.ends_with(&BANNER.repeat(50)));
    }

    #[test]
    fn test_empty_lists_omit_their_sections() {
        let parsed = analyze_response("a quiet day without gear");
        let text = export_text(&parsed, stamp());

        assert!(!text.contains("PROTOCOLS:"));
        assert!(!text.contains("DEVICES:"));
        assert!(!text.contains("NETWORKS:"));
        assert!(!text.contains("STEP"));
    }

    #[test]
    fn test_export_does_not_mutate() {
        let parsed = analyze_response("R1 and R2\nenable");
        let before = parsed.clone();
        let _ = export_text(&parsed, stamp());
        assert_eq!(parsed, before);
    }
}
