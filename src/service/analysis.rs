//! Response analysis pipeline
//!
//! Runs the full extraction sequence over one generated answer: normalize,
//! classify, extract devices and commands, segment steps, infer topology.
//! The pipeline never fails; unrecognized text degrades to a general result
//! with the truncated input as its explanation.

use crate::model::ParsedResponse;
use crate::service::classify::classify_config_type;
use crate::service::command::extract_commands;
use crate::service::device::extract_devices;
use crate::service::normalize::normalize_text;
use crate::service::segment::segment_steps;
use crate::service::topology::build_topology;

/// Maximum explanation length, in characters.
const EXPLANATION_LIMIT: usize = 500;

/// Analyze one raw generated answer into structured facts. Pure: identical
/// input always yields structurally identical output.
pub fn analyze_response(raw: &str) -> ParsedResponse {
    tracing::debug!(length = raw.len(), "Analyzing response");

    let text = normalize_text(raw);
    let config_type = classify_config_type(&text);
    let devices = extract_devices(&text);
    let commands = extract_commands(&text);
    let steps = segment_steps(&text, &commands);
    let topology = build_topology(&devices, config_type, &text);
    let explanation = extract_explanation(&text, &commands);

    let parsed = ParsedResponse {
        config_type,
        devices,
        topology,
        steps,
        commands,
        explanation,
    };

    tracing::debug!(
        config_type = ?parsed.config_type,
        devices = parsed.devices.len(),
        steps = parsed.steps.len(),
        commands = parsed.commands.len(),
        "Analysis complete"
    );
    parsed
}

/// Residual explanatory text: the input with each recognized command removed
/// once, collapsed to a single line and truncated.
fn extract_explanation(text: &str, commands: &[String]) -> String {
    let mut explanation = text.to_string();
    for cmd in commands {
        explanation = explanation.replacen(cmd.as_str(), "", 1);
    }

    explanation
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
        .chars()
        .take(EXPLANATION_LIMIT)
        .collect()
}
