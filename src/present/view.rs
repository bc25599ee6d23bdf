//! Response presentation
//!
//! Assembles the parsed facts and the diagram scene into an interactive view
//! model. Expand/collapse state lives here and only here; re-running the
//! pipeline always resets it to the default first-step-expanded state.

use crate::model::{ConfigType, ParsedResponse};
use crate::render::Scene;

/// One step as presented: immutable content plus ephemeral UI state.
#[derive(Debug, Clone, PartialEq)]
pub struct StepView {
    pub number: usize,
    pub title: String,
    pub description: Option<String>,
    pub commands: Vec<String>,
    pub expanded: bool,
}

/// The assembled, presentable response.
#[derive(Debug, Clone, PartialEq)]
pub struct ResponseView {
    /// Human-readable configuration type for the header badge.
    pub header: String,
    pub config_type: ConfigType,
    /// Present only when the topology has device nodes.
    pub diagram: Option<Scene>,
    pub protocols: Vec<String>,
    /// At most the first two network literals, for the summary line.
    pub networks_preview: Vec<String>,
    /// Present only when longer than 20 characters.
    pub explanation: Option<String>,
    pub steps: Vec<StepView>,
}

impl ResponseView {
    /// Build the view. The first step starts expanded, all others collapsed.
    pub fn new(parsed: &ParsedResponse, diagram: Option<Scene>) -> Self {
        let steps = parsed
            .steps
            .iter()
            .enumerate()
            .map(|(i, step)| StepView {
                number: i + 1,
                title: step.title.clone(),
                description: match step.description.trim() {
                    "" => None,
                    desc => Some(desc.to_string()),
                },
                commands: step.commands.clone(),
                expanded: i == 0,
            })
            .collect();

        Self {
            header: parsed.config_type.display_name().to_string(),
            config_type: parsed.config_type,
            diagram: if parsed.topology.nodes.is_empty() {
                None
            } else {
                diagram
            },
            protocols: parsed.topology.protocols.clone(),
            networks_preview: parsed.topology.networks.iter().take(2).cloned().collect(),
            explanation: if parsed.explanation.chars().count() > 20 {
                Some(parsed.explanation.clone())
            } else {
                None
            },
            steps,
        }
    }

    /// Flip one step's expand state. Other steps are unaffected.
    pub fn toggle_step(&mut self, index: usize) {
        if let Some(step) = self.steps.get_mut(index) {
            step.expanded = !step.expanded;
        }
    }

    /// Copy payload for one step's command block. Pure read.
    pub fn step_commands_text(&self, index: usize) -> Option<String> {
        self.steps.get(index).map(|step| step.commands.join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::build_scene;
    use crate::service::{analyze_response, compute_positions};

    fn view_for(raw: &str) -> ResponseView {
        let parsed = analyze_response(raw);
        let positions = compute_positions(&parsed.topology.nodes, parsed.topology.layout);
        let scene = build_scene(&parsed.topology, &positions, &parsed.devices);
        ResponseView::new(&parsed, Some(scene))
    }

    const VLAN_ANSWER: &str =
        "Step 1: Create the VLAN\nvlan 10\nStep 2: Assign the port\nswitchport access vlan 10\nSW1 handles both PC1 and PC2 connections here.";

    #[test]
    fn test_first_step_expanded_rest_collapsed() {
        let view = view_for(VLAN_ANSWER);
        assert_eq!(view.steps.len(), 2);
        assert!(view.steps[0].expanded);
        assert!(!view.steps[1].expanded);
    }

    #[test]
    fn test_toggle_is_independent_per_step() {
        let mut view = view_for(VLAN_ANSWER);
        view.toggle_step(1);
        assert!(view.steps[0].expanded);
        assert!(view.steps[1].expanded);
        view.toggle_step(0);
        assert!(!view.steps[0].expanded);
        assert!(view.steps[1].expanded);
    }

    #[test]
    fn test_reparse_resets_ui_state() {
        let mut view = view_for(VLAN_ANSWER);
        view.toggle_step(0);
        let fresh = view_for(VLAN_ANSWER);
        assert!(fresh.steps[0].expanded);
    }

    #[test]
    fn test_copy_payload_is_pure() {
        let view = view_for(VLAN_ANSWER);
        let before = view.clone();
        let text = view.step_commands_text(0);
        assert_eq!(text.as_deref(), Some("vlan 10"));
        assert_eq!(view, before);
    }

    #[test]
    fn test_short_explanation_omitted() {
        let view = view_for("enable");
        assert!(view.explanation.is_none());
    }

    #[test]
    fn test_diagram_omitted_without_devices() {
        let view = view_for("enable\nconfigure terminal\nend");
        assert!(view.diagram.is_none());
    }

    #[test]
    fn test_header_names_the_type() {
        let view = view_for("router ospf 1\nnetwork 10.0.0.0 0.255.255.255 area 0");
        assert_eq!(view.header, "OSPF Routing");
    }
}
