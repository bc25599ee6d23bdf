//! Step segmentation
//!
//! Splits a response into ordered configuration steps. The primary strategy
//! folds the text line by line over explicit step markers; when none are
//! found the extracted commands are grouped by a command-prefix state
//! machine. Steps that end up with zero commands are dropped.

use regex::Regex;

use crate::model::Step;
use crate::service::command::is_config_command;

/// Marker patterns tried in order; the first match wins. Capture group 1 is
/// the step title.
pub const STEP_MARKER_PATTERNS: &[&str] = &[
    r"(?i)^step\s+\d+[:.]?\s*(.*)$",
    r"(?i)^paso\s+\d+[:.]?\s*(.*)$",
    r"(?i)^\d+[.)\-]\s+(.*)$",
    r"(?i)^[•▪▫]\s+(.*)$",
];

/// A step under construction; becomes a `Step` only if it has commands.
struct StepDraft {
    title: String,
    commands: Vec<String>,
    description: String,
}

impl StepDraft {
    fn close(self, steps: &mut Vec<Step>) {
        if !self.commands.is_empty() {
            steps.push(Step {
                title: self.title,
                commands: self.commands,
                description: self.description,
            });
        }
    }
}

/// Match a line against the marker patterns, returning the captured title
/// (None when the capture is empty).
fn match_step_marker(markers: &[Regex], line: &str) -> Option<Option<String>> {
    for re in markers {
        if let Some(caps) = re.captures(line) {
            let title = caps.get(1).map(|m| m.as_str().trim()).unwrap_or("");
            return Some(if title.is_empty() {
                None
            } else {
                Some(title.to_string())
            });
        }
    }
    None
}

/// Segment normalized text into steps, falling back to command grouping when
/// no explicit markers are present. An empty result is a valid terminal
/// state, not an error.
pub fn segment_steps(text: &str, commands: &[String]) -> Vec<Step> {
    let markers: Vec<Regex> = STEP_MARKER_PATTERNS
        .iter()
        .map(|p| Regex::new(p).unwrap())
        .collect();

    let (mut steps, current) = text.lines().map(str::trim).fold(
        (Vec::new(), None::<StepDraft>),
        |(mut steps, mut current), line| {
            if let Some(title) = match_step_marker(&markers, line) {
                if let Some(draft) = current.take() {
                    draft.close(&mut steps);
                }
                let title = title.unwrap_or_else(|| format!("Paso {}", steps.len() + 1));
                current = Some(StepDraft {
                    title,
                    commands: Vec::new(),
                    description: String::new(),
                });
            } else if let Some(draft) = current.as_mut() {
                if is_config_command(line) {
                    draft.commands.push(line.to_string());
                } else if !line.is_empty() {
                    draft.description.push_str(line);
                    draft.description.push(' ');
                }
            }
            (steps, current)
        },
    );

    if let Some(draft) = current {
        draft.close(&mut steps);
    }

    if steps.is_empty() && !commands.is_empty() {
        steps = group_commands(commands);
    }

    tracing::debug!(step_count = steps.len(), "Steps detected");
    steps
}

/// Command-prefix grouping fallback. Each flushed group becomes one step with
/// an empty description; group titles reflect the last prefix seen before the
/// flush.
fn group_commands(commands: &[String]) -> Vec<Step> {
    let mut steps: Vec<Step> = Vec::new();
    let mut group: Vec<String> = Vec::new();
    let mut title: Option<String> = None;

    fn flush(steps: &mut Vec<Step>, group: &mut Vec<String>, title: &mut Option<String>) {
        if !group.is_empty() {
            steps.push(Step {
                title: title
                    .take()
                    .unwrap_or_else(|| format!("Configuración {}", steps.len() + 1)),
                commands: std::mem::take(group),
                description: String::new(),
            });
        }
    }

    for cmd in commands {
        let lower = cmd.to_lowercase();

        if lower == "enable" {
            flush(&mut steps, &mut group, &mut title);
            group.push(cmd.clone());
            title = Some("Acceso privilegiado".to_string());
        } else if lower == "configure terminal" {
            if !group.is_empty() && !group[0].eq_ignore_ascii_case("enable") {
                flush(&mut steps, &mut group, &mut title);
            }
            group.push(cmd.clone());
            title = Some("Modo de configuración".to_string());
        } else if lower.starts_with("router ") {
            flush(&mut steps, &mut group, &mut title);
            group.push(cmd.clone());
            title = Some("Configuración de routing".to_string());
        } else if lower.starts_with("interface ") {
            flush(&mut steps, &mut group, &mut title);
            group.push(cmd.clone());
            title = Some("Configuración de interfaz".to_string());
        } else if lower.starts_with("vlan ") {
            flush(&mut steps, &mut group, &mut title);
            group.push(cmd.clone());
            title = Some("Configuración de VLAN".to_string());
        } else {
            group.push(cmd.clone());
        }
    }

    flush(&mut steps, &mut group, &mut title);
    steps
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::command::extract_commands;

    fn segment(text: &str) -> Vec<Step> {
        segment_steps(text, &extract_commands(text))
    }

    #[test]
    fn test_explicit_markers_with_titles() {
        let text = "Step 1: Enter privileged mode\nenable\nStep 2: Configure OSPF\nrouter ospf 1\nnetwork 10.0.0.0 0.255.255.255 area 0";
        let steps = segment(text);
        assert_eq!(steps.len(), 2);
        assert_eq!(steps[0].title, "Enter privileged mode");
        assert_eq!(steps[0].commands, vec!["enable"]);
        assert_eq!(steps[1].title, "Configure OSPF");
        assert_eq!(steps[1].commands.len(), 2);
    }

    #[test]
    fn test_empty_title_defaults_to_paso() {
        let text = "Step 1\nenable\nStep 2\nconfigure terminal";
        let steps = segment(text);
        assert_eq!(steps.len(), 2);
        assert_eq!(steps[0].title, "Paso 1");
        assert_eq!(steps[1].title, "Paso 2");
    }

    #[test]
    fn test_zero_command_steps_are_dropped() {
        let text = "Step 1: Introduction\nThis step only explains things.\nStep 2: Do it\nenable";
        let steps = segment(text);
        assert_eq!(steps.len(), 1);
        assert_eq!(steps[0].title, "Do it");
        // the dropped step did not consume a default number
        let text = "Step 1\nnothing here\nStep 2\nenable";
        let steps = segment(text);
        assert_eq!(steps.len(), 1);
        assert_eq!(steps[0].title, "Paso 1");
    }

    #[test]
    fn test_non_command_lines_accumulate_description() {
        let text = "1. Set the address\ninterface gi0/0\nThis assigns the IP.\nip address 10.0.0.1 255.255.255.0";
        let steps = segment(text);
        assert_eq!(steps.len(), 1);
        assert_eq!(steps[0].description, "This assigns the IP. ");
        assert_eq!(steps[0].commands.len(), 2);
    }

    #[test]
    fn test_numbered_and_bullet_markers() {
        let text = "1) First\nenable\n• Second\nconfigure terminal";
        let steps = segment(text);
        assert_eq!(steps.len(), 2);
        assert_eq!(steps[0].title, "First");
        assert_eq!(steps[1].title, "Second");
    }

    #[test]
    fn test_fallback_grouping_by_prefix() {
        let text = "enable\nconfigure terminal\nrouter ospf 1\nnetwork 10.0.0.0 0.255.255.255 area 0\ninterface gi0/0\nip address 10.0.0.1 255.255.255.0";
        let steps = segment(text);
        assert_eq!(steps.len(), 3);
        // enable + configure terminal merge; the later prefix renames the group
        assert_eq!(steps[0].title, "Modo de configuración");
        assert_eq!(steps[0].commands, vec!["enable", "configure terminal"]);
        assert_eq!(steps[1].title, "Configuración de routing");
        assert_eq!(steps[1].commands.len(), 2);
        assert_eq!(steps[2].title, "Configuración de interfaz");
        assert_eq!(steps[2].commands.len(), 2);
    }

    #[test]
    fn test_fallback_vlan_group() {
        let text = "vlan 10\nname SALES\nexit";
        let steps = segment(text);
        assert_eq!(steps.len(), 1);
        assert_eq!(steps[0].title, "Configuración de VLAN");
        // "name SALES" is not a recognized command and never reaches grouping
        assert_eq!(steps[0].commands, vec!["vlan 10", "exit"]);
    }

    #[test]
    fn test_no_markers_no_commands_yields_empty() {
        assert!(segment("just prose, nothing else").is_empty());
    }

    #[test]
    fn test_steps_always_have_commands() {
        let text = "Step 1: A\nenable\nStep 2: B\nprose only\nStep 3: C\nend";
        for step in segment(text) {
            assert!(!step.commands.is_empty());
        }
    }
}
