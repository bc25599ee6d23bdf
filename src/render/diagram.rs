//! Diagram synthesis
//!
//! Phase one of rendering: turn a topology, resolved positions and device
//! records into a scene graph. Draw order is background, edges, badges, then
//! device glyphs.

use std::collections::HashMap;

use crate::model::{Device, DeviceType, LinkType, Position, Topology};
use crate::render::icons::{device_color, icon_items};
use crate::render::scene::{FontWeight, Scene, SceneItem, Stroke, TextAnchor};
use crate::service::layout::{CANVAS_HEIGHT, CANVAS_WIDTH};

const DEVICE_RADIUS: f64 = 30.0;
const EMPTY_HEIGHT: f64 = 200.0;

/// Build the diagram scene for a topology. An empty node list produces a
/// placeholder panel instead of the full scene.
pub fn build_scene(
    topology: &Topology,
    positions: &HashMap<String, Position>,
    devices: &[Device],
) -> Scene {
    if topology.nodes.is_empty() {
        return empty_scene();
    }

    let mut scene = Scene::new(CANVAS_WIDTH, CANVAS_HEIGHT);

    scene.push(SceneItem::Rect {
        x: 0.0,
        y: 0.0,
        width: CANVAS_WIDTH,
        height: CANVAS_HEIGHT,
        rx: 10.0,
        fill: "#f8fafc".to_string(),
        stroke: None,
    });

    for link in &topology.links {
        let (Some(from), Some(to)) = (positions.get(&link.from), positions.get(&link.to)) else {
            continue;
        };
        scene.push(SceneItem::Line {
            x1: from.x,
            y1: from.y,
            x2: to.x,
            y2: to.y,
            stroke: Stroke {
                color: "#94a3b8".to_string(),
                width: 3.0,
                dash: (link.link_type == LinkType::Vpn).then(|| "10,5".to_string()),
            },
        });
        if let Some(label) = &link.label {
            scene.push(SceneItem::Text {
                x: (from.x + to.x) / 2.0,
                y: (from.y + to.y) / 2.0 - 5.0,
                content: label.clone(),
                size: 12.0,
                weight: FontWeight::Semibold,
                fill: "#475569".to_string(),
                anchor: TextAnchor::Middle,
            });
        }
    }

    if !topology.protocols.is_empty() {
        push_badge(
            &mut scene,
            10.0,
            &topology.protocols.join(", "),
            "#667eea",
            150.0,
        );
    }

    if let Some(network) = topology.networks.first() {
        push_badge(
            &mut scene,
            CANVAS_WIDTH - 180.0 - 10.0,
            network,
            "#10b981",
            180.0,
        );
    }

    for name in &topology.nodes {
        let Some(pos) = positions.get(name) else {
            continue;
        };
        let device_type = devices
            .iter()
            .find(|d| &d.name == name)
            .map(|d| d.device_type)
            .unwrap_or_else(|| type_from_name(name));

        scene.push(SceneItem::Circle {
            cx: pos.x,
            cy: pos.y,
            r: DEVICE_RADIUS,
            fill: "white".to_string(),
            stroke: Some(Stroke::solid(device_color(device_type), 3.0)),
        });
        scene.items.extend(icon_items(device_type, pos.x, pos.y));
        scene.push(SceneItem::Text {
            x: pos.x,
            y: pos.y + DEVICE_RADIUS + 20.0,
            content: name.clone(),
            size: 14.0,
            weight: FontWeight::Semibold,
            fill: "#1e293b".to_string(),
            anchor: TextAnchor::Middle,
        });
    }

    scene
}

/// Summary badge: rounded box with accent border at the top of the canvas.
fn push_badge(scene: &mut Scene, x: f64, text: &str, accent: &str, width: f64) {
    scene.push(SceneItem::Rect {
        x,
        y: 10.0,
        width,
        height: 30.0,
        rx: 5.0,
        fill: "white".to_string(),
        stroke: Some(Stroke::solid(accent, 2.0)),
    });
    scene.push(SceneItem::Text {
        x: x + 10.0,
        y: 30.0,
        content: text.to_string(),
        size: 13.0,
        weight: FontWeight::Semibold,
        fill: accent.to_string(),
        anchor: TextAnchor::Start,
    });
}

/// Guess a type for a node name with no extracted device record.
fn type_from_name(name: &str) -> DeviceType {
    let lower = name.to_lowercase();
    if lower.contains("sw") {
        DeviceType::Switch
    } else if lower.contains("pc") {
        DeviceType::Pc
    } else if lower.contains("server") {
        DeviceType::Server
    } else {
        DeviceType::Router
    }
}

/// Placeholder shown when no topology was detected.
fn empty_scene() -> Scene {
    let mut scene = Scene::new(CANVAS_WIDTH, EMPTY_HEIGHT);
    scene.push(SceneItem::Rect {
        x: 0.0,
        y: 0.0,
        width: CANVAS_WIDTH,
        height: EMPTY_HEIGHT,
        rx: 10.0,
        fill: "#f1f5f9".to_string(),
        stroke: None,
    });
    scene.push(SceneItem::Text {
        x: CANVAS_WIDTH / 2.0,
        y: EMPTY_HEIGHT / 2.0,
        content: "No topology detected".to_string(),
        size: 16.0,
        weight: FontWeight::Normal,
        fill: "#94a3b8".to_string(),
        anchor: TextAnchor::Middle,
    });
    scene
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ConfigType, LayoutKind};
    use crate::service::{build_topology, compute_positions, extract_devices};

    fn scene_for(text: &str) -> Scene {
        let devices = extract_devices(text);
        let topology = build_topology(&devices, ConfigType::General, text);
        let positions = compute_positions(&topology.nodes, topology.layout);
        build_scene(&topology, &positions, &devices)
    }

    #[test]
    fn test_empty_topology_renders_placeholder() {
        let scene = scene_for("nothing to draw");
        assert_eq!(scene.height, 200.0);
        assert!(scene.items.iter().any(
            |item| matches!(item, SceneItem::Text { content, .. } if content.contains("No topology"))
        ));
    }

    #[test]
    fn test_background_first_labels_last() {
        let scene = scene_for("R1 connects to R2 over 10.0.0.0/8");
        assert!(matches!(scene.items[0], SceneItem::Rect { .. }));
        assert!(matches!(
            scene.items.last(),
            Some(SceneItem::Text { anchor: TextAnchor::Middle, .. })
        ));
    }

    #[test]
    fn test_edges_before_device_glyphs() {
        let scene = scene_for("R1 and R2");
        let line_idx = scene
            .items
            .iter()
            .position(|i| matches!(i, SceneItem::Line { .. }))
            .unwrap();
        let circle_idx = scene
            .items
            .iter()
            .position(|i| matches!(i, SceneItem::Circle { .. }))
            .unwrap();
        assert!(line_idx < circle_idx);
    }

    #[test]
    fn test_vpn_links_are_dashed() {
        let devices = extract_devices("R1 and R2");
        let mut topology = build_topology(&devices, ConfigType::General, "R1 and R2");
        topology.links[0].link_type = LinkType::Vpn;
        let positions = compute_positions(&topology.nodes, topology.layout);
        let scene = build_scene(&topology, &positions, &devices);

        let dash = scene.items.iter().find_map(|item| match item {
            SceneItem::Line { stroke, .. } => stroke.dash.clone(),
            _ => None,
        });
        assert_eq!(dash.as_deref(), Some("10,5"));
    }

    #[test]
    fn test_nodes_without_positions_are_skipped() {
        let devices = extract_devices("R1 and R2");
        let topology = build_topology(&devices, ConfigType::General, "R1 and R2");
        let positions = compute_positions(&topology.nodes[..1].to_vec(), LayoutKind::Single);
        let scene = build_scene(&topology, &positions, &devices);

        let circles = scene
            .items
            .iter()
            .filter(|i| matches!(i, SceneItem::Circle { .. }))
            .count();
        assert_eq!(circles, 1);
        // the link lost one endpoint and is skipped too
        assert!(!scene.items.iter().any(|i| matches!(i, SceneItem::Line { .. })));
    }

    #[test]
    fn test_unknown_node_type_guessed_from_name() {
        assert_eq!(type_from_name("SW9"), DeviceType::Switch);
        assert_eq!(type_from_name("pc3"), DeviceType::Pc);
        assert_eq!(type_from_name("server1"), DeviceType::Server);
        assert_eq!(type_from_name("edge"), DeviceType::Router);
    }

    #[test]
    fn test_badges_present_when_facts_exist() {
        let scene = scene_for("R1 and R2 run ospf on 10.0.0.0/8");
        let texts: Vec<&str> = scene
            .items
            .iter()
            .filter_map(|item| match item {
                SceneItem::Text { content, .. } => Some(content.as_str()),
                _ => None,
            })
            .collect();
        assert!(texts.contains(&"OSPF"));
        assert!(texts.contains(&"10.0.0.0/8"));
    }
}
