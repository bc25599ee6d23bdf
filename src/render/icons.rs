//! Device glyphs and color coding
//!
//! Fixed per-type accent colors and the icon geometry drawn inside each
//! device circle, expressed as scene items relative to the device center.

use crate::model::DeviceType;
use crate::render::scene::{FontWeight, SceneItem, Stroke, TextAnchor};

/// Accent color per device type.
pub const DEVICE_COLORS: &[(DeviceType, &str)] = &[
    (DeviceType::Router, "#4dabf7"),
    (DeviceType::Switch, "#51cf66"),
    (DeviceType::Pc, "#868e96"),
    (DeviceType::Server, "#ff6b6b"),
    (DeviceType::Firewall, "#ff922b"),
    (DeviceType::Cloud, "#94d82d"),
];

/// Fallback accent when a type has no table entry.
pub const DEFAULT_DEVICE_COLOR: &str = "#667eea";

pub fn device_color(device_type: DeviceType) -> &'static str {
    DEVICE_COLORS
        .iter()
        .find(|(t, _)| *t == device_type)
        .map(|(_, color)| *color)
        .unwrap_or(DEFAULT_DEVICE_COLOR)
}

/// Icon shapes for a device type, centered on (cx, cy).
pub fn icon_items(device_type: DeviceType, cx: f64, cy: f64) -> Vec<SceneItem> {
    match device_type {
        DeviceType::Router => vec![
            rect(cx - 15.0, cy - 10.0, 30.0, 20.0, 3.0, "#1971c2"),
            dot(cx - 8.0, cy, "#51cf66"),
            dot(cx, cy, "#51cf66"),
            dot(cx + 8.0, cy, "#ffd43b"),
        ],
        DeviceType::Switch => {
            let mut items = vec![rect(cx - 15.0, cy - 10.0, 30.0, 20.0, 3.0, "#2f9e44")];
            for dy in [-5.0, 0.0, 5.0] {
                items.push(SceneItem::Line {
                    x1: cx - 10.0,
                    y1: cy + dy,
                    x2: cx + 10.0,
                    y2: cy + dy,
                    stroke: Stroke::solid("white", 2.0),
                });
            }
            items
        }
        DeviceType::Pc => vec![
            rect(cx - 14.0, cy - 10.0, 28.0, 18.0, 2.0, "#495057"),
            rect(cx - 10.0, cy - 7.0, 20.0, 12.0, 0.0, "#339af0"),
            rect(cx - 6.0, cy + 10.0, 12.0, 2.0, 1.0, "#495057"),
        ],
        DeviceType::Server => {
            let mut items = Vec::new();
            for dy in [-12.0, -2.0, 8.0] {
                items.push(rect(cx - 12.0, cy + dy, 24.0, 8.0, 2.0, "#e03131"));
            }
            for dy in [-8.0, 2.0, 12.0] {
                items.push(SceneItem::Circle {
                    cx: cx - 8.0,
                    cy: cy + dy,
                    r: 1.5,
                    fill: "#51cf66".to_string(),
                    stroke: None,
                });
            }
            items
        }
        DeviceType::Firewall => vec![
            SceneItem::Polygon {
                points: vec![
                    (cx, cy - 15.0),
                    (cx + 12.0, cy - 8.0),
                    (cx + 12.0, cy + 8.0),
                    (cx, cy + 15.0),
                    (cx - 12.0, cy + 8.0),
                    (cx - 12.0, cy - 8.0),
                ],
                fill: "#fd7e14".to_string(),
                stroke: Some(Stroke::solid("#e8590c", 2.0)),
            },
            SceneItem::Text {
                x: cx,
                y: cy + 5.0,
                content: "FW".to_string(),
                size: 12.0,
                weight: FontWeight::Bold,
                fill: "white".to_string(),
                anchor: TextAnchor::Middle,
            },
        ],
        DeviceType::Cloud => vec![
            ellipse(cx, cy, 20.0, 12.0, "#74c0fc"),
            ellipse(cx - 8.0, cy - 3.0, 12.0, 8.0, "#a5d8ff"),
            ellipse(cx + 8.0, cy - 3.0, 12.0, 8.0, "#a5d8ff"),
        ],
    }
}

fn rect(x: f64, y: f64, width: f64, height: f64, rx: f64, fill: &str) -> SceneItem {
    SceneItem::Rect {
        x,
        y,
        width,
        height,
        rx,
        fill: fill.to_string(),
        stroke: None,
    }
}

fn dot(cx: f64, cy: f64, fill: &str) -> SceneItem {
    SceneItem::Circle {
        cx,
        cy,
        r: 2.5,
        fill: fill.to_string(),
        stroke: None,
    }
}

fn ellipse(cx: f64, cy: f64, rx: f64, ry: f64, fill: &str) -> SceneItem {
    SceneItem::Ellipse {
        cx,
        cy,
        rx,
        ry,
        fill: fill.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_type_has_a_color() {
        for device_type in [
            DeviceType::Router,
            DeviceType::Switch,
            DeviceType::Pc,
            DeviceType::Server,
            DeviceType::Firewall,
            DeviceType::Cloud,
        ] {
            assert_ne!(device_color(device_type), DEFAULT_DEVICE_COLOR);
        }
    }

    #[test]
    fn test_router_color() {
        assert_eq!(device_color(DeviceType::Router), "#4dabf7");
    }

    #[test]
    fn test_icons_are_centered() {
        let items = icon_items(DeviceType::Router, 100.0, 50.0);
        assert!(matches!(
            items[0],
            SceneItem::Rect { x, y, .. } if x == 85.0 && y == 40.0
        ));
    }
}
