//! SVG rendering
//!
//! The swappable draw step: serializes a scene graph into an SVG document.
//! Nothing here knows about topologies or devices, only shapes.

use std::fmt::Write;

use crate::render::scene::{FontWeight, Scene, SceneItem, Stroke, TextAnchor};

/// Render a scene as a standalone SVG document.
pub fn render_svg(scene: &Scene) -> String {
    let mut svg = String::new();
    let _ = write!(
        svg,
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">",
        w = scene.width,
        h = scene.height,
    );

    for item in &scene.items {
        match item {
            SceneItem::Rect {
                x,
                y,
                width,
                height,
                rx,
                fill,
                stroke,
            } => {
                let _ = write!(
                    svg,
                    "<rect x=\"{x}\" y=\"{y}\" width=\"{width}\" height=\"{height}\" rx=\"{rx}\" fill=\"{fill}\"{}/>",
                    stroke_attrs(stroke.as_ref()),
                );
            }
            SceneItem::Circle {
                cx,
                cy,
                r,
                fill,
                stroke,
            } => {
                let _ = write!(
                    svg,
                    "<circle cx=\"{cx}\" cy=\"{cy}\" r=\"{r}\" fill=\"{fill}\"{}/>",
                    stroke_attrs(stroke.as_ref()),
                );
            }
            SceneItem::Ellipse { cx, cy, rx, ry, fill } => {
                let _ = write!(
                    svg,
                    "<ellipse cx=\"{cx}\" cy=\"{cy}\" rx=\"{rx}\" ry=\"{ry}\" fill=\"{fill}\"/>",
                );
            }
            SceneItem::Line { x1, y1, x2, y2, stroke } => {
                let _ = write!(
                    svg,
                    "<line x1=\"{x1}\" y1=\"{y1}\" x2=\"{x2}\" y2=\"{y2}\"{}/>",
                    stroke_attrs(Some(stroke)),
                );
            }
            SceneItem::Polygon { points, fill, stroke } => {
                let points = points
                    .iter()
                    .map(|(x, y)| format!("{x},{y}"))
                    .collect::<Vec<_>>()
                    .join(" ");
                let _ = write!(
                    svg,
                    "<polygon points=\"{points}\" fill=\"{fill}\"{}/>",
                    stroke_attrs(stroke.as_ref()),
                );
            }
            SceneItem::Text {
                x,
                y,
                content,
                size,
                weight,
                fill,
                anchor,
            } => {
                let weight = match weight {
                    FontWeight::Normal => "400",
                    FontWeight::Semibold => "600",
                    FontWeight::Bold => "bold",
                };
                let anchor = match anchor {
                    TextAnchor::Start => "start",
                    TextAnchor::Middle => "middle",
                };
                let _ = write!(
                    svg,
                    "<text x=\"{x}\" y=\"{y}\" font-size=\"{size}\" font-weight=\"{weight}\" fill=\"{fill}\" text-anchor=\"{anchor}\">{}</text>",
                    escape_xml(content),
                );
            }
        }
    }

    svg.push_str("</svg>");
    svg
}

fn stroke_attrs(stroke: Option<&Stroke>) -> String {
    match stroke {
        Some(stroke) => {
            let mut attrs = format!(
                " stroke=\"{}\" stroke-width=\"{}\"",
                stroke.color, stroke.width
            );
            if let Some(dash) = &stroke.dash {
                let _ = write!(attrs, " stroke-dasharray=\"{dash}\"");
            }
            attrs
        }
        None => String::new(),
    }
}

fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
