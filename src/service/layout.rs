//! Topology layout geometry
//!
//! Pure geometry: deterministic positions for every node given the layout
//! family, inside the fixed 800x400 design canvas.

use std::collections::HashMap;
use std::f64::consts::PI;

use crate::model::{LayoutKind, Position};

pub const CANVAS_WIDTH: f64 = 800.0;
pub const CANVAS_HEIGHT: f64 = 400.0;
pub const CANVAS_MARGIN: f64 = 60.0;

/// Compute a position for every node name under the given layout family.
pub fn compute_positions(nodes: &[String], layout: LayoutKind) -> HashMap<String, Position> {
    let mut positions = HashMap::new();
    if nodes.is_empty() {
        return positions;
    }

    match layout {
        LayoutKind::Single => {
            positions.insert(
                nodes[0].clone(),
                Position {
                    x: CANVAS_WIDTH / 2.0,
                    y: CANVAS_HEIGHT / 2.0,
                },
            );
        }
        LayoutKind::Linear => linear(nodes, &mut positions),
        LayoutKind::Star => star(nodes, &mut positions),
        LayoutKind::Hierarchical => hierarchical(nodes, &mut positions),
        LayoutKind::Mesh => mesh(nodes, &mut positions),
        LayoutKind::Grid | LayoutKind::None => grid(nodes, &mut positions),
    }

    positions
}

fn linear(nodes: &[String], positions: &mut HashMap<String, Position>) {
    let spacing = CANVAS_WIDTH / 3.0;
    for (i, node) in nodes.iter().enumerate() {
        positions.insert(
            node.clone(),
            Position {
                x: spacing * (i as f64 + 1.0),
                y: CANVAS_HEIGHT / 2.0,
            },
        );
    }
}

/// First node at the center, the rest on a circle starting at the top.
fn star(nodes: &[String], positions: &mut HashMap<String, Position>) {
    let center_x = CANVAS_WIDTH / 2.0;
    let center_y = CANVAS_HEIGHT / 2.0;
    positions.insert(
        nodes[0].clone(),
        Position {
            x: center_x,
            y: center_y,
        },
    );
    if nodes.len() < 2 {
        return;
    }

    let radius = CANVAS_WIDTH.min(CANVAS_HEIGHT) / 3.0;
    let angle_step = 2.0 * PI / (nodes.len() - 1) as f64;
    for (i, node) in nodes.iter().enumerate().skip(1) {
        let angle = angle_step * (i as f64 - 1.0) - PI / 2.0;
        positions.insert(
            node.clone(),
            Position {
                x: center_x + radius * angle.cos(),
                y: center_y + radius * angle.sin(),
            },
        );
    }
}

/// Top-down levels of size `levels` each, `levels = ceil(sqrt(n))`.
fn hierarchical(nodes: &[String], positions: &mut HashMap<String, Position>) {
    let levels = (nodes.len() as f64).sqrt().ceil() as usize;
    let spacing = CANVAS_WIDTH / (levels + 1) as f64;
    let vertical_spacing = CANVAS_HEIGHT / (levels + 1) as f64;

    for (i, node) in nodes.iter().enumerate() {
        let level = i / levels;
        let pos_in_level = i % levels;
        positions.insert(
            node.clone(),
            Position {
                x: spacing * (pos_in_level as f64 + 1.0),
                y: vertical_spacing * (level as f64 + 1.0),
            },
        );
    }
}

/// Nodes on an ellipse, evenly spaced starting at the top.
fn mesh(nodes: &[String], positions: &mut HashMap<String, Position>) {
    let center_x = CANVAS_WIDTH / 2.0;
    let center_y = CANVAS_HEIGHT / 2.0;
    let radius_x = (CANVAS_WIDTH - CANVAS_MARGIN * 2.0) / 2.0;
    let radius_y = (CANVAS_HEIGHT - CANVAS_MARGIN * 2.0) / 2.0;
    let angle_step = 2.0 * PI / nodes.len() as f64;

    for (i, node) in nodes.iter().enumerate() {
        let angle = angle_step * i as f64 - PI / 2.0;
        positions.insert(
            node.clone(),
            Position {
                x: center_x + radius_x * angle.cos(),
                y: center_y + radius_y * angle.sin(),
            },
        );
    }
}

/// Fallback: nodes at the centers of a `ceil(sqrt(n))`-column grid.
fn grid(nodes: &[String], positions: &mut HashMap<String, Position>) {
    let cols = (nodes.len() as f64).sqrt().ceil() as usize;
    let cell_width = (CANVAS_WIDTH - CANVAS_MARGIN * 2.0) / cols as f64;
    let rows = nodes.len().div_ceil(cols);
    let cell_height = (CANVAS_HEIGHT - CANVAS_MARGIN * 2.0) / rows as f64;

    for (i, node) in nodes.iter().enumerate() {
        let col = i % cols;
        let row = i / cols;
        positions.insert(
            node.clone(),
            Position {
                x: CANVAS_MARGIN + cell_width * col as f64 + cell_width / 2.0,
                y: CANVAS_MARGIN + cell_height * row as f64 + cell_height / 2.0,
            },
        );
    }
}
