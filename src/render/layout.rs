// src/render/layout.rs
//! Circular node placement.

use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;

use crate::graph::WordGraph;

const MAX_RADIUS: f64 = 300.0;
const BASE_RADIUS: f64 = 200.0;
const RADIUS_PER_NODE: f64 = 10.0;

/// Drawing surface dimensions, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Canvas {
    pub width: u32,
    pub height: u32,
    pub node_radius: u32,
}

impl Default for Canvas {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            node_radius: 20,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Places nodes, in sorted order, evenly on a circle around the canvas centre.
/// The circle grows with the node count up to a fixed cap.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn circular<'g>(graph: &'g WordGraph, canvas: &Canvas) -> Vec<(&'g str, Point)> {
    let nodes = graph.nodes();
    if nodes.is_empty() {
        return Vec::new();
    }

    let n = nodes.len() as f64;
    let cx = f64::from(canvas.width) / 2.0;
    let cy = f64::from(canvas.height) / 2.0;
    let radius = MAX_RADIUS.min(BASE_RADIUS + n * RADIUS_PER_NODE);
    let step = TAU / n;

    nodes
        .into_iter()
        .enumerate()
        .map(|(i, word)| {
            let theta = i as f64 * step;
            let point = Point {
                x: cx + radius * theta.cos(),
                y: cy + radius * theta.sin(),
            };
            (word, point)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_node_sits_at_angle_zero() {
        let mut g = WordGraph::new();
        g.add_edge("a", "b");
        let placed = circular(&g, &Canvas::default());
        assert_eq!(placed[0].0, "a");
        // two nodes: radius = min(300, 220) = 220
        assert!((placed[0].1.x - 620.0).abs() < 1e-9);
        assert!((placed[0].1.y - 300.0).abs() < 1e-9);
        assert!((placed[1].1.x - 180.0).abs() < 1e-9);
    }

    #[test]
    fn radius_is_capped() {
        let mut g = WordGraph::new();
        for i in 0..20 {
            g.add_node(&format!("w{i:02}"));
        }
        let canvas = Canvas::default();
        for (_, p) in circular(&g, &canvas) {
            let r = ((p.x - 400.0).powi(2) + (p.y - 300.0).powi(2)).sqrt();
            assert!((r - 300.0).abs() < 1e-9);
        }
    }
}
