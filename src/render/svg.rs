// src/render/svg.rs
//! SVG drawing of a circular layout.

use std::collections::HashMap;
use std::fmt::Write;

use super::layout::{self, Canvas, Point};
use crate::graph::WordGraph;

const EDGE_COLOR: &str = "#1f4fd1";
const NODE_COLOR: &str = "#4682b4";
const ARROW_LENGTH: f64 = 12.0;
const ARROW_HALF_WIDTH: f64 = 5.0;

/// Reads the graph only through `nodes()` and `successors()`.
/// Draws every edge as an arrow with its weight at the midpoint, then every
/// node as a labelled disc on top.
#[must_use]
pub fn render(graph: &WordGraph, canvas: &Canvas) -> String {
    let placed = layout::circular(graph, canvas);
    let positions: HashMap<&str, Point> = placed.iter().copied().collect();
    let radius = f64::from(canvas.node_radius);

    let mut out = String::new();
    let _ = writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
        w = canvas.width,
        h = canvas.height
    );
    let _ = writeln!(out, r#"  <rect width="100%" height="100%" fill="white"/>"#);

    for (source, from) in &placed {
        for (target, weight) in graph.successors(source) {
            let Some(&to) = positions.get(target) else {
                continue;
            };
            if *source == target {
                draw_loop(&mut out, *from, radius, weight);
            } else {
                draw_arrow(&mut out, *from, to, radius, weight);
            }
        }
    }

    for (word, p) in &placed {
        let _ = writeln!(
            out,
            r#"  <circle cx="{:.1}" cy="{:.1}" r="{radius}" fill="{NODE_COLOR}"/>"#,
            p.x, p.y
        );
        let _ = writeln!(
            out,
            r#"  <text x="{:.1}" y="{:.1}" fill="white" font-size="12" text-anchor="middle" dominant-baseline="middle">{}</text>"#,
            p.x,
            p.y,
            escape(word)
        );
    }

    out.push_str("</svg>\n");
    out
}

fn draw_arrow(out: &mut String, from: Point, to: Point, radius: f64, weight: usize) {
    let angle = (to.y - from.y).atan2(to.x - from.x);
    let (sin, cos) = angle.sin_cos();

    // Tip stops at the target's rim.
    let tip = Point {
        x: to.x - radius * cos,
        y: to.y - radius * sin,
    };
    let base = Point {
        x: tip.x - ARROW_LENGTH * cos,
        y: tip.y - ARROW_LENGTH * sin,
    };
    let left = Point {
        x: base.x + ARROW_HALF_WIDTH * sin,
        y: base.y - ARROW_HALF_WIDTH * cos,
    };
    let right = Point {
        x: base.x - ARROW_HALF_WIDTH * sin,
        y: base.y + ARROW_HALF_WIDTH * cos,
    };

    let _ = writeln!(
        out,
        r#"  <line x1="{:.1}" y1="{:.1}" x2="{:.1}" y2="{:.1}" stroke="{EDGE_COLOR}" stroke-width="1.5"/>"#,
        from.x, from.y, base.x, base.y
    );
    let _ = writeln!(
        out,
        r#"  <polygon points="{:.1},{:.1} {:.1},{:.1} {:.1},{:.1}" fill="{EDGE_COLOR}"/>"#,
        tip.x, tip.y, left.x, left.y, right.x, right.y
    );
    let _ = writeln!(
        out,
        r#"  <text x="{:.1}" y="{:.1}" fill="{EDGE_COLOR}" font-size="11">{weight}</text>"#,
        (from.x + to.x) / 2.0,
        (from.y + to.y) / 2.0
    );
}

fn draw_loop(out: &mut String, at: Point, radius: f64, weight: usize) {
    let cy = at.y - radius * 1.5;
    let _ = writeln!(
        out,
        r#"  <circle cx="{:.1}" cy="{:.1}" r="{:.1}" fill="none" stroke="{EDGE_COLOR}" stroke-width="1.5"/>"#,
        at.x,
        cy,
        radius * 0.75
    );
    let _ = writeln!(
        out,
        r#"  <text x="{:.1}" y="{:.1}" fill="{EDGE_COLOR}" font-size="11">{weight}</text>"#,
        at.x + radius,
        cy - radius
    );
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
