// src/config/types.rs
use serde::{Deserialize, Serialize};

use crate::graph::PageRankParams;
use crate::render::Canvas;

/// Shape of `wordgraph.toml`. Every section and key is optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WordGraphToml {
    #[serde(default)]
    pub pagerank: PageRankSection,
    #[serde(default)]
    pub walk: WalkSection,
    #[serde(default)]
    pub render: RenderSection,
    #[serde(default)]
    pub preferences: Preferences,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageRankSection {
    #[serde(default = "default_damping")]
    pub damping: f64,
    #[serde(default = "default_max_iterations")]
    pub max_iterations: usize,
    #[serde(default = "default_tolerance")]
    pub tolerance: f64,
}

impl Default for PageRankSection {
    fn default() -> Self {
        Self {
            damping: default_damping(),
            max_iterations: default_max_iterations(),
            tolerance: default_tolerance(),
        }
    }
}

impl From<&PageRankSection> for PageRankParams {
    fn from(section: &PageRankSection) -> Self {
        Self {
            damping: section.damping,
            max_iterations: section.max_iterations,
            tolerance: section.tolerance,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WalkSection {
    /// Fixed seed for generation and walks; entropy when absent.
    #[serde(default)]
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderSection {
    #[serde(default = "default_width")]
    pub width: u32,
    #[serde(default = "default_height")]
    pub height: u32,
    #[serde(default = "default_node_radius")]
    pub node_radius: u32,
}

impl Default for RenderSection {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            node_radius: default_node_radius(),
        }
    }
}

impl From<&RenderSection> for Canvas {
    fn from(section: &RenderSection) -> Self {
        Self {
            width: section.width,
            height: section.height,
            node_radius: section.node_radius,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Preferences {
    #[serde(default = "default_color")]
    pub color: bool,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            color: default_color(),
        }
    }
}

fn default_damping() -> f64 { crate::graph::pagerank::DAMPING }
fn default_max_iterations() -> usize { crate::graph::pagerank::MAX_ITERATIONS }
fn default_tolerance() -> f64 { crate::graph::pagerank::TOLERANCE }
fn default_width() -> u32 { Canvas::default().width }
fn default_height() -> u32 { Canvas::default().height }
fn default_node_radius() -> u32 { Canvas::default().node_radius }
fn default_color() -> bool { true }
