// src/render/mod.rs
//! Read-only consumers of a [`WordGraph`](crate::graph::WordGraph):
//! edge listings, circular layouts and drawings.

pub mod dot;
pub mod layout;
pub mod svg;
pub mod text;

use clap::ValueEnum;
use std::fs;
use std::path::Path;

use crate::error::{GraphError, Result};
use crate::graph::WordGraph;
pub use layout::{Canvas, Point};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum RenderFormat {
    #[default]
    Svg,
    Dot,
}

impl RenderFormat {
    /// Guesses the format from a file extension, falling back to SVG.
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("dot") || ext.eq_ignore_ascii_case("gv") => {
                Self::Dot
            }
            _ => Self::Svg,
        }
    }
}

/// Renders `graph` in `format`.
#[must_use]
pub fn render(graph: &WordGraph, format: RenderFormat, canvas: &Canvas) -> String {
    match format {
        RenderFormat::Svg => svg::render(graph, canvas),
        RenderFormat::Dot => dot::render(graph),
    }
}

/// Renders `graph` and writes it to `path`.
///
/// # Errors
/// Returns [`GraphError::Io`] if the file cannot be written.
pub fn write_to(
    graph: &WordGraph,
    format: RenderFormat,
    canvas: &Canvas,
    path: &Path,
) -> Result<()> {
    let content = render(graph, format, canvas);
    fs::write(path, content).map_err(|e| GraphError::io(e, path))
}
