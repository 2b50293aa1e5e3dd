// src/config/mod.rs
pub mod types;

pub use self::types::{PageRankSection, Preferences, RenderSection, WalkSection, WordGraphToml};

use std::fs;
use std::path::Path;

use tracing::{debug, info};

use crate::error::{GraphError, Result};
use crate::graph::PageRankParams;
use crate::render::Canvas;

pub const DEFAULT_PATH: &str = "wordgraph.toml";

/// Resolved settings for one run.
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub toml: WordGraphToml,
}

impl Config {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads settings.
    ///
    /// An explicit `path` must exist. Without one, `wordgraph.toml` in the
    /// working directory is used if present and defaults otherwise.
    ///
    /// # Errors
    /// Returns error if the file cannot be read, is not valid TOML, or
    /// holds out-of-range values.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let (path, required) = match path {
            Some(p) => (p, true),
            None => (Path::new(DEFAULT_PATH), false),
        };

        if !required && !path.exists() {
            debug!("no {DEFAULT_PATH} found, using defaults");
            return Ok(Self::new());
        }

        let content = fs::read_to_string(path).map_err(|e| GraphError::io(e, path))?;
        let config = Self::parse_at(&content, path)?;
        info!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    /// Parses and validates TOML content.
    ///
    /// # Errors
    /// Returns error on invalid TOML or out-of-range values.
    pub fn parse(content: &str) -> Result<Self> {
        Self::parse_at(content, Path::new("<inline>"))
    }

    fn parse_at(content: &str, path: &Path) -> Result<Self> {
        let toml: WordGraphToml = toml::from_str(content).map_err(|source| GraphError::Config {
            source,
            path: path.to_path_buf(),
        })?;
        let config = Self { toml };
        config.validate()?;
        Ok(config)
    }

    /// Validates configuration.
    ///
    /// # Errors
    /// Returns [`GraphError::InvalidConfig`] naming the first bad value.
    pub fn validate(&self) -> Result<()> {
        let pr = &self.toml.pagerank;
        if !(0.0..=1.0).contains(&pr.damping) {
            return Err(GraphError::InvalidConfig(format!(
                "pagerank.damping must be within [0, 1], got {}",
                pr.damping
            )));
        }
        if pr.max_iterations == 0 {
            return Err(GraphError::InvalidConfig(
                "pagerank.max_iterations must be at least 1".to_string(),
            ));
        }
        if pr.tolerance.is_nan() || pr.tolerance < 0.0 {
            return Err(GraphError::InvalidConfig(format!(
                "pagerank.tolerance must be non-negative, got {}",
                pr.tolerance
            )));
        }
        let r = &self.toml.render;
        if r.width == 0 || r.height == 0 {
            return Err(GraphError::InvalidConfig(
                "render.width and render.height must be positive".to_string(),
            ));
        }
        Ok(())
    }

    #[must_use]
    pub fn pagerank(&self) -> PageRankParams {
        PageRankParams::from(&self.toml.pagerank)
    }

    #[must_use]
    pub fn canvas(&self) -> Canvas {
        Canvas::from(&self.toml.render)
    }

    #[must_use]
    pub fn seed(&self) -> Option<u64> {
        self.toml.walk.seed
    }

    #[must_use]
    pub fn color(&self) -> bool {
        self.toml.preferences.color
    }
}
