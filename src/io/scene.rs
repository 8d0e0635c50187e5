use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

use crate::domain::Polygon;
use crate::geometry::convex_hull;

/// Objects whose projected points make up the silhouettes
#[derive(Debug, Deserialize, Default)]
pub struct Scene {
    #[serde(default)]
    pub objects: Vec<SceneObject>,
}

#[derive(Debug, Deserialize)]
pub struct SceneObject {
    #[serde(default)]
    pub name: Option<String>,
    /// Projected points as (x, y) pairs in screen space
    pub points: Vec<(f64, f64)>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneFormat {
    Json,
    Toml,
}

impl SceneFormat {
    /// Pick a format from the file extension, defaulting to JSON
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => SceneFormat::Toml,
            _ => SceneFormat::Json,
        }
    }
}

impl Scene {
    pub fn parse(contents: &str, format: SceneFormat) -> Result<Self> {
        match format {
            SceneFormat::Json => {
                serde_json::from_str(contents).context("Failed to parse JSON scene")
            }
            SceneFormat::Toml => toml::from_str(contents).context("Failed to parse TOML scene"),
        }
    }

    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read scene file: {}", path.display()))?;
        Self::parse(&contents, SceneFormat::from_path(path))
    }

    /// Convex silhouettes of every object.
    ///
    /// With `hull` set each object's points are wrapped in their convex hull;
    /// otherwise they are taken as an already-convex ring. Objects that do not
    /// yield a valid polygon are skipped.
    pub fn silhouettes(&self, hull: bool) -> Vec<Polygon> {
        self.objects
            .iter()
            .filter_map(|object| {
                if hull {
                    convex_hull(&object.points)
                } else {
                    Some(Polygon::new(object.points.clone()))
                }
            })
            .filter(|polygon| polygon.is_valid())
            .collect()
    }
}
