use serde::Deserialize;
use std::path::PathBuf;

use crate::raster::DEFAULT_MAX_CELLS;

fn default_max_cells() -> usize {
    DEFAULT_MAX_CELLS
}
fn default_hull() -> bool {
    true
}
fn default_all_regions() -> bool {
    false
}
fn default_verbose() -> bool {
    false
}

/// Settings read from `hulltrace.toml`; command-line flags take precedence
#[derive(Debug, Deserialize)]
pub struct FileConfig {
    #[serde(default)]
    pub step: Option<f64>,
    #[serde(default)]
    pub padding: Option<f64>,
    #[serde(default = "default_all_regions")]
    pub all_regions: bool,
    #[serde(default)]
    pub simplify: Option<f64>,
    #[serde(default = "default_hull")]
    pub hull: bool,
    #[serde(default = "default_max_cells")]
    pub max_cells: usize,
    #[serde(default = "default_verbose")]
    pub verbose: bool,
}

impl Default for FileConfig {
    fn default() -> Self {
        Self {
            step: None,
            padding: None,
            all_regions: default_all_regions(),
            simplify: None,
            hull: default_hull(),
            max_cells: default_max_cells(),
            verbose: default_verbose(),
        }
    }
}

impl FileConfig {
    pub fn load() -> Option<Self> {
        let config_paths = get_config_paths();

        for path in config_paths {
            if path.exists()
                && let Ok(contents) = std::fs::read_to_string(&path)
            {
                match toml::from_str(&contents) {
                    Ok(config) => return Some(config),
                    Err(e) => {
                        eprintln!("Warning: Failed to parse config file {:?}: {}", path, e);
                    }
                }
            }
        }
        None
    }
}

fn get_config_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();

    paths.push(PathBuf::from("hulltrace.toml"));
    paths.push(PathBuf::from(".hulltrace.toml"));

    if let Some(config_dir) = dirs::config_dir() {
        paths.push(config_dir.join("hulltrace").join("config.toml"));
        paths.push(config_dir.join("hulltrace.toml"));
    }

    if let Some(home) = dirs::home_dir() {
        paths.push(home.join(".hulltrace.toml"));
        paths.push(home.join(".config").join("hulltrace").join("config.toml"));
    }

    paths
}
