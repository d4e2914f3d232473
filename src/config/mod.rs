use serde::Deserialize;
use std::path::PathBuf;

use crate::domain::Point;
use crate::output::OutputFormat;
use crate::planner::SearchConfig;

/// Grid defaults matching the 50x50 cell board the layouts are drawn on
pub mod grid {
    pub const GRID_WIDTH: u32 = 50;
    pub const GRID_HEIGHT: u32 = 50;
}

fn default_max_depth() -> usize {
    SearchConfig::default().max_depth
}
fn default_max_nodes() -> usize {
    SearchConfig::default().max_nodes
}
fn default_normalize_winding() -> bool {
    true
}
fn default_format() -> OutputFormat {
    OutputFormat::Text
}
fn default_grid_width() -> u32 {
    grid::GRID_WIDTH
}
fn default_grid_height() -> u32 {
    grid::GRID_HEIGHT
}
fn default_verbose() -> bool {
    false
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct FileConfig {
    #[serde(default)]
    pub scene: Option<PathBuf>,
    #[serde(default)]
    pub start: Option<Point>,
    #[serde(default)]
    pub end: Option<Point>,
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,
    #[serde(default = "default_max_nodes")]
    pub max_nodes: usize,
    #[serde(default = "default_normalize_winding")]
    pub normalize_winding: bool,
    #[serde(default = "default_format")]
    pub format: OutputFormat,
    #[serde(default)]
    pub output: Option<PathBuf>,
    #[serde(default)]
    pub grid: bool,
    #[serde(default = "default_grid_width")]
    pub grid_width: u32,
    #[serde(default = "default_grid_height")]
    pub grid_height: u32,
    #[serde(default = "default_verbose")]
    pub verbose: bool,
}

impl Default for FileConfig {
    fn default() -> Self {
        Self {
            scene: None,
            start: None,
            end: None,
            max_depth: default_max_depth(),
            max_nodes: default_max_nodes(),
            normalize_winding: default_normalize_winding(),
            format: default_format(),
            output: None,
            grid: false,
            grid_width: default_grid_width(),
            grid_height: default_grid_height(),
            verbose: default_verbose(),
        }
    }
}

impl FileConfig {
    /// First parseable config file from the well-known locations
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

    pub fn search_config(&self) -> SearchConfig {
        SearchConfig::default()
            .with_max_depth(self.max_depth)
            .with_max_nodes(self.max_nodes)
            .with_normalize_winding(self.normalize_winding)
    }
}

fn get_config_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();

    paths.push(PathBuf::from("tangentpath.toml"));
    paths.push(PathBuf::from(".tangentpath.toml"));

    if let Some(config_dir) = dirs::config_dir() {
        paths.push(config_dir.join("tangentpath").join("config.toml"));
        paths.push(config_dir.join("tangentpath.toml"));
    }

    if let Some(home) = dirs::home_dir() {
        paths.push(home.join(".tangentpath.toml"));
        paths.push(home.join(".config").join("tangentpath").join("config.toml"));
    }

    paths
}
