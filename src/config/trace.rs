use crate::extract::ExtractOptions;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Config for the `trace_image` demo: read a PNG, write the shapes found.
#[derive(Debug, Deserialize)]
pub struct TraceToolConfig {
    pub input: PathBuf,
    #[serde(default)]
    pub extract: ExtractOptions,
    pub output: TraceOutputConfig,
}

#[derive(Debug, Deserialize)]
pub struct TraceOutputConfig {
    pub shapes_json: PathBuf,
    /// Optional PNG of the recovered shapes drawn on a blank grid.
    #[serde(default)]
    pub redrawn_image: Option<PathBuf>,
}

pub fn load_config(path: &Path) -> Result<TraceToolConfig, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    serde_json::from_str(&data)
        .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}
