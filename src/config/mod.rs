//! JSON runtime configuration for the `grid-line-cover` binary.
//!
//! ```json
//! {
//!   "input_path": "ships.txt",
//!   "output": { "json_out": "out/report.json", "format": "both" },
//!   "solver": { "parallel": true, "min_parallel_blocks": 64, "collect_cover": true }
//! }
//! ```
//! Every field is optional; a missing `input_path` means stdin.
use crate::solver::SolverParams;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Print the bare answer only.
    #[default]
    Text,
    /// Print the report as JSON on stdout; `json_out` always goes to a file.
    Json,
    Both,
}

impl OutputFormat {
    pub fn includes_text(self) -> bool {
        matches!(self, OutputFormat::Text | OutputFormat::Both)
    }

    pub fn includes_json(self) -> bool {
        matches!(self, OutputFormat::Json | OutputFormat::Both)
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub json_out: Option<PathBuf>,
    pub format: OutputFormat,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct RuntimeConfig {
    pub input_path: Option<PathBuf>,
    pub output: OutputConfig,
    pub solver: SolverParams,
}

pub fn load_config(path: &Path) -> Result<RuntimeConfig, String> {
    let contents = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    parse_config(&contents).map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}

pub fn parse_config(contents: &str) -> Result<RuntimeConfig, String> {
    serde_json::from_str(contents).map_err(|e| e.to_string())
}
