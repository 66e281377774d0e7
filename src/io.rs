//! I/O helpers for problem text and JSON reports.
//!
//! - `read_problem`: read and parse the text input from a file or stdin.
//! - `write_json_file`: pretty-print a serializable value to disk.
use crate::input::{parse_problem, Problem};
use serde::Serialize;
use std::fs;
use std::io::Read;
use std::path::Path;

/// Read the problem from `path`, or from stdin when `path` is `None`.
pub fn read_problem(path: Option<&Path>) -> Result<Problem, String> {
    let text = match path {
        Some(path) => fs::read_to_string(path)
            .map_err(|e| format!("Failed to read input {}: {e}", path.display()))?,
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .map_err(|e| format!("Failed to read stdin: {e}"))?;
            text
        }
    };
    parse_problem(&text)
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| format!("Failed to serialize JSON for {}: {e}", path.display()))?;
    fs::write(path, json).map_err(|e| format!("Failed to write JSON {}: {e}", path.display()))
}

fn ensure_parent_dir(path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create {}: {e}", parent.display()))?;
        }
    }
    Ok(())
}
