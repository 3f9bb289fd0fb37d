//! Persistence Layer
//!
//! JSON blobs under the project's output directory with a deterministic
//! naming scheme: per-file cache entries (`<sanitized path>.json`), the
//! project summary (`<project>.json`), and the merged chart cache
//! (`<project>_chart.json`).

mod cache;

pub use cache::{ResponseCache, sanitize_path};

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::types::{Error, ProjectSummary, Result};

pub fn summary_file_name(project_name: &str) -> String {
    format!("{project_name}.json")
}

pub fn chart_file_name(project_name: &str) -> String {
    format!("{project_name}_chart.json")
}

/// Write the project summary. Returns the path written.
pub fn write_summary(
    output_dir: &Path,
    project_name: &str,
    summary: &ProjectSummary,
) -> Result<PathBuf> {
    let path = output_dir.join(summary_file_name(project_name));
    fs::write(&path, serde_json::to_string_pretty(summary)?)?;
    Ok(path)
}

/// Read the summary back as raw JSON for the project-level commands.
/// A missing file maps to [`Error::SummaryMissing`] with a user-facing hint.
pub fn read_summary_value(output_dir: &Path, project_name: &str) -> Result<Value> {
    let path = output_dir.join(summary_file_name(project_name));
    let raw = match fs::read_to_string(&path) {
        Ok(raw) => raw,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(Error::SummaryMissing { path });
        }
        Err(e) => return Err(e.into()),
    };
    Ok(serde_json::from_str(&raw)?)
}
