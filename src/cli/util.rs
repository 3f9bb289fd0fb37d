use std::fs;
use std::path::PathBuf;

use crate::types::Result;

/// Resolve the project root argument to an absolute path. Defaults to the
/// current directory so `config.project_name` always sees a real basename.
pub fn resolve_root(path: Option<PathBuf>) -> Result<PathBuf> {
    let root = path.unwrap_or_else(|| PathBuf::from("."));
    Ok(fs::canonicalize(root)?)
}
