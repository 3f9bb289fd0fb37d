//! Tree Walker
//!
//! Depth-first, pre-order enumeration of a project directory with two views
//! sharing the same traversal shape:
//!
//! - [`list_files`] yields the flat list of files eligible for documentation
//!   (ignore rules, deny-list, extension allow-list, non-empty text content).
//! - [`build_directory_tree`] yields the structural tree: every non-ignored
//!   directory and file, with no extension filtering.
//!
//! Children are visited in the order the filesystem listing returns them; no
//! sort order is imposed, so structural output order is platform-dependent.
//! A directory that cannot be listed or an entry whose metadata cannot be
//! read is fatal for the traversal. A file whose *content* cannot be decoded
//! only skips that file.

use std::fs;
use std::path::Path;

use tracing::warn;

use crate::config::ScanConfig;
use crate::types::{DirectoryNode, Error, ProjectFile, Result};

use super::ignore_rules::IgnoreRules;

/// Enumerate all files eligible for documentation generation.
pub fn list_files(root: &Path, rules: &IgnoreRules, scan: &ScanConfig) -> Result<Vec<ProjectFile>> {
    let mut files = Vec::new();
    collect_files(root, root, rules, scan, &mut files)?;
    Ok(files)
}

fn collect_files(
    dir: &Path,
    root: &Path,
    rules: &IgnoreRules,
    scan: &ScanConfig,
    out: &mut Vec<ProjectFile>,
) -> Result<()> {
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        let relative = relative_posix(root, &path);

        let basename = entry.file_name().to_string_lossy().into_owned();

        // follows symlinks, like the traversal itself
        let metadata = fs::metadata(&path)?;
        if rules.is_ignored(&relative, metadata.is_dir()) || scan.is_denied(&basename) {
            continue;
        }

        if metadata.is_dir() {
            collect_files(&path, root, rules, scan, out)?;
            continue;
        }
        if !metadata.is_file() {
            continue;
        }

        let extension = path
            .extension()
            .map(|e| e.to_string_lossy().into_owned())
            .unwrap_or_default();
        if !scan.allows_extension(&extension) {
            continue;
        }

        match fs::read_to_string(&path) {
            Ok(content) if content.trim().is_empty() => {
                warn!("skipping empty file: {relative}");
            }
            Ok(content) => out.push(ProjectFile {
                relative_path: relative,
                content,
            }),
            Err(e) => {
                let err = Error::FileRead {
                    path: relative,
                    message: e.to_string(),
                };
                warn!("{err}");
            }
        }
    }
    Ok(())
}

/// Build the structural tree of every non-ignored directory and file.
pub fn build_directory_tree(root: &Path, rules: &IgnoreRules) -> Result<DirectoryNode> {
    build_node(root, root, rules)
}

fn build_node(dir: &Path, root: &Path, rules: &IgnoreRules) -> Result<DirectoryNode> {
    let name = dir
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| dir.display().to_string());

    let mut children = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        let relative = relative_posix(root, &path);

        let metadata = fs::metadata(&path)?;
        if rules.is_ignored(&relative, metadata.is_dir()) {
            continue;
        }

        if metadata.is_dir() {
            children.push(build_node(&path, root, rules)?);
        } else {
            children.push(DirectoryNode::File {
                name: entry.file_name().to_string_lossy().into_owned(),
            });
        }
    }

    Ok(DirectoryNode::Directory { name, children })
}

/// Project-relative path with forward-slash separators.
fn relative_posix(root: &Path, path: &Path) -> String {
    let relative = path.strip_prefix(root).unwrap_or(path);
    relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
