//! Project-Level Data Model
//!
//! Types produced by the tree walker and the aggregator. All of them are
//! built once per run and never mutated afterwards.

use serde::{Deserialize, Serialize};

use super::response::DocEntry;

/// A source file selected for documentation.
///
/// `relative_path` is always forward-slash separated, independent of the host
/// platform, so cache names and ignore matching behave identically everywhere.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectFile {
    pub relative_path: String,
    pub content: String,
}

/// One node of the filtered project tree.
///
/// Serialized with a `type` discriminant of `"directory"` or `"file"`.
/// Children appear in the order the filesystem listing returned them, which
/// is platform-dependent; no sort order is imposed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum DirectoryNode {
    Directory {
        name: String,
        children: Vec<DirectoryNode>,
    },
    File {
        name: String,
    },
}

impl DirectoryNode {
    pub fn name(&self) -> &str {
        match self {
            Self::Directory { name, .. } | Self::File { name } => name,
        }
    }

    /// Total number of file leaves in this subtree.
    pub fn file_count(&self) -> usize {
        match self {
            Self::File { .. } => 1,
            Self::Directory { children, .. } => children.iter().map(Self::file_count).sum(),
        }
    }
}

/// Terminal artifact of a generation run.
///
/// Field order is fixed; downstream renderers rely on the written file
/// leading with the directory structure.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProjectSummary {
    #[serde(rename = "directoryStructure")]
    pub directory_structure: DirectoryNode,

    #[serde(rename = "Document")]
    pub document: Vec<DocEntry>,

    pub techstack: Vec<String>,

    #[serde(rename = "FlowChart")]
    pub flow_chart: Vec<String>,
}
