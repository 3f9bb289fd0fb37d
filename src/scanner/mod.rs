//! Project Scanner
//!
//! Ignore-rule compilation and the depth-first tree walker.

mod ignore_rules;
mod walker;

pub use ignore_rules::IgnoreRules;
pub use walker::{build_directory_tree, list_files};
