//! autodocs - AI-Driven Project Documentation Generator
//!
//! Walks a project's file tree, sends each eligible file to a remote
//! documentation service, caches per-file JSON responses on disk, and folds
//! them into a single project summary. Companion commands turn the summary
//! into a merged project flowchart and a generated `README.md`.
//!
//! ## Core Behavior
//!
//! - **Ignore-aware enumeration**: project ignore file plus built-in
//!   defaults, evaluated against forward-slash relative paths on every
//!   platform
//! - **Per-file cache gate**: one JSON entry per source file, reused forever
//!   until explicitly invalidated
//! - **Paced sequential calls**: a fixed delay between service requests, no
//!   parallel fan-out, no retries
//! - **Lenient aggregation**: responses missing fields, or carrying the
//!   legacy single-string `FlowChart` shape, fold cleanly into the summary
//!
//! ## Modules
//!
//! - [`scanner`]: ignore rules and the depth-first tree walker
//! - [`storage`]: response cache and summary persistence
//! - [`api`]: documentation service seam and HTTP client
//! - [`pipeline`]: sequential orchestration and aggregation
//! - [`config`]: figment-merged immutable configuration
//! - [`cli`]: subcommand implementations

pub mod api;
pub mod cli;
pub mod config;
pub mod constants;
pub mod pipeline;
pub mod scanner;
pub mod storage;
pub mod types;

// =============================================================================
// Core Re-exports
// =============================================================================

pub use config::{Config, ConfigLoader};
pub use types::{Error, Result};

pub use api::{DocService, HttpDocService, SharedDocService};
pub use pipeline::{CancelFlag, Pipeline, PipelineOutcome, PipelineReport, aggregate};
pub use scanner::{IgnoreRules, build_directory_tree, list_files};
pub use storage::{ResponseCache, sanitize_path};
pub use types::{DirectoryNode, DocEntry, DocumentationResponse, FlowChart, ProjectFile, ProjectSummary};
