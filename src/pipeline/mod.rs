//! Generation Pipeline
//!
//! Sequential per-file orchestration: enumerate eligible files, gate each one
//! through the response cache, call the documentation service on a miss with
//! a fixed pacing delay between calls, then fold everything into the project
//! summary and persist it.
//!
//! Files are processed one at a time; the pacing delay is rate-limit
//! courtesy toward the service, not retry backoff. Cancellation is checked
//! at every loop-iteration boundary and before aggregation: a cancelled run
//! writes no summary, but cache entries persisted before the stop remain
//! valid for the next run.

mod aggregate;

pub use aggregate::aggregate;

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use tracing::{info, warn};

use crate::api::SharedDocService;
use crate::config::Config;
use crate::scanner::{IgnoreRules, build_directory_tree, list_files};
use crate::storage::{self, ResponseCache};
use crate::types::{DocumentationResponse, Result};

/// Cooperative cancellation flag, set from a Ctrl-C handler.
#[derive(Debug, Clone, Default)]
pub struct CancelFlag(Arc<AtomicBool>);

impl CancelFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

/// How a run ended.
#[derive(Debug)]
pub enum PipelineOutcome {
    /// Summary written; counters describe the per-file loop.
    Completed(PipelineReport),
    /// Stopped on user request before the summary was written.
    Cancelled,
    /// No processable files found; nothing written.
    Empty,
}

#[derive(Debug)]
pub struct PipelineReport {
    /// Files answered by a fresh service call
    pub documented: usize,
    /// Files answered from the cache
    pub cache_hits: usize,
    /// Files whose service call failed (skipped, run continued)
    pub failed: usize,
    pub summary_path: PathBuf,
}

pub struct Pipeline {
    root: PathBuf,
    config: Config,
    service: SharedDocService,
    cache: ResponseCache,
}

impl Pipeline {
    pub fn new(root: impl Into<PathBuf>, config: Config, service: SharedDocService) -> Self {
        let root = root.into();
        let cache = ResponseCache::new(root.join(&config.output.dir_name));
        Self {
            root,
            config,
            service,
            cache,
        }
    }

    /// Output directory the cache and summary land in.
    pub fn output_dir(&self) -> &Path {
        self.cache.dir()
    }

    /// Run the full generation pass.
    pub async fn run(&self, cancel: &CancelFlag) -> Result<PipelineOutcome> {
        let rules = IgnoreRules::build(&self.root, &self.config)?;
        let files = list_files(&self.root, &rules, &self.config.scan)?;

        if files.is_empty() {
            warn!("no processable files found in {}", self.root.display());
            return Ok(PipelineOutcome::Empty);
        }

        self.cache.ensure_dir()?;

        let total = files.len();
        let mut responses = Vec::with_capacity(total);
        let mut documented = 0;
        let mut cache_hits = 0;
        let mut failed = 0;

        for (index, file) in files.iter().enumerate() {
            if cancel.is_cancelled() {
                info!("generation cancelled after {index}/{total} files");
                return Ok(PipelineOutcome::Cancelled);
            }

            if let Some(cached) = self.cache.try_load(&file.relative_path) {
                cache_hits += 1;
                responses.push(cached);
                continue;
            }

            info!("({}/{total}) documenting {}", index + 1, file.relative_path);
            match self.service.document(&file.content).await {
                Ok(response) => {
                    self.cache.store(&file.relative_path, &response)?;
                    responses.push(response);
                    documented += 1;
                }
                Err(err) if err.is_per_file() => {
                    warn!("failed to process {}: {err}", file.relative_path);
                    failed += 1;
                }
                Err(err) => return Err(err),
            }

            tokio::time::sleep(Duration::from_millis(self.config.api.delay_ms)).await;
        }

        if cancel.is_cancelled() {
            info!("generation cancelled before aggregation");
            return Ok(PipelineOutcome::Cancelled);
        }

        let directory_structure = build_directory_tree(&self.root, &rules)?;
        let parsed: Vec<DocumentationResponse> = responses
            .iter()
            .map(DocumentationResponse::from_value)
            .collect();
        let summary = aggregate(directory_structure, &parsed);

        let project_name = self.config.project_name(&self.root);
        let summary_path = storage::write_summary(self.cache.dir(), &project_name, &summary)?;
        info!("project summary written to {}", summary_path.display());

        Ok(PipelineOutcome::Completed(PipelineReport {
            documented,
            cache_hits,
            failed,
            summary_path,
        }))
    }
}
