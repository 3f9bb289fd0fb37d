//! Generate Command
//!
//! Walks the project, documents every eligible file through the cache gate,
//! and writes the aggregated project summary.

use std::path::PathBuf;
use std::sync::Arc;

use crate::api::HttpDocService;
use crate::cli::output::Output;
use crate::cli::util::resolve_root;
use crate::config::ConfigLoader;
use crate::pipeline::{CancelFlag, Pipeline, PipelineOutcome};
use crate::types::Result;

pub async fn run(path: Option<PathBuf>, cancel: CancelFlag) -> Result<()> {
    let root = resolve_root(path)?;
    let config = ConfigLoader::load(&root)?;
    let out = Output::new();

    let project_name = config.project_name(&root);
    out.header(&format!("Generating docs for {project_name}"));

    let service = Arc::new(HttpDocService::new(&config.api)?);
    let pipeline = Pipeline::new(&root, config, service);

    match pipeline.run(&cancel).await? {
        PipelineOutcome::Completed(report) => {
            out.success(&format!(
                "{} file(s) documented, {} served from cache",
                report.documented, report.cache_hits
            ));
            if report.failed > 0 {
                out.warning(&format!(
                    "{} file(s) failed and were skipped; re-run to retry them",
                    report.failed
                ));
            }
            out.info(&format!("project summary: {}", report.summary_path.display()));
        }
        PipelineOutcome::Cancelled => {
            out.info("documentation generation cancelled");
        }
        PipelineOutcome::Empty => {
            out.warning("no processable files found in the project");
        }
    }

    Ok(())
}
