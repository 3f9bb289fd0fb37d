//! Chart Command
//!
//! Merges the flowchart fragments collected in the project summary into one
//! project-level Mermaid flowchart via the documentation service, with its
//! own on-disk cache (`<project>_chart.json`). The Mermaid source is printed
//! to stdout for piping into a renderer.

use std::fs;
use std::path::PathBuf;

use serde_json::{Value, json};

use crate::api::{DocService, HttpDocService};
use crate::cli::output::Output;
use crate::cli::util::resolve_root;
use crate::config::ConfigLoader;
use crate::storage;
use crate::types::{Error, Result};

pub async fn run(path: Option<PathBuf>) -> Result<()> {
    let root = resolve_root(path)?;
    let config = ConfigLoader::load(&root)?;
    let out = Output::new();

    let project_name = config.project_name(&root);
    let output_dir = root.join(&config.output.dir_name);
    let summary = storage::read_summary_value(&output_dir, &project_name)?;
    let chart_path = output_dir.join(storage::chart_file_name(&project_name));

    let flowchart = match load_cached_chart(&chart_path) {
        Some(chart) => {
            out.info("loaded project flowchart from cache");
            chart
        }
        None => {
            let fragments = summary_fragments(&summary);
            if fragments.is_empty() {
                return Err(Error::EmptyResult { what: "flowchart" });
            }

            out.info("requesting merged flowchart from the documentation service");
            let service = HttpDocService::new(&config.api)?;
            let chart = service.merge_charts(&fragments).await?;

            fs::write(
                &chart_path,
                serde_json::to_string_pretty(&json!({ "flowchart": chart }))?,
            )?;
            out.success(&format!("chart cached at {}", chart_path.display()));
            chart
        }
    };

    println!("{flowchart}");
    Ok(())
}

/// A usable cached chart, or `None` when absent, unparsable, or blank
/// (regenerated in those cases).
fn load_cached_chart(chart_path: &std::path::Path) -> Option<String> {
    let raw = fs::read_to_string(chart_path).ok()?;
    let value: Value = serde_json::from_str(&raw).ok()?;
    value
        .get("flowchart")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|chart| !chart.is_empty())
        .map(str::to_string)
}

fn summary_fragments(summary: &Value) -> Vec<String> {
    summary
        .get("FlowChart")
        .and_then(Value::as_array)
        .map(|fragments| {
            fragments
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}
