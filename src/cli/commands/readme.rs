//! Readme Command
//!
//! Sends the project summary to the documentation service and writes the
//! returned markdown to `README.md` at the project root (not the output
//! directory), after stripping a leading markdown code-fence marker.

use std::fs;
use std::path::PathBuf;

use crate::api::{DocService, HttpDocService};
use crate::cli::output::Output;
use crate::cli::util::resolve_root;
use crate::config::ConfigLoader;
use crate::storage;
use crate::types::Result;

pub async fn run(path: Option<PathBuf>) -> Result<()> {
    let root = resolve_root(path)?;
    let config = ConfigLoader::load(&root)?;
    let out = Output::new();

    let project_name = config.project_name(&root);
    let output_dir = root.join(&config.output.dir_name);
    let summary = storage::read_summary_value(&output_dir, &project_name)?;

    out.info("requesting README from the documentation service");
    let service = HttpDocService::new(&config.api)?;
    let markdown = service.readme(&summary).await?;

    let readme_path = root.join("README.md");
    fs::write(&readme_path, strip_markdown_fence(&markdown))?;

    out.success(&format!("README written to {}", readme_path.display()));
    Ok(())
}

/// Services occasionally wrap the document in a ```` ```markdown ```` fence;
/// drop the marker when it leads the text.
fn strip_markdown_fence(markdown: &str) -> String {
    let trimmed = markdown.trim();
    let stripped = trimmed.strip_prefix("```markdown").unwrap_or(trimmed);
    stripped.trim_start().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_leading_fence_marker() {
        assert_eq!(
            strip_markdown_fence("```markdown\n# Title\nbody\n"),
            "# Title\nbody"
        );
    }

    #[test]
    fn leaves_plain_markdown_alone() {
        assert_eq!(strip_markdown_fence("# Title\nbody\n"), "# Title\nbody");
    }

    #[test]
    fn fence_elsewhere_is_untouched() {
        let text = "# Title\n```markdown\nexample\n```\n";
        assert_eq!(strip_markdown_fence(text), text.trim());
    }
}
