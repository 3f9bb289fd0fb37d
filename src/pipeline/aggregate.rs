//! Response Aggregator
//!
//! Pure fold of per-file responses, in file-processing order, into the
//! project summary. No I/O, no mutation of inputs.

use crate::types::{DirectoryNode, DocumentationResponse, ProjectSummary};

/// Fold an ordered sequence of responses into one summary.
///
/// - `Document` entries are appended in order.
/// - `techstack` values are deduplicated, first-seen order preserved.
/// - `FlowChart` fragments are flattened, whichever wire shape they arrived in.
/// - A response missing any field contributes nothing for that field.
pub fn aggregate(
    directory_structure: DirectoryNode,
    responses: &[DocumentationResponse],
) -> ProjectSummary {
    let mut document = Vec::new();
    let mut techstack: Vec<String> = Vec::new();
    let mut flow_chart = Vec::new();

    for response in responses {
        if let Some(entries) = &response.document {
            document.extend(entries.iter().cloned());
        }
        if let Some(stack) = &response.techstack {
            for tech in stack {
                if !techstack.contains(tech) {
                    techstack.push(tech.clone());
                }
            }
        }
        if let Some(chart) = &response.flow_chart {
            flow_chart.extend(chart.fragments());
        }
    }

    ProjectSummary {
        directory_structure,
        document,
        techstack,
        flow_chart,
    }
}
