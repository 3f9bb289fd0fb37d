//! Documentation Service Abstraction
//!
//! The remote service is opaque: three JSON-over-HTTP operations, nothing
//! else. [`DocService`] is the seam the pipeline and commands talk through;
//! [`HttpDocService`] is the production implementation. Tests substitute
//! their own impls to observe or suppress calls.

mod http;

pub use http::HttpDocService;

use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;

use crate::types::Result;

/// Shared service handle used across the pipeline and commands.
pub type SharedDocService = Arc<dyn DocService>;

#[async_trait]
pub trait DocService: Send + Sync {
    /// Per-file documentation request. Returns the raw response body; the
    /// caller persists it verbatim and interprets it leniently.
    async fn document(&self, code: &str) -> Result<Value>;

    /// Merge collected flowchart fragments into one project flowchart.
    async fn merge_charts(&self, flowcharts: &[String]) -> Result<String>;

    /// Generate README markdown from a full project summary.
    async fn readme(&self, summary: &Value) -> Result<String>;
}
