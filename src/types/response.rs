//! Documentation Service Response Contract
//!
//! The service's per-file response is a loose JSON object: every field is
//! optional, `FlowChart` has shipped both as a single string and as an array
//! of strings, and fields of an unexpected type must be treated as absent
//! rather than failing the whole file. Deserialization is therefore lenient:
//! a field that does not match its expected shape simply becomes `None`.
//!
//! The raw response body is persisted to the cache verbatim (as
//! `serde_json::Value`); this typed view is only built when folding responses
//! into the project summary.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Per-file response from the documentation service.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct DocumentationResponse {
    /// Regenerated file content. Kept in the cache entry only; never written
    /// back into the source tree.
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,

    #[serde(
        rename = "Document",
        default,
        deserialize_with = "lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub document: Option<Vec<DocEntry>>,

    #[serde(
        rename = "FlowChart",
        default,
        deserialize_with = "lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub flow_chart: Option<FlowChart>,

    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub techstack: Option<Vec<String>>,
}

impl DocumentationResponse {
    /// Lenient view over a raw cached/received body. A body that is not even
    /// a JSON object contributes nothing to the aggregate.
    pub fn from_value(value: &Value) -> Self {
        serde_json::from_value(value.clone()).unwrap_or_default()
    }
}

/// One documented function. Unknown fields the service attaches are carried
/// through untouched so cache entries and summaries stay faithful to the wire.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct DocEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub function: Option<String>,

    #[serde(rename = "DocString", default, skip_serializing_if = "Option::is_none")]
    pub doc_string: Option<String>,

    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

/// `FlowChart` has two historical wire shapes; both must parse.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum FlowChart {
    Single(String),
    Many(Vec<String>),
}

impl FlowChart {
    /// Normalize to the canonical sequence-of-fragments representation.
    pub fn fragments(&self) -> Vec<String> {
        match self {
            Self::Single(chart) => vec![chart.clone()],
            Self::Many(charts) => charts.clone(),
        }
    }
}

/// Deserialize a field if it matches the expected shape, otherwise `None`.
fn lenient<'de, D, T>(deserializer: D) -> std::result::Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}
