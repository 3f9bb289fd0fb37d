//! Unified Error Type System
//!
//! One error type for the whole application, with variants split by how they
//! are recovered:
//!
//! - **Per-file**: `ExternalCall` and `FileRead` are reported for the file
//!   that produced them and the run continues.
//! - **Per-command**: everything else aborts the current command with a
//!   user-facing message.
//!
//! Cancellation is not an error; it is a clean stop on the `Ok` path.
//! No variant carries retry hints: the tool never retries, the fixed
//! inter-call delay is pacing only.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    // -------------------------------------------------------------------------
    // System Errors (auto From impl)
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    /// Ignore file exists at the project root but could not be read.
    #[error("cannot read ignore file {}: {message}", path.display())]
    ConfigRead { path: PathBuf, message: String },

    #[error("config error: {0}")]
    Config(String),

    // -------------------------------------------------------------------------
    // Per-File Errors (recovered locally, never abort the run)
    // -------------------------------------------------------------------------
    /// A single file could not be read or decoded during enumeration.
    #[error("cannot read {path}: {message}")]
    FileRead { path: String, message: String },

    /// A documentation service request failed (network, non-2xx, bad body).
    #[error("documentation service request failed{}: {message}", fmt_status(.status))]
    ExternalCall { status: Option<u16>, message: String },

    // -------------------------------------------------------------------------
    // Whole-Project Operation Errors
    // -------------------------------------------------------------------------
    /// The service answered but produced no usable content.
    #[error("documentation service returned no usable {what}")]
    EmptyResult { what: &'static str },

    /// A downstream command was run before `generate` produced a summary.
    #[error("project summary not found at {}: run 'autodocs generate' first", path.display())]
    SummaryMissing { path: PathBuf },
}

fn fmt_status(status: &Option<u16>) -> String {
    match status {
        Some(code) => format!(" ({code})"),
        None => String::new(),
    }
}

impl Error {
    /// Create an external-call error without an HTTP status (transport-level).
    pub fn external(message: impl Into<String>) -> Self {
        Self::ExternalCall {
            status: None,
            message: message.into(),
        }
    }

    /// Create an external-call error from an HTTP status and response body.
    pub fn external_status(status: u16, message: impl Into<String>) -> Self {
        Self::ExternalCall {
            status: Some(status),
            message: message.into(),
        }
    }

    /// Errors recovered at per-file granularity in the generation loop.
    pub fn is_per_file(&self) -> bool {
        matches!(self, Self::ExternalCall { .. } | Self::FileRead { .. })
    }
}

pub type Result<T> = std::result::Result<T, Error>;
