//! Configuration Types
//!
//! All runtime policy (allow-listed extensions, deny-listed basenames, the
//! output directory name, service endpoint and pacing) lives in one
//! immutable [`Config`] that is resolved once per command invocation and
//! passed into the pipeline. Tests inject alternate policies by constructing
//! their own `Config`.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::constants;
use crate::types::{Error, Result};

/// Root configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Project-specific settings
    pub project: ProjectConfig,

    /// File enumeration settings
    pub scan: ScanConfig,

    /// Output layout settings
    pub output: OutputConfig,

    /// Documentation service settings
    pub api: ApiConfig,
}

impl Config {
    /// Validate configuration values are within acceptable ranges.
    pub fn validate(&self) -> Result<()> {
        if self.scan.allowed_extensions.is_empty() {
            return Err(Error::Config(
                "scan.allowed_extensions must not be empty".to_string(),
            ));
        }

        if self.output.dir_name.is_empty()
            || self.output.dir_name.contains('/')
            || self.output.dir_name.contains('\\')
        {
            return Err(Error::Config(format!(
                "output.dir_name must be a plain directory name, got {:?}",
                self.output.dir_name
            )));
        }

        if self.api.timeout_secs == 0 {
            return Err(Error::Config(
                "api.timeout_secs must be greater than 0".to_string(),
            ));
        }

        url::Url::parse(&self.api.base_url).map_err(|e| {
            Error::Config(format!("api.base_url {:?}: {}", self.api.base_url, e))
        })?;

        Ok(())
    }

    /// Resolve the project name: explicit config value, else the root
    /// directory's basename.
    pub fn project_name(&self, root: &Path) -> String {
        if let Some(name) = &self.project.name {
            return name.clone();
        }
        root.file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "project".to_string())
    }
}

// =============================================================================
// Project Configuration
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ProjectConfig {
    /// Project name (defaults to the root directory's basename)
    pub name: Option<String>,
}

// =============================================================================
// Scan Configuration
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    /// Extensions eligible for documentation (leading dot optional)
    pub allowed_extensions: Vec<String>,

    /// Basenames skipped during enumeration
    pub deny_files: Vec<String>,

    /// Ignore file consulted at the project root
    pub ignore_file: String,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            allowed_extensions: constants::scan::ALLOWED_EXTENSIONS
                .iter()
                .map(|e| e.to_string())
                .collect(),
            deny_files: constants::scan::DENY_FILES
                .iter()
                .map(|f| f.to_string())
                .collect(),
            ignore_file: constants::scan::DEFAULT_IGNORE_FILE.to_string(),
        }
    }
}

impl ScanConfig {
    /// Check a file extension (without dot) against the allow-list.
    pub fn allows_extension(&self, extension: &str) -> bool {
        self.allowed_extensions
            .iter()
            .any(|allowed| allowed.trim_start_matches('.').eq_ignore_ascii_case(extension))
    }

    /// Check a basename against the deny-list.
    pub fn is_denied(&self, basename: &str) -> bool {
        self.deny_files.iter().any(|denied| denied == basename)
    }
}

// =============================================================================
// Output Configuration
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Directory under the project root for cache entries and the summary
    pub dir_name: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir_name: constants::output::DIR_NAME.to_string(),
        }
    }
}

// =============================================================================
// Documentation Service Configuration
// =============================================================================

#[derive(Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL of the documentation service
    pub base_url: String,

    /// Bearer token for the service. Never serialized to output.
    #[serde(skip_serializing)]
    pub api_key: Option<String>,

    /// Request timeout in seconds
    pub timeout_secs: u64,

    /// Minimum spacing between successive service calls (milliseconds)
    pub delay_ms: u64,
}

impl std::fmt::Debug for ApiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("timeout_secs", &self.timeout_secs)
            .field("delay_ms", &self.delay_ms)
            .finish()
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: constants::api::DEFAULT_BASE_URL.to_string(),
            api_key: None,
            timeout_secs: constants::api::DEFAULT_TIMEOUT_SECS,
            delay_ms: constants::api::CALL_DELAY_MS,
        }
    }
}
