//! Global Constants
//!
//! Built-in defaults for scanning, output, and the documentation service.
//! These only seed [`crate::config::Config`]; runtime policy always comes
//! from the resolved configuration, never from this module directly.

/// File enumeration defaults
pub mod scan {
    /// Extensions eligible for documentation generation (no leading dot)
    pub const ALLOWED_EXTENSIONS: &[&str] = &[
        "tsx", "jsx", "ts", "js", "md", "py", "html", "c", "cpp", "java", "go", "sh",
    ];

    /// Basenames never sent to the service, regardless of extension
    pub const DENY_FILES: &[&str] = &["package-lock.json"];

    /// Ignore file consulted at the project root
    pub const DEFAULT_IGNORE_FILE: &str = ".gitignore";

    /// Patterns always ignored, in addition to the project ignore file.
    /// The output directory is appended separately since it is configurable.
    pub const BUILTIN_IGNORES: &[&str] = &[".git", "node_modules", ".vscode", ".DS_Store"];
}

/// Output layout defaults
pub mod output {
    /// Directory under the project root holding cache entries and the summary
    pub const DIR_NAME: &str = "auto-docs-output";
}

/// Documentation service defaults
pub mod api {
    /// Base URL of the documentation service
    pub const DEFAULT_BASE_URL: &str = "http://localhost:3000/api";

    /// Request timeout (seconds)
    pub const DEFAULT_TIMEOUT_SECS: u64 = 300;

    /// Minimum spacing between successive service calls (milliseconds).
    /// Pacing for the service's rate limits, not retry backoff.
    pub const CALL_DELAY_MS: u64 = 250;
}
