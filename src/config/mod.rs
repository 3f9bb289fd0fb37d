//! Configuration
//!
//! Immutable runtime policy resolved once per command invocation.

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{ApiConfig, Config, OutputConfig, ProjectConfig, ScanConfig};
