//! Config Command
//!
//! Inspect the merged configuration and the file paths it resolves from.

use std::path::PathBuf;

use crate::cli::util::resolve_root;
use crate::config::ConfigLoader;
use crate::types::{Error, Result};

/// Print the merged configuration (`toml` by default, or `json`).
pub fn show(path: Option<PathBuf>, format: &str) -> Result<()> {
    let root = resolve_root(path)?;
    let config = ConfigLoader::load(&root)?;

    match format {
        "json" => println!("{}", serde_json::to_string_pretty(&config)?),
        "toml" => println!(
            "{}",
            toml::to_string_pretty(&config).map_err(|e| Error::Config(e.to_string()))?
        ),
        other => {
            return Err(Error::Config(format!(
                "unknown format {other:?} (expected toml or json)"
            )));
        }
    }
    Ok(())
}

/// Print resolved configuration file locations with existence markers.
pub fn path(path: Option<PathBuf>) -> Result<()> {
    let root = resolve_root(path)?;

    println!("Configuration paths:");
    println!();

    if let Some(global) = ConfigLoader::global_config_path() {
        let exists = if global.exists() { "✓" } else { "✗" };
        println!("  Global:  {} {}", exists, global.display());
    } else {
        println!("  Global:  (not available)");
    }

    let project = ConfigLoader::project_config_path(&root);
    let exists = if project.exists() { "✓" } else { "✗" };
    println!("  Project: {} {}", exists, project.display());

    Ok(())
}
