//! Clean Command
//!
//! The cache never expires on its own, so this is the only way stale
//! documentation gets refreshed: remove the whole output directory, clear
//! every cached entry, or invalidate a single file's entry.

use std::fs;
use std::path::PathBuf;

use crate::cli::output::Output;
use crate::cli::util::resolve_root;
use crate::config::ConfigLoader;
use crate::storage::ResponseCache;
use crate::types::Result;

pub fn run(path: Option<PathBuf>, all: bool, file: Option<String>) -> Result<()> {
    let root = resolve_root(path)?;
    let config = ConfigLoader::load(&root)?;
    let out = Output::new();

    let output_dir = root.join(&config.output.dir_name);

    if all {
        if output_dir.exists() {
            fs::remove_dir_all(&output_dir)?;
            out.success(&format!("removed {}", output_dir.display()));
        } else {
            out.info("nothing to clean");
        }
        return Ok(());
    }

    let cache = ResponseCache::new(&output_dir);

    if let Some(relative) = file {
        if cache.invalidate(&relative)? {
            out.success(&format!("invalidated cache entry for {relative}"));
        } else {
            out.info(&format!("no cache entry for {relative}"));
        }
        return Ok(());
    }

    let cleared = cache.clear()?;
    if cleared > 0 {
        out.success(&format!("cleared {cleared} cache entries"));
    } else {
        out.info("no cache entries to clear");
    }
    Ok(())
}
