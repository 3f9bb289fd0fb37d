//! Per-File Response Cache
//!
//! A directory-backed map from sanitized relative path to the raw JSON body
//! the documentation service returned for that file. Entries are never
//! expired automatically: a cached response is reused forever unless
//! explicitly invalidated. That is a deliberate cost tradeoff given the
//! expense of the remote call, and it means edits to a source file do NOT
//! refresh its documentation until the entry is removed (`autodocs clean`).
//!
//! Known limitation: sanitization is not injective. Distinct relative paths
//! such as `a/b.js` and `a_b.js` map to the same entry name. No
//! canonicalization scheme is applied; the collision is accepted and
//! documented rather than silently "fixed".

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::{debug, warn};

use crate::types::Result;

/// Map a relative path to its cache entry name: every path separator becomes
/// an underscore, then `.json` is appended. Deterministic and independent of
/// the host separator convention.
pub fn sanitize_path(relative_path: &str) -> String {
    let mut name: String = relative_path
        .chars()
        .map(|c| if c == '/' || c == '\\' { '_' } else { c })
        .collect();
    name.push_str(".json");
    name
}

pub struct ResponseCache {
    dir: PathBuf,
}

impl ResponseCache {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Output directory holding the entries (and the project summary).
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn ensure_dir(&self) -> Result<()> {
        fs::create_dir_all(&self.dir)?;
        Ok(())
    }

    /// On-disk path of the entry for a relative source path.
    pub fn entry_path(&self, relative_path: &str) -> PathBuf {
        self.dir.join(sanitize_path(relative_path))
    }

    /// Load a previously persisted response. `None` means the caller must
    /// call the service. A present-but-corrupt entry logs a warning and acts
    /// as a miss so it gets refetched and overwritten.
    pub fn try_load(&self, relative_path: &str) -> Option<Value> {
        let path = self.entry_path(relative_path);
        let raw = match fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return None,
            Err(e) => {
                warn!("cannot read cache entry {}: {e}", path.display());
                return None;
            }
        };

        match serde_json::from_str(&raw) {
            Ok(value) => {
                debug!("using cached response for {relative_path}");
                Some(value)
            }
            Err(e) => {
                warn!("corrupt cache entry {}: {e}; will refetch", path.display());
                None
            }
        }
    }

    /// Persist a response verbatim, before it is folded into the aggregate.
    pub fn store(&self, relative_path: &str, response: &Value) -> Result<()> {
        let path = self.entry_path(relative_path);
        fs::write(&path, serde_json::to_string_pretty(response)?)?;
        Ok(())
    }

    /// Remove one entry. Returns whether an entry existed.
    ///
    /// Generation never calls this; it exists for the `clean` command and for
    /// tests.
    pub fn invalidate(&self, relative_path: &str) -> Result<bool> {
        match fs::remove_file(self.entry_path(relative_path)) {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e.into()),
        }
    }

    /// Remove every `.json` entry in the output directory. Returns the count.
    pub fn clear(&self) -> Result<usize> {
        let entries = match fs::read_dir(&self.dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(0),
            Err(e) => return Err(e.into()),
        };

        let mut count = 0;
        for entry in entries {
            let path = entry?.path();
            if path.extension().is_some_and(|e| e == "json") {
                fs::remove_file(&path)?;
                count += 1;
            }
        }
        Ok(count)
    }
}
