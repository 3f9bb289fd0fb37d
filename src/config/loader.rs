//! Configuration Loader (Figment-based)
//!
//! Loads and merges configuration from multiple sources:
//! 1. Built-in defaults (Serialized)
//! 2. Global config (`~/.config/autodocs/config.toml`)
//! 3. Project config (`<project root>/autodocs.toml`)
//! 4. Environment variables (`AUTODOCS_*` prefix, `__` section separator)

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::{Path, PathBuf};

use tracing::debug;

use super::types::Config;
use crate::types::{Error, Result};

const ENV_PREFIX: &str = "AUTODOCS_";
const PROJECT_FILE: &str = "autodocs.toml";

/// Configuration loader
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration for a project root with the full resolution chain:
    /// defaults → global → project → env vars.
    pub fn load(project_root: &Path) -> Result<Config> {
        let mut figment = Figment::new().merge(Serialized::defaults(Config::default()));

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            debug!("loading global config from {}", global_path.display());
            figment = figment.merge(Toml::file(&global_path));
        }

        let project_path = Self::project_config_path(project_root);
        if project_path.exists() {
            debug!("loading project config from {}", project_path.display());
            figment = figment.merge(Toml::file(&project_path));
        }

        // e.g. AUTODOCS_API__BASE_URL -> api.base_url
        figment = figment.merge(Env::prefixed(ENV_PREFIX).split("__").lowercase(true));

        let config: Config = figment
            .extract()
            .map_err(|e| Error::Config(format!("configuration error: {e}")))?;

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a single file only (defaults + that file).
    pub fn load_from_file(path: &Path) -> Result<Config> {
        let config: Config = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(path))
            .extract()
            .map_err(|e| Error::Config(format!("configuration error: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Path to the global config file, if a home directory is resolvable.
    pub fn global_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "autodocs")
            .map(|dirs| dirs.config_dir().join("config.toml"))
    }

    /// Path to the project config file under a given root.
    pub fn project_config_path(project_root: &Path) -> PathBuf {
        project_root.join(PROJECT_FILE)
    }
}
