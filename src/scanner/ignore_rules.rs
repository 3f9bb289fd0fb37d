//! Ignore-Rule Engine
//!
//! Compiles the project ignore file plus built-in defaults into one matcher.
//! Matching input is always normalized to forward slashes first, so results
//! are identical across host path-separator conventions.

use ignore::gitignore::{Gitignore, GitignoreBuilder};
use std::path::Path;

use crate::config::Config;
use crate::constants;
use crate::types::{Error, Result};

pub struct IgnoreRules {
    matcher: Gitignore,
}

impl IgnoreRules {
    /// Build the matcher for a project root.
    ///
    /// An absent ignore file is fine (built-ins still apply); a present but
    /// unreadable one is fatal for the invocation.
    pub fn build(root: &Path, config: &Config) -> Result<Self> {
        let mut builder = GitignoreBuilder::new(root);

        let ignore_path = root.join(&config.scan.ignore_file);
        if ignore_path.exists()
            && let Some(err) = builder.add(&ignore_path)
        {
            return Err(Error::ConfigRead {
                path: ignore_path,
                message: err.to_string(),
            });
        }

        for pattern in constants::scan::BUILTIN_IGNORES {
            add_builtin(&mut builder, pattern)?;
        }
        // the tool must never descend into its own output
        add_builtin(&mut builder, &config.output.dir_name)?;

        let matcher = builder
            .build()
            .map_err(|e| Error::Config(format!("invalid ignore rules: {e}")))?;

        Ok(Self { matcher })
    }

    /// Match a project-relative path. Separators are normalized before
    /// evaluation; `is_dir` enables directory-only pattern semantics.
    pub fn is_ignored(&self, relative_path: &str, is_dir: bool) -> bool {
        let normalized = relative_path.replace('\\', "/");
        self.matcher
            .matched(Path::new(&normalized), is_dir)
            .is_ignore()
    }
}

fn add_builtin(builder: &mut GitignoreBuilder, pattern: &str) -> Result<()> {
    builder
        .add_line(None, pattern)
        .map_err(|e| Error::Config(format!("invalid built-in ignore pattern {pattern:?}: {e}")))?;
    Ok(())
}
