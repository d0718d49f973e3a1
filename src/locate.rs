//! Locating an installed artifact on disk.
//!
//! npm resolves a specifier like `@tsimports/cli-linux-x64/tsimports` by
//! checking `node_modules` in the requiring package's directory and then in
//! each ancestor directory. The install hook runs with its working directory
//! inside the installed package, so the same ancestry walk finds the
//! companion packages wherever the package manager hoisted them.

use std::path::PathBuf;

use crate::table::ArtifactId;

/// Resolves an artifact identifier to a concrete file on disk.
pub trait ArtifactLocator {
    fn locate(&self, artifact: &ArtifactId) -> Option<PathBuf>;
}

/// The node_modules ancestry walk, nearest directory first.
pub struct NodeModulesLocator {
    start: PathBuf,
}

impl NodeModulesLocator {
    pub fn new(start: impl Into<PathBuf>) -> Self {
        Self {
            start: start.into(),
        }
    }

    /// Start the walk from the current working directory.
    pub fn from_cwd() -> std::io::Result<Self> {
        Ok(Self::new(std::env::current_dir()?))
    }
}

impl ArtifactLocator for NodeModulesLocator {
    fn locate(&self, artifact: &ArtifactId) -> Option<PathBuf> {
        for dir in self.start.ancestors() {
            let candidate = dir.join("node_modules").join(artifact.as_str());
            if candidate.is_file() {
                return Some(candidate.canonicalize().unwrap_or(candidate));
            }
        }
        None
    }
}
