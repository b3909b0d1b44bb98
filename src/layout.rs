//! Fixed file conventions of a tool catalog project.

use std::path::{Path, PathBuf};

/// Tools root, relative to the project root
pub const TOOLS_DIR: &str = "src/tools";

/// File name of both the aggregator and every per-tool entry file
pub const ENTRY_FILE: &str = "index.ts";

/// Resolves the conventional locations under a project root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectLayout {
    root: PathBuf,
}

impl ProjectLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn tools_root(&self) -> PathBuf {
        self.root.join(TOOLS_DIR)
    }

    /// `<root>/src/tools/index.ts`
    pub fn aggregator_path(&self) -> PathBuf {
        self.tools_root().join(ENTRY_FILE)
    }

    /// `<root>/src/tools/<dir>/index.ts`
    pub fn entry_path(&self, dir: &str) -> PathBuf {
        self.tools_root().join(dir).join(ENTRY_FILE)
    }
}
