//! Generated sidebars.
//!
//! A section whose sidebar is not written by hand in `docsite.toml` points at
//! a *remote*: a subdirectory of the documentation root that carries its own
//! `docs.json`. The file is read and parsed as-is and handed to the renderer
//! without looking at its shape.

use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::debug;

use crate::error::{ConfigError, Result};

/// Name of the sidebar descriptor inside every remote directory.
pub const SIDEBAR_FILE: &str = "docs.json";

/// Directory, next to the config file, that holds all documentation sources.
pub const DOCS_DIR: &str = "docs";

/// The base directory all remotes are resolved against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocsRoot(PathBuf);

impl DocsRoot {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self(path.as_ref().to_path_buf())
    }

    /// The `docs` directory sitting next to `config_path`.
    pub fn beside<P: AsRef<Path>>(config_path: P) -> Self {
        let dir = config_path
            .as_ref()
            .parent()
            .unwrap_or_else(|| Path::new(""));

        Self(dir.join(DOCS_DIR))
    }

    pub fn path(&self) -> &Path {
        &self.0
    }

    /// `<root>/<remote>/docs.json`. The remote is joined verbatim.
    pub fn sidebar_path(&self, remote: &str) -> PathBuf {
        self.0.join(remote).join(SIDEBAR_FILE)
    }
}

/// Reads `docs.json` descriptors from a fixed [`DocsRoot`].
#[derive(Debug, Clone)]
pub struct SidebarLoader {
    root: DocsRoot,
}

impl SidebarLoader {
    pub fn new(root: DocsRoot) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &DocsRoot {
        &self.root
    }

    /// Load the sidebar descriptor for `remote`.
    ///
    /// A missing or unreadable file and malformed JSON are both errors. There
    /// is no empty fallback.
    pub fn load(&self, remote: &str) -> Result<Value> {
        let path = self.root.sidebar_path(remote);
        debug!(remote, path = %path.display(), "loading sidebar");

        let data = std::fs::read_to_string(&path).map_err(|source| ConfigError::Read {
            path: path.clone(),
            source,
        })?;

        serde_json::from_str(&data).map_err(|source| ConfigError::SidebarJson { path, source })
    }
}

/// Load a single sidebar without keeping a loader around.
pub fn load_sidebar<P: AsRef<Path>>(root: P, remote: &str) -> Result<Value> {
    SidebarLoader::new(DocsRoot::new(root)).load(remote)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sidebar_path_layout() {
        let root = DocsRoot::new("/site/docs");
        assert_eq!(
            root.sidebar_path("engine"),
            PathBuf::from("/site/docs/engine/docs.json")
        );
    }

    #[test]
    fn test_remote_is_joined_verbatim() {
        let root = DocsRoot::new("docs");
        assert_eq!(
            root.sidebar_path("vendor/engine"),
            PathBuf::from("docs/vendor/engine/docs.json")
        );
    }

    #[test]
    fn test_beside_uses_config_directory() {
        let root = DocsRoot::beside("/repo/site/docsite.toml");
        assert_eq!(root.path(), Path::new("/repo/site/docs"));
    }

    #[test]
    fn test_beside_bare_file_name() {
        let root = DocsRoot::beside("docsite.toml");
        assert_eq!(root.path(), Path::new("docs"));
    }
}
