//! Test helpers shared across fsq-config unit tests.

use std::{
    fs,
    path::{Path, PathBuf},
};

use tempfile::TempDir;

use crate::discovery::CONFIG_FILENAME;

/// A throwaway directory tree for config discovery tests.
pub struct TestDir {
    /// Removed when the fixture is dropped.
    root: TempDir,
}

impl TestDir {
    /// Creates an empty tree.
    pub fn new() -> Self {
        let root = tempfile::tempdir().unwrap();
        Self { root }
    }

    /// Top of the tree.
    pub fn path(&self) -> &Path {
        self.root.path()
    }

    /// Ensures `rel` exists as a directory and returns its absolute path.
    pub fn create_dir(&self, rel: &str) -> PathBuf {
        let dir = self.path().join(rel);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    /// Drops a `.fsq.toml` containing only a comment into `rel`.
    pub fn create_config(&self, rel: &str) -> PathBuf {
        self.create_config_with_content(rel, "# fsq test config\n")
    }

    /// Drops a comment-only `.fsq.toml` at the top of the tree.
    pub fn create_config_at_root(&self) -> PathBuf {
        self.create_config("")
    }

    /// Writes `content` to `rel/.fsq.toml`, creating `rel` as needed.
    pub fn create_config_with_content(&self, rel: &str, content: &str) -> PathBuf {
        let path = self.create_dir(rel).join(CONFIG_FILENAME);
        fs::write(&path, content).unwrap();
        path
    }

    /// Writes a `.fsq.toml` marked `root = true` into `rel`.
    pub fn create_root_config(&self, rel: &str) -> PathBuf {
        self.create_config_with_content(rel, "root = true\n")
    }
}
