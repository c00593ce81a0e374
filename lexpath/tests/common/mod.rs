//! Common test utilities for integration tests.
//!
//! Builds small directory trees under a temporary directory and hands back
//! their locations as cleaned path strings, the form every engine operation
//! returns.

use std::fs;
use std::path::Path;

use tempfile::TempDir;

/// A throwaway directory tree.
///
/// The tree is deleted when the fixture is dropped.
#[allow(dead_code)]
pub struct TreeFixture {
    dir: TempDir,
}

#[allow(dead_code)]
impl TreeFixture {
    /// Creates an empty tree.
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().unwrap(),
        }
    }

    /// Creates a file (and its parents) with some content.
    pub fn file(self, relative: &str) -> Self {
        let path = self.dir.path().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, relative).unwrap();
        self
    }

    /// Creates a directory (and its parents).
    pub fn folder(self, relative: &str) -> Self {
        fs::create_dir_all(self.dir.path().join(relative)).unwrap();
        self
    }

    /// The tree root on disk.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// The tree root as a string with forward slashes, no trailing separator.
    pub fn root(&self) -> String {
        as_path_string(self.dir.path())
    }

    /// `root()` joined with `relative`.
    pub fn at(&self, relative: &str) -> String {
        format!("{}/{relative}", self.root())
    }
}

/// Renders a native path with forward slashes.
#[allow(dead_code)]
pub fn as_path_string(path: &Path) -> String {
    path.to_str()
        .expect("temporary paths are UTF-8")
        .replace('\\', "/")
}
