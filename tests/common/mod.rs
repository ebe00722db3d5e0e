//! Shared test utilities for integration and E2E tests.
//!
//! This module provides a fixture for building source trees on disk and an
//! instrumented `TreeOperations` for counting filesystem queries.
//!
//! ## Usage
//!
//! Add `mod common;` to your test file, then use the helpers:
//!
//! ```rust,ignore
//! mod common;
//! use common::prelude::*;
//!
//! #[test]
//! fn test_example() {
//!     let fixture = TestFixture::new()
//!         .with_checkout("modA")
//!         .with_file("modA/BUILD", "");
//!     // ... test code
//! }
//! ```

use std::io;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use assert_fs::prelude::*;
use checkout_locator::defaults::{INDICATOR_FILE, OUT_DIR_ENV, TOP_DIR_ENV};
use checkout_locator::error::Result;
use checkout_locator::operations::{ChildDir, DefaultTreeOperations, TreeOperations};

/// Re-export commonly used test dependencies for convenience.
pub mod prelude {
    pub use assert_cmd::cargo::cargo_bin_cmd;
    pub use assert_fs::prelude::*;
    pub use predicates::prelude::*;

    #[allow(unused_imports)]
    pub use super::CountingOperations;
    pub use super::TestFixture;
}

/// A temporary directory populated with checkouts and files.
///
/// # Example
///
/// ```rust,ignore
/// let fixture = TestFixture::new()
///     .with_source_tree()
///     .with_checkout("build/soong")
///     .with_file("build/soong/Android.bp", "");
///
/// fixture.command().arg("dir").arg("Android.bp").assert().success();
/// ```
pub struct TestFixture {
    temp_dir: assert_fs::TempDir,
}

impl TestFixture {
    /// Create a new test fixture with an empty temporary directory.
    pub fn new() -> Self {
        Self {
            temp_dir: assert_fs::TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Mark the root as the top of a source tree by adding the indicator file.
    pub fn with_source_tree(self) -> Self {
        self.with_file(INDICATOR_FILE, "#!/bin/bash\n")
    }

    /// Turn `path` (relative to the root, `""` for the root itself) into a
    /// git checkout.
    pub fn with_checkout(self, path: &str) -> Self {
        self.temp_dir
            .child(path)
            .child(".git")
            .create_dir_all()
            .expect("Failed to create .git directory");
        self
    }

    /// Add a directory with no contents.
    #[allow(dead_code)]
    pub fn with_dir(self, path: &str) -> Self {
        self.temp_dir
            .child(path)
            .create_dir_all()
            .expect("Failed to create directory");
        self
    }

    /// Add a file with the given path and content.
    pub fn with_file(self, path: &str, content: &str) -> Self {
        self.temp_dir
            .child(path)
            .write_str(content)
            .expect("Failed to write file");
        self
    }

    /// Add a symbolic link at `link` pointing at `target`, both relative to
    /// the root.
    #[cfg(unix)]
    #[allow(dead_code)]
    pub fn with_symlink(self, target: &str, link: &str) -> Self {
        self.temp_dir
            .child(link)
            .symlink_to_dir(self.path().join(target))
            .expect("Failed to create symlink");
        self
    }

    /// Get the path to the temporary directory.
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Absolute path of `rel` inside the fixture.
    pub fn join(&self, rel: &str) -> PathBuf {
        self.temp_dir.path().join(rel)
    }

    /// Remove a directory created earlier.
    #[allow(dead_code)]
    pub fn remove_dir(&self, path: &str) {
        std::fs::remove_dir_all(self.join(path)).expect("Failed to remove directory");
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

impl TestFixture {
    /// Create a command running in this fixture's directory, isolated from
    /// any source tree configured in the caller's environment.
    #[allow(dead_code)]
    pub fn command(&self) -> assert_cmd::Command {
        let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("checkout-locator");
        cmd.current_dir(self.path())
            .env_remove(TOP_DIR_ENV)
            .env_remove(OUT_DIR_ENV)
            .env_remove("RUST_LOG");
        cmd
    }
}

/// Wraps `DefaultTreeOperations` and counts each query.
#[derive(Clone, Default)]
pub struct CountingOperations {
    pub listings: Arc<AtomicUsize>,
    pub boundary_checks: Arc<AtomicUsize>,
    pub pattern_walks: Arc<AtomicUsize>,
}

#[allow(dead_code)]
impl CountingOperations {
    pub fn listings(&self) -> usize {
        self.listings.load(Ordering::SeqCst)
    }

    pub fn boundary_checks(&self) -> usize {
        self.boundary_checks.load(Ordering::SeqCst)
    }

    pub fn pattern_walks(&self) -> usize {
        self.pattern_walks.load(Ordering::SeqCst)
    }
}

impl TreeOperations for CountingOperations {
    fn list_child_dirs(&self, dir: &Path) -> io::Result<Vec<ChildDir>> {
        self.listings.fetch_add(1, Ordering::SeqCst);
        DefaultTreeOperations.list_child_dirs(dir)
    }

    fn is_boundary(&self, dir: &Path) -> bool {
        self.boundary_checks.fetch_add(1, Ordering::SeqCst);
        DefaultTreeOperations.is_boundary(dir)
    }

    fn first_match(&self, dir: &Path, glob: &str) -> Result<Option<PathBuf>> {
        self.pattern_walks.fetch_add(1, Ordering::SeqCst);
        DefaultTreeOperations.first_match(dir, glob)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_creates_temp_dir() {
        let fixture = TestFixture::new();
        assert!(fixture.path().exists());
    }

    #[test]
    fn test_fixture_with_checkout() {
        let fixture = TestFixture::new().with_checkout("modA");
        assert!(checkout_locator::boundary::is_boundary(&fixture.join("modA")));
    }

    #[test]
    fn test_fixture_with_source_tree() {
        let fixture = TestFixture::new().with_source_tree();
        assert!(fixture.join(INDICATOR_FILE).is_file());
    }
}
