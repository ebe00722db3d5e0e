//! # Filesystem Probes
//!
//! A search touches the filesystem in exactly three ways: it lists the child
//! directories of a candidate, it asks whether a candidate is a checkout
//! root, and it asks for the first match of a glob under a candidate. This
//! module puts those three queries behind the `TreeOperations` trait.
//!
//! ## Design
//!
//! `DefaultTreeOperations` wraps the real filesystem and is what the
//! `Locator` uses. Tests swap in their own implementations, either to
//! describe a tree entirely in memory or to wrap the default one and count
//! how often each query runs.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::Result;

/// A direct subdirectory of a directory being expanded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChildDir {
    /// Final path component, lossily converted to UTF-8. Only used for the
    /// name filters; ordering goes by the raw component in `path`.
    pub name: String,
    /// Full path of the child.
    pub path: PathBuf,
    /// Whether the entry itself is a symbolic link (to a directory).
    pub is_symlink: bool,
}

/// Trait for the filesystem queries a search performs - allows mocking in tests
pub trait TreeOperations: Send + Sync {
    /// Lists the direct children of `dir` that are directories.
    ///
    /// Symbolic links pointing at directories are included and flagged with
    /// `is_symlink` so that the caller decides whether to follow them. No
    /// particular order is guaranteed.
    fn list_child_dirs(&self, dir: &Path) -> io::Result<Vec<ChildDir>>;

    /// Returns true if `dir` is the root of a version-controlled checkout.
    fn is_boundary(&self, dir: &Path) -> bool;

    /// Returns the first path matching `glob` under `dir`, relative to `dir`.
    fn first_match(&self, dir: &Path, glob: &str) -> Result<Option<PathBuf>>;
}

/// The default implementation of `TreeOperations`, which reads the host
/// filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultTreeOperations;

impl TreeOperations for DefaultTreeOperations {
    fn list_child_dirs(&self, dir: &Path) -> io::Result<Vec<ChildDir>> {
        let mut children = Vec::new();
        for entry in fs::read_dir(dir)? {
            // An entry that vanished between readdir and stat is simply skipped
            let Ok(entry) = entry else { continue };
            let Ok(file_type) = entry.file_type() else {
                continue;
            };
            let path = entry.path();
            let is_symlink = file_type.is_symlink();
            let is_dir = if is_symlink {
                path.is_dir()
            } else {
                file_type.is_dir()
            };
            if is_dir {
                children.push(ChildDir {
                    name: entry.file_name().to_string_lossy().into_owned(),
                    path,
                    is_symlink,
                });
            }
        }
        Ok(children)
    }

    fn is_boundary(&self, dir: &Path) -> bool {
        crate::boundary::is_boundary(dir)
    }

    fn first_match(&self, dir: &Path, glob: &str) -> Result<Option<PathBuf>> {
        crate::pattern::first_match(dir, glob)
    }
}
