//! # Bounded Breadth-First Traversal
//!
//! `BoundedTraversal::search` walks a directory tree level by level, looking
//! for the shallowest checkout root that satisfies a pattern list. In a
//! tree of nested checkouts the intended target is almost always the
//! outermost relevant one, which a depth-first walk could easily miss in
//! favour of some deeply nested, incidental match.
//!
//! ## Process
//!
//! 1.  The queue starts with the search root.
//! 2.  Each popped directory that is a checkout root is evaluated against the
//!     patterns; the first one that qualifies ends the search.
//! 3.  Every popped directory, qualifying or not, has its children filtered
//!     by `should_visit`, sorted by name and appended to the queue.
//!
//! A directory that cannot be listed contributes no children. The search
//! carries on with the rest of the queue instead of failing.

use std::collections::VecDeque;
use std::io;
use std::path::{Path, PathBuf};

use log::{debug, trace, warn};

use crate::error::{Error, Result};
use crate::operations::{ChildDir, DefaultTreeOperations, TreeOperations};
use crate::pattern::{self, MatchResult, SearchPattern};

/// Returns true if the traversal should descend into `child`.
///
/// Symbolic links, names containing a `.`, names containing `test` and the
/// build-output directory are all skipped. Skipping symlinks is what keeps
/// the walk from looping forever.
pub fn should_visit(child: &ChildDir, out_dir: Option<&Path>) -> bool {
    !(child.is_symlink
        || child.name.contains('.')
        || child.name.contains("test")
        || out_dir.is_some_and(|out| child.path == out))
}

/// Breadth-first search for a qualifying checkout root.
pub struct BoundedTraversal {
    ops: Box<dyn TreeOperations>,
    out_dir: Option<PathBuf>,
}

impl BoundedTraversal {
    /// Creates a traversal over the real filesystem that never enters
    /// `out_dir`.
    pub fn new(out_dir: Option<PathBuf>) -> Self {
        Self::with_operations(Box::new(DefaultTreeOperations), out_dir)
    }

    /// Creates a traversal with a custom `TreeOperations` implementation.
    pub fn with_operations(ops: Box<dyn TreeOperations>, out_dir: Option<PathBuf>) -> Self {
        Self { ops, out_dir }
    }

    pub fn out_dir(&self) -> Option<&Path> {
        self.out_dir.as_deref()
    }

    /// Finds the first qualifying directory under `root` in breadth order.
    ///
    /// Directories at equal depth are visited in byte order of their file
    /// names, so repeated searches over an unchanged tree return the
    /// same result. Fails with `Error::NotFound` once the filtered tree is
    /// exhausted.
    pub fn search(&self, root: &Path, patterns: &[SearchPattern]) -> Result<MatchResult> {
        let mut queue = VecDeque::from([root.to_path_buf()]);
        while let Some(dir) = queue.pop_front() {
            if self.ops.is_boundary(&dir) {
                debug!("Evaluating checkout {}", dir.display());
                if let Some(found) = pattern::evaluate(self.ops.as_ref(), &dir, patterns)? {
                    debug!("Found {} for {:?}", found.directory.display(), patterns);
                    return Ok(found);
                }
            }
            queue.extend(self.children_to_visit(&dir));
        }
        Err(Error::NotFound {
            patterns: patterns.iter().map(ToString::to_string).collect(),
        })
    }

    fn children_to_visit(&self, dir: &Path) -> Vec<PathBuf> {
        let mut children = match self.ops.list_child_dirs(dir) {
            Ok(children) => children,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("{} disappeared during the search", dir.display());
                return Vec::new();
            }
            Err(e) => {
                warn!("Skipping unreadable directory {}: {}", dir.display(), e);
                return Vec::new();
            }
        };
        children.retain(|c| should_visit(c, self.out_dir()));
        children.sort_by(|a, b| a.path.file_name().cmp(&b.path.file_name()));
        trace!("Queueing {} children of {}", children.len(), dir.display());
        children.into_iter().map(|c| c.path).collect()
    }
}

impl Default for BoundedTraversal {
    fn default() -> Self {
        Self::new(None)
    }
}
