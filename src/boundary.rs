//! Repository boundary detection

use std::path::Path;

use crate::defaults::VCS_MARKER;

/// Returns true if `path` is the root of a git checkout.
///
/// The check is a read-only check for the `.git` marker, which is a
/// directory in a regular clone and a file in worktrees and submodules.
/// Paths that do not exist or are not directories are never boundaries.
pub fn is_boundary(path: &Path) -> bool {
    path.is_dir() && path.join(VCS_MARKER).symlink_metadata().is_ok()
}
