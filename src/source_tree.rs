//! # Source Tree Root
//!
//! Searches usually start at the top of the source tree, which is found by
//! walking *up* from the working directory until a directory holds the
//! indicator file. This is the mirror image of the downward search in
//! `traversal` but shares nothing with it: it follows a single chain of
//! parents, never lists a directory, and fails at the filesystem root.
//!
//! The build-output directory is resolved here as well, since it defaults
//! to a location under the tree root.

use std::env;
use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::defaults::{default_out_dir, INDICATOR_FILE, OUT_DIR_ENV, TOP_DIR_ENV};
use crate::error::{Error, Result};

/// Finds the nearest directory at or above `start` holding the indicator
/// file.
pub fn find_top_dir(start: &Path) -> Result<PathBuf> {
    for dir in start.ancestors() {
        debug!("Checking if source tree root is {}", dir.display());
        if dir.join(INDICATOR_FILE).is_file() {
            info!("Source tree root assumed to be {}", dir.display());
            return Ok(dir.to_path_buf());
        }
    }
    Err(Error::SourceTreeNotFound {
        start: start.to_path_buf(),
        indicator: INDICATOR_FILE.to_string(),
    })
}

/// Uses `override_dir` when given, otherwise scans upward from `start`.
pub fn resolve_top_dir(override_dir: Option<&Path>, start: &Path) -> Result<PathBuf> {
    match override_dir {
        Some(top) => {
            info!("Source tree root = {}", top.display());
            Ok(top.to_path_buf())
        }
        None => find_top_dir(start),
    }
}

/// Like `resolve_top_dir`, taking the override from `ANDROID_BUILD_TOP`.
pub fn top_dir_from_env(start: &Path) -> Result<PathBuf> {
    let override_dir = non_empty_env(TOP_DIR_ENV);
    resolve_top_dir(override_dir.as_deref(), start)
}

/// Uses `override_dir` when given, otherwise `<top>/out`.
///
/// A relative override is taken relative to `top`.
pub fn resolve_out_dir(override_dir: Option<&Path>, top: &Path) -> PathBuf {
    match override_dir {
        Some(out) if out.is_absolute() => out.to_path_buf(),
        Some(out) => top.join(out),
        None => default_out_dir(top),
    }
}

/// Like `resolve_out_dir`, taking the override from `OUT_DIR`.
pub fn out_dir_from_env(top: &Path) -> PathBuf {
    let override_dir = non_empty_env(OUT_DIR_ENV);
    resolve_out_dir(override_dir.as_deref(), top)
}

fn non_empty_env(name: &str) -> Option<PathBuf> {
    env::var_os(name)
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
}
