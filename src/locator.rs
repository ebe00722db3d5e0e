//! # Locator
//!
//! `Locator` is the object callers hold on to. It owns the search cache, the
//! traversal and the resolved source tree root, and offers the lookups the
//! rest of the tooling needs:
//!
//! - **`any_match_under`**: the qualifying directory plus what each required
//!   pattern matched.
//! - **`any_dir_under`**: just the directory, e.g. "the checkout containing
//!   `BUILD` but not `tests/**`".
//! - **`any_file_under`**: a single file found by one required pattern.
//!
//! `any_match` and `any_file` do the same starting from the tree root.
//!
//! Construct one `Locator` in the entry point and pass it to whatever needs
//! it; every lookup made through it shares the same cache.

use std::env;
use std::path::{Path, PathBuf};

use log::debug;

use crate::cache::{SearchCache, SearchKey};
use crate::defaults::NEGATION_MARKER;
use crate::error::{Error, Result};
use crate::pattern::{MatchResult, SearchPattern};
use crate::source_tree;
use crate::traversal::BoundedTraversal;

pub struct Locator {
    top_dir: PathBuf,
    traversal: BoundedTraversal,
    cache: SearchCache,
}

impl Locator {
    /// Creates a locator for the tree at `top_dir` that skips `out_dir`.
    pub fn new(top_dir: PathBuf, out_dir: PathBuf) -> Self {
        Self::with_traversal(top_dir, BoundedTraversal::new(Some(out_dir)))
    }

    /// Creates a locator around an existing traversal.
    pub fn with_traversal(top_dir: PathBuf, traversal: BoundedTraversal) -> Self {
        Self {
            top_dir,
            traversal,
            cache: SearchCache::new(),
        }
    }

    /// Resolves the tree root and output directory from the environment,
    /// scanning upward from the current directory when `ANDROID_BUILD_TOP`
    /// is unset.
    pub fn from_env() -> Result<Self> {
        let cwd = env::current_dir()?;
        let top_dir = source_tree::top_dir_from_env(&cwd)?;
        let out_dir = source_tree::out_dir_from_env(&top_dir);
        Ok(Self::new(top_dir, out_dir))
    }

    pub fn top_dir(&self) -> &Path {
        &self.top_dir
    }

    pub fn out_dir(&self) -> Option<&Path> {
        self.traversal.out_dir()
    }

    pub fn cache(&self) -> &SearchCache {
        &self.cache
    }

    /// Finds the first qualifying checkout under `root`, consulting the
    /// cache first.
    pub fn any_match_under(&self, root: &Path, patterns: &[SearchPattern]) -> Result<MatchResult> {
        let key = SearchKey::new(root, patterns);
        self.cache.get_or_search(key, || {
            debug!("Searching {} for {:?}", root.display(), patterns);
            self.traversal.search(root, patterns)
        })
    }

    /// Like `any_match_under`, starting from the tree root.
    pub fn any_match(&self, patterns: &[SearchPattern]) -> Result<MatchResult> {
        self.any_match_under(&self.top_dir, patterns)
    }

    /// Returns only the directory of `any_match_under`.
    pub fn any_dir_under(&self, root: &Path, patterns: &[SearchPattern]) -> Result<PathBuf> {
        Ok(self.any_match_under(root, patterns)?.directory)
    }

    /// Finds a regular file matching the single required `pattern`.
    ///
    /// A negated pattern makes no sense for a file lookup and is rejected
    /// before any filesystem access.
    pub fn any_file_under(&self, root: &Path, pattern: &str) -> Result<PathBuf> {
        if pattern.starts_with(NEGATION_MARKER) {
            return Err(Error::InvalidPattern {
                pattern: pattern.to_string(),
                message: "provide a filename instead of an excluded pattern".to_string(),
            });
        }
        let patterns = [SearchPattern::required(pattern)?];
        self.any_match_under(root, &patterns)?
            .absolute_paths()
            .find(|p| p.is_file())
            .ok_or_else(|| Error::NotFound {
                patterns: vec![pattern.to_string()],
            })
    }

    /// Like `any_file_under`, starting from the tree root.
    pub fn any_file(&self, pattern: &str) -> Result<PathBuf> {
        self.any_file_under(&self.top_dir, pattern)
    }
}
