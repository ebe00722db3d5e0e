//! In-process memoization of search results
//!
//! Searches stat a lot of files and tend to be repeated with identical
//! arguments, so successful results are kept for the lifetime of the cache.
//! A failed search is never stored: the next identical call scans again and
//! sees any directories created in the meantime.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard};

use crate::error::{Error, Result};
use crate::pattern::{MatchResult, SearchPattern};

/// Cache key combining the search root and the patterns in call order
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SearchKey {
    pub root: PathBuf,
    pub patterns: Vec<SearchPattern>,
}

impl SearchKey {
    pub fn new(root: &Path, patterns: &[SearchPattern]) -> Self {
        Self {
            root: root.to_path_buf(),
            patterns: patterns.to_vec(),
        }
    }
}

/// In-process cache of successful searches
#[derive(Debug, Clone)]
pub struct SearchCache {
    cache: Arc<Mutex<HashMap<SearchKey, MatchResult>>>,
}

impl SearchCache {
    /// Create a new empty search cache
    pub fn new() -> Self {
        Self {
            cache: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, HashMap<SearchKey, MatchResult>>> {
        self.cache.lock().map_err(|_| Error::LockPoisoned {
            context: "search cache".to_string(),
        })
    }

    /// Get a cached result, or run the search and cache it on success
    pub fn get_or_search<F>(&self, key: SearchKey, search: F) -> Result<MatchResult>
    where
        F: FnOnce() -> Result<MatchResult>,
    {
        if let Some(cached) = self.lock()?.get(&key) {
            return Ok(cached.clone());
        }

        // The lock is not held while scanning; errors propagate uncached
        let result = search()?;

        self.lock()?.insert(key, result.clone());
        Ok(result)
    }

    /// Get a value from cache without searching
    pub fn get(&self, key: &SearchKey) -> Result<Option<MatchResult>> {
        Ok(self.lock()?.get(key).cloned())
    }

    /// Check if a key exists in cache
    pub fn contains(&self, key: &SearchKey) -> Result<bool> {
        Ok(self.lock()?.contains_key(key))
    }

    /// Clear all cached entries
    pub fn clear(&self) -> Result<()> {
        self.lock()?.clear();
        Ok(())
    }

    /// Get the number of cached entries
    pub fn len(&self) -> Result<usize> {
        Ok(self.lock()?.len())
    }

    /// Check if cache is empty
    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.lock()?.is_empty())
    }
}

impl Default for SearchCache {
    fn default() -> Self {
        Self::new()
    }
}
