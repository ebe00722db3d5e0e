//! # Search Patterns
//!
//! A search is described by an ordered list of glob patterns, each tagged
//! with a polarity. A *required* pattern must match at least one path under a
//! candidate directory; an *excluded* pattern must match nothing. On the
//! command line and in the text form an excluded pattern is written with a
//! leading `!`, e.g. `!tests/**`.
//!
//! ## Evaluation
//!
//! `evaluate` walks the patterns in order and stops at the first one that
//! disqualifies the directory. Each pattern costs one lazy walk of the
//! directory that stops at the first hit, so a required pattern like
//! `**/Android.bp` does not enumerate the whole subtree.
//!
//! Globs follow the `glob` crate syntax, with leading dots requiring a
//! literal match so that `*` and `**` never wander into hidden directories.
//! A trailing `/**` matches the named directory as well as everything below
//! it, so `!tests/**` rejects any candidate with a `tests` directory.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use glob::{MatchOptions, Pattern};
use log::trace;
use walkdir::WalkDir;

use crate::defaults::NEGATION_MARKER;
use crate::error::{Error, Result};
use crate::operations::TreeOperations;

/// Whether a pattern must or must not match under a directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Polarity {
    /// At least one match is needed.
    Required,
    /// Any match disqualifies the directory.
    Excluded,
}

/// A glob expression together with its polarity.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SearchPattern {
    glob: String,
    polarity: Polarity,
}

impl SearchPattern {
    /// Creates a required pattern.
    pub fn required(glob: &str) -> Result<Self> {
        Self::with_polarity(glob, Polarity::Required)
    }

    /// Creates an excluded pattern.
    pub fn excluded(glob: &str) -> Result<Self> {
        Self::with_polarity(glob, Polarity::Excluded)
    }

    /// Parses the text form, where a leading `!` marks an excluded pattern.
    pub fn parse(text: &str) -> Result<Self> {
        match text.strip_prefix(NEGATION_MARKER) {
            Some(glob) => Self::excluded(glob),
            None => Self::required(text),
        }
    }

    fn with_polarity(glob: &str, polarity: Polarity) -> Result<Self> {
        if glob.is_empty() {
            return Err(Error::InvalidPattern {
                pattern: glob.to_string(),
                message: "pattern is empty".to_string(),
            });
        }
        Pattern::new(glob).map_err(|e| Error::InvalidPattern {
            pattern: glob.to_string(),
            message: e.to_string(),
        })?;
        Ok(Self {
            glob: glob.to_string(),
            polarity,
        })
    }

    /// The glob expression without the negation marker.
    pub fn glob(&self) -> &str {
        &self.glob
    }

    pub fn polarity(&self) -> Polarity {
        self.polarity
    }

    pub fn is_required(&self) -> bool {
        self.polarity == Polarity::Required
    }
}

impl FromStr for SearchPattern {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for SearchPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.polarity {
            Polarity::Required => write!(f, "{}", self.glob),
            Polarity::Excluded => write!(f, "{}{}", NEGATION_MARKER, self.glob),
        }
    }
}

/// A qualifying directory and what its required patterns matched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchResult {
    /// The checkout root that satisfied every pattern.
    pub directory: PathBuf,
    /// One entry per required pattern, in pattern order, relative to
    /// `directory`.
    pub matched_paths: Vec<PathBuf>,
}

impl MatchResult {
    /// The matched paths joined onto `directory`.
    pub fn absolute_paths(&self) -> impl Iterator<Item = PathBuf> + '_ {
        self.matched_paths.iter().map(|p| self.directory.join(p))
    }
}

/// Decides whether `directory` satisfies `patterns`.
///
/// Returns `Ok(None)` when a required pattern has no match or an excluded
/// pattern has one. Evaluation stops at the first such pattern.
pub fn evaluate<O>(
    ops: &O,
    directory: &Path,
    patterns: &[SearchPattern],
) -> Result<Option<MatchResult>>
where
    O: TreeOperations + ?Sized,
{
    let mut matched_paths = Vec::new();
    for pattern in patterns {
        let found = ops.first_match(directory, pattern.glob())?;
        trace!(
            "{} under {}: {:?}",
            pattern,
            directory.display(),
            found.as_deref()
        );
        match (pattern.polarity(), found) {
            (Polarity::Required, Some(path)) => matched_paths.push(path),
            (Polarity::Required, None) | (Polarity::Excluded, Some(_)) => return Ok(None),
            (Polarity::Excluded, None) => {}
        }
    }
    Ok(Some(MatchResult {
        directory: directory.to_path_buf(),
        matched_paths,
    }))
}

/// Returns the first path under `dir` matching `glob`, relative to `dir`.
///
/// Entries are walked in file-name order without following symbolic links,
/// so a link cycle inside a candidate cannot keep the walk going. Hidden
/// entries are pruned unless the pattern names one literally. A trailing
/// `/**` also matches the directory it is attached to. Unreadable entries
/// met along the way are skipped rather than reported.
pub fn first_match(dir: &Path, glob: &str) -> Result<Option<PathBuf>> {
    let invalid = |e: glob::PatternError| Error::InvalidPattern {
        pattern: glob.to_string(),
        message: e.to_string(),
    };
    let pattern = Pattern::new(glob).map_err(invalid)?;
    let dir_itself = glob
        .strip_suffix("/**")
        .filter(|prefix| !prefix.is_empty())
        .map(Pattern::new)
        .transpose()
        .map_err(invalid)?;

    let options = MatchOptions {
        case_sensitive: true,
        require_literal_separator: true,
        require_literal_leading_dot: true,
    };
    let names_hidden = glob.split('/').any(|component| component.starts_with('.'));

    let mut walker = WalkDir::new(dir)
        .min_depth(1)
        .follow_links(false)
        .sort_by_file_name();
    if !glob.contains("**") {
        walker = walker.max_depth(Path::new(glob).components().count());
    }

    let entries = walker.into_iter().filter_entry(|entry| {
        names_hidden || !entry.file_name().to_string_lossy().starts_with('.')
    });
    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                trace!("skipping unreadable entry under {}: {}", dir.display(), e);
                continue;
            }
        };
        let Ok(relative) = entry.path().strip_prefix(dir) else {
            continue;
        };
        let hit = pattern.matches_path_with(relative, options)
            || dir_itself
                .as_ref()
                .is_some_and(|prefix| prefix.matches_path_with(relative, options));
        if hit {
            return Ok(Some(relative.to_path_buf()));
        }
    }
    Ok(None)
}
