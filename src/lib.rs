//! # Checkout Locator Library
//!
//! This library finds a directory inside a large multi-repository source
//! checkout: the shallowest version-controlled checkout that contains paths
//! matching a set of required globs and none matching a set of excluded
//! globs. It backs the `checkout-locator` command-line tool and can be used
//! directly by other build tooling.
//!
//! ## Quick Example
//!
//! ```no_run
//! use checkout_locator::locator::Locator;
//! use checkout_locator::pattern::SearchPattern;
//!
//! let locator = Locator::from_env()?;
//!
//! // The checkout holding a BUILD file but no test fixtures
//! let patterns = [
//!     SearchPattern::parse("BUILD")?,
//!     SearchPattern::parse("!tests/**")?,
//! ];
//! let dir = locator.any_dir_under(locator.top_dir(), &patterns)?;
//! println!("{}", dir.display());
//! # Ok::<(), checkout_locator::error::Error>(())
//! ```
//!
//! ## Core Concepts
//!
//! - **Patterns (`pattern`)**: Glob expressions tagged as required or
//!   excluded, and the per-directory evaluation that short-circuits on the
//!   first pattern that rules a directory out.
//! - **Boundaries (`boundary`)**: Only the root of a git checkout can be a
//!   search result.
//! - **Traversal (`traversal`)**: A breadth-first walk that skips symlinks,
//!   dotted names, test directories and the build-output directory, and
//!   visits siblings in name order so the first result is stable.
//! - **Caching (`cache`)**: Successful searches are remembered for the
//!   lifetime of the cache; failures are not.
//! - **Source tree (`source_tree`)**: Finding the tree root by walking up
//!   from the working directory, and resolving the output directory.
//! - **Locator (`locator`)**: The facade tying the above together.
//!
//! All filesystem access during a search goes through the `TreeOperations`
//! trait in `operations`, so the traversal can be exercised against an
//! in-memory tree or an instrumented real one.

pub mod boundary;
pub mod cache;
pub mod defaults;
pub mod error;
pub mod locator;
pub mod operations;
pub mod pattern;
pub mod source_tree;
pub mod traversal;

#[cfg(test)]
mod pattern_proptest;
