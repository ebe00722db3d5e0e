//! # Error Handling
//!
//! This module defines the centralized error type for `checkout-locator`.
//! It uses the `thiserror` library to build an `Error` enum covering every
//! failure a search can surface to its caller.
//!
//! ## Key Components
//!
//! - **`Error`**: The enum of all failure modes. Each variant carries enough
//!   context (the offending pattern, the patterns that were sought, the
//!   directory a scan started from) to be useful without a debugger.
//!
//! - **`Result<T>`**: A type alias for `std::result::Result<T, Error>`.
//!
//! Note that "this directory does not qualify" is never an error. Only an
//! exhausted tree, a misuse of the single-file lookup, a missing source tree
//! root or a poisoned cache lock make it out of the library.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for checkout-locator operations
#[derive(Error, Debug)]
pub enum Error {
    /// A pattern was rejected before any filesystem access.
    ///
    /// Raised for a negated pattern handed to a single-file lookup, or for a
    /// glob expression that cannot be parsed.
    #[error("Invalid pattern '{pattern}': {message}")]
    InvalidPattern { pattern: String, message: String },

    /// The whole reachable, filtered tree was searched without finding a
    /// qualifying directory.
    #[error("No suitable directory for [{}]", patterns.join(", "))]
    NotFound { patterns: Vec<String> },

    /// The upward scan for the source tree root reached the filesystem root.
    #[error(
        "Unable to find the source tree root from {}: {indicator} not found in any parent directory\n  hint: set ANDROID_BUILD_TOP or pass --top-dir",
        start.display()
    )]
    SourceTreeNotFound { start: PathBuf, indicator: String },

    /// An I/O error, wrapped from `std::io::Error`.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The search cache mutex has been poisoned.
    #[error("Lock poisoned: {context}")]
    LockPoisoned { context: String },
}

/// A convenient type alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
