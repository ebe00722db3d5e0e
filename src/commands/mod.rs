//! # CLI Command Implementations
//!
//! This module contains the implementation for each subcommand of the
//! `checkout-locator` command-line tool. Each subcommand is defined in its
//! own file.
//!
//! ## Structure
//!
//! Each command module typically contains:
//! - An `Args` struct that defines the command-specific arguments and options,
//!   derived using `clap`.
//! - An `execute` function that takes the parsed `Args` and the shared
//!   `Locator`, runs the lookup and prints the result to stdout.
//!
//! Every search command is read-only.

use std::path::{Path, PathBuf};

use clap::Args;

use checkout_locator::locator::Locator;
use checkout_locator::pattern::SearchPattern;

pub mod completions;
pub mod dir;
pub mod file;
pub mod matches;
pub mod top;

/// Arguments shared by the multi-pattern search commands
#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Directory to start the search from. Defaults to the tree root.
    #[arg(long, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Glob patterns a checkout must match. Prefix with `!` to require that
    /// nothing matches (quote it from the shell, e.g. '!tests/**').
    #[arg(value_name = "PATTERN", required = true)]
    pub patterns: Vec<SearchPattern>,
}

/// Resolves an optional `--root` against the locator's tree root.
pub fn search_root<'a>(root: Option<&'a Path>, locator: &'a Locator) -> &'a Path {
    root.unwrap_or_else(|| locator.top_dir())
}
