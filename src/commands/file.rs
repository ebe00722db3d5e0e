//! # File Command Implementation
//!
//! This module implements the `file` subcommand, which prints the absolute
//! path of a regular file found by a single pattern in the shallowest
//! checkout containing it. Excluded patterns are not accepted here.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use checkout_locator::locator::Locator;

use super::search_root;

/// Print a file matched by a single pattern
#[derive(Args, Debug)]
pub struct FileArgs {
    /// Directory to start the search from. Defaults to the tree root.
    #[arg(long, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Glob pattern naming the file, e.g. `**/soong_ui.bash`.
    #[arg(value_name = "PATTERN")]
    pub pattern: String,
}

/// Execute the `file` command.
pub fn execute(args: FileArgs, locator: &Locator) -> Result<()> {
    let root = search_root(args.root.as_deref(), locator);
    let file = locator.any_file_under(root, &args.pattern)?;
    println!("{}", file.display());
    Ok(())
}
