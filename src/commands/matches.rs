//! # Match Command Implementation
//!
//! This module implements the `match` subcommand. It runs the same search as
//! `dir` and additionally prints, one per line, the path each required
//! pattern matched, relative to the checkout. Excluded patterns contribute
//! no lines, so line `n + 1` belongs to the `n`th required pattern.

use anyhow::Result;
use clap::Args;

use checkout_locator::locator::Locator;

use super::{search_root, SearchArgs};

/// Print the first checkout satisfying the patterns and its matched paths
#[derive(Args, Debug)]
pub struct MatchArgs {
    #[command(flatten)]
    pub search: SearchArgs,
}

/// Execute the `match` command.
pub fn execute(args: MatchArgs, locator: &Locator) -> Result<()> {
    let root = search_root(args.search.root.as_deref(), locator);
    let found = locator.any_match_under(root, &args.search.patterns)?;
    println!("{}", found.directory.display());
    for path in &found.matched_paths {
        println!("{}", path.display());
    }
    Ok(())
}
