//! # Dir Command Implementation
//!
//! This module implements the `dir` subcommand, which prints the shallowest
//! checkout under the search root satisfying every pattern.
//!
//! ## Example
//!
//! ```bash
//! # The build-system checkout, not one of its test fixtures
//! checkout-locator dir BUILD '!tests/**'
//! ```

use anyhow::Result;
use clap::Args;

use checkout_locator::locator::Locator;

use super::{search_root, SearchArgs};

/// Print the first checkout satisfying the patterns
#[derive(Args, Debug)]
pub struct DirArgs {
    #[command(flatten)]
    pub search: SearchArgs,
}

/// Execute the `dir` command.
pub fn execute(args: DirArgs, locator: &Locator) -> Result<()> {
    let root = search_root(args.search.root.as_deref(), locator);
    let dir = locator.any_dir_under(root, &args.search.patterns)?;
    println!("{}", dir.display());
    Ok(())
}
