//! # Top Command Implementation
//!
//! Prints the root of the source tree, as resolved from `--top-dir`,
//! `ANDROID_BUILD_TOP` or the upward scan from the current directory.

use anyhow::Result;

use checkout_locator::locator::Locator;

/// Execute the `top` command.
pub fn execute(locator: &Locator) -> Result<()> {
    println!("{}", locator.top_dir().display());
    Ok(())
}
