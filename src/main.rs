//! # Checkout Locator CLI
//!
//! This is the binary entry point for the `checkout-locator` command-line tool.
//!
//! Its primary responsibilities are:
//! - Parsing command-line arguments using `clap`.
//! - Setting up logging.
//! - Executing the appropriate command based on the parsed arguments.
//!
//! The search itself lives in the library crate; the binary is a thin
//! wrapper that prints what the library finds.

mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    cli.execute()
}
