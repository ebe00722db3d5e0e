//! # Completions Command Implementation
//!
//! Writes a shell completion script for `checkout-locator` to stdout, using
//! `clap_complete`. Redirect it wherever your shell loads completions from:
//!
//! ```bash
//! checkout-locator completions bash > ~/.local/share/bash-completion/completions/checkout-locator
//! checkout-locator completions zsh > ~/.zfunc/_checkout-locator
//! ```

use std::io;

use anyhow::Result;
use clap::{Args, CommandFactory};
use clap_complete::{generate, Shell};

use crate::cli::Cli;

/// Generate shell completion scripts
#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// The shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

/// Execute the `completions` command.
pub fn execute(args: CompletionsArgs) -> Result<()> {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(args.shell, &mut cmd, name, &mut io::stdout());
    Ok(())
}
