//! CLI argument parsing and command dispatch

use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};

use checkout_locator::locator::Locator;
use checkout_locator::source_tree;

use crate::commands;

/// Checkout Locator - Find checkouts inside a multi-repository source tree
#[derive(Parser, Debug)]
#[command(name = "checkout-locator")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    #[command(flatten)]
    tree: TreeArgs,

    /// Set log level (error, warn, info, debug, trace)
    ///
    /// `RUST_LOG` takes precedence when set.
    #[arg(long, global = true, value_name = "LEVEL", default_value = "warn")]
    log_level: String,
}

/// Where the source tree lives
#[derive(Args, Debug)]
pub struct TreeArgs {
    /// Root of the source tree.
    ///
    /// Defaults to the nearest parent of the current directory containing
    /// build/soong/soong_ui.bash.
    #[arg(long, global = true, value_name = "DIR", env = "ANDROID_BUILD_TOP")]
    pub top_dir: Option<PathBuf>,

    /// Build-output directory, never searched.
    ///
    /// Relative paths are taken relative to the tree root. Defaults to
    /// `<top-dir>/out`.
    #[arg(long, global = true, value_name = "DIR", env = "OUT_DIR")]
    pub out_dir: Option<PathBuf>,
}

impl TreeArgs {
    /// Builds the locator every search command shares.
    pub fn locator(&self) -> Result<Locator> {
        let cwd = env::current_dir().context("Failed to get current directory")?;
        let top_dir = source_tree::resolve_top_dir(self.top_dir.as_deref(), &cwd)?;
        let out_dir = source_tree::resolve_out_dir(self.out_dir.as_deref(), &top_dir);
        Ok(Locator::new(top_dir, out_dir))
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the root of the source tree
    Top,
    /// Print the first checkout satisfying the patterns
    Dir(commands::dir::DirArgs),
    /// Print the first checkout satisfying the patterns and what each required pattern matched
    Match(commands::matches::MatchArgs),
    /// Print a file matched by a single pattern
    File(commands::file::FileArgs),
    /// Generate shell completion scripts
    Completions(commands::completions::CompletionsArgs),
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(self) -> Result<()> {
        init_logging(&self.log_level);

        match self.command {
            Commands::Top => commands::top::execute(&self.tree.locator()?),
            Commands::Dir(args) => commands::dir::execute(args, &self.tree.locator()?),
            Commands::Match(args) => commands::matches::execute(args, &self.tree.locator()?),
            Commands::File(args) => commands::file::execute(args, &self.tree.locator()?),
            Commands::Completions(args) => commands::completions::execute(args),
        }
    }
}

fn init_logging(level: &str) {
    let env = env_logger::Env::default().default_filter_or(level);
    // A second initialization only happens in tests; ignore it
    let _ = env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .try_init();
}
