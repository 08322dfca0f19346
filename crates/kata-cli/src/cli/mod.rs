//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, help
//! text, and value enums. No business logic lives here.
//!
//! `init-kata` has no subcommands: the kata itself is described through the
//! prompts, so the flags only choose where files go and how output looks.

use std::path::PathBuf;

use clap::{Args, Parser};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name     = "init-kata",
    bin_name = "init-kata",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{1f94b} Scaffold a new kata",
    long_about = "Asks for a kata name, a function name, an optional description \
                  and whether to include DOM support, then creates the source \
                  stub, its vitest test and KATA.md. Existing files are never \
                  overwritten.",
    after_help = "EXAMPLES:\n\
        \x20 init-kata\n\
        \x20 init-kata --root ~/katas --dry-run\n\
        \x20 printf 'fizzbuzz\\n\\n\\nn\\n' | init-kata",
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(flatten)]
    pub init: InitArgs,
}

/// Where to scaffold and whether to touch the disk.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Project root. Defaults to the current directory.
    #[arg(
        short = 'C',
        long = "root",
        value_name = "DIR",
        help = "Project root (default: current directory)"
    )]
    pub root: Option<PathBuf>,

    /// Print the files that would be written, then stop.
    #[arg(long = "dry-run", help = "Show what would be created without writing")]
    pub dry_run: bool,
}

impl InitArgs {
    pub fn root(&self) -> PathBuf {
        self.root.clone().unwrap_or_else(|| PathBuf::from("."))
    }
}
