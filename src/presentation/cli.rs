//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! ## Design Notes
//!
//! - Running with no arguments performs the full deployment
//! - Every flag is optional and only adjusts how the run is reported or previewed

use std::path::PathBuf;

use clap::Parser;

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// Shipsync - mirror a project to a server and run its deploy steps
#[derive(Parser, Debug)]
#[command(name = "shipsync")]
#[command(author, version, about, long_about = None)]
#[command(
    after_help = "Reads ./shipsync.toml when present. The server alias must exist in ~/.ssh/config."
)]
pub struct Cli {
    /// Config file to use instead of ./shipsync.toml
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Preview file changes with rsync --dry-run and skip remote commands
    #[arg(long)]
    pub dry_run: bool,

    /// Output NDJSON events for CI
    #[arg(long)]
    pub json: bool,

    /// Color output mode
    #[arg(long, value_enum)]
    pub color: Option<ColorWhen>,

    /// Verbosity level (-v echoes every external command)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}
