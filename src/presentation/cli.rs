//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! ## Design Notes
//!
//! - The binary is the command itself; there are no subcommands
//! - `--role` has no clap default so the configured default can apply

use std::path::PathBuf;

use clap::Parser;

const EXAMPLES: &str = "\
Examples:
  single-role-delete --role=administrator --dry-run
  single-role-delete";

/// Delete users with the specified role only.
///
/// Finds every account whose role set is exactly the given role and deletes
/// it. Accounts holding more than one role are never touched.
#[derive(Parser, Debug)]
#[command(name = "single-role-delete")]
#[command(version, about, long_about)]
#[command(after_help = EXAMPLES)]
pub struct Cli {
    /// Lists users that should be deleted without deleting them.
    #[arg(long)]
    pub dry_run: bool,

    /// Role to search for [default: subscriber]
    #[arg(long, value_name = "NAME")]
    pub role: Option<String>,

    /// TOML file holding the user directory
    #[arg(long, value_name = "PATH")]
    pub users_file: Option<PathBuf>,

    /// Configuration file (defaults to ./single-role-delete.toml)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Output NDJSON events instead of text
    #[arg(long)]
    pub json: bool,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}
