//! Command-line interface definitions for bundler.
//!
//! This module contains the CLI argument parsing structure using clap's
//! derive macros.
//!
//! Note: Field-level documentation is provided via clap doc comments, so we
//! allow missing_docs for this module to avoid redundant documentation.

#![allow(missing_docs)]
#![allow(clippy::missing_docs_in_private_items)]

use clap::Parser;
use clap_complete::Shell;
use std::path::PathBuf;

/// Main CLI structure for bundler.
#[derive(Parser)]
#[command(
    name = "bundle",
    version = crate::VERSION,
    about = "Bundle a project tree into a single annotated text file",
    long_about = "Walks a directory tree and concatenates every non-excluded file into one \
                  text file, each prefixed with a header naming its path relative to the root"
)]
pub struct Cli {
    /// Project root directory to bundle
    #[arg(short, long, default_value = ".")]
    pub directory: PathBuf,

    /// Output text file
    #[arg(short, long, default_value = crate::DEFAULT_OUTPUT_FILE)]
    pub output: PathBuf,

    /// Additional directory name to exclude (exact match, repeatable)
    #[arg(long = "exclude-dir", value_name = "NAME")]
    pub exclude_dirs: Vec<String>,

    /// Additional file name substring to exclude (repeatable)
    #[arg(long = "exclude-pattern", value_name = "SUBSTR")]
    pub exclude_patterns: Vec<String>,

    /// Start from empty exclusion sets instead of the built-in defaults
    #[arg(long)]
    pub no_default_excludes: bool,

    /// Use an alternate configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Follow symbolic links during traversal
    #[arg(long)]
    pub follow_symlinks: bool,

    /// Keep the platform's directory-listing order instead of sorting entries
    #[arg(long)]
    pub no_sort: bool,

    /// Show verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress informational messages
    #[arg(short, long)]
    pub quiet: bool,

    /// Generate shell completion scripts and exit
    #[arg(long, value_enum, value_name = "SHELL")]
    pub completions: Option<Shell>,
}
