#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

//! # Bundler - Project Tree Text Bundler
//!
//! Bundler walks a directory tree and concatenates the textual contents of
//! every non-excluded file into a single output file, prefixing each file's
//! content with a header naming its path relative to the root. The result is
//! one "bundle" text artifact that can be handed to a reviewer or fed to
//! another tool.
//!
//! ## Features
//!
//! - **Literal exclusion rules**: exact directory-name matches prune whole
//!   subtrees; substring patterns drop individual files. No glob or regex
//!   semantics.
//! - **Deterministic output**: entries are sorted lexically at each directory
//!   level, so repeated runs over an unchanged tree produce byte-identical
//!   bundles.
//! - **Binary-safe**: content that is not valid UTF-8 is replaced with a
//!   placeholder line instead of raw bytes.
//! - **Streaming writes**: one file's content in memory at a time.
//!
//! ## Architecture
//!
//! - [`cli`]: Command-line argument definitions
//! - [`bundle`]: Directory traversal and bundle writing
//! - [`filter`]: Exclusion rules for directories and files
//! - [`config`]: Configuration parsing and persistence
//! - [`output`]: Status line formatting
//! - [`utils`]: Path helpers
//!
//! ## Example Usage
//!
//! ```no_run
//! use bundler::bundle::Bundler;
//! use bundler::filter::ExclusionFilter;
//! use std::path::Path;
//!
//! # fn main() -> anyhow::Result<()> {
//! let bundler = Bundler::new(".".into(), ExclusionFilter::default_excludes());
//! let stats = bundler.run(Path::new("project_bundle1.txt"))?;
//! println!("{} file(s) bundled", stats.files_bundled);
//! # Ok(())
//! # }
//! ```

/// Command-line interface definitions (argument parsing structures).
pub mod cli;

/// Directory traversal and bundle writing.
pub mod bundle;

/// Configuration parsing and persistence.
pub mod config;

/// Exclusion rules for directories and files.
pub mod filter;

/// Output formatting for status lines.
pub mod output;

/// Utility functions and helpers.
pub mod utils;

/// Current version of the bundle binary.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default output file name when `--output` is not given.
pub const DEFAULT_OUTPUT_FILE: &str = "project_bundle1.txt";

/// Default configuration file path relative to the home directory.
pub const DEFAULT_CONFIG_PATH: &str = ".config/bundler/config";
