//! Directory traversal and bundle writing.
//!
//! The [`Bundler`] walks a tree with `walkdir`, prunes excluded directories
//! before they are visited, and streams each surviving file into the output
//! as a header block followed by the file's text content. Content that is
//! not valid UTF-8 is replaced with a placeholder line.

use crate::filter::ExclusionFilter;
use crate::output::print_warning;
use crate::utils::paths::make_relative;
use anyhow::{Context, Result};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{Level, debug, span};
use walkdir::WalkDir;

/// Placeholder line written in place of content that is not valid UTF-8.
pub const BINARY_PLACEHOLDER: &str = "[BINARY OR NON-TEXT FILE - skipped]";

/// Counters reported after a bundle run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BundleStats {
    /// Files whose text content was written to the bundle.
    pub files_bundled: usize,

    /// Files written as the binary placeholder instead of content.
    pub binary_placeholders: usize,

    /// Files skipped by the exclusion filter.
    pub files_skipped: usize,

    /// Files or directory entries skipped because they could not be read.
    pub read_errors: usize,
}

impl BundleStats {
    /// Total number of header blocks written to the bundle.
    #[must_use]
    pub const fn blocks_written(&self) -> usize {
        self.files_bundled + self.binary_placeholders
    }
}

/// Walks a directory tree and writes every non-excluded file into a single
/// annotated text file.
#[derive(Debug, Clone)]
pub struct Bundler {
    /// Traversal root.
    root: PathBuf,

    /// Exclusion rules applied to directories and files.
    filter: ExclusionFilter,

    /// Whether to follow symbolic links during traversal.
    follow_symlinks: bool,

    /// Whether to sort entries lexically at each directory level.
    sort_entries: bool,
}

impl Bundler {
    /// Creates a bundler rooted at `root` with the given exclusion rules.
    ///
    /// Symlinks are not followed and entries are sorted lexically unless
    /// changed through the builder methods.
    #[must_use]
    pub fn new(root: PathBuf, filter: ExclusionFilter) -> Self {
        Self {
            root,
            filter,
            follow_symlinks: false,
            sort_entries: true,
        }
    }

    /// Sets whether symbolic links are followed during traversal.
    #[must_use]
    pub fn follow_symlinks(mut self, follow: bool) -> Self {
        self.follow_symlinks = follow;
        self
    }

    /// Sets whether entries are sorted lexically at each directory level.
    ///
    /// Sorting is on by default so repeated runs over an unchanged tree
    /// produce byte-identical bundles.
    #[must_use]
    pub fn sort_entries(mut self, sort: bool) -> Self {
        self.sort_entries = sort;
        self
    }

    /// Bundles the tree into `output_path`, overwriting any existing file.
    ///
    /// Unreadable files and unlistable directories are skipped with a warning
    /// and counted in the returned stats; the rest of the tree still bundles.
    ///
    /// # Errors
    ///
    /// Returns an error if the output file cannot be created or written.
    pub fn run(&self, output_path: &Path) -> Result<BundleStats> {
        let span = span!(Level::DEBUG, "bundle", root = %self.root.display());
        let _guard = span.enter();

        let file = File::create(output_path).with_context(|| {
            format!("Failed to create output file: {}", output_path.display())
        })?;
        let mut out = BufWriter::new(file);

        // The output file may live inside the root; it must never bundle
        // itself. Canonicalize once, after creation, for a stable comparison.
        let output_abs = output_path
            .canonicalize()
            .unwrap_or_else(|_| output_path.to_path_buf());

        let mut walker = WalkDir::new(&self.root).follow_links(self.follow_symlinks);
        if self.sort_entries {
            walker = walker.sort_by_file_name();
        }

        let mut stats = BundleStats::default();

        let entries = walker.into_iter().filter_entry(|e| {
            // The root itself is never pruned, even if its own name matches.
            if e.depth() == 0 || !e.file_type().is_dir() {
                return true;
            }
            let name = e.file_name().to_string_lossy();
            !self.filter.excludes_dir_entry(&name)
        });

        for entry in entries {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    stats.read_errors += 1;
                    print_warning(&format!("Skipping unreadable entry: {e}"));
                    continue;
                }
            };

            if !entry.file_type().is_file() {
                continue;
            }

            let path = entry.path();
            let name = entry.file_name().to_string_lossy();
            if self.filter.is_file_excluded(&name) {
                debug!(path = %path.display(), "excluded by file pattern");
                stats.files_skipped += 1;
                continue;
            }

            let abs = path.canonicalize().unwrap_or_else(|_| path.to_path_buf());
            if abs == output_abs {
                debug!(path = %path.display(), "skipping the output file itself");
                continue;
            }

            match fs::read(path) {
                Ok(bytes) => {
                    let rel = make_relative(path, &self.root);
                    write_block(&mut out, &rel, &bytes, &mut stats).with_context(|| {
                        format!("Failed to write bundle to {}", output_path.display())
                    })?;
                }
                Err(e) => {
                    stats.read_errors += 1;
                    print_warning(&format!("Skipping {}: {e}", path.display()));
                }
            }
        }

        out.flush().with_context(|| {
            format!("Failed to write bundle to {}", output_path.display())
        })?;

        debug!(
            bundled = stats.files_bundled,
            placeholders = stats.binary_placeholders,
            skipped = stats.files_skipped,
            errors = stats.read_errors,
            "bundle complete"
        );

        Ok(stats)
    }
}

/// Writes one header block: the `=== FILE: rel ===` line, then the content
/// verbatim when it is valid UTF-8 or the placeholder line when it is not,
/// then the two-newline separator.
fn write_block<W: Write>(
    out: &mut W,
    rel: &Path,
    bytes: &[u8],
    stats: &mut BundleStats,
) -> Result<()> {
    writeln!(out, "=== FILE: {} ===", rel.display())?;

    match simdutf8::basic::from_utf8(bytes) {
        Ok(text) => {
            out.write_all(text.as_bytes())?;
            stats.files_bundled += 1;
        }
        Err(_) => {
            writeln!(out, "{BINARY_PLACEHOLDER}")?;
            stats.binary_placeholders += 1;
        }
    }

    out.write_all(b"\n\n")?;
    Ok(())
}
