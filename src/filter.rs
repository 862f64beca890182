//! Exclusion rules applied during traversal.
//!
//! Matching is literal and case-sensitive: directory names are compared for
//! exact equality, file patterns are matched as substrings of the base name.
//! There are no glob or regex semantics.

use std::collections::HashSet;

/// Directory names pruned from traversal by default.
pub const DEFAULT_EXCLUDE_DIRS: &[&str] = &["node_modules", ".git"];

/// File-name substrings excluded from bundling by default.
pub const DEFAULT_EXCLUDE_PATTERNS: &[&str] = &[".env"];

/// Literal-match exclusion rules for directories and files.
#[derive(Debug, Clone, Default)]
pub struct ExclusionFilter {
    /// Exact directory base names that are never descended into.
    dirs: HashSet<String>,

    /// Substrings that exclude any file (or directory) whose base name
    /// contains one of them.
    patterns: Vec<String>,
}

impl ExclusionFilter {
    /// Creates a filter from explicit directory names and file patterns.
    #[must_use]
    pub fn new<D, P>(dirs: D, patterns: P) -> Self
    where
        D: IntoIterator<Item = String>,
        P: IntoIterator<Item = String>,
    {
        Self {
            dirs: dirs.into_iter().collect(),
            patterns: patterns.into_iter().collect(),
        }
    }

    /// Creates a filter holding only the built-in default exclusions.
    #[must_use]
    pub fn default_excludes() -> Self {
        Self::new(
            DEFAULT_EXCLUDE_DIRS.iter().map(ToString::to_string),
            DEFAULT_EXCLUDE_PATTERNS.iter().map(ToString::to_string),
        )
    }

    /// Returns true iff `name` is an exact member of the directory exclusion
    /// set.
    #[must_use]
    pub fn is_dir_excluded(&self, name: &str) -> bool {
        self.dirs.contains(name)
    }

    /// Returns true iff `name` contains any file exclusion pattern as a
    /// substring.
    #[must_use]
    pub fn is_file_excluded(&self, name: &str) -> bool {
        self.patterns.iter().any(|p| name.contains(p.as_str()))
    }

    /// Returns true iff a directory entry named `name` should be pruned.
    ///
    /// The file pattern check applies to directory names too, so a directory
    /// named `.env.d` is pruned by the default `.env` pattern.
    #[must_use]
    pub fn excludes_dir_entry(&self, name: &str) -> bool {
        self.is_dir_excluded(name) || self.is_file_excluded(name)
    }
}
