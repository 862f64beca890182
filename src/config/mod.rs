//! Configuration parsing and persistence.
//!
//! The configuration is a small TOML file holding the exclusion sets and
//! traversal options. A missing file is replaced with defaults, which are
//! written back so the user has something to edit.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Top-level configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Bundling options.
    #[serde(default)]
    pub bundle: BundleConfig,
}

/// Options controlling traversal and exclusion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BundleConfig {
    /// Directory base names pruned from traversal (exact match).
    #[serde(default = "default_exclude_dirs")]
    pub exclude_dirs: Vec<String>,

    /// File-name substrings excluded from bundling.
    #[serde(default = "default_exclude_patterns")]
    pub exclude_patterns: Vec<String>,

    /// Whether to follow symbolic links during traversal.
    #[serde(default)]
    pub follow_symlinks: bool,

    /// Whether to sort entries lexically at each directory level.
    #[serde(default = "default_sort_entries")]
    pub sort_entries: bool,
}

impl Default for BundleConfig {
    fn default() -> Self {
        Self {
            exclude_dirs: default_exclude_dirs(),
            exclude_patterns: default_exclude_patterns(),
            follow_symlinks: false,
            sort_entries: default_sort_entries(),
        }
    }
}

/// Default directory exclusion set.
fn default_exclude_dirs() -> Vec<String> {
    crate::filter::DEFAULT_EXCLUDE_DIRS
        .iter()
        .map(ToString::to_string)
        .collect()
}

/// Default file exclusion pattern set.
fn default_exclude_patterns() -> Vec<String> {
    crate::filter::DEFAULT_EXCLUDE_PATTERNS
        .iter()
        .map(ToString::to_string)
        .collect()
}

/// Entries are sorted unless the user opts out.
const fn default_sort_entries() -> bool {
    true
}

impl Config {
    /// Returns the default configuration file path under the home directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn default_path() -> Result<PathBuf> {
        let home = dirs::home_dir().context("Could not find home directory")?;
        Ok(home.join(crate::DEFAULT_CONFIG_PATH))
    }

    /// Load configuration from a file.
    ///
    /// A missing file is treated as defaults, which are saved back to `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, contains invalid TOML,
    /// or the defaults cannot be written back.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            let config = Self::default();
            config.save(path)?;
            return Ok(config);
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Invalid config file: {}", path.display()))
    }

    /// Save configuration to a file.
    ///
    /// # Errors
    ///
    /// Returns an error if parent directories cannot be created or the file
    /// cannot be written.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let toml_str = toml::to_string_pretty(self)?;
        let mut file = std::fs::File::create(path)?;
        file.write_all(toml_str.as_bytes())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = Config::default();

        assert_eq!(config.bundle.exclude_dirs, vec!["node_modules", ".git"]);
        assert_eq!(config.bundle.exclude_patterns, vec![".env"]);
        assert!(!config.bundle.follow_symlinks);
        assert!(config.bundle.sort_entries);
    }

    #[test]
    fn test_load_missing_file_writes_defaults() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nested/config");

        let config = Config::load(&path).unwrap();

        assert!(path.exists());
        assert_eq!(config.bundle.exclude_dirs, vec!["node_modules", ".git"]);
    }

    #[test]
    fn test_save_load_round_trip() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config");

        let mut config = Config::default();
        config.bundle.exclude_dirs.push("target".to_string());
        config.bundle.exclude_patterns.push(".secret".to_string());
        config.bundle.sort_entries = false;
        config.save(&path).unwrap();

        let loaded = Config::load(&path).unwrap();
        assert_eq!(loaded.bundle.exclude_dirs, config.bundle.exclude_dirs);
        assert_eq!(loaded.bundle.exclude_patterns, config.bundle.exclude_patterns);
        assert!(!loaded.bundle.sort_entries);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config");
        std::fs::write(&path, "[bundle]\nexclude_dirs = [\"vendor\"]\n").unwrap();

        let config = Config::load(&path).unwrap();

        assert_eq!(config.bundle.exclude_dirs, vec!["vendor"]);
        assert_eq!(config.bundle.exclude_patterns, vec![".env"]);
        assert!(config.bundle.sort_entries);
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config");
        std::fs::write(&path, "bundle = not toml").unwrap();

        assert!(Config::load(&path).is_err());
    }
}
