use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Expands tilde in path to home directory
///
/// # Errors
///
/// Returns an error if the home directory cannot be determined
pub fn expand_tilde(path: &Path) -> Result<PathBuf> {
    if let Some(path_str) = path.to_str()
        && (path_str.starts_with("~/") || path_str == "~")
    {
        let home = dirs::home_dir().context("Could not find home directory")?;
        if path_str == "~" {
            return Ok(home);
        }
        return Ok(home.join(&path_str[2..]));
    }
    Ok(path.to_path_buf())
}

/// Make `path` relative to `base` if possible, otherwise return `path` as is.
#[must_use]
pub fn make_relative(path: &Path, base: &Path) -> PathBuf {
    path.strip_prefix(base)
        .map_or_else(|_| path.to_path_buf(), Path::to_path_buf)
}
