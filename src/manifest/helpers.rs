//! Manifest discovery.

use anyhow::{Context, Result};
use std::path::PathBuf;

use crate::constants::MANIFEST_FILE_NAME;
use crate::core::CmdepsError;

/// Find `cmdeps.toml` by walking up from the current directory.
///
/// Mirrors how Cargo and Git locate their project files, so cmdeps can be run
/// from any subdirectory of the recipe.
pub fn find_manifest() -> Result<PathBuf> {
    let current = std::env::current_dir()
        .context("Cannot determine current working directory. This may indicate a permission issue or corrupted filesystem")?;
    find_manifest_from(current)
}

/// Use `explicit_path` when given, otherwise search from the current directory.
///
/// An explicit path that does not exist is an error; there is no fallback
/// search in that case.
pub fn find_manifest_with_optional(explicit_path: Option<PathBuf>) -> Result<PathBuf> {
    match explicit_path {
        Some(path) => {
            if path.is_file() {
                Ok(path)
            } else {
                Err(CmdepsError::ManifestNotFound.into())
            }
        }
        None => find_manifest(),
    }
}

/// Find `cmdeps.toml` in `current` or the nearest ancestor that has one.
pub fn find_manifest_from(mut current: PathBuf) -> Result<PathBuf> {
    loop {
        let manifest_path = current.join(MANIFEST_FILE_NAME);
        if manifest_path.is_file() {
            tracing::debug!(path = %manifest_path.display(), "found manifest");
            return Ok(manifest_path);
        }

        if !current.pop() {
            return Err(CmdepsError::ManifestNotFound.into());
        }
    }
}
