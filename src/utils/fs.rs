//! File system helpers.
//!
//! Writes go through a named temporary file in the destination directory that
//! is persisted over the target in one rename. Readers see either the previous
//! content or the new content, and a failed write leaves no stray file behind.

use anyhow::{Result, bail};
use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

use crate::core::{FileOperation, FileResultExt};

/// Create `path` and its parents if they do not exist.
pub fn ensure_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path).with_file_context(
            FileOperation::CreateDir,
            path,
            "creating output directory",
            "utils::fs",
        )?;
    } else if !path.is_dir() {
        bail!("Path exists but is not a directory: {}", path.display());
    }
    Ok(())
}

/// Atomically replace `path` with `content`.
///
/// The parent directory is created if needed. On any error the target keeps
/// its previous content, and the temporary file is removed when dropped.
pub fn atomic_write(path: &Path, content: &[u8]) -> Result<()> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    ensure_dir(parent)?;

    let write = |result: std::io::Result<()>, purpose: &str| {
        result.with_file_context(FileOperation::Write, path, purpose, "utils::fs")
    };

    let mut temp = NamedTempFile::new_in(parent)
        .with_file_context(FileOperation::Write, path, "creating temporary file", "utils::fs")?;
    write(temp.write_all(content), "writing temporary file")?;
    write(temp.as_file().sync_all(), "syncing temporary file")?;
    write(temp.persist(path).map(drop).map_err(|e| e.error), "replacing target file")?;

    Ok(())
}
