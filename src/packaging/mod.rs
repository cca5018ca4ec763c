//! Package-finalization decisions.
//!
//! Two questions are answered once the package has been built:
//!
//! - **Which libraries does it expose?** An interface package exposes none.
//!   Otherwise every library artifact in the package's `lib` folder is listed.
//! - **What is its identity?** A hash over the settings and options that
//!   shaped the binaries. An interface package ignores all of them, so every
//!   configuration shares one identity and consumers never trigger a rebuild
//!   just because they use a different compiler or build type.

use anyhow::{Context, Result};
use serde::Serialize;
use sha2::{Digest, Sha256};
use std::collections::BTreeMap;
use std::path::Path;
use walkdir::WalkDir;

use crate::constants::{LIBRARY_EXTENSIONS, PACKAGE_LIB_DIR};
use crate::core::{CmdepsError, FileOperation, FileResultExt};
use crate::options::{OptionSet, RecipeFlavor, Settings};

/// What a finished package reports to its consumers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PackageInfo {
    /// Library names to link, without `lib` prefix or extension.
    pub libs: Vec<String>,
    /// `sha256:<hex>` identity of this configuration.
    pub package_id: String,
    /// True when the identity ignores settings and options.
    pub header_only: bool,
}

/// Settings and options that feed the package identity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct IdentityInfo {
    pub settings: BTreeMap<String, String>,
    pub options: BTreeMap<String, String>,
}

impl IdentityInfo {
    #[must_use]
    pub fn new(flavor: RecipeFlavor, settings: &Settings, options: &OptionSet) -> Self {
        Self {
            settings: settings.to_pairs().into_iter().collect(),
            options: options.to_pairs(flavor).into_iter().collect(),
        }
    }

    /// Drop everything build-specific.
    pub fn header_only(&mut self) {
        self.settings.clear();
        self.options.clear();
    }

    /// Hash of the canonical JSON form.
    pub fn package_id(&self) -> Result<String> {
        let canonical =
            serde_json::to_vec(self).context("Failed to serialize package identity")?;

        let mut hasher = Sha256::new();
        hasher.update(&canonical);
        Ok(format!("sha256:{}", hex::encode(hasher.finalize())))
    }
}

/// Classify the package in `package_folder` for the given configuration.
pub fn classify(
    flavor: RecipeFlavor,
    options: &OptionSet,
    settings: &Settings,
    package_folder: &Path,
) -> Result<PackageInfo> {
    let mut identity = IdentityInfo::new(flavor, settings, options);

    let libs = if options.interface {
        identity.header_only();
        Vec::new()
    } else {
        collect_libs(package_folder)?
    };

    let info = PackageInfo {
        libs,
        package_id: identity.package_id()?,
        header_only: options.interface,
    };

    tracing::debug!(
        libs = info.libs.len(),
        package_id = %info.package_id,
        header_only = info.header_only,
        "classified package"
    );
    Ok(info)
}

/// List library names under `<package_folder>/lib`.
///
/// A missing `lib` folder means no libraries. Names are sorted by file name
/// and duplicates (e.g. `foo.a` next to `libfoo.so`) are reported once.
pub fn collect_libs(package_folder: &Path) -> Result<Vec<String>> {
    let lib_dir = package_folder.join(PACKAGE_LIB_DIR);
    if !lib_dir.exists() {
        tracing::debug!(path = %lib_dir.display(), "no lib folder in package");
        return Ok(Vec::new());
    }
    if !lib_dir.is_dir() {
        return Err(CmdepsError::FileSystemError {
            operation: "collecting package libraries".to_string(),
            path: lib_dir.display().to_string(),
        }
        .into());
    }

    let mut libs = Vec::new();
    for entry in WalkDir::new(&lib_dir).min_depth(1).max_depth(1).sort_by_file_name() {
        let entry = entry
            .map_err(|e| e.into_io_error().unwrap_or_else(|| std::io::Error::other("walk failed")))
            .with_file_context(
                FileOperation::ListDir,
                &lib_dir,
                "collecting package libraries",
                "packaging",
            )?;

        // Follows symlinks so `libfoo.so -> libfoo.so.1.2.0` counts
        if !entry.path().is_file() {
            continue;
        }
        if let Some(name) = library_name(entry.path()) {
            if !libs.contains(&name) {
                libs.push(name);
            }
        }
    }

    Ok(libs)
}

/// Library name for an artifact path, or `None` if it is not a library.
fn library_name(path: &Path) -> Option<String> {
    let extension = path.extension()?.to_str()?;
    if !LIBRARY_EXTENSIONS.contains(&extension) {
        return None;
    }

    let stem = path.file_stem()?.to_str()?;
    let name = if extension == "lib" { stem } else { stem.strip_prefix("lib").unwrap_or(stem) };

    if name.is_empty() { None } else { Some(name.to_string()) }
}
