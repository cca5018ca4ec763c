//! Recipe manifest (`cmdeps.toml`).
//!
//! The manifest records which recipe flavor a project follows, where its
//! `name-version.txt` lives, and the option and setting values to evaluate
//! with. Command-line `-o`/`-s` assignments are applied on top.
//!
//! # Structure
//!
//! ```toml
//! [recipe]
//! flavor = "consumer"                # library | consumer | test-harness
//! name-version = "name-version.txt"  # relative to this file
//!
//! [options]
//! shared = true
//! vulkan_reference = "vulkan-headers/1.3.231.1"
//!
//! [settings]
//! os = "Windows"
//! build_type = "Release"
//! ```
//!
//! Option values may be TOML booleans or strings (`"True"`, `"False"`,
//! `"None"`). Which options are accepted depends on the flavor; see
//! [`crate::options`].

pub mod helpers;
pub mod name_version;

pub use helpers::{find_manifest, find_manifest_from, find_manifest_with_optional};
pub use name_version::NameVersion;

use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::constants::NAME_VERSION_FILE_NAME;
use crate::core::{CmdepsError, FileOperation, FileResultExt};
use crate::options::{RecipeFlavor, Settings};

/// `[recipe]` table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RecipeSection {
    #[serde(default)]
    pub flavor: RecipeFlavor,
    /// Identity file path, relative to the manifest directory.
    #[serde(default, rename = "name-version")]
    pub name_version: Option<PathBuf>,
}

/// Parsed `cmdeps.toml`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RecipeManifest {
    #[serde(default)]
    pub recipe: RecipeSection,
    /// Raw option values, validated against the flavor when resolved.
    #[serde(default)]
    pub options: BTreeMap<String, toml::Value>,
    #[serde(default)]
    pub settings: Settings,
    /// Directory the manifest was loaded from.
    #[serde(skip)]
    pub manifest_dir: Option<PathBuf>,
}

impl RecipeManifest {
    /// Parse manifest text. `origin` is used in error messages only.
    pub fn parse(content: &str, origin: &str) -> Result<Self> {
        toml::from_str(content)
            .map_err(|e| CmdepsError::ManifestParseError {
                file: origin.to_string(),
                reason: e.to_string(),
            })
            .with_context(|| format!("Invalid manifest file: {origin}"))
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).with_file_context(
            FileOperation::Read,
            path,
            "reading recipe manifest",
            "manifest",
        )?;

        let mut manifest = Self::parse(&content, &path.display().to_string())?;
        manifest.manifest_dir = Some(
            path.parent()
                .ok_or_else(|| anyhow::anyhow!("Manifest path has no parent directory"))?
                .to_path_buf(),
        );

        // Surface option typos at load time rather than at first use
        manifest.option_assignments()?;

        tracing::debug!(
            path = %path.display(),
            flavor = %manifest.recipe.flavor,
            options = manifest.options.len(),
            "loaded manifest"
        );
        Ok(manifest)
    }

    #[must_use]
    pub const fn flavor(&self) -> RecipeFlavor {
        self.recipe.flavor
    }

    /// Absolute location of the identity file.
    #[must_use]
    pub fn name_version_path(&self) -> PathBuf {
        let relative = self
            .recipe
            .name_version
            .clone()
            .unwrap_or_else(|| PathBuf::from(NAME_VERSION_FILE_NAME));

        match &self.manifest_dir {
            Some(dir) => dir.join(relative),
            None => relative,
        }
    }

    /// Option values as `(name, text)` pairs in name order.
    ///
    /// Booleans become `True`/`False`; integers are passed through as text so
    /// `1`/`0` work. Arrays, tables and floats are rejected.
    pub fn option_assignments(&self) -> Result<Vec<(String, String)>> {
        self.options
            .iter()
            .map(|(option, value)| -> Result<(String, String)> {
                let text = match value {
                    toml::Value::Boolean(true) => "True".to_string(),
                    toml::Value::Boolean(false) => "False".to_string(),
                    toml::Value::String(text) => text.clone(),
                    toml::Value::Integer(number) => number.to_string(),
                    other => {
                        return Err(anyhow::Error::from(CmdepsError::InvalidOption {
                            option: option.clone(),
                            reason: format!(
                                "expected a boolean or string, got {}",
                                other.type_str()
                            ),
                        }));
                    }
                };
                Ok((option.clone(), text))
            })
            .collect()
    }
}
