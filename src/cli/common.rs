//! Common utilities for CLI commands

use anyhow::{Context, Result};
use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::core::{Stage, run_stage};
use crate::manifest::{RecipeManifest, find_manifest_with_optional};
use crate::options::parse_assignment;
use crate::recipe::{Overrides, Recipe};

/// Report format shared by the reporting commands.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text.
    #[default]
    Text,
    /// Pretty-printed JSON for scripts.
    Json,
}

/// Global arguments every command needs to build a [`Recipe`].
#[derive(Debug, Clone, Default)]
pub struct CommandContext {
    pub manifest_path: Option<PathBuf>,
    pub options: Vec<String>,
    pub settings: Vec<String>,
}

impl CommandContext {
    /// Parse the raw `-o`/`-s` assignments.
    pub fn overrides(&self) -> Result<Overrides> {
        let options = self
            .options
            .iter()
            .map(String::as_str)
            .map(parse_assignment)
            .collect::<Result<Vec<_>>>()?;

        let settings = self
            .settings
            .iter()
            .map(|text| {
                parse_assignment(text).with_context(|| format!("Invalid setting assignment '{text}'"))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Overrides { options, settings })
    }

    /// Locate and load the manifest, then apply overrides.
    pub fn load_recipe(&self) -> Result<Recipe> {
        let (manifest, overrides) = run_stage(Stage::Configure, || {
            let manifest_path = find_manifest_with_optional(self.manifest_path.clone())?;
            let manifest = RecipeManifest::load(&manifest_path).with_context(|| {
                format!("Failed to load manifest file: {}", manifest_path.display())
            })?;
            Ok((manifest, self.overrides()?))
        })?;

        Recipe::from_manifest(&manifest, &overrides)
    }
}

/// Print `value` as pretty JSON on stdout.
pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value).context("Failed to serialize report")?);
    Ok(())
}

/// Path relative to the current directory when it is below it.
#[must_use]
pub fn display_path(path: &Path) -> String {
    std::env::current_dir()
        .ok()
        .and_then(|cwd| path.strip_prefix(cwd).ok().map(Path::to_path_buf))
        .unwrap_or_else(|| path.to_path_buf())
        .display()
        .to_string()
}
