//! Recipe evaluation pipeline.
//!
//! A [`Recipe`] is a manifest with command-line overrides applied: a flavor, a
//! typed [`OptionSet`] and [`Settings`]. Evaluating it runs the stages in
//! order, each inside [`run_stage`]:
//!
//! 1. **configure** - resolve options and settings ([`Recipe::from_manifest`])
//! 2. **name-version** - read `name-version.txt`
//! 3. **select** - decide direct and build-time references
//! 4. **propagate** - push option values onto selected dependencies
//!
//! After the external resolver has produced its graph, [`Recipe::export`]
//! writes `conan-packages.cmake`, and once the package is built
//! [`Recipe::package_info`] classifies it.

use anyhow::Result;
use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::core::{Stage, run_stage};
use crate::exporter::{self, DependencyGraph};
use crate::manifest::{NameVersion, RecipeManifest};
use crate::options::{OptionSet, RecipeFlavor, Settings};
use crate::packaging::{self, PackageInfo};
use crate::propagator::{self, DependencyOptions};
use crate::selector::{self, Selection};

/// Assignments given on the command line, applied after the manifest's.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub options: Vec<(String, String)>,
    pub settings: Vec<(String, String)>,
}

/// A configured recipe, ready to evaluate.
#[derive(Debug, Clone)]
pub struct Recipe {
    pub flavor: RecipeFlavor,
    pub options: OptionSet,
    pub settings: Settings,
    name_version_path: PathBuf,
}

/// Result of the evaluation stages.
#[derive(Debug, Clone, Serialize)]
pub struct Evaluation {
    pub package: NameVersion,
    pub flavor: RecipeFlavor,
    pub options: OptionSet,
    pub settings: Settings,
    pub selection: Selection,
    pub dependency_options: DependencyOptions,
}

impl Recipe {
    /// Combine a manifest with overrides.
    ///
    /// Manifest options are applied first, then overrides, so the command line
    /// wins. Any invalid option or setting fails the whole configuration.
    pub fn from_manifest(manifest: &RecipeManifest, overrides: &Overrides) -> Result<Self> {
        run_stage(Stage::Configure, || Self::configure(manifest, overrides))
    }

    fn configure(manifest: &RecipeManifest, overrides: &Overrides) -> Result<Self> {
        let flavor = manifest.flavor();

        let manifest_options = manifest.option_assignments()?;
        let options = OptionSet::resolve(
            flavor,
            manifest_options
                .iter()
                .chain(overrides.options.iter())
                .map(|(option, value)| (option.as_str(), value.as_str())),
        )?;

        let mut settings = manifest.settings.clone();
        for (setting, value) in &overrides.settings {
            settings.apply(setting, value)?;
        }

        Ok(Self {
            flavor,
            options,
            settings,
            name_version_path: manifest.name_version_path(),
        })
    }

    #[must_use]
    pub fn name_version_path(&self) -> &Path {
        &self.name_version_path
    }

    /// Run name/version, selection and propagation.
    pub fn evaluate(&self) -> Result<Evaluation> {
        let package = run_stage(Stage::NameVersion, || NameVersion::load(&self.name_version_path))?;

        let selection =
            run_stage(Stage::Select, || selector::select(self.flavor, &self.options, &self.settings))?;

        let dependency_options =
            run_stage(Stage::Propagate, || Ok(propagator::propagated(&self.options, &selection)))?;

        tracing::info!(
            package = %package,
            flavor = %self.flavor,
            selected = selection.len(),
            "evaluated recipe"
        );

        Ok(Evaluation {
            package,
            flavor: self.flavor,
            options: self.options.clone(),
            settings: self.settings.clone(),
            selection,
            dependency_options,
        })
    }

    /// Write the resolved graph's metadata into `output_dir`.
    pub fn export(&self, graph: &dyn DependencyGraph, output_dir: &Path) -> Result<PathBuf> {
        run_stage(Stage::Export, || exporter::export(graph, output_dir))
    }

    /// Classify the built package in `package_folder`.
    pub fn package_info(&self, package_folder: &Path) -> Result<PackageInfo> {
        run_stage(Stage::Package, || {
            packaging::classify(self.flavor, &self.options, &self.settings, package_folder)
        })
    }
}
