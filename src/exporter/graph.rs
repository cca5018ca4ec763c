//! The resolver's view of the dependency graph.
//!
//! The package manager hands over two lists: the raw package identifiers in
//! resolution order, and `(identifier, record)` pairs carrying the CMake
//! package name, version and install root. [`DependencyGraph`] is the seam
//! the exporter reads through; [`ResolvedGraph`] is the JSON file form.
//!
//! ```json
//! {
//!   "deps": ["vulkan-headers", "glm"],
//!   "dependencies": [
//!     {"name": "vulkan-headers", "cmake_name": "VulkanHeaders",
//!      "version": "1.3.250.0", "rootpath": "C:\\conan\\vk"},
//!     {"name": "glm", "cmake_name": "glm",
//!      "version": "cci.20230113", "rootpath": "/home/u/.conan/glm"}
//!   ]
//! }
//! ```
//!
//! When `deps` is omitted it is taken from the record names.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::core::{CmdepsError, FileOperation, FileResultExt};

/// Read access to resolved dependencies, in resolver order.
pub trait DependencyGraph {
    /// Raw package identifiers.
    fn deps(&self) -> Vec<&str>;

    /// `(identifier, record)` pairs.
    fn dependencies(&self) -> Vec<(&str, &ResolvedDependency)>;
}

/// Metadata for one resolved package.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedDependency {
    /// Raw package identifier, e.g. `vulkan-headers`.
    pub name: String,
    /// Name the CMake find-package generator uses, e.g. `VulkanHeaders`.
    pub cmake_name: String,
    pub version: String,
    /// Install root as reported by the resolver, native separators.
    pub rootpath: String,
}

#[derive(Debug, Deserialize)]
struct GraphFile {
    #[serde(default)]
    deps: Option<Vec<String>>,
    #[serde(default)]
    dependencies: Vec<ResolvedDependency>,
}

/// A resolved graph loaded from the resolver's JSON output.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedGraph {
    pub deps: Vec<String>,
    pub records: Vec<ResolvedDependency>,
}

impl ResolvedGraph {
    /// Graph whose identifier list mirrors the records.
    #[must_use]
    pub fn from_records(records: Vec<ResolvedDependency>) -> Self {
        let deps = records.iter().map(|record| record.name.clone()).collect();
        Self { deps, records }
    }

    pub fn from_json(content: &str, origin: &str) -> Result<Self> {
        let file: GraphFile = serde_json::from_str(content).map_err(|e| {
            CmdepsError::GraphParseError {
                file: origin.to_string(),
                reason: e.to_string(),
            }
        })?;

        Ok(match file.deps {
            Some(deps) => Self {
                deps,
                records: file.dependencies,
            },
            None => Self::from_records(file.dependencies),
        })
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).with_file_context(
            FileOperation::Read,
            path,
            "reading resolved dependency graph",
            "exporter",
        )?;

        Self::from_json(&content, &path.display().to_string())
            .with_context(|| format!("Failed to load resolved graph from {}", path.display()))
    }
}

impl DependencyGraph for ResolvedGraph {
    fn deps(&self) -> Vec<&str> {
        self.deps.iter().map(String::as_str).collect()
    }

    fn dependencies(&self) -> Vec<(&str, &ResolvedDependency)> {
        self.records.iter().map(|record| (record.name.as_str(), record)).collect()
    }
}
