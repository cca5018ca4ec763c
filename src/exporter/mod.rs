//! Resolved dependency metadata export.
//!
//! After the package manager has resolved and fetched everything, its view of
//! the dependency graph is written out as `conan-packages.cmake`: four CMake
//! list variables that line up index for index.
//!
//! ```cmake
//! set("${PROJECT_NAME}_CONAN_PACKAGE_NAMES"
//!     "vulkan-headers"
//! )
//! set("${PROJECT_NAME}_CMAKE_PACKAGE_NAMES"
//!     "VulkanHeaders" # vulkan-headers
//! )
//! set("${PROJECT_NAME}_CMAKE_PACKAGE_VERSIONS"
//!     "1.3.250.0" # vulkan-headers
//! )
//! set("${PROJECT_NAME}_CMAKE_PACKAGE_PATHS"
//!     "C:/conan/data/vulkan-headers/1.3.250.0/_/_/package/5ab8" # vulkan-headers
//! )
//! ```
//!
//! Consumers index the lists by position, so entries keep the resolver's
//! order. `${PROJECT_NAME}` is written literally for the consumer to expand.

pub mod graph;

pub use graph::{DependencyGraph, ResolvedDependency, ResolvedGraph};

use anyhow::{Context, Result};
use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::constants::{GENERATED_FILE_NAME, PROJECT_NAME_TOKEN};
use crate::core::CmdepsError;
use crate::utils::fs::atomic_write;

const TEMPLATE_NAME: &str = "conan-packages.cmake";

const PACKAGES_TEMPLATE: &str = r#"set("{{ project }}_CONAN_PACKAGE_NAMES"
{% for row in rows %}    "{{ row.package }}"
{% endfor %})
set("{{ project }}_CMAKE_PACKAGE_NAMES"
{% for row in rows %}    "{{ row.cmake_name }}" # {{ row.package }}
{% endfor %})
set("{{ project }}_CMAKE_PACKAGE_VERSIONS"
{% for row in rows %}    "{{ row.version }}" # {{ row.package }}
{% endfor %})
set("{{ project }}_CMAKE_PACKAGE_PATHS"
{% for row in rows %}    "{{ row.root }}" # {{ row.package }}
{% endfor %})
"#;

/// One line of each of the four blocks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportRow {
    pub package: String,
    pub cmake_name: String,
    pub version: String,
    pub root: String,
}

/// Rewrite every backslash to a forward slash.
#[must_use]
pub fn normalize_root(path: &str) -> String {
    path.replace('\\', "/")
}

/// Pair the resolver's identifier list with its record list.
///
/// The lists must have the same length and name the same package at every
/// index. Any disagreement is reported before a single row is produced.
pub fn collect_rows(graph: &dyn DependencyGraph) -> Result<Vec<ExportRow>> {
    let deps = graph.deps();
    let dependencies = graph.dependencies();

    if deps.len() != dependencies.len() {
        return Err(CmdepsError::ResolutionInconsistent {
            reason: format!(
                "{} package identifiers but {} resolved records",
                deps.len(),
                dependencies.len()
            ),
        }
        .into());
    }

    deps.iter()
        .zip(dependencies.iter())
        .enumerate()
        .map(|(index, (package, (record_name, record)))| -> Result<ExportRow> {
            if package != record_name {
                return Err(anyhow::Error::from(CmdepsError::ResolutionInconsistent {
                    reason: format!(
                        "entry {index} is '{package}' in the identifier list but '{record_name}' in the record list"
                    ),
                }));
            }

            Ok(ExportRow {
                package: (*package).to_string(),
                cmake_name: record.cmake_name.clone(),
                version: record.version.clone(),
                root: normalize_root(&record.rootpath),
            })
        })
        .collect()
}

/// Render the variable file into memory.
pub fn render(graph: &dyn DependencyGraph) -> Result<String> {
    let rows = collect_rows(graph)?;

    let mut context = tera::Context::new();
    context.insert("project", PROJECT_NAME_TOKEN);
    context.insert("rows", &rows);

    tera::Tera::one_off(PACKAGES_TEMPLATE, &context, false).map_err(|e| {
        anyhow::Error::from(CmdepsError::RenderError {
            template: TEMPLATE_NAME.to_string(),
            reason: e.to_string(),
        })
    })
}

/// Render and write `conan-packages.cmake` into `output_dir`.
///
/// The previous file, if any, is replaced in one step; on error it is left
/// untouched and no new file appears.
pub fn export(graph: &dyn DependencyGraph, output_dir: &Path) -> Result<PathBuf> {
    let content = render(graph)?;
    let target = output_dir.join(GENERATED_FILE_NAME);

    atomic_write(&target, content.as_bytes())
        .with_context(|| format!("Failed to write generated variables to {}", target.display()))?;

    tracing::info!(
        path = %target.display(),
        packages = graph.deps().len(),
        "wrote dependency metadata"
    );
    Ok(target)
}
