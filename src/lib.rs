//! cmdeps - native library recipe evaluation
//!
//! Evaluates a package recipe for a native C++ library that is built with CMake
//! and resolved by a Conan-style package manager. Given the recipe flavor, its
//! option values and the build settings, cmdeps decides which dependency
//! references apply, which options flow down to those dependencies, and, once
//! the package manager has resolved everything, writes the CMake variable file
//! the consuming build uses to find each package.
//!
//! # Pipeline
//!
//! ```text
//! cmdeps.toml + -o/-s ──► OptionSet ──► select ──► [resolver] ──► propagate
//!                                                        │
//!                          package-info ◄── export ◄─────┘
//! ```
//!
//! Evaluation is a single synchronous pass. Each stage runs inside one
//! error-logging boundary ([`core::run_stage`]); an inconsistent resolver graph
//! aborts before anything is written.
//!
//! # Core Modules
//!
//! - [`models`] - dependency references (`name/version[@user/channel]`)
//! - [`options`] - flavors, typed option set and settings
//! - [`selector`] - the selection table
//! - [`propagator`] - option values pushed onto selected dependencies
//! - [`exporter`] - `conan-packages.cmake` generation
//! - [`packaging`] - library list and package identity
//!
//! # Supporting Modules
//!
//! - [`manifest`] - `cmdeps.toml` and `name-version.txt`
//! - [`recipe`] - the staged evaluation pipeline
//! - [`cli`] - subcommands over the pipeline
//! - [`core`] - error types and the stage boundary
//! - [`utils`] - atomic file writes
//!
//! # Manifest Format (cmdeps.toml)
//!
//! ```toml
//! [recipe]
//! flavor = "library"
//!
//! [options]
//! shared = false
//! dependencies = true
//!
//! [settings]
//! os = "Linux"
//! build_type = "Release"
//! ```
//!
//! # Generated File
//!
//! ```cmake
//! set("${PROJECT_NAME}_CONAN_PACKAGE_NAMES"
//!     "glm"
//! )
//! set("${PROJECT_NAME}_CMAKE_PACKAGE_NAMES"
//!     "glm" # glm
//! )
//! set("${PROJECT_NAME}_CMAKE_PACKAGE_VERSIONS"
//!     "cci.20230113" # glm
//! )
//! set("${PROJECT_NAME}_CMAKE_PACKAGE_PATHS"
//!     "/home/user/.conan/data/glm/cci.20230113/_/_/package/5ab8" # glm
//! )
//! ```

// Core functionality modules
pub mod cli;
pub mod constants;
pub mod core;
pub mod recipe;

// Recipe evaluation
pub mod exporter;
pub mod options;
pub mod packaging;
pub mod propagator;
pub mod selector;

// Supporting modules
pub mod manifest;
pub mod models;
pub mod utils;

// test_utils module is available for both unit tests and integration tests
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
