//! Integration test suite for cmdeps
//!
//! End-to-end tests that run the `cmdeps` binary against recipe projects laid
//! out in temporary directories.
//!
//! ```bash
//! cargo test --test integration
//! ```
//!
//! # Test Organization
//!
//! - **configure**: option propagation output
//! - **errors**: exit codes and error reporting
//! - **generate**: variable file generation
//! - **inspect**: identity and resolved options
//! - **package_info**: library list and package identity
//! - **select**: selection table per flavor

use assert_cmd::Command;
use cmdeps_cli::test_utils::TestProject;

mod configure;
mod errors;
mod generate;
mod inspect;
mod package_info;
mod select;

/// `cmdeps` running inside `project`, with logging off unless asked for.
pub fn cmdeps(project: &TestProject) -> Command {
    let mut command = Command::cargo_bin("cmdeps").unwrap();
    command.current_dir(project.path()).env_remove("RUST_LOG");
    command
}
