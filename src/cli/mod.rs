//! Command-line interface for cmdeps.
//!
//! Each subcommand exposes one stage of recipe evaluation:
//!
//! - `inspect` - package name, version, flavor and resolved options
//! - `select` - direct and build-time references
//! - `configure` - option values pushed onto dependencies
//! - `generate` - write `conan-packages.cmake` from a resolved graph
//! - `package-info` - library list and identity of a built package
//!
//! # Global Options
//!
//! - `--manifest-path <PATH>` - use this `cmdeps.toml` instead of searching
//! - `-o, --option <KEY=VALUE>` - override an option (repeatable)
//! - `-s, --setting <KEY=VALUE>` - override a setting (repeatable)
//! - `-v, --verbose` - debug logging
//! - `-q, --quiet` - errors only
//!
//! ```bash
//! cmdeps -o dependencies=False select
//! cmdeps -o shared=False -s os=Windows configure --format json
//! cmdeps generate --graph graph.json --output-dir build
//! ```

mod common;
mod configure;
mod generate;
mod inspect;
mod package_info;
mod select;


pub use common::{CommandContext, OutputFormat};

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Runtime configuration derived from global flags.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliConfig {
    /// Default log filter when `RUST_LOG` is not set.
    pub log_level: String,
}

#[derive(Parser, Debug)]
#[command(
    name = "cmdeps",
    about = "Select, configure and export native library dependencies",
    version,
    author,
    long_about = "cmdeps evaluates a native-library recipe: which dependency references apply \
                  under the current options, which options flow down to them, and the CMake \
                  variable file that lets the consuming build find the resolved packages."
)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable debug logging
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    verbose: bool,

    /// Only log errors
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Path to cmdeps.toml (defaults to searching upwards from the current directory)
    #[arg(long, global = true)]
    manifest_path: Option<PathBuf>,

    /// Override a recipe option, e.g. `-o shared=False`
    #[arg(short = 'o', long = "option", value_name = "KEY=VALUE", global = true)]
    options: Vec<String>,

    /// Override a setting, e.g. `-s os=Windows`
    #[arg(short = 's', long = "setting", value_name = "KEY=VALUE", global = true)]
    settings: Vec<String>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Show package identity and resolved options
    Inspect(inspect::InspectCommand),
    /// List the dependency references this configuration requests
    Select(select::SelectCommand),
    /// Show option values propagated to dependencies
    Configure(configure::ConfigureCommand),
    /// Write conan-packages.cmake from a resolved dependency graph
    Generate(generate::GenerateCommand),
    /// Report libraries and identity of a built package
    PackageInfo(package_info::PackageInfoCommand),
}

impl Cli {
    #[must_use]
    pub fn build_config(&self) -> CliConfig {
        let log_level = if self.verbose {
            "debug"
        } else if self.quiet {
            "error"
        } else {
            "warn"
        };

        CliConfig {
            log_level: log_level.to_string(),
        }
    }

    #[must_use]
    pub fn command_context(&self) -> CommandContext {
        CommandContext {
            manifest_path: self.manifest_path.clone(),
            options: self.options.clone(),
            settings: self.settings.clone(),
        }
    }

    pub fn execute(self) -> Result<()> {
        let context = self.command_context();

        match self.command {
            Commands::Inspect(cmd) => cmd.execute(&context),
            Commands::Select(cmd) => cmd.execute(&context),
            Commands::Configure(cmd) => cmd.execute(&context),
            Commands::Generate(cmd) => cmd.execute(&context),
            Commands::PackageInfo(cmd) => cmd.execute(&context),
        }
    }
}
