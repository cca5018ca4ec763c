//! Show the recipe's identity and resolved configuration.
//!
//! ```bash
//! cmdeps inspect
//! cmdeps -o shared=False -s os=Windows inspect --format json
//! ```

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use serde::Serialize;
use std::collections::BTreeMap;

use super::common::{CommandContext, OutputFormat, print_json};
use crate::core::{Stage, run_stage};
use crate::manifest::NameVersion;

/// Print name, version, flavor, options and settings.
#[derive(Args, Debug)]
pub struct InspectCommand {
    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

#[derive(Serialize)]
struct InspectReport {
    name: String,
    version: String,
    flavor: String,
    options: BTreeMap<String, String>,
    settings: BTreeMap<String, String>,
}

impl InspectCommand {
    pub fn execute(self, context: &CommandContext) -> Result<()> {
        let recipe = context.load_recipe()?;
        let package =
            run_stage(Stage::NameVersion, || NameVersion::load(recipe.name_version_path()))?;

        let report = InspectReport {
            name: package.name,
            version: package.version,
            flavor: recipe.flavor.to_string(),
            options: recipe.options.to_pairs(recipe.flavor).into_iter().collect(),
            settings: recipe.settings.to_pairs().into_iter().collect(),
        };

        match self.format {
            OutputFormat::Json => print_json(&report),
            OutputFormat::Text => {
                println!("{} {}", report.name.cyan().bold(), report.version);
                println!("flavor: {}", report.flavor);
                println!("options:");
                for (option, value) in &report.options {
                    println!("  {option} = {value}");
                }
                if !report.settings.is_empty() {
                    println!("settings:");
                    for (setting, value) in &report.settings {
                        println!("  {setting} = {value}");
                    }
                }
                Ok(())
            }
        }
    }
}
