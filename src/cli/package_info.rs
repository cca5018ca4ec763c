//! Report the libraries and identity of a built package.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use std::path::PathBuf;

use super::common::{CommandContext, OutputFormat, print_json};

#[derive(Args, Debug)]
pub struct PackageInfoCommand {
    /// Folder the package was installed into
    #[arg(short, long)]
    package_folder: PathBuf,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

impl PackageInfoCommand {
    pub fn execute(self, context: &CommandContext) -> Result<()> {
        let recipe = context.load_recipe()?;
        let info = recipe.package_info(&self.package_folder)?;

        match self.format {
            OutputFormat::Json => print_json(&info),
            OutputFormat::Text => {
                println!("package_id: {}", info.package_id);
                println!("header_only: {}", info.header_only);
                if info.libs.is_empty() {
                    println!("libs: {}", "(none)".dimmed());
                } else {
                    println!("libs: {}", info.libs.join(", "));
                }
                Ok(())
            }
        }
    }
}
