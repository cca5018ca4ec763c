//! List the references the recipe requests for this configuration.

use anyhow::Result;
use clap::Args;
use colored::Colorize;

use super::common::{CommandContext, OutputFormat, print_json};
use crate::models::DependencyReference;

#[derive(Args, Debug)]
pub struct SelectCommand {
    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

impl SelectCommand {
    pub fn execute(self, context: &CommandContext) -> Result<()> {
        let recipe = context.load_recipe()?;
        let evaluation = recipe.evaluate()?;

        match self.format {
            OutputFormat::Json => print_json(&evaluation.selection),
            OutputFormat::Text => {
                println!("{}", evaluation.package.to_string().cyan().bold());
                print_section("direct", &evaluation.selection.direct);
                print_section("build-time", &evaluation.selection.build_time);
                Ok(())
            }
        }
    }
}

fn print_section(title: &str, references: &[DependencyReference]) {
    println!("{title}:");
    if references.is_empty() {
        println!("  {}", "(none)".dimmed());
    }
    for reference in references {
        println!("  {reference}");
    }
}
