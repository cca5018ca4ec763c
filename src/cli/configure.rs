//! Show the option values pushed onto selected dependencies.
//!
//! Text output is one `dependency:option=Value` line per assignment, the
//! form the package manager accepts on its own command line.

use anyhow::Result;
use clap::Args;

use super::common::{CommandContext, OutputFormat, print_json};

#[derive(Args, Debug)]
pub struct ConfigureCommand {
    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

impl ConfigureCommand {
    pub fn execute(self, context: &CommandContext) -> Result<()> {
        let recipe = context.load_recipe()?;
        let evaluation = recipe.evaluate()?;

        match self.format {
            OutputFormat::Json => print_json(&evaluation.dependency_options),
            OutputFormat::Text => {
                for (dependency, option, value) in evaluation.dependency_options.iter() {
                    let value = if value { "True" } else { "False" };
                    println!("{dependency}:{option}={value}");
                }
                Ok(())
            }
        }
    }
}
