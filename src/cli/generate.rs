//! Write `conan-packages.cmake` from the resolver's graph.
//!
//! ```bash
//! cmdeps generate --graph build/graph.json --output-dir build
//! ```
//!
//! On any inconsistency in the graph the command exits non-zero and the
//! output directory is left as it was.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use std::path::PathBuf;

use super::common::{CommandContext, display_path};
use crate::core::{Stage, run_stage};
use crate::exporter::ResolvedGraph;

#[derive(Args, Debug)]
pub struct GenerateCommand {
    /// Resolved dependency graph (JSON) produced by the package manager
    #[arg(short, long)]
    graph: PathBuf,

    /// Directory to write the variable file into
    #[arg(long, default_value = ".")]
    output_dir: PathBuf,
}

impl GenerateCommand {
    pub fn execute(self, context: &CommandContext) -> Result<()> {
        let recipe = context.load_recipe()?;
        let graph = run_stage(Stage::Export, || ResolvedGraph::load(&self.graph))?;

        let written = recipe.export(&graph, &self.output_dir)?;

        println!(
            "{} Wrote {} ({} packages)",
            "✓".green(),
            display_path(&written),
            graph.records.len()
        );
        Ok(())
    }
}
