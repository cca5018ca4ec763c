//! Error boundary for pipeline stages.
//!
//! Every stage of recipe evaluation (configuration, name/version, selection,
//! propagation, export, packaging) runs through [`run_stage`]. A failure is logged once with
//! the stage name and full cause chain, then returned with the stage name added
//! as context. Individual functions inside a stage only propagate with `?`.

use anyhow::{Context, Result};
use std::fmt;

/// The stages of a recipe evaluation, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Configure,
    NameVersion,
    Select,
    Propagate,
    Export,
    Package,
}

impl Stage {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Configure => "configure",
            Self::NameVersion => "name-version",
            Self::Select => "select",
            Self::Propagate => "propagate",
            Self::Export => "export",
            Self::Package => "package",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Run `body` as `stage`, logging and re-raising any failure.
pub fn run_stage<T>(stage: Stage, body: impl FnOnce() -> Result<T>) -> Result<T> {
    tracing::debug!(stage = %stage, "starting stage");

    match body() {
        Ok(value) => {
            tracing::debug!(stage = %stage, "stage finished");
            Ok(value)
        }
        Err(error) => {
            tracing::error!(stage = %stage, error = ?error, "stage failed");
            Err(error).with_context(|| format!("Recipe stage '{stage}' failed"))
        }
    }
}
