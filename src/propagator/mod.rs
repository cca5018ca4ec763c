//! Option propagation onto selected dependencies.
//!
//! Libraries this project links as ABI peers must be built with the same
//! linkage, so the project's `shared` value is copied onto each of them. The
//! logging façade is always consumed header-only and gets `interface = true`
//! whatever the project's own `interface` is.
//!
//! Propagation only writes the project's intent downwards. Targets that were
//! not selected for this configuration are skipped.

use serde::Serialize;
use std::collections::BTreeMap;

use crate::constants::{LOGGING_FACADE, SHARED_PEERS};
use crate::options::OptionSet;
use crate::selector::Selection;

/// Option values assigned to dependencies, keyed by package name then option.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct DependencyOptions(BTreeMap<String, BTreeMap<String, bool>>);

impl DependencyOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, dependency: &str, option: &str, value: bool) {
        self.0.entry(dependency.to_string()).or_default().insert(option.to_string(), value);
    }

    #[must_use]
    pub fn get(&self, dependency: &str, option: &str) -> Option<bool> {
        self.0.get(dependency).and_then(|options| options.get(option)).copied()
    }

    /// `(dependency, option, value)` triples in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str, bool)> {
        self.0.iter().flat_map(|(dependency, options)| {
            options.iter().map(move |(option, value)| (dependency.as_str(), option.as_str(), *value))
        })
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Push the project's option values onto the selected dependencies.
///
/// Running this twice over the same inputs leaves `target` unchanged the
/// second time.
pub fn propagate(options: &OptionSet, selection: &Selection, target: &mut DependencyOptions) {
    for peer in SHARED_PEERS {
        if selection.contains(peer) {
            target.set(peer, "shared", options.shared);
        } else {
            tracing::debug!(dependency = peer, "not selected, skipping shared propagation");
        }
    }

    if selection.contains(LOGGING_FACADE) {
        target.set(LOGGING_FACADE, "interface", true);
    }
}

/// Convenience wrapper returning a fresh [`DependencyOptions`].
#[must_use]
pub fn propagated(options: &OptionSet, selection: &Selection) -> DependencyOptions {
    let mut target = DependencyOptions::new();
    propagate(options, selection, &mut target);
    target
}
