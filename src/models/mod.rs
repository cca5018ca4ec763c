//! Shared data models for dependency references.
//!
//! A [`DependencyReference`] is the `name/version` text a recipe hands to the
//! package manager, together with how it is requested: as a direct requirement
//! that consumers inherit, or as a build-time-only requirement.

use anyhow::Result;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;

use crate::core::CmdepsError;

/// How a dependency is requested from the resolver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RequirementKind {
    /// Needed by consumers of the produced package.
    Direct,
    /// Needed only to build or test this package.
    BuildTime,
}

impl fmt::Display for RequirementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Direct => write!(f, "direct"),
            Self::BuildTime => write!(f, "build-time"),
        }
    }
}

/// One external library reference, e.g. `vulkan-headers/1.3.250.0`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DependencyReference {
    pub name: String,
    pub version_or_range: String,
    /// Optional `user/channel` suffix, kept verbatim.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channel: Option<String>,
    pub is_build_time_only: bool,
    /// True when the reference came from a user option instead of recipe data.
    pub is_user_overridable: bool,
}

/// `name/version[@user/channel]`, where the version may be a bracketed range
/// such as `[>=1.3.231 <1.4]`.
static REFERENCE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?P<name>[A-Za-z0-9_.+-]+)/(?P<version>[A-Za-z0-9_.+-]+|\[[^\[\]]+\])(?:@(?P<channel>[A-Za-z0-9_.+-]+/[A-Za-z0-9_.+-]+))?$",
    )
    .expect("reference pattern is a valid regex")
});

impl DependencyReference {
    /// Parse `name/version[@user/channel]`.
    ///
    /// `option` names the option the text came from so a malformed value
    /// produces an error the user can act on.
    pub fn parse(text: &str, option: &str) -> Result<Self> {
        let trimmed = text.trim();
        let captures = REFERENCE_RE.captures(trimmed).ok_or_else(|| {
            CmdepsError::InvalidOption {
                option: option.to_string(),
                reason: format!("'{trimmed}' is not a 'name/version[@user/channel]' reference"),
            }
        })?;

        Ok(Self {
            name: captures["name"].to_string(),
            version_or_range: captures["version"].to_string(),
            channel: captures.name("channel").map(|m| m.as_str().to_string()),
            is_build_time_only: false,
            is_user_overridable: false,
        })
    }

    /// Reference from recipe data. The constants are well formed, so this is
    /// only fallible in the sense that [`Self::parse`] is.
    pub fn recipe(text: &str) -> Result<Self> {
        Self::parse(text, "recipe")
    }

    #[must_use]
    pub fn as_build_time(mut self) -> Self {
        self.is_build_time_only = true;
        self
    }

    #[must_use]
    pub fn as_user_override(mut self) -> Self {
        self.is_user_overridable = true;
        self
    }

    #[must_use]
    pub const fn kind(&self) -> RequirementKind {
        if self.is_build_time_only { RequirementKind::BuildTime } else { RequirementKind::Direct }
    }
}

impl fmt::Display for DependencyReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.name, self.version_or_range)?;
        if let Some(channel) = &self.channel {
            write!(f, "@{channel}")?;
        }
        Ok(())
    }
}
