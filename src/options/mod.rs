//! Recipe options, settings and flavors.
//!
//! Option values reach cmdeps as strings, from `[options]` in `cmdeps.toml` or
//! from `-o key=value` on the command line. This module turns them into a typed
//! [`OptionSet`]: booleans for the linkage switches and a tri-state
//! [`ReferenceOption`] for user-overridable references.
//!
//! Which options exist depends on the [`RecipeFlavor`]:
//!
//! | flavor | options |
//! |---|---|
//! | `library` | `shared`, `interface`, `dependencies` |
//! | `consumer` | `shared`, `interface`, `vulkan_reference` |
//! | `test-harness` | `shared`, `interface`, `vulkan_reference`, `gtest_reference` |
//!
//! Setting an option the flavor does not declare is a configuration error,
//! as is a value that does not parse.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::constants::{DEFAULT_GTEST_REFERENCE, REFERENCE_SENTINELS};
use crate::core::CmdepsError;
use crate::models::DependencyReference;

/// Which of the recipe variants a project follows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RecipeFlavor {
    /// Library recipe with a `dependencies` switch and a pinned Vulkan.
    #[default]
    Library,
    /// Consumer recipe whose Vulkan requirement comes from `vulkan_reference`.
    Consumer,
    /// Test recipe: consumer behavior plus the fixed test-tool requirements.
    TestHarness,
}

impl RecipeFlavor {
    /// Options this flavor declares.
    #[must_use]
    pub const fn declared_options(self) -> &'static [&'static str] {
        match self {
            Self::Library => &["shared", "interface", "dependencies"],
            Self::Consumer => &["shared", "interface", "vulkan_reference"],
            Self::TestHarness => &["shared", "interface", "vulkan_reference", "gtest_reference"],
        }
    }

    #[must_use]
    pub fn declares(self, option: &str) -> bool {
        self.declared_options().contains(&option)
    }
}

impl fmt::Display for RecipeFlavor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Library => write!(f, "library"),
            Self::Consumer => write!(f, "consumer"),
            Self::TestHarness => write!(f, "test-harness"),
        }
    }
}

impl FromStr for RecipeFlavor {
    type Err = CmdepsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "library" => Ok(Self::Library),
            "consumer" => Ok(Self::Consumer),
            "test-harness" | "test_harness" | "test" => Ok(Self::TestHarness),
            other => Err(CmdepsError::InvalidOption {
                option: "flavor".to_string(),
                reason: format!("unknown recipe flavor '{other}' (expected library, consumer or test-harness)"),
            }),
        }
    }
}

/// A user-overridable reference option.
///
/// `Absent` and `Sentinel` behave the same for selection; they are kept apart
/// so reports can show that the user explicitly cleared the option.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(tag = "state", content = "reference", rename_all = "kebab-case")]
pub enum ReferenceOption {
    #[default]
    Absent,
    Sentinel,
    Present(DependencyReference),
}

impl ReferenceOption {
    /// Parse a raw option value.
    ///
    /// The sentinel strings are checked before the value is treated as a
    /// reference, so passing `None` never produces a requirement.
    pub fn parse(raw: Option<&str>, option: &str) -> Result<Self> {
        let Some(raw) = raw else {
            return Ok(Self::Absent);
        };

        let trimmed = raw.trim();
        if REFERENCE_SENTINELS.contains(&trimmed) {
            return Ok(Self::Sentinel);
        }

        let reference = DependencyReference::parse(trimmed, option)?.as_user_override();
        Ok(Self::Present(reference))
    }

    /// The reference, when one is set.
    #[must_use]
    pub const fn reference(&self) -> Option<&DependencyReference> {
        match self {
            Self::Present(reference) => Some(reference),
            Self::Absent | Self::Sentinel => None,
        }
    }
}

impl fmt::Display for ReferenceOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Absent => write!(f, "<unset>"),
            Self::Sentinel => write!(f, "None"),
            Self::Present(reference) => write!(f, "{reference}"),
        }
    }
}

/// Resolved option values for one build invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OptionSet {
    pub shared: bool,
    pub interface: bool,
    pub dependencies: bool,
    pub vulkan_reference: ReferenceOption,
    pub gtest_reference: ReferenceOption,
}

impl OptionSet {
    /// Default option values for `flavor`.
    pub fn defaults(flavor: RecipeFlavor) -> Result<Self> {
        let gtest_reference = match flavor {
            RecipeFlavor::TestHarness => {
                ReferenceOption::parse(Some(DEFAULT_GTEST_REFERENCE), "gtest_reference")?
            }
            RecipeFlavor::Library | RecipeFlavor::Consumer => ReferenceOption::Absent,
        };

        Ok(Self {
            shared: true,
            interface: false,
            dependencies: true,
            vulkan_reference: ReferenceOption::Absent,
            gtest_reference,
        })
    }

    /// Set one option from its string form.
    pub fn apply(&mut self, flavor: RecipeFlavor, option: &str, value: &str) -> Result<()> {
        let option = option.trim();
        if !flavor.declares(option) {
            return Err(CmdepsError::InvalidOption {
                option: option.to_string(),
                reason: format!(
                    "not declared by the {flavor} recipe (declared: {})",
                    flavor.declared_options().join(", ")
                ),
            }
            .into());
        }

        match option {
            "shared" => self.shared = parse_bool(option, value)?,
            "interface" => self.interface = parse_bool(option, value)?,
            "dependencies" => self.dependencies = parse_bool(option, value)?,
            "vulkan_reference" => {
                self.vulkan_reference = ReferenceOption::parse(Some(value), option)?;
            }
            "gtest_reference" => {
                self.gtest_reference = ReferenceOption::parse(Some(value), option)?;
            }
            other => {
                return Err(CmdepsError::InvalidOption {
                    option: other.to_string(),
                    reason: "unknown option".to_string(),
                }
                .into());
            }
        }

        tracing::debug!(option, value, "applied option");
        Ok(())
    }

    /// Defaults for `flavor`, then each assignment in order.
    pub fn resolve<'a, I>(flavor: RecipeFlavor, assignments: I) -> Result<Self>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut options = Self::defaults(flavor)?;
        for (option, value) in assignments {
            options.apply(flavor, option, value)?;
        }
        Ok(options)
    }

    /// Options as `name -> value` text, for identity hashing and reports.
    ///
    /// Only options declared by `flavor` are included.
    #[must_use]
    pub fn to_pairs(&self, flavor: RecipeFlavor) -> Vec<(String, String)> {
        flavor
            .declared_options()
            .iter()
            .map(|option| {
                let value = match *option {
                    "shared" => format_bool(self.shared),
                    "interface" => format_bool(self.interface),
                    "dependencies" => format_bool(self.dependencies),
                    "vulkan_reference" => self.vulkan_reference.to_string(),
                    _ => self.gtest_reference.to_string(),
                };
                ((*option).to_string(), value)
            })
            .collect()
    }
}

fn format_bool(value: bool) -> String {
    if value { "True".to_string() } else { "False".to_string() }
}

/// Parse a boolean option value.
///
/// Accepts `True`/`False` in any case, plus `1`/`0`, `yes`/`no` and `on`/`off`.
pub fn parse_bool(option: &str, value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        other => Err(CmdepsError::InvalidOption {
            option: option.to_string(),
            reason: format!("expected True or False, got '{other}'"),
        }
        .into()),
    }
}

/// Build settings that select flavor behavior and feed package identity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub os: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arch: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compiler: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub build_type: Option<String>,
}

impl Settings {
    pub fn apply(&mut self, setting: &str, value: &str) -> Result<()> {
        let value = value.trim();
        if value.is_empty() {
            return Err(CmdepsError::InvalidSetting {
                setting: setting.to_string(),
                reason: "value must not be empty".to_string(),
            }
            .into());
        }

        let slot = match setting.trim() {
            "os" => &mut self.os,
            "arch" => &mut self.arch,
            "compiler" => &mut self.compiler,
            "build_type" => &mut self.build_type,
            other => {
                return Err(CmdepsError::InvalidSetting {
                    setting: other.to_string(),
                    reason: "expected one of os, arch, compiler, build_type".to_string(),
                }
                .into());
            }
        };
        *slot = Some(value.to_string());
        Ok(())
    }

    #[must_use]
    pub fn is_windows(&self) -> bool {
        self.os.as_deref().is_some_and(|os| os.eq_ignore_ascii_case("windows"))
    }

    /// Settings as `name -> value` text, skipping unset ones.
    #[must_use]
    pub fn to_pairs(&self) -> Vec<(String, String)> {
        [
            ("arch", &self.arch),
            ("build_type", &self.build_type),
            ("compiler", &self.compiler),
            ("os", &self.os),
        ]
        .into_iter()
        .filter_map(|(name, value)| value.as_ref().map(|v| (name.to_string(), v.clone())))
        .collect()
    }
}

/// Split a `key=value` assignment as given to `-o` or `-s`.
pub fn parse_assignment(text: &str) -> Result<(String, String)> {
    let Some((key, value)) = text.split_once('=') else {
        return Err(CmdepsError::InvalidOption {
            option: text.trim().to_string(),
            reason: "expected 'key=value'".to_string(),
        }
        .into());
    };

    let key = key.trim();
    if key.is_empty() {
        return Err(CmdepsError::InvalidOption {
            option: text.trim().to_string(),
            reason: "option name must not be empty".to_string(),
        }
        .into());
    }

    Ok((key.to_string(), value.trim().to_string()))
}
