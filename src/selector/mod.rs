//! Dependency selection.
//!
//! Decides, from the flavor, options and settings, which references are
//! requested and whether each is a direct or a build-time-only requirement.
//! The three recipe variants share one selection table:
//!
//! | flavor | condition | direct | build-time |
//! |---|---|---|---|
//! | library | `dependencies` on | Vulkan headers | tool bundle |
//! | library | `dependencies` off | | Vulkan headers |
//! | consumer, test-harness | `vulkan_reference` set | the override | |
//! | consumer, test-harness | unset or `None` | | |
//! | test-harness | always | `gtest_reference`, test libraries, glfw on Windows | |
//!
//! When `dependencies` is off the project still needs Vulkan headers to
//! compile, but consumers are expected to bring their own, so the requirement
//! is not passed on to them.

use anyhow::Result;
use serde::Serialize;

use crate::constants::{
    LIBRARY_TOOL_BUNDLE, TEST_HARNESS_REQUIREMENTS, TEST_HARNESS_WINDOWING, VULKAN_HEADERS,
};
use crate::models::DependencyReference;
use crate::options::{OptionSet, RecipeFlavor, Settings};

/// References to request, partitioned by requirement kind.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Selection {
    pub direct: Vec<DependencyReference>,
    pub build_time: Vec<DependencyReference>,
}

impl Selection {
    fn require(&mut self, reference: DependencyReference) {
        self.direct.push(reference);
    }

    fn tool_require(&mut self, reference: DependencyReference) {
        self.build_time.push(reference.as_build_time());
    }

    /// Every selected reference, direct first.
    pub fn iter(&self) -> impl Iterator<Item = &DependencyReference> {
        self.direct.iter().chain(self.build_time.iter())
    }

    /// Look up a selected dependency by package name.
    #[must_use]
    pub fn find(&self, name: &str) -> Option<&DependencyReference> {
        self.iter().find(|reference| reference.name == name)
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.find(name).is_some()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.direct.len() + self.build_time.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Select the references to request for this configuration.
///
/// Fails only on a malformed reference; nothing is returned in that case.
pub fn select(flavor: RecipeFlavor, options: &OptionSet, settings: &Settings) -> Result<Selection> {
    let mut selection = Selection::default();

    match flavor {
        RecipeFlavor::Library => {
            let vulkan = DependencyReference::recipe(VULKAN_HEADERS)?;
            if options.dependencies {
                selection.require(vulkan);
                for tool in LIBRARY_TOOL_BUNDLE {
                    selection.tool_require(DependencyReference::recipe(tool)?);
                }
            } else {
                selection.tool_require(vulkan);
            }
        }
        RecipeFlavor::Consumer => {
            select_vulkan_override(&mut selection, options);
        }
        RecipeFlavor::TestHarness => {
            select_vulkan_override(&mut selection, options);
            if let Some(gtest) = options.gtest_reference.reference() {
                selection.require(gtest.clone());
            }
            for requirement in TEST_HARNESS_REQUIREMENTS {
                selection.require(DependencyReference::recipe(requirement)?);
            }
            if settings.is_windows() {
                selection.require(DependencyReference::recipe(TEST_HARNESS_WINDOWING)?);
            }
        }
    }

    tracing::debug!(
        flavor = %flavor,
        direct = selection.direct.len(),
        build_time = selection.build_time.len(),
        "selected dependencies"
    );

    Ok(selection)
}

fn select_vulkan_override(selection: &mut Selection, options: &OptionSet) {
    match options.vulkan_reference.reference() {
        Some(reference) => selection.require(reference.clone()),
        None => tracing::debug!(
            vulkan_reference = %options.vulkan_reference,
            "no Vulkan headers requested"
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(references: &[DependencyReference]) -> Vec<String> {
        references.iter().map(ToString::to_string).collect()
    }

    fn library(dependencies: &str) -> Selection {
        let options =
            OptionSet::resolve(RecipeFlavor::Library, [("dependencies", dependencies)]).unwrap();
        select(RecipeFlavor::Library, &options, &Settings::default()).unwrap()
    }

    #[test]
    fn test_library_with_dependencies() {
        let selection = library("True");
        assert_eq!(names(&selection.direct), ["vulkan-headers/1.3.250.0"]);
        assert_eq!(
            names(&selection.build_time),
            [
                "shaderc/2021.1",
                "glm/cci.20230113",
                "glfw/3.3.7",
                "tinyobjloader/1.0.6",
                "gtest/1.14.0",
                "lodepng/cci.20200615",
            ]
        );
        assert!(selection.build_time.iter().all(|r| r.is_build_time_only));
    }

    #[test]
    fn test_library_without_dependencies_moves_vulkan_to_build_time() {
        let selection = library("False");
        assert!(selection.direct.is_empty());
        assert_eq!(names(&selection.build_time), ["vulkan-headers/1.3.250.0"]);
    }

    #[test]
    fn test_vulkan_slot_is_never_both_direct_and_build_time() {
        for value in ["True", "False"] {
            let selection = library(value);
            let slots = selection.iter().filter(|r| r.name == "vulkan-headers").count();
            assert_eq!(slots, 1, "dependencies={value}");
        }
    }

    #[test]
    fn test_consumer_sentinel_selects_nothing() {
        for raw in ["None", ""] {
            let options =
                OptionSet::resolve(RecipeFlavor::Consumer, [("vulkan_reference", raw)]).unwrap();
            let selection = select(RecipeFlavor::Consumer, &options, &Settings::default()).unwrap();
            assert!(selection.is_empty(), "vulkan_reference={raw:?}");
        }
    }

    #[test]
    fn test_consumer_unset_selects_nothing() {
        let options = OptionSet::defaults(RecipeFlavor::Consumer).unwrap();
        let selection = select(RecipeFlavor::Consumer, &options, &Settings::default()).unwrap();
        assert!(selection.is_empty());
    }

    #[test]
    fn test_consumer_override_is_exact_direct_requirement() {
        let options = OptionSet::resolve(
            RecipeFlavor::Consumer,
            [("vulkan_reference", "vulkan-headers/1.3.231.1")],
        )
        .unwrap();
        let selection = select(RecipeFlavor::Consumer, &options, &Settings::default()).unwrap();
        assert_eq!(names(&selection.direct), ["vulkan-headers/1.3.231.1"]);
        assert!(selection.build_time.is_empty());
        assert!(selection.direct[0].is_user_overridable);
    }

    #[test]
    fn test_test_harness_requirements() {
        let options = OptionSet::defaults(RecipeFlavor::TestHarness).unwrap();
        let selection = select(RecipeFlavor::TestHarness, &options, &Settings::default()).unwrap();
        assert_eq!(
            names(&selection.direct),
            [
                "gtest/1.14.0",
                "easyloggingpp/9.89",
                "glm/cci.20230113",
                "tinyobjloader/1.0.6",
                "lodepng/cci.20200615",
            ]
        );
        assert!(!selection.contains("glfw"));
    }

    #[test]
    fn test_test_harness_glfw_on_windows() {
        let options = OptionSet::defaults(RecipeFlavor::TestHarness).unwrap();
        let mut settings = Settings::default();
        settings.apply("os", "Windows").unwrap();
        let selection = select(RecipeFlavor::TestHarness, &options, &settings).unwrap();
        assert_eq!(selection.find("glfw").unwrap().to_string(), "glfw/3.3.8");
    }

    #[test]
    fn test_test_harness_gtest_override_and_vulkan() {
        let options = OptionSet::resolve(
            RecipeFlavor::TestHarness,
            [("gtest_reference", "gtest/1.13.0"), ("vulkan_reference", "vulkan-headers/1.3.231.1")],
        )
        .unwrap();
        let selection = select(RecipeFlavor::TestHarness, &options, &Settings::default()).unwrap();
        assert_eq!(selection.direct[0].to_string(), "vulkan-headers/1.3.231.1");
        assert_eq!(selection.find("gtest").unwrap().to_string(), "gtest/1.13.0");
    }
}
