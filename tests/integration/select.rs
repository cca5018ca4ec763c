use cmdeps_cli::test_utils::{ManifestFixture, TestProject};
use predicates::prelude::*;
use serde_json::Value;

use super::cmdeps;

fn select_json(project: &TestProject, extra: &[&str]) -> Value {
    let output = cmdeps(project)
        .args(extra)
        .args(["select", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    serde_json::from_slice(&output.stdout).unwrap()
}

fn names(value: &Value, kind: &str) -> Vec<String> {
    value[kind]
        .as_array()
        .unwrap()
        .iter()
        .map(|reference| {
            format!(
                "{}/{}",
                reference["name"].as_str().unwrap(),
                reference["version_or_range"].as_str().unwrap()
            )
        })
        .collect()
}

#[test]
fn test_library_selection_text() {
    let project = TestProject::new(&ManifestFixture::library()).unwrap();

    cmdeps(&project)
        .arg("select")
        .assert()
        .success()
        .stdout(predicate::str::contains("widget/1.2.3"))
        .stdout(predicate::str::contains("direct:\n  vulkan-headers/1.3.250.0"))
        .stdout(predicate::str::contains("  shaderc/2021.1"))
        .stdout(predicate::str::contains("  lodepng/cci.20200615"));
}

#[test]
fn test_library_without_dependencies() {
    let project = TestProject::new(&ManifestFixture::library()).unwrap();
    let value = select_json(&project, &["-o", "dependencies=False"]);

    assert!(names(&value, "direct").is_empty());
    assert_eq!(names(&value, "build_time"), ["vulkan-headers/1.3.250.0"]);
    assert_eq!(value["build_time"][0]["is_build_time_only"], Value::Bool(true));
}

#[test]
fn test_consumer_override() {
    let project = TestProject::new(&ManifestFixture::consumer()).unwrap();
    let value = select_json(&project, &[]);

    assert_eq!(names(&value, "direct"), ["vulkan-headers/1.3.231.1"]);
    assert!(names(&value, "build_time").is_empty());
}

#[test]
fn test_consumer_version_range_override() {
    let project = TestProject::new(&ManifestFixture::consumer()).unwrap();
    let value = select_json(&project, &["-o", "vulkan_reference=vulkan-headers/[>=1.3.231 <1.4]"]);

    assert_eq!(names(&value, "direct"), ["vulkan-headers/[>=1.3.231 <1.4]"]);
    assert_eq!(value["direct"][0]["is_user_overridable"], Value::Bool(true));
}

#[test]
fn test_consumer_sentinel_from_command_line() {
    let project = TestProject::new(&ManifestFixture::consumer()).unwrap();
    let value = select_json(&project, &["-o", "vulkan_reference=None"]);

    assert!(names(&value, "direct").is_empty());
    assert!(names(&value, "build_time").is_empty());
}

#[test]
fn test_test_harness_on_windows() {
    let project = TestProject::new(&ManifestFixture::test_harness()).unwrap();
    let value = select_json(&project, &[]);

    assert_eq!(
        names(&value, "direct"),
        [
            "gtest/1.14.0",
            "easyloggingpp/9.89",
            "glm/cci.20230113",
            "tinyobjloader/1.0.6",
            "lodepng/cci.20200615",
            "glfw/3.3.8",
        ]
    );
}

#[test]
fn test_test_harness_off_windows() {
    let project = TestProject::new(&ManifestFixture::test_harness()).unwrap();
    let value = select_json(&project, &["-s", "os=Linux"]);

    assert!(!names(&value, "direct").iter().any(|name| name.starts_with("glfw/")));
}
