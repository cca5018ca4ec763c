use cmdeps_cli::test_utils::{ManifestFixture, TestProject};
use predicates::prelude::*;
use serde_json::Value;

use super::cmdeps;

#[test]
fn test_inspect_text() {
    let project = TestProject::new(&ManifestFixture::consumer()).unwrap();

    cmdeps(&project)
        .arg("inspect")
        .assert()
        .success()
        .stdout(predicate::str::contains("widget"))
        .stdout(predicate::str::contains("flavor: consumer"))
        .stdout(predicate::str::contains("vulkan_reference = vulkan-headers/1.3.231.1"));
}

#[test]
fn test_inspect_json_with_overrides() {
    let project = TestProject::new(&ManifestFixture::library()).unwrap();

    let output = cmdeps(&project)
        .args(["-o", "shared=off", "-s", "build_type=Debug", "inspect", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["name"], "widget");
    assert_eq!(value["version"], "1.2.3");
    assert_eq!(value["flavor"], "library");
    assert_eq!(value["options"]["shared"], "False");
    assert_eq!(value["settings"]["build_type"], "Debug");
}

#[test]
fn test_inspect_from_subdirectory() {
    let project = TestProject::new(&ManifestFixture::library()).unwrap();
    let nested = project.path().join("src/deep");
    std::fs::create_dir_all(&nested).unwrap();

    cmdeps(&project)
        .current_dir(&nested)
        .arg("inspect")
        .assert()
        .success()
        .stdout(predicate::str::contains("flavor: library"));
}

#[test]
fn test_inspect_with_explicit_manifest_path() {
    let project = TestProject::new(&ManifestFixture::test_harness()).unwrap();
    let elsewhere = tempfile::TempDir::new().unwrap();

    cmdeps(&project)
        .current_dir(elsewhere.path())
        .arg("--manifest-path")
        .arg(project.manifest_path())
        .arg("inspect")
        .assert()
        .success()
        .stdout(predicate::str::contains("flavor: test-harness"))
        .stdout(predicate::str::contains("gtest_reference = gtest/1.14.0"));
}
