use cmdeps_cli::test_utils::{ManifestFixture, TestProject};
use predicates::prelude::*;

use super::cmdeps;

#[test]
fn test_missing_manifest() {
    let project = TestProject::new(&ManifestFixture::library()).unwrap();

    cmdeps(&project)
        .args(["--manifest-path", "missing/cmdeps.toml", "select"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("cmdeps.toml not found"))
        .stderr(predicate::str::contains("--manifest-path"));
}

#[test]
fn test_invalid_manifest_syntax() {
    let project = TestProject::new(&ManifestFixture::invalid()).unwrap();

    cmdeps(&project)
        .arg("select")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid manifest file syntax"));
}

#[test]
fn test_malformed_vulkan_reference_names_option() {
    let project = TestProject::new(&ManifestFixture::consumer()).unwrap();

    cmdeps(&project)
        .args(["-o", "vulkan_reference=vulkan-headers", "select"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid value for option 'vulkan_reference'"));
}

#[test]
fn test_option_not_declared_by_flavor() {
    let project = TestProject::new(&ManifestFixture::library()).unwrap();

    cmdeps(&project)
        .args(["-o", "gtest_reference=gtest/1.13.0", "select"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not declared by the library recipe"));
}

#[test]
fn test_invalid_boolean_value() {
    let project = TestProject::new(&ManifestFixture::library()).unwrap();

    cmdeps(&project)
        .args(["-o", "shared=maybe", "configure"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("'shared'"))
        .stderr(predicate::str::contains("True or False"));
}

#[test]
fn test_malformed_name_version() {
    let project = TestProject::new(&ManifestFixture::library()).unwrap();
    project.write_file("name-version.txt", "widget-1.2.3\n").unwrap();

    cmdeps(&project)
        .arg("inspect")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Malformed name/version source"));
}

#[test]
fn test_unknown_setting() {
    let project = TestProject::new(&ManifestFixture::library()).unwrap();

    cmdeps(&project)
        .args(["-s", "compiler.version=12", "select"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid setting 'compiler.version'"));
}

#[test]
fn test_configuration_error_is_logged_with_stage() {
    let project = TestProject::new(&ManifestFixture::library()).unwrap();

    cmdeps(&project)
        .args(["-o", "shared=maybe", "select"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("stage failed"))
        .stderr(predicate::str::contains("configure"));
}

#[test]
fn test_graph_parse_error_is_logged_with_stage() {
    let project = TestProject::new(&ManifestFixture::library()).unwrap();
    project.write_file("graph.json", "not json").unwrap();

    cmdeps(&project)
        .args(["generate", "--graph", "graph.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("stage failed"))
        .stderr(predicate::str::contains("Recipe stage 'export' failed"))
        .stderr(predicate::str::contains("Invalid resolved dependency graph"));
}
