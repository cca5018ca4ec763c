use cmdeps_cli::test_utils::{ManifestFixture, TestProject};
use predicates::prelude::*;
use serde_json::Value;

use super::cmdeps;

fn package_id(project: &TestProject, extra: &[&str]) -> String {
    let output = cmdeps(project)
        .args(extra)
        .args(["package-info", "--package-folder", "pkg", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    let value: Value = serde_json::from_slice(&output.stdout).unwrap();
    value["package_id"].as_str().unwrap().to_string()
}

#[test]
fn test_compiled_package_lists_libraries() {
    let project = TestProject::new(&ManifestFixture::library()).unwrap();
    project.write_file("pkg/lib/libwidget.so", "").unwrap();
    project.write_file("pkg/lib/widget_tools.lib", "").unwrap();
    project.write_file("pkg/lib/widget.pc", "").unwrap();

    cmdeps(&project)
        .args(["package-info", "--package-folder", "pkg"])
        .assert()
        .success()
        .stdout(predicate::str::contains("header_only: false"))
        .stdout(predicate::str::contains("libs: widget, widget_tools"))
        .stdout(predicate::str::contains("package_id: sha256:"));
}

#[test]
fn test_interface_package_identity_ignores_configuration() {
    let project = TestProject::new(&ManifestFixture::interface()).unwrap();
    project.write_file("pkg/lib/libwidget.so", "").unwrap();

    let debug = package_id(&project, &["-s", "build_type=Debug", "-o", "shared=True"]);
    let release = package_id(&project, &["-s", "build_type=Release", "-s", "os=Windows"]);
    assert_eq!(debug, release);

    cmdeps(&project)
        .args(["package-info", "--package-folder", "pkg"])
        .assert()
        .success()
        .stdout(predicate::str::contains("header_only: true"))
        .stdout(predicate::str::contains("libwidget").not());
}

#[test]
fn test_compiled_package_identity_tracks_configuration() {
    let project = TestProject::new(&ManifestFixture::library()).unwrap();

    let debug = package_id(&project, &["-s", "build_type=Debug"]);
    let release = package_id(&project, &["-s", "build_type=Release"]);
    assert_ne!(debug, release);
}
