use cmdeps_cli::test_utils::{ManifestFixture, TestProject};
use predicates::prelude::*;

use super::cmdeps;

#[test]
fn test_static_library_propagates_shared() {
    let project = TestProject::new(&ManifestFixture::static_library()).unwrap();

    cmdeps(&project)
        .arg("configure")
        .assert()
        .success()
        .stdout("glfw:shared=False\ngtest:shared=False\nlodepng:shared=False\nshaderc:shared=False\n");
}

#[test]
fn test_dependencies_off_propagates_nothing() {
    let project = TestProject::new(&ManifestFixture::library()).unwrap();

    cmdeps(&project).args(["-o", "dependencies=False", "configure"]).assert().success().stdout("");
}

#[test]
fn test_test_harness_logging_facade_is_interface() {
    let project = TestProject::new(&ManifestFixture::test_harness()).unwrap();

    cmdeps(&project)
        .args(["configure", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"easyloggingpp\""))
        .stdout(predicate::str::contains("\"interface\": true"))
        .stdout(predicate::str::contains("\"glfw\""));
}
