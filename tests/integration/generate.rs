use cmdeps_cli::test_utils::{GraphFixture, ManifestFixture, TestProject};
use predicates::prelude::*;

use super::cmdeps;

const EXPECTED: &str = r#"set("${PROJECT_NAME}_CONAN_PACKAGE_NAMES"
    "vulkan-headers"
    "glm"
)
set("${PROJECT_NAME}_CMAKE_PACKAGE_NAMES"
    "VulkanHeaders" # vulkan-headers
    "glm" # glm
)
set("${PROJECT_NAME}_CMAKE_PACKAGE_VERSIONS"
    "1.3.250.0" # vulkan-headers
    "cci.20230113" # glm
)
set("${PROJECT_NAME}_CMAKE_PACKAGE_PATHS"
    "C:/conan/data/vulkan-headers/1.3.250.0" # vulkan-headers
    "/home/user/.conan/data/glm/cci.20230113" # glm
)
"#;

#[test]
fn test_generate_writes_variable_file() {
    let project = TestProject::new(&ManifestFixture::library()).unwrap();
    let graph = project.write_graph(&GraphFixture::basic()).unwrap();

    cmdeps(&project)
        .args(["generate", "--graph"])
        .arg(&graph)
        .args(["--output-dir", "build"])
        .assert()
        .success()
        .stdout(predicate::str::contains("conan-packages.cmake"))
        .stdout(predicate::str::contains("2 packages"));

    let written = std::fs::read_to_string(project.path().join("build/conan-packages.cmake")).unwrap();
    assert_eq!(written, EXPECTED);
}

#[test]
fn test_generate_defaults_to_current_directory() {
    let project = TestProject::new(&ManifestFixture::consumer()).unwrap();
    project.write_graph(&GraphFixture::basic()).unwrap();

    cmdeps(&project).args(["generate", "--graph", "graph.json"]).assert().success();

    assert!(project.path().join("conan-packages.cmake").is_file());
}

#[test]
fn test_generate_replaces_previous_output() {
    let project = TestProject::new(&ManifestFixture::library()).unwrap();
    project.write_graph(&GraphFixture::basic()).unwrap();
    project.write_file("conan-packages.cmake", "set(stale)\n").unwrap();

    cmdeps(&project).args(["generate", "--graph", "graph.json"]).assert().success();

    let written = std::fs::read_to_string(project.path().join("conan-packages.cmake")).unwrap();
    assert_eq!(written, EXPECTED);
}

#[test]
fn test_mismatched_graph_writes_nothing() {
    let project = TestProject::new(&ManifestFixture::library()).unwrap();
    project.write_graph(&GraphFixture::mismatched()).unwrap();

    cmdeps(&project)
        .args(["generate", "--graph", "graph.json", "--output-dir", "out"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("inconsistent"))
        .stderr(predicate::str::contains("3 package identifiers but 2 resolved records"));

    assert!(!project.path().join("out/conan-packages.cmake").exists());
}

#[test]
fn test_reordered_graph_keeps_previous_output() {
    let project = TestProject::new(&ManifestFixture::library()).unwrap();
    project.write_graph(&GraphFixture::reordered()).unwrap();
    project.write_file("conan-packages.cmake", "set(previous)\n").unwrap();

    cmdeps(&project)
        .args(["generate", "--graph", "graph.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("entry 0"));

    let content = std::fs::read_to_string(project.path().join("conan-packages.cmake")).unwrap();
    assert_eq!(content, "set(previous)\n");
}

#[test]
fn test_generate_invalid_graph_json() {
    let project = TestProject::new(&ManifestFixture::library()).unwrap();
    project.write_file("graph.json", "{ \"deps\": [").unwrap();

    cmdeps(&project)
        .args(["generate", "--graph", "graph.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid resolved dependency graph"));
}
