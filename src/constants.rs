//! Global constants used throughout the cmdeps codebase.
//!
//! File names, default option values and the fixed dependency references the
//! recipe flavors select from. Keeping the references here means a version bump
//! is a one-line change.

/// Project manifest file name, searched upwards from the working directory.
pub const MANIFEST_FILE_NAME: &str = "cmdeps.toml";

/// Default name/version source, relative to the manifest.
pub const NAME_VERSION_FILE_NAME: &str = "name-version.txt";

/// Name of the generated CMake variable file.
pub const GENERATED_FILE_NAME: &str = "conan-packages.cmake";

/// Literal placeholder the consuming build substitutes with its project name.
pub const PROJECT_NAME_TOKEN: &str = "${PROJECT_NAME}";

/// Directory inside a package folder that holds linkable libraries.
pub const PACKAGE_LIB_DIR: &str = "lib";

/// File extensions counted as linkable library artifacts.
pub const LIBRARY_EXTENSIONS: &[&str] = &["so", "lib", "a", "dylib", "bc"];

/// Strings that mean "explicitly no reference" for reference options.
pub const REFERENCE_SENTINELS: &[&str] = &["None", ""];

/// Vulkan headers pinned by the library flavor.
pub const VULKAN_HEADERS: &str = "vulkan-headers/1.3.250.0";

/// Default test framework reference for the test-harness flavor.
pub const DEFAULT_GTEST_REFERENCE: &str = "gtest/1.14.0";

/// Build/test tools the library flavor pulls in when `dependencies` is on.
pub const LIBRARY_TOOL_BUNDLE: &[&str] = &[
    "shaderc/2021.1",
    "glm/cci.20230113",
    "glfw/3.3.7",
    "tinyobjloader/1.0.6",
    "gtest/1.14.0",
    "lodepng/cci.20200615",
];

/// Fixed direct requirements of the test-harness flavor.
pub const TEST_HARNESS_REQUIREMENTS: &[&str] = &[
    "easyloggingpp/9.89",
    "glm/cci.20230113",
    "tinyobjloader/1.0.6",
    "lodepng/cci.20200615",
];

/// Windowing library the test harness needs on Windows hosts.
pub const TEST_HARNESS_WINDOWING: &str = "glfw/3.3.8";

/// Dependencies whose `shared` option follows the project's.
pub const SHARED_PEERS: &[&str] = &["shaderc", "glfw", "gtest", "lodepng"];

/// Dependency always consumed header-only.
pub const LOGGING_FACADE: &str = "easyloggingpp";

/// Environment variable overriding the log filter.
pub const LOG_ENV_VAR: &str = "RUST_LOG";
