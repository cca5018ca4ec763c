//! Test fixtures for recipe projects.

use anyhow::Result;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use crate::constants::{MANIFEST_FILE_NAME, NAME_VERSION_FILE_NAME};

/// A `cmdeps.toml` body.
pub struct ManifestFixture {
    pub content: String,
    pub name: String,
}

impl ManifestFixture {
    /// Library flavor with default options
    pub fn library() -> Self {
        Self {
            name: "library".to_string(),
            content: r#"
[recipe]
flavor = "library"

[options]
shared = true
dependencies = true
"#
            .trim()
            .to_string(),
        }
    }

    /// Library flavor built statically
    pub fn static_library() -> Self {
        Self {
            name: "static_library".to_string(),
            content: r#"
[recipe]
flavor = "library"

[options]
shared = false
"#
            .trim()
            .to_string(),
        }
    }

    /// Consumer flavor pinned to a specific Vulkan headers release
    pub fn consumer() -> Self {
        Self {
            name: "consumer".to_string(),
            content: r#"
[recipe]
flavor = "consumer"

[options]
vulkan_reference = "vulkan-headers/1.3.231.1"
"#
            .trim()
            .to_string(),
        }
    }

    /// Test-harness flavor on Windows
    pub fn test_harness() -> Self {
        Self {
            name: "test_harness".to_string(),
            content: r#"
[recipe]
flavor = "test-harness"

[options]
shared = false
vulkan_reference = "None"

[settings]
os = "Windows"
"#
            .trim()
            .to_string(),
        }
    }

    /// Header-only library
    pub fn interface() -> Self {
        Self {
            name: "interface".to_string(),
            content: r#"
[recipe]
flavor = "library"

[options]
interface = true
"#
            .trim()
            .to_string(),
        }
    }

    /// Syntactically broken manifest
    pub fn invalid() -> Self {
        Self {
            name: "invalid".to_string(),
            content: "[recipe\nflavor = ".to_string(),
        }
    }

    pub fn write_to(&self, dir: &Path) -> Result<PathBuf> {
        let path = dir.join(MANIFEST_FILE_NAME);
        std::fs::write(&path, &self.content)?;
        Ok(path)
    }
}

/// A resolver graph JSON document.
pub struct GraphFixture {
    pub content: String,
}

impl GraphFixture {
    /// Two packages, one with a Windows-style root
    pub fn basic() -> Self {
        Self {
            content: r#"{
  "deps": ["vulkan-headers", "glm"],
  "dependencies": [
    {"name": "vulkan-headers", "cmake_name": "VulkanHeaders", "version": "1.3.250.0", "rootpath": "C:\\conan\\data\\vulkan-headers\\1.3.250.0"},
    {"name": "glm", "cmake_name": "glm", "version": "cci.20230113", "rootpath": "/home/user/.conan/data/glm/cci.20230113"}
  ]
}"#
            .to_string(),
        }
    }

    /// Identifier list longer than the record list
    pub fn mismatched() -> Self {
        Self {
            content: r#"{
  "deps": ["vulkan-headers", "glm", "zlib"],
  "dependencies": [
    {"name": "vulkan-headers", "cmake_name": "VulkanHeaders", "version": "1.3.250.0", "rootpath": "/conan/vk"},
    {"name": "glm", "cmake_name": "glm", "version": "cci.20230113", "rootpath": "/conan/glm"}
  ]
}"#
            .to_string(),
        }
    }

    /// Same packages, different order in each list
    pub fn reordered() -> Self {
        Self {
            content: r#"{
  "deps": ["glm", "vulkan-headers"],
  "dependencies": [
    {"name": "vulkan-headers", "cmake_name": "VulkanHeaders", "version": "1.3.250.0", "rootpath": "/conan/vk"},
    {"name": "glm", "cmake_name": "glm", "version": "cci.20230113", "rootpath": "/conan/glm"}
  ]
}"#
            .to_string(),
        }
    }

    pub fn write_to(&self, path: &Path) -> Result<()> {
        std::fs::write(path, &self.content)?;
        Ok(())
    }
}

/// A recipe directory with manifest and identity file.
pub struct TestProject {
    dir: TempDir,
}

impl TestProject {
    /// Project named `widget:1.2.3` using `manifest`.
    pub fn new(manifest: &ManifestFixture) -> Result<Self> {
        let dir = TempDir::new()?;
        manifest.write_to(dir.path())?;
        std::fs::write(dir.path().join(NAME_VERSION_FILE_NAME), "widget:1.2.3\n")?;
        Ok(Self { dir })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    #[must_use]
    pub fn manifest_path(&self) -> PathBuf {
        self.path().join(MANIFEST_FILE_NAME)
    }

    pub fn write_file(&self, relative: &str, content: &str) -> Result<PathBuf> {
        let path = self.path().join(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&path, content)?;
        Ok(path)
    }

    /// Write `graph` as `graph.json` and return its path.
    pub fn write_graph(&self, graph: &GraphFixture) -> Result<PathBuf> {
        let path = self.path().join("graph.json");
        graph.write_to(&path)?;
        Ok(path)
    }
}
