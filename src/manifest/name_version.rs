//! The `name-version.txt` identity file.
//!
//! One line holding the package name and version separated by a colon:
//!
//! ```text
//! widget:1.2.3
//! ```

use anyhow::Result;
use serde::Serialize;
use std::fmt;
use std::path::Path;

use crate::core::{CmdepsError, FileOperation, FileResultExt};

/// Package name and version read from the identity file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NameVersion {
    pub name: String,
    pub version: String,
}

impl NameVersion {
    /// Parse `name:version`.
    ///
    /// Both fields are trimmed and must be non-empty. A missing colon, a
    /// third field or a second non-empty line is rejected.
    pub fn parse(content: &str, origin: &str) -> Result<Self> {
        let lines: Vec<&str> =
            content.split(['\n', '\r']).filter(|line| !line.trim().is_empty()).collect();
        if lines.len() > 1 {
            return Err(CmdepsError::NameVersionParseError {
                file: origin.to_string(),
                reason: format!("expected a single 'name:version' line, found {} lines", lines.len()),
            }
            .into());
        }

        let line = lines.first().copied().unwrap_or_default();
        let fields: Vec<&str> = line.trim().split(':').map(str::trim).collect();

        let [name, version] = fields.as_slice() else {
            return Err(CmdepsError::NameVersionParseError {
                file: origin.to_string(),
                reason: format!(
                    "expected exactly two ':'-separated fields (name:version), found {}",
                    fields.len()
                ),
            }
            .into());
        };

        if name.is_empty() || version.is_empty() {
            return Err(CmdepsError::NameVersionParseError {
                file: origin.to_string(),
                reason: "name and version must both be non-empty".to_string(),
            }
            .into());
        }

        Ok(Self {
            name: (*name).to_string(),
            version: (*version).to_string(),
        })
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).with_file_context(
            FileOperation::Read,
            path,
            "reading package name and version",
            "manifest::name_version",
        )?;
        Self::parse(&content, &path.display().to_string())
    }
}

impl fmt::Display for NameVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.name, self.version)
    }
}
