//! Error handling for cmdeps
//!
//! This module provides the error types and user-facing error reporting for
//! recipe evaluation. The error system follows two rules:
//! 1. **Strongly-typed errors** so callers and tests can match on the failure
//! 2. **User-friendly messages** with a suggestion for CLI users
//!
//! # Error Categories
//!
//! - **Configuration**: [`CmdepsError::InvalidOption`], [`CmdepsError::NameVersionParseError`],
//!   [`CmdepsError::ManifestNotFound`], [`CmdepsError::ManifestParseError`]
//! - **Resolution consistency**: [`CmdepsError::ResolutionInconsistent`]
//! - **I/O**: [`CmdepsError::FileSystemError`], plus [`super::FileOperationError`] in the chain
//! - **Inputs and outputs**: [`CmdepsError::GraphParseError`], [`CmdepsError::RenderError`]
//!
//! Every category is fatal. Use [`user_friendly_error`] at the CLI boundary to turn
//! any `anyhow::Error` into an [`ErrorContext`] with a suggestion.
//!
//! # Examples
//!
//! ```rust,no_run
//! use cmdeps_cli::core::{CmdepsError, ErrorContext};
//!
//! let error = CmdepsError::InvalidOption {
//!     option: "shared".to_string(),
//!     reason: "expected a boolean, got 'maybe'".to_string(),
//! };
//! let context = ErrorContext::new(error)
//!     .with_suggestion("Use True or False for boolean options");
//!
//! context.display();
//! ```

use colored::Colorize;
use std::fmt;
use thiserror::Error;

use super::file_error::FileOperationError;

/// The main error type for cmdeps operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CmdepsError {
    /// A recipe option has an unknown name or a value that cannot be parsed.
    #[error("Invalid value for option '{option}': {reason}")]
    InvalidOption {
        /// Name of the offending option
        option: String,
        /// What was wrong with it
        reason: String,
    },

    /// A recipe setting (`os`, `arch`, ...) is unknown or malformed.
    #[error("Invalid setting '{setting}': {reason}")]
    InvalidSetting {
        /// Name of the offending setting
        setting: String,
        /// What was wrong with it
        reason: String,
    },

    /// The name/version source is not a single `name:version` pair.
    #[error("Malformed name/version source in {file}: {reason}")]
    NameVersionParseError {
        /// Path of the source file
        file: String,
        /// What was wrong with it
        reason: String,
    },

    #[error("Manifest file cmdeps.toml not found in current directory or any parent directory")]
    ManifestNotFound,

    #[error("Invalid manifest file syntax in {file}")]
    ManifestParseError {
        /// Path of the manifest
        file: String,
        /// Parser message
        reason: String,
    },

    /// The resolver's identifier list and its record list disagree.
    ///
    /// Raised by the metadata exporter before anything is written.
    #[error("Resolved dependency lists are inconsistent: {reason}")]
    ResolutionInconsistent {
        /// Which index or length disagreed
        reason: String,
    },

    #[error("Invalid resolved dependency graph in {file}")]
    GraphParseError {
        /// Path of the graph file
        file: String,
        /// Parser message
        reason: String,
    },

    #[error("Failed to render {template}: {reason}")]
    RenderError {
        /// Name of the template being rendered
        template: String,
        /// Renderer message
        reason: String,
    },

    #[error("File system error: {operation}")]
    FileSystemError {
        /// What was being attempted
        operation: String,
        /// Path involved
        path: String,
    },

    #[error("{message}")]
    Other {
        /// Free-form message
        message: String,
    },
}

/// Error wrapper carrying a suggestion and details for display.
#[derive(Debug)]
pub struct ErrorContext {
    /// The underlying error
    pub error: CmdepsError,
    /// What the user can do about it
    pub suggestion: Option<String>,
    /// Extra background
    pub details: Option<String>,
}

impl ErrorContext {
    #[must_use]
    pub const fn new(error: CmdepsError) -> Self {
        Self {
            error,
            suggestion: None,
            details: None,
        }
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Print the error to stderr with colors.
    pub fn display(&self) {
        eprintln!("{}: {}", "error".red().bold(), self.error);

        if let Some(details) = &self.details {
            eprintln!("{}: {}", "details".yellow(), details);
        }

        if let Some(suggestion) = &self.suggestion {
            eprintln!("{}: {}", "suggestion".green(), suggestion);
        }
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.error)?;

        if let Some(details) = &self.details {
            write!(f, "\nDetails: {details}")?;
        }

        if let Some(suggestion) = &self.suggestion {
            write!(f, "\nSuggestion: {suggestion}")?;
        }

        Ok(())
    }
}

impl std::error::Error for ErrorContext {}

/// Convert any error into an [`ErrorContext`] with a suggestion.
///
/// Known [`CmdepsError`] values anywhere in the chain get a tailored
/// suggestion. Everything else keeps its full cause chain in the message.
#[must_use]
pub fn user_friendly_error(error: anyhow::Error) -> ErrorContext {
    let chain_message = describe_chain(&error);

    for cause in error.chain() {
        if let Some(cmdeps_error) = cause.downcast_ref::<CmdepsError>() {
            let mut context = create_error_context(cmdeps_error.clone());
            if context.details.is_none() && error.chain().count() > 1 {
                context.details = Some(chain_message);
            }
            return context;
        }
    }

    if let Some(file_error) =
        error.chain().find_map(|cause| cause.downcast_ref::<FileOperationError>())
    {
        return create_error_context(CmdepsError::FileSystemError {
            operation: file_error.operation.to_string(),
            path: file_error.file_path.display().to_string(),
        })
        .with_details(file_error.user_message());
    }

    if let Some(io_error) = error.downcast_ref::<std::io::Error>() {
        if io_error.kind() == std::io::ErrorKind::PermissionDenied {
            return ErrorContext::new(CmdepsError::FileSystemError {
                operation: "file access".to_string(),
                path: "unknown".to_string(),
            })
            .with_suggestion("Check file ownership and permissions of the output directory")
            .with_details(chain_message);
        }
    }

    ErrorContext::new(CmdepsError::Other {
        message: chain_message,
    })
}

fn describe_chain(error: &anyhow::Error) -> String {
    let mut message = error.to_string();
    let chain: Vec<String> =
        error.chain().skip(1).map(std::string::ToString::to_string).collect();

    if !chain.is_empty() {
        message.push_str("\n\nCaused by:");
        for (i, cause) in chain.iter().enumerate() {
            message.push_str(&format!("\n  {}: {}", i + 1, cause));
        }
    }

    message
}

fn create_error_context(error: CmdepsError) -> ErrorContext {
    match &error {
        CmdepsError::InvalidOption { option, .. } => {
            let suggestion = match option.as_str() {
                "vulkan_reference" | "gtest_reference" => {
                    "Use a 'name/version' reference such as 'vulkan-headers/1.3.231.1', or 'None' to drop the requirement"
                }
                "shared" | "interface" | "dependencies" => "Use True or False for boolean options",
                _ => "Known options are: shared, interface, dependencies, vulkan_reference, gtest_reference",
            };
            ErrorContext::new(error)
                .with_suggestion(suggestion)
                .with_details("Option errors abort evaluation before any dependency is selected")
        }
        CmdepsError::InvalidSetting { .. } => ErrorContext::new(error)
            .with_suggestion("Known settings are: os, arch, compiler, build_type"),
        CmdepsError::NameVersionParseError { .. } => ErrorContext::new(error)
            .with_suggestion("The file must contain a single 'name:version' line, e.g. 'widget:1.2.3'"),
        CmdepsError::ManifestNotFound => ErrorContext::new(error)
            .with_suggestion("Create a cmdeps.toml file in your project directory or pass --manifest-path")
            .with_details("cmdeps looks for cmdeps.toml in the current directory and parent directories up to the filesystem root"),
        CmdepsError::ManifestParseError { .. } => ErrorContext::new(error)
            .with_suggestion("Check the TOML syntax in cmdeps.toml. Verify quotes, brackets, and section names"),
        CmdepsError::ResolutionInconsistent { .. } => ErrorContext::new(error)
            .with_suggestion("Regenerate the resolved graph; every entry in 'deps' needs a matching record at the same position in 'dependencies'")
            .with_details("No variable file was written"),
        CmdepsError::GraphParseError { .. } => ErrorContext::new(error)
            .with_suggestion("The graph must be JSON with 'deps' and 'dependencies' arrays"),
        CmdepsError::RenderError { .. } => ErrorContext::new(error)
            .with_details("No variable file was written"),
        CmdepsError::FileSystemError { path, .. } => {
            let suggestion = format!("Check that '{path}' exists and is writable");
            ErrorContext::new(error).with_suggestion(suggestion)
        }
        CmdepsError::Other { .. } => ErrorContext::new(error),
    }
}
