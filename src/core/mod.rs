//! Core types and error handling for cmdeps.
//!
//! - [`error`] - the [`CmdepsError`] enum and user-facing [`ErrorContext`]
//! - [`file_error`] - file operation context for I/O failures
//! - [`stage`] - the logging error boundary each pipeline stage runs inside

pub mod error;
pub mod file_error;
pub mod stage;

pub use error::{CmdepsError, ErrorContext, user_friendly_error};
pub use file_error::{FileOperation, FileOperationError, FileResultExt};
pub use stage::{Stage, run_stage};
