//! Small cross-cutting helpers.
//!
//! - [`fs`] - Directory creation and atomic file writes

pub mod fs;

pub use fs::{atomic_write, ensure_dir};
