//! Test utilities for cmdeps
//!
//! Fixtures for manifests, identity files and resolver graphs, plus a
//! [`TestProject`] that lays them out in a temporary directory. Available to
//! unit tests and, through the `test-utils` feature, to integration tests.
//!
//! ```rust,no_run
//! use cmdeps_cli::test_utils::{ManifestFixture, TestProject};
//!
//! let project = TestProject::new(&ManifestFixture::consumer()).unwrap();
//! assert!(project.path().join("cmdeps.toml").exists());
//! ```

pub mod fixtures;

pub use fixtures::{GraphFixture, ManifestFixture, TestProject};

use std::sync::Once;
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Global flag to ensure logging is only initialized once in tests
static INIT_LOGGING: Once = Once::new();

/// Initialize logging for tests.
///
/// Uses `level` when given, otherwise `RUST_LOG`. With neither, tests run
/// without a subscriber.
///
/// ```bash
/// RUST_LOG=debug cargo test
/// ```
pub fn init_test_logging(level: Option<Level>) {
    INIT_LOGGING.call_once(|| {
        let filter = if let Some(level) = level {
            EnvFilter::new(level.to_string())
        } else if std::env::var(crate::constants::LOG_ENV_VAR).is_ok() {
            EnvFilter::from_default_env()
        } else {
            return;
        };

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .with_target(true)
            .try_init();
    });
}
