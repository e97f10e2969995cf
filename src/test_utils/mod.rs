//! Test utilities for pomdeps
//!
//! Helpers shared by unit tests and the integration suite: one-time logging setup and
//! builders that write `pom.xml` trees into temporary directories.
//!
//! # Example
//!
//! ```rust,no_run
//! use pomdeps_cli::test_utils::PomBuilder;
//!
//! let temp = tempfile::tempdir().unwrap();
//! PomBuilder::new("base").group("org.acme").version("1.0").write_to(temp.path()).unwrap();
//! ```

pub mod fixtures;

pub use fixtures::{DependencyFixture, PomBuilder};

use std::sync::Once;
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Global flag to ensure logging is only initialized once in tests
static INIT_LOGGING: Once = Once::new();

/// Initialize logging for tests.
///
/// Respects `RUST_LOG` when set, otherwise uses `level`. Does nothing when neither is
/// provided.
///
/// ```bash
/// RUST_LOG=pomdeps_cli=trace cargo test
/// ```
pub fn init_test_logging(level: Option<Level>) {
    INIT_LOGGING.call_once(|| {
        let filter = if let Some(level) = level {
            EnvFilter::new(level.to_string())
        } else if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else {
            return;
        };

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer() // Important: uses test-compatible writer
            .with_target(true)
            .with_thread_ids(false)
            .try_init();
    });
}
