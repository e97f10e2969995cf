//! Command-line interface for pomdeps.
//!
//! ```bash
//! pomdeps path/to/multi-module-project > dependencies.json
//! ```
//!
//! The single positional argument is the root directory to scan. The resolved
//! dependency report is written to stdout as JSON; diagnostics (missing parents,
//! unresolvable properties, broken descriptors) go to stderr so the report stays
//! machine-readable.
//!
//! # Exit status
//!
//! | Status | Meaning |
//! |--------|---------|
//! | 0 | every project resolved, or the arguments were wrong and usage was printed |
//! | 1 | at least one descriptor or project failed; the others are still reported |
//!
//! # Logging
//!
//! Warnings are shown by default. Set `RUST_LOG` (for example
//! `RUST_LOG=pomdeps_cli=debug`) to see linking and discovery details.


use crate::config::ResolverConfig;
use crate::core::user_friendly_error;
use crate::report::render_json;
use crate::resolver::{Resolution, resolve_directory};
use anyhow::{Context, Result};
use clap::Parser;
use std::io::{IsTerminal, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Resolve the dependencies of every pom.xml beneath a directory.
#[derive(Parser, Debug)]
#[command(
    name = "pomdeps",
    about = "Resolve Maven pom.xml dependency coordinates across a project tree",
    version,
    long_about = "Discovers every pom.xml beneath PATH, links modules to their parents, resolves \
                  ${...} property placeholders and prints each module's dependencies as JSON, \
                  with vulnerability database and artifact repository lookup URLs."
)]
pub struct Cli {
    /// Root directory to search for pom.xml files
    pub path: PathBuf,
}

impl Cli {
    /// Resolve `self.path` and write the report to stdout.
    ///
    /// Returns `Ok(true)` when every descriptor and project resolved.
    pub fn execute(&self) -> Result<bool> {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        self.execute_with_config(&ResolverConfig::default(), &mut out)
    }

    /// Resolve with an explicit configuration, writing the report to `out`.
    ///
    /// Per-project and per-descriptor failures are displayed on stderr and reflected
    /// in the returned flag; only run-level failures (missing root, write errors)
    /// are returned as errors.
    pub fn execute_with_config(&self, config: &ResolverConfig, out: &mut impl Write) -> Result<bool> {
        let resolution = resolve_directory(&self.path, config)?;

        let report = render_json(&resolution)?;
        writeln!(out, "{report}").context("Failed to write dependency report")?;
        out.flush().context("Failed to write dependency report")?;

        report_failures(&resolution);
        Ok(!resolution.has_failures())
    }
}

fn report_failures(resolution: &Resolution) {
    for failure in &resolution.descriptor_errors {
        let ctx = user_friendly_error(anyhow::Error::from(failure.error.clone()));
        ctx.display();
    }

    for project in &resolution.projects {
        if let Err(error) = &project.outcome {
            tracing::debug!("Resolution of {} failed", project.path.display());
            let ctx = user_friendly_error(anyhow::Error::from(error.clone()));
            ctx.display();
        }
    }
}

/// Install the stderr log subscriber.
///
/// Uses `RUST_LOG` when set, otherwise shows warnings only. Safe to call more than
/// once; later calls are ignored.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .try_init();
}

/// Parse arguments, printing usage on misuse.
///
/// Returns `None` when the process should stop without running: clap already
/// printed help, version or a usage message.
pub fn parse_args<I, T>(args: I) -> Option<Cli>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    match Cli::try_parse_from(args) {
        Ok(cli) => Some(cli),
        Err(e) => {
            let _ = e.print();
            None
        }
    }
}
