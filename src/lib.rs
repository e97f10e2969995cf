//! pomdeps - Maven dependency coordinate resolver
//!
//! Discovers every `pom.xml` in a directory tree, links modules to their parents,
//! resolves `${...}` property placeholders (including `${project.*}` and properties
//! inherited from ancestor descriptors), and reports each module's dependencies as
//! concrete `maven:<group>:<artifact>@<version>` identifiers with vulnerability
//! database and artifact repository lookup URLs.
//!
//! # Architecture Overview
//!
//! Resolution is a two-phase pipeline:
//! 1. **Parse all**: [`utils::fs::find_descriptors`] finds descriptors and
//!    [`pom::parse_file`] turns each into a [`pom::Project`]
//! 2. **Link and resolve all**: the [`resolver`] registers the projects, links parents,
//!    back-fills inherited coordinates, then resolves each project's dependencies
//!
//! The [`report`] module renders the result as JSON for the CLI.
//!
//! # Core Modules
//!
//! - [`pom`] - project model, identifiers and `pom.xml` parsing
//! - [`resolver`] - registry, inheritance linking, property and dependency resolution
//! - [`report`] - JSON output
//! - [`cli`] - command-line interface
//!
//! ## Supporting Modules
//! - [`config`] - endpoints and descriptor name used by a run
//! - [`constants`] - default endpoints and reserved names
//! - [`core`] - error types and user-friendly error display
//! - [`utils`] - file discovery
//!
//! # Example
//!
//! ```rust,no_run
//! use pomdeps_cli::config::ResolverConfig;
//! use pomdeps_cli::report::render_json;
//! use pomdeps_cli::resolver::resolve_directory;
//! use std::path::Path;
//!
//! # fn main() -> Result<(), pomdeps_cli::core::PomError> {
//! let resolution = resolve_directory(Path::new("my-project"), &ResolverConfig::default())?;
//! println!("{}", render_json(&resolution)?);
//! # Ok(())
//! # }
//! ```
//!
//! # Command-Line Usage
//!
//! ```bash
//! pomdeps path/to/project
//! ```

// Core functionality modules
pub mod cli;
pub mod core;
pub mod pom;
pub mod report;
pub mod resolver;

// Supporting modules
pub mod config;
pub mod constants;
pub mod utils;

// test_utils module is available for both unit tests and integration tests
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
