//! Global constants used throughout the pomdeps codebase.
//!
//! Endpoints, file names and identifier prefixes live here so the resolver,
//! configuration and tests agree on them.

/// File name of the build descriptors that are discovered and parsed.
pub const DESCRIPTOR_FILE_NAME: &str = "pom.xml";

/// Scheme prefix of every project and dependency identifier.
pub const IDENTIFIER_SCHEME: &str = "maven";

/// Default vulnerability database endpoint (`snyk_url` field).
pub const DEFAULT_VULNERABILITY_BASE_URL: &str = "https://snyk.io/vuln";

/// Default artifact repository endpoint (`maven_url` field).
pub const DEFAULT_REPOSITORY_BASE_URL: &str = "https://mvnrepository.com/artifact";

/// Reserved placeholder prefix that reads the project's own coordinates.
///
/// Compared against lowercased placeholder names.
pub const PROJECT_PROPERTY_PREFIX: &str = "project.";
