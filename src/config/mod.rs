//! Resolver configuration.
//!
//! pomdeps has no configuration file and reads no environment variables (apart from
//! `RUST_LOG`, which only filters log output). Everything that can vary between runs
//! is carried by an explicit [`ResolverConfig`] value, built from the defaults in
//! [`crate::constants`] and adjusted with builder methods. Tests use the builders to
//! point URLs at fake endpoints without touching global state.
//!
//! # Examples
//!
//! ```rust
//! use pomdeps_cli::config::ResolverConfig;
//!
//! let config = ResolverConfig::default()
//!     .with_vulnerability_base("https://vulns.example.com/")
//!     .with_repository_base("https://repo.example.com");
//!
//! assert_eq!(config.vulnerability_base(), "https://vulns.example.com");
//! assert_eq!(config.descriptor_name(), "pom.xml");
//! ```

use crate::constants::{
    DEFAULT_REPOSITORY_BASE_URL, DEFAULT_VULNERABILITY_BASE_URL, DESCRIPTOR_FILE_NAME,
};

/// Runtime settings for discovery and dependency URL construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolverConfig {
    vulnerability_base: String,
    repository_base: String,
    descriptor_name: String,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            vulnerability_base: DEFAULT_VULNERABILITY_BASE_URL.to_string(),
            repository_base: DEFAULT_REPOSITORY_BASE_URL.to_string(),
            descriptor_name: DESCRIPTOR_FILE_NAME.to_string(),
        }
    }
}

impl ResolverConfig {
    /// Create a configuration with the compiled-in defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the vulnerability database endpoint. Trailing slashes are dropped.
    #[must_use]
    pub fn with_vulnerability_base(mut self, base: impl Into<String>) -> Self {
        self.vulnerability_base = normalize_base(base.into());
        self
    }

    /// Override the artifact repository endpoint. Trailing slashes are dropped.
    #[must_use]
    pub fn with_repository_base(mut self, base: impl Into<String>) -> Self {
        self.repository_base = normalize_base(base.into());
        self
    }

    /// Override the descriptor file name that discovery matches exactly.
    #[must_use]
    pub fn with_descriptor_name(mut self, name: impl Into<String>) -> Self {
        self.descriptor_name = name.into();
        self
    }

    /// Vulnerability database endpoint, without trailing slash.
    pub fn vulnerability_base(&self) -> &str {
        &self.vulnerability_base
    }

    /// Artifact repository endpoint, without trailing slash.
    pub fn repository_base(&self) -> &str {
        &self.repository_base
    }

    /// File name of the descriptors to discover.
    pub fn descriptor_name(&self) -> &str {
        &self.descriptor_name
    }
}

fn normalize_base(base: String) -> String {
    base.trim_end_matches('/').to_string()
}
