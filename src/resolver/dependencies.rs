//! Dependency resolution.
//!
//! Resolves every `<dependency>` of a project (regular entries first, then
//! `<dependencyManagement>` entries) into a [`ResolvedDependency`]: a normalized
//! identifier plus lookup URLs for the vulnerability database and the artifact
//! repository.
//!
//! Resolution is fail-fast per project: the first field that cannot be resolved
//! aborts the whole list for that project.

use super::properties::PropertyResolver;
use super::registry::{ProjectId, ProjectRegistry};
use crate::config::ResolverConfig;
use crate::core::PomError;
use crate::pom::{DependencyDeclaration, make_identifier};
use serde::Serialize;

/// A dependency with every placeholder substituted.
///
/// Serializes with the fields in declaration order:
/// `identifier`, `scope`, `type`, `snyk_url`, `maven_url`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedDependency {
    pub identifier: String,
    pub scope: String,
    #[serde(rename = "type")]
    pub dep_type: String,
    /// Vulnerability database lookup.
    pub snyk_url: String,
    /// Artifact repository lookup.
    pub maven_url: String,
}

/// Vulnerability lookup URL: `<base>/<identifier>`.
///
/// ```rust
/// use pomdeps_cli::resolver::vulnerability_url;
///
/// assert_eq!(
///     vulnerability_url("https://snyk.io/vuln", "maven:junit:junit@4.13.2"),
///     "https://snyk.io/vuln/maven:junit:junit@4.13.2"
/// );
/// ```
#[must_use]
pub fn vulnerability_url(base: &str, identifier: &str) -> String {
    format!("{base}/{identifier}")
}

/// Artifact repository URL: `<base>/<identifier as a path>`.
///
/// The first two `:` and every `@` of the identifier become `/`.
///
/// ```rust
/// use pomdeps_cli::resolver::repository_url;
///
/// assert_eq!(
///     repository_url("https://mvnrepository.com/artifact", "maven:junit:junit@4.13.2"),
///     "https://mvnrepository.com/artifact/maven/junit/junit/4.13.2"
/// );
/// ```
#[must_use]
pub fn repository_url(base: &str, identifier: &str) -> String {
    format!("{base}/{}", identifier.replacen(':', "/", 2).replace('@', "/"))
}

/// Resolves dependency declarations of linked projects.
#[derive(Debug, Clone, Copy)]
pub struct DependencyResolver<'a> {
    registry: &'a ProjectRegistry,
    properties: PropertyResolver<'a>,
    config: &'a ResolverConfig,
}

impl<'a> DependencyResolver<'a> {
    pub fn new(registry: &'a ProjectRegistry, config: &'a ResolverConfig) -> Self {
        Self {
            registry,
            properties: PropertyResolver::new(registry),
            config,
        }
    }

    /// Resolve all declarations of `project`, dependency-management entries last.
    pub fn resolve_dependencies(&self, project: ProjectId) -> Result<Vec<ResolvedDependency>, PomError> {
        let resolved = self
            .registry
            .get(project)
            .all_declarations()
            .map(|declaration| self.resolve_declaration(project, declaration))
            .collect::<Result<Vec<_>, _>>()?;

        tracing::debug!(
            "Resolved {} dependencies of {}",
            resolved.len(),
            self.registry.get(project).identifier()
        );
        Ok(resolved)
    }

    /// Resolve the five fields of one declaration against `project`.
    pub fn resolve_declaration(
        &self,
        project: ProjectId,
        declaration: &DependencyDeclaration,
    ) -> Result<ResolvedDependency, PomError> {
        let resolve = |raw: &str| self.properties.resolve(project, raw);

        let group_id = resolve(&declaration.group_id)?;
        let artifact_id = resolve(&declaration.artifact_id)?;
        let version = resolve(&declaration.version)?;
        let scope = resolve(&declaration.scope)?;
        let dep_type = resolve(&declaration.dep_type)?;

        let identifier = make_identifier(&group_id, &artifact_id, &version);
        Ok(ResolvedDependency {
            snyk_url: vulnerability_url(self.config.vulnerability_base(), &identifier),
            maven_url: repository_url(self.config.repository_base(), &identifier),
            identifier,
            scope,
            dep_type,
        })
    }
}
