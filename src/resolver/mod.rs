//! Dependency resolution across a tree of `pom.xml` descriptors.
//!
//! Resolution runs in two phases. Every descriptor is parsed and registered first;
//! only then are projects linked to their parents and their dependencies resolved.
//! The registry's membership is therefore fixed while resolution reads it.
//!
//! # Components
//!
//! - [`registry`] - owns the projects and their parent/child links
//! - [`linker`] - matches `<parent>` references, back-fills group and version
//! - [`properties`] - substitutes `${...}` placeholders along the parent chain
//! - [`dependencies`] - turns declarations into [`ResolvedDependency`] records
//!
//! # Failure model
//!
//! A missing parent is logged and otherwise ignored. A placeholder that cannot be
//! resolved fails the whole project it belongs to, but never the run: each project's
//! outcome is collected in its [`ProjectResolution`], so one broken module does not
//! hide the results of the others. Descriptors that cannot be parsed are collected in
//! [`Resolution::descriptor_errors`] and skipped.
//!
//! # Example
//!
//! ```rust,no_run
//! use pomdeps_cli::config::ResolverConfig;
//! use pomdeps_cli::resolver::resolve_directory;
//! use std::path::Path;
//!
//! # fn example() -> Result<(), pomdeps_cli::core::PomError> {
//! let resolution = resolve_directory(Path::new("."), &ResolverConfig::default())?;
//! for project in resolution.successes() {
//!     println!("{}: {} dependencies", project.0, project.1.len());
//! }
//! # Ok(())
//! # }
//! ```

pub mod dependencies;
pub mod linker;
pub mod properties;
pub mod registry;


pub use dependencies::{DependencyResolver, ResolvedDependency, repository_url, vulnerability_url};
pub use linker::{LinkReport, UnresolvedParent, link_all};
pub use properties::PropertyResolver;
pub use registry::{ProjectId, ProjectRegistry};

use crate::config::ResolverConfig;
use crate::core::PomError;
use crate::pom::{Project, parse_file};
use crate::utils::fs::find_descriptors;
use std::path::{Path, PathBuf};

/// Result of resolving one project.
#[derive(Debug)]
pub struct ProjectResolution {
    /// Project identifier after linking (back-filled coordinates included).
    pub identifier: String,
    /// Descriptor the project was parsed from.
    pub path: PathBuf,
    pub outcome: Result<Vec<ResolvedDependency>, PomError>,
}

/// A descriptor that could not be turned into a project.
#[derive(Debug)]
pub struct DescriptorError {
    pub path: PathBuf,
    pub error: PomError,
}

/// Everything a run produced, in discovery order.
#[derive(Debug, Default)]
pub struct Resolution {
    pub projects: Vec<ProjectResolution>,
    pub unresolved_parents: Vec<UnresolvedParent>,
    pub descriptor_errors: Vec<DescriptorError>,
}

impl Resolution {
    /// Projects that resolved, as `(identifier, dependencies)`.
    pub fn successes(&self) -> impl Iterator<Item = (&str, &[ResolvedDependency])> {
        self.projects.iter().filter_map(|project| match &project.outcome {
            Ok(deps) => Some((project.identifier.as_str(), deps.as_slice())),
            Err(_) => None,
        })
    }

    /// Projects that failed, as `(identifier, error)`.
    pub fn failures(&self) -> impl Iterator<Item = (&str, &PomError)> {
        self.projects.iter().filter_map(|project| match &project.outcome {
            Ok(_) => None,
            Err(e) => Some((project.identifier.as_str(), e)),
        })
    }

    /// Whether any project or descriptor failed.
    pub fn has_failures(&self) -> bool {
        !self.descriptor_errors.is_empty() || self.projects.iter().any(|p| p.outcome.is_err())
    }
}

/// Links and resolves a fixed set of projects.
#[derive(Debug)]
pub struct WorkspaceResolver {
    registry: ProjectRegistry,
    config: ResolverConfig,
}

impl WorkspaceResolver {
    /// Create an empty workspace.
    pub fn new(config: ResolverConfig) -> Self {
        Self {
            registry: ProjectRegistry::new(),
            config,
        }
    }

    /// Create a workspace holding `projects` in the given order.
    pub fn from_projects(projects: impl IntoIterator<Item = Project>, config: ResolverConfig) -> Self {
        let mut workspace = Self::new(config);
        for project in projects {
            workspace.register(project);
        }
        workspace
    }

    /// Add a project. All projects must be registered before [`resolve`](Self::resolve).
    pub fn register(&mut self, project: Project) -> ProjectId {
        self.registry.register(project)
    }

    pub fn registry(&self) -> &ProjectRegistry {
        &self.registry
    }

    /// Link every project, then resolve each project's dependencies.
    pub fn resolve(mut self) -> Resolution {
        let link_report = link_all(&mut self.registry);
        let resolver = DependencyResolver::new(&self.registry, &self.config);

        let projects = self
            .registry
            .iter()
            .map(|(id, project)| ProjectResolution {
                identifier: project.identifier(),
                path: project.path.clone(),
                outcome: resolver.resolve_dependencies(id),
            })
            .collect();

        Resolution {
            projects,
            unresolved_parents: link_report.unresolved,
            descriptor_errors: Vec::new(),
        }
    }
}

/// Discover, parse and resolve every descriptor beneath `root`.
///
/// # Errors
///
/// Only [`PomError::RootNotFound`]; per-descriptor and per-project failures are
/// collected in the returned [`Resolution`].
pub fn resolve_directory(root: &Path, config: &ResolverConfig) -> Result<Resolution, PomError> {
    let paths = find_descriptors(root, config.descriptor_name())?;

    let mut workspace = WorkspaceResolver::new(config.clone());
    let mut descriptor_errors = Vec::new();
    for path in paths {
        match parse_file(&path) {
            Ok(project) => {
                workspace.register(project);
            }
            Err(error) => {
                tracing::debug!("Skipping {}: {}", path.display(), error);
                descriptor_errors.push(DescriptorError {
                    path,
                    error,
                });
            }
        }
    }

    let mut resolution = workspace.resolve();
    resolution.descriptor_errors = descriptor_errors;
    Ok(resolution)
}
