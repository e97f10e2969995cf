//! Placeholder resolution.
//!
//! Substitutes `${name}` placeholders in a raw descriptor value. For each placeholder,
//! left to right:
//!
//! 1. `${project.<attr>}` reads `groupId`, `artifactId`, `version` or `packaging` of the
//!    project the value belongs to. Nothing else is consulted, and an unknown
//!    attribute fails with [`PomError::ProjectAttributeNotFound`].
//! 2. A property of the current project is substituted. Placeholders inside the
//!    property's own value are resolved in the same pass.
//! 3. Otherwise, when the current project has a parent, the *whole* raw value is
//!    handed to the parent and the parent's result is returned as is.
//! 4. Otherwise the placeholder fails with [`PomError::PropertyNotFound`].
//!
//! Names are matched case-insensitively. Substituted text is never rescanned for
//! placeholders, except through the property expansion of step 2.
//!
//! # Cycles
//!
//! The linker does not reject parent cycles, and properties may refer to one another.
//! The resolver keeps the chain of projects it delegated through and the properties it
//! is expanding; revisiting either fails with [`PomError::PropertyCycle`] instead of
//! recursing forever.

use super::registry::{ProjectId, ProjectRegistry};
use crate::constants::PROJECT_PROPERTY_PREFIX;
use crate::core::PomError;
use crate::pom::ProjectAttribute;
use regex::Regex;
use std::sync::LazyLock;

static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{.*?\}").expect("placeholder pattern is valid"));

/// Resolves placeholders against projects of a linked registry.
#[derive(Debug, Clone, Copy)]
pub struct PropertyResolver<'a> {
    registry: &'a ProjectRegistry,
}

/// Bookkeeping for one top-level [`PropertyResolver::resolve`] call.
struct Scope {
    /// Project whose value is being resolved; answers `${project.*}`.
    origin: ProjectId,
    /// Projects the raw value has been delegated through, origin first.
    delegation: Vec<ProjectId>,
    /// Properties currently being expanded.
    expanding: Vec<(ProjectId, String)>,
}

enum Lookup {
    Value(String),
    Delegate(ProjectId),
}

impl<'a> PropertyResolver<'a> {
    pub fn new(registry: &'a ProjectRegistry) -> Self {
        Self {
            registry,
        }
    }

    /// Resolve every placeholder in `raw` for `project`.
    ///
    /// # Errors
    ///
    /// - [`PomError::ProjectAttributeNotFound`] for `${project.x}` with an unknown `x`
    /// - [`PomError::PropertyNotFound`] when no project in the chain defines a name
    /// - [`PomError::PropertyCycle`] when delegation or expansion loops
    pub fn resolve(&self, project: ProjectId, raw: &str) -> Result<String, PomError> {
        let mut scope = Scope {
            origin: project,
            delegation: vec![project],
            expanding: Vec::new(),
        };
        self.resolve_in(project, raw, &mut scope)
    }

    fn resolve_in(&self, current: ProjectId, raw: &str, scope: &mut Scope) -> Result<String, PomError> {
        let mut resolved = String::with_capacity(raw.len());
        let mut last = 0;

        for placeholder in PLACEHOLDER.find_iter(raw) {
            resolved.push_str(&raw[last..placeholder.start()]);
            match self.lookup(current, placeholder.as_str(), scope)? {
                Lookup::Value(value) => resolved.push_str(&value),
                Lookup::Delegate(parent) => return self.delegate(parent, raw, scope),
            }
            last = placeholder.end();
        }

        resolved.push_str(&raw[last..]);
        Ok(resolved)
    }

    fn lookup(&self, current: ProjectId, placeholder: &str, scope: &mut Scope) -> Result<Lookup, PomError> {
        let name = placeholder[2..placeholder.len() - 1].to_lowercase();

        if let Some(attribute) = name.strip_prefix(PROJECT_PROPERTY_PREFIX) {
            let origin = &self.registry.get(scope.origin).coordinates;
            return match ProjectAttribute::from_name(attribute) {
                Some(attr) => Ok(Lookup::Value(origin.attribute(attr).to_string())),
                None => Err(PomError::ProjectAttributeNotFound {
                    attribute: attribute.to_string(),
                    project: origin.identifier(),
                }),
            };
        }

        if let Some(value) = self.registry.get(current).property(&name) {
            tracing::trace!("{} -> {:?} in {}", placeholder, value, self.registry.get(current).identifier());
            return self.expand(current, name, value, scope).map(Lookup::Value);
        }

        match self.registry.parent_of(current) {
            Some(parent) => Ok(Lookup::Delegate(parent)),
            None => Err(PomError::PropertyNotFound {
                property: placeholder.to_string(),
                project: self.registry.get(scope.origin).identifier(),
            }),
        }
    }

    fn expand(&self, current: ProjectId, name: String, value: &str, scope: &mut Scope) -> Result<String, PomError> {
        if scope.expanding.iter().any(|(project, active)| *project == current && *active == name) {
            let mut chain: Vec<String> =
                scope.expanding.iter().map(|(_, active)| format!("${{{active}}}")).collect();
            chain.push(format!("${{{name}}}"));
            return Err(self.cycle(chain, scope));
        }

        scope.expanding.push((current, name));
        let expanded = self.resolve_in(current, value, scope);
        scope.expanding.pop();
        expanded
    }

    fn delegate(&self, parent: ProjectId, raw: &str, scope: &mut Scope) -> Result<String, PomError> {
        if scope.delegation.contains(&parent) {
            let mut chain: Vec<String> =
                scope.delegation.iter().map(|id| self.registry.get(*id).identifier()).collect();
            chain.push(self.registry.get(parent).identifier());
            return Err(self.cycle(chain, scope));
        }

        tracing::trace!("Delegating {:?} to {}", raw, self.registry.get(parent).identifier());
        scope.delegation.push(parent);
        let resolved = self.resolve_in(parent, raw, scope);
        scope.delegation.pop();
        resolved
    }

    fn cycle(&self, chain: Vec<String>, scope: &Scope) -> PomError {
        PomError::PropertyCycle {
            chain: chain.join(" -> "),
            project: self.registry.get(scope.origin).identifier(),
        }
    }
}
