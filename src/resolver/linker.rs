//! Inheritance linking.
//!
//! Matches each project's `<parent>` reference against the registry and wires the
//! parent/child links the property resolver walks. When a parent is found, an empty
//! `groupId` or `version` on the child is copied from the parent's current coordinates,
//! once, before any dependency is resolved.
//!
//! A parent that cannot be found is not an error: the project is logged and treated as
//! parent-less, so only lookups that actually need an inherited property fail later.
//! Parent cycles are not detected here; the property resolver guards against them.

use super::registry::{ProjectId, ProjectRegistry};

/// A parent reference that matched no registered project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnresolvedParent {
    /// Identifier of the project declaring the parent.
    pub project: String,
    /// Identifier the parent was expected to have.
    pub parent: String,
}

/// Outcome of linking a registry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkReport {
    /// `(child, parent)` pairs that were wired, in linking order.
    pub linked: Vec<(ProjectId, ProjectId)>,
    pub unresolved: Vec<UnresolvedParent>,
}

/// Link every registered project to its parent, in registration order.
///
/// Identifiers are computed from current coordinates, so a parent that inherits its own
/// group or version only becomes matchable once it has been linked. Projects left
/// unresolved are retried until a pass links nothing new; whatever remains is warned
/// about and reported.
pub fn link_all(registry: &mut ProjectRegistry) -> LinkReport {
    let mut report = LinkReport::default();
    let mut pending: Vec<ProjectId> = registry.ids().collect();

    loop {
        let mut unresolved = Vec::new();
        let mut progressed = false;
        for id in pending {
            match link_project(registry, id) {
                LinkOutcome::Linked(parent) => {
                    report.linked.push((id, parent));
                    progressed = true;
                }
                LinkOutcome::Unresolved(missing) => unresolved.push((id, missing)),
                LinkOutcome::NoParent | LinkOutcome::AlreadyLinked => {}
            }
        }

        if !progressed || unresolved.is_empty() {
            report.unresolved = unresolved.into_iter().map(|(_, missing)| missing).collect();
            break;
        }
        pending = unresolved.into_iter().map(|(id, _)| id).collect();
    }

    for missing in &report.unresolved {
        tracing::warn!(
            "\"{}\" cannot find parent in pom files with id \"{}\"",
            missing.project,
            missing.parent
        );
    }

    for identifier in registry.duplicate_identifiers() {
        tracing::debug!("Duplicate project identifier {}; the first registration wins lookups", identifier);
    }

    tracing::debug!(
        "Linked {} of {} projects ({} unresolved parents)",
        report.linked.len(),
        registry.len(),
        report.unresolved.len()
    );
    report
}

/// Result of linking a single project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkOutcome {
    /// The project declares no `<parent>`.
    NoParent,
    /// The project was linked on an earlier call; nothing changed.
    AlreadyLinked,
    Linked(ProjectId),
    Unresolved(UnresolvedParent),
}

/// Link one project to its declared parent and back-fill its coordinates.
///
/// Does not log a missing parent; [`link_all`] warns once its retries are exhausted.
pub fn link_project(registry: &mut ProjectRegistry, id: ProjectId) -> LinkOutcome {
    if registry.parent_of(id).is_some() {
        return LinkOutcome::AlreadyLinked;
    }
    let Some(parent_ref) = registry.get(id).parent_ref.as_ref() else {
        return LinkOutcome::NoParent;
    };
    let expected = parent_ref.identifier();

    // A project never becomes its own parent
    let found = registry
        .iter()
        .find(|(candidate, project)| *candidate != id && project.identifier() == expected)
        .map(|(candidate, _)| candidate);

    let Some(parent) = found else {
        return LinkOutcome::Unresolved(UnresolvedParent {
            project: registry.get(id).identifier(),
            parent: expected,
        });
    };

    registry.set_parent(id, parent);

    let parent_coordinates = registry.get(parent).coordinates.clone();
    let child = &mut registry.get_mut(id).coordinates;
    if child.group_id.is_empty() {
        child.group_id = parent_coordinates.group_id;
    }
    if child.version.is_empty() {
        child.version = parent_coordinates.version;
    }

    tracing::debug!("Linked {} to parent {}", registry.get(id).identifier(), expected);
    LinkOutcome::Linked(parent)
}
